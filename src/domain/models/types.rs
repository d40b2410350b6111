//--------------------------------------------------------------------------------------------------
// MODULE OVERVIEW
//--------------------------------------------------------------------------------------------------
// This module defines the core records of the ticketing service: events, the tickets issued for
// them, the joined view handed back to attendees, and the raw inputs the services validate.
//
// | Section            | Description                                                      |
// |--------------------|------------------------------------------------------------------|
// | STRUCTS            | Event, Ticket, EventSummary, RegisteredTicket                    |
// | INPUTS             | NewEvent, NewRegistration (unvalidated caller input)             |
// | TESTS              | Unit tests for the defined types.                                |
//--------------------------------------------------------------------------------------------------

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

//--------------------------------------------------------------------------------------------------
//  STRUCTS
//--------------------------------------------------------------------------------------------------
// | Name             | Description                                              |
// |------------------|----------------------------------------------------------|
// | Event            | An occasion attendees register for.                      |
// | Ticket           | Proof of registration bound to one event and attendee.   |
// | EventSummary     | The event fields shown on a ticket.                      |
// | RegisteredTicket | A freshly issued ticket joined with its event summary.   |
//--------------------------------------------------------------------------------------------------

/// An occasion attendees register for.
///
/// `event_id` is the public identifier used in registration links; it is generated once at
/// creation and never changes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    /// Opaque public identifier.
    pub event_id: String,
    /// Event title, trimmed and non-empty.
    pub title: String,
    /// Venue name, trimmed and non-empty.
    pub venue: String,
    /// When the event takes place.
    pub date: DateTime<Utc>,
    /// When the event record was created.
    pub created_at: DateTime<Utc>,
}

impl Event {
    /// Returns the fields of this event that are printed on a ticket.
    pub fn summary(&self) -> EventSummary {
        EventSummary {
            title: self.title.clone(),
            venue: self.venue.clone(),
            date: self.date,
        }
    }
}

/// A single registration for an event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Ticket {
    /// Opaque ticket identifier.
    pub ticket_id: String,
    /// Public identifier of the event this ticket admits to.
    pub event_id: String,
    /// Attendee name.
    pub name: String,
    /// Attendee email.
    pub email: String,
    /// When the ticket was issued.
    pub created_at: DateTime<Utc>,
}

/// The event fields shown alongside a ticket.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventSummary {
    pub title: String,
    pub venue: String,
    pub date: DateTime<Utc>,
}

/// A ticket joined with the event it was issued for.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisteredTicket {
    pub ticket_id: String,
    pub event_id: String,
    pub name: String,
    pub email: String,
    pub event: EventSummary,
}

impl RegisteredTicket {
    /// Joins a stored ticket with the summary of its event.
    pub fn new(ticket: Ticket, event: EventSummary) -> Self {
        Self {
            ticket_id: ticket.ticket_id,
            event_id: ticket.event_id,
            name: ticket.name,
            email: ticket.email,
            event,
        }
    }

    /// Renders the ticket as the plain-text block attendees copy or print.
    ///
    /// ```text
    /// Event: Gala
    /// Venue: Hall A
    /// Date: Thursday, May 1, 2025 at 06:00 PM
    /// Name: Jo
    /// Email: jo@x.com
    /// Ticket ID: 3f1c...
    /// ```
    pub fn details_text(&self) -> String {
        format!(
            "Event: {}\nVenue: {}\nDate: {}\nName: {}\nEmail: {}\nTicket ID: {}",
            self.event.title,
            self.event.venue,
            format_event_date(&self.event.date),
            self.name,
            self.email,
            self.ticket_id,
        )
    }
}

/// Formats an event date for display, e.g. `Thursday, May 1, 2025 at 06:00 PM`.
pub fn format_event_date(date: &DateTime<Utc>) -> String {
    date.format("%A, %B %-d, %Y at %I:%M %p").to_string()
}

//--------------------------------------------------------------------------------------------------
//  INPUTS
//--------------------------------------------------------------------------------------------------

/// Unvalidated input for creating an event. Every field may be absent.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewEvent {
    pub title: Option<String>,
    pub venue: Option<String>,
    pub date: Option<String>,
}

/// Unvalidated input for registering an attendee.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewRegistration {
    pub event_id: Option<String>,
    pub name: Option<String>,
    pub email: Option<String>,
}
