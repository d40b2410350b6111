//--------------------------------------------------------------------------------------------------
// STRUCTS
//--------------------------------------------------------------------------------------------------
// | Name                  | Description                               | Key Methods          |
// |-----------------------|-------------------------------------------|----------------------|
// | CreateEventRequest    | Admin request to create an event          | into_new_event       |
// | CreateEventResponse   | Generated id and registration link        |                      |
// | EventResponse         | Public view of an event                   | from                 |
// | RegisterRequest       | Attendee registration                     | into_new_registration|
// | RegisterResponse      | Issued ticket with its event              | from                 |
//--------------------------------------------------------------------------------------------------

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize, Serializer};

use crate::domain::models::types::{
    Event, EventSummary, NewEvent, NewRegistration, RegisteredTicket,
};

/// Request to create a new event. Fields are optional so that missing ones are reported as a
/// validation error rather than a body rejection.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CreateEventRequest {
    pub title: Option<String>,
    pub venue: Option<String>,
    /// Date as typed by the admin, e.g. `2025-05-01T18:00`
    pub date: Option<String>,
}

impl CreateEventRequest {
    pub fn into_new_event(self) -> NewEvent {
        NewEvent {
            title: self.title,
            venue: self.venue,
            date: self.date,
        }
    }
}

/// Response after creating an event
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateEventResponse {
    pub success: bool,
    /// Public identifier of the new event
    pub event_id: String,
    /// Public registration link, when a public origin is configured
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub registration_url: Option<String>,
}

/// Public view of an event
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventResponse {
    pub title: String,
    pub venue: String,
    /// Always written with millisecond precision, e.g. `2025-05-01T18:00:00.000Z`
    #[serde(serialize_with = "serialize_millis")]
    pub date: DateTime<Utc>,
}

fn serialize_millis<S: Serializer>(date: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&date.to_rfc3339_opts(SecondsFormat::Millis, true))
}

impl From<Event> for EventResponse {
    fn from(event: Event) -> Self {
        Self {
            title: event.title,
            venue: event.venue,
            date: event.date,
        }
    }
}

impl From<EventResponse> for EventSummary {
    fn from(event: EventResponse) -> Self {
        Self {
            title: event.title,
            venue: event.venue,
            date: event.date,
        }
    }
}

/// Request to register for an event
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RegisterRequest {
    pub event_id: Option<String>,
    pub name: Option<String>,
    pub email: Option<String>,
}

impl RegisterRequest {
    pub fn into_new_registration(self) -> NewRegistration {
        NewRegistration {
            event_id: self.event_id,
            name: self.name,
            email: self.email,
        }
    }
}

/// Response for a successful registration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterResponse {
    pub success: bool,
    pub ticket_id: String,
    pub name: String,
    pub email: String,
    pub event: EventResponse,
}

impl RegisterResponse {
    /// Rebuilds the domain ticket; the response itself does not echo the event id.
    pub fn into_registered_ticket(self, event_id: impl Into<String>) -> RegisteredTicket {
        RegisteredTicket {
            ticket_id: self.ticket_id,
            event_id: event_id.into(),
            name: self.name,
            email: self.email,
            event: self.event.into(),
        }
    }
}

impl From<RegisteredTicket> for RegisterResponse {
    fn from(ticket: RegisteredTicket) -> Self {
        Self {
            success: true,
            ticket_id: ticket.ticket_id,
            name: ticket.name,
            email: ticket.email,
            event: EventResponse {
                title: ticket.event.title,
                venue: ticket.event.venue,
                date: ticket.event.date,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use serde_json::json;

    #[test]
    fn test_create_event_request_tolerates_missing_fields() {
        let req: CreateEventRequest = serde_json::from_value(json!({ "title": "Gala" })).unwrap();
        assert_eq!(req.title.as_deref(), Some("Gala"));
        assert!(req.venue.is_none());
        assert!(req.date.is_none());
    }

    #[test]
    fn test_register_request_reads_camel_case() {
        let req: RegisterRequest = serde_json::from_value(json!({
            "eventId": "E1",
            "name": "Jo",
            "email": "jo@x.com"
        }))
        .unwrap();
        let input = req.into_new_registration();
        assert_eq!(input.event_id.as_deref(), Some("E1"));
        assert_eq!(input.email.as_deref(), Some("jo@x.com"));
    }

    #[test]
    fn test_register_response_shape() {
        let ticket = RegisteredTicket {
            ticket_id: "T1".to_string(),
            event_id: "E1".to_string(),
            name: "Jo".to_string(),
            email: "jo@x.com".to_string(),
            event: EventSummary {
                title: "Gala".to_string(),
                venue: "Hall A".to_string(),
                date: Utc.with_ymd_and_hms(2025, 5, 1, 18, 0, 0).unwrap(),
            },
        };

        let value = serde_json::to_value(RegisterResponse::from(ticket.clone())).unwrap();
        assert_eq!(
            value,
            json!({
                "success": true,
                "ticketId": "T1",
                "name": "Jo",
                "email": "jo@x.com",
                "event": {
                    "title": "Gala",
                    "venue": "Hall A",
                    "date": "2025-05-01T18:00:00.000Z"
                }
            })
        );

        let back: RegisterResponse = serde_json::from_value(value).unwrap();
        assert_eq!(back.into_registered_ticket("E1"), ticket);
    }

    #[test]
    fn test_event_response_date_has_millisecond_precision() {
        let date = Utc.with_ymd_and_hms(2025, 5, 1, 18, 0, 0).unwrap()
            + chrono::Duration::microseconds(250_999);
        let response = EventResponse {
            title: "Gala".to_string(),
            venue: "Hall A".to_string(),
            date,
        };

        let value = serde_json::to_value(&response).unwrap();
        assert_eq!(value["date"], json!("2025-05-01T18:00:00.250Z"));

        let read: EventResponse = serde_json::from_value(json!({
            "title": "Gala",
            "venue": "Hall A",
            "date": "2025-05-01T18:00:00Z"
        }))
        .unwrap();
        assert_eq!(read.date, Utc.with_ymd_and_hms(2025, 5, 1, 18, 0, 0).unwrap());
    }

    #[test]
    fn test_create_event_response_omits_missing_link() {
        let value = serde_json::to_value(CreateEventResponse {
            success: true,
            event_id: "E1".to_string(),
            registration_url: None,
        })
        .unwrap();
        assert_eq!(value, json!({ "success": true, "eventId": "E1" }));
    }
}
