//--------------------------------------------------------------------------------------------------
// MODULE OVERVIEW
//--------------------------------------------------------------------------------------------------
// Command-line client for a running ticketing server. Creates events, prints their registration
// links, and registers attendees, printing the ticket details.
//--------------------------------------------------------------------------------------------------

use anyhow::Result;
use clap::{Parser, Subcommand};

use event_tickets::api::client::ApiClient;
use event_tickets::api::{CreateEventRequest, RegisterRequest};
use event_tickets::domain::models::types::format_event_date;
use event_tickets::registration_link;

#[derive(Debug, Parser)]
#[command(name = "ticketctl", about = "Manage events and tickets on a ticketing server")]
struct Cli {
    /// Base URL of the server
    #[arg(long, env = "TICKETS_URL", default_value = "http://127.0.0.1:3000")]
    url: String,

    /// Admin token used for event creation
    #[arg(long, env = "ADMIN_TOKEN")]
    token: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Create an event and print its registration link
    CreateEvent {
        #[arg(long)]
        title: String,
        #[arg(long)]
        venue: String,
        /// e.g. 2025-05-01T18:00
        #[arg(long)]
        date: String,
    },
    /// Show the public details of an event
    ShowEvent { event_id: String },
    /// Register an attendee and print the ticket
    Register {
        event_id: String,
        #[arg(long)]
        name: String,
        #[arg(long)]
        email: String,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let client = ApiClient::new(&cli.url, cli.token)?;

    match cli.command {
        Command::CreateEvent { title, venue, date } => {
            let created = client
                .create_event(&CreateEventRequest {
                    title: Some(title),
                    venue: Some(venue),
                    date: Some(date),
                })
                .await?;
            let link = created
                .registration_url
                .unwrap_or_else(|| registration_link(client.base_url(), &created.event_id));

            println!("Event ID: {}", created.event_id);
            println!("Public Registration Link: {}", link);
        }
        Command::ShowEvent { event_id } => {
            let event = client.get_event(&event_id).await?;
            println!("{}", event.title);
            println!("Venue: {}", event.venue);
            println!("Date: {}", format_event_date(&event.date));
        }
        Command::Register {
            event_id,
            name,
            email,
        } => {
            let response = client
                .register(&RegisterRequest {
                    event_id: Some(event_id.clone()),
                    name: Some(name),
                    email: Some(email),
                })
                .await?;
            println!("{}", response.into_registered_ticket(event_id).details_text());
        }
    }

    Ok(())
}
