//--------------------------------------------------------------------------------------------------
// MODULE OVERVIEW
//--------------------------------------------------------------------------------------------------
// Entry point for the ticketing API server. Loads configuration, wires the services over the
// in-memory gateway and serves HTTP until ctrl-c.
//--------------------------------------------------------------------------------------------------

use std::net::SocketAddr;
use std::sync::Arc;

use clap::Parser;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use event_tickets::api::auth::{AdminAuthenticator, BearerTokenAuthenticator, OpenAuthenticator};
use event_tickets::{Api, AppState, Config, InMemoryGateway, UuidIdGenerator};

#[derive(Debug, Parser)]
#[command(name = "event-tickets", about = "Event ticketing API server")]
struct Args {
    /// Address to listen on; overrides BIND_ADDR
    #[arg(long)]
    bind: Option<SocketAddr>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();
    let mut config = Config::try_from_env()?;
    if let Some(bind) = args.bind {
        config.bind_addr = bind;
    }

    info!("Starting event ticketing API server");

    let authenticator: Arc<dyn AdminAuthenticator> = match &config.admin_token {
        Some(token) => Arc::new(BearerTokenAuthenticator::new(token.clone())),
        None => {
            warn!("ADMIN_TOKEN is not set; event creation is open to every caller");
            Arc::new(OpenAuthenticator)
        }
    };

    if config.public_origin.is_none() {
        warn!("PUBLIC_ORIGIN is not set; responses will not include registration links");
    }

    let state = AppState::from_parts(
        Arc::new(InMemoryGateway::new()),
        Arc::new(UuidIdGenerator),
        authenticator,
        config.public_origin.clone(),
    );

    Api::new(config.bind_addr, state, config.cors_origins).serve().await?;

    Ok(())
}
