use std::time::Duration;

use anyhow::{Result, anyhow};
use reqwest::{Client, Response, StatusCode};
use serde::Deserialize;

use crate::api::API_PREFIX;
use crate::api::dto::{
    CreateEventRequest, CreateEventResponse, EventResponse, RegisterRequest, RegisterResponse,
};

/// Error body returned by every failing endpoint
#[derive(Debug, Deserialize)]
struct ErrorBody {
    error: String,
}

/// API client for interacting with the ticketing service
#[derive(Debug, Clone)]
pub struct ApiClient {
    /// HTTP client
    client: Client,

    /// Base URL for the API, e.g. `http://127.0.0.1:3000`
    base_url: String,

    /// Admin token sent on event creation
    admin_token: Option<String>,
}

impl ApiClient {
    /// Creates a new API client
    pub fn new(base_url: &str, admin_token: Option<String>) -> Result<Self> {
        let client = Client::builder()
            .pool_idle_timeout(Some(Duration::from_secs(30)))
            .tcp_keepalive(Some(Duration::from_secs(30)))
            .timeout(Duration::from_secs(5))
            .build()?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            admin_token,
        })
    }

    /// Base URL the client talks to
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}/{}", self.base_url, API_PREFIX, path)
    }

    /// Creates an event through the API
    pub async fn create_event(&self, req: &CreateEventRequest) -> Result<CreateEventResponse> {
        let mut request = self.client.post(self.url("create-event")).json(req);
        if let Some(token) = &self.admin_token {
            request = request.bearer_auth(token);
        }

        let resp = request.send().await?;
        expect_ok(resp, "create event").await
    }

    /// Fetches the public details of an event
    pub async fn get_event(&self, event_id: &str) -> Result<EventResponse> {
        let resp = self
            .client
            .get(self.url(&format!("event/{}", event_id)))
            .send()
            .await?;
        expect_ok(resp, "get event").await
    }

    /// Registers an attendee for an event
    pub async fn register(&self, req: &RegisterRequest) -> Result<RegisterResponse> {
        let resp = self.client.post(self.url("register")).json(req).send().await?;
        expect_ok(resp, "register").await
    }
}

async fn expect_ok<T: for<'de> Deserialize<'de>>(resp: Response, action: &str) -> Result<T> {
    match resp.status() {
        StatusCode::OK => Ok(resp.json::<T>().await?),
        status => {
            let message = match resp.json::<ErrorBody>().await {
                Ok(body) => body.error,
                Err(_) => "Unknown error".to_string(),
            };
            Err(anyhow!("Failed to {}: {} - {}", action, status, message))
        }
    }
}
