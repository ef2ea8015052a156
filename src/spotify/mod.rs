//! # Spotify Integration Module
//!
//! Client for the parts of the Spotify Web API the playlist builder needs,
//! plus the OAuth 2.0 PKCE flow that produces the access token.
//!
//! ```text
//! Session (management)
//!          ↓
//! SpotifyService (token refresh, settings)
//!          ↓
//! SpotifyClient
//!     ├── search   GET  /search?type=track
//!     └── playlist GET  /me
//!                  POST /users/{user_id}/playlists
//!                  POST /playlists/{playlist_id}/tracks
//!          ↓
//! HTTP Layer (reqwest, JSON)
//! ```
//!
//! ## Authentication
//!
//! [`auth`] runs the authorization-code flow with PKCE: it opens the
//! authorize URL in the browser, receives the code on the local callback
//! server and exchanges it at the token endpoint. The token is only ever
//! held in memory.
//!
//! ## Error handling
//!
//! Every request goes through [`SpotifyClient::send`]:
//! - `429 Too Many Requests` honours `Retry-After` up to two minutes
//! - `502 Bad Gateway` is retried after a short delay
//! - any other non-success status becomes [`Error::Api`] carrying the
//!   message from the service's error envelope
//!
//! The number of retries is bounded by [`MAX_RETRIES`].

pub mod auth;
pub mod playlist;
pub mod search;
mod service;

pub use service::SpotifyService;

use std::time::Duration;

use log::debug;
use reqwest::{Client, RequestBuilder, Response, StatusCode};
use tokio::time::sleep;

use crate::{
    config::Config,
    errors::{Error, Result},
    types::ApiErrorResponse,
    warning,
};

pub const MAX_RETRIES: u32 = 3;
pub const MAX_RETRY_AFTER_SECS: u64 = 120;
pub const BAD_GATEWAY_DELAY: Duration = Duration::from_secs(5);

#[derive(Debug, Clone)]
pub struct SpotifyClient {
    http: Client,
    api_url: String,
    bad_gateway_delay: Duration,
}

impl SpotifyClient {
    pub fn new(config: &Config) -> Self {
        Self::with_api_url(&config.api_url)
    }

    pub fn with_api_url(api_url: &str) -> Self {
        Self {
            http: Client::new(),
            api_url: api_url.trim_end_matches('/').to_string(),
            bad_gateway_delay: BAD_GATEWAY_DELAY,
        }
    }

    /// Pause before retrying a `502 Bad Gateway`. Defaults to
    /// [`BAD_GATEWAY_DELAY`].
    pub fn with_bad_gateway_delay(mut self, delay: Duration) -> Self {
        self.bad_gateway_delay = delay;
        self
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.api_url, path)
    }

    /// Sends `request`, retrying rate limits and bad gateways.
    ///
    /// Returns the response only for success statuses.
    async fn send(&self, request: RequestBuilder) -> Result<Response> {
        let mut retries = 0;

        loop {
            let attempt = request
                .try_clone()
                .ok_or_else(|| Error::InvalidInput("request body cannot be replayed".into()))?;
            let response = attempt.send().await?;
            let status = response.status();
            debug!("{} {}", status, response.url());

            if status.is_success() {
                return Ok(response);
            }

            if status == StatusCode::TOO_MANY_REQUESTS {
                let retry_after = retry_after_secs(&response);
                if retry_after > MAX_RETRY_AFTER_SECS || retries >= MAX_RETRIES {
                    return Err(Error::RateLimited(retry_after));
                }
                warning!("Rate limited, retrying in {} seconds", retry_after);
                retries += 1;
                sleep(Duration::from_secs(retry_after)).await;
                continue;
            }

            if status == StatusCode::BAD_GATEWAY && retries < MAX_RETRIES {
                retries += 1;
                sleep(self.bad_gateway_delay).await;
                continue;
            }

            return Err(api_error(response).await);
        }
    }
}

fn retry_after_secs(response: &Response) -> u64 {
    response
        .headers()
        .get("retry-after")
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.trim().parse::<u64>().ok())
        .unwrap_or(1)
}

async fn api_error(response: Response) -> Error {
    let status = response.status();
    let body = response.text().await.unwrap_or_default();

    let message = match serde_json::from_str::<ApiErrorResponse>(&body) {
        Ok(envelope) => envelope.error.message,
        Err(_) if !body.trim().is_empty() => body,
        Err(_) => status
            .canonical_reason()
            .unwrap_or("unknown error")
            .to_string(),
    };

    Error::Api {
        status: status.as_u16(),
        message,
    }
}
