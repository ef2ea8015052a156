use std::{sync::Arc, time::Duration};

use chrono::Utc;
use indicatif::{ProgressBar, ProgressStyle};
use log::debug;
use reqwest::Client;
use serde::Deserialize;
use tokio::{sync::Mutex, time::Instant};

use crate::{
    config::Config,
    errors::{Error, Result},
    info,
    server::{SharedAuth, start_api_server},
    types::{PendingAuth, Token, TokenResponse},
    utils, warning,
};

const POLL_INTERVAL: Duration = Duration::from_millis(500);

/// Runs the OAuth 2.0 authorization-code flow with PKCE and returns the
/// resulting token.
///
/// 1. Generates the code verifier, its S256 challenge and a `state` value
/// 2. Starts the local callback server on `config.server_addr`
/// 3. Opens the authorization URL in the default browser
/// 4. Waits for the callback to store a token or a failure
/// 5. Stops the callback server
///
/// The token is returned to the caller and never written to disk.
///
/// # Errors
///
/// - [`Error::Io`] when the callback address cannot be bound
/// - [`Error::Authorization`] when the user denies access, the exchange
///   fails, or nothing arrives within `config.auth_timeout`
pub async fn authorize(config: &Config) -> Result<Token> {
    let code_verifier = utils::generate_code_verifier();
    let code_challenge = utils::generate_code_challenge(&code_verifier);
    let state = utils::generate_state();
    let auth_url = utils::build_authorize_url(config, &code_challenge, &state)?;

    let shared_state: SharedAuth = Arc::new(Mutex::new(Some(PendingAuth::new(
        code_verifier,
        state,
    ))));

    let server = start_api_server(Arc::clone(&shared_state), Arc::new(config.clone())).await?;

    info!("Opening Spotify authorization in your browser...");
    if webbrowser::open(auth_url.as_str()).is_err() {
        warning!(
            "Failed to open browser. Please navigate to the following URL manually:\n{}",
            auth_url
        );
    }

    let outcome = wait_for_token(Arc::clone(&shared_state), config.auth_timeout).await;
    server.abort();
    outcome
}

/// Polls the shared slot until the callback handler stores a token or a
/// failure, or `max_wait` elapses.
pub async fn wait_for_token(shared_state: SharedAuth, max_wait: Duration) -> Result<Token> {
    let pb = ProgressBar::new_spinner();
    pb.set_message("Waiting for authorization in the browser...");
    pb.enable_steady_tick(Duration::from_millis(100));
    if let Ok(style) = ProgressStyle::with_template("{spinner:.blue} {msg}") {
        pb.set_style(style.tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏"));
    }

    let start = Instant::now();
    let outcome = loop {
        {
            let lock = shared_state.lock().await;
            if let Some(pending) = lock.as_ref() {
                if let Some(token) = &pending.token {
                    break Ok(token.clone());
                }
                if let Some(failure) = &pending.failure {
                    break Err(Error::Authorization(failure.clone()));
                }
            }
        }

        if start.elapsed() >= max_wait {
            break Err(Error::Authorization(format!(
                "no callback received within {} seconds",
                max_wait.as_secs()
            )));
        }
        tokio::time::sleep(POLL_INTERVAL).await;
    };

    pb.finish_and_clear();
    outcome
}

/// Error body of the accounts service token endpoint.
#[derive(Debug, Deserialize)]
struct TokenErrorResponse {
    error: String,
    #[serde(default)]
    error_description: Option<String>,
}

/// Exchanges an authorization code for an access token.
///
/// The verifier must be the one whose challenge was sent with the
/// authorization request.
pub async fn exchange_code_pkce(config: &Config, code: &str, verifier: &str) -> Result<Token> {
    let response = request_token(
        config,
        &[
            ("grant_type", "authorization_code"),
            ("client_id", config.client_id.as_str()),
            ("code", code),
            ("code_verifier", verifier),
            ("redirect_uri", config.redirect_uri.as_str()),
        ],
    )
    .await?;

    Ok(into_token(response, None))
}

/// Exchanges a refresh token for a fresh access token.
///
/// The service may omit the refresh token from the response, in which case
/// the one passed in stays valid and is carried over.
pub async fn refresh_token(config: &Config, refresh_token: &str) -> Result<Token> {
    let response = request_token(
        config,
        &[
            ("grant_type", "refresh_token"),
            ("refresh_token", refresh_token),
            ("client_id", config.client_id.as_str()),
        ],
    )
    .await?;

    Ok(into_token(response, Some(refresh_token)))
}

async fn request_token(config: &Config, form: &[(&str, &str)]) -> Result<TokenResponse> {
    let res = Client::new()
        .post(&config.token_url)
        .form(form)
        .send()
        .await?;

    let status = res.status();
    if !status.is_success() {
        let body = res.text().await.unwrap_or_default();
        let reason = match serde_json::from_str::<TokenErrorResponse>(&body) {
            Ok(e) => match e.error_description {
                Some(desc) => format!("{}: {}", e.error, desc),
                None => e.error,
            },
            Err(_) => format!("token endpoint returned {}", status),
        };
        return Err(Error::Authorization(reason));
    }

    debug!("token endpoint returned {}", status);
    Ok(res.json::<TokenResponse>().await?)
}

fn into_token(response: TokenResponse, previous_refresh: Option<&str>) -> Token {
    Token {
        access_token: response.access_token,
        refresh_token: response
            .refresh_token
            .or_else(|| previous_refresh.map(str::to_string)),
        scope: response.scope,
        expires_in: response.expires_in,
        obtained_at: Utc::now().timestamp().max(0) as u64,
    }
}
