use std::{net::SocketAddr, str::FromStr, sync::Arc};

use axum::{Extension, Router, routing::get};
use log::debug;
use reqwest::Url;
use tokio::{net::TcpListener, sync::Mutex, task::JoinHandle};

use crate::{
    api,
    config::Config,
    errors::{Error, Result},
    types::PendingAuth,
    warning,
};

pub type SharedAuth = Arc<Mutex<Option<PendingAuth>>>;

/// Path component of the configured redirect URI, `/callback` if it has none.
pub fn callback_path(config: &Config) -> String {
    Url::parse(&config.redirect_uri)
        .ok()
        .map(|u| u.path().to_string())
        .filter(|p| p != "/" && !p.is_empty())
        .unwrap_or_else(|| "/callback".to_string())
}

pub fn router(state: SharedAuth, config: Arc<Config>) -> Router {
    Router::new()
        .route("/health", get(api::health))
        .route(&callback_path(&config), get(api::callback))
        .layer(Extension(state))
        .layer(Extension(config))
}

/// Binds the callback server and serves it on a background task.
///
/// Binding happens before spawning so an occupied port is reported to the
/// caller. The returned handle is aborted once the flow is finished.
pub async fn start_api_server(state: SharedAuth, config: Arc<Config>) -> Result<JoinHandle<()>> {
    let addr = SocketAddr::from_str(&config.server_addr).map_err(|e| {
        Error::Configuration(format!(
            "invalid server address {}: {}",
            config.server_addr, e
        ))
    })?;

    let listener = TcpListener::bind(&addr).await?;
    debug!("callback server listening on {}", addr);
    let app = router(state, config);

    Ok(tokio::spawn(async move {
        if let Err(e) = axum::serve(listener, app).await {
            warning!("Callback server stopped: {}", e);
        }
    }))
}
