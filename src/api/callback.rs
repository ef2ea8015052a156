use std::{collections::HashMap, sync::Arc};

use axum::{Extension, extract::Query, response::Html};

use crate::{config::Config, server::SharedAuth, spotify, warning};

pub async fn callback(
    Query(params): Query<HashMap<String, String>>,
    Extension(shared_state): Extension<SharedAuth>,
    Extension(config): Extension<Arc<Config>>,
) -> Html<&'static str> {
    let (code, verifier) = {
        let mut state = shared_state.lock().await;
        let Some(pending) = state.as_mut() else {
            return Html("<h4>No authorization in progress.</h4>");
        };

        if pending.token.is_some() {
            return Html("<h4>Already authorized. You can close this window.</h4>");
        }

        if params.get("state") != Some(&pending.state) {
            return Html("<h4>State mismatch, ignoring callback.</h4>");
        }

        if let Some(reason) = params.get("error") {
            pending.failure = Some(format!("authorization denied: {}", reason));
            return Html("<h4>Authorization denied.</h4><p>Close this window.</p>");
        }

        let Some(code) = params.get("code") else {
            pending.failure = Some("callback carried no authorization code".to_string());
            return Html("<h4>Missing authorization code.</h4>");
        };

        (code.clone(), pending.code_verifier.clone())
    };

    // the lock is not held during the exchange so the waiter keeps polling
    let outcome = spotify::auth::exchange_code_pkce(&config, &code, &verifier).await;

    let mut state = shared_state.lock().await;
    let Some(pending) = state.as_mut() else {
        return Html("<h4>No authorization in progress.</h4>");
    };

    match outcome {
        Ok(token) => {
            pending.token = Some(token);
            Html("<h2>Authentication successful.</h2><p>Close this window and return to the terminal.</p>")
        }
        Err(e) => {
            warning!("Token exchange failed: {}", e);
            pending.failure = Some(e.to_string());
            Html("<h4>Login failed.</h4>")
        }
    }
}
