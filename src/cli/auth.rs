use crate::{
    config::Config,
    error,
    management::TokenManager,
    spotify::{self, SpotifyClient, SpotifyService},
    success,
};

/// Authorizes against Spotify and builds the service used by the other
/// commands. Exits the process when authorization fails.
pub async fn connect(config: &Config) -> SpotifyService {
    let token = match spotify::auth::authorize(config).await {
        Ok(token) => token,
        Err(e) => error!("Authentication failed: {}", e),
    };

    success!("Authentication successful!");

    SpotifyService::new(
        SpotifyClient::new(config),
        TokenManager::new(token, config.clone()),
        config.search_limit,
    )
}

pub async fn auth(config: &Config) {
    let mut service = connect(config).await;

    let user = match service.access_token().await {
        Ok(token) => service.client().current_user(&token).await,
        Err(e) => Err(e),
    };

    match user {
        Ok(user) => success!(
            "Signed in as {} ({})",
            user.display_name.as_deref().unwrap_or("unknown"),
            user.id
        ),
        Err(e) => error!("Failed to load user profile: {}", e),
    }
}
