use chrono::Utc;
use log::debug;

use crate::{
    config::Config,
    errors::{Error, Result},
    spotify,
    types::Token,
};

/// Seconds before the reported expiry at which a token counts as expired.
const EXPIRY_MARGIN_SECS: u64 = 240;

/// Holds the session's access token in memory and refreshes it when it is
/// about to expire.
pub struct TokenManager {
    token: Token,
    config: Config,
}

impl TokenManager {
    pub fn new(token: Token, config: Config) -> Self {
        TokenManager { token, config }
    }

    /// Returns an access token that is valid for at least a few more
    /// minutes, refreshing it first when needed.
    ///
    /// # Errors
    ///
    /// Fails when the token is expired and either no refresh token is
    /// available or the refresh request fails.
    pub async fn get_valid_token(&mut self) -> Result<String> {
        if self.is_expired() {
            let Some(refresh) = self.token.refresh_token.clone() else {
                return Err(Error::Authorization(
                    "access token expired and no refresh token is available".into(),
                ));
            };
            debug!("access token expired, refreshing");
            self.token = spotify::auth::refresh_token(&self.config, &refresh).await?;
        }

        Ok(self.token.access_token.clone())
    }

    pub fn is_expired(&self) -> bool {
        let now = Utc::now().timestamp().max(0) as u64;
        now >= self.token.obtained_at + self.token.expires_in.saturating_sub(EXPIRY_MARGIN_SECS)
    }

    pub fn current_token(&self) -> &Token {
        &self.token
    }
}
