use crate::{
    errors::Result,
    types::{SearchResponse, Track},
};

use super::SpotifyClient;

/// Upper bound the search endpoint accepts for `limit`.
pub const MAX_SEARCH_LIMIT: u32 = 50;

impl SpotifyClient {
    /// Searches the catalog for tracks matching `term`.
    ///
    /// A blank term yields no results and sends no request. `limit` is
    /// clamped to `1..=50`.
    ///
    /// # API Endpoint
    ///
    /// `GET /search?type=track&q={term}&limit={limit}`
    pub async fn search_tracks(&self, token: &str, term: &str, limit: u32) -> Result<Vec<Track>> {
        let term = term.trim();
        if term.is_empty() {
            return Ok(Vec::new());
        }

        let limit = limit.clamp(1, MAX_SEARCH_LIMIT).to_string();
        let request = self
            .http
            .get(self.endpoint("/search"))
            .bearer_auth(token)
            .query(&[("type", "track"), ("q", term), ("limit", limit.as_str())]);

        let response = self.send(request).await?;
        let json = response.json::<SearchResponse>().await?;
        Ok(json.tracks.items)
    }
}
