use crate::{
    errors::Result,
    management::{MusicService, TokenManager},
    types::{SavedPlaylist, Track},
};

use super::SpotifyClient;

/// [`MusicService`] backed by the Spotify Web API.
pub struct SpotifyService {
    client: SpotifyClient,
    tokens: TokenManager,
    search_limit: u32,
    public: bool,
}

impl SpotifyService {
    pub fn new(client: SpotifyClient, tokens: TokenManager, search_limit: u32) -> Self {
        Self {
            client,
            tokens,
            search_limit,
            public: true,
        }
    }

    /// Whether saved playlists are public. Defaults to `true`.
    pub fn public(mut self, public: bool) -> Self {
        self.public = public;
        self
    }

    pub fn client(&self) -> &SpotifyClient {
        &self.client
    }

    pub async fn access_token(&mut self) -> Result<String> {
        self.tokens.get_valid_token().await
    }
}

impl MusicService for SpotifyService {
    async fn search_tracks(&mut self, term: &str) -> Result<Vec<Track>> {
        let token = self.tokens.get_valid_token().await?;
        self.client
            .search_tracks(&token, term, self.search_limit)
            .await
    }

    async fn save_playlist(&mut self, name: &str, uris: &[String]) -> Result<SavedPlaylist> {
        let token = self.tokens.get_valid_token().await?;
        self.client
            .save_playlist(&token, name, uris, self.public)
            .await
    }
}
