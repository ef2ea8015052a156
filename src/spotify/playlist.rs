use log::debug;

use crate::{
    errors::{Error, Result},
    types::{
        AddTracksRequest, AddTracksResponse, CreatePlaylistRequest, CreatePlaylistResponse,
        SavedPlaylist, User,
    },
};

use super::SpotifyClient;

/// Maximum number of URIs the add-tracks endpoint takes per request.
pub const ADD_TRACKS_CHUNK: usize = 100;

pub const PLAYLIST_DESCRIPTION: &str = "Created with jamcli";

/// Rejects a save that has no name or no tracks.
pub fn validate_playlist(name: &str, uris: &[String]) -> Result<()> {
    if name.trim().is_empty() {
        return Err(Error::InvalidInput("playlist name is empty".into()));
    }
    if uris.is_empty() {
        return Err(Error::InvalidInput("playlist has no tracks".into()));
    }
    Ok(())
}

impl SpotifyClient {
    /// `GET /me`
    pub async fn current_user(&self, token: &str) -> Result<User> {
        let request = self.http.get(self.endpoint("/me")).bearer_auth(token);
        let response = self.send(request).await?;
        Ok(response.json::<User>().await?)
    }

    /// `POST /users/{user_id}/playlists`
    pub async fn create_playlist(
        &self,
        token: &str,
        user_id: &str,
        name: &str,
        public: bool,
    ) -> Result<CreatePlaylistResponse> {
        let body = CreatePlaylistRequest {
            name: name.to_string(),
            description: PLAYLIST_DESCRIPTION.to_string(),
            public,
        };

        let request = self
            .http
            .post(self.endpoint(&format!("/users/{}/playlists", user_id)))
            .bearer_auth(token)
            .json(&body);

        let response = self.send(request).await?;
        Ok(response.json::<CreatePlaylistResponse>().await?)
    }

    /// Appends `uris` to the playlist in chunks of [`ADD_TRACKS_CHUNK`].
    ///
    /// Returns the snapshot id of the last chunk written.
    ///
    /// `POST /playlists/{playlist_id}/tracks`
    pub async fn add_tracks(
        &self,
        token: &str,
        playlist_id: &str,
        uris: &[String],
    ) -> Result<Option<String>> {
        let mut snapshot_id = None;

        for chunk in uris.chunks(ADD_TRACKS_CHUNK) {
            let body = AddTracksRequest {
                uris: chunk.to_vec(),
            };
            let request = self
                .http
                .post(self.endpoint(&format!("/playlists/{}/tracks", playlist_id)))
                .bearer_auth(token)
                .json(&body);

            let response = self.send(request).await?;
            let json = response.json::<AddTracksResponse>().await?;
            debug!("added {} tracks to {}", chunk.len(), playlist_id);
            snapshot_id = Some(json.snapshot_id);
        }

        Ok(snapshot_id)
    }

    /// Creates a playlist named `name` for the current user holding `uris`
    /// in order.
    pub async fn save_playlist(
        &self,
        token: &str,
        name: &str,
        uris: &[String],
        public: bool,
    ) -> Result<SavedPlaylist> {
        validate_playlist(name, uris)?;

        let user = self.current_user(token).await?;
        let playlist = self.create_playlist(token, &user.id, name, public).await?;
        self.add_tracks(token, &playlist.id, uris).await?;

        Ok(SavedPlaylist {
            url: playlist.external_urls.and_then(|u| u.spotify),
            id: playlist.id,
            name: playlist.name,
            track_count: uris.len(),
        })
    }
}
