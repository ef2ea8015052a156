use log::debug;

use crate::{
    errors::{Error, Result},
    spotify::playlist::validate_playlist,
    types::{SavedPlaylist, Track},
};

use super::PlaylistDraft;

/// Remote operations a session depends on.
#[allow(async_fn_in_trait)]
pub trait MusicService {
    async fn search_tracks(&mut self, term: &str) -> Result<Vec<Track>>;

    async fn save_playlist(&mut self, name: &str, uris: &[String]) -> Result<SavedPlaylist>;
}

/// In-memory state of one playlist-building session.
///
/// Owns the latest search results and the draft. The view derived from
/// both, [`Session::visible_results`], never lists a track that is already
/// in the draft.
pub struct Session<S: MusicService> {
    service: S,
    search_results: Vec<Track>,
    draft: PlaylistDraft,
}

impl<S: MusicService> Session<S> {
    pub fn new(service: S) -> Self {
        Self {
            service,
            search_results: Vec::new(),
            draft: PlaylistDraft::new(),
        }
    }

    pub fn draft(&self) -> &PlaylistDraft {
        &self.draft
    }

    pub fn service(&self) -> &S {
        &self.service
    }

    /// Replaces the search results with the service's matches for `term`.
    ///
    /// On failure the previous results are kept.
    pub async fn search(&mut self, term: &str) -> Result<usize> {
        let results = self.service.search_tracks(term).await?;
        debug!("search {:?} returned {} tracks", term, results.len());
        self.search_results = results;
        Ok(self.visible_results().len())
    }

    /// Search results minus the tracks already in the draft.
    pub fn visible_results(&self) -> Vec<&Track> {
        self.draft.filter_out(&self.search_results)
    }

    /// Adds `track` to the draft; a track already present is ignored.
    pub fn add_track(&mut self, track: Track) -> bool {
        self.draft.add(track)
    }

    /// Adds the visible result at zero-based `index`.
    pub fn add_result(&mut self, index: usize) -> Result<Track> {
        let track = self
            .visible_results()
            .get(index)
            .map(|t| (*t).clone())
            .ok_or_else(|| {
                Error::InvalidInput(format!("no search result at position {}", index + 1))
            })?;
        self.draft.add(track.clone());
        Ok(track)
    }

    /// Removes the track with `track_id`; an unknown id is ignored.
    pub fn remove_track(&mut self, track_id: &str) -> Option<Track> {
        self.draft.remove(track_id)
    }

    /// Removes the draft track at zero-based `index`.
    pub fn remove_at(&mut self, index: usize) -> Result<Track> {
        let id = self
            .draft
            .tracks()
            .get(index)
            .map(|t| t.id.clone())
            .ok_or_else(|| {
                Error::InvalidInput(format!("no playlist track at position {}", index + 1))
            })?;
        self.draft
            .remove(&id)
            .ok_or_else(|| Error::InvalidInput(format!("track {} is not in the playlist", id)))
    }

    pub fn rename(&mut self, name: impl Into<String>) {
        self.draft.set_name(name);
    }

    /// Saves the draft as a new playlist and resets it.
    ///
    /// A draft without name or tracks is rejected before any request. When
    /// the service fails, the draft is left as it was.
    pub async fn save(&mut self) -> Result<SavedPlaylist> {
        let uris = self.draft.uris();
        let name = self.draft.name().trim().to_string();
        validate_playlist(&name, &uris)?;

        let saved = self.service.save_playlist(&name, &uris).await?;
        self.draft.reset();
        Ok(saved)
    }
}
