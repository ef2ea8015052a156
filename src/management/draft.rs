use crate::types::Track;

/// Unsaved playlist: an ordered, duplicate-free list of tracks and a name.
///
/// Insertion order is display order. Tracks are compared by id only.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PlaylistDraft {
    name: String,
    tracks: Vec<Track>,
}

impl PlaylistDraft {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn set_name(&mut self, name: impl Into<String>) -> &mut Self {
        self.name = name.into();
        self
    }

    pub fn tracks(&self) -> &[Track] {
        &self.tracks
    }

    pub fn len(&self) -> usize {
        self.tracks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tracks.is_empty()
    }

    pub fn contains(&self, track_id: &str) -> bool {
        self.tracks.iter().any(|t| t.id == track_id)
    }

    /// Appends `track` unless a track with the same id is already present.
    ///
    /// Returns whether the draft changed.
    pub fn add(&mut self, track: Track) -> bool {
        if self.contains(&track.id) {
            return false;
        }
        self.tracks.push(track);
        true
    }

    /// Removes the track with `track_id`, returning it if it was present.
    pub fn remove(&mut self, track_id: &str) -> Option<Track> {
        let position = self.tracks.iter().position(|t| t.id == track_id)?;
        Some(self.tracks.remove(position))
    }

    /// Track URIs in playlist order.
    pub fn uris(&self) -> Vec<String> {
        self.tracks.iter().map(|t| t.uri.clone()).collect()
    }

    /// Tracks from `results` that are not in the draft, order preserved.
    pub fn filter_out<'a>(&self, results: &'a [Track]) -> Vec<&'a Track> {
        results.iter().filter(|t| !self.contains(&t.id)).collect()
    }

    /// Empties tracks and name.
    pub fn reset(&mut self) {
        self.tracks.clear();
        self.name.clear();
    }
}
