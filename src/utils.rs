use base64::{Engine, engine::general_purpose::URL_SAFE_NO_PAD};
use rand::{Rng, distr::Alphanumeric};
use reqwest::Url;
use sha2::{Digest, Sha256};

use crate::{
    config::Config,
    errors::{Error, Result},
    types::{Track, TrackTableRow},
};

fn random_alphanumeric(len: usize) -> String {
    rand::rng()
        .sample_iter(&Alphanumeric)
        .take(len)
        .map(char::from)
        .collect()
}

pub fn generate_code_verifier() -> String {
    random_alphanumeric(128)
}

pub fn generate_code_challenge(verifier: &str) -> String {
    let hash = Sha256::digest(verifier.as_bytes());
    URL_SAFE_NO_PAD.encode(hash)
}

/// Opaque value echoed back by the authorization server to tie the callback
/// to the request that started it.
pub fn generate_state() -> String {
    random_alphanumeric(32)
}

pub fn build_authorize_url(config: &Config, code_challenge: &str, state: &str) -> Result<Url> {
    Url::parse_with_params(
        &config.auth_url,
        &[
            ("client_id", config.client_id.as_str()),
            ("response_type", "code"),
            ("redirect_uri", config.redirect_uri.as_str()),
            ("code_challenge_method", "S256"),
            ("code_challenge", code_challenge),
            ("scope", config.scope.as_str()),
            ("state", state),
        ],
    )
    .map_err(|e| Error::Configuration(format!("invalid auth url {}: {}", config.auth_url, e)))
}

pub fn format_artists(track: &Track) -> String {
    track
        .artists
        .iter()
        .map(|a| a.name.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Formats a track length as `m:ss`.
pub fn format_duration(duration_ms: u64) -> String {
    let total_secs = duration_ms / 1000;
    format!("{}:{:02}", total_secs / 60, total_secs % 60)
}

/// Converts tracks to table rows numbered from 1 in the given order.
pub fn track_rows<'a>(tracks: impl IntoIterator<Item = &'a Track>) -> Vec<TrackTableRow> {
    tracks
        .into_iter()
        .enumerate()
        .map(|(i, t)| TrackTableRow {
            position: i + 1,
            title: t.name.clone(),
            artists: format_artists(t),
            album: t.album.name.clone(),
            length: format_duration(t.duration_ms),
        })
        .collect()
}
