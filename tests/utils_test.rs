mod common;

use jamcli::config::Config;
use jamcli::types::ArtistRef;
use jamcli::utils::*;

#[test]
fn test_generate_code_verifier() {
    let verifier = generate_code_verifier();

    assert_eq!(verifier.len(), 128);
    assert!(verifier.chars().all(|c| c.is_ascii_alphanumeric()));

    let verifier2 = generate_code_verifier();
    assert_ne!(verifier, verifier2);
}

#[test]
fn test_generate_code_challenge_matches_rfc7636_example() {
    let challenge = generate_code_challenge("dBjftJeZ4CVP-mB92K27uhbUJU1p1r_wW1gFWFOEjXk");
    assert_eq!(challenge, "E9Melhoa2OwvFrEMTJguCHaoeK1t8URWbuGJSstw-cM");
}

#[test]
fn test_generate_code_challenge_is_url_safe() {
    let challenge = generate_code_challenge(&generate_code_verifier());

    assert_eq!(challenge.len(), 43);
    assert!(
        challenge
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
    );
}

#[test]
fn test_generate_state() {
    let state = generate_state();
    assert_eq!(state.len(), 32);
    assert_ne!(state, generate_state());
}

#[test]
fn test_build_authorize_url_carries_all_parameters() {
    let config = Config::with_base_url("client-123", "https://accounts.example.com");
    let url = build_authorize_url(&config, "challenge-abc", "state-xyz").unwrap();

    assert_eq!(url.path(), "/authorize");

    let params: std::collections::HashMap<String, String> = url.query_pairs().into_owned().collect();
    assert_eq!(params["client_id"], "client-123");
    assert_eq!(params["response_type"], "code");
    assert_eq!(params["redirect_uri"], config.redirect_uri);
    assert_eq!(params["code_challenge_method"], "S256");
    assert_eq!(params["code_challenge"], "challenge-abc");
    assert_eq!(params["scope"], "playlist-modify-public playlist-modify-private");
    assert_eq!(params["state"], "state-xyz");
}

#[test]
fn test_build_authorize_url_encodes_values() {
    let config = Config::with_base_url("client-123", "https://accounts.example.com");
    let url = build_authorize_url(&config, "c", "s").unwrap();

    // spaces in the scope and the redirect URI must not appear raw
    assert!(!url.as_str().contains(' '));
    assert!(!url.as_str().contains("redirect_uri=http://"));
}

#[test]
fn test_build_authorize_url_rejects_invalid_base() {
    let mut config = Config::with_base_url("client-123", "https://accounts.example.com");
    config.auth_url = "not a url".to_string();

    assert!(build_authorize_url(&config, "c", "s").is_err());
}

#[test]
fn test_format_duration() {
    assert_eq!(format_duration(0), "0:00");
    assert_eq!(format_duration(59_999), "0:59");
    assert_eq!(format_duration(185_000), "3:05");
    assert_eq!(format_duration(3_600_000), "60:00");
}

#[test]
fn test_format_artists_joins_names() {
    let mut track = common::track("1", "Song");
    track.artists.push(ArtistRef {
        name: "Guest".to_string(),
    });

    assert_eq!(format_artists(&track), "Artist 1, Guest");
}

#[test]
fn test_track_rows_are_numbered_from_one() {
    let tracks = vec![common::track("a", "First"), common::track("b", "Second")];
    let rows = track_rows(&tracks);

    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0].position, 1);
    assert_eq!(rows[0].title, "First");
    assert_eq!(rows[0].album, "Album a");
    assert_eq!(rows[0].length, "3:00");
    assert_eq!(rows[1].position, 2);
    assert_eq!(rows[1].artists, "Artist b");
}
