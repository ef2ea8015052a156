#![allow(dead_code)]

use jamcli::types::{AlbumRef, ArtistRef, Track};

pub fn track(id: &str, name: &str) -> Track {
    Track {
        id: id.to_string(),
        name: name.to_string(),
        artists: vec![ArtistRef {
            name: format!("Artist {}", id),
        }],
        album: AlbumRef {
            name: format!("Album {}", id),
        },
        uri: format!("spotify:track:{}", id),
        duration_ms: 180_000,
    }
}
