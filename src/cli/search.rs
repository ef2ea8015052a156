use tabled::Table;

use crate::{config::Config, info, management::MusicService, utils, warning};

use super::connect;

pub async fn search(config: &Config, term: String) {
    let mut service = connect(config).await;

    match service.search_tracks(&term).await {
        Ok(tracks) if tracks.is_empty() => info!("No tracks found for \"{}\"", term),
        Ok(tracks) => println!("{}", Table::new(utils::track_rows(&tracks))),
        Err(e) => warning!("Search failed: {}", e),
    }
}
