mod common;

use jamcli::cli::{SessionCommand, run_command};
use jamcli::errors::{Error, Result};
use jamcli::management::{MusicService, Session};
use jamcli::types::{SavedPlaylist, Track};

#[derive(Default)]
struct FakeService {
    results: Vec<Track>,
    fail_save: bool,
    searches: Vec<String>,
    saves: Vec<(String, Vec<String>)>,
}

impl MusicService for FakeService {
    async fn search_tracks(&mut self, term: &str) -> Result<Vec<Track>> {
        self.searches.push(term.to_string());
        Ok(self.results.clone())
    }

    async fn save_playlist(&mut self, name: &str, uris: &[String]) -> Result<SavedPlaylist> {
        self.saves.push((name.to_string(), uris.to_vec()));
        if self.fail_save {
            return Err(Error::Api {
                status: 500,
                message: "server error".to_string(),
            });
        }
        Ok(SavedPlaylist {
            id: "pl-1".to_string(),
            name: name.to_string(),
            url: None,
            track_count: uris.len(),
        })
    }
}

fn service_with_results(ids: &[&str]) -> FakeService {
    FakeService {
        results: ids.iter().map(|id| common::track(id, id)).collect(),
        ..Default::default()
    }
}

fn visible_ids<S: MusicService>(session: &Session<S>) -> Vec<String> {
    session
        .visible_results()
        .iter()
        .map(|t| t.id.clone())
        .collect()
}

#[tokio::test]
async fn test_search_replaces_results() {
    let mut session = Session::new(service_with_results(&["1", "2", "3"]));

    let visible = session.search("daft punk").await.unwrap();

    assert_eq!(visible, 3);
    assert_eq!(visible_ids(&session), vec!["1", "2", "3"]);
    assert_eq!(session.service().searches, vec!["daft punk"]);
}

#[tokio::test]
async fn test_search_results_never_include_draft_tracks() {
    let mut session = Session::new(service_with_results(&["1", "2", "3"]));
    session.add_track(common::track("2", "2"));

    session.search("anything").await.unwrap();
    assert_eq!(visible_ids(&session), vec!["1", "3"]);

    session.add_result(0).unwrap();
    assert_eq!(visible_ids(&session), vec!["3"]);
}

#[tokio::test]
async fn test_removed_track_reappears_in_results() {
    let mut session = Session::new(service_with_results(&["1", "2"]));
    session.search("x").await.unwrap();
    session.add_result(1).unwrap();
    assert_eq!(visible_ids(&session), vec!["1"]);

    session.remove_track("2");
    assert_eq!(visible_ids(&session), vec!["1", "2"]);
}

#[tokio::test]
async fn test_add_result_out_of_range() {
    let mut session = Session::new(service_with_results(&["1"]));
    session.search("x").await.unwrap();

    assert!(matches!(session.add_result(5), Err(Error::InvalidInput(_))));
    assert!(session.draft().is_empty());
}

#[test]
fn test_adding_present_track_is_noop() {
    let mut session = Session::new(FakeService::default());
    assert!(session.add_track(common::track("1", "One")));
    assert!(!session.add_track(common::track("1", "One")));
    assert_eq!(session.draft().len(), 1);
}

#[test]
fn test_removing_absent_track_is_noop() {
    let mut session = Session::new(FakeService::default());
    session.add_track(common::track("1", "One"));

    assert!(session.remove_track("nope").is_none());
    assert_eq!(session.draft().len(), 1);
    assert!(matches!(session.remove_at(3), Err(Error::InvalidInput(_))));
    assert_eq!(session.draft().len(), 1);
}

#[tokio::test]
async fn test_successful_save_resets_draft() {
    let mut session = Session::new(FakeService::default());
    session.add_track(common::track("1", "One"));
    session.add_track(common::track("2", "Two"));
    session.rename("  Weekend  ");

    let saved = session.save().await.unwrap();

    assert_eq!(saved.name, "Weekend");
    assert_eq!(saved.track_count, 2);
    assert!(session.draft().is_empty());
    assert_eq!(session.draft().name(), "");
}

#[tokio::test]
async fn test_save_submits_uris_in_draft_order() {
    let mut service = FakeService::default();
    service.results = vec![common::track("b", "B"), common::track("a", "A")];
    let mut session = Session::new(service);
    session.search("x").await.unwrap();
    session.add_result(1).unwrap();
    session.add_result(0).unwrap();
    session.rename("Ordered");

    session.save().await.unwrap();

    let saves = &session.service().saves;
    assert_eq!(saves.len(), 1);
    assert_eq!(saves[0].0, "Ordered");
    assert_eq!(saves[0].1, vec!["spotify:track:a", "spotify:track:b"]);
}

#[tokio::test]
async fn test_failed_save_keeps_draft() {
    let service = FakeService {
        fail_save: true,
        ..Default::default()
    };
    let mut session = Session::new(service);
    session.add_track(common::track("1", "One"));
    session.rename("Keep me");

    let err = session.save().await.unwrap_err();

    assert!(matches!(err, Error::Api { status: 500, .. }));
    assert_eq!(session.draft().len(), 1);
    assert_eq!(session.draft().name(), "Keep me");
}

#[tokio::test]
async fn test_save_without_name_or_tracks_is_rejected() {
    let mut session = Session::new(FakeService::default());
    session.add_track(common::track("1", "One"));
    session.rename("   ");
    assert!(matches!(session.save().await, Err(Error::InvalidInput(_))));
    assert!(session.service().saves.is_empty());
    assert_eq!(session.draft().len(), 1);

    let mut session = Session::new(FakeService::default());
    session.rename("Empty");
    assert!(matches!(session.save().await, Err(Error::InvalidInput(_))));
    assert_eq!(session.draft().name(), "Empty");
    assert!(session.service().saves.is_empty());
}

#[test]
fn test_parse_session_commands() {
    assert_eq!(
        SessionCommand::parse("search  daft punk "),
        Ok(SessionCommand::Search("daft punk".to_string()))
    );
    assert_eq!(
        SessionCommand::parse("s one"),
        Ok(SessionCommand::Search("one".to_string()))
    );
    assert_eq!(SessionCommand::parse("add 3"), Ok(SessionCommand::Add(3)));
    assert_eq!(SessionCommand::parse("rm 1"), Ok(SessionCommand::Remove(1)));
    assert_eq!(
        SessionCommand::parse("name Late Night Drive"),
        Ok(SessionCommand::Name("Late Night Drive".to_string()))
    );
    assert_eq!(SessionCommand::parse("LS"), Ok(SessionCommand::Playlist));
    assert_eq!(SessionCommand::parse("results"), Ok(SessionCommand::Results));
    assert_eq!(SessionCommand::parse("save"), Ok(SessionCommand::Save));
    assert_eq!(SessionCommand::parse("?"), Ok(SessionCommand::Help));
    assert_eq!(SessionCommand::parse("exit"), Ok(SessionCommand::Quit));
    assert_eq!(SessionCommand::parse("   "), Ok(SessionCommand::Empty));
}

#[test]
fn test_parse_rejects_bad_input() {
    assert!(SessionCommand::parse("search").is_err());
    assert!(SessionCommand::parse("add").is_err());
    assert!(SessionCommand::parse("add zero").is_err());
    assert!(SessionCommand::parse("add 0").is_err());
    assert!(SessionCommand::parse("name").is_err());
    assert!(SessionCommand::parse("dance").is_err());
}

#[tokio::test]
async fn test_run_command_drives_session() {
    let mut session = Session::new(service_with_results(&["1", "2"]));

    assert!(run_command(&mut session, SessionCommand::Search("x".into())).await);
    assert!(run_command(&mut session, SessionCommand::Add(2)).await);
    assert!(run_command(&mut session, SessionCommand::Add(9)).await);
    assert!(run_command(&mut session, SessionCommand::Name("Mix".into())).await);
    assert_eq!(session.draft().len(), 1);
    assert_eq!(session.draft().tracks()[0].id, "2");

    assert!(run_command(&mut session, SessionCommand::Save).await);
    assert!(session.draft().is_empty());

    assert!(!run_command(&mut session, SessionCommand::Quit).await);
}

#[tokio::test]
async fn test_run_command_rejects_position_zero() {
    let mut session = Session::new(service_with_results(&["1", "2"]));
    run_command(&mut session, SessionCommand::Search("x".into())).await;
    session.add_track(common::track("9", "Nine"));

    assert!(run_command(&mut session, SessionCommand::Add(0)).await);
    assert!(run_command(&mut session, SessionCommand::Remove(0)).await);

    assert_eq!(session.draft().len(), 1);
    assert_eq!(session.draft().tracks()[0].id, "9");
    assert_eq!(visible_ids(&session), vec!["1", "2"]);
}
