use std::{io::Write, time::Duration};

use indicatif::{ProgressBar, ProgressStyle};
use tabled::Table;
use tokio::io::{AsyncBufReadExt, BufReader};

use crate::{
    config::Config,
    errors::{self, Error},
    info,
    management::{MusicService, Session},
    success, utils, warning,
};

use super::connect;

const HELP: &str = "\
Commands:
  search <term>   search the catalog for tracks (alias: s)
  results         show the current search results
  add <n>         add result n to the playlist (alias: a)
  remove <n>      remove playlist track n (alias: rm)
  name <text>     set the playlist name
  playlist        show the playlist (alias: ls)
  save            save the playlist to Spotify
  help            show this help
  quit            leave without saving (alias: q, exit)";

/// One line of user input in the interactive session.
///
/// Positions are one-based, as printed in the tables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionCommand {
    Search(String),
    Results,
    Add(usize),
    Remove(usize),
    Name(String),
    Playlist,
    Save,
    Help,
    Quit,
    Empty,
}

impl SessionCommand {
    pub fn parse(line: &str) -> Result<Self, String> {
        let line = line.trim();
        if line.is_empty() {
            return Ok(SessionCommand::Empty);
        }

        let (keyword, rest) = match line.split_once(char::is_whitespace) {
            Some((k, r)) => (k, r.trim()),
            None => (line, ""),
        };

        match keyword.to_lowercase().as_str() {
            "search" | "s" => {
                if rest.is_empty() {
                    Err("usage: search <term>".to_string())
                } else {
                    Ok(SessionCommand::Search(rest.to_string()))
                }
            }
            "results" => Ok(SessionCommand::Results),
            "add" | "a" => parse_position(rest, "add").map(SessionCommand::Add),
            "remove" | "rm" => parse_position(rest, "remove").map(SessionCommand::Remove),
            "name" => {
                if rest.is_empty() {
                    Err("usage: name <text>".to_string())
                } else {
                    Ok(SessionCommand::Name(rest.to_string()))
                }
            }
            "playlist" | "ls" => Ok(SessionCommand::Playlist),
            "save" => Ok(SessionCommand::Save),
            "help" | "?" => Ok(SessionCommand::Help),
            "quit" | "q" | "exit" => Ok(SessionCommand::Quit),
            other => Err(format!("unknown command \"{}\", type help", other)),
        }
    }
}

fn parse_position(raw: &str, command: &str) -> Result<usize, String> {
    match raw.parse::<usize>() {
        Ok(0) => Err("positions start at 1".to_string()),
        Ok(n) => Ok(n),
        Err(_) => Err(format!("usage: {} <n>", command)),
    }
}

fn zero_based(position: usize) -> errors::Result<usize> {
    position
        .checked_sub(1)
        .ok_or_else(|| Error::InvalidInput("positions start at 1".to_string()))
}

fn spinner(message: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_message(message.to_string());
    pb.enable_steady_tick(Duration::from_millis(100));
    if let Ok(style) = ProgressStyle::with_template("{spinner:.blue} {msg}") {
        pb.set_style(style.tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏"));
    }
    pb
}

fn print_results<S: MusicService>(session: &Session<S>) {
    let visible = session.visible_results();
    if visible.is_empty() {
        info!("No search results to show");
        return;
    }
    println!("{}", Table::new(utils::track_rows(visible)));
}

fn print_playlist<S: MusicService>(session: &Session<S>) {
    let draft = session.draft();
    let name = if draft.name().is_empty() {
        "(unnamed)"
    } else {
        draft.name()
    };
    info!("Playlist {}: {} track(s)", name, draft.len());
    if !draft.is_empty() {
        println!("{}", Table::new(utils::track_rows(draft.tracks())));
    }
}

/// Applies `command` to the session and prints the outcome.
///
/// Returns `false` when the session should end.
pub async fn run_command<S: MusicService>(session: &mut Session<S>, command: SessionCommand) -> bool {
    match command {
        SessionCommand::Empty => {}
        SessionCommand::Help => println!("{}", HELP),
        SessionCommand::Quit => {
            if !session.draft().is_empty() {
                warning!(
                    "Discarding unsaved playlist with {} track(s)",
                    session.draft().len()
                );
            }
            return false;
        }
        SessionCommand::Search(term) => {
            let pb = spinner("Searching...");
            let outcome = session.search(&term).await;
            pb.finish_and_clear();
            match outcome {
                Ok(_) => print_results(session),
                Err(e) => warning!("Search failed: {}", e),
            }
        }
        SessionCommand::Results => print_results(session),
        SessionCommand::Add(position) => {
            match zero_based(position).and_then(|i| session.add_result(i)) {
                Ok(track) => success!("Added {} - {}", track.name, utils::format_artists(&track)),
                Err(e) => warning!("{}", e),
            }
        }
        SessionCommand::Remove(position) => {
            match zero_based(position).and_then(|i| session.remove_at(i)) {
                Ok(track) => success!("Removed {}", track.name),
                Err(e) => warning!("{}", e),
            }
        }
        SessionCommand::Name(name) => {
            session.rename(name);
            success!("Playlist renamed to {}", session.draft().name());
        }
        SessionCommand::Playlist => print_playlist(session),
        SessionCommand::Save => {
            let pb = spinner("Saving playlist...");
            let outcome = session.save().await;
            pb.finish_and_clear();
            match outcome {
                Ok(saved) => {
                    success!("Saved {} with {} track(s)", saved.name, saved.track_count);
                    if let Some(url) = saved.url {
                        info!("{}", url);
                    }
                }
                Err(e) => warning!("Save failed: {}", e),
            }
        }
    }
    true
}

fn prompt() {
    print!("jamcli> ");
    let _ = std::io::stdout().flush();
}

pub async fn session(config: &Config, public: bool) {
    let service = connect(config).await.public(public);
    let mut session = Session::new(service);

    info!("Type help for the list of commands");
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    loop {
        prompt();
        let line = match lines.next_line().await {
            Ok(Some(line)) => line,
            Ok(None) => break,
            Err(e) => {
                warning!("Failed to read input: {}", e);
                break;
            }
        };

        match SessionCommand::parse(&line) {
            Ok(command) => {
                if !run_command(&mut session, command).await {
                    break;
                }
            }
            Err(message) => warning!("{}", message),
        }
    }
}
