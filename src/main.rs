use clap::{
    CommandFactory, Parser, Subcommand,
    builder::{
        Styles,
        styling::{AnsiColor, Effects},
    },
};
use clap_complete::{Shell, generate};

use jamcli::{cli, config, error};

fn styles() -> Styles {
    Styles::styled()
        .header(AnsiColor::White.on_default() | Effects::BOLD)
        .usage(AnsiColor::White.on_default() | Effects::BOLD)
        .literal(AnsiColor::BrightBlue.on_default())
        .placeholder(AnsiColor::BrightGreen.on_default())
}

#[derive(Parser, Debug, Clone)]
#[clap(
  version = env!("CARGO_PKG_VERSION"),
  name=env!("CARGO_PKG_NAME"),
  bin_name=env!("CARGO_PKG_NAME"),
  author=env!("CARGO_PKG_AUTHORS"),
  about=env!("CARGO_PKG_DESCRIPTION"),
  styles=styles(),
)]
struct Cli {
    #[clap(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Build a playlist interactively (default)
    Session(SessionOptions),

    /// Search the catalog for tracks
    Search(SearchOptions),

    /// Authorize with Spotify and show the signed-in user
    Auth,

    /// Get shell completions
    Completions(CompletionsOption),
}

#[derive(Parser, Debug, Clone, Default)]
pub struct SessionOptions {
    /// Save playlists as private
    #[clap(long)]
    pub private: bool,

    /// Number of search results to fetch (1-50)
    #[clap(long)]
    pub limit: Option<u32>,
}

#[derive(Parser, Debug, Clone)]
pub struct SearchOptions {
    /// Search term
    #[clap(required = true, num_args = 1..)]
    pub term: Vec<String>,

    /// Number of results to fetch (1-50)
    #[clap(long)]
    pub limit: Option<u32>,
}

#[derive(Parser, Debug, Clone)]
pub struct CompletionsOption {
    shell: Shell,
}

fn load_config(limit: Option<u32>) -> config::Config {
    match config::Config::from_env() {
        Ok(mut config) => {
            if let Some(limit) = limit {
                config.search_limit = limit;
            }
            config
        }
        Err(e) => error!("{}", e),
    }
}

#[tokio::main]
async fn main() {
    env_logger::init();

    if let Err(e) = config::load_env().await {
        error!("Cannot load environment. Err: {}", e);
    }

    let cli = Cli::parse();

    match cli.command.unwrap_or(Command::Session(SessionOptions::default())) {
        Command::Session(opt) => {
            let config = load_config(opt.limit);
            cli::session(&config, !opt.private).await
        }
        Command::Search(opt) => {
            let config = load_config(opt.limit);
            cli::search(&config, opt.term.join(" ")).await
        }
        Command::Auth => cli::auth(&load_config(None)).await,
        Command::Completions(opt) => {
            let mut cmd = Cli::command_for_update();
            let name = cmd.get_name().to_string();
            generate(opt.shell, &mut cmd, name, &mut std::io::stdout())
        }
    }
}
