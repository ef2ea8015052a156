//! # CLI Module
//!
//! User-facing commands of jamcli. Each command authorizes against Spotify
//! first, since the access token only lives for the duration of the
//! process.
//!
//! - [`session`] - Interactive playlist builder: search, add, remove,
//!   rename and save in a loop over stdin
//! - [`search`] - One-shot search printed as a table
//! - [`auth`] - Runs the authorization flow and prints the signed-in user
//!
//! ```bash
//! jamcli                        # same as `jamcli session`
//! jamcli search "daft punk"     # one-shot search
//! jamcli session --private      # saved playlists are private
//! ```

mod auth;
mod search;
mod session;

pub use auth::auth;
pub use auth::connect;
pub use search::search;
pub use session::SessionCommand;
pub use session::run_command;
pub use session::session;
