//! # API Module
//!
//! HTTP endpoints served by the short-lived local server that receives the
//! OAuth redirect.
//!
//! - [`callback`] - Completes the PKCE flow: checks the `state` echo,
//!   records a denial, or exchanges the authorization code for a token and
//!   stores it in the shared pending-auth slot.
//! - [`health`] - Returns status, name and version as JSON.
//!
//! ```rust,ignore
//! use axum::{Router, routing::get};
//! use jamcli::api::{callback, health};
//!
//! let app = Router::new()
//!     .route("/callback", get(callback))
//!     .route("/health", get(health));
//! ```

mod callback;
mod health;

pub use callback::callback;
pub use health::health;
