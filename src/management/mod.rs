mod auth;
mod draft;
mod session;

pub use auth::TokenManager;
pub use draft::PlaylistDraft;
pub use session::MusicService;
pub use session::Session;
