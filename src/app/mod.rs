//! Desktop client for the shared event organizer.
//!
//! Everything funnels through one [`AppState`] owned by the UI thread.
//! Network work runs on short-lived background threads that report back
//! over channels; the per-frame [`AppState::pump`] drains them, so no
//! lock is ever held across a frame.

pub mod config;
pub mod favorites;
pub mod feed;
pub mod session;
pub mod state;
pub mod store;
pub mod theme;
pub mod types;
pub mod views;

pub use config::Config;
pub use favorites::FavoritesRegistry;
pub use feed::{EventFeedClient, FeedStatus};
pub use session::SessionState;
pub use state::AppState;
pub use types::{AppView, AuthResponse, UserInfo};
