//! Shared Types
//!
//! App view states, the authenticated user reflection, and the auth API
//! request/response shapes.

use serde::{Deserialize, Serialize};

/// Current view within the authenticated set.
///
/// The session gate decides whether these views are reachable at all; while
/// signed out the auth view is the only surface.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppView {
    /// Event list with favorites and logout affordances
    Dashboard,
    /// Single event detail, point read by id
    EventDetail { event_id: String },
    /// Create/edit form; edit mode when an id is supplied
    EventEditor { event_id: Option<String> },
    /// Events filtered by the favorites registry
    Favorites,
}

/// User information
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserInfo {
    pub id: String,
    pub email: String,
}

/// Authentication response from the session store
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthResponse {
    pub token: String,
    pub user: UserInfo,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SignInRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SignUpRequest {
    pub email: String,
    pub password: String,
}

/// Sign-in methods registered for an email address; non-empty means the
/// address is already in use.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SignInMethodsResponse {
    pub methods: Vec<String>,
}
