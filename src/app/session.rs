//! Session Store Client
//!
//! The client-side reflection of the backend's session management plus the
//! HTTP calls for sign-in, sign-up, sign-out, and restoring a persisted
//! session. Calls are blocking and meant to run on a worker thread; results
//! travel back to the UI thread over a channel.

use reqwest::Client;
use tokio::runtime::Runtime;

use crate::app::config::Config;
use crate::app::types::{AuthResponse, SignInMethodsResponse, SignInRequest, SignUpRequest, UserInfo};

/// Read-only reflection of the backend session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionState {
    /// Initial state while a persisted session is being validated
    Resolving,
    SignedOut,
    SignedIn(UserInfo),
}

impl SessionState {
    pub fn user(&self) -> Option<&UserInfo> {
        match self {
            SessionState::SignedIn(user) => Some(user),
            _ => None,
        }
    }

    pub fn is_signed_in(&self) -> bool {
        matches!(self, SessionState::SignedIn(_))
    }
}

/// Sign in with email and password
pub fn sign_in(config: &Config, email: String, password: String) -> Result<AuthResponse, String> {
    let client = Client::new();
    let url = config.api_url("/api/auth/signin");

    let request = SignInRequest { email, password };

    let rt = Runtime::new().map_err(|e| format!("Failed to create runtime: {}", e))?;

    rt.block_on(async {
        let response = client
            .post(&url)
            .json(&request)
            .send()
            .await
            .map_err(|e| format!("Network error: {}", e))?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_else(|_| status.to_string());
            return Err(format!("Sign in failed: {} - {}", status, error_text));
        }

        let auth_response: AuthResponse = response
            .json()
            .await
            .map_err(|e| format!("Failed to parse response: {}", e))?;

        Ok(auth_response)
    })
}

/// Sign up a new user with email and password.
///
/// Checks first whether the email is already registered and refuses locally
/// if it is, mirroring the backend's own uniqueness rule with a friendlier
/// message.
pub fn sign_up(config: &Config, email: String, password: String) -> Result<AuthResponse, String> {
    let client = Client::new();

    let rt = Runtime::new().map_err(|e| format!("Failed to create runtime: {}", e))?;

    rt.block_on(async {
        let methods_url = config.api_url(&format!("/api/auth/methods?email={}", email));
        let response = client
            .get(&methods_url)
            .send()
            .await
            .map_err(|e| format!("Network error: {}", e))?;

        if response.status().is_success() {
            let methods: SignInMethodsResponse = response
                .json()
                .await
                .map_err(|e| format!("Failed to parse response: {}", e))?;
            if !methods.methods.is_empty() {
                return Err("Email is already in use.".to_string());
            }
        }

        let url = config.api_url("/api/auth/signup");
        let request = SignUpRequest { email, password };
        let response = client
            .post(&url)
            .json(&request)
            .send()
            .await
            .map_err(|e| format!("Network error: {}", e))?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_else(|_| status.to_string());
            return Err(format!("Sign up failed: {} - {}", status, error_text));
        }

        let auth_response: AuthResponse = response
            .json()
            .await
            .map_err(|e| format!("Failed to parse response: {}", e))?;

        Ok(auth_response)
    })
}

/// Sign out the current session. Fire-and-forget; the caller logs the
/// outcome and drops the local session either way.
pub fn sign_out(config: &Config) -> Result<(), String> {
    let client = Client::new();
    let url = config.api_url("/api/auth/signout");
    let token = config.get_token().ok_or("Not authenticated")?.clone();

    let rt = Runtime::new().map_err(|e| format!("Failed to create runtime: {}", e))?;

    rt.block_on(async {
        let response = client
            .post(&url)
            .header("Authorization", format!("Bearer {}", token))
            .send()
            .await
            .map_err(|e| format!("Network error: {}", e))?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_else(|_| status.to_string());
            return Err(format!("Sign out failed: {} - {}", status, error_text));
        }

        Ok(())
    })
}

/// Validate a persisted token and fetch the current user.
///
/// The first completion of this call resolves the session gate out of
/// [`SessionState::Resolving`].
pub fn restore(config: &Config) -> Result<UserInfo, String> {
    let client = Client::new();
    let url = config.api_url("/api/auth/me");
    let token = config.get_token().ok_or("Not authenticated")?.clone();

    let rt = Runtime::new().map_err(|e| format!("Failed to create runtime: {}", e))?;

    rt.block_on(async {
        let response = client
            .get(&url)
            .header("Authorization", format!("Bearer {}", token))
            .send()
            .await
            .map_err(|e| format!("Network error: {}", e))?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_else(|_| status.to_string());
            return Err(format!("Session restore failed: {} - {}", status, error_text));
        }

        let user: UserInfo = response
            .json()
            .await
            .map_err(|e| format!("Failed to parse response: {}", e))?;

        Ok(user)
    })
}
