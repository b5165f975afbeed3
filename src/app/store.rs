//! Event Store Client
//!
//! Thin data-access calls against the backend's events collection: point
//! read, insert, update, delete. Blocking, worker-thread functions in the
//! same shape as the session client; the live query lives in
//! [`crate::app::feed`].

use reqwest::Client;
use serde::Deserialize;
use tokio::runtime::Runtime;

use crate::app::config::Config;
use crate::shared::event::{Event, EventDocument, EventPayload};

/// Outcome of a point read: the store distinguishes "no such document"
/// from transport or permission failures.
#[derive(Debug, Clone, PartialEq)]
pub enum FetchOutcome {
    Found(Event),
    NotFound,
}

#[derive(Debug, Deserialize)]
struct InsertResponse {
    id: String,
}

fn bearer(config: &Config) -> Result<String, String> {
    config
        .get_token()
        .map(|token| format!("Bearer {}", token))
        .ok_or_else(|| "Not authenticated".to_string())
}

/// Point read of a single event by id.
pub fn get_event(config: &Config, event_id: &str) -> Result<FetchOutcome, String> {
    let client = Client::new();
    let url = config.api_url(&format!("/api/events/{}", event_id));
    let auth = bearer(config)?;

    let rt = Runtime::new().map_err(|e| format!("Failed to create runtime: {}", e))?;

    rt.block_on(async {
        let response = client
            .get(&url)
            .header("Authorization", auth)
            .send()
            .await
            .map_err(|e| format!("Network error: {}", e))?;

        if response.status() == reqwest::StatusCode::NOT_FOUND {
            return Ok(FetchOutcome::NotFound);
        }

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_else(|_| status.to_string());
            return Err(format!("Fetch failed: {} - {}", status, error_text));
        }

        let document: EventDocument = response
            .json()
            .await
            .map_err(|e| format!("Failed to parse response: {}", e))?;

        Ok(FetchOutcome::Found(Event::from_document(document)))
    })
}

/// Insert a new event; the server assigns the id and `createdAt`.
pub fn add_event(config: &Config, payload: &EventPayload) -> Result<String, String> {
    let client = Client::new();
    let url = config.api_url("/api/events");
    let auth = bearer(config)?;

    let rt = Runtime::new().map_err(|e| format!("Failed to create runtime: {}", e))?;

    rt.block_on(async {
        let response = client
            .post(&url)
            .header("Authorization", auth)
            .json(payload)
            .send()
            .await
            .map_err(|e| format!("Network error: {}", e))?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_else(|_| status.to_string());
            return Err(format!("Create failed: {} - {}", status, error_text));
        }

        let inserted: InsertResponse = response
            .json()
            .await
            .map_err(|e| format!("Failed to parse response: {}", e))?;

        Ok(inserted.id)
    })
}

/// Update an existing event. Last writer wins; no version check.
pub fn update_event(config: &Config, event_id: &str, payload: &EventPayload) -> Result<(), String> {
    let client = Client::new();
    let url = config.api_url(&format!("/api/events/{}", event_id));
    let auth = bearer(config)?;

    let rt = Runtime::new().map_err(|e| format!("Failed to create runtime: {}", e))?;

    rt.block_on(async {
        let response = client
            .put(&url)
            .header("Authorization", auth)
            .json(payload)
            .send()
            .await
            .map_err(|e| format!("Network error: {}", e))?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_else(|_| status.to_string());
            return Err(format!("Update failed: {} - {}", status, error_text));
        }

        Ok(())
    })
}

/// Delete an event by id.
pub fn delete_event(config: &Config, event_id: &str) -> Result<(), String> {
    let client = Client::new();
    let url = config.api_url(&format!("/api/events/{}", event_id));
    let auth = bearer(config)?;

    let rt = Runtime::new().map_err(|e| format!("Failed to create runtime: {}", e))?;

    rt.block_on(async {
        let response = client
            .delete(&url)
            .header("Authorization", auth)
            .send()
            .await
            .map_err(|e| format!("Network error: {}", e))?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_else(|_| status.to_string());
            return Err(format!("Delete failed: {} - {}", status, error_text));
        }

        Ok(())
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::config::AppConfig;

    #[test]
    fn test_calls_require_a_token() {
        let config = Config::with_builder(
            AppConfig::builder().server_url("http://127.0.0.1:3000".to_string()),
        )
        .unwrap();
        assert_eq!(
            get_event(&config, "e1"),
            Err("Not authenticated".to_string())
        );
        assert_eq!(
            delete_event(&config, "e1"),
            Err("Not authenticated".to_string())
        );
    }
}
