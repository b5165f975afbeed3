//! Live Event Feed Client
//!
//! Subscribes to the backend's live query over the events collection. The
//! stream is newline-delimited JSON: every line is a full snapshot of the
//! collection, ordered by creation time descending. The subscription runs
//! on a worker thread and hands decoded snapshots to the UI thread over a
//! channel; the UI replaces its entire event list on each one.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc::{self, Receiver, Sender};
use std::sync::Arc;
use std::thread;

use futures_util::StreamExt;
use reqwest::Client;
use serde::Deserialize;
use tokio::runtime::Runtime;

use crate::app::config::Config;
use crate::shared::error::SharedError;
use crate::shared::event::{Event, EventDocument};

/// One line of the feed stream: the full collection contents.
#[derive(Debug, Deserialize)]
struct FeedSnapshot {
    events: Vec<serde_json::Value>,
}

/// Subscription status reported by the feed thread
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FeedStatus {
    Connecting,
    Connected,
    Retrying,
    Error(String),
    Disconnected,
}

/// Live feed client owning the subscription thread.
pub struct EventFeedClient {
    config: Config,
    subscription_thread: Option<thread::JoinHandle<()>>,
    shutdown: Arc<AtomicBool>,
    snapshot_receiver: Receiver<Vec<Event>>,
    snapshot_sender: Sender<Vec<Event>>,
    status_receiver: Receiver<FeedStatus>,
    status_sender: Sender<FeedStatus>,
}

impl EventFeedClient {
    pub fn new(config: Config) -> Self {
        let (snapshot_tx, snapshot_rx) = mpsc::channel();
        let (status_tx, status_rx) = mpsc::channel();
        Self {
            config,
            subscription_thread: None,
            shutdown: Arc::new(AtomicBool::new(false)),
            snapshot_receiver: snapshot_rx,
            snapshot_sender: snapshot_tx,
            status_receiver: status_rx,
            status_sender: status_tx,
        }
    }

    /// Open the subscription on a worker thread.
    pub fn start(&mut self) {
        if self.subscription_thread.is_some() {
            return;
        }
        self.shutdown.store(false, Ordering::SeqCst);

        let config = self.config.clone();
        let snapshot_sender = self.snapshot_sender.clone();
        let status_sender = self.status_sender.clone();
        let shutdown = Arc::clone(&self.shutdown);

        let thread = thread::spawn(move || {
            subscribe_to_feed(config, snapshot_sender, status_sender, shutdown);
        });
        self.subscription_thread = Some(thread);
    }

    /// Release the subscription. Called when the owning view set is torn
    /// down (logout).
    pub fn shutdown(&mut self) {
        self.shutdown.store(true, Ordering::SeqCst);
        self.subscription_thread = None;
    }

    /// Drain queued snapshots (non-blocking). Snapshots are returned in
    /// delivery order; the caller applies each in turn.
    pub fn poll_snapshots(&self) -> Vec<Vec<Event>> {
        let mut snapshots = Vec::new();
        while let Ok(snapshot) = self.snapshot_receiver.try_recv() {
            snapshots.push(snapshot);
        }
        snapshots
    }

    /// Poll the latest status update (non-blocking).
    pub fn poll_status(&self) -> Option<FeedStatus> {
        self.status_receiver.try_recv().ok()
    }
}

impl Drop for EventFeedClient {
    fn drop(&mut self) {
        self.shutdown.store(true, Ordering::SeqCst);
    }
}

/// Parse one NDJSON line of the feed into decoded events.
///
/// Documents that fail the schema boundary are dropped from the snapshot
/// with a warning rather than poisoning the whole feed.
pub fn parse_snapshot_line(line: &str) -> Result<Vec<Event>, SharedError> {
    let snapshot: FeedSnapshot = serde_json::from_str(line)?;
    let mut events = Vec::with_capacity(snapshot.events.len());
    for value in snapshot.events {
        match EventDocument::decode(value) {
            Ok(doc) => events.push(Event::from_document(doc)),
            Err(e) => tracing::warn!("dropping undecodable event document: {}", e),
        }
    }
    Ok(events)
}

fn subscribe_to_feed(
    config: Config,
    snapshot_sender: Sender<Vec<Event>>,
    status_sender: Sender<FeedStatus>,
    shutdown: Arc<AtomicBool>,
) {
    let rt = match Runtime::new() {
        Ok(rt) => rt,
        Err(e) => {
            tracing::error!("Failed to create runtime for event feed: {}", e);
            let _ = status_sender.send(FeedStatus::Error(format!("runtime: {}", e)));
            return;
        }
    };

    rt.block_on(async {
        let mut reconnect_delay = std::time::Duration::from_millis(1000);
        const MAX_RECONNECT_DELAY: std::time::Duration = std::time::Duration::from_secs(30);

        loop {
            if shutdown.load(Ordering::SeqCst) {
                let _ = status_sender.send(FeedStatus::Disconnected);
                return;
            }

            let url = config.api_url("/api/events/feed");
            let Some(token) = config.get_token().cloned() else {
                tracing::error!("No session token available for the event feed");
                let _ = status_sender.send(FeedStatus::Error("not authenticated".to_string()));
                return;
            };

            let client = Client::new();
            let _ = status_sender.send(FeedStatus::Connecting);
            tracing::info!("Subscribing to event feed: {}", url);

            let response = match client
                .get(&url)
                .header("Authorization", format!("Bearer {}", token))
                .send()
                .await
            {
                Ok(resp) => resp,
                Err(e) => {
                    tracing::warn!("Failed to subscribe to event feed (will retry): {}", e);
                    let _ = status_sender.send(FeedStatus::Error(format!("network: {}", e)));
                    let _ = status_sender.send(FeedStatus::Retrying);
                    tokio::time::sleep(reconnect_delay).await;
                    reconnect_delay = std::cmp::min(reconnect_delay * 2, MAX_RECONNECT_DELAY);
                    continue;
                }
            };

            if !response.status().is_success() {
                tracing::error!("Feed subscription failed with status: {} (will retry)", response.status());
                let _ = status_sender.send(FeedStatus::Error(format!("http: {}", response.status())));
                let _ = status_sender.send(FeedStatus::Retrying);
                tokio::time::sleep(reconnect_delay).await;
                reconnect_delay = std::cmp::min(reconnect_delay * 2, MAX_RECONNECT_DELAY);
                continue;
            }

            tracing::info!("Event feed subscription established");
            let _ = status_sender.send(FeedStatus::Connected);
            reconnect_delay = std::time::Duration::from_millis(1000);

            let mut stream = response.bytes_stream();
            let mut buffer = String::new();
            let mut connection_active = true;

            while let Some(chunk_result) = stream.next().await {
                if shutdown.load(Ordering::SeqCst) {
                    let _ = status_sender.send(FeedStatus::Disconnected);
                    return;
                }

                match chunk_result {
                    Ok(chunk) => {
                        let chunk_str = match std::str::from_utf8(&chunk) {
                            Ok(s) => s,
                            Err(e) => {
                                tracing::error!("Invalid UTF-8 in feed stream: {}", e);
                                connection_active = false;
                                break;
                            }
                        };
                        buffer.push_str(chunk_str);

                        while let Some(newline_pos) = buffer.find('\n') {
                            let line = buffer[..newline_pos].trim_end_matches('\r').to_string();
                            buffer = buffer[newline_pos + 1..].to_string();

                            if line.is_empty() {
                                continue;
                            }

                            match parse_snapshot_line(&line) {
                                Ok(events) => {
                                    tracing::debug!("Feed snapshot with {} events", events.len());
                                    if snapshot_sender.send(events).is_err() {
                                        // Receiver gone; the owning state was torn down.
                                        return;
                                    }
                                }
                                Err(e) => {
                                    tracing::warn!("Failed to parse feed snapshot: {}", e);
                                }
                            }
                        }
                    }
                    Err(e) => {
                        tracing::error!("Error reading from feed stream: {}", e);
                        let _ = status_sender.send(FeedStatus::Error(format!("stream: {}", e)));
                        connection_active = false;
                        break;
                    }
                }
            }

            if connection_active {
                tracing::info!("Event feed closed normally");
                let _ = status_sender.send(FeedStatus::Disconnected);
                break;
            } else {
                tracing::warn!("Event feed connection lost, will reconnect");
                let _ = status_sender.send(FeedStatus::Retrying);
                tokio::time::sleep(reconnect_delay).await;
                reconnect_delay = std::cmp::min(reconnect_delay * 2, MAX_RECONNECT_DELAY);
            }
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_snapshot_line() {
        let line = json!({
            "events": [
                {
                    "id": "e2",
                    "title": "Second",
                    "description": "d",
                    "location": "l",
                    "eventType": "Meetup",
                    "ownerId": "u1",
                    "createdAt": 2000
                },
                {
                    "id": "e1",
                    "title": "First",
                    "description": "d",
                    "location": "l",
                    "eventType": "Workshop",
                    "ownerId": "u1",
                    "createdAt": 1000
                }
            ]
        })
        .to_string();

        let events = parse_snapshot_line(&line).unwrap();
        assert_eq!(events.len(), 2);
        // Delivered order is preserved verbatim: newest first as emitted.
        assert_eq!(events[0].id, "e2");
        assert_eq!(events[1].id, "e1");
    }

    #[test]
    fn test_parse_snapshot_drops_undecodable_documents() {
        let line = json!({
            "events": [
                { "id": "bad" },
                {
                    "id": "e1",
                    "title": "First",
                    "description": "d",
                    "location": "l",
                    "eventType": "Workshop",
                    "ownerId": "u1"
                }
            ]
        })
        .to_string();

        let events = parse_snapshot_line(&line).unwrap();
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].id, "e1");
    }

    #[test]
    fn test_parse_snapshot_rejects_malformed_line() {
        assert!(parse_snapshot_line("not json").is_err());
    }

    #[test]
    fn test_empty_snapshot() {
        let events = parse_snapshot_line(r#"{"events":[]}"#).unwrap();
        assert!(events.is_empty());
    }
}
