//! Shared Types
//!
//! Types shared between the views and the backend data-access layer:
//! the event domain model, error taxonomy, and base configuration.

pub mod config;
pub mod error;
pub mod event;

pub use config::{AppConfig, AppConfigBuilder, ConfigError};
pub use error::SharedError;
pub use event::{Event, EventDocument, EventDraft, EventPayload};
