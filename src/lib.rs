//! Evorg - Event Organizer Client
//!
//! A native desktop client for a shared event calendar. Users sign in,
//! see everyone's events live, keep a personal favorites list, and
//! create, edit, or delete events.
//!
//! # Module Structure
//!
//! - **`shared`** - Types independent of the UI
//!   - Event model, wire documents, and draft validation
//!   - Configuration and error types
//!
//! - **`app`** - Native desktop app (egui/eframe)
//!   - Central [`app::AppState`] and the per-frame pump
//!   - Session lifecycle, event store client, live feed client
//!   - Views and theme

pub mod app;
pub mod shared;
