//! Theme Module
//!
//! Color scheme and styling for the event organizer UI:
//!
//! - Color constants for the purple light theme
//! - Styling helper functions and frame builders

pub mod colors;
pub mod styles;

pub use colors::*;
pub use styles::*;
