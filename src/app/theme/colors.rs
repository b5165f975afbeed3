//! Color Constants for the Event Organizer Theme
//!
//! Light theme built around the app's purple brand color, with warm
//! off-white surfaces and soft card backgrounds.

use eframe::egui::Color32;

/// Brand purple used by the toolbar and primary buttons
pub const PRIMARY: Color32 = Color32::from_rgb(0xA0, 0x00, 0xC8);

/// Primary button hover
pub const PRIMARY_HOVER: Color32 = Color32::from_rgb(0xB4, 0x2A, 0xD6);

/// Main screen background - warm off-white
pub const BG_LIGHT: Color32 = Color32::from_rgb(0xF1, 0xFA, 0xEE);

/// Form background
pub const FORM_BG: Color32 = Color32::from_rgb(0xF9, 0xF9, 0xF9);

/// Card background
pub const CARD_BG: Color32 = Color32::from_rgb(0xFF, 0xFF, 0xFF);

/// Card border
pub const CARD_BORDER: Color32 = Color32::from_rgb(0xDD, 0xDD, 0xDD);

/// Input field background
pub const INPUT_BG: Color32 = Color32::from_rgb(0xF8, 0xF8, 0xF8);

/// Input field border
pub const INPUT_BORDER: Color32 = Color32::from_rgb(0xCC, 0xCC, 0xCC);

/// Primary text on light backgrounds
pub const TEXT_PRIMARY: Color32 = Color32::from_rgb(0x33, 0x33, 0x33);

/// Secondary, muted text
pub const TEXT_SECONDARY: Color32 = Color32::from_rgb(0x7C, 0x7C, 0x7C);

/// Body text inside cards
pub const TEXT_BODY: Color32 = Color32::from_rgb(0x55, 0x55, 0x55);

/// Text on the brand purple
pub const TEXT_ON_PRIMARY: Color32 = Color32::from_rgb(0xFF, 0xFF, 0xFF);

/// Event type accent
pub const EVENT_TYPE: Color32 = Color32::from_rgb(0x2A, 0x5C, 0xE5);

/// Favorite heart
pub const HEART: Color32 = Color32::from_rgb(0xFF, 0x4D, 0x4D);

/// Edit action
pub const EDIT_ACTION: Color32 = Color32::from_rgb(0xFF, 0x98, 0x00);

/// Delete action / errors
pub const ERROR: Color32 = Color32::from_rgb(0xF4, 0x43, 0x36);

/// Success notices
pub const SUCCESS: Color32 = Color32::from_rgb(0x4C, 0xAF, 0x50);

/// Empty state / placeholder text
pub const PLACEHOLDER: Color32 = Color32::from_rgb(0x88, 0x88, 0x88);
