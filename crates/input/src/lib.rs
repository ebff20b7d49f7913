//! Terminal input module (engine-facing).
//!
//! Independent of any UI framework: maps `crossterm` key events to keypad
//! keys and accumulates them into [`crate::types::PadAction`]s, which a
//! session feeds to the scoring engine.

pub mod map;
pub mod pad;

pub use tui_darts_types as types;

pub use map::{handle_key_event, should_quit, PadKey};
pub use pad::{InputPad, PadOutput};
