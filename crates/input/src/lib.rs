//! Terminal input module (engine-facing).
//!
//! This module is intentionally independent of any UI framework beyond the
//! key event type. It maps `crossterm` key events into [`InputAction`]s; the
//! engine itself only ever sees a [`types::Direction`].

pub mod map;

pub use tui_2048_types as types;

pub use map::{handle_key_event, InputAction};
