//! Terminal input module.
//!
//! Maps `crossterm` key and mouse events into [`Command`]s and screen
//! coordinates, and keeps the keyboard [`Cursor`]. Turning clicks into
//! [`crate::types::Selection`]s needs the screen layout and lives in the
//! term crate.

pub mod cursor;
pub mod map;

pub use tui_boggle_types as types;

pub use cursor::Cursor;
pub use map::{map_key, map_mouse, should_quit, Command};
