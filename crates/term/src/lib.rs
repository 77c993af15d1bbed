//! Terminal "game renderer" module.
//!
//! This is a small, game-oriented rendering layer for terminal gameplay.
//! It avoids widget/layout libraries and instead renders into a simple
//! framebuffer that can be flushed to a terminal backend.
//!
//! The same [`Layout`] that places the board on screen classifies mouse
//! clicks through [`hit_test`], so drawing and picking never disagree.

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use tui_boggle_core as core;
pub use tui_boggle_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{cell_style, hit_test, AnchorY, GameView, Layout, Rect, Viewport};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
