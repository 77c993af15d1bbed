//! TUI Boggle (workspace facade crate).
//!
//! Re-exports the member crates as `tui_boggle::{core,input,term,types}` and
//! holds the pieces only the binary needs: argument parsing and logging setup.

pub mod cli;
pub mod logging;

pub use tui_boggle_core as core;
pub use tui_boggle_input as input;
pub use tui_boggle_term as term;
pub use tui_boggle_types as types;
