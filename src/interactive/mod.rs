//! Interactive TUI interface
//!
//! Play rounds in a full-screen terminal, one key per guess.

pub mod app;
pub mod rendering;

pub use app::{App, DebugLog, run_tui};
