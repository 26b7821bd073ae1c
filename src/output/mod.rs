//! Terminal output formatting
//!
//! Display utilities for CLI results and the debug trace.

pub mod console;
pub mod display;
pub mod formatters;

pub use console::ConsoleObserver;
pub use display::{print_census, print_simulation_report};
