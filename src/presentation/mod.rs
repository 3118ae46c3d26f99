//! User-facing layer: command line interface and the terminal dashboard.

pub mod cli;
pub mod tui;
