//! seep: industrial leak-monitoring demo.
//!
//! A simulated hourly occurrence feed with derived statistics, presented
//! through a CLI and a terminal dashboard, with an optional AI support
//! assistant and text-to-speech for its replies.

pub mod application;
pub mod domain;
pub mod infrastructure;
pub mod presentation;
