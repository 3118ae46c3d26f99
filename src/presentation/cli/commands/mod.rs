pub mod ask;
pub mod config;
pub mod report;
pub mod simulate;
