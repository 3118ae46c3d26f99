pub mod chart;
pub mod chat_panel;
pub mod summary_panel;
