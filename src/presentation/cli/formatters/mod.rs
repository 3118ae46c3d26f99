pub mod series_fmt;
pub mod summary_fmt;
