//! Core helpers shared across features.

pub mod datetime;
pub mod filter;

pub use datetime::{parse_due_date, parse_due_time};
pub use filter::TaskFilter;
