//! Productivity statistics.

pub mod dashboard;

pub use dashboard::DashboardStats;
