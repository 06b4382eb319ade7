//! Stats command implementation.

use crate::cli::args::OutputFormat;
use crate::error::TaskdeckError;
use crate::output::format_stats;
use crate::stats::DashboardStats;
use crate::tasks::TaskStore;

/// Show the productivity dashboard.
pub fn stats(format: OutputFormat) -> Result<String, TaskdeckError> {
    let store = TaskStore::new()?;
    let stats = DashboardStats::collect(&store)?;

    format_stats(&stats, format)
}
