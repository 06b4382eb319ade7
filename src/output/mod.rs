//! Output formatting for taskdeck.
//!
//! This module provides formatters for displaying tasks and statistics in
//! pretty (colored) and JSON formats.

mod json;
mod pretty;

use crate::cli::args::OutputFormat;
use crate::error::TaskdeckError;
use crate::stats::DashboardStats;
use crate::tasks::Task;

pub use json::*;
pub use pretty::*;

/// Format a task list based on output format
///
/// # Errors
///
/// Returns `TaskdeckError::Parse` if JSON serialization fails.
pub fn format_tasks(
    tasks: &[Task],
    title: &str,
    format: OutputFormat,
) -> Result<String, TaskdeckError> {
    match format {
        OutputFormat::Pretty => Ok(format_tasks_pretty(tasks, title)),
        OutputFormat::Json => format_tasks_json(tasks, title),
    }
}

/// Format a single task based on output format
///
/// # Errors
///
/// Returns `TaskdeckError::Parse` if JSON serialization fails.
pub fn format_task(task: &Task, format: OutputFormat) -> Result<String, TaskdeckError> {
    match format {
        OutputFormat::Pretty => Ok(format_task_pretty(task)),
        OutputFormat::Json => to_json(task),
    }
}

/// Format dashboard statistics based on output format
///
/// # Errors
///
/// Returns `TaskdeckError::Parse` if JSON serialization fails.
pub fn format_stats(stats: &DashboardStats, format: OutputFormat) -> Result<String, TaskdeckError> {
    match format {
        OutputFormat::Pretty => Ok(format_stats_pretty(stats)),
        OutputFormat::Json => to_json(stats),
    }
}
