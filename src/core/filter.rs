//! Preset task filters.
//!
//! The task list can be narrowed by status, priority, or due date,
//! mirroring the filter choices of the dashboard:
//!
//! ```text
//! all | pending | completed | high | medium | low | overdue | due-today
//! ```
//!
//! A filter can render itself as a SQL `WHERE` clause for the store, and
//! can be applied to an in-memory task for display code.

use chrono::NaiveDate;

use crate::error::TaskdeckError;
use crate::tasks::{Priority, Task};

/// A preset filter over tasks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TaskFilter {
    /// Every task
    #[default]
    All,
    /// Pending tasks only
    Pending,
    /// Completed tasks only
    Completed,
    /// Tasks with a specific priority
    Priority(Priority),
    /// Pending tasks with a due date in the past
    Overdue,
    /// Tasks due on the given day
    DueToday,
}

impl TaskFilter {
    /// Parse a filter name from user input.
    ///
    /// # Errors
    ///
    /// Returns `TaskdeckError::InvalidInput` for unknown names.
    pub fn parse(s: &str) -> Result<Self, TaskdeckError> {
        match s.to_lowercase().as_str() {
            "all" => Ok(Self::All),
            "pending" => Ok(Self::Pending),
            "completed" | "done" => Ok(Self::Completed),
            "high" => Ok(Self::Priority(Priority::High)),
            "medium" => Ok(Self::Priority(Priority::Medium)),
            "low" => Ok(Self::Priority(Priority::Low)),
            "overdue" => Ok(Self::Overdue),
            "due-today" | "today" => Ok(Self::DueToday),
            _ => Err(TaskdeckError::InvalidInput(format!(
                "Unknown filter: {s} (expected all, pending, completed, high, medium, low, overdue, or due-today)"
            ))),
        }
    }

    /// Build the SQL `WHERE` clause and its parameters for this filter.
    ///
    /// `today` anchors the date-based filters so queries are reproducible
    /// in tests.
    #[must_use]
    pub fn where_clause(&self, today: NaiveDate) -> (String, Vec<String>) {
        match self {
            Self::All => (String::new(), Vec::new()),
            Self::Pending => ("WHERE status = 'pending'".to_string(), Vec::new()),
            Self::Completed => ("WHERE status = 'completed'".to_string(), Vec::new()),
            Self::Priority(p) => (
                "WHERE priority = ?1".to_string(),
                vec![p.as_str().to_string()],
            ),
            Self::Overdue => (
                "WHERE status = 'pending' AND due_date IS NOT NULL AND due_date < ?1".to_string(),
                vec![today.to_string()],
            ),
            Self::DueToday => (
                "WHERE due_date = ?1".to_string(),
                vec![today.to_string()],
            ),
        }
    }

    /// Check whether a task passes this filter on a given day.
    #[must_use]
    pub fn matches_on(&self, task: &Task, today: NaiveDate) -> bool {
        match self {
            Self::All => true,
            Self::Pending => task.is_pending(),
            Self::Completed => !task.is_pending(),
            Self::Priority(p) => task.priority == *p,
            Self::Overdue => task.is_overdue_on(today),
            Self::DueToday => task.is_due_on(today),
        }
    }
}

impl std::fmt::Display for TaskFilter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::All => write!(f, "All Tasks"),
            Self::Pending => write!(f, "Pending"),
            Self::Completed => write!(f, "Completed"),
            Self::Priority(p) => write!(f, "{p} Priority"),
            Self::Overdue => write!(f, "Overdue"),
            Self::DueToday => write!(f, "Due Today"),
        }
    }
}
