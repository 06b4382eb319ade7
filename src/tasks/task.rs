//! The task entity.

use chrono::{DateTime, Local, NaiveDate, NaiveTime, Utc};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// Task priority.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    /// Needs attention first
    High,
    /// Default priority
    Medium,
    /// Can wait
    Low,
}

impl Priority {
    /// Database representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::High => "high",
            Self::Medium => "medium",
            Self::Low => "low",
        }
    }

    /// Parse the database representation; unknown values become Medium.
    #[must_use]
    pub fn from_str_lossy(s: &str) -> Self {
        match s {
            "high" => Self::High,
            "low" => Self::Low,
            _ => Self::Medium,
        }
    }

    /// Get display name.
    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::High => "High",
            Self::Medium => "Medium",
            Self::Low => "Low",
        }
    }
}

impl std::fmt::Display for Priority {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Task status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TaskStatus {
    /// Not done yet
    Pending,
    /// Done
    Completed,
}

impl TaskStatus {
    /// Database representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Completed => "completed",
        }
    }

    /// Parse the database representation; unknown values become Pending.
    #[must_use]
    pub fn from_str_lossy(s: &str) -> Self {
        match s {
            "completed" => Self::Completed,
            _ => Self::Pending,
        }
    }
}

impl std::fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Pending => write!(f, "Pending"),
            Self::Completed => write!(f, "Completed"),
        }
    }
}

/// How often a task repeats.
///
/// Stored and shown with the task; taskdeck does not reschedule
/// completed recurring tasks automatically.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum, Default)]
#[serde(rename_all = "lowercase")]
pub enum Recurrence {
    /// One-off task
    #[default]
    None,
    /// Repeats every day
    Daily,
    /// Repeats every week
    Weekly,
    /// Repeats every month
    Monthly,
}

impl Recurrence {
    /// Database representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Daily => "daily",
            Self::Weekly => "weekly",
            Self::Monthly => "monthly",
        }
    }

    /// Parse the database representation; unknown values become None.
    #[must_use]
    pub fn from_str_lossy(s: &str) -> Self {
        match s {
            "daily" => Self::Daily,
            "weekly" => Self::Weekly,
            "monthly" => Self::Monthly,
            _ => Self::None,
        }
    }
}

impl std::fmt::Display for Recurrence {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::None => write!(f, "None"),
            Self::Daily => write!(f, "Daily"),
            Self::Weekly => write!(f, "Weekly"),
            Self::Monthly => write!(f, "Monthly"),
        }
    }
}

/// A task.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Task {
    /// Database ID (None if not persisted)
    pub id: Option<i64>,
    /// Title (required)
    pub title: String,
    /// Longer description
    pub description: Option<String>,
    /// Due date
    pub due_date: Option<NaiveDate>,
    /// Due time on the due date
    pub due_time: Option<NaiveTime>,
    /// Priority
    pub priority: Priority,
    /// Status
    pub status: TaskStatus,
    /// Free-form category (Work, Personal, ...)
    pub category: Option<String>,
    /// Recurrence
    pub recurrence: Recurrence,
    /// Path to an attached file
    pub attachment: Option<String>,
    /// When the task was created
    pub created_at: DateTime<Utc>,
}

impl Task {
    /// Create a new pending task with defaults.
    #[must_use]
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            id: None,
            title: title.into(),
            description: None,
            due_date: None,
            due_time: None,
            priority: Priority::Medium,
            status: TaskStatus::Pending,
            category: None,
            recurrence: Recurrence::None,
            attachment: None,
            created_at: Utc::now(),
        }
    }

    /// Check if the task is still pending.
    #[must_use]
    pub fn is_pending(&self) -> bool {
        self.status == TaskStatus::Pending
    }

    /// Check if the task is overdue on a given date.
    #[must_use]
    pub fn is_overdue_on(&self, today: NaiveDate) -> bool {
        self.is_pending() && self.due_date.is_some_and(|due| due < today)
    }

    /// Check if the task is overdue today.
    #[must_use]
    pub fn is_overdue(&self) -> bool {
        self.is_overdue_on(Local::now().date_naive())
    }

    /// Check if the task is due on a given date.
    #[must_use]
    pub fn is_due_on(&self, date: NaiveDate) -> bool {
        self.due_date.is_some_and(|due| due == date)
    }

    /// Case-insensitive search over title, description, and category.
    #[must_use]
    pub fn matches_search(&self, term: &str) -> bool {
        let needle = term.to_lowercase();

        self.title.to_lowercase().contains(&needle)
            || self
                .description
                .as_ref()
                .is_some_and(|d| d.to_lowercase().contains(&needle))
            || self
                .category
                .as_ref()
                .is_some_and(|c| c.to_lowercase().contains(&needle))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_task_defaults() {
        let task = Task::new("Write report");
        assert_eq!(task.title, "Write report");
        assert_eq!(task.priority, Priority::Medium);
        assert_eq!(task.status, TaskStatus::Pending);
        assert_eq!(task.recurrence, Recurrence::None);
        assert!(task.id.is_none());
        assert!(task.due_date.is_none());
    }

    #[test]
    fn test_priority_round_trip() {
        for priority in [Priority::High, Priority::Medium, Priority::Low] {
            assert_eq!(Priority::from_str_lossy(priority.as_str()), priority);
        }
        assert_eq!(Priority::from_str_lossy("bogus"), Priority::Medium);
    }

    #[test]
    fn test_status_round_trip() {
        assert_eq!(TaskStatus::from_str_lossy("pending"), TaskStatus::Pending);
        assert_eq!(
            TaskStatus::from_str_lossy("completed"),
            TaskStatus::Completed
        );
        assert_eq!(TaskStatus::from_str_lossy("bogus"), TaskStatus::Pending);
    }

    #[test]
    fn test_is_overdue_on() {
        let today = NaiveDate::from_ymd_opt(2024, 2, 15).unwrap();

        let mut task = Task::new("Past due");
        task.due_date = NaiveDate::from_ymd_opt(2024, 2, 10);
        assert!(task.is_overdue_on(today));

        // Completed tasks are never overdue
        task.status = TaskStatus::Completed;
        assert!(!task.is_overdue_on(today));

        // Due today is not overdue
        let mut task = Task::new("Due today");
        task.due_date = Some(today);
        assert!(!task.is_overdue_on(today));
        assert!(task.is_due_on(today));

        // No due date is never overdue
        assert!(!Task::new("Someday").is_overdue_on(today));
    }

    #[test]
    fn test_matches_search() {
        let mut task = Task::new("Prepare presentation");
        task.description = Some("Quarterly review slides".to_string());
        task.category = Some("Work".to_string());

        assert!(task.matches_search("PRESENT"));
        assert!(task.matches_search("quarterly"));
        assert!(task.matches_search("work"));
        assert!(!task.matches_search("vacation"));
    }
}
