//! Dashboard statistics.
//!
//! Aggregates the task table into the counts and distributions shown by
//! `taskdeck stats`: totals with percentages, priority and category
//! breakdowns, and completions over the last seven days from the history
//! table.

use std::collections::HashMap;

use chrono::{Duration, Local, NaiveDate, Utc};
use serde::Serialize;

use crate::core::TaskFilter;
use crate::error::TaskdeckError;
use crate::tasks::{Priority, TaskStore};

/// Aggregate statistics over all tasks.
#[derive(Debug, Clone, Serialize)]
pub struct DashboardStats {
    /// Number of tasks
    pub total: usize,
    /// Completed tasks
    pub completed: usize,
    /// Pending tasks
    pub pending: usize,
    /// Pending tasks past their due date
    pub overdue: usize,
    /// Completed as a percentage of total (0 - 100)
    pub completion_rate: f64,
    /// Pending as a percentage of total
    pub pending_rate: f64,
    /// Overdue as a percentage of total
    pub overdue_rate: f64,
    /// Task counts per priority, High first
    pub by_priority: Vec<(Priority, usize)>,
    /// Task counts per category, largest first
    pub by_category: Vec<(String, usize)>,
    /// Completions recorded in the last 7 days
    pub completed_last_week: i64,
}

impl DashboardStats {
    /// Collect statistics from the task store.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying queries fail.
    pub fn collect(store: &TaskStore) -> Result<Self, TaskdeckError> {
        Self::collect_on(store, Local::now().date_naive())
    }

    /// Collect statistics with overdue checks anchored to an explicit day.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying queries fail.
    pub fn collect_on(store: &TaskStore, today: NaiveDate) -> Result<Self, TaskdeckError> {
        let tasks = store.list_on(&TaskFilter::All, today)?;

        let total = tasks.len();
        let completed = tasks.iter().filter(|t| !t.is_pending()).count();
        let pending = tasks.iter().filter(|t| t.is_pending()).count();
        let overdue = tasks.iter().filter(|t| t.is_overdue_on(today)).count();

        let by_priority = [Priority::High, Priority::Medium, Priority::Low]
            .into_iter()
            .map(|p| (p, tasks.iter().filter(|t| t.priority == p).count()))
            .collect();

        let mut categories: HashMap<String, usize> = HashMap::new();
        for task in &tasks {
            let category = task
                .category
                .clone()
                .unwrap_or_else(|| "(No Category)".to_string());
            *categories.entry(category).or_default() += 1;
        }
        let mut by_category: Vec<(String, usize)> = categories.into_iter().collect();
        by_category.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));

        let completed_last_week = store.completions_since(Utc::now() - Duration::days(7))?;

        Ok(Self {
            total,
            completed,
            pending,
            overdue,
            completion_rate: percentage(completed, total),
            pending_rate: percentage(pending, total),
            overdue_rate: percentage(overdue, total),
            by_priority,
            by_category,
            completed_last_week,
        })
    }

    /// The dashboard's one-line verdict on the completion rate.
    #[must_use]
    pub fn encouragement(&self) -> &'static str {
        if self.total == 0 {
            "No tasks yet"
        } else if self.completion_rate >= 80.0 {
            "Excellent!"
        } else if self.completion_rate >= 50.0 {
            "Keep going!"
        } else {
            "You can do it!"
        }
    }
}

#[allow(clippy::cast_precision_loss)]
fn percentage(part: usize, total: usize) -> f64 {
    if total == 0 {
        0.0
    } else {
        part as f64 / total as f64 * 100.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::Database;
    use crate::tasks::{Task, TaskStatus};

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 2, 15).unwrap()
    }

    fn store_with_tasks() -> TaskStore {
        let store = TaskStore::with_database(Database::open_in_memory().unwrap());

        let mut overdue = Task::new("Overdue");
        overdue.due_date = NaiveDate::from_ymd_opt(2024, 2, 10);
        overdue.priority = Priority::High;
        overdue.category = Some("Work".to_string());
        store.add(&mut overdue).unwrap();

        let mut pending = Task::new("Pending");
        pending.category = Some("Work".to_string());
        store.add(&mut pending).unwrap();

        let mut done = Task::new("Done");
        done.status = TaskStatus::Completed;
        done.priority = Priority::Low;
        store.add(&mut done).unwrap();

        let mut done2 = Task::new("Done too");
        done2.status = TaskStatus::Completed;
        store.add(&mut done2).unwrap();

        store
    }

    #[test]
    fn test_counts_and_rates() {
        let store = store_with_tasks();
        let stats = DashboardStats::collect_on(&store, today()).unwrap();

        assert_eq!(stats.total, 4);
        assert_eq!(stats.completed, 2);
        assert_eq!(stats.pending, 2);
        assert_eq!(stats.overdue, 1);
        assert!((stats.completion_rate - 50.0).abs() < f64::EPSILON);
        assert!((stats.pending_rate - 50.0).abs() < f64::EPSILON);
        assert!((stats.overdue_rate - 25.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_priority_distribution() {
        let store = store_with_tasks();
        let stats = DashboardStats::collect_on(&store, today()).unwrap();

        assert_eq!(
            stats.by_priority,
            vec![
                (Priority::High, 1),
                (Priority::Medium, 2),
                (Priority::Low, 1)
            ]
        );
    }

    #[test]
    fn test_category_distribution() {
        let store = store_with_tasks();
        let stats = DashboardStats::collect_on(&store, today()).unwrap();

        assert_eq!(stats.by_category[0], ("Work".to_string(), 2));
        assert_eq!(stats.by_category[1], ("(No Category)".to_string(), 2));
    }

    #[test]
    fn test_completed_last_week() {
        let store = store_with_tasks();
        let stats = DashboardStats::collect_on(&store, today()).unwrap();

        // The two tasks inserted as completed were recorded in history.
        assert_eq!(stats.completed_last_week, 2);
    }

    #[test]
    fn test_empty_store() {
        let store = TaskStore::with_database(Database::open_in_memory().unwrap());
        let stats = DashboardStats::collect_on(&store, today()).unwrap();

        assert_eq!(stats.total, 0);
        assert!((stats.completion_rate - 0.0).abs() < f64::EPSILON);
        assert_eq!(stats.encouragement(), "No tasks yet");
    }

    #[test]
    fn test_encouragement_tiers() {
        let mut stats = DashboardStats {
            total: 10,
            completed: 9,
            pending: 1,
            overdue: 0,
            completion_rate: 90.0,
            pending_rate: 10.0,
            overdue_rate: 0.0,
            by_priority: Vec::new(),
            by_category: Vec::new(),
            completed_last_week: 0,
        };
        assert_eq!(stats.encouragement(), "Excellent!");

        stats.completion_rate = 60.0;
        assert_eq!(stats.encouragement(), "Keep going!");

        stats.completion_rate = 10.0;
        assert_eq!(stats.encouragement(), "You can do it!");
    }

    #[test]
    fn test_category_sort_alphabetical_on_tie() {
        let store = TaskStore::with_database(Database::open_in_memory().unwrap());
        for name in ["B task", "A task"] {
            let mut task = Task::new(name);
            task.category = Some(name.chars().next().map(String::from).unwrap());
            store.add(&mut task).unwrap();
        }

        let stats = DashboardStats::collect_on(&store, today()).unwrap();
        assert_eq!(stats.by_category[0].0, "A");
        assert_eq!(stats.by_category[1].0, "B");
    }
}
