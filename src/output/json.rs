//! JSON output formatting for taskdeck.

use serde::Serialize;
use serde_json::json;

use crate::error::TaskdeckError;
use crate::tasks::Task;

/// Format a task list as JSON
///
/// # Errors
///
/// Returns `TaskdeckError::Parse` if JSON serialization fails.
pub fn format_tasks_json(tasks: &[Task], list_name: &str) -> Result<String, TaskdeckError> {
    let output = json!({
        "list": list_name,
        "count": tasks.len(),
        "items": tasks
    });
    Ok(serde_json::to_string_pretty(&output)?)
}

/// Generic JSON formatter for any serializable type
///
/// # Errors
///
/// Returns `TaskdeckError::Parse` if JSON serialization fails.
pub fn to_json<T: Serialize>(value: &T) -> Result<String, TaskdeckError> {
    Ok(serde_json::to_string_pretty(value)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tasks::{Priority, TaskStatus};
    use chrono::NaiveDate;

    fn make_task(title: &str, status: TaskStatus) -> Task {
        let mut task = Task::new(title);
        task.id = Some(7);
        task.status = status;
        task
    }

    #[test]
    fn test_format_tasks_json_empty_list() {
        let tasks: Vec<Task> = vec![];
        let result = format_tasks_json(&tasks, "All Tasks").unwrap();

        assert!(result.contains("\"list\": \"All Tasks\""));
        assert!(result.contains("\"count\": 0"));
        assert!(result.contains("\"items\": []"));
    }

    #[test]
    fn test_format_tasks_json_fields() {
        let mut task = make_task("Buy milk", TaskStatus::Pending);
        task.priority = Priority::High;
        task.due_date = NaiveDate::from_ymd_opt(2024, 12, 15);
        task.category = Some("Errands".to_string());

        let result = format_tasks_json(&[task], "Pending").unwrap();

        assert!(result.contains("\"count\": 1"));
        assert!(result.contains("\"title\": \"Buy milk\""));
        assert!(result.contains("\"priority\": \"high\""));
        assert!(result.contains("\"status\": \"pending\""));
        assert!(result.contains("\"due_date\": \"2024-12-15\""));
        assert!(result.contains("\"category\": \"Errands\""));
    }

    #[test]
    fn test_to_json_generic() {
        let task = make_task("Generic", TaskStatus::Completed);
        let result = to_json(&task).unwrap();

        assert!(result.contains("\"title\": \"Generic\""));
        assert!(result.contains("\"status\": \"completed\""));
    }

    #[test]
    fn test_json_preserves_special_characters() {
        let mut task = make_task("Task with \"quotes\"", TaskStatus::Pending);
        task.description = Some("Line 1\nLine 2".to_string());
        let result = to_json(&task).unwrap();

        assert!(result.contains("\\\"quotes\\\""));
        assert!(result.contains("\\n"));
    }
}
