//! Task storage.
//!
//! Persists tasks to the local database and records completion history.

use chrono::{DateTime, Local, NaiveDate, NaiveTime, Utc};
use rusqlite::{params, params_from_iter, OptionalExtension, Row};

use crate::core::TaskFilter;
use crate::error::TaskdeckError;
use crate::storage::Database;

use super::task::{Priority, Recurrence, Task, TaskStatus};

const TASK_COLUMNS: &str = "id, title, description, due_date, due_time, priority, status, \
                            category, recurrence, attachment_path, created_at";

/// Storage for tasks.
pub struct TaskStore {
    db: Database,
}

impl TaskStore {
    /// Create a task store over the default database.
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be opened.
    pub fn new() -> Result<Self, TaskdeckError> {
        let db = Database::open()?;
        Ok(Self { db })
    }

    /// Create a store with an existing database connection.
    #[must_use]
    pub const fn with_database(db: Database) -> Self {
        Self { db }
    }

    /// Insert a new task and fill in its database ID.
    ///
    /// # Errors
    ///
    /// Returns an error if the insert fails.
    pub fn add(&self, task: &mut Task) -> Result<(), TaskdeckError> {
        let conn = self.db.connection();

        conn.execute(
            r"INSERT INTO tasks
              (title, description, due_date, due_time, priority, status, category,
               recurrence, attachment_path, created_at)
              VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10)",
            params![
                task.title,
                task.description,
                task.due_date.map(|d| d.to_string()),
                task.due_time.map(|t| t.format("%H:%M:%S").to_string()),
                task.priority.as_str(),
                task.status.as_str(),
                task.category,
                task.recurrence.as_str(),
                task.attachment,
                task.created_at.to_rfc3339(),
            ],
        )
        .map_err(|e| TaskdeckError::Database(format!("Failed to insert task: {e}")))?;

        task.id = Some(conn.last_insert_rowid());

        if task.status == TaskStatus::Completed {
            self.record_completion(conn.last_insert_rowid())?;
        }

        Ok(())
    }

    /// Update an existing task.
    ///
    /// # Errors
    ///
    /// Returns `TaskdeckError::NotFound` if the task has no ID or no row
    /// matches it.
    pub fn update(&self, task: &Task) -> Result<(), TaskdeckError> {
        let Some(id) = task.id else {
            return Err(TaskdeckError::NotFound(
                "Cannot update a task that was never saved".to_string(),
            ));
        };

        let rows = self
            .db
            .connection()
            .execute(
                r"UPDATE tasks SET
                  title = ?1,
                  description = ?2,
                  due_date = ?3,
                  due_time = ?4,
                  priority = ?5,
                  status = ?6,
                  category = ?7,
                  recurrence = ?8,
                  attachment_path = ?9
                  WHERE id = ?10",
                params![
                    task.title,
                    task.description,
                    task.due_date.map(|d| d.to_string()),
                    task.due_time.map(|t| t.format("%H:%M:%S").to_string()),
                    task.priority.as_str(),
                    task.status.as_str(),
                    task.category,
                    task.recurrence.as_str(),
                    task.attachment,
                    id,
                ],
            )
            .map_err(|e| TaskdeckError::Database(format!("Failed to update task: {e}")))?;

        if rows == 0 {
            return Err(TaskdeckError::NotFound(format!("Task {id} does not exist")));
        }

        Ok(())
    }

    /// Get a task by ID.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn get(&self, id: i64) -> Result<Option<Task>, TaskdeckError> {
        let conn = self.db.connection();

        let mut stmt = conn
            .prepare(&format!("SELECT {TASK_COLUMNS} FROM tasks WHERE id = ?1"))
            .map_err(|e| TaskdeckError::Database(format!("Failed to prepare query: {e}")))?;

        stmt.query_row([id], row_to_task)
            .optional()
            .map_err(|e| TaskdeckError::Database(format!("Failed to query task: {e}")))
    }

    /// Delete a task.
    ///
    /// Returns true if a row was removed.
    ///
    /// # Errors
    ///
    /// Returns an error if the delete fails.
    pub fn delete(&self, id: i64) -> Result<bool, TaskdeckError> {
        let rows = self
            .db
            .connection()
            .execute("DELETE FROM tasks WHERE id = ?1", [id])
            .map_err(|e| TaskdeckError::Database(format!("Failed to delete task: {e}")))?;

        Ok(rows > 0)
    }

    /// Mark a pending task completed and record it in the history.
    ///
    /// Returns the updated task.
    ///
    /// # Errors
    ///
    /// Returns `TaskdeckError::NotFound` if the task does not exist, or
    /// `TaskdeckError::InvalidInput` if it is already completed.
    pub fn complete(&self, id: i64) -> Result<Task, TaskdeckError> {
        let Some(mut task) = self.get(id)? else {
            return Err(TaskdeckError::NotFound(format!("Task {id} does not exist")));
        };

        if task.status == TaskStatus::Completed {
            return Err(TaskdeckError::InvalidInput(format!(
                "Task {id} is already completed"
            )));
        }

        task.status = TaskStatus::Completed;
        self.update(&task)?;
        self.record_completion(id)?;

        Ok(task)
    }

    /// Append a completion timestamp to the history.
    fn record_completion(&self, task_id: i64) -> Result<(), TaskdeckError> {
        self.db
            .connection()
            .execute(
                "INSERT INTO task_history (task_id, completed_at) VALUES (?1, ?2)",
                params![task_id, Utc::now().to_rfc3339()],
            )
            .map_err(|e| TaskdeckError::Database(format!("Failed to record completion: {e}")))?;

        Ok(())
    }

    /// List tasks matching a preset filter, due-soonest first.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn list(&self, filter: &TaskFilter) -> Result<Vec<Task>, TaskdeckError> {
        self.list_on(filter, Local::now().date_naive())
    }

    /// List tasks with the date-based filters anchored to an explicit day.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn list_on(&self, filter: &TaskFilter, today: NaiveDate) -> Result<Vec<Task>, TaskdeckError> {
        let (clause, params) = filter.where_clause(today);

        let sql = format!(
            "SELECT {TASK_COLUMNS} FROM tasks {clause} \
             ORDER BY due_date IS NULL, due_date, id"
        );

        let conn = self.db.connection();
        let mut stmt = conn
            .prepare(&sql)
            .map_err(|e| TaskdeckError::Database(format!("Failed to prepare query: {e}")))?;

        let rows = stmt
            .query_map(params_from_iter(params.iter()), row_to_task)
            .map_err(|e| TaskdeckError::Database(format!("Failed to query tasks: {e}")))?;

        collect_tasks(rows)
    }

    /// Search tasks by substring over title, description, and category.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn search(&self, term: &str) -> Result<Vec<Task>, TaskdeckError> {
        let pattern = format!("%{term}%");

        let conn = self.db.connection();
        let mut stmt = conn
            .prepare(&format!(
                "SELECT {TASK_COLUMNS} FROM tasks \
                 WHERE title LIKE ?1 OR description LIKE ?1 OR category LIKE ?1 \
                 ORDER BY due_date IS NULL, due_date, id"
            ))
            .map_err(|e| TaskdeckError::Database(format!("Failed to prepare query: {e}")))?;

        let rows = stmt
            .query_map([&pattern], row_to_task)
            .map_err(|e| TaskdeckError::Database(format!("Failed to search tasks: {e}")))?;

        collect_tasks(rows)
    }

    /// Count completions recorded since a point in time.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn completions_since(&self, since: DateTime<Utc>) -> Result<i64, TaskdeckError> {
        self.db
            .connection()
            .query_row(
                "SELECT COUNT(*) FROM task_history WHERE completed_at >= ?1",
                [since.to_rfc3339()],
                |row| row.get(0),
            )
            .map_err(|e| TaskdeckError::Database(format!("Failed to count completions: {e}")))
    }
}

fn collect_tasks<I>(rows: I) -> Result<Vec<Task>, TaskdeckError>
where
    I: Iterator<Item = Result<Task, rusqlite::Error>>,
{
    let mut tasks = Vec::new();
    for row in rows {
        tasks.push(row.map_err(|e| TaskdeckError::Database(e.to_string()))?);
    }
    Ok(tasks)
}

/// Convert a database row to a Task.
fn row_to_task(row: &Row<'_>) -> Result<Task, rusqlite::Error> {
    let id: i64 = row.get(0)?;
    let title: String = row.get(1)?;
    let description: Option<String> = row.get(2)?;
    let due_date_str: Option<String> = row.get(3)?;
    let due_time_str: Option<String> = row.get(4)?;
    let priority_str: String = row.get(5)?;
    let status_str: String = row.get(6)?;
    let category: Option<String> = row.get(7)?;
    let recurrence_str: String = row.get(8)?;
    let attachment: Option<String> = row.get(9)?;
    let created_at_str: String = row.get(10)?;

    let due_date = due_date_str.and_then(|s| NaiveDate::parse_from_str(&s, "%Y-%m-%d").ok());
    let due_time = due_time_str.and_then(|s| NaiveTime::parse_from_str(&s, "%H:%M:%S").ok());

    let created_at = DateTime::parse_from_rfc3339(&created_at_str)
        .map(|t| t.with_timezone(&Utc))
        .unwrap_or_else(|_| Utc::now());

    Ok(Task {
        id: Some(id),
        title,
        description,
        due_date,
        due_time,
        priority: Priority::from_str_lossy(&priority_str),
        status: TaskStatus::from_str_lossy(&status_str),
        category,
        recurrence: Recurrence::from_str_lossy(&recurrence_str),
        attachment,
        created_at,
    })
}
