//! Task command implementations.

use colored::Colorize;

use crate::cli::args::{AddArgs, EditArgs, ListArgs, OutputFormat};
use crate::config::Config;
use crate::core::{parse_due_date, parse_due_time, TaskFilter};
use crate::error::TaskdeckError;
use crate::output::{format_task, format_tasks, to_json};
use crate::tasks::{Task, TaskStatus, TaskStore};

/// Add a new task.
pub fn add(args: AddArgs, config: &Config, format: OutputFormat) -> Result<String, TaskdeckError> {
    let title = args.title.trim();
    if title.is_empty() {
        return Err(TaskdeckError::InvalidInput(
            "Task title is required".to_string(),
        ));
    }

    let mut task = Task::new(title);
    task.description = args.description;
    task.priority = args
        .priority
        .unwrap_or(config.tasks.default_priority);
    task.category = args.category.or_else(|| config.tasks.default_category.clone());
    task.recurrence = args.recurrence.unwrap_or_default();
    task.attachment = args.attachment;

    if let Some(ref due) = args.due {
        task.due_date = Some(parse_due_date(due)?);
    }
    if let Some(ref at) = args.due_time {
        task.due_time = Some(parse_due_time(at)?);
    }

    let store = TaskStore::new()?;
    store.add(&mut task)?;

    match format {
        OutputFormat::Json => to_json(&task),
        OutputFormat::Pretty => {
            let mut output = Vec::new();
            output.push(format!("✨ Added task {}", task_ref(&task)).green().to_string());
            if let Some(due) = task.due_date {
                output.push(format!("   Due: {due}"));
            }
            Ok(output.join("\n"))
        }
    }
}

/// List tasks, optionally filtered and searched.
pub fn list(args: ListArgs, format: OutputFormat) -> Result<String, TaskdeckError> {
    let filter = TaskFilter::parse(&args.filter)?;

    let store = TaskStore::new()?;
    let mut tasks = store.list(&filter)?;

    if let Some(ref term) = args.search {
        tasks.retain(|t| t.matches_search(term));
    }

    format_tasks(&tasks, &filter.to_string(), format)
}

/// Show one task in detail.
pub fn show(id: i64, format: OutputFormat) -> Result<String, TaskdeckError> {
    let store = TaskStore::new()?;

    let Some(task) = store.get(id)? else {
        return Err(TaskdeckError::NotFound(format!("Task {id} does not exist")));
    };

    format_task(&task, format)
}

/// Edit fields of an existing task.
pub fn edit(args: EditArgs, format: OutputFormat) -> Result<String, TaskdeckError> {
    let store = TaskStore::new()?;

    let Some(mut task) = store.get(args.id)? else {
        return Err(TaskdeckError::NotFound(format!(
            "Task {} does not exist",
            args.id
        )));
    };

    if let Some(title) = args.title {
        let title = title.trim().to_string();
        if title.is_empty() {
            return Err(TaskdeckError::InvalidInput(
                "Task title is required".to_string(),
            ));
        }
        task.title = title;
    }
    if let Some(description) = args.description {
        task.description = Some(description);
    }
    if args.clear_due {
        task.due_date = None;
        task.due_time = None;
    }
    if let Some(ref due) = args.due {
        task.due_date = Some(parse_due_date(due)?);
    }
    if let Some(ref at) = args.due_time {
        task.due_time = Some(parse_due_time(at)?);
    }
    if let Some(priority) = args.priority {
        task.priority = priority;
    }
    if let Some(category) = args.category {
        task.category = Some(category);
    }
    if let Some(recurrence) = args.recurrence {
        task.recurrence = recurrence;
    }
    if let Some(attachment) = args.attachment {
        task.attachment = Some(attachment);
    }
    if args.reopen {
        task.status = TaskStatus::Pending;
    }

    store.update(&task)?;

    match format {
        OutputFormat::Json => to_json(&task),
        OutputFormat::Pretty => Ok(format!("✅ Updated task {}", task_ref(&task))
            .green()
            .to_string()),
    }
}

/// Mark a task completed.
pub fn complete(id: i64, format: OutputFormat) -> Result<String, TaskdeckError> {
    let store = TaskStore::new()?;
    let task = store.complete(id)?;

    match format {
        OutputFormat::Json => to_json(&task),
        OutputFormat::Pretty => {
            let mut output = Vec::new();
            output.push(format!("🎉 Completed {}", task_ref(&task)).green().to_string());
            output.push(
                "   Nice work. See your progress with 'taskdeck stats'"
                    .dimmed()
                    .to_string(),
            );
            Ok(output.join("\n"))
        }
    }
}

/// Delete a task.
pub fn delete(id: i64, format: OutputFormat) -> Result<String, TaskdeckError> {
    let store = TaskStore::new()?;

    let Some(task) = store.get(id)? else {
        return Err(TaskdeckError::NotFound(format!("Task {id} does not exist")));
    };

    store.delete(id)?;

    match format {
        OutputFormat::Json => to_json(&task),
        OutputFormat::Pretty => Ok(format!("🗑️  Deleted {}", task_ref(&task))),
    }
}

/// Search tasks by substring.
pub fn search(query: &str, format: OutputFormat) -> Result<String, TaskdeckError> {
    let store = TaskStore::new()?;
    let tasks = store.search(query)?;

    format_tasks(&tasks, &format!("Search: {query}"), format)
}

fn task_ref(task: &Task) -> String {
    task.id.map_or_else(
        || format!("\"{}\"", task.title),
        |id| format!("#{id} \"{}\"", task.title),
    )
}
