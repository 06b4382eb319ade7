//! Pretty (colored) output formatting for taskdeck.

use colored::Colorize;

use crate::stats::DashboardStats;
use crate::tasks::{Priority, Task, TaskStatus};

/// Format a task list as a table.
#[must_use]
pub fn format_tasks_pretty(tasks: &[Task], title: &str) -> String {
    if tasks.is_empty() {
        return format!("No tasks in {title}.\n\nAdd one with: taskdeck add \"My task\"");
    }

    let mut output = Vec::new();
    output.push(format!("{} ({})", title.bold(), tasks.len()));
    output.push("─".repeat(72));

    output.push(format!(
        "{:<5} {:<12} {:<8} {:<30} {:<14} {}",
        "ID", "Due", "Pri", "Title", "Category", "Status"
    ));
    output.push("─".repeat(72));

    for task in tasks {
        output.push(format_task_row(task));
    }

    output.join("\n")
}

/// Format one task as a table row.
///
/// The colored status goes last so the fixed-width columns stay aligned.
fn format_task_row(task: &Task) -> String {
    let id = task.id.map_or_else(|| "-".to_string(), |id| id.to_string());
    let due = task
        .due_date
        .map_or_else(|| "-".to_string(), |d| d.to_string());
    let priority = task.priority.display_name();
    let title = truncate(&task.title, 30);
    let category = truncate(task.category.as_deref().unwrap_or("-"), 14);

    let status = if task.is_overdue() {
        "overdue".red().to_string()
    } else {
        match task.status {
            TaskStatus::Completed => "✓ done".green().to_string(),
            TaskStatus::Pending => "pending".yellow().to_string(),
        }
    };

    format!("{id:<5} {due:<12} {priority:<8} {title:<30} {category:<14} {status}")
}

/// Format a single task in detail.
#[must_use]
pub fn format_task_pretty(task: &Task) -> String {
    let mut output = Vec::new();

    output.push(task.title.bold().to_string());
    output.push("─".repeat(40));

    if let Some(id) = task.id {
        output.push(format!("ID:         {id}"));
    }
    output.push(format!("Status:     {}", task.status));
    output.push(format!("Priority:   {}", colorize_priority(task.priority)));

    if let Some(due) = task.due_date {
        let time = task
            .due_time
            .map_or_else(String::new, |t| format!(" at {}", t.format("%H:%M")));
        let overdue = if task.is_overdue() {
            " (overdue)".red().to_string()
        } else {
            String::new()
        };
        output.push(format!("Due:        {due}{time}{overdue}"));
    }

    if let Some(ref category) = task.category {
        output.push(format!("Category:   {category}"));
    }

    if task.recurrence != crate::tasks::Recurrence::None {
        output.push(format!("Repeats:    {}", task.recurrence));
    }

    if let Some(ref attachment) = task.attachment {
        output.push(format!("Attachment: {attachment}"));
    }

    if let Some(ref description) = task.description {
        output.push(String::new());
        output.push(description.clone());
    }

    output.push(String::new());
    output.push(
        format!("Created {}", task.created_at.format("%Y-%m-%d %H:%M"))
            .dimmed()
            .to_string(),
    );

    output.join("\n")
}

/// Format the statistics dashboard.
#[must_use]
pub fn format_stats_pretty(stats: &DashboardStats) -> String {
    let mut output = Vec::new();

    output.push("📊 Productivity Dashboard".bold().to_string());
    output.push("═".repeat(50));
    output.push(String::new());

    output.push(format!("Total tasks:     {}", stats.total));
    output.push(format!(
        "Completed:       {} ({:.0}%)",
        stats.completed.to_string().green(),
        stats.completion_rate
    ));
    output.push(format!(
        "Pending:         {} ({:.0}%)",
        stats.pending.to_string().yellow(),
        stats.pending_rate
    ));
    output.push(format!(
        "Overdue:         {} ({:.0}%)",
        stats.overdue.to_string().red(),
        stats.overdue_rate
    ));
    output.push(format!("Done this week:  {}", stats.completed_last_week));

    output.push(String::new());
    output.push("By priority".bold().to_string());
    for (priority, count) in &stats.by_priority {
        output.push(format!(
            "  {:<8} {:>3}  {}",
            priority.display_name(),
            count,
            bar_for(*count, stats.total)
        ));
    }

    if !stats.by_category.is_empty() {
        output.push(String::new());
        output.push("By category".bold().to_string());
        for (category, count) in &stats.by_category {
            output.push(format!(
                "  {:<16} {:>3}  {}",
                truncate(category, 16),
                count,
                bar_for(*count, stats.total)
            ));
        }
    }

    output.push(String::new());
    output.push(format!(
        "Progress: {} {:.0}% - {}",
        render_progress_bar(stats.completion_rate / 100.0, 30),
        stats.completion_rate,
        stats.encouragement()
    ));

    output.join("\n")
}

/// Render a progress bar.
#[must_use]
#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::cast_precision_loss
)]
pub fn render_progress_bar(progress: f64, width: usize) -> String {
    let progress = progress.clamp(0.0, 1.0);
    let filled = (progress * width as f64) as usize;
    let empty = width.saturating_sub(filled);

    format!("[{}{}]", "█".repeat(filled), "░".repeat(empty))
}

fn colorize_priority(priority: Priority) -> String {
    match priority {
        Priority::High => "High".red().to_string(),
        Priority::Medium => "Medium".yellow().to_string(),
        Priority::Low => "Low".green().to_string(),
    }
}

fn bar_for(count: usize, total: usize) -> String {
    if total == 0 {
        return String::new();
    }
    "▇".repeat(count * 20 / total)
}

fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() > max {
        let truncated: String = s.chars().take(max.saturating_sub(3)).collect();
        format!("{truncated}...")
    } else {
        s.to_string()
    }
}
