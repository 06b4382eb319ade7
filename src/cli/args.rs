use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_complete::Shell;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::tasks::{Priority, Recurrence};

#[derive(Parser)]
#[command(name = "taskdeck")]
#[command(about = "A task manager and Pomodoro productivity dashboard for the terminal")]
#[command(long_about = "taskdeck - tasks, stats, and a Pomodoro timer

Manage your tasks from the command line, review aggregate productivity
statistics, and run focused Pomodoro sessions in a full-screen timer.

QUICK START:
  taskdeck add \"Write report\" --due tomorrow --priority high
  taskdeck list --filter pending     Show open tasks
  taskdeck complete 3                Mark task 3 done
  taskdeck stats                     Productivity dashboard
  taskdeck pomodoro                  Start the timer

OUTPUT FORMATS:
  --output pretty    Human-readable colored output (default)
  --output json      Machine-readable JSON for scripting

For more information on a specific command, run:
  taskdeck <command> --help")]
#[command(version, propagate_version = true)]
pub struct Cli {
    /// Output format for command results
    ///
    /// Use 'pretty' for human-readable colored output (default),
    /// or 'json' for machine-readable output suitable for scripting.
    #[arg(short, long, value_enum, global = true)]
    pub output: Option<OutputFormat>,

    #[command(subcommand)]
    pub command: Commands,
}

/// Output format for command results.
#[derive(ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable colored output.
    #[default]
    Pretty,
    /// Machine-readable JSON output.
    Json,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Add a new task
    ///
    /// Creates a pending task. Due dates accept ISO dates and a few
    /// relative forms.
    ///
    /// # Examples
    ///
    ///   taskdeck add "Buy milk"
    ///   taskdeck add "Team meeting" --due friday --at 14:30 -c Work
    ///   taskdeck add "Pay rent" --due "in 3 days" -p high -r monthly
    #[command(alias = "a")]
    Add(AddArgs),

    /// List tasks
    ///
    /// Shows tasks due-soonest first. Narrow the list with a preset
    /// filter or a search term.
    ///
    /// # Filters
    ///
    ///   all, pending, completed, high, medium, low, overdue, due-today
    ///
    /// # Examples
    ///
    ///   taskdeck list
    ///   taskdeck list --filter overdue
    ///   taskdeck ls -f pending --search report
    #[command(alias = "ls")]
    List(ListArgs),

    /// Show one task in detail
    Show {
        /// Task ID
        id: i64,
    },

    /// Edit an existing task
    ///
    /// Only the given fields change; everything else is preserved.
    ///
    /// # Examples
    ///
    ///   taskdeck edit 3 --title "New title"
    ///   taskdeck edit 3 --due tomorrow --priority low
    ///   taskdeck edit 3 --clear-due
    Edit(EditArgs),

    /// Mark a task completed
    ///
    /// Records the completion in the history that feeds the dashboard.
    #[command(alias = "done")]
    Complete {
        /// Task ID
        id: i64,
    },

    /// Delete a task
    ///
    /// Removes the task and its completion history. This cannot be undone.
    #[command(alias = "rm")]
    Delete {
        /// Task ID
        id: i64,
    },

    /// Search tasks by title, description, or category
    ///
    /// # Examples
    ///
    ///   taskdeck search report
    ///   taskdeck search Work -o json
    Search {
        /// Text to look for (case-insensitive)
        query: String,
    },

    /// Show the productivity dashboard
    ///
    /// Totals with percentages, priority and category breakdowns, and
    /// completions over the last seven days.
    Stats,

    /// Run the Pomodoro timer
    ///
    /// Opens a full-screen timer that alternates Work and Break sessions
    /// using the configured durations. Durations can be adjusted live
    /// while a session runs; progress is preserved.
    ///
    /// # Keys
    ///
    ///   s start/resume   p pause   x stop   q quit
    ///   [ / ] work duration -/+1 min
    ///   { / } break duration -/+1 min
    #[command(alias = "pomo")]
    Pomodoro,

    /// View or change the Pomodoro durations
    Settings(SettingsArgs),

    /// Back up the database
    ///
    /// Writes a timestamped copy into ~/.taskdeck/backups/.
    Backup,

    /// Restore the database from a backup file
    ///
    /// Replaces the live database. Back up first if unsure.
    Restore {
        /// Backup file to restore from
        file: PathBuf,
    },

    /// Generate shell completions
    ///
    /// # Examples
    ///
    ///   taskdeck completions zsh > ~/.zfunc/_taskdeck
    ///   taskdeck completions bash > /etc/bash_completion.d/taskdeck
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[derive(Args)]
pub struct AddArgs {
    /// Task title
    pub title: String,

    /// Longer description
    #[arg(short, long)]
    pub description: Option<String>,

    /// Due date (YYYY-MM-DD, today, tomorrow, a weekday, 'in N days')
    #[arg(long)]
    pub due: Option<String>,

    /// Due time on the due date (HH:MM)
    #[arg(long = "at", requires = "due")]
    pub due_time: Option<String>,

    /// Priority
    #[arg(short, long, value_enum)]
    pub priority: Option<Priority>,

    /// Category (Work, Personal, ...)
    #[arg(short, long)]
    pub category: Option<String>,

    /// Recurrence
    #[arg(short, long, value_enum)]
    pub recurrence: Option<Recurrence>,

    /// Path to an attached file
    #[arg(long)]
    pub attachment: Option<String>,
}

#[derive(Args)]
pub struct ListArgs {
    /// Preset filter
    #[arg(short, long, default_value = "all")]
    pub filter: String,

    /// Only show tasks containing this text
    #[arg(short, long)]
    pub search: Option<String>,
}

#[derive(Args)]
pub struct EditArgs {
    /// Task ID
    pub id: i64,

    /// New title
    #[arg(long)]
    pub title: Option<String>,

    /// New description
    #[arg(short, long)]
    pub description: Option<String>,

    /// New due date
    #[arg(long, conflicts_with = "clear_due")]
    pub due: Option<String>,

    /// New due time (HH:MM)
    #[arg(long = "at")]
    pub due_time: Option<String>,

    /// Remove the due date and time
    #[arg(long)]
    pub clear_due: bool,

    /// New priority
    #[arg(short, long, value_enum)]
    pub priority: Option<Priority>,

    /// New category
    #[arg(short, long)]
    pub category: Option<String>,

    /// New recurrence
    #[arg(short, long, value_enum)]
    pub recurrence: Option<Recurrence>,

    /// New attachment path
    #[arg(long)]
    pub attachment: Option<String>,

    /// Reopen a completed task
    #[arg(long)]
    pub reopen: bool,
}

#[derive(Args)]
pub struct SettingsArgs {
    #[command(subcommand)]
    pub command: SettingsCommands,
}

#[derive(Subcommand)]
pub enum SettingsCommands {
    /// Show the configured durations
    Show,

    /// Set a duration in minutes
    ///
    /// # Examples
    ///
    ///   taskdeck settings set work 30
    ///   taskdeck settings set break 10
    Set {
        /// Which duration (work, break, long-break)
        key: String,
        /// Minutes (at least 1)
        minutes: u32,
    },

    /// Reset all durations to the defaults (25/5/15)
    Reset,
}
