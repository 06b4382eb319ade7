//! `SQLite` storage for taskdeck.
//!
//! One database file at `~/.taskdeck/taskdeck.db` holds the task table,
//! the completion history, and the durable settings.

pub mod backup;
pub mod database;
pub mod migrations;
pub mod settings;

pub use backup::{create_backup, list_backups, restore_backup};
pub use database::Database;
pub use settings::{DurationSetting, SettingsStore};
