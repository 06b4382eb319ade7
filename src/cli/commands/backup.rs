//! Backup and restore command implementations.

use std::path::Path;

use colored::Colorize;
use serde_json::json;

use crate::cli::args::OutputFormat;
use crate::config::Paths;
use crate::error::TaskdeckError;
use crate::storage;

/// Back up the database into the backups directory.
pub fn backup(format: OutputFormat) -> Result<String, TaskdeckError> {
    let paths = Paths::new()?;
    let target = storage::create_backup(&paths)?;
    let total = storage::list_backups(&paths)?.len();

    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(&json!({
            "backup": target.display().to_string(),
            "total_backups": total,
        }))?),
        OutputFormat::Pretty => Ok(format!(
            "💾 Backup written to {} ({total} total)",
            target.display().to_string().bold()
        )),
    }
}

/// Restore the database from a backup file.
pub fn restore(file: &Path, format: OutputFormat) -> Result<String, TaskdeckError> {
    let paths = Paths::new()?;
    storage::restore_backup(&paths, file)?;

    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(&json!({
            "restored_from": file.display().to_string(),
        }))?),
        OutputFormat::Pretty => Ok(format!(
            "✅ Database restored from {}",
            file.display().to_string().bold()
        )),
    }
}
