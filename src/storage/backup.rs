//! Database backup and restore.
//!
//! A backup is a plain copy of the database file, written into the
//! backups directory with a timestamped name. Restore copies a chosen
//! backup over the live database.

use std::path::{Path, PathBuf};

use chrono::Local;

use crate::config::Paths;
use crate::error::TaskdeckError;

/// Copy the live database into the backups directory.
///
/// Returns the path of the backup file that was written.
///
/// # Errors
///
/// Returns an error if there is no database yet or the copy fails.
pub fn create_backup(paths: &Paths) -> Result<PathBuf, TaskdeckError> {
    if !paths.database.exists() {
        return Err(TaskdeckError::NotFound(
            "No database to back up yet. Add a task first.".to_string(),
        ));
    }

    paths.ensure_dirs()?;

    let stamp = Local::now().format("%Y%m%d-%H%M%S");
    let target = paths.backups.join(format!("taskdeck-{stamp}.db"));

    std::fs::copy(&paths.database, &target).map_err(|e| {
        TaskdeckError::Config(format!(
            "Failed to write backup {}: {e}",
            target.display()
        ))
    })?;

    Ok(target)
}

/// Replace the live database with a backup file.
///
/// # Errors
///
/// Returns an error if the backup file does not exist or the copy fails.
pub fn restore_backup(paths: &Paths, backup: &Path) -> Result<(), TaskdeckError> {
    if !backup.exists() {
        return Err(TaskdeckError::NotFound(format!(
            "Backup file not found: {}",
            backup.display()
        )));
    }

    paths.ensure_dirs()?;

    std::fs::copy(backup, &paths.database).map_err(|e| {
        TaskdeckError::Config(format!(
            "Failed to restore from {}: {e}",
            backup.display()
        ))
    })?;

    Ok(())
}

/// List existing backup files, newest first.
///
/// # Errors
///
/// Returns an error if the backups directory cannot be read.
pub fn list_backups(paths: &Paths) -> Result<Vec<PathBuf>, TaskdeckError> {
    if !paths.backups.exists() {
        return Ok(Vec::new());
    }

    let entries = std::fs::read_dir(&paths.backups)
        .map_err(|e| TaskdeckError::Config(format!("Failed to read backups directory: {e}")))?;

    let mut backups: Vec<PathBuf> = entries
        .filter_map(Result::ok)
        .map(|e| e.path())
        .filter(|p| p.extension().is_some_and(|ext| ext == "db"))
        .collect();

    backups.sort();
    backups.reverse();

    Ok(backups)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::Database;
    use tempfile::TempDir;

    fn paths_with_database() -> (TempDir, Paths) {
        let temp_dir = TempDir::new().unwrap();
        let paths = Paths::with_root(temp_dir.path().to_path_buf());
        paths.ensure_dirs().unwrap();
        drop(Database::open_at(&paths.database).unwrap());
        (temp_dir, paths)
    }

    #[test]
    fn test_backup_without_database() {
        let temp_dir = TempDir::new().unwrap();
        let paths = Paths::with_root(temp_dir.path().to_path_buf());

        let result = create_backup(&paths);
        assert!(matches!(result, Err(TaskdeckError::NotFound(_))));
    }

    #[test]
    fn test_backup_creates_file() {
        let (_guard, paths) = paths_with_database();

        let backup = create_backup(&paths).unwrap();
        assert!(backup.exists());
        assert!(backup.starts_with(&paths.backups));
    }

    #[test]
    fn test_restore_round_trip() {
        let (_guard, paths) = paths_with_database();

        let backup = create_backup(&paths).unwrap();
        std::fs::remove_file(&paths.database).unwrap();

        restore_backup(&paths, &backup).unwrap();
        assert!(paths.database.exists());

        // Restored file is a working database.
        let db = Database::open_at(&paths.database).unwrap();
        assert!(db.schema_version().unwrap() > 0);
    }

    #[test]
    fn test_restore_missing_backup() {
        let (_guard, paths) = paths_with_database();

        let result = restore_backup(&paths, Path::new("/nonexistent/backup.db"));
        assert!(matches!(result, Err(TaskdeckError::NotFound(_))));
    }

    #[test]
    fn test_list_backups() {
        let (_guard, paths) = paths_with_database();

        assert!(list_backups(&paths).unwrap().is_empty());

        create_backup(&paths).unwrap();
        assert_eq!(list_backups(&paths).unwrap().len(), 1);
    }
}
