//! Path resolution for taskdeck configuration and data files.
//!
//! All taskdeck data is stored in `~/.taskdeck/`:
//! - `config.yaml` - Main configuration file
//! - `taskdeck.db` - SQLite database for tasks, history, settings
//! - `backups/` - Database backups

use std::path::PathBuf;

use crate::error::TaskdeckError;

/// Paths to taskdeck configuration and data directories.
#[derive(Debug, Clone)]
pub struct Paths {
    /// Root directory: `~/.taskdeck/`
    pub root: PathBuf,
    /// Config file: `~/.taskdeck/config.yaml`
    pub config_file: PathBuf,
    /// Database file: `~/.taskdeck/taskdeck.db`
    pub database: PathBuf,
    /// Backups directory: `~/.taskdeck/backups/`
    pub backups: PathBuf,
}

impl Paths {
    /// Create paths based on the user's home directory.
    ///
    /// # Errors
    ///
    /// Returns an error if the home directory cannot be determined.
    pub fn new() -> Result<Self, TaskdeckError> {
        let home = std::env::var("HOME").map_err(|_| {
            TaskdeckError::Config("Could not determine home directory".to_string())
        })?;

        let root = PathBuf::from(home).join(".taskdeck");

        Ok(Self::with_root(root))
    }

    /// Create paths with a custom root directory (useful for testing).
    #[must_use]
    pub fn with_root(root: PathBuf) -> Self {
        Self {
            config_file: root.join("config.yaml"),
            database: root.join("taskdeck.db"),
            backups: root.join("backups"),
            root,
        }
    }

    /// Ensure all directories exist, creating them if necessary.
    ///
    /// # Errors
    ///
    /// Returns an error if directory creation fails.
    pub fn ensure_dirs(&self) -> Result<(), TaskdeckError> {
        for dir in [&self.root, &self.backups] {
            if !dir.exists() {
                std::fs::create_dir_all(dir).map_err(|e| {
                    TaskdeckError::Config(format!("Failed to create directory {dir:?}: {e}"))
                })?;
            }
        }

        Ok(())
    }
}

impl Default for Paths {
    fn default() -> Self {
        Self::new().unwrap_or_else(|_| {
            // Fallback to current directory if home cannot be determined
            Self::with_root(PathBuf::from(".taskdeck"))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_paths_with_root() {
        let root = PathBuf::from("/tmp/test-taskdeck");
        let paths = Paths::with_root(root.clone());

        assert_eq!(paths.root, root);
        assert_eq!(paths.config_file, root.join("config.yaml"));
        assert_eq!(paths.database, root.join("taskdeck.db"));
        assert_eq!(paths.backups, root.join("backups"));
    }

    #[test]
    fn test_ensure_dirs() {
        let temp_dir = TempDir::new().unwrap();
        let paths = Paths::with_root(temp_dir.path().to_path_buf());

        paths.ensure_dirs().unwrap();

        assert!(paths.root.exists());
        assert!(paths.backups.exists());
    }
}
