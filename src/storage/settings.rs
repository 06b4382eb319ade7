//! Durable settings storage.
//!
//! Settings live in the `settings` table as name/value pairs and survive
//! restarts. The Pomodoro duration settings get typed accessors; values
//! are stored as positive integer minutes.

use rusqlite::params;

use crate::error::TaskdeckError;
use crate::pomodoro::SessionKind;

use super::Database;

/// The three configurable Pomodoro durations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DurationSetting {
    /// Work session length
    Work,
    /// Short break length
    Break,
    /// Long break length
    LongBreak,
}

impl DurationSetting {
    /// The settings-table key for this duration.
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::Work => "work_duration",
            Self::Break => "break_duration",
            Self::LongBreak => "long_break_duration",
        }
    }

    /// Default value in minutes, used when no setting has been saved.
    #[must_use]
    pub const fn default_minutes(self) -> u32 {
        match self {
            Self::Work => 25,
            Self::Break => 5,
            Self::LongBreak => 15,
        }
    }

    /// Parse a setting name from user input.
    ///
    /// # Errors
    ///
    /// Returns `TaskdeckError::InvalidInput` for unknown names.
    pub fn parse(s: &str) -> Result<Self, TaskdeckError> {
        match s.to_lowercase().as_str() {
            "work" | "work_duration" => Ok(Self::Work),
            "break" | "break_duration" => Ok(Self::Break),
            "long-break" | "long_break" | "long_break_duration" => Ok(Self::LongBreak),
            _ => Err(TaskdeckError::InvalidInput(format!(
                "Unknown duration setting: {s} (expected work, break, or long-break)"
            ))),
        }
    }
}

impl From<SessionKind> for DurationSetting {
    fn from(kind: SessionKind) -> Self {
        match kind {
            SessionKind::Work => Self::Work,
            SessionKind::Break => Self::Break,
        }
    }
}

impl std::fmt::Display for DurationSetting {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Work => write!(f, "work"),
            Self::Break => write!(f, "break"),
            Self::LongBreak => write!(f, "long-break"),
        }
    }
}

/// Store for durable settings.
pub struct SettingsStore {
    db: Database,
}

impl SettingsStore {
    /// Create a settings store over the default database.
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

    /// Read a raw setting value.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn get(&self, name: &str) -> Result<Option<String>, TaskdeckError> {
        let conn = self.db.connection();

        let mut stmt = conn
            .prepare("SELECT value FROM settings WHERE name = ?1")
            .map_err(|e| TaskdeckError::Database(format!("Failed to prepare query: {e}")))?;

        let mut rows = stmt
            .query([name])
            .map_err(|e| TaskdeckError::Database(format!("Failed to query setting: {e}")))?;

        match rows
            .next()
            .map_err(|e| TaskdeckError::Database(format!("Failed to read setting: {e}")))?
        {
            Some(row) => {
                let value: String = row
                    .get(0)
                    .map_err(|e| TaskdeckError::Database(format!("Failed to read value: {e}")))?;
                Ok(Some(value))
            }
            None => Ok(None),
        }
    }

    /// Write a raw setting value, replacing any existing one.
    ///
    /// # Errors
    ///
    /// Returns an error if the write fails.
    pub fn set(&self, name: &str, value: &str) -> Result<(), TaskdeckError> {
        self.db
            .connection()
            .execute(
                r"INSERT INTO settings (name, value) VALUES (?1, ?2)
                  ON CONFLICT(name) DO UPDATE SET value = excluded.value",
                params![name, value],
            )
            .map_err(|e| TaskdeckError::Database(format!("Failed to save setting: {e}")))?;

        Ok(())
    }

    /// Read a configured duration in minutes.
    ///
    /// Falls back to the built-in default when the setting is missing or
    /// unparseable, and never returns less than one minute.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn duration_minutes(&self, setting: DurationSetting) -> Result<u32, TaskdeckError> {
        let minutes = self
            .get(setting.key())?
            .and_then(|v| v.parse::<u32>().ok())
            .unwrap_or_else(|| setting.default_minutes());

        Ok(minutes.max(1))
    }

    /// Persist a configured duration in minutes.
    ///
    /// # Errors
    ///
    /// Returns `TaskdeckError::InvalidInput` for zero minutes, or a
    /// database error if the write fails.
    pub fn set_duration_minutes(
        &self,
        setting: DurationSetting,
        minutes: u32,
    ) -> Result<(), TaskdeckError> {
        if minutes == 0 {
            return Err(TaskdeckError::InvalidInput(format!(
                "{setting} duration must be at least 1 minute"
            )));
        }

        self.set(setting.key(), &minutes.to_string())
    }
}
