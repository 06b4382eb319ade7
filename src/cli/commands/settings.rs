//! Settings command implementation.
//!
//! Reads and writes the durable Pomodoro duration settings. Changes made
//! here are picked up the next time the timer starts.

use colored::Colorize;
use serde_json::json;

use crate::cli::args::{OutputFormat, SettingsCommands};
use crate::error::TaskdeckError;
use crate::storage::{DurationSetting, SettingsStore};

/// Execute settings subcommands.
pub fn settings(cmd: SettingsCommands, format: OutputFormat) -> Result<String, TaskdeckError> {
    let store = SettingsStore::new()?;

    match cmd {
        SettingsCommands::Show => show(&store, format),
        SettingsCommands::Set { key, minutes } => set(&store, &key, minutes, format),
        SettingsCommands::Reset => reset(&store, format),
    }
}

fn show(store: &SettingsStore, format: OutputFormat) -> Result<String, TaskdeckError> {
    let work = store.duration_minutes(DurationSetting::Work)?;
    let break_ = store.duration_minutes(DurationSetting::Break)?;
    let long_break = store.duration_minutes(DurationSetting::LongBreak)?;

    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(&json!({
            "work_minutes": work,
            "break_minutes": break_,
            "long_break_minutes": long_break,
        }))?),
        OutputFormat::Pretty => {
            let mut output = Vec::new();
            output.push("⚙️  Pomodoro Settings".bold().to_string());
            output.push("─".repeat(30));
            output.push(format!("Work:       {work} minutes"));
            output.push(format!("Break:      {break_} minutes"));
            output.push(format!("Long break: {long_break} minutes"));
            output.push(String::new());
            output.push(
                "Change with: taskdeck settings set <work|break|long-break> <minutes>"
                    .dimmed()
                    .to_string(),
            );
            Ok(output.join("\n"))
        }
    }
}

fn set(
    store: &SettingsStore,
    key: &str,
    minutes: u32,
    format: OutputFormat,
) -> Result<String, TaskdeckError> {
    let setting = DurationSetting::parse(key)?;
    store.set_duration_minutes(setting, minutes)?;

    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(&json!({
            "setting": setting.key(),
            "minutes": minutes,
        }))?),
        OutputFormat::Pretty => Ok(format!(
            "💾 {} duration set to {minutes} minutes",
            setting.to_string().bold()
        )),
    }
}

fn reset(store: &SettingsStore, format: OutputFormat) -> Result<String, TaskdeckError> {
    for setting in [
        DurationSetting::Work,
        DurationSetting::Break,
        DurationSetting::LongBreak,
    ] {
        store.set_duration_minutes(setting, setting.default_minutes())?;
    }

    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(&json!({
            "work_minutes": DurationSetting::Work.default_minutes(),
            "break_minutes": DurationSetting::Break.default_minutes(),
            "long_break_minutes": DurationSetting::LongBreak.default_minutes(),
        }))?),
        OutputFormat::Pretty => Ok("⚙️  Durations reset to 25/5/15 minutes".to_string()),
    }
}
