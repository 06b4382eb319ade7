//! Configuration management for taskdeck.
//!
//! This module handles loading and saving configuration from `~/.taskdeck/`.

mod paths;
mod settings;

pub use paths::Paths;
pub use settings::{ColorSetting, Config, GeneralConfig, TasksConfig};
