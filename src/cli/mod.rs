//! Command-line interface for taskdeck.

pub mod args;
pub mod commands;
