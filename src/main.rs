use anyhow::Result;
use clap::Parser;
use colored::Colorize;

use taskdeck::cli::commands;
use taskdeck::config::{ColorSetting, Config};
use taskdeck::{Cli, Commands};

fn main() {
    if let Err(e) = run() {
        eprintln!("{}: {}", "error".red().bold(), e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let config = Config::load()?;

    match config.general.color {
        ColorSetting::Always => colored::control::set_override(true),
        ColorSetting::Never => colored::control::set_override(false),
        ColorSetting::Auto => {}
    }

    let format = cli.output.unwrap_or(config.general.default_output);

    let output = match cli.command {
        Commands::Add(args) => commands::add(args, &config, format)?,
        Commands::List(args) => commands::list(args, format)?,
        Commands::Show { id } => commands::show(id, format)?,
        Commands::Edit(args) => commands::edit(args, format)?,
        Commands::Complete { id } => commands::complete(id, format)?,
        Commands::Delete { id } => commands::delete(id, format)?,
        Commands::Search { query } => commands::search(&query, format)?,
        Commands::Stats => commands::stats(format)?,
        Commands::Pomodoro => commands::pomodoro()?,
        Commands::Settings(args) => commands::settings(args.command, format)?,
        Commands::Backup => commands::backup(format)?,
        Commands::Restore { file } => commands::restore(&file, format)?,
        Commands::Completions { shell } => commands::completions(shell)?,
    };

    if !output.is_empty() {
        println!("{output}");
    }
    Ok(())
}
