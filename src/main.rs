use std::io;

use anyhow::{Context, Result};
use clap::Parser;
use colored::Colorize;
use tracing::debug;

use practimer::cli::args::{Cli, Commands};
use practimer::cli::commands;
use practimer::config::{ColorSetting, Config, Paths};
use practimer::core::SystemClock;
use practimer::features::history::History;
use practimer::features::practice::PracticeController;
use practimer::{logging, storage, tui};

fn main() {
    if let Err(e) = run() {
        eprintln!("{}: {:#}", "error".red().bold(), e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let format = cli.output;
    let command = cli.command.unwrap_or(Commands::Tui);

    if let Commands::Completions { shell } = command {
        print!("{}", commands::completions(shell)?);
        return Ok(());
    }

    let paths = Paths::resolve(cli.home)?;
    let config = Config::load(&paths).context("could not load configuration")?;

    match config.general.color {
        ColorSetting::Always => colored::control::set_override(true),
        ColorSetting::Never => colored::control::set_override(false),
        ColorSetting::Auto => {}
    }

    let is_tui = matches!(command, Commands::Tui);
    logging::init(&paths, cli.verbose && !is_tui)?;
    debug!(root = %paths.root.display(), backend = ?config.storage.backend, "starting");

    let output = match command {
        Commands::Config(cmd) => commands::config(&paths, &config, &cmd, format)?,
        command => {
            let store = storage::open_store(config.storage.backend, &paths)
                .context("could not open session history")?;
            let mut history = History::open(store);

            match command {
                Commands::Tui => {
                    let mut practice = PracticeController::new(SystemClock, history);
                    tui::run(&mut practice, &config.timer)?;
                    String::new()
                }
                Commands::History => commands::history(&history, format)?,
                Commands::Stats { by_section } => commands::stats(&history, by_section, format)?,
                Commands::Delete { index, yes } => commands::delete(
                    &mut history,
                    index,
                    yes,
                    format,
                    &mut io::stdin().lock(),
                    &mut io::stderr(),
                )?,
                Commands::Clear { yes } => {
                    commands::clear(&mut history, yes, &mut io::stdin().lock(), &mut io::stderr())?
                }
                Commands::Completions { .. } | Commands::Config(_) => String::new(),
            }
        }
    };

    if !output.is_empty() {
        println!("{output}");
    }
    Ok(())
}
