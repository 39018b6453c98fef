//! Configuration commands.

use colored::Colorize;

use crate::cli::args::{ConfigCommands, OutputFormat};
use crate::config::{Config, Paths};
use crate::error::PracticeError;
use crate::output::to_json;

/// Execute config subcommands.
///
/// # Errors
///
/// Returns an error if the configuration cannot be read, written, or
/// formatted.
pub fn config(
    paths: &Paths,
    config: &Config,
    cmd: &ConfigCommands,
    format: OutputFormat,
) -> Result<String, PracticeError> {
    match cmd {
        ConfigCommands::Show => match format {
            OutputFormat::Json => to_json(config),
            OutputFormat::Pretty => Ok(serde_yaml::to_string(config)?.trim_end().to_string()),
        },
        ConfigCommands::Path => Ok(paths.config_file.display().to_string()),
        ConfigCommands::Init { force } => init(paths, *force),
    }
}

fn init(paths: &Paths, force: bool) -> Result<String, PracticeError> {
    if paths.config_file.exists() && !force {
        return Err(PracticeError::Config(format!(
            "{} already exists (use --force to overwrite)",
            paths.config_file.display()
        )));
    }

    paths.ensure_dirs()?;
    Config::default().save_to_path(&paths.config_file)?;
    Ok(format!(
        "Wrote default configuration to {}",
        paths.config_file.display().to_string().bold()
    ))
}
