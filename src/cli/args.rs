use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_complete::Shell;
use serde::{Deserialize, Serialize};

#[derive(Parser)]
#[command(name = "practimer")]
#[command(about = "A practice-session timer with per-section history and statistics")]
#[command(long_about = "practimer - a practice-session timer

Time practice sessions per section (Reading, Listening, ...) with a
stopwatch or a countdown that keeps running into overtime. Completed
sessions are saved to a history with summary statistics.

QUICK START:
  practimer                 Open the interactive timer
  practimer history         List completed sessions, newest first
  practimer stats           Show count, average, total and best time
  practimer delete 1        Delete the newest session

OUTPUT FORMATS:
  --output pretty    Human-readable colored output (default)
  --output json      Machine-readable JSON for scripting

For more information on a specific command, run:
  practimer <command> --help")]
#[command(version, propagate_version = true)]
pub struct Cli {
    /// Output format for command results
    ///
    /// Use 'pretty' for human-readable colored output (default),
    /// or 'json' for machine-readable output suitable for scripting.
    #[arg(short, long, value_enum, default_value = "pretty", global = true)]
    pub output: OutputFormat,

    /// Data directory holding config, history and logs
    #[arg(long, env = "PRACTIMER_HOME", global = true)]
    pub home: Option<PathBuf>,

    /// Also write log output to stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Output format for command results.
#[derive(ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable colored output.
    #[default]
    Pretty,
    /// Machine-readable JSON output.
    Json,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Open the interactive timer (default)
    ///
    /// Pick a section with Tab, a timing option with m, then start with s
    /// and save with x. Press ? inside the timer for all keys.
    Tui,

    /// List completed sessions, newest first
    ///
    /// Positions shown here are the ones 'practimer delete' takes.
    ///
    /// # Examples
    ///
    ///   practimer history
    ///   practimer history -o json
    #[command(alias = "h")]
    History,

    /// Show practice statistics
    ///
    /// Session count, average, total and best (shortest) time. Best shows
    /// --:-- until a session has been saved.
    ///
    /// # Examples
    ///
    ///   practimer stats
    ///   practimer stats --by-section
    Stats {
        /// Break the figures down per section
        #[arg(long)]
        by_section: bool,
    },

    /// Delete one session by its position in 'practimer history'
    ///
    /// Positions start at 1 for the newest session.
    ///
    /// # Examples
    ///
    ///   practimer delete 1
    ///   practimer delete 3 --yes
    Delete {
        /// Position in the history list (1 = newest)
        index: usize,

        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },

    /// Delete every saved session
    Clear {
        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },

    /// Generate shell completion scripts
    ///
    /// # Examples
    ///
    ///   practimer completions bash > ~/.local/share/bash-completion/completions/practimer
    ///   practimer completions zsh > ~/.zfunc/_practimer
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },

    /// Inspect or create the configuration file
    #[command(subcommand)]
    Config(ConfigCommands),
}

#[derive(Subcommand)]
pub enum ConfigCommands {
    /// Print the effective configuration
    Show,
    /// Print the configuration file path
    Path,
    /// Write a default configuration file
    Init {
        /// Overwrite an existing file
        #[arg(short, long)]
        force: bool,
    },
}
