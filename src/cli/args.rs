//! Command-line argument definitions.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// bumpy-runner - run bumpy versioning commands with consistent quoting
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Directory bumpy operates on (-d)
    #[arg(short = 'd', long, global = true, value_name = "DIR")]
    pub directory: Option<PathBuf>,

    /// Bumpy configuration file (-c)
    #[arg(short = 'c', long, global = true, value_name = "FILE")]
    pub configuration: Option<PathBuf>,

    /// Configuration profile (-p)
    #[arg(short = 'p', long, global = true, env = "BUMPY_PROFILE")]
    pub profile: Option<String>,

    /// Show what would change without writing (-n)
    #[arg(short = 'n', long, global = true)]
    pub no_operation: bool,

    /// Path to the bumpy executable (default: search PATH)
    #[arg(long, global = true, env = "BUMPY_TOOL_PATH", value_name = "FILE")]
    pub tool_path: Option<PathBuf>,

    /// Directory bumpy is started in
    #[arg(long, global = true, value_name = "DIR")]
    pub working_directory: Option<PathBuf>,

    /// Configuration file (default: <config dir>/bumpy-runner/config.toml)
    #[arg(long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Print the bumpy arguments instead of running bumpy
    #[arg(long, global = true)]
    pub print_args: bool,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short = 'v', long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Available bumpy commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// List the versions found in all configured files
    List,
    /// Create a new bumpy configuration file
    New,
    /// Increment the version component at POSITION and reset the ones after it
    Increment {
        /// One-based version component position
        #[arg(allow_negative_numbers = true)]
        position: i32,
    },
    /// Increment the version component at POSITION only
    #[command(name = "increment-only", alias = "incrementonly")]
    IncrementOnly {
        /// One-based version component position
        #[arg(allow_negative_numbers = true)]
        position: i32,
    },
    /// Overwrite the version with VERSION
    Write {
        /// Full version text, e.g. 2.3.0-beta
        version: String,
    },
    /// Set the version component at POSITION to NUMBER
    Assign {
        /// One-based version component position
        #[arg(allow_negative_numbers = true)]
        position: i32,
        /// New value for the component
        #[arg(allow_negative_numbers = true)]
        number: i32,
    },
    /// Set the version label (postfix); omit TEXT to clear it
    Label {
        /// Label text, e.g. -beta
        #[arg(allow_hyphen_values = true)]
        text: Option<String>,
    },
    /// Check that all configured files share the same version
    Ensure,
}
