//! CLI command handlers.

use super::args::{Args, Commands};
use crate::bumpy::{build_arguments, BumpyCommand, BumpyRunner, BumpySettings};
use crate::config::Config;
use crate::tool::process::ProcessToolRunner;
use crate::tool::{ToolError, ToolRunner};

impl From<&Commands> for BumpyCommand {
    fn from(command: &Commands) -> Self {
        match command {
            Commands::List => Self::List,
            Commands::New => Self::New,
            Commands::Increment { position } => Self::Increment {
                position: *position,
            },
            Commands::IncrementOnly { position } => Self::IncrementOnly {
                position: *position,
            },
            Commands::Write { version } => Self::Write {
                version: version.clone(),
            },
            Commands::Assign { position, number } => Self::Assign {
                position: *position,
                number: *number,
            },
            Commands::Label { text } => Self::Label { text: text.clone() },
            Commands::Ensure => Self::Ensure,
        }
    }
}

/// Merges command-line flags over the `[defaults]` table.
///
/// Path and profile flags replace the configured value; `-n` can only turn
/// no-operation on.
#[must_use]
pub fn resolve_settings(args: &Args, config: &Config) -> BumpySettings {
    let defaults = BumpySettings::from(config.defaults.clone());
    BumpySettings {
        directory: args.directory.clone().or(defaults.directory),
        configuration: args.configuration.clone().or(defaults.configuration),
        profile: args.profile.clone().or(defaults.profile),
        no_operation: args.no_operation || defaults.no_operation,
    }
}

/// Builds the process runner from flags, falling back to the configuration.
#[must_use]
pub fn resolve_tool_runner(args: &Args, config: &Config) -> ProcessToolRunner {
    let mut runner = ProcessToolRunner::new();
    if let Some(path) = args.tool_path.as_ref().or(config.tool_path.as_ref()) {
        runner = runner.with_tool_path(path);
    }
    if let Some(dir) = args
        .working_directory
        .as_ref()
        .or(config.working_directory.as_ref())
    {
        runner = runner.with_working_directory(dir);
    }
    runner
}

/// The argument vector the parsed command line resolves to.
#[must_use]
pub fn planned_arguments(args: &Args, config: &Config) -> Vec<String> {
    let command = BumpyCommand::from(&args.command);
    build_arguments(&command, &effective_settings(&command, args, config))
}

/// Runs the parsed command.
///
/// # Errors
///
/// Returns the [`ToolError`] reported while running bumpy.
pub fn execute<R: ToolRunner>(
    bumpy: &BumpyRunner<R>,
    args: &Args,
    config: &Config,
) -> Result<(), ToolError> {
    let settings = resolve_settings(args, config);
    match &args.command {
        Commands::List => bumpy.list(&settings),
        Commands::New => bumpy.new_configuration(),
        Commands::Increment { position } => bumpy.increment(*position, &settings),
        Commands::IncrementOnly { position } => bumpy.increment_only(*position, &settings),
        Commands::Write { version } => bumpy.write(version, &settings),
        Commands::Assign { position, number } => bumpy.assign(*position, *number, &settings),
        Commands::Label { text } => bumpy.label(text.as_deref(), &settings),
        Commands::Ensure => bumpy.ensure(&settings),
    }
}

fn effective_settings(command: &BumpyCommand, args: &Args, config: &Config) -> BumpySettings {
    if *command == BumpyCommand::New {
        BumpySettings::default()
    } else {
        resolve_settings(args, config)
    }
}
