//! Bumpy command construction and execution.
//!
//! Every operation maps to one `bumpy` invocation. The argument vector is
//! `[command, positional…, option flags…]`, where option values are quoted and
//! positional tokens are passed through untouched.

pub mod settings;

pub use settings::BumpySettings;

use crate::constants;
use crate::tool::quoting::quote;
use crate::tool::{ToolError, ToolRunner};
use std::path::Path;

/// A bumpy command together with its positional arguments.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum BumpyCommand {
    /// `bumpy list`
    List,
    /// `bumpy new`
    New,
    /// `bumpy increment <position>`
    Increment { position: i32 },
    /// `bumpy incrementonly <position>`
    IncrementOnly { position: i32 },
    /// `bumpy write <version>`
    Write { version: String },
    /// `bumpy assign <position> <number>`
    Assign { position: i32, number: i32 },
    /// `bumpy label <text>`, where a missing or empty text clears the label.
    Label { text: Option<String> },
    /// `bumpy ensure`
    Ensure,
}

impl BumpyCommand {
    /// The command token as bumpy spells it.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Self::List => constants::CMD_LIST,
            Self::New => constants::CMD_NEW,
            Self::Increment { .. } => constants::CMD_INCREMENT,
            Self::IncrementOnly { .. } => constants::CMD_INCREMENT_ONLY,
            Self::Write { .. } => constants::CMD_WRITE,
            Self::Assign { .. } => constants::CMD_ASSIGN,
            Self::Label { .. } => constants::CMD_LABEL,
            Self::Ensure => constants::CMD_ENSURE,
        }
    }

    /// The command token followed by its positional arguments.
    #[must_use]
    pub fn positional_arguments(&self) -> Vec<String> {
        let mut arguments = vec![self.name().to_string()];
        match self {
            Self::List | Self::New | Self::Ensure => {}
            Self::Increment { position } | Self::IncrementOnly { position } => {
                arguments.push(position.to_string());
            }
            Self::Write { version } => arguments.push(version.clone()),
            Self::Assign { position, number } => {
                arguments.push(position.to_string());
                arguments.push(number.to_string());
            }
            Self::Label { text } => {
                let text = match text.as_deref() {
                    None | Some("") => constants::EMPTY_LABEL,
                    Some(text) => text,
                };
                arguments.push(text.to_string());
            }
        }
        arguments
    }
}

/// Builds the full argument vector for `command` with `settings` applied.
#[must_use]
pub fn build_arguments(command: &BumpyCommand, settings: &BumpySettings) -> Vec<String> {
    let mut arguments = command.positional_arguments();

    append_option(
        &mut arguments,
        constants::FLAG_DIRECTORY,
        settings.directory.as_deref().map(path_text).as_deref(),
    );
    append_option(
        &mut arguments,
        constants::FLAG_CONFIGURATION,
        settings.configuration.as_deref().map(path_text).as_deref(),
    );
    append_option(
        &mut arguments,
        constants::FLAG_PROFILE,
        settings.profile.as_deref(),
    );

    if settings.no_operation {
        arguments.push(constants::FLAG_NO_OPERATION.to_string());
    }

    arguments
}

fn path_text(path: &Path) -> String {
    path.to_string_lossy().into_owned()
}

/// Appends `option` and its quoted value, or nothing when the value is unset or empty.
fn append_option(arguments: &mut Vec<String>, option: &str, value: Option<&str>) {
    if let Some(value) = value.filter(|v| !v.is_empty()) {
        arguments.push(option.to_string());
        arguments.push(quote(value));
    }
}

/// Runs bumpy commands through a [`ToolRunner`].
///
/// Each operation spawns exactly one process and returns the runner's error
/// unchanged on failure.
#[derive(Debug, Default, Clone)]
pub struct BumpyRunner<R> {
    runner: R,
}

impl<R: ToolRunner> BumpyRunner<R> {
    #[must_use]
    pub fn new(runner: R) -> Self {
        Self { runner }
    }

    /// Runs `bumpy list`.
    ///
    /// # Errors
    ///
    /// Propagates the [`ToolError`] reported by the tool runner.
    pub fn list(&self, settings: &BumpySettings) -> Result<(), ToolError> {
        self.run(&BumpyCommand::List, settings)
    }

    /// Runs `bumpy new`, which creates a fresh bumpy configuration file.
    /// Always uses default settings.
    ///
    /// # Errors
    ///
    /// Propagates the [`ToolError`] reported by the tool runner.
    pub fn new_configuration(&self) -> Result<(), ToolError> {
        self.run(&BumpyCommand::New, &BumpySettings::default())
    }

    /// Runs `bumpy increment <position>`.
    ///
    /// # Errors
    ///
    /// Propagates the [`ToolError`] reported by the tool runner.
    pub fn increment(&self, position: i32, settings: &BumpySettings) -> Result<(), ToolError> {
        self.run(&BumpyCommand::Increment { position }, settings)
    }

    /// Runs `bumpy incrementonly <position>`.
    ///
    /// # Errors
    ///
    /// Propagates the [`ToolError`] reported by the tool runner.
    pub fn increment_only(&self, position: i32, settings: &BumpySettings) -> Result<(), ToolError> {
        self.run(&BumpyCommand::IncrementOnly { position }, settings)
    }

    /// Runs `bumpy write <version>`.
    ///
    /// # Errors
    ///
    /// Propagates the [`ToolError`] reported by the tool runner.
    pub fn write(&self, version: &str, settings: &BumpySettings) -> Result<(), ToolError> {
        self.run(
            &BumpyCommand::Write {
                version: version.to_string(),
            },
            settings,
        )
    }

    /// Runs `bumpy assign <position> <number>`.
    ///
    /// # Errors
    ///
    /// Propagates the [`ToolError`] reported by the tool runner.
    pub fn assign(
        &self,
        position: i32,
        number: i32,
        settings: &BumpySettings,
    ) -> Result<(), ToolError> {
        self.run(&BumpyCommand::Assign { position, number }, settings)
    }

    /// Runs `bumpy label <text>`. `None` and `""` both clear the label.
    ///
    /// # Errors
    ///
    /// Propagates the [`ToolError`] reported by the tool runner.
    pub fn label(&self, text: Option<&str>, settings: &BumpySettings) -> Result<(), ToolError> {
        self.run(
            &BumpyCommand::Label {
                text: text.map(str::to_string),
            },
            settings,
        )
    }

    /// Runs `bumpy ensure`.
    ///
    /// # Errors
    ///
    /// Propagates the [`ToolError`] reported by the tool runner.
    pub fn ensure(&self, settings: &BumpySettings) -> Result<(), ToolError> {
        self.run(&BumpyCommand::Ensure, settings)
    }

    /// Runs any command. The named operations above delegate here.
    ///
    /// # Errors
    ///
    /// Propagates the [`ToolError`] reported by the tool runner.
    pub fn run(&self, command: &BumpyCommand, settings: &BumpySettings) -> Result<(), ToolError> {
        let arguments = build_arguments(command, settings);
        tracing::debug!(command = command.name(), ?arguments, "running bumpy");

        self.runner
            .execute(
                constants::TOOL_NAME,
                &constants::TOOL_EXECUTABLE_NAMES,
                &arguments,
                None,
            )
            .map(|_| ())
    }
}
