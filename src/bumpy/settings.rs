//! Options shared by every bumpy command.

use std::path::PathBuf;

/// Optional flags appended after a bumpy command's positional arguments.
///
/// Built once per call and only read by [`crate::bumpy::BumpyRunner`].
/// Nothing is validated here; bumpy rejects combinations it does not accept.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct BumpySettings {
    /// Working directory bumpy operates on (`-d`).
    pub directory: Option<PathBuf>,
    /// Path to the bumpy configuration file (`-c`).
    pub configuration: Option<PathBuf>,
    /// Configuration profile to apply (`-p`).
    pub profile: Option<String>,
    /// Report what would change without writing anything (`-n`).
    pub no_operation: bool,
}

impl BumpySettings {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_directory(mut self, directory: impl Into<PathBuf>) -> Self {
        self.directory = Some(directory.into());
        self
    }

    #[must_use]
    pub fn with_configuration(mut self, configuration: impl Into<PathBuf>) -> Self {
        self.configuration = Some(configuration.into());
        self
    }

    #[must_use]
    pub fn with_profile(mut self, profile: impl Into<String>) -> Self {
        self.profile = Some(profile.into());
        self
    }

    #[must_use]
    pub fn with_no_operation(mut self, no_operation: bool) -> Self {
        self.no_operation = no_operation;
        self
    }
}
