//! Application-wide constants.
//!
//! Tool names, the bumpy command and flag tokens, configuration paths and the
//! messages printed by the CLI.

// === Application Metadata ===

/// Application name (from Cargo.toml).
pub const APP_NAME: &str = env!("CARGO_PKG_NAME");
/// Current application version (from Cargo.toml).
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

// === Tool Identity ===

/// Display name of the wrapped tool, used in error messages.
pub const TOOL_NAME: &str = "Bumpy";
/// Executable base names tried in order. Platform suffixes are resolved by the runner.
pub const TOOL_EXECUTABLE_NAMES: [&str; 1] = ["bumpy"];

// === Command Tokens ===

pub const CMD_LIST: &str = "list";
pub const CMD_NEW: &str = "new";
pub const CMD_INCREMENT: &str = "increment";
pub const CMD_INCREMENT_ONLY: &str = "incrementonly";
pub const CMD_WRITE: &str = "write";
pub const CMD_ASSIGN: &str = "assign";
pub const CMD_LABEL: &str = "label";
pub const CMD_ENSURE: &str = "ensure";

/// Stands in for an absent label so bumpy sees an explicit empty argument.
pub const EMPTY_LABEL: &str = "\"\"";

// === Option Flags ===

pub const FLAG_DIRECTORY: &str = "-d";
pub const FLAG_CONFIGURATION: &str = "-c";
pub const FLAG_PROFILE: &str = "-p";
pub const FLAG_NO_OPERATION: &str = "-n";

// === Path Configuration ===

/// Name of the configuration subdirectory under the platform config dir.
pub const CONFIG_DIR_NAME: &str = "bumpy-runner";
/// Name of the configuration file.
pub const CONFIG_FILE_NAME: &str = "config.toml";

// === Logging ===

/// Filter used when neither `RUST_LOG`, `--verbose` nor the config file set one.
pub const DEFAULT_LOG_LEVEL: &str = "warn";

// === Messages: CLI Output ===

pub const CLI_MSG_TOOL_FAILED: &str = "bumpy did not complete successfully";
pub const CLI_MSG_CONFIG_LOAD_FAILED: &str = "Failed to load configuration";
