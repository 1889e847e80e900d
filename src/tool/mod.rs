//! External tool execution.
//!
//! [`ToolRunner`] is the seam between building a command and running it.
//! [`process::ProcessToolRunner`] is the real implementation; tests substitute
//! a recording fake.

pub mod process;
pub mod quoting;

use std::path::{Path, PathBuf};

/// Failure while locating or running an external tool.
#[derive(Debug, thiserror::Error)]
pub enum ToolError {
    /// None of the candidate executables could be located.
    #[error("{tool}: Could not locate executable (tried {})", candidates.join(", "))]
    ExecutableNotFound {
        tool: &'static str,
        candidates: Vec<String>,
    },
    /// The configured tool path does not point at a file.
    #[error("{tool}: Configured tool path does not exist: {}", path.display())]
    ToolPathNotFound { tool: &'static str, path: PathBuf },
    /// The process ran and exited with a nonzero code.
    #[error("{tool}: Process returned an error (exit code {code})")]
    NonZeroExit { tool: &'static str, code: i32 },
    /// The process ended without an exit code, e.g. killed by a signal.
    #[error("{tool}: Process was terminated before it exited")]
    Terminated { tool: &'static str },
    /// The operating system refused to start the process.
    #[error("Failed to start {}: {source}", program.display())]
    Spawn {
        program: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Runs an external tool and reports its exit code.
pub trait ToolRunner {
    /// Locates the first executable in `executable_names`, runs it with
    /// `arguments` and waits for it to finish.
    ///
    /// `working_directory` overrides the runner's own working directory when set.
    ///
    /// # Errors
    ///
    /// Returns a [`ToolError`] when the executable cannot be found or started,
    /// or when it exits unsuccessfully. `Ok` always carries exit code zero.
    fn execute(
        &self,
        tool: &'static str,
        executable_names: &[&str],
        arguments: &[String],
        working_directory: Option<&Path>,
    ) -> Result<i32, ToolError>;
}

impl<R: ToolRunner + ?Sized> ToolRunner for &R {
    fn execute(
        &self,
        tool: &'static str,
        executable_names: &[&str],
        arguments: &[String],
        working_directory: Option<&Path>,
    ) -> Result<i32, ToolError> {
        (**self).execute(tool, executable_names, arguments, working_directory)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = ToolError::ExecutableNotFound {
            tool: "Bumpy",
            candidates: vec!["bumpy".to_string(), "bumpy.cmd".to_string()],
        };
        assert_eq!(
            err.to_string(),
            "Bumpy: Could not locate executable (tried bumpy, bumpy.cmd)"
        );

        let err = ToolError::NonZeroExit {
            tool: "Bumpy",
            code: 2,
        };
        assert_eq!(err.to_string(), "Bumpy: Process returned an error (exit code 2)");
    }
}
