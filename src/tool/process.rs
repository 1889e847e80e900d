//! Process-backed [`ToolRunner`].

use super::quoting::render_command_line;
use super::{ToolError, ToolRunner};
use std::path::{Path, PathBuf};
use std::process::Command;

/// Spawns the tool as a child process and waits for it.
///
/// The executable comes from the configured tool path when set, otherwise from
/// the first candidate name found on `PATH`. The child inherits stdio.
#[derive(Debug, Default, Clone)]
pub struct ProcessToolRunner {
    tool_path: Option<PathBuf>,
    working_directory: Option<PathBuf>,
}

impl ProcessToolRunner {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Use this executable instead of searching `PATH`.
    #[must_use]
    pub fn with_tool_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.tool_path = Some(path.into());
        self
    }

    /// Run the tool in this directory unless a call overrides it.
    #[must_use]
    pub fn with_working_directory(mut self, path: impl Into<PathBuf>) -> Self {
        self.working_directory = Some(path.into());
        self
    }

    /// Resolves the executable to run.
    ///
    /// # Errors
    ///
    /// [`ToolError::ToolPathNotFound`] if the configured path is not a file,
    /// [`ToolError::ExecutableNotFound`] if no candidate is on `PATH`.
    pub fn resolve_executable(
        &self,
        tool: &'static str,
        executable_names: &[&str],
    ) -> Result<PathBuf, ToolError> {
        if let Some(path) = &self.tool_path {
            if path.is_file() {
                return Ok(path.clone());
            }
            return Err(ToolError::ToolPathNotFound {
                tool,
                path: path.clone(),
            });
        }

        executable_names
            .iter()
            .find_map(|name| which::which(name).ok())
            .ok_or_else(|| ToolError::ExecutableNotFound {
                tool,
                candidates: executable_names.iter().map(ToString::to_string).collect(),
            })
    }
}

impl ToolRunner for ProcessToolRunner {
    fn execute(
        &self,
        tool: &'static str,
        executable_names: &[&str],
        arguments: &[String],
        working_directory: Option<&Path>,
    ) -> Result<i32, ToolError> {
        let program = self.resolve_executable(tool, executable_names)?;
        let command_line = render_command_line(arguments);
        tracing::debug!(
            program = %program.display(),
            command_line = %command_line,
            "executing tool"
        );

        let mut command = Command::new(&program);
        apply_command_line(&mut command, &command_line);
        if let Some(dir) = working_directory.or(self.working_directory.as_deref()) {
            command.current_dir(dir);
        }

        let status = command.status().map_err(|source| ToolError::Spawn {
            program: program.clone(),
            source,
        })?;

        match status.code() {
            Some(0) => Ok(0),
            Some(code) => {
                tracing::warn!(tool, code, "tool exited with a nonzero code");
                Err(ToolError::NonZeroExit { tool, code })
            }
            None => Err(ToolError::Terminated { tool }),
        }
    }
}

#[cfg(windows)]
fn apply_command_line(command: &mut Command, command_line: &str) {
    use std::os::windows::process::CommandExt;
    command.raw_arg(command_line);
}

#[cfg(not(windows))]
fn apply_command_line(command: &mut Command, command_line: &str) {
    command.args(super::quoting::split_command_line(command_line));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_tool_path() {
        let runner = ProcessToolRunner::new().with_tool_path("/nonexistent/path/bumpy");
        let result = runner.execute("Bumpy", &["bumpy"], &["list".to_string()], None);
        assert!(matches!(result, Err(ToolError::ToolPathNotFound { .. })));
    }

    #[test]
    fn test_executable_not_on_path() {
        let runner = ProcessToolRunner::new();
        let result = runner.resolve_executable("Bumpy", &["bumpy-runner-test-missing-tool"]);
        match result {
            Err(ToolError::ExecutableNotFound { tool, candidates }) => {
                assert_eq!(tool, "Bumpy");
                assert_eq!(candidates, vec!["bumpy-runner-test-missing-tool"]);
            }
            other => panic!("expected ExecutableNotFound, got {other:?}"),
        }
    }

    #[cfg(unix)]
    mod unix {
        use super::*;
        use std::fs;
        use std::os::unix::fs::PermissionsExt;
        use std::sync::Mutex;

        // Writing a script while another test thread forks can fail the exec with ETXTBSY.
        static SPAWN_LOCK: Mutex<()> = Mutex::new(());

        fn write_script(dir: &Path, body: &str) -> PathBuf {
            let path = dir.join("bumpy");
            fs::write(&path, format!("#!/bin/sh\n{body}\n")).unwrap();
            let mut perms = fs::metadata(&path).unwrap().permissions();
            perms.set_mode(0o755);
            fs::set_permissions(&path, perms).unwrap();
            path
        }

        fn args(tokens: &[&str]) -> Vec<String> {
            tokens.iter().map(ToString::to_string).collect()
        }

        #[test]
        fn test_success_returns_zero() {
            let _guard = SPAWN_LOCK.lock().unwrap_or_else(std::sync::PoisonError::into_inner);
            let dir = tempfile::tempdir().unwrap();
            let script = write_script(dir.path(), "exit 0");
            let runner = ProcessToolRunner::new().with_tool_path(script);
            assert_eq!(runner.execute("Bumpy", &["bumpy"], &args(&["list"]), None).unwrap(), 0);
        }

        #[test]
        fn test_nonzero_exit_is_an_error() {
            let _guard = SPAWN_LOCK.lock().unwrap_or_else(std::sync::PoisonError::into_inner);
            let dir = tempfile::tempdir().unwrap();
            let script = write_script(dir.path(), "exit 3");
            let runner = ProcessToolRunner::new().with_tool_path(script);
            let result = runner.execute("Bumpy", &["bumpy"], &args(&["ensure"]), None);
            assert!(matches!(
                result,
                Err(ToolError::NonZeroExit {
                    tool: "Bumpy",
                    code: 3
                })
            ));
        }

        #[test]
        fn test_quoted_option_arrives_as_one_argument() {
            let _guard = SPAWN_LOCK.lock().unwrap_or_else(std::sync::PoisonError::into_inner);
            let dir = tempfile::tempdir().unwrap();
            let script = write_script(
                dir.path(),
                r#"[ "$#" -eq 3 ] && [ "$1" = "list" ] && [ "$2" = "-d" ] && [ "$3" = "/tmp/my proj" ] || exit 9"#,
            );
            let runner = ProcessToolRunner::new().with_tool_path(script);
            let arguments = vec![
                "list".to_string(),
                "-d".to_string(),
                crate::tool::quoting::quote("/tmp/my proj"),
            ];
            assert_eq!(runner.execute("Bumpy", &["bumpy"], &arguments, None).unwrap(), 0);
        }

        #[test]
        fn test_empty_label_arrives_as_empty_argument() {
            let _guard = SPAWN_LOCK.lock().unwrap_or_else(std::sync::PoisonError::into_inner);
            let dir = tempfile::tempdir().unwrap();
            let script = write_script(
                dir.path(),
                r#"[ "$#" -eq 2 ] && [ "$1" = "label" ] && [ -z "$2" ] || exit 9"#,
            );
            let runner = ProcessToolRunner::new().with_tool_path(script);
            let arguments = args(&["label", "\"\""]);
            assert_eq!(runner.execute("Bumpy", &["bumpy"], &arguments, None).unwrap(), 0);
        }

        #[test]
        fn test_working_directory_is_applied() {
            let _guard = SPAWN_LOCK.lock().unwrap_or_else(std::sync::PoisonError::into_inner);
            let dir = tempfile::tempdir().unwrap();
            let work = tempfile::tempdir().unwrap();
            let script = write_script(dir.path(), "[ -f marker ] || exit 9");
            fs::write(work.path().join("marker"), "").unwrap();

            let runner = ProcessToolRunner::new()
                .with_tool_path(script)
                .with_working_directory(work.path());
            assert_eq!(runner.execute("Bumpy", &["bumpy"], &args(&["new"]), None).unwrap(), 0);

            let elsewhere = tempfile::tempdir().unwrap();
            let result = runner.execute("Bumpy", &["bumpy"], &args(&["new"]), Some(elsewhere.path()));
            assert!(matches!(result, Err(ToolError::NonZeroExit { code: 9, .. })));
        }
    }
}
