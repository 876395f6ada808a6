//! Runner backed by `std::process::Command`.

use std::path::Path;
use std::process::{Command, Stdio};

use tracing::{debug, error, info};

use super::traits::{CommandLine, CommandOutput, ProcessRunner};

/// Runs commands on the host, blocking until they exit.
///
/// There is no timeout: a hung tool hangs the caller.
#[derive(Debug, Clone, Default)]
pub struct SystemRunner;

impl SystemRunner {
    pub fn new() -> Self {
        SystemRunner
    }
}

impl ProcessRunner for SystemRunner {
    fn run(&self, command: &CommandLine, cwd: Option<&Path>) -> CommandOutput {
        debug!(command = %command.display(), cwd = ?cwd, "running command");

        let mut cmd = Command::new(&command.program);
        cmd.args(&command.args);
        if let Some(dir) = cwd {
            cmd.current_dir(dir);
        }
        cmd.stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped());

        let output = match cmd.output() {
            Ok(o) => o,
            Err(e) => {
                let stderr = format!("failed to spawn {}: {e}", command.program);
                error!("Command failed with error: {stderr}");
                return CommandOutput {
                    stdout: String::new(),
                    stderr,
                    exit_code: None,
                };
            }
        };

        let result = CommandOutput {
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
            exit_code: output.status.code(),
        };

        if result.success() {
            info!("Command output: {}", result.stdout);
        } else {
            error!("Command failed with error: {}", result.stderr);
        }
        result
    }
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;

    #[test]
    fn test_captures_stdout_on_success() {
        let out = SystemRunner::new().run(&CommandLine::new("sh").arg("-c").arg("echo hello"), None);
        assert!(out.success());
        assert_eq!(out.stdout, "hello\n");
    }

    #[test]
    fn test_nonzero_exit_is_not_an_error() {
        let cmd = CommandLine::new("sh").arg("-c").arg("echo oops >&2; exit 3");
        let out = SystemRunner::new().run(&cmd, None);
        assert_eq!(out.exit_code, Some(3));
        assert_eq!(out.stderr, "oops\n");
    }

    #[test]
    fn test_spawn_failure_reported_in_stderr() {
        let out = SystemRunner::new().run(&CommandLine::new("definitely-not-a-real-binary-xyz"), None);
        assert_eq!(out.exit_code, None);
        assert!(out.stderr.contains("failed to spawn definitely-not-a-real-binary-xyz"));
    }

    #[test]
    fn test_respects_working_directory() {
        let dir = std::env::temp_dir();
        let out = SystemRunner::new().run(&CommandLine::new("pwd"), Some(&dir));
        let reported = std::path::PathBuf::from(out.stdout.trim());
        assert_eq!(reported.canonicalize().unwrap(), dir.canonicalize().unwrap());
    }
}
