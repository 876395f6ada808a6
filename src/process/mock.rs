//! Mock runner for testing.

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use super::traits::{CommandLine, CommandOutput, ProcessRunner};

/// A recorded invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    pub command: CommandLine,
    pub cwd: Option<PathBuf>,
}

/// Runner that returns scripted outputs keyed by program name.
///
/// Responses for the same program are served in the order they were added;
/// once they run out the last one repeats. Programs without a scripted
/// response get an empty successful output.
///
/// Every call is recorded so tests can assert on the exact command lines.
#[derive(Debug, Default)]
pub struct MockRunner {
    responses: Vec<(String, CommandOutput)>,
    served: Mutex<HashMap<String, usize>>,
    calls: Mutex<Vec<Invocation>>,
}

impl MockRunner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Respond to `program` with the given stdout and a zero exit.
    pub fn with_stdout(self, program: impl Into<String>, stdout: impl Into<String>) -> Self {
        self.with_output(
            program,
            CommandOutput {
                stdout: stdout.into(),
                stderr: String::new(),
                exit_code: Some(0),
            },
        )
    }

    /// Respond to `program` with the given stderr and a zero exit.
    pub fn with_stderr(self, program: impl Into<String>, stderr: impl Into<String>) -> Self {
        self.with_output(
            program,
            CommandOutput {
                stdout: String::new(),
                stderr: stderr.into(),
                exit_code: Some(0),
            },
        )
    }

    /// Queue a full output for `program`.
    pub fn with_output(mut self, program: impl Into<String>, output: CommandOutput) -> Self {
        self.responses.push((program.into(), output));
        self
    }

    /// All invocations so far, in call order.
    pub fn calls(&self) -> Vec<Invocation> {
        self.calls.lock().map(|c| c.clone()).unwrap_or_default()
    }
}

impl ProcessRunner for MockRunner {
    fn run(&self, command: &CommandLine, cwd: Option<&Path>) -> CommandOutput {
        if let Ok(mut calls) = self.calls.lock() {
            calls.push(Invocation {
                command: command.clone(),
                cwd: cwd.map(Path::to_path_buf),
            });
        }
        let scripted: Vec<&CommandOutput> = self
            .responses
            .iter()
            .filter(|(program, _)| *program == command.program)
            .map(|(_, out)| out)
            .collect();
        let Some(last) = scripted.last() else {
            return CommandOutput {
                exit_code: Some(0),
                ..Default::default()
            };
        };
        let idx = match self.served.lock() {
            Ok(mut served) => {
                let n = served.entry(command.program.clone()).or_insert(0);
                *n += 1;
                *n - 1
            }
            Err(_) => scripted.len() - 1,
        };
        scripted.get(idx).copied().unwrap_or(*last).clone()
    }
}
