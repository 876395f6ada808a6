//! Runner trait and command/output types.

use std::path::Path;

/// A program plus its argument vector.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandLine {
    pub program: String,
    pub args: Vec<String>,
}

impl CommandLine {
    pub fn new(program: impl Into<String>) -> Self {
        CommandLine {
            program: program.into(),
            args: Vec::new(),
        }
    }

    /// Append a single argument.
    pub fn arg(mut self, arg: impl Into<String>) -> Self {
        self.args.push(arg.into());
        self
    }

    /// Append a path argument (lossy for non-UTF-8 paths).
    pub fn path_arg(self, path: &Path) -> Self {
        let s = path.to_string_lossy().into_owned();
        self.arg(s)
    }

    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.args.extend(args.into_iter().map(Into::into));
        self
    }

    /// Build a command line from shell words, e.g. `"scripts/run.sh --docker compile"`.
    pub fn from_words(words: Vec<String>) -> Option<Self> {
        let mut it = words.into_iter();
        let program = it.next()?;
        Some(CommandLine {
            program,
            args: it.collect(),
        })
    }

    /// Run `self` under `wrapper`: the wrapper's words come first, then this command.
    pub fn wrapped_by(self, wrapper: CommandLine) -> Self {
        wrapper.arg(self.program).args(self.args)
    }

    /// Shell-quoted rendering, for logs.
    pub fn display(&self) -> String {
        let words = std::iter::once(self.program.as_str()).chain(self.args.iter().map(String::as_str));
        shlex::try_join(words).unwrap_or_else(|_| {
            std::iter::once(self.program.clone())
                .chain(self.args.iter().cloned())
                .collect::<Vec<_>>()
                .join(" ")
        })
    }
}

/// Captured result of running a command.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommandOutput {
    pub stdout: String,
    pub stderr: String,
    /// Exit code; `None` when the process could not be spawned or was killed by a signal.
    pub exit_code: Option<i32>,
}

impl CommandOutput {
    pub fn success(&self) -> bool {
        self.exit_code == Some(0)
    }
}

/// Runs external commands without raising on failure.
///
/// Implementations must always return both captured streams. A non-zero exit
/// is logged at error level (with stderr), a zero exit at info level (with
/// stdout); neither is turned into an error.
pub trait ProcessRunner: Send + Sync {
    fn run(&self, command: &CommandLine, cwd: Option<&Path>) -> CommandOutput;
}
