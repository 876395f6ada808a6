//! External tool configuration.

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::process::CommandLine;
use crate::{BenchError, BenchResult};

/// Names and fixed arguments of the external tools.
///
/// Every field has a default, so an empty TOML file is a valid config.
/// Multi-word values (`compile_command`, `timing_wrapper`, ...) are split
/// with shell quoting rules.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ToolConfig {
    pub assigner: String,
    pub proof_generator: String,
    /// Curve passed to the assigner via `-e`.
    pub curve: String,
    pub memory_profiler: String,
    pub report_renderer: String,
    pub timing_wrapper: String,
    /// Run from the template root.
    pub compile_command: String,
    /// Base name of the build artifacts (`<name>.ll`, `<name>.crct`, `<name>.tbl`).
    pub circuit_name: String,
    pub proof_file: String,
    /// Where profiler output and proofs are written; defaults to the current directory.
    pub work_dir: Option<PathBuf>,
}

impl Default for ToolConfig {
    fn default() -> Self {
        ToolConfig {
            assigner: "assigner".into(),
            proof_generator: "proof-generator-single-threaded".into(),
            curve: "pallas".into(),
            memory_profiler: "valgrind".into(),
            report_renderer: "ms_print".into(),
            timing_wrapper: "time".into(),
            compile_command: "scripts/run.sh --docker compile".into(),
            circuit_name: "template".into(),
            proof_file: "proof.bin".into(),
            work_dir: None,
        }
    }
}

impl ToolConfig {
    pub fn from_toml_str(s: &str) -> BenchResult<Self> {
        let cfg: ToolConfig = toml::from_str(s).map_err(|e| BenchError::Config(e.to_string()))?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Check that every tool entry splits into at least one shell word.
    pub fn validate(&self) -> BenchResult<()> {
        for (key, value) in self.tool_entries() {
            tool_command(key, value)?;
        }
        Ok(())
    }

    fn tool_entries(&self) -> [(&'static str, &str); 6] {
        [
            ("assigner", self.assigner.as_str()),
            ("proof_generator", self.proof_generator.as_str()),
            ("memory_profiler", self.memory_profiler.as_str()),
            ("report_renderer", self.report_renderer.as_str()),
            ("timing_wrapper", self.timing_wrapper.as_str()),
            ("compile_command", self.compile_command.as_str()),
        ]
    }

    pub fn assigner_command(&self) -> BenchResult<CommandLine> {
        tool_command("assigner", &self.assigner)
    }

    pub fn proof_generator_command(&self) -> BenchResult<CommandLine> {
        tool_command("proof_generator", &self.proof_generator)
    }

    pub fn memory_profiler_command(&self) -> BenchResult<CommandLine> {
        tool_command("memory_profiler", &self.memory_profiler)
    }

    pub fn report_renderer_command(&self) -> BenchResult<CommandLine> {
        tool_command("report_renderer", &self.report_renderer)
    }

    pub fn timing_wrapper_command(&self) -> BenchResult<CommandLine> {
        tool_command("timing_wrapper", &self.timing_wrapper)
    }

    pub fn compile_command_line(&self) -> BenchResult<CommandLine> {
        tool_command("compile_command", &self.compile_command)
    }
}

fn tool_command(key: &str, value: &str) -> BenchResult<CommandLine> {
    let words = shlex::split(value)
        .ok_or_else(|| BenchError::Config(format!("{key}: unbalanced quotes in {value:?}")))?;
    CommandLine::from_words(words).ok_or_else(|| BenchError::Config(format!("{key}: empty command")))
}

/// Load a tool config from a TOML file.
pub fn load_tool_config(path: &Path) -> BenchResult<ToolConfig> {
    let s = std::fs::read_to_string(path)
        .map_err(|e| BenchError::Config(format!("failed to read {}: {e}", path.display())))?;
    ToolConfig::from_toml_str(&s)
}
