//! Command lines for the external tools.
//!
//! Builds the exact invocations the session runs:
//! - `assigner -b <ir> -p <input> -c <crct> -t <tbl> -e <curve>`
//! - `proof-generator --circuit <crct> --assignment <tbl> --proof <proof>`
//! - `valgrind --massif-out-file=<out> --tool=massif <subject...>`
//! - `ms_print <massif out file>`
//! - `time <subject...>`

use std::path::Path;

use crate::BenchResult;
use crate::core::{BuildArtifacts, Subject, ToolConfig};
use crate::process::CommandLine;

/// Builds command lines from the artifact layout and tool config.
#[derive(Debug, Clone)]
pub struct CommandSet<'a> {
    pub artifacts: &'a BuildArtifacts,
    pub tools: &'a ToolConfig,
    pub work_dir: &'a Path,
}

impl CommandSet<'_> {
    pub fn assigner(&self) -> BenchResult<CommandLine> {
        let a = self.artifacts;
        Ok(self
            .tools
            .assigner_command()?
            .arg("-b")
            .path_arg(&a.ir)
            .arg("-p")
            .path_arg(&a.input_json)
            .arg("-c")
            .path_arg(&a.circuit)
            .arg("-t")
            .path_arg(&a.table)
            .arg("-e")
            .arg(self.tools.curve.clone()))
    }

    pub fn proof_generator(&self) -> BenchResult<CommandLine> {
        let a = self.artifacts;
        Ok(self
            .tools
            .proof_generator_command()?
            .arg("--circuit")
            .path_arg(&a.circuit)
            .arg("--assignment")
            .path_arg(&a.table)
            .arg("--proof")
            .path_arg(&self.work_dir.join(&self.tools.proof_file)))
    }

    pub fn subject(&self, subject: Subject) -> BenchResult<CommandLine> {
        match subject {
            Subject::Assigner => self.assigner(),
            Subject::Proof => self.proof_generator(),
        }
    }

    /// `subject` under massif, writing the raw profile to `<work_dir>/<massif out file>`.
    pub fn profiled(&self, subject: Subject) -> BenchResult<CommandLine> {
        let wrapper = self
            .tools
            .memory_profiler_command()?
            .arg(format!("--massif-out-file={}", subject.massif_out_file()))
            .arg("--tool=massif");
        Ok(self.subject(subject)?.wrapped_by(wrapper))
    }

    pub fn render_report(&self, subject: Subject) -> BenchResult<CommandLine> {
        Ok(self
            .tools
            .report_renderer_command()?
            .path_arg(&self.work_dir.join(subject.massif_out_file())))
    }

    pub fn timed(&self, subject: Subject) -> BenchResult<CommandLine> {
        Ok(self.subject(subject)?.wrapped_by(self.tools.timing_wrapper_command()?))
    }

    pub fn compile(&self) -> BenchResult<CommandLine> {
        self.tools.compile_command_line()
    }
}
