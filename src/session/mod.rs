//! Interactive benchmark session.
//!
//! A `BenchmarkSession` owns the artifact layout, the tool config, a
//! `ProcessRunner` and the accumulated results. Each menu action is a method,
//! so actions can be driven directly (tests) or through the read-eval loop in
//! [`BenchmarkSession::run`].

pub mod commands;
pub mod menu;

use std::io::{BufRead, Write};
use std::path::{Path, PathBuf};

use tracing::{debug, error, info, warn};

use crate::core::{BenchmarkResult, BuildArtifacts, Subject, ToolConfig, bytes_to_gb};
use crate::parse::{extract_elapsed_seconds, parse_memory_report};
use crate::process::{CommandOutput, ProcessRunner};
use crate::{BenchError, BenchResult};

pub use commands::CommandSet;
pub use menu::MenuChoice;

fn absolute(path: PathBuf) -> PathBuf {
    std::path::absolute(&path).unwrap_or(path)
}

/// Whether the loop should keep going after an action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    Continue,
    Exit,
}

pub struct BenchmarkSession {
    artifacts: BuildArtifacts,
    tools: ToolConfig,
    work_dir: PathBuf,
    runner: Box<dyn ProcessRunner>,
    assigner: BenchmarkResult,
    proof: BenchmarkResult,
}

impl BenchmarkSession {
    pub fn new(
        template_root: impl Into<PathBuf>,
        tools: ToolConfig,
        work_dir: impl Into<PathBuf>,
        runner: Box<dyn ProcessRunner>,
    ) -> Self {
        // Tools run with `work_dir` as cwd, so every path handed to them must be absolute.
        let artifacts = BuildArtifacts::new(absolute(template_root.into()), &tools.circuit_name);
        BenchmarkSession {
            artifacts,
            tools,
            work_dir: absolute(work_dir.into()),
            runner,
            assigner: BenchmarkResult::default(),
            proof: BenchmarkResult::default(),
        }
    }

    pub fn artifacts(&self) -> &BuildArtifacts {
        &self.artifacts
    }

    pub fn work_dir(&self) -> &Path {
        &self.work_dir
    }

    pub fn result(&self, subject: Subject) -> &BenchmarkResult {
        match subject {
            Subject::Assigner => &self.assigner,
            Subject::Proof => &self.proof,
        }
    }

    fn result_mut(&mut self, subject: Subject) -> &mut BenchmarkResult {
        match subject {
            Subject::Assigner => &mut self.assigner,
            Subject::Proof => &mut self.proof,
        }
    }

    fn commands(&self) -> CommandSet<'_> {
        CommandSet {
            artifacts: &self.artifacts,
            tools: &self.tools,
            work_dir: &self.work_dir,
        }
    }

    /// Run the circuit compilation script from the template root.
    pub fn compile_circuit(&self) -> BenchResult<CommandOutput> {
        let cmd = self.commands().compile()?;
        info!(command = %cmd.display(), "Compiling circuit");
        Ok(self.runner.run(&cmd, Some(&self.artifacts.root)))
    }

    pub fn verify_build(&self) -> bool {
        self.artifacts.verify()
    }

    /// Profile `subject` under massif and store the summed `total(B)` in gigabytes.
    ///
    /// On failure the stored value is cleared.
    pub fn measure_memory(&mut self, subject: Subject) -> BenchResult<f64> {
        let measured = self.profile_memory(subject);
        self.result_mut(subject).memory_gb = measured.as_ref().ok().copied();
        measured
    }

    fn profile_memory(&self, subject: Subject) -> BenchResult<f64> {
        let commands = self.commands();
        let out_file = self.work_dir.join(subject.massif_out_file());
        match std::fs::remove_file(&out_file) {
            Ok(()) => debug!(path = %out_file.display(), "removed stale massif output"),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {}
            Err(e) => return Err(e.into()),
        }

        let profiled = self.runner.run(&commands.profiled(subject)?, Some(&self.work_dir));
        if !profiled.success() {
            warn!(%subject, exit_code = ?profiled.exit_code, "memory profiler did not exit cleanly");
        }

        let rendered = self.runner.run(&commands.render_report(subject)?, Some(&self.work_dir));
        let report = parse_memory_report(&rendered.stdout)?;
        if let Some(peak) = report.peak_sample() {
            debug!(
                %subject,
                snapshot = %peak.label,
                peak_bytes = peak.total_bytes,
                summed_bytes = report.total().total_bytes,
                "memory report parsed"
            );
        }
        Ok(bytes_to_gb(report.total().total_bytes))
    }

    /// Run `subject` under the timing wrapper and store elapsed seconds.
    ///
    /// On failure the stored value is cleared.
    pub fn measure_time(&mut self, subject: Subject) -> BenchResult<f64> {
        let measured = self.time_subject(subject);
        self.result_mut(subject).time_secs = measured.as_ref().ok().copied();
        measured
    }

    fn time_subject(&self, subject: Subject) -> BenchResult<f64> {
        let out = self.runner.run(&self.commands().timed(subject)?, Some(&self.work_dir));
        extract_elapsed_seconds(&out.stderr).ok_or_else(|| {
            BenchError::Message(format!("no elapsed time found in {} timing output", self.tools.timing_wrapper))
        })
    }

    /// Print both subjects' results. Returns `false` (printing nothing) if any value is unset.
    pub fn display_results<W: Write>(&self, out: &mut W) -> BenchResult<bool> {
        let (
            BenchmarkResult { memory_gb: Some(assigner_gb), time_secs: Some(assigner_secs) },
            BenchmarkResult { memory_gb: Some(proof_gb), time_secs: Some(proof_secs) },
        ) = (self.assigner, self.proof)
        else {
            error!("Benchmark results are incomplete. Please run the benchmark first.");
            return Ok(false);
        };

        writeln!(out, "1. Assigner:\n   Memory: {assigner_gb:.2}GB,\n   Time: {assigner_secs}s")?;
        writeln!(out, "2. Proof:\n   Memory: {proof_gb:.2}GB,\n   Time: {proof_secs}s")?;
        Ok(true)
    }

    /// Execute one menu action.
    pub fn dispatch<W: Write>(&mut self, choice: MenuChoice, out: &mut W) -> BenchResult<Step> {
        match choice {
            MenuChoice::VerifyBuild => {
                if self.verify_build() {
                    info!("Build verification succeeded.");
                } else {
                    error!("Build verification failed. Please ensure the zkllvm-template is correctly built before proceeding.");
                }
            }
            MenuChoice::MeasureMemory(subject) => match self.measure_memory(subject) {
                Ok(gb) => info!(%subject, memory_gb = gb, "heap allocation measured"),
                Err(e) => error!(%subject, "heap allocation measurement failed: {e}"),
            },
            MenuChoice::MeasureTime(subject) => match self.measure_time(subject) {
                Ok(secs) => info!(%subject, time_secs = secs, "execution time measured"),
                Err(e) => error!(%subject, "execution time measurement failed: {e}"),
            },
            MenuChoice::DisplayResults => {
                info!("Printing Benchmark Details:");
                self.display_results(out)?;
            }
            MenuChoice::Exit => {
                info!("Exiting.");
                return Ok(Step::Exit);
            }
        }
        Ok(Step::Continue)
    }

    /// Verify the build, then read menu choices from `input` until Exit or end of input.
    pub fn run<R: BufRead, W: Write>(&mut self, mut input: R, out: &mut W) -> BenchResult<()> {
        if !self.verify_build() {
            error!("Build verification failed. Please ensure the zkllvm-template is correctly built before proceeding.");
            return Err(BenchError::MissingArtifacts(self.artifacts.missing()));
        }

        let mut line = String::new();
        loop {
            menu::print_menu(out)?;
            line.clear();
            if input.read_line(&mut line)? == 0 {
                info!("End of input, exiting.");
                return Ok(());
            }
            let Some(choice) = MenuChoice::parse(&line) else {
                warn!("Invalid choice {:?}, expected 1-7", line.trim());
                continue;
            };
            if self.dispatch(choice, out)? == Step::Exit {
                return Ok(());
            }
        }
    }
}
