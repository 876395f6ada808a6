//! Benchmark subjects and their measured results.

use std::fmt;

const BYTES_PER_GB: f64 = (1u64 << 30) as f64;

/// What is being measured.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Subject {
    Assigner,
    Proof,
}

impl Subject {
    /// Base name of the massif output file for this subject.
    pub fn massif_out_file(self) -> &'static str {
        match self {
            Subject::Assigner => "assigner_memory_bench",
            Subject::Proof => "proof_memory_bench",
        }
    }
}

impl fmt::Display for Subject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Subject::Assigner => f.write_str("Assigner"),
            Subject::Proof => f.write_str("Proof generation"),
        }
    }
}

/// Results for one subject. `None` means not measured (or the last measurement failed).
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct BenchmarkResult {
    pub memory_gb: Option<f64>,
    pub time_secs: Option<f64>,
}

/// Convert a byte count to binary gigabytes (2^30 bytes).
pub fn bytes_to_gb(bytes: u64) -> f64 {
    bytes as f64 / BYTES_PER_GB
}
