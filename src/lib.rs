pub mod core;
pub mod parse;
pub mod process;
pub mod session;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum BenchError {
    #[error("{0}")]
    Message(String),
    #[error("missing required build files: {}", .0.join(", "))]
    MissingArtifacts(Vec<String>),
    #[error("invalid {column} value {value:?} in memory report row: {line}")]
    InvalidNumber {
        column: &'static str,
        value: String,
        line: String,
    },
    #[error("memory report {column} column sum overflows u64")]
    ReportOverflow { column: &'static str },
    #[error("memory report contains no sample rows")]
    EmptyMemoryReport,
    #[error("config error: {0}")]
    Config(String),
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type BenchResult<T> = Result<T, BenchError>;

#[derive(Debug, Clone, Default)]
pub struct SystemInfo {
    pub cpu_model: Option<String>,
    pub cpu_cores_logical: Option<usize>,
    pub cpu_cores_physical: Option<usize>,
    pub total_ram_bytes: Option<u64>,
    pub os: Option<String>,
}

// Shared helpers
pub fn collect_system_info() -> SystemInfo {
    use sysinfo::System;
    let mut sys = System::new_all();
    sys.refresh_all();
    let cpu_model = sys.cpus().first().map(|c| c.brand().to_string());
    let cpu_cores_logical = Some(sys.cpus().len());
    let cpu_cores_physical = sys.physical_core_count();
    let total_ram_bytes = Some(sys.total_memory());
    let os = System::name();
    SystemInfo { cpu_model, cpu_cores_logical, cpu_cores_physical, total_ram_bytes, os }
}
