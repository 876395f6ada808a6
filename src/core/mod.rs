//! Core types: build artifact layout, tool configuration and benchmark results.

pub mod artifacts;
pub mod config;
pub mod results;

// Re-export key types for convenience
pub use artifacts::BuildArtifacts;
pub use config::{ToolConfig, load_tool_config};
pub use results::{BenchmarkResult, Subject, bytes_to_gb};
