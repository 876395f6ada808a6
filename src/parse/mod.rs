//! Parsers for the text reports produced by the external measurement tools.

pub mod elapsed;
pub mod massif;

pub use elapsed::extract_elapsed_seconds;
pub use massif::{MemoryReport, MemoryRow, RowLabel, parse_memory_report};
