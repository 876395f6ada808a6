//! Process execution abstraction.
//!
//! Every external tool (assigner, proof generator, valgrind, ms_print, time) is
//! run through a `ProcessRunner`. Runners observe failures instead of raising
//! them: the caller gets both captured streams and decides what a non-zero exit
//! means.

pub mod mock;
pub mod system;
pub mod traits;

// Re-export key types
pub use mock::MockRunner;
pub use system::SystemRunner;
pub use traits::{CommandLine, CommandOutput, ProcessRunner};
