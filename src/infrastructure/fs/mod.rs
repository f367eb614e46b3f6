//! File System Implementations
//!
//! Concrete implementations of the FileSystem port.

mod dry_run;
mod local;

pub use dry_run::{DryRunFs, PlannedChange, PlannedMove};
pub use local::LocalFs;
