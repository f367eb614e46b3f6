//! Command Runner Implementations
//!
//! Concrete implementations of the CommandRunner port.

mod dry_run;
mod system;

pub use dry_run::{DryRunRunner, RecordedCommand};
pub use system::{platform_program, SystemRunner};
