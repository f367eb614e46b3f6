//! Infrastructure Layer
//!
//! Concrete implementations of domain ports.
//! This layer handles all I/O operations.
//!
//! ## Structure
//!
//! - `fs/` - File system implementations (Local, DryRun)
//! - `process/` - Command runners (System, DryRun)

pub mod fs;
pub mod process;

// Re-export for convenience
pub use fs::{DryRunFs, LocalFs};
pub use process::{DryRunRunner, SystemRunner};
