//! Domain Entities
//!
//! Pure transformations of the project documents the pipeline owns.
//! Nothing here touches the disk; the application layer reads and writes.

pub mod build_config;
pub mod document;
pub mod entry_source;
pub mod manifest;

pub use build_config::CompilerDirs;
pub use document::DocumentError;
