//! Domain Ports (Interfaces)
//!
//! These traits define the boundaries of the domain layer.
//! Infrastructure provides the concrete implementations.

pub mod command_runner;
pub mod file_system;
pub mod pipeline_events;

pub use command_runner::{CommandRunner, CommandSpec};
pub use file_system::{FileSystem, FsError, FsResult};
pub use pipeline_events::{NoopEventSink, PipelineEvent, PipelineEventSink, RecordingEventSink};
