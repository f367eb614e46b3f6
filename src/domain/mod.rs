//! Domain Layer
//!
//! Pure bootstrap rules without I/O.
//!
//! ## Structure
//!
//! - `entities/` - Document transformations (tsconfig, package.json, entry file)
//! - `value_objects/` - Immutable value types (StepOutcome, PipelineStage, SafePath)
//! - `ports/` - Interface definitions for infrastructure (FileSystem, CommandRunner, events)

pub mod entities;
pub mod ports;
pub mod value_objects;
