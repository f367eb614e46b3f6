//! tsinit - bootstrap TypeScript into a React Native project
//!
//! One run walks a fixed pipeline over the project directory: complete
//! `tsconfig.json`, install the TypeScript toolchain as dev dependencies,
//! add a `build:ts` script, point `index.js` at the compiled `App`, move
//! `App.js` into the source root and start `tsc` once.

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;

// Re-exports for convenience
pub use application::{Pipeline, PipelineReport, ProjectContext, StepRecord};
pub use config::{ResolvedSettings, Settings, SettingsSource};
pub use domain::ports::{CommandRunner, FileSystem, PipelineEvent, PipelineEventSink};
pub use domain::value_objects::{FallbackPolicy, OutcomeStatus, PipelineStage, StepOutcome};
pub use error::{TsinitError, TsinitResult};
