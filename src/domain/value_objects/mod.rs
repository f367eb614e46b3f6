//! Domain Value Objects
//!
//! Immutable value types shared by the pipeline steps and the CLI.

mod config_warning;
mod fallback_policy;
mod path;
mod pipeline_stage;
mod step_outcome;

pub use config_warning::ConfigWarning;
pub use fallback_policy::FallbackPolicy;
pub use path::{PathError, SafePath};
pub use pipeline_stage::PipelineStage;
pub use step_outcome::{OutcomeStatus, StepOutcome};
