//! Application Layer
//!
//! The bootstrap steps and the pipeline that runs them in order.
//! Business rules live in `domain::entities`; this layer does the I/O
//! through the domain ports and turns every problem into a `StepOutcome`.
//!
//! ## Steps
//!
//! 1. `config_merger` - create or complete `tsconfig.json`
//! 2. `package_installer` - add dev dependencies (yarn, falling back to npm)
//! 3. `script_patcher` - add the `build:ts` script to `package.json`
//! 4. `entry_rewriter` - point the entry import at the output directory
//! 5. `source_relocator` - move `App.js` into the source root as `App.tsx`
//! 6. `compiler` - launch `tsc` once without waiting

pub mod compiler;
pub mod config_merger;
pub mod context;
mod documents;
pub mod entry_rewriter;
pub mod package_installer;
pub mod pipeline;
pub mod script_patcher;
pub mod source_relocator;

pub use compiler::trigger_compile;
pub use config_merger::ensure_build_config;
pub use context::ProjectContext;
pub use entry_rewriter::rewrite_entry_import;
pub use package_installer::{install, parse_package_list, InstallOptions, InstallOutcome};
pub use pipeline::{Pipeline, PipelineReport, StepRecord};
pub use script_patcher::ensure_build_script;
pub use source_relocator::relocate_application_source;
