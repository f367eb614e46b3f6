//! Step 6: start the TypeScript compiler once, without waiting for it.

use std::path::Path;

use crate::config::CompileConfig;
use crate::domain::ports::{CommandRunner, CommandSpec, PipelineEvent, PipelineEventSink};
use crate::domain::value_objects::{PipelineStage, StepOutcome};

/// Launch the configured compile command in `cwd`.
///
/// The compiler's result is never observed; only a failed launch is
/// reported.
pub fn trigger_compile(
    runner: &dyn CommandRunner,
    compile: &CompileConfig,
    cwd: &Path,
    inherit_stdio: bool,
    sink: &dyn PipelineEventSink,
) -> StepOutcome {
    if !compile.enabled {
        return StepOutcome::skipped("compile disabled in settings");
    }

    let Some((program, args)) = compile.command.split_first() else {
        return StepOutcome::failed("compile command is empty");
    };

    let spec = CommandSpec::new(program.as_str(), cwd)
        .args(args.iter().cloned())
        .inherit_stdio(inherit_stdio);
    let line = spec.display_line();
    sink.on_event(PipelineEvent::CommandLaunched {
        stage: PipelineStage::CompileTriggered,
        command: line.clone(),
    });

    match runner.spawn_detached(&spec) {
        Ok(()) => StepOutcome::applied(format!("started {}", line)),
        Err(e) => StepOutcome::failed(format!("could not start {}: {}", line, e)),
    }
}
