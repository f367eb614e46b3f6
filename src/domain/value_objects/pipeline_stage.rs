//! Pipeline Stage Value Object
//!
//! The bootstrap pipeline is a strictly linear state machine:
//!
//! ```text
//! Idle → ConfigEnsured → Installing → ScriptsPatched
//!      → EntryRewritten → SourceRelocated → CompileTriggered
//! ```

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum PipelineStage {
    Idle,
    ConfigEnsured,
    Installing,
    ScriptsPatched,
    EntryRewritten,
    SourceRelocated,
    CompileTriggered,
}

impl PipelineStage {
    /// All step stages in execution order (without `Idle`).
    pub const STEPS: [PipelineStage; 6] = [
        PipelineStage::ConfigEnsured,
        PipelineStage::Installing,
        PipelineStage::ScriptsPatched,
        PipelineStage::EntryRewritten,
        PipelineStage::SourceRelocated,
        PipelineStage::CompileTriggered,
    ];

    /// The stage that follows this one, `None` once terminal.
    pub fn next(self) -> Option<PipelineStage> {
        match self {
            PipelineStage::Idle => Some(PipelineStage::ConfigEnsured),
            PipelineStage::ConfigEnsured => Some(PipelineStage::Installing),
            PipelineStage::Installing => Some(PipelineStage::ScriptsPatched),
            PipelineStage::ScriptsPatched => Some(PipelineStage::EntryRewritten),
            PipelineStage::EntryRewritten => Some(PipelineStage::SourceRelocated),
            PipelineStage::SourceRelocated => Some(PipelineStage::CompileTriggered),
            PipelineStage::CompileTriggered => None,
        }
    }

    pub fn is_terminal(self) -> bool {
        self == PipelineStage::CompileTriggered
    }

    /// Stable identifier used in NDJSON events.
    pub fn step_id(self) -> &'static str {
        match self {
            PipelineStage::Idle => "idle",
            PipelineStage::ConfigEnsured => "build_config",
            PipelineStage::Installing => "install",
            PipelineStage::ScriptsPatched => "scripts",
            PipelineStage::EntryRewritten => "entry_import",
            PipelineStage::SourceRelocated => "relocate",
            PipelineStage::CompileTriggered => "compile",
        }
    }
}

impl fmt::Display for PipelineStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.step_id())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn steps_follow_next_chain() {
        let mut stage = PipelineStage::Idle;
        for expected in PipelineStage::STEPS {
            let next = stage.next().unwrap();
            assert_eq!(next, expected);
            stage = next;
        }
        assert!(stage.is_terminal());
        assert_eq!(stage.next(), None);
    }

    #[test]
    fn stages_are_ordered() {
        assert!(PipelineStage::Idle < PipelineStage::ConfigEnsured);
        assert!(PipelineStage::SourceRelocated < PipelineStage::CompileTriggered);
    }
}
