//! Pipeline Event Port
//!
//! Observable interface for the bootstrap pipeline. The CLI turns these
//! into colored status lines or NDJSON.

use crate::domain::value_objects::{PipelineStage, StepOutcome};

/// Event emitted while the pipeline runs
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PipelineEvent {
    /// A step is about to run
    StepStarted {
        stage: PipelineStage,
        /// Human-readable progress label, e.g. "Configuring tsconfig.json"
        label: String,
    },

    /// An external command is being launched
    CommandLaunched {
        stage: PipelineStage,
        command: String,
    },

    /// A step finished
    StepFinished {
        stage: PipelineStage,
        outcome: StepOutcome,
    },
}

/// Trait for receiving pipeline events
pub trait PipelineEventSink {
    fn on_event(&self, event: PipelineEvent);
}

/// No-op event sink for silent operation
pub struct NoopEventSink;

impl PipelineEventSink for NoopEventSink {
    fn on_event(&self, _event: PipelineEvent) {}
}

/// Sink that keeps every event, for tests and post-run inspection
#[derive(Default)]
pub struct RecordingEventSink {
    events: std::cell::RefCell<Vec<PipelineEvent>>,
}

impl RecordingEventSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> Vec<PipelineEvent> {
        self.events.borrow().clone()
    }
}

impl PipelineEventSink for RecordingEventSink {
    fn on_event(&self, event: PipelineEvent) {
        self.events.borrow_mut().push(event);
    }
}
