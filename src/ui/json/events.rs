//! NDJSON event types.
//!
//! Every line carries an `event` tag; step events add the stable `step`
//! identifier of the pipeline stage.

use serde::Serialize;

/// Emitted once before the first step.
#[derive(Debug, Clone, Serialize)]
pub struct StartEvent<'a> {
    pub event: &'static str,
    pub command: &'a str,
    pub version: &'static str,
    pub project: String,
    pub settings: String,
    pub dry_run: bool,
}

impl<'a> StartEvent<'a> {
    pub fn new(command: &'a str, project: String, settings: String, dry_run: bool) -> Self {
        Self {
            event: "start",
            command,
            version: env!("CARGO_PKG_VERSION"),
            project,
            settings,
            dry_run,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct StepStartedEvent<'a> {
    pub event: &'static str,
    pub step: &'static str,
    pub label: &'a str,
}

impl<'a> StepStartedEvent<'a> {
    pub fn new(step: &'static str, label: &'a str) -> Self {
        Self {
            event: "step_started",
            step,
            label,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct CommandEvent<'a> {
    pub event: &'static str,
    pub step: &'static str,
    pub command: &'a str,
}

impl<'a> CommandEvent<'a> {
    pub fn new(step: &'static str, command: &'a str) -> Self {
        Self {
            event: "command",
            step,
            command,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct StepFinishedEvent<'a> {
    pub event: &'static str,
    pub step: &'static str,
    pub status: &'static str,
    pub detail: &'a str,
}

impl<'a> StepFinishedEvent<'a> {
    pub fn new(step: &'static str, status: &'static str, detail: &'a str) -> Self {
        Self {
            event: "step_finished",
            step,
            status,
            detail,
        }
    }
}

/// A change a dry run would make.
#[derive(Debug, Clone, Serialize)]
pub struct PlannedEvent {
    pub event: &'static str,
    pub kind: &'static str,
    pub path: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub to: Option<String>,
}

impl PlannedEvent {
    pub fn write(path: String) -> Self {
        Self {
            event: "planned",
            kind: "write",
            path,
            to: None,
        }
    }

    pub fn create_dir(path: String) -> Self {
        Self {
            event: "planned",
            kind: "create_dir",
            path,
            to: None,
        }
    }

    pub fn rename(from: String, to: String) -> Self {
        Self {
            event: "planned",
            kind: "move",
            path: from,
            to: Some(to),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct CompleteEvent<'a> {
    pub event: &'static str,
    pub command: &'a str,
    pub applied: usize,
    pub skipped: usize,
    pub failed: usize,
}

impl<'a> CompleteEvent<'a> {
    pub fn new(command: &'a str, applied: usize, skipped: usize, failed: usize) -> Self {
        Self {
            event: "complete",
            command,
            applied,
            skipped,
            failed,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ErrorEvent<'a> {
    pub event: &'static str,
    pub command: &'a str,
    pub message: String,
}

impl<'a> ErrorEvent<'a> {
    pub fn new(command: &'a str, message: impl Into<String>) -> Self {
        Self {
            event: "error",
            command,
            message: message.into(),
        }
    }
}
