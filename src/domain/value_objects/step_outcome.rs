//! Step Outcome Value Object
//!
//! Every pipeline step reports one of three results instead of swallowing
//! errors, so callers can tell "nothing to do" from "tried and failed".

use std::fmt;

/// Result of a single pipeline step
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StepOutcome {
    /// The step changed something (or launched something)
    Applied(String),
    /// Nothing to do; the project was already in the desired state
    Skipped(String),
    /// The step could not complete; the pipeline keeps going
    Failed(String),
}

/// Status without the detail text (for counting and JSON)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OutcomeStatus {
    Applied,
    Skipped,
    Failed,
}

impl OutcomeStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            OutcomeStatus::Applied => "applied",
            OutcomeStatus::Skipped => "skipped",
            OutcomeStatus::Failed => "failed",
        }
    }
}

impl StepOutcome {
    pub fn applied(detail: impl Into<String>) -> Self {
        Self::Applied(detail.into())
    }

    pub fn skipped(reason: impl Into<String>) -> Self {
        Self::Skipped(reason.into())
    }

    pub fn failed(reason: impl Into<String>) -> Self {
        Self::Failed(reason.into())
    }

    pub fn status(&self) -> OutcomeStatus {
        match self {
            StepOutcome::Applied(_) => OutcomeStatus::Applied,
            StepOutcome::Skipped(_) => OutcomeStatus::Skipped,
            StepOutcome::Failed(_) => OutcomeStatus::Failed,
        }
    }

    pub fn detail(&self) -> &str {
        match self {
            StepOutcome::Applied(s) | StepOutcome::Skipped(s) | StepOutcome::Failed(s) => s,
        }
    }

    pub fn is_applied(&self) -> bool {
        matches!(self, StepOutcome::Applied(_))
    }

    pub fn is_skipped(&self) -> bool {
        matches!(self, StepOutcome::Skipped(_))
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, StepOutcome::Failed(_))
    }
}

impl fmt::Display for StepOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.status().as_str(), self.detail())
    }
}
