//! Fallback Policy Value Object
//!
//! Decides when the package installer gives up on the primary package
//! manager and retries the same install with the fallback manager.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// When to retry an install with the fallback package manager
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum FallbackPolicy {
    /// Only when the primary manager could not be launched at all
    OnSpawnError,
    /// When the primary could not be launched or exited non-zero (default)
    #[default]
    OnFailure,
}

impl FallbackPolicy {
    /// Whether a primary run that exited with `exit_code` should fall back.
    pub fn falls_back_on_exit(self, exit_code: Option<i32>) -> bool {
        match self {
            FallbackPolicy::OnSpawnError => false,
            FallbackPolicy::OnFailure => exit_code != Some(0),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            FallbackPolicy::OnSpawnError => "on-spawn-error",
            FallbackPolicy::OnFailure => "on-failure",
        }
    }
}

impl fmt::Display for FallbackPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FallbackPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().replace('_', "-").as_str() {
            "on-spawn-error" | "spawn-error" | "spawn" => Ok(Self::OnSpawnError),
            "on-failure" | "failure" | "fail" => Ok(Self::OnFailure),
            other => Err(format!(
                "unknown fallback policy '{}' (expected on-failure or on-spawn-error)",
                other
            )),
        }
    }
}
