use serde::{Deserialize, Serialize};
use std::fmt;

use crate::{HopObservation, HopRecord};

/// Target recorded for commands that carry no arguments.
pub const UNKNOWN_TARGET: &str = "unknown";

/// Row identifier of a stored run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RunId(i64);

impl RunId {
    pub fn new(id: i64) -> Self {
        Self(id)
    }

    pub fn get(&self) -> i64 {
        self.0
    }
}

impl fmt::Display for RunId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i64> for RunId {
    fn from(id: i64) -> Self {
        Self(id)
    }
}

/// Best-effort target of a command: its last whitespace-separated token.
///
/// A command without arguments yields [`UNKNOWN_TARGET`].
pub fn target_of(command: &str) -> String {
    let tokens: Vec<&str> = command.split_whitespace().collect();
    match tokens.as_slice() {
        [_, .., last] => last.to_string(),
        _ => UNKNOWN_TARGET.to_string(),
    }
}

/// Result of executing one diagnostic command.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DiagnosticRun {
    pub command: String,
    pub target: String,
    pub hops: Vec<HopObservation>,
}

impl DiagnosticRun {
    pub fn new(command: impl Into<String>, hops: Vec<HopObservation>) -> Self {
        let command = command.into();
        let target = target_of(&command);
        Self {
            command,
            target,
            hops,
        }
    }

    pub fn hop_count(&self) -> usize {
        self.hops.len()
    }

    pub fn to_records(&self) -> Vec<HopRecord> {
        self.hops.iter().map(HopRecord::from).collect()
    }
}

/// Lightweight listing entry for a stored run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunSummary {
    pub id: RunId,
    pub command: String,
    pub target: String,
    pub hop_count: usize,
    /// Save time (RFC 3339).
    pub timestamp: String,
}
