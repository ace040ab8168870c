//! Record patterns that could not be compiled. A degraded pattern never
//! matches; every other pattern in its tier keeps running.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One pattern that failed to compile.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PatternFailure {
    pub pattern: String,
    pub group: String,
    pub reason: String,
    pub timestamp: DateTime<Utc>,
}

/// Collects pattern failures seen while validating a reply.
#[derive(Debug, Clone, Default)]
pub struct DegradationTracker {
    failures: Vec<PatternFailure>,
}

impl DegradationTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a pattern failure. Repeat reports for the same pattern are ignored.
    pub fn record_failure(&mut self, pattern: &str, group: &str, reason: &str) {
        if self.failures.iter().any(|f| f.pattern == pattern) {
            return;
        }
        tracing::warn!(pattern, group, reason, "guardrail pattern degraded");
        self.failures.push(PatternFailure {
            pattern: pattern.to_string(),
            group: group.to_string(),
            reason: reason.to_string(),
            timestamp: Utc::now(),
        });
    }

    pub fn failures(&self) -> &[PatternFailure] {
        &self.failures
    }

    pub fn is_degraded(&self) -> bool {
        !self.failures.is_empty()
    }

    /// Failures in one pattern group.
    pub fn failures_in(&self, group: &str) -> Vec<&PatternFailure> {
        self.failures.iter().filter(|f| f.group == group).collect()
    }
}
