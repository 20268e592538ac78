//! Per-algorithm completion report

use std::fmt;

use serde::Serialize;

use crate::engine::{AlgorithmKind, RunResult};

/// Statistics reported once an algorithm finishes
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RunSummary {
    pub kind: AlgorithmKind,
    pub loops: u64,
    pub swaps: u64,
    /// Time spent inside stepping, rounded to 0.01 ms
    pub elapsed_ms: f64,
    pub sample_size: usize,
}

impl RunSummary {
    pub fn new(kind: AlgorithmKind, result: &RunResult, elapsed_ms: f64) -> Self {
        Self {
            kind,
            loops: result.loops,
            swaps: result.swaps,
            elapsed_ms: (elapsed_ms * 100.0).round() / 100.0,
            sample_size: result.data.len(),
        }
    }
}

impl fmt::Display for RunSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Algorithm: {}, count: {}, swap: {}, time: {} [ms], n: {}",
            self.kind, self.loops, self.swaps, self.elapsed_ms, self.sample_size
        )
    }
}
