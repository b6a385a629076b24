//! Structured diagnostics returned alongside detected lines.
//!
//! Everything here is serializable so the demo tools can dump a run as JSON.
use crate::hough::VoteStats;
use crate::lines::ScoredLine;
use crate::transform::HoughParams;
use serde::{Deserialize, Serialize};

/// Timing entry describing a single stage of the transform.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StageTiming {
    pub label: String,
    pub elapsed_ms: f64,
}

impl StageTiming {
    pub fn new(label: impl Into<String>, elapsed_ms: f64) -> Self {
        Self {
            label: label.into(),
            elapsed_ms,
        }
    }
}

/// Aggregated timing trace for one transform.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimingBreakdown {
    pub total_ms: f64,
    pub stages: Vec<StageTiming>,
}

impl TimingBreakdown {
    pub fn with_total(total_ms: f64) -> Self {
        Self {
            total_ms,
            stages: Vec::new(),
        }
    }

    pub fn push(&mut self, label: impl Into<String>, elapsed_ms: f64) {
        self.stages.push(StageTiming::new(label, elapsed_ms));
    }
}

/// Summary of one detection run.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HoughReport {
    pub width: usize,
    pub height: usize,
    pub params: HoughParams,
    pub threshold: u32,
    pub max_radius: usize,
    pub radius_bins: usize,
    pub votes: VoteStats,
    pub peak_votes: u32,
    pub line_count: usize,
    pub timing: TimingBreakdown,
    pub lines: Vec<ScoredLine>,
}
