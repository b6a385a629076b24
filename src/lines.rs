//! Detected lines and threshold extraction from the accumulator.
use crate::hough::Accumulator;
use crate::trig::TrigTable;
use log::debug;
use serde::{Deserialize, Serialize};

/// Line in normal form `x·cos(theta) + y·sin(theta) = radius`.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Line {
    pub radius: i32,
    /// Angle of the normal in radians
    pub theta: f64,
}

impl Line {
    pub fn new(radius: i32, theta: f64) -> Self {
        Self { radius, theta }
    }

    /// Normal angle in degrees.
    pub fn theta_deg(&self) -> f64 {
        self.theta.to_degrees()
    }
}

/// A line together with the number of votes its cell received.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoredLine {
    #[serde(flatten)]
    pub line: Line,
    pub theta_deg: f64,
    pub votes: u32,
}

/// All cells with more than `threshold` votes, as scored lines.
///
/// Order is angle step ascending, then radius bin ascending. There is no
/// ranking by votes and adjacent cells around the same physical line are
/// all reported.
pub fn find_scored_lines(acc: &Accumulator, trig: &TrigTable, threshold: u32) -> Vec<ScoredLine> {
    let mut lines = Vec::new();
    for t in 0..acc.angle_steps() {
        let theta = trig.theta(t);
        for r in 0..acc.radius_bins() {
            let votes = acc.votes(t, r);
            if votes > threshold {
                let line = Line::new(acc.bin_radius(r), theta);
                lines.push(ScoredLine {
                    line,
                    theta_deg: line.theta_deg(),
                    votes,
                });
            }
        }
    }
    debug!(
        "Line extraction: {} cells above threshold {}",
        lines.len(),
        threshold
    );
    lines
}

/// All cells with more than `threshold` votes, as lines.
pub fn find_lines(acc: &Accumulator, trig: &TrigTable, threshold: u32) -> Vec<Line> {
    find_scored_lines(acc, trig, threshold)
        .into_iter()
        .map(|s| s.line)
        .collect()
}
