//! Hough transform over one source image.
//!
//! Construction classifies edge pixels, builds the trig table, and fills the
//! accumulator. After that the instance is read-only: `find_lines` can be
//! called any number of times with different thresholds.
use crate::diagnostics::{HoughReport, TimingBreakdown};
use crate::edges::{Brightness, EdgeClassifier, EdgeMask, RedChannel, DEFAULT_EDGE_THRESHOLD};
use crate::hough::{populate, populate_parallel, Accumulator, VoteStats};
use crate::image::{ImageView, Rgba8};
use crate::lines::{find_lines, find_scored_lines, Line, ScoredLine};
use crate::trig::{TrigTable, DEFAULT_ANGLE_STEPS};
use log::debug;
use serde::{Deserialize, Serialize};
use std::time::Instant;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HoughParams {
    /// Number of angle steps covering `[0°, 180°)`
    pub angle_steps: usize,
    /// Brightness values strictly below this are edges
    pub edge_threshold: u8,
    /// Shard voting over image rows with rayon
    pub parallel: bool,
}

impl Default for HoughParams {
    fn default() -> Self {
        Self {
            angle_steps: DEFAULT_ANGLE_STEPS,
            edge_threshold: DEFAULT_EDGE_THRESHOLD,
            parallel: false,
        }
    }
}

pub struct HoughTransform {
    params: HoughParams,
    width: usize,
    height: usize,
    trig: TrigTable,
    accumulator: Accumulator,
    edges: EdgeMask,
    stats: VoteStats,
    timing: TimingBreakdown,
}

impl HoughTransform {
    /// Default parameters with the red channel as brightness.
    pub fn new<I>(image: &I) -> Self
    where
        I: ImageView<Pixel = Rgba8>,
    {
        Self::with_params(image, HoughParams::default())
    }

    pub fn with_params<I>(image: &I, params: HoughParams) -> Self
    where
        I: ImageView<Pixel = Rgba8>,
    {
        Self::with_brightness(image, params, RedChannel)
    }

    pub fn with_brightness<I, B>(image: &I, params: HoughParams, brightness: B) -> Self
    where
        I: ImageView<Pixel = Rgba8>,
        B: Brightness,
    {
        let t0 = Instant::now();
        let width = image.width();
        let height = image.height();

        let edges_start = Instant::now();
        let classifier = EdgeClassifier::new(params.edge_threshold, brightness);
        let edges = classifier.edge_mask(image);
        let edges_ms = edges_start.elapsed().as_secs_f64() * 1000.0;

        let voting_start = Instant::now();
        let trig = TrigTable::new(params.angle_steps);
        let mut accumulator = Accumulator::new(params.angle_steps, width, height);
        debug!(
            "HoughTransform: {}x{} image, {} angle steps, max_radius={}",
            width,
            height,
            params.angle_steps,
            accumulator.max_radius()
        );
        let stats = if params.parallel {
            populate_parallel(&mut accumulator, &trig, &edges)
        } else {
            populate(&mut accumulator, &trig, &edges)
        };
        let voting_ms = voting_start.elapsed().as_secs_f64() * 1000.0;

        let mut timing = TimingBreakdown::with_total(t0.elapsed().as_secs_f64() * 1000.0);
        timing.push("edges", edges_ms);
        timing.push("voting", voting_ms);

        Self {
            params,
            width,
            height,
            trig,
            accumulator,
            edges,
            stats,
            timing,
        }
    }

    /// Lines whose cells received more than `threshold` votes.
    pub fn find_lines(&self, threshold: u32) -> Vec<Line> {
        find_lines(&self.accumulator, &self.trig, threshold)
    }

    pub fn find_scored_lines(&self, threshold: u32) -> Vec<ScoredLine> {
        find_scored_lines(&self.accumulator, &self.trig, threshold)
    }

    /// Extract lines and bundle them with construction diagnostics.
    pub fn report(&self, threshold: u32) -> HoughReport {
        let start = Instant::now();
        let lines = self.find_scored_lines(threshold);
        let extract_ms = start.elapsed().as_secs_f64() * 1000.0;

        let mut timing = self.timing.clone();
        timing.push("extract", extract_ms);
        timing.total_ms += extract_ms;

        HoughReport {
            width: self.width,
            height: self.height,
            params: self.params,
            threshold,
            max_radius: self.accumulator.max_radius(),
            radius_bins: self.accumulator.radius_bins(),
            votes: self.stats,
            peak_votes: self.accumulator.peak().map_or(0, |p| p.votes),
            line_count: lines.len(),
            timing,
            lines,
        }
    }

    pub fn params(&self) -> &HoughParams {
        &self.params
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn trig(&self) -> &TrigTable {
        &self.trig
    }

    pub fn accumulator(&self) -> &Accumulator {
        &self.accumulator
    }

    pub fn edges(&self) -> &EdgeMask {
        &self.edges
    }

    pub fn vote_stats(&self) -> &VoteStats {
        &self.stats
    }

    pub fn timing(&self) -> &TimingBreakdown {
        &self.timing
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::edges::Luminance;
    use crate::image::{ImageRgba8, BLACK};

    #[test]
    fn construction_records_shape_and_stats() {
        let mut img = ImageRgba8::new(20, 10);
        img.set(4, 4, BLACK);
        img.set(5, 4, BLACK);
        let hough = HoughTransform::new(&img);
        assert_eq!(hough.accumulator().angle_steps(), 180);
        assert_eq!(hough.accumulator().max_radius(), 23);
        assert_eq!(hough.vote_stats().edge_pixels, 2);
        assert_eq!(hough.edges().count, 2);
        let labels: Vec<_> = hough.timing().stages.iter().map(|s| s.label.as_str()).collect();
        assert_eq!(labels, ["edges", "voting"]);
    }

    #[test]
    fn brightness_model_changes_which_pixels_vote() {
        let mut img = ImageRgba8::new(8, 8);
        img.set(2, 2, [255, 0, 0, 255]);
        let red = HoughTransform::new(&img);
        let luma = HoughTransform::with_brightness(&img, HoughParams::default(), Luminance);
        assert_eq!(red.vote_stats().edge_pixels, 0);
        assert_eq!(luma.vote_stats().edge_pixels, 1);
    }

    #[test]
    fn custom_angle_steps_resize_the_grid() {
        let img = ImageRgba8::new(8, 8);
        let params = HoughParams {
            angle_steps: 360,
            ..Default::default()
        };
        let hough = HoughTransform::with_params(&img, params);
        assert_eq!(hough.accumulator().angle_steps(), 360);
        assert_eq!(hough.trig().steps(), 360);
    }

    #[test]
    fn report_includes_extraction_timing() {
        let mut img = ImageRgba8::new(10, 10);
        img.set(1, 1, BLACK);
        let report = HoughTransform::new(&img).report(0);
        assert_eq!(report.line_count, report.lines.len());
        assert_eq!(report.peak_votes, 1);
        assert_eq!(report.timing.stages.len(), 3);
        assert_eq!(report.line_count, 180);
    }
}
