mod common;

use common::synthetic_image::{horizontal_line_rgba, pixels_with_color};
use hough_lines::image::{ImageRgba8, ImageRgba8View, BLACK, RED};
use hough_lines::{draw_line, draw_lines, HoughParams, HoughTransform};
use std::f64::consts::FRAC_PI_2;

const LINE_ROW: usize = 10;

#[test]
fn horizontal_line_is_detected_and_redrawn_exactly() {
    let _ = env_logger::builder().is_test(true).try_init();
    let (width, height) = (60usize, 40usize);
    let image = horizontal_line_rgba(width, height, LINE_ROW);

    let hough = HoughTransform::new(&image);
    assert_eq!(hough.edges().count, 60);
    assert_eq!(hough.accumulator().votes_at(90, LINE_ROW as i32), Some(60));

    let lines = hough.find_lines(50);
    let horizontal = lines
        .iter()
        .find(|l| l.radius == LINE_ROW as i32 && (l.theta - FRAC_PI_2).abs() < 1e-9)
        .copied()
        .unwrap_or_else(|| panic!("expected (10, π/2) among {lines:?}"));

    let mut canvas = ImageRgba8::new(width, height);
    draw_line(&mut canvas, &horizontal, RED);
    assert_eq!(
        pixels_with_color(&canvas, RED),
        pixels_with_color(&image, BLACK),
        "redrawn line should cover exactly the original edge pixels"
    );
}

#[test]
fn every_reported_cell_beats_the_threshold() {
    let image = horizontal_line_rgba(60, 40, LINE_ROW);
    let hough = HoughTransform::new(&image);
    let scored = hough.find_scored_lines(50);
    assert!(!scored.is_empty());
    for s in &scored {
        assert!(s.votes > 50, "cell with {} votes was reported", s.votes);
    }
    // Exactly 60 edge pixels: nothing exceeds 60, the horizontal cell sits at 60.
    assert!(hough.find_lines(60).is_empty());
    assert!(hough
        .find_scored_lines(59)
        .iter()
        .any(|s| s.votes == 60 && s.line.radius == LINE_ROW as i32));
}

#[test]
fn extraction_is_repeatable() {
    let image = horizontal_line_rgba(45, 30, 7);
    let hough = HoughTransform::new(&image);
    let first = hough.find_lines(20);
    let second = hough.find_lines(20);
    assert_eq!(first, second);
}

#[test]
fn parallel_voting_gives_identical_lines() {
    let mut image = horizontal_line_rgba(80, 50, 25);
    for y in 0..50 {
        image.set(33, y, BLACK);
    }
    let sequential = HoughTransform::new(&image);
    let parallel = HoughTransform::with_params(
        &image,
        HoughParams {
            parallel: true,
            ..Default::default()
        },
    );
    assert_eq!(sequential.accumulator(), parallel.accumulator());
    assert_eq!(sequential.find_lines(40), parallel.find_lines(40));
}

#[test]
fn strided_view_votes_like_owned_image() {
    let owned = horizontal_line_rgba(20, 12, 3);
    // Same pixels with two padding columns per row.
    let stride = owned.w + 2;
    let mut padded = vec![BLACK; stride * owned.h];
    for y in 0..owned.h {
        for x in 0..owned.w {
            padded[y * stride + x] = owned.get(x, y);
        }
    }
    let view = ImageRgba8View {
        w: owned.w,
        h: owned.h,
        stride,
        data: &padded,
    };
    let a = HoughTransform::new(&owned);
    let b = HoughTransform::new(&view);
    assert_eq!(a.accumulator(), b.accumulator());
}

#[test]
fn vertical_line_round_trip() {
    let (width, height) = (30usize, 55usize);
    let mut image = ImageRgba8::new(width, height);
    for y in 0..height {
        image.set(12, y, BLACK);
    }
    let hough = HoughTransform::new(&image);
    assert_eq!(hough.accumulator().votes_at(0, 12), Some(55));
    let lines = hough.find_lines(50);
    let vertical: Vec<_> = lines
        .iter()
        .filter(|l| l.radius == 12 && l.theta == 0.0)
        .copied()
        .collect();
    assert_eq!(vertical.len(), 1);

    let mut canvas = ImageRgba8::new(width, height);
    draw_lines(&mut canvas, &vertical, RED);
    assert_eq!(
        pixels_with_color(&canvas, RED),
        pixels_with_color(&image, BLACK)
    );
}
