mod common;

use common::synthetic_image::single_pixel_rgba;
use hough_lines::hough::{max_radius_for, Accumulator};
use hough_lines::trig::TrigTable;
use hough_lines::HoughTransform;

#[test]
fn grid_shape_and_zero_initialisation() {
    for (w, h) in [(1usize, 1usize), (60, 40), (17, 93), (640, 480)] {
        let acc = Accumulator::new(180, w, h);
        let max_radius = (w as f64).hypot(h as f64).ceil() as usize;
        assert_eq!(acc.max_radius(), max_radius);
        assert_eq!(max_radius_for(w, h), max_radius);
        assert_eq!(acc.len(), 180 * 2 * max_radius, "{w}x{h}");
        assert_eq!(acc.total_votes(), 0);
    }
}

#[test]
fn single_edge_pixel_votes_once_per_angle_at_truncated_radius() {
    let (x, y) = (13usize, 7usize);
    let image = single_pixel_rgba(20, 15, x, y);
    let hough = HoughTransform::new(&image);
    let acc = hough.accumulator();
    let max_radius = acc.max_radius() as i64;

    for t in 0..180 {
        let theta = (t as f64).to_radians();
        let expected = (x as f64 * theta.cos() + y as f64 * theta.sin()) as i64 + max_radius;
        for r in 0..acc.radius_bins() {
            let want = u32::from(r as i64 == expected);
            assert_eq!(acc.votes(t, r), want, "angle {t}, bin {r}");
        }
    }
    assert_eq!(acc.total_votes(), 180);
    assert_eq!(hough.vote_stats().votes_dropped, 0);
}

#[test]
fn votes_outside_the_radius_range_are_dropped() {
    let trig = TrigTable::default();
    let mut acc = Accumulator::new(180, 4, 3);
    // max_radius = 5: a point far outside the image projects out of range at
    // most angles.
    let cast = acc.cast_votes(&trig, -40, 0);
    assert!(cast > 0 && cast < 180, "cast {cast}");
    assert_eq!(acc.total_votes(), cast as u64);
    for t in 0..180 {
        let row_sum: u32 = (0..acc.radius_bins()).map(|r| acc.votes(t, r)).sum();
        let theta = (t as f64).to_radians();
        let r = (-40.0 * theta.cos()) as i64 + 5;
        let in_range = (0..10).contains(&r);
        assert_eq!(row_sum, u32::from(in_range), "angle {t}");
    }
}
