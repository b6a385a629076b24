//! Rasterize normal-form lines onto an image.
//!
//! Two independent passes: solve for `y` at every column, then solve for `x`
//! at every row. Both results are truncated toward zero and written only if
//! they land inside the image. A pixel may be written by both passes.
//!
//! Sine or cosine values with magnitude below [`TRIG_EPSILON`] are treated as
//! exactly zero. A zero divisor skips its pass, and a zero multiplier drops
//! out of the other pass, so `theta = π/2` draws one exact row and
//! `theta = 0` one exact column.
use crate::image::ImageViewMut;
use crate::lines::Line;

pub const TRIG_EPSILON: f64 = 1e-9;

#[inline]
fn snap_to_zero(v: f64) -> f64 {
    if v.abs() < TRIG_EPSILON {
        0.0
    } else {
        v
    }
}

/// Truncate `v` and accept it as an index in `[0, limit)`.
#[inline]
fn to_index(v: f64, limit: usize) -> Option<usize> {
    if !v.is_finite() {
        return None;
    }
    let v = v.trunc();
    (v >= 0.0 && v < limit as f64).then_some(v as usize)
}

/// Draw `line` in `color`. Returns the number of pixel writes across both
/// passes.
pub fn draw_line<I>(image: &mut I, line: &Line, color: I::Pixel) -> usize
where
    I: ImageViewMut,
{
    let w = image.width();
    let h = image.height();
    let radius = f64::from(line.radius);
    let sin = snap_to_zero(line.theta.sin());
    let cos = snap_to_zero(line.theta.cos());
    let mut writes = 0;

    if sin != 0.0 {
        for x in 0..w {
            if let Some(y) = to_index((radius - x as f64 * cos) / sin, h) {
                image.set_pixel(x, y, color);
                writes += 1;
            }
        }
    }

    if cos != 0.0 {
        for y in 0..h {
            if let Some(x) = to_index((radius - y as f64 * sin) / cos, w) {
                image.set_pixel(x, y, color);
                writes += 1;
            }
        }
    }

    writes
}

/// Draw lines in order; later lines overwrite earlier ones.
pub fn draw_lines<I>(image: &mut I, lines: &[Line], color: I::Pixel) -> usize
where
    I: ImageViewMut,
{
    lines
        .iter()
        .map(|line| draw_line(image, line, color))
        .sum()
}
