#![doc = include_str!("../README.md")]

// Core pipeline, leaf first.
pub mod trig;
pub mod edges;
pub mod hough;
pub mod lines;
pub mod draw;
pub mod transform;

// Supporting surface.
pub mod config;
pub mod diagnostics;
pub mod image;

// --- High-level re-exports -------------------------------------------------

pub use crate::draw::{draw_line, draw_lines};
pub use crate::lines::{Line, ScoredLine};
pub use crate::transform::{HoughParams, HoughTransform};
pub use crate::diagnostics::HoughReport;

// --- Prelude ---------------------------------------------------------------

/// Small prelude for quick experiments.
///
/// ```no_run
/// use hough_lines::prelude::*;
///
/// # fn main() {
/// let mut img = ImageRgba8::new(64, 48);
/// for x in 0..64 {
///     img.set(x, 10, BLACK);
/// }
///
/// let hough = HoughTransform::new(&img);
/// let lines = hough.find_lines(50);
/// draw_lines(&mut img, &lines, RED);
/// println!("found {} lines", lines.len());
/// # }
/// ```
pub mod prelude {
    pub use crate::image::{ImageRgba8, ImageView, ImageViewMut, BLACK, RED, WHITE};
    pub use crate::{draw_line, draw_lines, HoughParams, HoughTransform, Line};
}
