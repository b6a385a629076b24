//! Global brightness threshold edge test.
//!
//! A pixel is an edge when its brightness is strictly below the threshold.
//! There is no gradient or neighborhood analysis: dark pixels vote, bright
//! pixels do not.
use super::brightness::{Brightness, RedChannel};
use crate::image::{ImageView, Rgba8};

/// Brightness values strictly below this are edges.
pub const DEFAULT_EDGE_THRESHOLD: u8 = 128;

#[derive(Clone, Copy, Debug)]
pub struct EdgeClassifier<B = RedChannel> {
    pub threshold: u8,
    pub brightness: B,
}

impl Default for EdgeClassifier<RedChannel> {
    fn default() -> Self {
        Self {
            threshold: DEFAULT_EDGE_THRESHOLD,
            brightness: RedChannel,
        }
    }
}

impl<B: Brightness> EdgeClassifier<B> {
    pub fn new(threshold: u8, brightness: B) -> Self {
        Self {
            threshold,
            brightness,
        }
    }

    #[inline]
    pub fn classify(&self, px: Rgba8) -> bool {
        self.brightness.brightness(px) < self.threshold
    }

    /// Classify the pixel at (x, y). Coordinates must lie inside the image.
    #[inline]
    pub fn is_edge<I>(&self, image: &I, x: usize, y: usize) -> bool
    where
        I: ImageView<Pixel = Rgba8>,
    {
        self.classify(image.pixel(x, y))
    }

    /// Classify every pixel of `image`.
    pub fn edge_mask<I>(&self, image: &I) -> EdgeMask
    where
        I: ImageView<Pixel = Rgba8>,
    {
        let w = image.width();
        let h = image.height();
        let mut data = Vec::with_capacity(w * h);
        for row in image.rows() {
            data.extend(row.iter().map(|&px| self.classify(px)));
        }
        let count = data.iter().filter(|&&e| e).count();
        EdgeMask { w, h, data, count }
    }
}

/// Dense per-pixel edge flags in row-major order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EdgeMask {
    pub w: usize,
    pub h: usize,
    pub data: Vec<bool>,
    /// Number of `true` entries
    pub count: usize,
}

impl EdgeMask {
    #[inline]
    pub fn is_edge(&self, x: usize, y: usize) -> bool {
        self.data[y * self.w + x]
    }

    #[inline]
    pub fn row(&self, y: usize) -> &[bool] {
        let start = y * self.w;
        &self.data[start..start + self.w]
    }

    /// Edge pixel coordinates in row-major order.
    pub fn edge_points(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.data
            .iter()
            .enumerate()
            .filter(|&(_, &e)| e)
            .map(move |(i, _)| (i % self.w, i / self.w))
    }
}
