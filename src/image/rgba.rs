//! Owned RGBA8 image in row-major layout (stride == width).
//!
//! This is the buffer the rasterizer draws into and the type the I/O layer
//! decodes to. Provides row access and a contiguous slice.

/// One pixel as `[r, g, b, a]`.
pub type Rgba8 = [u8; 4];

pub const WHITE: Rgba8 = [255, 255, 255, 255];
pub const BLACK: Rgba8 = [0, 0, 0, 255];
pub const RED: Rgba8 = [255, 0, 0, 255];

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ImageRgba8 {
    /// Image width in pixels
    pub w: usize,
    /// Image height in pixels
    pub h: usize,
    /// Number of pixels between consecutive rows (equals `w`)
    pub stride: usize,
    /// Backing storage in row-major order
    pub data: Vec<Rgba8>,
}

impl ImageRgba8 {
    /// Construct a buffer of size `w × h` filled with `value`.
    pub fn filled(w: usize, h: usize, value: Rgba8) -> Self {
        Self {
            w,
            h,
            stride: w,
            data: vec![value; w * h],
        }
    }

    /// Construct an opaque white buffer of size `w × h`.
    pub fn new(w: usize, h: usize) -> Self {
        Self::filled(w, h, WHITE)
    }

    /// Wrap existing row-major pixels. Returns `None` on a size mismatch.
    pub fn from_pixels(w: usize, h: usize, data: Vec<Rgba8>) -> Option<Self> {
        (data.len() == w * h).then_some(Self {
            w,
            h,
            stride: w,
            data,
        })
    }

    #[inline]
    /// Convert (x, y) to a linear index into `data`.
    pub fn idx(&self, x: usize, y: usize) -> usize {
        y * self.stride + x
    }
    #[inline]
    pub fn get(&self, x: usize, y: usize) -> Rgba8 {
        self.data[self.idx(x, y)]
    }
    #[inline]
    pub fn set(&mut self, x: usize, y: usize, v: Rgba8) {
        let i = self.idx(x, y);
        self.data[i] = v;
    }

    /// Borrow as a read-only view.
    pub fn as_view(&self) -> super::ImageRgba8View<'_> {
        super::ImageRgba8View {
            w: self.w,
            h: self.h,
            stride: self.stride,
            data: &self.data,
        }
    }
}

impl crate::image::traits::ImageView for ImageRgba8 {
    type Pixel = Rgba8;

    #[inline]
    fn width(&self) -> usize {
        self.w
    }
    #[inline]
    fn height(&self) -> usize {
        self.h
    }
    #[inline]
    fn stride(&self) -> usize {
        self.stride
    }
    #[inline]
    fn row(&self, y: usize) -> &[Rgba8] {
        let start = y * self.stride;
        &self.data[start..start + self.w]
    }
}

impl crate::image::traits::ImageViewMut for ImageRgba8 {
    #[inline]
    fn row_mut(&mut self, y: usize) -> &mut [Rgba8] {
        let start = y * self.stride;
        let end = start + self.w;
        &mut self.data[start..end]
    }
}
