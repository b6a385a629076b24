use super::rgba::Rgba8;

/// Borrowed RGBA8 view over caller memory. `stride` is in pixels.
#[derive(Clone, Debug)]
pub struct ImageRgba8View<'a> {
    pub w: usize,
    pub h: usize,
    pub stride: usize, // pixels between rows
    pub data: &'a [Rgba8],
}

impl<'a> ImageRgba8View<'a> {
    #[inline]
    pub fn get(&self, x: usize, y: usize) -> Rgba8 {
        self.data[y * self.stride + x]
    }
}

impl<'a> crate::image::traits::ImageView for ImageRgba8View<'a> {
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
