use hough_lines::image::{ImageRgba8, BLACK};

/// White canvas with a full-width dark row at `y`.
pub fn horizontal_line_rgba(width: usize, height: usize, y: usize) -> ImageRgba8 {
    assert!(y < height, "line row must lie inside the image");
    let mut img = ImageRgba8::new(width, height);
    for x in 0..width {
        img.set(x, y, BLACK);
    }
    img
}

/// White canvas with a single dark pixel.
pub fn single_pixel_rgba(width: usize, height: usize, x: usize, y: usize) -> ImageRgba8 {
    assert!(x < width && y < height, "pixel must lie inside the image");
    let mut img = ImageRgba8::new(width, height);
    img.set(x, y, BLACK);
    img
}

/// Coordinates of every pixel equal to `color`, row-major.
pub fn pixels_with_color(img: &ImageRgba8, color: [u8; 4]) -> Vec<(usize, usize)> {
    let mut out = Vec::new();
    for y in 0..img.h {
        for x in 0..img.w {
            if img.get(x, y) == color {
                out.push((x, y));
            }
        }
    }
    out
}
