//! I/O helpers for RGBA images, diagnostic rasters, and JSON.
//!
//! - `load_rgba_image`: decode a PNG/JPEG/etc. into an owned `ImageRgba8`.
//! - `save_rgba_image`: encode an `ImageRgba8` (format from the extension).
//! - `save_edge_mask`: write an `EdgeMask` as black edges on white.
//! - `save_hough_space`: write the accumulator as a normalized gray image.
//! - `write_json_file`: pretty-print a serializable value to disk.
use super::{ImageRgba8, ImageView};
use crate::edges::EdgeMask;
use crate::hough::Accumulator;
use image::{GrayImage, Luma, RgbaImage};
use serde::Serialize;
use std::fs;
use std::path::Path;

/// Load an image from disk and convert it to RGBA8.
pub fn load_rgba_image(path: &Path) -> Result<ImageRgba8, String> {
    let img = image::open(path)
        .map_err(|e| format!("Failed to open {}: {e}", path.display()))?
        .into_rgba8();
    let width = img.width() as usize;
    let height = img.height() as usize;
    let pixels = img
        .into_raw()
        .chunks_exact(4)
        .map(|c| [c[0], c[1], c[2], c[3]])
        .collect();
    ImageRgba8::from_pixels(width, height, pixels)
        .ok_or_else(|| format!("Decoded buffer of {} has unexpected size", path.display()))
}

/// Save an RGBA8 image; the encoder is chosen from the file extension.
pub fn save_rgba_image(image: &ImageRgba8, path: &Path) -> Result<(), String> {
    ensure_parent_dir(path)?;
    let mut raw = Vec::with_capacity(image.w * image.h * 4);
    for row in image.rows() {
        raw.extend(row.iter().flatten());
    }
    let out = RgbaImage::from_raw(image.w as u32, image.h as u32, raw)
        .ok_or_else(|| "Failed to create image buffer".to_string())?;
    out.save(path)
        .map_err(|e| format!("Failed to save {}: {e}", path.display()))
}

/// Save an edge mask as a grayscale PNG (edges black, background white).
pub fn save_edge_mask(mask: &EdgeMask, path: &Path) -> Result<(), String> {
    ensure_parent_dir(path)?;
    let mut out = GrayImage::new(mask.w as u32, mask.h as u32);
    for y in 0..mask.h {
        for (x, &edge) in mask.row(y).iter().enumerate() {
            let v = if edge { 0u8 } else { 255u8 };
            out.put_pixel(x as u32, y as u32, Luma([v]));
        }
    }
    out.save(path)
        .map_err(|e| format!("Failed to save {}: {e}", path.display()))
}

/// Save the accumulator as a grayscale image, one row per angle step and one
/// column per radius bin, scaled so the peak cell is white.
pub fn save_hough_space(acc: &Accumulator, path: &Path) -> Result<(), String> {
    ensure_parent_dir(path)?;
    let peak = acc.peak().map_or(0, |p| p.votes);
    let mut out = GrayImage::new(acc.radius_bins() as u32, acc.angle_steps() as u32);
    for t in 0..acc.angle_steps() {
        for r in 0..acc.radius_bins() {
            let v = if peak == 0 {
                0
            } else {
                (f64::from(acc.votes(t, r)) * 255.0 / f64::from(peak)).round() as u8
            };
            out.put_pixel(r as u32, t as u32, Luma([v]));
        }
    }
    out.save(path)
        .map_err(|e| format!("Failed to save {}: {e}", path.display()))
}

/// Serialize a value as pretty JSON to `path`, creating parent directories.
pub fn write_json_file<T: Serialize>(path: &Path, value: &T) -> Result<(), String> {
    ensure_parent_dir(path)?;
    let json = serde_json::to_string_pretty(value)
        .map_err(|e| format!("Failed to serialize JSON for {}: {e}", path.display()))?;
    fs::write(path, json).map_err(|e| format!("Failed to write JSON {}: {e}", path.display()))
}

fn ensure_parent_dir(path: &Path) -> Result<(), String> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .map_err(|e| format!("Failed to create {}: {e}", parent.display()))?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::image::{BLACK, RED};

    fn scratch_dir(name: &str) -> std::path::PathBuf {
        std::env::temp_dir().join(format!("hough-lines-io-{name}-{}", std::process::id()))
    }

    #[test]
    fn png_round_trip_preserves_pixels() {
        let dir = scratch_dir("png");
        let path = dir.join("nested").join("img.png");
        let mut img = ImageRgba8::new(7, 5);
        img.set(3, 2, RED);
        img.set(6, 4, BLACK);
        save_rgba_image(&img, &path).unwrap();
        let loaded = load_rgba_image(&path).unwrap();
        assert_eq!(loaded, img);
        let _ = fs::remove_dir_all(dir);
    }

    #[test]
    fn missing_file_reports_path() {
        let path = scratch_dir("missing").join("nope.png");
        let err = load_rgba_image(&path).unwrap_err();
        assert!(err.contains("nope.png"), "unexpected error: {err}");
    }
}
