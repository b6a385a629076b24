//! Brightness models: how a color pixel collapses to one 8-bit value.
use crate::image::Rgba8;
use serde::{Deserialize, Serialize};

/// Maps a pixel to the single brightness value the edge threshold is tested
/// against.
pub trait Brightness {
    fn brightness(&self, px: Rgba8) -> u8;
}

/// Red channel as brightness proxy.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RedChannel;

impl Brightness for RedChannel {
    #[inline]
    fn brightness(&self, px: Rgba8) -> u8 {
        px[0]
    }
}

/// Rec.601 luma with integer weights, rounded to nearest.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Luminance;

impl Brightness for Luminance {
    #[inline]
    fn brightness(&self, px: Rgba8) -> u8 {
        let [r, g, b, _] = px.map(u32::from);
        ((299 * r + 587 * g + 114 * b + 500) / 1000) as u8
    }
}

/// Unweighted mean of the three color channels.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Average;

impl Brightness for Average {
    #[inline]
    fn brightness(&self, px: Rgba8) -> u8 {
        let [r, g, b, _] = px.map(u32::from);
        ((r + g + b) / 3) as u8
    }
}

/// Runtime-selectable model, e.g. from a JSON config.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BrightnessModel {
    #[default]
    Red,
    Luminance,
    Average,
}

impl Brightness for BrightnessModel {
    #[inline]
    fn brightness(&self, px: Rgba8) -> u8 {
        match self {
            BrightnessModel::Red => RedChannel.brightness(px),
            BrightnessModel::Luminance => Luminance.brightness(px),
            BrightnessModel::Average => Average.brightness(px),
        }
    }
}
