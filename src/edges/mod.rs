//! Edge classification: which pixels cast Hough votes.
//!
//! - `Brightness` collapses an RGBA pixel to a single 8-bit value. The red
//!   channel is the default proxy; luma and channel-average models are
//!   provided as drop-in alternatives.
//! - `EdgeClassifier` applies a fixed global threshold to that value and can
//!   produce a dense `EdgeMask` for the whole image.

pub mod brightness;
pub mod classifier;

pub use brightness::{Average, Brightness, BrightnessModel, Luminance, RedChannel};
pub use classifier::{EdgeClassifier, EdgeMask, DEFAULT_EDGE_THRESHOLD};
