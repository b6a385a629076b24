//! JSON configuration for the demo tools.
pub mod hough_demo;

pub use hough_demo::{load_config, HoughToolConfig, DEFAULT_VOTE_THRESHOLD};
