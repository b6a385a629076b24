use crate::edges::{BrightnessModel, DEFAULT_EDGE_THRESHOLD};
use crate::image::{Rgba8, RED};
use crate::transform::HoughParams;
use crate::trig::DEFAULT_ANGLE_STEPS;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

/// Vote threshold used when the config does not set one.
pub const DEFAULT_VOTE_THRESHOLD: u32 = 50;

#[derive(Debug, Deserialize)]
pub struct HoughToolConfig {
    #[serde(rename = "input")]
    pub input: PathBuf,
    #[serde(default)]
    pub hough: HoughConfig,
    #[serde(default)]
    pub draw: DrawConfig,
    pub output: HoughOutputConfig,
}

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct HoughConfig {
    /// Cells need strictly more votes than this to become lines.
    pub threshold: u32,
    pub angle_steps: usize,
    pub edge_threshold: u8,
    pub brightness: BrightnessModel,
    pub parallel: bool,
}

impl Default for HoughConfig {
    fn default() -> Self {
        Self {
            threshold: DEFAULT_VOTE_THRESHOLD,
            angle_steps: DEFAULT_ANGLE_STEPS,
            edge_threshold: DEFAULT_EDGE_THRESHOLD,
            brightness: BrightnessModel::Red,
            parallel: false,
        }
    }
}

impl HoughConfig {
    pub fn params(&self) -> HoughParams {
        HoughParams {
            angle_steps: self.angle_steps.max(1),
            edge_threshold: self.edge_threshold,
            parallel: self.parallel,
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct DrawConfig {
    pub color: Rgba8,
}

impl Default for DrawConfig {
    fn default() -> Self {
        Self { color: RED }
    }
}

#[derive(Debug, Deserialize)]
pub struct HoughOutputConfig {
    pub image: PathBuf,
    #[serde(rename = "lines_json")]
    pub lines_json: PathBuf,
    #[serde(default)]
    pub edges_image: Option<PathBuf>,
    #[serde(default)]
    pub hough_space_image: Option<PathBuf>,
}

pub fn load_config(path: &Path) -> Result<HoughToolConfig, String> {
    let data = fs::read_to_string(path)
        .map_err(|e| format!("Failed to read config {}: {e}", path.display()))?;
    parse_config(&data).map_err(|e| format!("Failed to parse config {}: {e}", path.display()))
}

pub fn parse_config(data: &str) -> Result<HoughToolConfig, serde_json::Error> {
    serde_json::from_str(data)
}
