//! Game configuration
//!
//! One struct carries every tunable the launcher and the director share.
//! Loaded from an optional JSON file; missing fields fall back to defaults.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::GameError;
use crate::consts::*;

/// Game configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Window caption
    pub caption: String,
    /// Surface width in pixels
    pub width: i32,
    /// Surface height in pixels
    pub height: i32,
    /// Grid cell size in pixels
    pub cell_size: i32,
    /// Glyph size for every actor
    pub font_size: u32,
    /// Target frames per second (paced by the video service)
    pub frame_rate: u32,
    /// Number of artifacts in a fresh cast
    pub artifact_count: usize,
    /// Draw the cell grid behind the actors
    pub debug: bool,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            caption: CAPTION.to_string(),
            width: MAX_X,
            height: MAX_Y,
            cell_size: CELL_SIZE,
            font_size: FONT_SIZE,
            frame_rate: FRAME_RATE,
            artifact_count: DEFAULT_ARTIFACTS,
            debug: false,
        }
    }
}

impl GameConfig {
    /// Columns in the grid
    pub fn cols(&self) -> i32 {
        self.width / self.cell_size
    }

    /// Rows in the grid
    pub fn rows(&self) -> i32 {
        self.height / self.cell_size
    }

    /// Parse and validate a JSON config
    pub fn from_json(json: &str) -> Result<Self, GameError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Load config from a JSON file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, GameError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        let config = Self::from_json(&json)?;
        log::info!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Reject configs the director cannot run with
    pub fn validate(&self) -> Result<(), GameError> {
        if self.cell_size <= 0 {
            return Err(GameError::InvalidConfig(format!(
                "cell_size must be positive, got {}",
                self.cell_size
            )));
        }
        if self.width <= 0 || self.height <= 0 {
            return Err(GameError::InvalidConfig(format!(
                "surface must be non-empty, got {}x{}",
                self.width, self.height
            )));
        }
        // Respawn columns are drawn from [1, cols - 1]
        if self.cols() < 2 || self.rows() < 2 {
            return Err(GameError::InvalidConfig(format!(
                "surface {}x{} holds fewer than 2x2 cells of size {}",
                self.width, self.height, self.cell_size
            )));
        }
        if self.frame_rate == 0 {
            return Err(GameError::InvalidConfig("frame_rate must be non-zero".into()));
        }
        Ok(())
    }
}
