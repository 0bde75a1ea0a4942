//! Greed - a falling-artifact arcade game
//!
//! Core modules:
//! - `sim`: Game simulation (points, actors, cast, director loop)
//! - `platform`: Keyboard and video adapters (terminal and headless)
//! - `settings`: Game configuration
//! - `error`: Error types shared across the crate

pub mod error;
pub mod platform;
pub mod settings;
pub mod sim;

pub use error::{CastError, GameError};
pub use settings::GameConfig;

/// Game configuration defaults
pub mod consts {
    /// Window caption
    pub const CAPTION: &str = "Greed";
    /// Target frames per second
    pub const FRAME_RATE: u32 = 12;

    /// Surface dimensions in pixels
    pub const MAX_X: i32 = 900;
    pub const MAX_Y: i32 = 600;

    /// Size of one grid cell in pixels
    pub const CELL_SIZE: i32 = 15;
    pub const FONT_SIZE: u32 = 15;

    /// Number of artifacts in a fresh cast
    pub const DEFAULT_ARTIFACTS: usize = 40;

    /// Fall velocity bounds (pixels per tick)
    pub const MIN_FALL_VELOCITY: i32 = 1;
    pub const MAX_FALL_VELOCITY: i32 = 14;

    /// Reward carried by a gem / rock
    pub const GEM_REWARD: i32 = 1;
    pub const ROCK_REWARD: i32 = -1;

    /// Glyphs
    pub const ROBOT_GLYPH: &str = "\u{a4}"; // ¤
    pub const GEM_GLYPH: &str = "o";
    pub const ROCK_GLYPH: &str = "*";

    /// Cast group names
    pub const BANNERS: &str = "banners";
    pub const ROBOTS: &str = "robots";
    pub const ARTIFACTS: &str = "artifacts";
}
