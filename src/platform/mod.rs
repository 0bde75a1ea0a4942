//! Platform abstraction layer
//!
//! The director talks to the outside world through two services:
//! - [`KeyboardService`]: one directional sample per tick
//! - [`VideoService`]: surface lifecycle, dimensions and frame drawing
//!
//! `terminal` implements both on crossterm; `headless` implements them in
//! memory for tests and scripted runs.

pub mod headless;
pub mod terminal;

pub use headless::{HeadlessVideo, ScriptedKeyboard};
pub use terminal::{TerminalKeyboard, TerminalVideo};

use crate::GameError;
use crate::sim::{Actor, Point};

/// Translates key state into a direction
pub trait KeyboardService {
    /// Current direction, already scaled to pixels (components are
    /// `-cell`, `0` or `+cell`). Must not block.
    fn get_direction(&mut self) -> Result<Point, GameError>;
}

/// Owns the display surface
pub trait VideoService {
    fn open_window(&mut self) -> Result<(), GameError>;
    fn close_window(&mut self) -> Result<(), GameError>;
    /// False once the user (or the surface) asked to close
    fn is_window_open(&self) -> bool;
    fn get_width(&self) -> i32;
    fn get_height(&self) -> i32;
    fn get_cell_size(&self) -> i32;
    /// Begin a frame
    fn clear_buffer(&mut self) -> Result<(), GameError>;
    fn draw_actors(&mut self, actors: &[&Actor]) -> Result<(), GameError>;
    /// Present the frame and wait out the rest of the frame time
    fn flush_buffer(&mut self) -> Result<(), GameError>;
}
