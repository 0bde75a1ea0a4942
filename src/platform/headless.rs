//! In-memory keyboard and video services
//!
//! `HeadlessVideo` runs for a fixed number of frames and keeps a copy of the
//! last frame it was asked to draw. `ScriptedKeyboard` replays directions.

use std::collections::VecDeque;

use super::{KeyboardService, VideoService};
use crate::sim::{Actor, Point};
use crate::{GameConfig, GameError};

/// Replays a fixed list of directions, then reports no key held
#[derive(Debug, Clone, Default)]
pub struct ScriptedKeyboard {
    script: VecDeque<Point>,
    /// Samples handed out so far
    pub reads: u64,
}

impl ScriptedKeyboard {
    pub fn new(script: impl IntoIterator<Item = Point>) -> Self {
        Self {
            script: script.into_iter().collect(),
            reads: 0,
        }
    }

    /// Keyboard with no keys ever pressed
    pub fn idle() -> Self {
        Self::default()
    }
}

impl KeyboardService for ScriptedKeyboard {
    fn get_direction(&mut self) -> Result<Point, GameError> {
        self.reads += 1;
        Ok(self.script.pop_front().unwrap_or(Point::ZERO))
    }
}

/// Frame-budgeted video surface with no output
#[derive(Debug, Clone)]
pub struct HeadlessVideo {
    width: i32,
    height: i32,
    cell_size: i32,
    max_frames: u64,
    open: bool,
    in_frame: bool,
    pending: Vec<Actor>,
    /// Frames flushed so far
    pub frames: u64,
    /// Actors drawn in the most recently flushed frame
    pub last_frame: Vec<Actor>,
    /// Times the window was opened / closed
    pub opened: u32,
    pub closed: u32,
}

impl HeadlessVideo {
    /// Surface that reports a close request after `max_frames` frames
    pub fn new(config: &GameConfig, max_frames: u64) -> Self {
        Self {
            width: config.width,
            height: config.height,
            cell_size: config.cell_size,
            max_frames,
            open: false,
            in_frame: false,
            pending: Vec::new(),
            frames: 0,
            last_frame: Vec::new(),
            opened: 0,
            closed: 0,
        }
    }
}

impl VideoService for HeadlessVideo {
    fn open_window(&mut self) -> Result<(), GameError> {
        self.open = true;
        self.opened += 1;
        log::info!(
            "Headless surface {}x{} open for {} frames",
            self.width,
            self.height,
            self.max_frames
        );
        Ok(())
    }

    fn close_window(&mut self) -> Result<(), GameError> {
        self.open = false;
        self.closed += 1;
        log::info!("Headless surface closed after {} frames", self.frames);
        Ok(())
    }

    fn is_window_open(&self) -> bool {
        self.open && self.frames < self.max_frames
    }

    fn get_width(&self) -> i32 {
        self.width
    }

    fn get_height(&self) -> i32 {
        self.height
    }

    fn get_cell_size(&self) -> i32 {
        self.cell_size
    }

    fn clear_buffer(&mut self) -> Result<(), GameError> {
        if !self.open {
            return Err(GameError::Render("clear_buffer on a closed surface".into()));
        }
        self.pending.clear();
        self.in_frame = true;
        Ok(())
    }

    fn draw_actors(&mut self, actors: &[&Actor]) -> Result<(), GameError> {
        if !self.in_frame {
            return Err(GameError::Render("draw_actors outside a frame".into()));
        }
        self.pending.extend(actors.iter().map(|&a| a.clone()));
        Ok(())
    }

    fn flush_buffer(&mut self) -> Result<(), GameError> {
        if !self.in_frame {
            return Err(GameError::Render("flush_buffer without clear_buffer".into()));
        }
        self.in_frame = false;
        self.last_frame = std::mem::take(&mut self.pending);
        self.frames += 1;
        Ok(())
    }
}
