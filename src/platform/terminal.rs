//! Terminal keyboard and video services (crossterm)
//!
//! The surface keeps pixel coordinates; each grid cell maps to one terminal
//! character. Frames are composed into a cell buffer and written in one go.

use std::cell::Cell;
use std::io::{self, Stdout, Write};
use std::rc::Rc;
use std::time::{Duration, Instant};

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use crossterm::style::{self, Color as TermColor, Print, SetForegroundColor};
use crossterm::{cursor, execute, queue, terminal};

use super::{KeyboardService, VideoService};
use crate::sim::{Actor, Color, Point};
use crate::{GameConfig, GameError};

const GRID_DOT: char = '.';
const GRID_COLOR: TermColor = TermColor::DarkGrey;

/// Close request shared between keyboard and video
pub type CloseHandle = Rc<Cell<bool>>;

#[derive(Debug, Clone, Copy, PartialEq)]
struct Glyph {
    ch: char,
    color: TermColor,
}

const BLANK: Glyph = Glyph {
    ch: ' ',
    color: TermColor::Reset,
};

fn term_color(color: Color) -> TermColor {
    TermColor::Rgb {
        r: color.r,
        g: color.g,
        b: color.b,
    }
}

/// Crossterm-backed video surface
pub struct TerminalVideo {
    caption: String,
    width: i32,
    height: i32,
    cell_size: i32,
    frame_time: Duration,
    debug: bool,
    out: Stdout,
    open: bool,
    close_requested: CloseHandle,
    /// Grid size in cells
    cols: usize,
    rows: usize,
    buffer: Vec<Glyph>,
    next_frame: Instant,
}

impl TerminalVideo {
    pub fn new(config: &GameConfig) -> Self {
        Self {
            caption: config.caption.clone(),
            width: config.width,
            height: config.height,
            cell_size: config.cell_size,
            frame_time: Duration::from_secs(1) / config.frame_rate.max(1),
            debug: config.debug,
            out: io::stdout(),
            open: false,
            close_requested: Rc::new(Cell::new(false)),
            cols: config.cols().max(0) as usize,
            rows: config.rows().max(0) as usize,
            buffer: Vec::new(),
            next_frame: Instant::now(),
        }
    }

    /// Handle a keyboard uses to request close
    pub fn close_handle(&self) -> CloseHandle {
        self.close_requested.clone()
    }

    /// Empty cell, or a grid dot in debug mode
    fn background(&self) -> Glyph {
        if self.debug {
            Glyph {
                ch: GRID_DOT,
                color: GRID_COLOR,
            }
        } else {
            BLANK
        }
    }

    fn put_text(&mut self, actor: &Actor) {
        let pos = actor.position();
        if pos.x() < 0 || pos.y() < 0 {
            return;
        }
        let col = (pos.x() / self.cell_size) as usize;
        let row = (pos.y() / self.cell_size) as usize;
        if row >= self.rows {
            return;
        }
        let color = term_color(actor.color());
        for (i, ch) in actor.text().chars().enumerate() {
            let c = col + i;
            if c >= self.cols {
                break;
            }
            self.buffer[row * self.cols + c] = Glyph { ch, color };
        }
    }

    fn restore_terminal(&mut self) -> io::Result<()> {
        execute!(
            self.out,
            style::ResetColor,
            cursor::Show,
            terminal::LeaveAlternateScreen
        )?;
        terminal::disable_raw_mode()
    }
}

/// The whole grid must fit on screen
fn check_fits(cols: usize, rows: usize, term_cols: u16, term_rows: u16) -> Result<(), GameError> {
    if usize::from(term_cols) < cols || usize::from(term_rows) < rows {
        return Err(GameError::Render(format!(
            "terminal is {}x{} but the game needs at least {}x{}; \
             enlarge the terminal or lower width/height in the config",
            term_cols, term_rows, cols, rows
        )));
    }
    Ok(())
}

impl VideoService for TerminalVideo {
    fn open_window(&mut self) -> Result<(), GameError> {
        let (term_cols, term_rows) = terminal::size()?;
        check_fits(self.cols, self.rows, term_cols, term_rows)?;

        terminal::enable_raw_mode()?;
        let title = self.caption.clone();
        execute!(
            self.out,
            terminal::EnterAlternateScreen,
            terminal::SetTitle(title),
            cursor::Hide,
            terminal::Clear(terminal::ClearType::All)
        )?;
        self.buffer = vec![BLANK; self.cols * self.rows];
        self.open = true;
        self.close_requested.set(false);
        self.next_frame = Instant::now() + self.frame_time;
        log::info!(
            "Opened '{}' ({}x{} cells, {:?} per frame)",
            self.caption,
            self.cols,
            self.rows,
            self.frame_time
        );
        Ok(())
    }

    fn close_window(&mut self) -> Result<(), GameError> {
        if self.open {
            self.open = false;
            self.restore_terminal()?;
            log::info!("Closed '{}'", self.caption);
        }
        Ok(())
    }

    fn is_window_open(&self) -> bool {
        self.open && !self.close_requested.get()
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
        let background = self.background();
        self.buffer.fill(background);
        Ok(())
    }

    fn draw_actors(&mut self, actors: &[&Actor]) -> Result<(), GameError> {
        for actor in actors {
            self.put_text(actor);
        }
        Ok(())
    }

    fn flush_buffer(&mut self) -> Result<(), GameError> {
        let mut current = TermColor::Reset;
        queue!(self.out, cursor::MoveTo(0, 0), SetForegroundColor(current))?;
        for row in 0..self.rows {
            queue!(self.out, cursor::MoveTo(0, row as u16))?;
            let mut line = String::with_capacity(self.cols);
            for glyph in &self.buffer[row * self.cols..(row + 1) * self.cols] {
                if glyph.color != current {
                    queue!(self.out, Print(&line), SetForegroundColor(glyph.color))?;
                    line.clear();
                    current = glyph.color;
                }
                line.push(glyph.ch);
            }
            queue!(self.out, Print(&line))?;
        }
        self.out.flush()?;

        // Frame pacing
        let now = Instant::now();
        if self.next_frame > now {
            std::thread::sleep(self.next_frame - now);
        }
        self.next_frame = self.next_frame.max(now) + self.frame_time;
        Ok(())
    }
}

impl Drop for TerminalVideo {
    fn drop(&mut self) {
        if self.open {
            let _ = self.restore_terminal();
        }
    }
}

/// Crossterm-backed keyboard
pub struct TerminalKeyboard {
    cell_size: i32,
    close_requested: CloseHandle,
}

impl TerminalKeyboard {
    pub fn new(cell_size: i32, close_requested: CloseHandle) -> Self {
        Self {
            cell_size,
            close_requested,
        }
    }
}

/// Direction for a key, or None for keys we ignore
fn key_direction(code: KeyCode) -> Option<(i32, i32)> {
    match code {
        KeyCode::Left | KeyCode::Char('a') | KeyCode::Char('A') => Some((-1, 0)),
        KeyCode::Right | KeyCode::Char('d') | KeyCode::Char('D') => Some((1, 0)),
        // Up speeds artifacts up, down slows them down
        KeyCode::Up | KeyCode::Char('w') | KeyCode::Char('W') => Some((0, 1)),
        KeyCode::Down | KeyCode::Char('s') | KeyCode::Char('S') => Some((0, -1)),
        _ => None,
    }
}

fn is_quit(key: &KeyEvent) -> bool {
    match key.code {
        KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('Q') => true,
        KeyCode::Char('c') => key.modifiers.contains(KeyModifiers::CONTROL),
        _ => false,
    }
}

impl KeyboardService for TerminalKeyboard {
    fn get_direction(&mut self) -> Result<Point, GameError> {
        let mut dx = 0;
        let mut dy = 0;

        // Drain everything queued since the last frame
        while event::poll(Duration::ZERO)? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Release {
                    continue;
                }
                if is_quit(&key) {
                    self.close_requested.set(true);
                    continue;
                }
                if let Some((kx, ky)) = key_direction(key.code) {
                    if kx != 0 {
                        dx = kx;
                    }
                    if ky != 0 {
                        dy = ky;
                    }
                }
            }
        }

        Ok(Point::new(dx, dy).scale(self.cell_size))
    }
}
