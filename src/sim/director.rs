//! The game loop
//!
//! Each tick runs three phases in order against the cast:
//! 1. Input: keyboard direction steers the robot and nudges the fall speed
//! 2. Update: banner text, robot move, artifact moves, catches and recycles
//! 3. Output: draw the whole cast as it stands after the update
//!
//! Single-threaded; the only wait is the video service's frame pacing.

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use super::cast::{ActorId, Cast};
use super::collision::{is_caught, reached_bottom};
use super::point::Point;
use crate::consts::*;
use crate::platform::{KeyboardService, VideoService};
use crate::GameError;

/// Next fall speed after a vertical intent `dy`, or None if the change is
/// rejected. Speeding up is allowed from 0..=13, slowing down from 2..=14.
pub fn next_fall_speed(current: i32, dy: i32) -> Option<i32> {
    let step = dy.signum();
    let accepted = match step {
        1 => (0..MAX_FALL_VELOCITY).contains(&current),
        -1 => current > MIN_FALL_VELOCITY && current <= MAX_FALL_VELOCITY,
        _ => false,
    };
    accepted.then_some(current + step)
}

/// Status line shown in the banner. Status comes first so a narrow surface
/// clips the hint, never the score.
pub fn banner_text(velocity: i32, score: i64) -> String {
    if velocity == MIN_FALL_VELOCITY {
        format!("Velocity: {} Score: {}  (up/down: speed)", velocity, score)
    } else {
        format!("Velocity: {} Score: {}", velocity, score)
    }
}

/// Directs the sequence of play
pub struct Director<'a, K: KeyboardService + ?Sized, V: VideoService + ?Sized> {
    keyboard: &'a mut K,
    video: &'a mut V,
    cell_size: i32,
    cols: i32,
    rng: Pcg32,
    score: i64,
    fall_velocity: Point,
    ticks: u64,
}

impl<'a, K: KeyboardService + ?Sized, V: VideoService + ?Sized> Director<'a, K, V> {
    /// Grid geometry is read from `video` so respawn columns match its bounds
    pub fn new(keyboard: &'a mut K, video: &'a mut V, seed: u64) -> Self {
        let cell_size = video.get_cell_size().max(1);
        let cols = video.get_width() / cell_size;
        Self {
            keyboard,
            video,
            cell_size,
            cols,
            rng: Pcg32::seed_from_u64(seed),
            score: 0,
            fall_velocity: Point::new(0, MIN_FALL_VELOCITY),
            ticks: 0,
        }
    }

    pub fn score(&self) -> i64 {
        self.score
    }

    /// Shared artifact velocity; x is always 0
    pub fn fall_velocity(&self) -> Point {
        self.fall_velocity
    }

    /// Ticks run so far
    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    pub fn video(&self) -> &V {
        &*self.video
    }

    pub fn keyboard(&self) -> &K {
        &*self.keyboard
    }

    /// Open the surface, tick until it asks to close, then close it
    pub fn start_game(&mut self, cast: &mut Cast) -> Result<(), GameError> {
        self.video.open_window()?;
        self.broadcast_fall_velocity(cast);
        while self.video.is_window_open() {
            self.tick(cast)?;
        }
        self.video.close_window()?;
        log::info!(
            "Game over after {} ticks: score {}, velocity {}",
            self.ticks,
            self.score,
            self.fall_velocity.y()
        );
        Ok(())
    }

    /// One Input -> Update -> Output cycle
    pub fn tick(&mut self, cast: &mut Cast) -> Result<(), GameError> {
        self.get_inputs(cast)?;
        self.do_updates(cast)?;
        self.do_outputs(cast)?;
        self.ticks += 1;
        Ok(())
    }

    fn get_inputs(&mut self, cast: &mut Cast) -> Result<(), GameError> {
        let direction = self.keyboard.get_direction()?;
        self.apply_input(cast, direction)
    }

    /// Apply one keyboard sample: x steers the robot, y nudges the fall speed
    pub fn apply_input(&mut self, cast: &mut Cast, direction: Point) -> Result<(), GameError> {
        let robot = first(cast, ROBOTS)?;

        if let Some(speed) = next_fall_speed(self.fall_velocity.y(), direction.y()) {
            self.fall_velocity = Point::new(0, speed);
            self.broadcast_fall_velocity(cast);
            log::debug!("Fall velocity now {}", speed);
        }

        // Not accumulated: the robot moves only while a key is held
        cast.actor_mut(robot).set_velocity(Point::new(direction.x(), 0));
        Ok(())
    }

    fn broadcast_fall_velocity(&self, cast: &mut Cast) {
        for id in cast.get_actors(ARTIFACTS) {
            cast.actor_mut(id).set_velocity(self.fall_velocity);
        }
    }

    fn do_updates(&mut self, cast: &mut Cast) -> Result<(), GameError> {
        let banner = first(cast, BANNERS)?;
        let robot = first(cast, ROBOTS)?;

        cast.actor_mut(banner)
            .set_text(banner_text(self.fall_velocity.y(), self.score));

        let max_x = self.video.get_width();
        let max_y = self.video.get_height();
        cast.actor_mut(robot).move_next(max_x, max_y);
        let robot_pos = cast.actor(robot).position();

        for id in cast.get_actors(ARTIFACTS) {
            let artifact = cast.actor_mut(id);
            artifact.move_next(max_x, max_y);

            // Catch first so an artifact caught on the bottom row still scores
            if is_caught(robot_pos, artifact) {
                let reward = artifact.value().unwrap_or_default();
                self.score += i64::from(reward);
                log::debug!("Caught {:+} at {:?}, score {}", reward, robot_pos, self.score);
                let respawn = self.respawn_position();
                cast.actor_mut(id).set_position(respawn);
            } else if reached_bottom(artifact, max_y, self.cell_size) {
                log::trace!("Recycled artifact {}", id.index());
                let respawn = self.respawn_position();
                cast.actor_mut(id).set_position(respawn);
            }
        }
        Ok(())
    }

    fn do_outputs(&mut self, cast: &Cast) -> Result<(), GameError> {
        self.video.clear_buffer()?;
        self.video.draw_actors(&cast.snapshot())?;
        self.video.flush_buffer()
    }

    /// Random column at the top row, in pixels
    fn respawn_position(&mut self) -> Point {
        let col = self.rng.random_range(1..self.cols.max(2));
        Point::new(col, 0).scale(self.cell_size)
    }
}

fn first(cast: &Cast, group: &'static str) -> Result<ActorId, GameError> {
    cast.get_first_actor(group).ok_or(GameError::MissingActor(group))
}
