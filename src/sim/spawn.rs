//! Initial cast population
//!
//! One banner, one robot centered near the bottom, and a field of gems and
//! rocks scattered over the grid. Seeded so a run can be replayed.

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use super::actor::{Actor, Color};
use super::cast::Cast;
use super::point::Point;
use crate::GameConfig;
use crate::consts::*;

/// Build a fresh cast for `config`
pub fn populate_cast(config: &GameConfig, seed: u64) -> Cast {
    let mut rng = Pcg32::seed_from_u64(seed);
    let mut cast = Cast::new();

    let mut banner = Actor::new();
    banner.set_font_size(config.font_size);
    banner.set_color(Color::WHITE);
    banner.set_position(Point::new(config.cell_size, 0));
    cast.spawn_into(BANNERS, banner);

    let mut robot = Actor::new();
    robot.set_text(ROBOT_GLYPH);
    robot.set_font_size(config.font_size);
    robot.set_color(Color::WHITE);
    robot.set_position(robot_start(config));
    cast.spawn_into(ROBOTS, robot);

    let cols = config.cols().max(2);
    let rows = config.rows().max(2);
    for _ in 0..config.artifact_count {
        let (glyph, reward) = if rng.random_bool(0.5) {
            (GEM_GLYPH, GEM_REWARD)
        } else {
            (ROCK_GLYPH, ROCK_REWARD)
        };

        let cell = Point::new(rng.random_range(1..cols), rng.random_range(1..rows));
        let color = Color::new(rng.random(), rng.random(), rng.random());

        let mut artifact = Actor::artifact(reward);
        artifact.set_text(glyph);
        artifact.set_font_size(config.font_size);
        artifact.set_color(color);
        artifact.set_position(cell.scale(config.cell_size));
        artifact.set_velocity(Point::new(0, MIN_FALL_VELOCITY));
        cast.spawn_into(ARTIFACTS, artifact);
    }

    log::info!(
        "Populated cast: {} artifacts on a {}x{} grid (seed {})",
        config.artifact_count,
        cols,
        rows,
        seed
    );
    cast
}

/// Robot spawn point: horizontal center, one cell above the bottom edge
pub fn robot_start(config: &GameConfig) -> Point {
    Point::new(config.width / 2, config.height - config.cell_size)
}
