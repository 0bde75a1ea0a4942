//! Robot/artifact catch test
//!
//! Artifacts move several pixels per tick, so an exact position match would
//! let fast ones fall through the robot's row. A catch instead requires the
//! same column and the artifact to be at most one tick's fall below the robot.

use super::actor::Actor;
use super::point::Point;

/// Whether the robot at `robot` catches `artifact` this tick
#[inline]
pub fn is_caught(robot: Point, artifact: &Actor) -> bool {
    let pos = artifact.position();
    robot.x() == pos.x() && robot.y() <= pos.y() && pos.y() - robot.y() <= artifact.velocity().y()
}

/// Whether an artifact has reached the bottom strip of a surface `height` tall
#[inline]
pub fn reached_bottom(artifact: &Actor, height: i32, margin: i32) -> bool {
    artifact.position().y() >= height - margin
}

#[cfg(test)]
mod tests {
    use super::*;

    fn falling(x: i32, y: i32, vy: i32) -> Actor {
        let mut artifact = Actor::artifact(1);
        artifact.set_position(Point::new(x, y));
        artifact.set_velocity(Point::new(0, vy));
        artifact
    }

    #[test]
    fn test_catch_within_one_tick_of_fall() {
        let robot = Point::new(300, 585);
        assert!(is_caught(robot, &falling(300, 585, 1)));
        assert!(is_caught(robot, &falling(300, 588, 3)));
        assert!(!is_caught(robot, &falling(300, 589, 3)));
    }

    #[test]
    fn test_no_catch_above_robot() {
        assert!(!is_caught(Point::new(300, 585), &falling(300, 584, 14)));
    }

    #[test]
    fn test_no_catch_in_other_column() {
        assert!(!is_caught(Point::new(300, 585), &falling(315, 586, 3)));
    }

    #[test]
    fn test_reached_bottom() {
        assert!(!reached_bottom(&falling(0, 584, 1), 600, 15));
        assert!(reached_bottom(&falling(0, 585, 1), 600, 15));
        assert!(reached_bottom(&falling(0, 598, 1), 600, 15));
    }
}
