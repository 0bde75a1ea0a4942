//! Game loop behavior driven through the headless services

use greed::consts::*;
use greed::platform::{HeadlessVideo, KeyboardService, ScriptedKeyboard, VideoService};
use greed::sim::{Actor, ActorId, Cast, Director, Point, populate_cast};
use greed::{GameConfig, GameError};

fn up() -> Point {
    Point::new(0, 1).scale(CELL_SIZE)
}

fn down() -> Point {
    Point::new(0, -1).scale(CELL_SIZE)
}

/// Banner + robot at `robot_at` + one artifact
fn duel(robot_at: Point, artifact_at: Point, fall: i32, reward: i32) -> (Cast, ActorId) {
    let mut cast = Cast::new();
    cast.spawn_into(BANNERS, Actor::new());
    let mut robot = Actor::new();
    robot.set_position(robot_at);
    cast.spawn_into(ROBOTS, robot);

    let mut artifact = Actor::artifact(reward);
    artifact.set_position(artifact_at);
    artifact.set_velocity(Point::new(0, fall));
    let id = cast.spawn_into(ARTIFACTS, artifact);
    (cast, id)
}

fn assert_top_row(position: Point) {
    assert_eq!(position.y(), 0);
    assert_eq!(position.x() % CELL_SIZE, 0);
    assert!((CELL_SIZE..MAX_X).contains(&position.x()), "column {}", position.x());
}

#[test]
fn catch_scores_reward_and_respawns_at_top() {
    let config = GameConfig::default();
    for reward in [GEM_REWARD, ROCK_REWARD] {
        let (mut cast, artifact) = duel(Point::new(300, 585), Point::new(300, 583), 3, reward);
        let mut keyboard = ScriptedKeyboard::idle();
        let mut video = HeadlessVideo::new(&config, 1);
        video.open_window().unwrap();

        let mut director = Director::new(&mut keyboard, &mut video, 42);
        director.tick(&mut cast).unwrap();

        assert_eq!(director.score(), i64::from(reward));
        let caught = cast.actor(artifact);
        assert_top_row(caught.position());
        assert_eq!(caught.velocity(), Point::new(0, 3));
    }
}

#[test]
fn catch_wins_over_recycle_on_bottom_row() {
    let config = GameConfig::default();
    // Lands on y = 590, past the recycle line, but within one fall of the robot
    let (mut cast, _) = duel(Point::new(450, 585), Point::new(450, 580), 10, GEM_REWARD);
    let mut keyboard = ScriptedKeyboard::idle();
    let mut video = HeadlessVideo::new(&config, 1);
    video.open_window().unwrap();

    let mut director = Director::new(&mut keyboard, &mut video, 5);
    director.tick(&mut cast).unwrap();
    assert_eq!(director.score(), 1);
}

#[test]
fn artifact_off_column_recycles_without_scoring() {
    let config = GameConfig::default();
    let (mut cast, artifact) = duel(Point::new(300, 585), Point::new(315, 584), 1, GEM_REWARD);
    let mut keyboard = ScriptedKeyboard::idle();
    let mut video = HeadlessVideo::new(&config, 1);
    video.open_window().unwrap();

    let mut director = Director::new(&mut keyboard, &mut video, 9);
    director.tick(&mut cast).unwrap();

    assert_eq!(director.score(), 0);
    assert_top_row(cast.actor(artifact).position());
}

#[test]
fn artifact_above_recycle_line_keeps_falling() {
    let config = GameConfig::default();
    let (mut cast, artifact) = duel(Point::new(300, 585), Point::new(315, 500), 2, GEM_REWARD);
    let mut keyboard = ScriptedKeyboard::idle();
    let mut video = HeadlessVideo::new(&config, 1);
    video.open_window().unwrap();

    let mut director = Director::new(&mut keyboard, &mut video, 9);
    director.tick(&mut cast).unwrap();
    assert_eq!(cast.actor(artifact).position(), Point::new(315, 502));
}

#[test]
fn respawn_columns_follow_the_video_surface() {
    let config = GameConfig {
        width: 300,
        height: 300,
        ..GameConfig::default()
    };
    let (mut cast, artifact) = duel(Point::new(150, 285), Point::new(150, 284), 1, GEM_REWARD);
    let mut keyboard = ScriptedKeyboard::idle();
    let mut video = HeadlessVideo::new(&config, 200);
    video.open_window().unwrap();

    let mut director = Director::new(&mut keyboard, &mut video, 6);
    for _ in 0..200 {
        cast.actor_mut(artifact).set_position(Point::new(150, 284));
        director.tick(&mut cast).unwrap();
        let x = cast.actor(artifact).position().x();
        assert!((CELL_SIZE..300).contains(&x), "column {}", x);
    }
    assert_eq!(director.score(), 200);
}

#[test]
fn fall_velocity_saturates_at_both_ends() {
    let config = GameConfig::default();
    let mut cast = populate_cast(&config, 3);
    let mut keyboard = ScriptedKeyboard::new(
        std::iter::repeat_n(up(), 20).chain(std::iter::repeat_n(down(), 20)),
    );
    let mut video = HeadlessVideo::new(&config, 40);
    video.open_window().unwrap();

    let mut director = Director::new(&mut keyboard, &mut video, 3);
    let mut highest = 0;
    for _ in 0..20 {
        director.tick(&mut cast).unwrap();
        highest = highest.max(director.fall_velocity().y());
    }
    assert_eq!(highest, MAX_FALL_VELOCITY);
    assert_eq!(director.fall_velocity(), Point::new(0, MAX_FALL_VELOCITY));
    for id in cast.get_actors(ARTIFACTS) {
        assert_eq!(cast.actor(id).velocity(), Point::new(0, MAX_FALL_VELOCITY));
    }

    for _ in 0..20 {
        director.tick(&mut cast).unwrap();
        assert!(director.fall_velocity().y() >= MIN_FALL_VELOCITY);
    }
    assert_eq!(director.fall_velocity(), Point::new(0, MIN_FALL_VELOCITY));
}

#[test]
fn banner_tracks_velocity_and_score() {
    let config = GameConfig::default();
    let mut cast = populate_cast(&config, 11);
    let banner = cast.get_first_actor(BANNERS).unwrap();
    let mut keyboard = ScriptedKeyboard::new([Point::ZERO, up()]);
    let mut video = HeadlessVideo::new(&config, 2);
    video.open_window().unwrap();

    let mut director = Director::new(&mut keyboard, &mut video, 11);
    director.tick(&mut cast).unwrap();
    assert!(cast.actor(banner).text().ends_with("(up/down: speed)"));

    // Banner is written before this tick's catches are scored
    let score_before = director.score();
    director.tick(&mut cast).unwrap();
    let expected = format!("Velocity: 2 Score: {}", score_before);
    assert_eq!(cast.actor(banner).text(), expected);
}

#[test]
fn thousand_idle_ticks_stay_in_bounds() {
    let config = GameConfig::default();
    let mut cast = populate_cast(&config, 2024);
    let mut keyboard = ScriptedKeyboard::idle();
    let mut video = HeadlessVideo::new(&config, 1000);

    let mut director = Director::new(&mut keyboard, &mut video, 2025);
    director.start_game(&mut cast).unwrap();
    assert_eq!(director.ticks(), 1000);
    assert_eq!(director.keyboard().reads, 1000);

    assert_eq!(cast.get_actors(ARTIFACTS).len(), DEFAULT_ARTIFACTS);
    for id in cast.get_actors(ARTIFACTS) {
        let pos = cast.actor(id).position();
        assert!((0..=MAX_X).contains(&pos.x()), "x out of bounds: {:?}", pos);
        assert!((0..=MAX_Y).contains(&pos.y()), "y out of bounds: {:?}", pos);
    }
    let robot = cast.actor(cast.get_first_actor(ROBOTS).unwrap()).position();
    assert!((0..=MAX_X).contains(&robot.x()));
    assert_eq!(robot.y(), MAX_Y - CELL_SIZE);

    assert_eq!(video.frames, 1000);
    assert_eq!((video.opened, video.closed), (1, 1));
}

#[test]
fn robot_wraps_around_the_left_edge() {
    let config = GameConfig::default();
    let mut cast = populate_cast(&config, 8);
    let robot = cast.get_first_actor(ROBOTS).unwrap();
    // 31 steps left from column 30 wraps to column 59
    let mut keyboard = ScriptedKeyboard::new(std::iter::repeat_n(Point::new(-CELL_SIZE, 0), 31));
    let mut video = HeadlessVideo::new(&config, 31);

    let mut director = Director::new(&mut keyboard, &mut video, 8);
    director.start_game(&mut cast).unwrap();
    assert_eq!(cast.actor(robot).position(), Point::new(MAX_X - CELL_SIZE, 585));
}

#[test]
fn drawn_frame_matches_post_update_cast() {
    let config = GameConfig::default();
    let mut cast = populate_cast(&config, 77);
    let mut keyboard = ScriptedKeyboard::new([up(), Point::new(CELL_SIZE, 0), up()]);
    let mut video = HeadlessVideo::new(&config, 10);
    video.open_window().unwrap();

    let mut director = Director::new(&mut keyboard, &mut video, 78);
    for _ in 0..10 {
        director.tick(&mut cast).unwrap();
        let expected: Vec<Actor> = cast.snapshot().into_iter().cloned().collect();
        assert_eq!(director.video().last_frame, expected);
    }
}

#[test]
fn same_seed_same_game() {
    let config = GameConfig::default();
    let run = || {
        let mut cast = populate_cast(&config, 500);
        let mut keyboard = ScriptedKeyboard::new(
            (0..300).map(|i| if i % 7 == 0 { up() } else { Point::new(CELL_SIZE, 0) }),
        );
        let mut video = HeadlessVideo::new(&config, 300);
        let mut director = Director::new(&mut keyboard, &mut video, 501);
        director.start_game(&mut cast).unwrap();
        let score = director.score();
        (score, video.last_frame)
    };
    assert_eq!(run(), run());
}

struct BrokenKeyboard;

impl KeyboardService for BrokenKeyboard {
    fn get_direction(&mut self) -> Result<Point, GameError> {
        Err(GameError::Io(std::io::Error::other("keyboard unplugged")))
    }
}

#[test]
fn adapter_failure_ends_the_game() {
    let config = GameConfig::default();
    let mut cast = populate_cast(&config, 1);
    let mut keyboard = BrokenKeyboard;
    let mut video = HeadlessVideo::new(&config, 10);

    let mut director = Director::new(&mut keyboard, &mut video, 1);
    let err = director.start_game(&mut cast).unwrap_err();
    assert!(matches!(err, GameError::Io(_)));
    assert_eq!(director.ticks(), 0);
}
