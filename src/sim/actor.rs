//! Drawable game entities
//!
//! Every on-screen thing is an [`Actor`]. Artifacts are actors whose
//! [`ActorKind`] carries a reward; there is no separate artifact type.

use serde::{Deserialize, Serialize};

use super::point::Point;
use crate::consts::FONT_SIZE;

/// RGB color, channels 0-255
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const WHITE: Self = Self::new(255, 255, 255);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::WHITE
    }
}

/// What an actor is, beyond how it looks
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ActorKind {
    /// Banner, robot: no gameplay payload
    #[default]
    Plain,
    /// Falling artifact worth `reward` points when caught
    Artifact(i32),
}

/// A drawable, positioned, moving game object
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Actor {
    text: String,
    font_size: u32,
    color: Color,
    position: Point,
    velocity: Point,
    kind: ActorKind,
}

impl Default for Actor {
    fn default() -> Self {
        Self {
            text: String::new(),
            font_size: FONT_SIZE,
            color: Color::WHITE,
            position: Point::ZERO,
            velocity: Point::ZERO,
            kind: ActorKind::Plain,
        }
    }
}

impl Actor {
    pub fn new() -> Self {
        Self::default()
    }

    /// An artifact worth `reward` points
    pub fn artifact(reward: i32) -> Self {
        Self {
            kind: ActorKind::Artifact(reward),
            ..Self::default()
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }

    pub fn font_size(&self) -> u32 {
        self.font_size
    }

    pub fn set_font_size(&mut self, font_size: u32) {
        self.font_size = font_size;
    }

    pub fn color(&self) -> Color {
        self.color
    }

    pub fn set_color(&mut self, color: Color) {
        self.color = color;
    }

    pub fn position(&self) -> Point {
        self.position
    }

    pub fn set_position(&mut self, position: Point) {
        self.position = position;
    }

    pub fn velocity(&self) -> Point {
        self.velocity
    }

    pub fn set_velocity(&mut self, velocity: Point) {
        self.velocity = velocity;
    }

    pub fn kind(&self) -> ActorKind {
        self.kind
    }

    pub fn is_artifact(&self) -> bool {
        matches!(self.kind, ActorKind::Artifact(_))
    }

    /// Turn this actor into an artifact worth `reward`
    pub fn set_reward(&mut self, reward: i32) {
        self.kind = ActorKind::Artifact(reward);
    }

    /// Reward if this is an artifact
    pub fn value(&self) -> Option<i32> {
        match self.kind {
            ActorKind::Artifact(reward) => Some(reward),
            ActorKind::Plain => None,
        }
    }

    /// Reward as signed-integer text ("1", "-1"); empty for plain actors
    pub fn message(&self) -> String {
        self.value().map(|v| v.to_string()).unwrap_or_default()
    }

    /// Advance one tick: `position += velocity`, wrapping x into `[0, bound_x)`.
    ///
    /// The y axis is not wrapped; the director recycles artifacts that reach
    /// the bottom of the surface.
    pub fn move_next(&mut self, bound_x: i32, _bound_y: i32) {
        let next = self.position + self.velocity;
        let x = if bound_x > 0 {
            next.x().rem_euclid(bound_x)
        } else {
            next.x()
        };
        self.position = next.with_x(x);
    }
}
