//! Game simulation module
//!
//! All gameplay logic lives here:
//! - Seeded RNG only (population and respawn columns)
//! - Stable iteration order (groups by name, members by insertion)
//! - No terminal or platform dependencies beyond the service traits

pub mod actor;
pub mod cast;
pub mod collision;
pub mod director;
pub mod point;
pub mod spawn;

pub use actor::{Actor, ActorKind, Color};
pub use cast::{ActorId, Cast};
pub use collision::{is_caught, reached_bottom};
pub use director::{Director, banner_text, next_fall_speed};
pub use point::Point;
pub use spawn::{populate_cast, robot_start};
