//! Deterministic simulation module
//!
//! All ball physics and shot sequencing lives here. This module must be pure
//! and deterministic:
//! - Fixed timestep only
//! - Stable iteration order (by registry index)
//! - No rendering or platform dependencies
//!
//! Positions are 2D `(x, z)` on the table plane, stored in a `Vec2` as
//! `(x, y) = (x, z)`.

pub mod collision;
pub mod rack;
pub mod state;
pub mod step;
pub mod table;
pub mod tick;

pub use collision::{Contact, ball_pair_contact, bounce_axis, resolve_pair};
pub use rack::rack_positions;
pub use state::{Ball, BallRegistry, BallSnapshot, Cue, SimEvent, SimPhase, SimState};
pub use step::step;
pub use table::PlayArea;
pub use tick::{TickInput, tick};
