//! Cue Break - ball physics for a 3D billiards break shot
//!
//! Core modules:
//! - `sim`: Deterministic simulation (rack, stepping, collisions, shot lifecycle)
//! - `render`: Render adapter mapping ball state onto visual instances
//! - `settings`: Data-driven tuning loaded from JSON
//!
//! The 3D scene itself (table model, lights, camera, render loop) belongs to
//! the host. The host calls [`sim::tick`] once per displayed frame and reads
//! positions back through [`render::RenderAdapter`].

pub mod render;
pub mod settings;
pub mod sim;

#[cfg(target_arch = "wasm32")]
pub mod web;

pub use settings::{PhysicsTuning, RackLayout, Settings, ShotTuning};

use glam::Vec2;

/// Simulation constants (defaults for [`Settings`])
pub mod consts {
    /// Fixed simulation timestep (one tick per displayed frame)
    pub const SIM_DT: f32 = 1.0 / 60.0;

    /// Ball radius shared by every ball
    pub const BALL_RADIUS: f32 = 0.12;
    /// Number of object balls in the rack
    pub const RACK_SIZE: usize = 15;
    /// Object balls plus the cue ball
    pub const BALL_COUNT: usize = RACK_SIZE + 1;
    /// Centre spacing between neighbouring rack balls, in radii
    pub const RACK_SPACING_FACTOR: f32 = 2.05;
    /// Apex ball position along the strike axis
    pub const RACK_APEX_Z: f32 = -2.2;
    /// Cue ball starting spot along the strike axis
    pub const CUE_BALL_START_Z: f32 = 2.2;

    /// Per-tick multiplicative velocity decay (rolling resistance)
    pub const FRICTION: f32 = 0.992;
    /// Fraction of normal velocity kept through a wall or ball contact
    pub const RESTITUTION: f32 = 0.98;
    /// Cushion inset applied to the play-area half extents
    pub const WALL_INSET: f32 = 0.95;
    /// Below this speed a ball gets extra damping to come to rest
    pub const SLOW_SPEED: f32 = 0.01;
    pub const SLOW_DAMPING: f32 = 0.9;
    /// Every ball at or below this speed means the table has settled
    pub const REST_SPEED: f32 = 0.02;

    /// Wait before the cue starts moving (seconds)
    pub const PRE_SHOT_DELAY: f32 = 1.2;
    pub const CUE_START_Z: f32 = 2.7;
    /// Cue depth at which the cue ball is struck
    pub const CUE_END_Z: f32 = 2.32;
    /// Cue advance per tick
    pub const CUE_SPEED: f32 = 0.035;
    /// Velocity given to the cue ball on the strike
    pub const STRIKE_IMPULSE: [f32; 2] = [0.0, -1.8];

    /// Cosmetic spin added per tick per unit of (vx + vz)
    pub const SPIN_HINT_FACTOR: f32 = 0.05;

    /// Fallback table when no table model is available
    pub const FALLBACK_TABLE_LENGTH: f32 = 10.0;
    pub const FALLBACK_TABLE_WIDTH: f32 = 5.0;
    pub const FALLBACK_SURFACE_Y: f32 = 0.801;
}

/// Kinetic energy of a unit-mass body moving at `vel`
#[inline]
pub fn kinetic_energy(vel: Vec2) -> f32 {
    0.5 * vel.length_squared()
}
