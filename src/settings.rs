//! Simulation tuning and preferences
//!
//! Every field has a default matching [`crate::consts`], so a JSON document
//! only needs to name the values it overrides.

use std::path::Path;

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Per-tick physics coefficients
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PhysicsTuning {
    /// Velocity multiplier applied every tick
    pub friction: f32,
    /// Normal-velocity fraction kept through wall and ball contacts
    pub restitution: f32,
    /// Cushion inset on the play-area half extents
    pub wall_inset: f32,
    /// Speed below which `slow_damping` is applied on top of friction
    pub slow_speed: f32,
    pub slow_damping: f32,
    /// Every ball at or below this speed ends the roll
    pub rest_speed: f32,
}

impl Default for PhysicsTuning {
    fn default() -> Self {
        Self {
            friction: FRICTION,
            restitution: RESTITUTION,
            wall_inset: WALL_INSET,
            slow_speed: SLOW_SPEED,
            slow_damping: SLOW_DAMPING,
            rest_speed: REST_SPEED,
        }
    }
}

/// Cue approach and strike
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShotTuning {
    /// Seconds spent idle before the cue starts moving
    pub pre_shot_delay: f32,
    pub cue_start_z: f32,
    pub cue_end_z: f32,
    /// Cue advance per tick
    pub cue_speed: f32,
    /// Velocity assigned to the cue ball on the strike
    pub impulse: Vec2,
}

impl Default for ShotTuning {
    fn default() -> Self {
        Self {
            pre_shot_delay: PRE_SHOT_DELAY,
            cue_start_z: CUE_START_Z,
            cue_end_z: CUE_END_Z,
            cue_speed: CUE_SPEED,
            impulse: Vec2::from_array(STRIKE_IMPULSE),
        }
    }
}

/// Where the balls start
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RackLayout {
    pub ball_radius: f32,
    /// Neighbour spacing in radii
    pub spacing_factor: f32,
    /// Apex ball z; rows widen away from the cue ball
    pub apex_z: f32,
    pub cue_ball_z: f32,
}

impl Default for RackLayout {
    fn default() -> Self {
        Self {
            ball_radius: BALL_RADIUS,
            spacing_factor: RACK_SPACING_FACTOR,
            apex_z: RACK_APEX_Z,
            cue_ball_z: CUE_BALL_START_Z,
        }
    }
}

impl RackLayout {
    /// Centre distance between touching-but-not-overlapping neighbours
    #[inline]
    pub fn spacing(&self) -> f32 {
        self.ball_radius * self.spacing_factor
    }
}

/// Complete simulation settings
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub physics: PhysicsTuning,
    pub shot: ShotTuning,
    pub rack: RackLayout,
}

impl Settings {
    /// Parse settings from JSON, filling unnamed fields with defaults
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    /// Load settings from a JSON file, falling back to defaults on any failure
    pub fn load_or_default(path: &Path) -> Self {
        let json = match std::fs::read_to_string(path) {
            Ok(json) => json,
            Err(e) => {
                log::warn!("Could not read settings {}: {}", path.display(), e);
                log::info!("Using default settings");
                return Self::default();
            }
        };

        match Self::from_json(&json) {
            Ok(settings) => {
                log::info!("Loaded settings from {}", path.display());
                settings.sanitized()
            }
            Err(e) => {
                log::warn!("Invalid settings {}: {}", path.display(), e);
                log::info!("Using default settings");
                Self::default()
            }
        }
    }

    /// Clamp coefficients so no configuration can add energy or break the rack
    pub fn sanitized(mut self) -> Self {
        let defaults = Self::default();
        let physics = &mut self.physics;

        physics.friction = clamp_unit("physics.friction", physics.friction, FRICTION);
        physics.restitution = clamp_unit("physics.restitution", physics.restitution, RESTITUTION);
        physics.wall_inset = clamp_unit("physics.wall_inset", physics.wall_inset, WALL_INSET);
        physics.slow_damping =
            clamp_unit("physics.slow_damping", physics.slow_damping, SLOW_DAMPING);
        physics.slow_speed = non_negative("physics.slow_speed", physics.slow_speed, SLOW_SPEED);
        physics.rest_speed = non_negative("physics.rest_speed", physics.rest_speed, REST_SPEED);

        let shot = &mut self.shot;
        shot.pre_shot_delay =
            non_negative("shot.pre_shot_delay", shot.pre_shot_delay, PRE_SHOT_DELAY);
        shot.cue_speed = positive("shot.cue_speed", shot.cue_speed, CUE_SPEED);
        if !shot.impulse.is_finite() {
            log::warn!("shot.impulse {:?} is not finite, using default", shot.impulse);
            shot.impulse = defaults.shot.impulse;
        }

        let rack = &mut self.rack;
        if !(rack.ball_radius.is_finite() && rack.ball_radius > 0.0) {
            log::warn!("rack.ball_radius {} must be positive, using default", rack.ball_radius);
            rack.ball_radius = BALL_RADIUS;
        }
        if !(rack.spacing_factor.is_finite() && rack.spacing_factor >= 2.0) {
            log::warn!(
                "rack.spacing_factor {} would overlap the rack, using default",
                rack.spacing_factor
            );
            rack.spacing_factor = RACK_SPACING_FACTOR;
        }

        self
    }
}

fn clamp_unit(name: &str, value: f32, default: f32) -> f32 {
    if !value.is_finite() {
        log::warn!("{} is not finite, using default {}", name, default);
        return default;
    }
    let clamped = value.clamp(0.0, 1.0);
    if clamped != value {
        log::warn!("{} = {} clamped to {}", name, value, clamped);
    }
    clamped
}

fn positive(name: &str, value: f32, default: f32) -> f32 {
    if !(value.is_finite() && value > 0.0) {
        log::warn!("{} = {} must be positive, using default {}", name, value, default);
        return default;
    }
    value
}

fn non_negative(name: &str, value: f32, default: f32) -> f32 {
    if !value.is_finite() {
        log::warn!("{} is not finite, using default {}", name, default);
        return default;
    }
    if value < 0.0 {
        log::warn!("{} = {} clamped to 0", name, value);
        return 0.0;
    }
    value
}
