//! Simulation state and core types
//!
//! Balls are plain data. Visual objects are linked by registry index in the
//! render adapter, never stored here.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::rack::rack_positions;
use super::table::PlayArea;
use crate::consts::*;
use crate::kinetic_energy;
use crate::settings::{RackLayout, Settings};

/// Shot lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SimPhase {
    /// Waiting out the pre-shot delay or a host trigger
    Idle,
    /// Cue sliding toward the cue ball
    CueApproaching,
    /// Physics stepping every tick
    Rolling,
    /// Every ball at rest. Terminal.
    Settled,
}

/// A ball on the table
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Ball {
    /// Rack number (0 for the cue ball)
    pub number: u8,
    pub pos: Vec2,
    pub vel: Vec2,
    pub radius: f32,
    pub is_cue: bool,
}

impl Ball {
    pub fn new(number: u8, pos: Vec2, radius: f32) -> Self {
        Self {
            number,
            pos,
            vel: Vec2::ZERO,
            radius,
            is_cue: number == 0,
        }
    }

    #[inline]
    pub fn speed(&self) -> f32 {
        self.vel.length()
    }

    #[inline]
    pub fn kinetic_energy(&self) -> f32 {
        kinetic_energy(self.vel)
    }
}

/// Fixed set of balls created at rack time: 15 object balls then the cue ball
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BallRegistry {
    balls: [Ball; BALL_COUNT],
}

impl BallRegistry {
    /// Index of the cue ball (always last)
    pub const CUE_INDEX: usize = RACK_SIZE;

    /// Rack the object balls and spot the cue ball on the centre line
    pub fn rack(layout: &RackLayout) -> Self {
        let positions = rack_positions(layout);
        let balls = std::array::from_fn(|i| {
            if i == Self::CUE_INDEX {
                Ball::new(0, Vec2::new(0.0, layout.cue_ball_z), layout.ball_radius)
            } else {
                Ball::new(i as u8 + 1, positions[i], layout.ball_radius)
            }
        });
        Self { balls }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.balls.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.balls.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Ball> {
        self.balls.get(index)
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut Ball> {
        self.balls.get_mut(index)
    }

    pub fn cue_ball(&self) -> &Ball {
        &self.balls[Self::CUE_INDEX]
    }

    pub fn cue_ball_mut(&mut self) -> &mut Ball {
        &mut self.balls[Self::CUE_INDEX]
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Ball> {
        self.balls.iter()
    }

    pub fn as_slice(&self) -> &[Ball] {
        &self.balls
    }

    pub fn as_mut_slice(&mut self) -> &mut [Ball] {
        &mut self.balls
    }

    /// True when no ball is faster than `rest_speed`
    pub fn all_at_rest(&self, rest_speed: f32) -> bool {
        self.balls.iter().all(|b| b.speed() <= rest_speed)
    }

    /// Summed unit-mass kinetic energy
    pub fn total_kinetic_energy(&self) -> f32 {
        self.balls.iter().map(Ball::kinetic_energy).sum()
    }
}

/// The cue, reduced to its depth along the strike axis
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Cue {
    pub z: f32,
    pub end_z: f32,
    /// Advance per tick
    pub speed: f32,
}

impl Cue {
    /// Whether the cue has reached its striking depth
    #[inline]
    pub fn at_target(&self) -> bool {
        self.z <= self.end_z
    }

    /// Move one tick toward the target. Returns true once it is there.
    ///
    /// A cue that cannot move forward counts as arrived.
    pub fn advance(&mut self) -> bool {
        if self.at_target() || !(self.speed > 0.0) {
            return true;
        }
        self.z -= self.speed;
        false
    }
}

/// Things a host may want to react to (sound, UI)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum SimEvent {
    ShotStarted,
    CueStruck { impulse: Vec2 },
    Settled { ticks: u64 },
}

/// Read-only per-ball view handed to the render adapter or serialized out
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BallSnapshot {
    pub index: usize,
    pub number: u8,
    pub pos: Vec2,
    pub vel: Vec2,
}

/// Complete simulation state
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimState {
    pub settings: Settings,
    pub table: PlayArea,
    pub balls: BallRegistry,
    pub cue: Cue,
    pub phase: SimPhase,
    /// Seconds spent in `Idle`
    pub idle_elapsed: f32,
    /// Set once the cue ball has received the strike
    pub impulse_applied: bool,
    /// Simulation tick counter
    pub time_ticks: u64,
    /// Tick on which rolling started
    pub roll_started_tick: u64,
    /// Events since the host last drained them
    #[serde(skip)]
    pub events: Vec<SimEvent>,
}

impl SimState {
    /// Rack the balls on `table` and wait for the shot
    pub fn new(table: PlayArea, settings: Settings) -> Self {
        let balls = BallRegistry::rack(&settings.rack);
        let cue = Cue {
            z: settings.shot.cue_start_z,
            end_z: settings.shot.cue_end_z,
            speed: settings.shot.cue_speed,
        };

        Self {
            settings,
            table,
            balls,
            cue,
            phase: SimPhase::Idle,
            idle_elapsed: 0.0,
            impulse_applied: false,
            time_ticks: 0,
            roll_started_tick: 0,
            events: Vec::new(),
        }
    }

    /// Give the cue ball the strike velocity, at most once per shot.
    /// Returns whether the impulse was applied by this call.
    pub fn strike_cue_ball(&mut self) -> bool {
        if self.impulse_applied {
            return false;
        }
        let impulse = self.settings.shot.impulse;
        self.balls.cue_ball_mut().vel = impulse;
        self.impulse_applied = true;
        self.events.push(SimEvent::CueStruck { impulse });
        log::info!("Cue ball struck with velocity {:?}", impulse);
        true
    }

    /// Per-ball `(position, velocity)` view after the latest tick
    pub fn snapshot(&self) -> Vec<BallSnapshot> {
        self.balls
            .iter()
            .enumerate()
            .map(|(index, b)| BallSnapshot {
                index,
                number: b.number,
                pos: b.pos,
                vel: b.vel,
            })
            .collect()
    }

    /// Hand pending events to the host
    pub fn drain_events(&mut self) -> Vec<SimEvent> {
        std::mem::take(&mut self.events)
    }
}
