//! Index-based link between the ball registry and the host's visual objects

use super::instance::{BallInstance, CueTransform, colors};
use crate::consts::SPIN_HINT_FACTOR;
use crate::sim::SimState;

/// Cue model offset from the strike axis
const CUE_OFFSET_X: f32 = 0.45;
/// Cue model height above the cloth
const CUE_HEIGHT: f32 = 0.3;
const CUE_YAW: f32 = -0.08;

/// Keeps one instance per ball, in registry order
#[derive(Debug, Clone)]
pub struct RenderAdapter {
    instances: Vec<BallInstance>,
}

impl RenderAdapter {
    pub fn new(state: &SimState) -> Self {
        let y = state.table.surface_y;
        let instances = state
            .balls
            .iter()
            .map(|b| BallInstance {
                position: [b.pos.x, y + b.radius, b.pos.y],
                spin: 0.0,
                color: colors::for_number(b.number),
            })
            .collect();
        Self { instances }
    }

    /// Copy positions from the registry and advance the spin hint.
    /// Call once after every tick.
    pub fn sync(&mut self, state: &SimState) -> &[BallInstance] {
        let y = state.table.surface_y;
        for (inst, ball) in self.instances.iter_mut().zip(state.balls.iter()) {
            inst.position = [ball.pos.x, y + ball.radius, ball.pos.y];
            inst.spin += (ball.vel.x + ball.vel.y) * SPIN_HINT_FACTOR;
        }
        &self.instances
    }

    pub fn instances(&self) -> &[BallInstance] {
        &self.instances
    }

    /// Instances as raw bytes for a GPU buffer upload
    pub fn instance_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.instances)
    }

    /// Instances flattened to `f32`s, [`BallInstance::FLOATS`] per ball
    pub fn instance_floats(&self) -> &[f32] {
        bytemuck::cast_slice(&self.instances)
    }

    pub fn cue_transform(state: &SimState) -> CueTransform {
        CueTransform {
            position: [CUE_OFFSET_X, state.table.surface_y + CUE_HEIGHT, state.cue.z],
            yaw: CUE_YAW,
        }
    }

    /// Cue transform flattened to `[x, y, z, yaw]`
    pub fn cue_floats(state: &SimState) -> [f32; 4] {
        bytemuck::cast(Self::cue_transform(state))
    }
}
