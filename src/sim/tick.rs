//! Fixed timestep simulation tick
//!
//! Drives the shot lifecycle: `Idle -> CueApproaching -> Rolling -> Settled`.
//! The host calls [`tick`] once per displayed frame.

use super::state::{SimEvent, SimPhase, SimState};
use super::step::step;

/// Host input for a single tick
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    /// Start the cue approach now instead of waiting out the pre-shot delay
    pub start_shot: bool,
}

/// Advance the simulation by one fixed timestep
pub fn tick(state: &mut SimState, input: &TickInput, dt: f32) {
    if state.phase == SimPhase::Settled {
        return;
    }

    state.time_ticks += 1;

    match state.phase {
        SimPhase::Idle => {
            state.idle_elapsed += dt;
            if input.start_shot || state.idle_elapsed >= state.settings.shot.pre_shot_delay {
                set_phase(state, SimPhase::CueApproaching);
                state.events.push(SimEvent::ShotStarted);
            }
        }

        SimPhase::CueApproaching => {
            if state.cue.advance() {
                // No-op if this shot already struck the cue ball
                state.strike_cue_ball();
                state.roll_started_tick = state.time_ticks;
                set_phase(state, SimPhase::Rolling);
            }
        }

        SimPhase::Rolling => {
            let tuning = state.settings.physics;
            step(state.balls.as_mut_slice(), &state.table, &tuning, dt);

            if state.balls.all_at_rest(tuning.rest_speed) {
                let ticks = state.time_ticks - state.roll_started_tick;
                set_phase(state, SimPhase::Settled);
                state.events.push(SimEvent::Settled { ticks });
                log::info!("Table settled after {} ticks of rolling", ticks);
            }
        }

        SimPhase::Settled => {}
    }
}

fn set_phase(state: &mut SimState, phase: SimPhase) {
    log::info!("Phase {:?} -> {:?} (tick {})", state.phase, phase, state.time_ticks);
    state.phase = phase;
}
