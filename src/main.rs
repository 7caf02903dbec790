//! Cue Break entry point
//!
//! Native builds run one shot headless and print the final table as JSON.
//! The browser build is driven from JavaScript through `cue_break::web`.

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use std::path::Path;

    use cue_break::Settings;
    use cue_break::consts::SIM_DT;
    use cue_break::render::RenderAdapter;
    use cue_break::sim::{BallRegistry, PlayArea, SimEvent, SimPhase, SimState, TickInput, tick};

    /// Give up if the table has not settled after a simulated minute
    const MAX_TICKS: u64 = 60 * 60;

    env_logger::init();
    log::info!("Cue Break (native) starting...");

    let settings = match std::env::args().nth(1) {
        Some(path) => Settings::load_or_default(Path::new(&path)),
        None => Settings::default(),
    };

    // No table model natively: always the flat default table
    let table = PlayArea::or_fallback(None);
    let mut state = SimState::new(table, settings);
    let mut adapter = RenderAdapter::new(&state);
    let input = TickInput::default();

    while state.phase != SimPhase::Settled && state.time_ticks < MAX_TICKS {
        tick(&mut state, &input, SIM_DT);
        adapter.sync(&state);

        for event in state.drain_events() {
            match event {
                SimEvent::ShotStarted => log::info!("Cue moving"),
                SimEvent::CueStruck { impulse } => {
                    log::info!("Strike: {:.2} units/s", impulse.length())
                }
                SimEvent::Settled { ticks } => {
                    log::info!("Settled in {:.2}s", ticks as f32 * SIM_DT)
                }
            }
        }

        if state.time_ticks % 60 == 0 {
            log::debug!(
                "t={} phase={:?} energy={:.5}",
                state.time_ticks,
                state.phase,
                state.balls.total_kinetic_energy()
            );
        }
    }

    if state.phase != SimPhase::Settled {
        log::warn!("Stopped after {} ticks without settling", state.time_ticks);
    }

    match serde_json::to_string_pretty(&state.snapshot()) {
        Ok(json) => println!("{}", json),
        Err(e) => log::error!("Could not serialize snapshot: {}", e),
    }
    log::debug!("Cue ball drawn at {:?}", adapter.instances()[BallRegistry::CUE_INDEX].position);
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is cue_break::web::wasm_start, this is just to satisfy the compiler
}
