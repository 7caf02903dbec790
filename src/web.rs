//! Browser bridge
//!
//! The page owns the 3D scene and its animation loop. Each frame it calls
//! [`WebSimulation::tick`] and copies [`WebSimulation::instances`] onto its
//! ball meshes by index.

use wasm_bindgen::prelude::*;

use crate::Settings;
use crate::consts::SIM_DT;
use crate::render::RenderAdapter;
use crate::sim::{PlayArea, SimPhase, SimState, TickInput, tick};

#[wasm_bindgen(start)]
pub fn wasm_start() {
    console_error_panic_hook::set_once();
    if console_log::init_with_level(log::Level::Info).is_err() {
        // Logger already installed by another entry point
        return;
    }
    log::info!("Cue Break starting...");
}

#[wasm_bindgen]
pub struct WebSimulation {
    state: SimState,
    adapter: RenderAdapter,
    input: TickInput,
}

#[wasm_bindgen]
impl WebSimulation {
    /// Build from the table the page measured. Non-positive extents fall
    /// back to the default table. `settings_json` may be empty.
    ///
    /// `length` is the extent along the strike axis (z) and `width` the
    /// extent across it (x). A table measured with its long side on x must
    /// be passed swapped.
    #[wasm_bindgen(constructor)]
    pub fn new(length: f32, width: f32, surface_y: f32, settings_json: &str) -> WebSimulation {
        let measured = PlayArea::new(length, width, surface_y);
        let table = PlayArea::or_fallback(Some(measured));

        let settings = if settings_json.trim().is_empty() {
            Settings::default()
        } else {
            match Settings::from_json(settings_json) {
                Ok(settings) => settings.sanitized(),
                Err(e) => {
                    log::warn!("Invalid settings: {}", e);
                    log::info!("Using default settings");
                    Settings::default()
                }
            }
        };

        let state = SimState::new(table, settings);
        let adapter = RenderAdapter::new(&state);
        log::info!("Table {} x {}, {} balls racked", table.length, table.width, state.balls.len());

        WebSimulation {
            state,
            adapter,
            input: TickInput::default(),
        }
    }

    /// Start the cue approach on the next tick
    pub fn start_shot(&mut self) {
        self.input.start_shot = true;
    }

    /// Advance one frame. Returns the phase as a number (0 idle .. 3 settled).
    pub fn tick(&mut self) -> u8 {
        tick(&mut self.state, &self.input, SIM_DT);
        self.input.start_shot = false;
        self.adapter.sync(&self.state);

        match self.state.phase {
            SimPhase::Idle => 0,
            SimPhase::CueApproaching => 1,
            SimPhase::Rolling => 2,
            SimPhase::Settled => 3,
        }
    }

    /// Flat `[x, y, z, spin, r, g, b, a]` per ball, in registry order
    pub fn instances(&self) -> Vec<f32> {
        self.adapter.instance_floats().to_vec()
    }

    /// Flat `[x, y, z, yaw]` for the cue model
    pub fn cue(&self) -> Vec<f32> {
        RenderAdapter::cue_floats(&self.state).to_vec()
    }

    /// Events since the last call, as a JSON array
    pub fn drain_events(&mut self) -> String {
        let events = self.state.drain_events();
        serde_json::to_string(&events).unwrap_or_else(|e| {
            log::warn!("Could not serialize events: {}", e);
            "[]".to_string()
        })
    }

    pub fn ball_count(&self) -> usize {
        self.state.balls.len()
    }
}
