//! Triangular rack layout
//!
//! Rows of 1, 2, 3, 4, 5 balls. The single-ball apex row sits at
//! `apex_z` and points toward the cue ball; each further row is
//! `spacing * sqrt(3)/2` farther from it, centred on `x = 0`.
//!
//! ```text
//!        cue ball  (+z)
//!
//!          0            <- apex, row 1
//!         1 2
//!        3 4 5
//!       6 7 8 9
//!     10 11 12 13 14    <- row 5   (-z)
//! ```

use glam::Vec2;

use crate::consts::RACK_SIZE;
use crate::settings::RackLayout;

/// Object ball centres in rack order (apex first, then row by row along +x)
pub fn rack_positions(layout: &RackLayout) -> [Vec2; RACK_SIZE] {
    let spacing = layout.spacing();
    let row_offset = spacing * 3.0_f32.sqrt() / 2.0;
    // Strike travels toward -z, so rows stack away from the cue ball
    let away = if layout.cue_ball_z >= layout.apex_z { -1.0 } else { 1.0 };

    let mut positions = [Vec2::ZERO; RACK_SIZE];
    let mut idx = 0;
    for row in 0..5 {
        let z = layout.apex_z + away * row as f32 * row_offset;
        let row_width = row as f32 * spacing;
        for i in 0..=row {
            let x = -row_width / 2.0 + i as f32 * spacing;
            positions[idx] = Vec2::new(x, z);
            idx += 1;
        }
    }
    positions
}
