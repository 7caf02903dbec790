//! Play area supplied by the table collaborator
//!
//! The table length runs along the strike axis (`z`), the width across it
//! (`x`). Height only matters to the renderer.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Immutable rectangular play area centred on the origin
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlayArea {
    /// Extent along the strike axis (z)
    pub length: f32,
    /// Extent across the strike axis (x)
    pub width: f32,
    /// Height of the cloth, used only for rendering
    pub surface_y: f32,
}

impl Default for PlayArea {
    fn default() -> Self {
        Self {
            length: FALLBACK_TABLE_LENGTH,
            width: FALLBACK_TABLE_WIDTH,
            surface_y: FALLBACK_SURFACE_Y,
        }
    }
}

impl PlayArea {
    pub fn new(length: f32, width: f32, surface_y: f32) -> Self {
        Self {
            length,
            width,
            surface_y,
        }
    }

    /// Use the measured play area if there is a usable one, else the flat default table
    pub fn or_fallback(measured: Option<PlayArea>) -> Self {
        match measured {
            Some(area) if area.is_usable() => area,
            Some(area) => {
                log::warn!("Unusable play area {:?}, using default table", area);
                Self::default()
            }
            None => {
                log::warn!("No table data available, using default table");
                Self::default()
            }
        }
    }

    /// Finite, positive extents
    pub fn is_usable(&self) -> bool {
        self.length.is_finite()
            && self.width.is_finite()
            && self.surface_y.is_finite()
            && self.length > 0.0
            && self.width > 0.0
    }

    /// Half extents `(x, z)` shrunk by the cushion inset
    #[inline]
    pub fn half_extents(&self, inset: f32) -> Vec2 {
        Vec2::new(self.width * 0.5 * inset, self.length * 0.5 * inset)
    }

    /// Limits a ball centre may reach on each axis, never negative
    #[inline]
    pub fn center_limits(&self, inset: f32, radius: f32) -> Vec2 {
        (self.half_extents(inset) - Vec2::splat(radius)).max(Vec2::ZERO)
    }
}
