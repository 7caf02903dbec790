//! Instance records handed to the host renderer

use bytemuck::{Pod, Zeroable};

/// One ball as the renderer needs it
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct BallInstance {
    /// World position `(x, y, z)`, y already lifted onto the cloth
    pub position: [f32; 3],
    /// Accumulated cosmetic rotation about the vertical axis (radians)
    pub spin: f32,
    pub color: [f32; 4],
}

impl BallInstance {
    /// Number of `f32`s per instance when flattened
    pub const FLOATS: usize = std::mem::size_of::<BallInstance>() / std::mem::size_of::<f32>();
}

/// Where to draw the cue
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct CueTransform {
    pub position: [f32; 3],
    /// Rotation about the vertical axis (radians)
    pub yaw: f32,
}

/// Ball colours
pub mod colors {
    const fn rgb(hex: u32) -> [f32; 4] {
        [
            ((hex >> 16) & 0xff) as f32 / 255.0,
            ((hex >> 8) & 0xff) as f32 / 255.0,
            (hex & 0xff) as f32 / 255.0,
            1.0,
        ]
    }

    pub const CUE_BALL: [f32; 4] = [1.0, 1.0, 1.0, 1.0];

    pub const YELLOW: [f32; 4] = rgb(0xf9d208);
    pub const BLUE: [f32; 4] = rgb(0x1a6ad6);
    pub const RED: [f32; 4] = rgb(0xb11616);
    pub const PURPLE: [f32; 4] = rgb(0x6a1abf);
    pub const ORANGE: [f32; 4] = rgb(0xf26d00);
    pub const GREEN: [f32; 4] = rgb(0x0a8a68);
    pub const MAROON: [f32; 4] = rgb(0x7b052b);
    pub const BLACK: [f32; 4] = rgb(0x000000);

    /// Object balls 1..=15
    pub const RACK: [[f32; 4]; 15] = [
        YELLOW, BLUE, RED, PURPLE, ORANGE, GREEN, MAROON, BLACK, YELLOW, BLUE, RED, PURPLE,
        ORANGE, GREEN, MAROON,
    ];

    /// Colour for a rack number (0 is the cue ball)
    pub fn for_number(number: u8) -> [f32; 4] {
        match number {
            0 => CUE_BALL,
            n => RACK[(n as usize - 1) % RACK.len()],
        }
    }
}
