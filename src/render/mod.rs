//! Render adapter
//!
//! Maps simulation state onto visual instances by registry index. The
//! renderer itself (scene graph, models, lights, camera) lives in the host.

pub mod adapter;
pub mod instance;

pub use adapter::RenderAdapter;
pub use instance::{BallInstance, CueTransform, colors};
