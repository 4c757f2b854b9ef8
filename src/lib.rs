//! Birdstrike - a slingshot stage, simulated one tick at a time
//!
//! Birds are launched on ballistic arcs at pigs sheltering behind obstacles.
//! This crate is the deterministic core only: actors, trajectories,
//! collisions and the stage outcome. Rendering and input belong to the
//! driver, which calls [`sim::Stage::tick`] once per frame and draws the
//! returned points.

pub mod sim;

/// Game configuration constants
pub mod consts {
    /// Gravitational acceleration (game units per time-unit squared)
    pub const GRAVITY: f32 = 10.0;
    /// Default half-width of the square proximity box used for collisions
    pub const DEFAULT_COLLISION_INTERVAL: f32 = 1.0;
    /// Conventional driver timestep; the sim itself accepts any advancing time
    pub const SIM_DT: f32 = 0.01;
}
