//! Skyflap - a full-window Flappy Bird clone
//!
//! Core modules:
//! - `sim`: Deterministic simulation (physics, gap collisions, game state)
//! - `render`: 2D canvas drawing (wasm only)
//! - `assets`: Fire-and-forget sprite loading with explicit readiness state
//! - `tuning`: Data-driven game balance

pub mod assets;
#[cfg(target_arch = "wasm32")]
pub mod render;
pub mod sim;
pub mod tuning;

pub use tuning::Tuning;

/// Default game balance constants
///
/// Runtime values live in [`tuning::Tuning`]; these are its defaults.
pub mod consts {
    /// Bird sprite size (pixels)
    pub const BIRD_W: f32 = 48.0;
    pub const BIRD_H: f32 = 35.0;
    /// Bird column as a fraction of canvas width
    pub const BIRD_X_FRACTION: f32 = 0.15;

    /// Downward acceleration per tick
    pub const GRAVITY: f32 = 0.5;
    /// Velocity assigned on a flap (upward, so negative)
    pub const FLAP_IMPULSE: f32 = -8.0;

    /// Pipe width (pixels)
    pub const PIPE_W: f32 = 70.0;
    /// Gap height as a fraction of canvas height
    pub const GAP_FRACTION: f32 = 0.25;
    /// Scroll speed is `canvas_width / SPEED_REF_WIDTH` (~2.5 at 800px)
    pub const SPEED_REF_WIDTH: f32 = 320.0;

    /// A new pipe spawns every this many ticks (frame 0 excluded)
    pub const SPAWN_PERIOD: u64 = 90;
    /// Pipes spawn this far past the right canvas edge
    pub const SPAWN_LEAD: f32 = 60.0;
    /// Pipes are dropped once their right edge is this far off the left edge
    pub const DESPAWN_MARGIN: f32 = 20.0;

    /// Minimum distance from ceiling to the gap's top edge
    pub const GAP_TOP_MIN: f32 = 60.0;
    /// Minimum distance from the gap's bottom edge to the floor
    pub const GAP_FLOOR_MARGIN: f32 = 100.0;
}
