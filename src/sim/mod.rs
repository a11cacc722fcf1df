//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only (one tick per displayed frame)
//! - Seeded RNG only
//! - No rendering or platform dependencies

pub mod collision;
pub mod state;
pub mod tick;

pub use collision::{hits_pipe, out_of_bounds};
pub use state::{Bird, GameState, Pipe, Viewport};
pub use tick::tick;
