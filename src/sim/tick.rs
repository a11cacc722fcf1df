//! Per-frame simulation step
//!
//! One `tick` per displayed frame. Physics, spawning, scoring and collision
//! all freeze while `game_over` is set; the caller keeps scheduling frames
//! (and rendering) for the lifetime of the session regardless.

use super::collision::{hits_pipe, out_of_bounds};
use super::state::GameState;

/// Advance the game by one frame
///
/// Order within a tick: integrate (velocity before position), spawn, move
/// and score pipes, cull off-screen pipes, then check terminal conditions.
pub fn tick(state: &mut GameState) {
    if !state.playing || state.game_over {
        return;
    }

    // Semi-implicit Euler at a fixed one-frame timestep
    state.bird.vel += state.tuning.gravity;
    state.bird.pos.y += state.bird.vel;

    // Spawn cadence. Frame 0 is skipped: reset() already placed the first
    // pipe manually and spawning here again would double it up.
    if state.frame % state.tuning.spawn_period == 0 && state.frame != 0 {
        state.spawn_pipe();
    }

    let speed = state.viewport.scroll_speed(&state.tuning);
    let bird_x = state.bird.pos.x;
    let mut hit = false;

    for pipe in &mut state.pipes {
        pipe.x -= speed;

        // Exactly one point per pipe, on the tick its right edge clears the
        // bird column.
        if !pipe.passed && pipe.right_edge() < bird_x {
            pipe.passed = true;
            state.score += 1;
        }

        if hits_pipe(&state.bird, pipe) {
            hit = true;
        }
    }

    // Cull only once fully past the off-screen margin, never while visible
    let cull_x = -state.tuning.despawn_margin;
    state.pipes.retain(|p| p.right_edge() > cull_x);

    if hit || out_of_bounds(&state.bird, state.viewport.height) {
        state.game_over = true;
    }

    state.frame += 1;
}
