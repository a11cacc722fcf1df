//! Game state and core simulation types
//!
//! The whole session lives in one [`GameState`]; the browser shell only talks
//! to it through [`GameState::start`], [`GameState::handle_activation`] and
//! [`tick`](super::tick::tick).

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use crate::tuning::Tuning;

/// The player-controlled bird
///
/// `pos.x` is fixed for the duration of a round; only `pos.y` and `vel`
/// change under gravity and flaps.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bird {
    /// Top-left corner of the bounding box
    pub pos: Vec2,
    /// Bounding box size
    pub size: Vec2,
    /// Vertical velocity (positive = downward)
    pub vel: f32,
}

impl Bird {
    pub fn new(pos: Vec2, tuning: &Tuning) -> Self {
        Self {
            pos,
            size: Vec2::new(tuning.bird_w, tuning.bird_h),
            vel: 0.0,
        }
    }

    #[inline]
    pub fn top(&self) -> f32 {
        self.pos.y
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.pos.y + self.size.y
    }

    #[inline]
    pub fn left(&self) -> f32 {
        self.pos.x
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.pos.x + self.size.x
    }
}

/// A scrolling gap obstacle
///
/// Drawn as two rectangles: everything above `top_h` and everything below
/// `top_h + gap`. The gap height is captured in pixels at spawn time so a
/// window resize never reshapes pipes already in flight.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pipe {
    /// Left edge, decreasing every tick
    pub x: f32,
    pub width: f32,
    /// Y of the gap's top edge
    pub top_h: f32,
    /// Gap height in pixels
    pub gap: f32,
    /// Set once when the pipe's right edge crosses the bird column
    pub passed: bool,
}

impl Pipe {
    #[inline]
    pub fn right_edge(&self) -> f32 {
        self.x + self.width
    }

    #[inline]
    pub fn gap_bottom(&self) -> f32 {
        self.top_h + self.gap
    }
}

/// Current canvas dimensions plus the balance values derived from them
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Horizontal pipe speed, scaled so wider windows play at the same pace
    #[inline]
    pub fn scroll_speed(&self, tuning: &Tuning) -> f32 {
        self.width / tuning.speed_ref_width
    }

    /// Gap height for newly spawned pipes
    #[inline]
    pub fn gap_px(&self, tuning: &Tuning) -> f32 {
        self.height * tuning.gap_fraction
    }
}

/// Complete game state (deterministic)
#[derive(Debug, Clone)]
pub struct GameState {
    /// Session seed for reproducibility
    pub seed: u64,
    pub tuning: Tuning,
    pub viewport: Viewport,
    pub bird: Bird,
    /// Active pipes, oldest (leftmost) first
    pub pipes: Vec<Pipe>,
    /// Pipes passed this round
    pub score: u32,
    /// Tick counter, used only for spawn cadence
    pub frame: u64,
    /// Set by `start()`, never cleared for the session lifetime
    pub playing: bool,
    /// Terminal-within-round flag, cleared only by a restart activation
    pub game_over: bool,
    rng: Pcg32,
}

impl GameState {
    /// Create an idle session (nothing moves until `start()`)
    pub fn new(seed: u64, tuning: Tuning, viewport: Viewport) -> Self {
        let bird_pos = Vec2::new(
            viewport.width * tuning.bird_x_fraction,
            viewport.height * 0.5,
        );
        let bird = Bird::new(bird_pos, &tuning);
        Self {
            seed,
            tuning,
            viewport,
            bird,
            pipes: Vec::new(),
            score: 0,
            frame: 0,
            playing: false,
            game_over: false,
            rng: Pcg32::seed_from_u64(seed),
        }
    }

    /// Begin the session. Idempotent; `playing` is never unset afterwards.
    pub fn start(&mut self) {
        if self.playing {
            return;
        }
        self.playing = true;
        self.reset();
    }

    /// Reset everything for a fresh round and spawn the first pipe
    pub fn reset(&mut self) {
        let bird_pos = Vec2::new(
            self.viewport.width * self.tuning.bird_x_fraction,
            self.viewport.height * 0.5,
        );
        self.bird = Bird::new(bird_pos, &self.tuning);
        self.pipes.clear();
        self.score = 0;
        self.frame = 0;
        self.game_over = false;
        self.spawn_pipe();
    }

    /// One activation input (space / click / tap)
    ///
    /// Ignored before `start()`. While game over it restarts the round;
    /// otherwise it assigns the flap impulse (never additive).
    pub fn handle_activation(&mut self) {
        if !self.playing {
            return;
        }
        if self.game_over {
            self.reset();
        } else {
            self.bird.vel = self.tuning.flap_impulse;
        }
    }

    /// Adopt new canvas dimensions
    ///
    /// Derived speed and future gap sizes change immediately; pipes already
    /// in flight and the bird column are left where they are.
    pub fn resize(&mut self, width: f32, height: f32) {
        self.viewport = Viewport::new(width, height);
    }

    /// Spawn a pipe just past the right edge
    ///
    /// The gap top is drawn uniformly within the band that keeps the whole
    /// gap on screen: at least `gap_top_min` below the ceiling and
    /// `gap_floor_margin` above the floor.
    pub fn spawn_pipe(&mut self) {
        let gap = self.viewport.gap_px(&self.tuning);
        let span = (self.viewport.height - gap - self.tuning.gap_top_min
            - self.tuning.gap_floor_margin)
            .max(0.0);
        let top_h = self.tuning.gap_top_min + self.rng.random_range(0.0..=span);
        self.pipes.push(Pipe {
            x: self.viewport.width + self.tuning.spawn_lead,
            width: self.tuning.pipe_w,
            top_h,
            gap,
            passed: false,
        });
    }
}
