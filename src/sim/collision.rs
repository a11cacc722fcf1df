//! Collision checks for the bird's bounding box
//!
//! Everything is axis-aligned: a pipe kills when the boxes overlap in X and
//! the bird pokes outside the gap in Y; the world bounds kill at the floor
//! and ceiling.

use super::state::{Bird, Pipe};

/// Does the bird collide with this pipe?
///
/// True iff the boxes overlap horizontally AND the bird's top is above the
/// gap's top edge or its bottom is below the gap's bottom edge.
pub fn hits_pipe(bird: &Bird, pipe: &Pipe) -> bool {
    let in_x = bird.right() > pipe.x && bird.left() < pipe.right_edge();
    if !in_x {
        return false;
    }
    bird.top() < pipe.top_h || bird.bottom() > pipe.gap_bottom()
}

/// Has the bird left the world vertically?
pub fn out_of_bounds(bird: &Bird, floor: f32) -> bool {
    bird.bottom() > floor || bird.top() < 0.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tuning::Tuning;
    use glam::Vec2;
    use proptest::prelude::*;

    fn bird_at(x: f32, y: f32) -> Bird {
        Bird::new(Vec2::new(x, y), &Tuning::default())
    }

    fn pipe_at(x: f32, top_h: f32, gap: f32) -> Pipe {
        Pipe {
            x,
            width: 70.0,
            top_h,
            gap,
            passed: false,
        }
    }

    #[test]
    fn test_no_hit_without_x_overlap() {
        // Bird well left of the pipe, poking far outside the gap
        let bird = bird_at(80.0, 10.0);
        let pipe = pipe_at(300.0, 100.0, 120.0);
        assert!(!hits_pipe(&bird, &pipe));
    }

    #[test]
    fn test_hit_top_edge() {
        let bird = bird_at(80.0, 90.0);
        let pipe = pipe_at(80.0, 100.0, 120.0);
        assert!(hits_pipe(&bird, &pipe));
    }

    #[test]
    fn test_hit_bottom_edge() {
        // Bird bottom (y + 35) dips below gap bottom at 220
        let bird = bird_at(80.0, 190.0);
        let pipe = pipe_at(80.0, 100.0, 120.0);
        assert!(hits_pipe(&bird, &pipe));
    }

    #[test]
    fn test_inside_gap_is_safe() {
        let bird = bird_at(80.0, 140.0);
        let pipe = pipe_at(80.0, 100.0, 120.0);
        assert!(!hits_pipe(&bird, &pipe));
    }

    #[test]
    fn test_touching_gap_edges_is_safe() {
        // Exactly flush with both gap edges: strict comparisons, no hit
        let mut bird = bird_at(80.0, 100.0);
        bird.size.y = 120.0;
        let pipe = pipe_at(80.0, 100.0, 120.0);
        assert!(!hits_pipe(&bird, &pipe));
    }

    #[test]
    fn test_x_edges_are_exclusive() {
        // Bird right edge exactly at pipe left edge: not yet overlapping
        let bird = bird_at(80.0, 10.0);
        let pipe = pipe_at(80.0 + 48.0, 100.0, 120.0);
        assert!(!hits_pipe(&bird, &pipe));
    }

    #[test]
    fn test_out_of_bounds() {
        let floor = 480.0;
        assert!(!out_of_bounds(&bird_at(80.0, 200.0), floor));
        // Bottom below the floor
        assert!(out_of_bounds(&bird_at(80.0, 446.0), floor));
        // Top above the ceiling
        assert!(out_of_bounds(&bird_at(80.0, -1.0), floor));
        // Resting exactly on the floor is still in bounds
        assert!(!out_of_bounds(&bird_at(80.0, 445.0), floor));
    }

    proptest! {
        #[test]
        fn prop_hit_matches_predicate(
            bird_x in 0.0f32..800.0,
            bird_y in -100.0f32..600.0,
            pipe_x in -100.0f32..900.0,
            top_h in 60.0f32..300.0,
            gap in 80.0f32..200.0,
        ) {
            let bird = bird_at(bird_x, bird_y);
            let pipe = pipe_at(pipe_x, top_h, gap);
            let expected = (bird.right() > pipe.x && bird.left() < pipe.right_edge())
                && (bird.top() < top_h || bird.bottom() > top_h + gap);
            prop_assert_eq!(hits_pipe(&bird, &pipe), expected);
        }

        #[test]
        fn prop_fully_inside_gap_never_hits(
            pipe_x in 0.0f32..200.0,
            top_h in 60.0f32..300.0,
            slack in 0.0f32..0.9,
        ) {
            // Gap comfortably taller than the bird; bird somewhere inside it
            let gap = 200.0;
            let bird_h = 35.0;
            let mut bird = bird_at(pipe_x + 10.0, top_h + slack * (gap - bird_h));
            bird.size.y = bird_h;
            let pipe = pipe_at(pipe_x, top_h, gap);
            prop_assert!(!hits_pipe(&bird, &pipe));
        }
    }
}
