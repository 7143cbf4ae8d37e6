//! Per-tick ball kinematics and peg collision response
//!
//! One call to [`step_ball`] advances a single ball by one tick: gravity,
//! position integration, peg collision resolution, floor check. The stepper
//! owns no state; the tick driver calls it for every in-flight ball.

use glam::Vec2;
use rand::Rng;

use super::board::Peg;
use super::state::Ball;
use crate::consts::*;

/// What a single tick did to a ball
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepOutcome {
    /// Still above the landing line
    Falling,
    /// Reached the landing line; position snapped, ready for payout
    Landed,
}

/// Advance one ball by one tick.
///
/// Returns [`StepOutcome::Landed`] once the ball reaches the landing line,
/// with its y snapped to the line and vertical velocity zeroed. A landed
/// ball must be resolved and removed; it is never stepped again.
pub fn step_ball(ball: &mut Ball, pegs: &[Peg], floor_y: f32, rng: &mut impl Rng) -> StepOutcome {
    ball.vel.y += GRAVITY;
    ball.pos += ball.vel;

    resolve_peg_collisions(ball, pegs, rng);

    if ball.pos.y + ball.radius >= floor_y {
        ball.pos.y = floor_y;
        ball.vel.y = 0.0;
        StepOutcome::Landed
    } else {
        StepOutcome::Falling
    }
}

/// Push the ball out of any peg it overlaps and reflect its velocity.
///
/// Corrections run peg by peg in creation order: each peg sees the position
/// already corrected by the pegs before it, and earlier pegs are not
/// re-checked within the tick. A fast ball can therefore tunnel through
/// tightly packed pegs; known limitation.
///
/// The bounce is inelastic (velocity scaled by [`BOUNCE_DAMPING`]) with
/// uniform horizontal jitter so paths do not repeat.
pub fn resolve_peg_collisions(ball: &mut Ball, pegs: &[Peg], rng: &mut impl Rng) {
    let radius_sum = ball.radius + PEG_RADIUS;
    for peg in pegs {
        let delta = ball.pos - peg.pos;
        let dist = delta.length();
        if dist < radius_sum {
            let angle = delta.y.atan2(delta.x);
            let overlap = radius_sum - dist;
            ball.pos += Vec2::new(angle.cos(), angle.sin()) * overlap;
            ball.vel.x = -ball.vel.x * BOUNCE_DAMPING + rng.random_range(-JITTER..JITTER);
            ball.vel.y = -ball.vel.y * BOUNCE_DAMPING;
        }
    }
}
