// Copyright 2025 John Brosnihan
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.
//! One frame of table physics
//!
//! A frame runs four phases in a fixed order:
//!
//! 1. **Integrate** every ball under rolling friction
//! 2. **Cushions**: reflect balls that crossed a wall
//! 3. **Pockets**: remove balls that overlap a pocket
//! 4. **Pairs**: resolve every overlapping pair once
//!
//! Pairs are visited as `(i, j)` for `j > i` over the active set, followed by
//! `(i, cue)`, so results are reproducible for a given rack and sequence of
//! timesteps. Resolving pairs one after another instead of simultaneously is
//! an approximation for clusters of touching balls (such as the break). The
//! pair loop is O(n²), which is fine for a rack of sixteen balls.

use crate::body::{ActiveSet, Ball, BallId};
use crate::collision::{collide, collide_with_border, collide_with_hole, Pocket, Table};
use crate::config::PhysicsParameters;
use crate::integration::SchemeTable;
use crate::vector::Vector2;
use log::{info, trace, warn};

/// Everything a frame reads but never changes
#[derive(Debug, Clone, Copy)]
pub struct StepContext<'a> {
    /// Play area
    pub table: &'a Table,
    /// Holes, checked in order
    pub pockets: &'a [Pocket],
    /// Friction and restitution
    pub params: &'a PhysicsParameters,
    /// Per-axis integrator selection
    pub schemes: &'a SchemeTable,
    /// Where a pocketed cue ball is put back
    pub cue_spot: Vector2,
    /// Simulation time at the start of the frame
    pub time: f64,
}

/// What happened during one frame
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StepReport {
    /// Object balls removed this frame, in active-set order
    pub pocketed: Vec<BallId>,
    /// True if the cue ball fell in and was respawned
    pub cue_ball_pocketed: bool,
    /// Number of ball-ball contacts resolved
    pub collisions: usize,
    /// Number of cushion reflections
    pub cushion_hits: usize,
}

impl StepReport {
    /// Check if anything was pocketed
    pub fn any_pocketed(&self) -> bool {
        self.cue_ball_pocketed || !self.pocketed.is_empty()
    }
}

/// Advance the table by one frame
///
/// Mutates the balls in place and may shrink `balls`. A cue ball that
/// drops is placed back at rest on `ctx.cue_spot`, or on the first free
/// position above it (see [`free_cue_spot`]). `dt` is trusted; large
/// steps can tunnel.
pub fn step(ctx: &StepContext<'_>, balls: &mut ActiveSet, cue_ball: &mut Ball, dt: f64) -> StepReport {
    debug_assert!(dt > 0.0 && dt.is_finite(), "Timestep must be positive and finite");

    let mut report = StepReport::default();

    // Integrate
    for ball in balls.iter_mut() {
        ball.integrate(dt, ctx.time, ctx.params, ctx.schemes);
        warn_on_tunneling(ball, dt);
    }
    cue_ball.integrate(dt, ctx.time, ctx.params, ctx.schemes);
    warn_on_tunneling(cue_ball, dt);

    // Cushions
    for ball in balls.iter_mut() {
        if collide_with_border(ball, ctx.table) {
            report.cushion_hits += 1;
        }
    }
    if collide_with_border(cue_ball, ctx.table) {
        report.cushion_hits += 1;
    }

    // Pockets, over a snapshot so removal cannot skip a neighbour
    for id in balls.ids() {
        for pocket in ctx.pockets {
            if collide_with_hole(balls, id, pocket).is_some() {
                report.pocketed.push(id);
                break;
            }
        }
    }
    if ctx.pockets.iter().any(|pocket| pocket.captures(cue_ball)) {
        let spot = free_cue_spot(balls, ctx.cue_spot, cue_ball.radius());
        if spot != ctx.cue_spot {
            warn!(
                "cue spot ({:.3}, {:.3}) is occupied, respawning at ({:.3}, {:.3})",
                ctx.cue_spot.x, ctx.cue_spot.y, spot.x, spot.y
            );
        }
        info!("cue ball pocketed, respawning at ({:.3}, {:.3})", spot.x, spot.y);
        cue_ball.set_position(spot);
        cue_ball.set_velocity(Vector2::zero());
        report.cue_ball_pocketed = true;
    }

    // Pairs
    report.collisions = resolve_pairs(balls.as_mut_slice(), cue_ball, ctx.params.restitution);

    trace!(
        "frame t={:.4} dt={:.4}: {} balls, {} collisions, {} cushion hits",
        ctx.time,
        dt,
        balls.len(),
        report.collisions,
        report.cushion_hits
    );
    report
}

/// Resolve every overlapping pair once in the canonical order
///
/// Returns the number of pairs whose velocities changed.
pub fn resolve_pairs(balls: &mut [Ball], cue_ball: &mut Ball, restitution: f64) -> usize {
    let mut resolved = 0;
    for i in 0..balls.len() {
        let (head, tail) = balls.split_at_mut(i + 1);
        let current = &mut head[i];
        for other in tail.iter_mut() {
            if collide(current, other, restitution) {
                resolved += 1;
            }
        }
        if collide(current, cue_ball, restitution) {
            resolved += 1;
        }
    }
    resolved
}

/// Check if every ball is slower than [`crate::body::REST_EPSILON`]
pub fn all_at_rest(balls: &ActiveSet, cue_ball: &Ball) -> bool {
    cue_ball.is_at_rest() && balls.iter().all(Ball::is_at_rest)
}

/// First position at or above `spot` (along +y) where a ball of `radius`
/// overlaps nothing in `balls`
///
/// Each blocker pushes the spot to just past touching it. The spot only
/// moves up, so a cleared ball never blocks again and the search ends after
/// at most one pass per ball.
pub fn free_cue_spot(balls: &ActiveSet, spot: Vector2, radius: f64) -> Vector2 {
    let mut spot = spot;
    for _ in 0..=balls.len() {
        let blocker = balls.iter().find(|ball| {
            let reach = ball.radius() + radius;
            (ball.position() - spot).length_squared() < reach * reach
        });
        let Some(ball) = blocker else {
            return spot;
        };
        let reach = ball.radius() + radius;
        let dx = spot.x - ball.position().x;
        let clearance = (reach * reach - dx * dx).max(0.0).sqrt();
        // Margin keeps the result strictly outside after rounding
        spot.y = ball.position().y + clearance + reach * 1e-6;
    }
    spot
}

fn warn_on_tunneling(ball: &Ball, dt: f64) {
    let travel = ball.speed() * dt;
    if travel > ball.radius() {
        warn!(
            "{} moved {:.4} in one step, more than its radius {:.4}; contacts may be missed",
            ball.id(),
            travel,
            ball.radius()
        );
    }
}
