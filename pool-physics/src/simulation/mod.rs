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
//! Frame-driven table simulation
//!
//! The render loop owns a [`Simulation`], calls [`Simulation::step`] once per
//! frame with the elapsed time, and reads positions back for drawing. Shots
//! and parameter changes are explicit method calls; the simulation never
//! reads input state on its own.
//!
//! Callers that keep their own ball storage can drive the free [`step`]
//! function with a [`StepContext`] instead.

use crate::body::{total_kinetic_energy, ActiveSet, Ball, BallId, STANDARD_BALL_RADIUS};
use crate::collision::{standard_pockets, Pocket, Table, STANDARD_POCKET_RADIUS};
use crate::config::PhysicsParameters;
use crate::error::{PhysicsError, Result};
use crate::integration::SchemeTable;
use crate::vector::Vector2;
use log::{info, warn};

mod rack;
mod step;

pub use rack::{rack_positions, triangle_rack, RACK_ROWS, STANDARD_CUE_SPOT, STANDARD_RACK_APEX};
pub use step::{all_at_rest, free_cue_spot, resolve_pairs, step, StepContext, StepReport};

/// Check that a timestep is positive and finite
pub fn validate_timestep(dt: f64) -> Result<()> {
    if dt > 0.0 && dt.is_finite() {
        Ok(())
    } else {
        Err(PhysicsError::InvalidTimestep(dt))
    }
}

/// A table with its balls, pockets and physical constants
///
/// # Examples
///
/// ```
/// use pool_physics::{Simulation, Vector2};
///
/// let mut sim = Simulation::standard();
/// assert!(sim.can_shoot());
/// sim.shoot(Vector2::new(0.0, -1.0), 3.0).unwrap();
///
/// for _ in 0..10 {
///     sim.step(1.0 / 120.0).unwrap();
/// }
/// assert!(!sim.can_shoot());
/// ```
#[derive(Debug, Clone)]
pub struct Simulation {
    balls: ActiveSet,
    cue_ball: Ball,
    table: Table,
    pockets: Vec<Pocket>,
    params: PhysicsParameters,
    schemes: SchemeTable,
    cue_spot: Vector2,
    elapsed: f64,
    frame: u64,
    pocketed: Vec<BallId>,
}

impl Simulation {
    /// Create a simulation with no object balls and no pockets
    ///
    /// The cue ball's starting position doubles as its respawn spot.
    ///
    /// # Panics
    ///
    /// Panics if `params` fails [`PhysicsParameters::validate`]
    pub fn new(table: Table, params: PhysicsParameters, cue_ball: Ball) -> Self {
        if let Err(err) = params.validate() {
            panic!("Physics parameters must be valid: {}", err);
        }
        Simulation {
            balls: ActiveSet::new(),
            cue_spot: cue_ball.position(),
            cue_ball,
            table,
            pockets: Vec::new(),
            params,
            schemes: SchemeTable::default(),
            elapsed: 0.0,
            frame: 0,
            pocketed: Vec::new(),
        }
    }

    /// Standard table, six pockets, full rack and the cue ball on its spot
    pub fn standard() -> Self {
        let table = Table::standard();
        let pockets = standard_pockets(&table, STANDARD_POCKET_RADIUS);
        let cue_ball = Ball::at_rest(BallId::CUE, STANDARD_CUE_SPOT, STANDARD_BALL_RADIUS);
        Simulation::new(table, PhysicsParameters::default(), cue_ball)
            .with_pockets(pockets)
            .with_balls(triangle_rack(STANDARD_RACK_APEX, STANDARD_BALL_RADIUS))
    }

    /// Add object balls
    pub fn with_balls<I: IntoIterator<Item = Ball>>(mut self, balls: I) -> Self {
        for ball in balls {
            self.balls.insert(ball);
        }
        self
    }

    /// Replace the pockets
    pub fn with_pockets(mut self, pockets: Vec<Pocket>) -> Self {
        self.pockets = pockets;
        self
    }

    /// Replace the per-axis integrator selection
    pub fn with_schemes(mut self, schemes: SchemeTable) -> Self {
        self.schemes = schemes;
        self
    }

    /// Move the cue ball respawn spot
    pub fn with_cue_spot(mut self, spot: Vector2) -> Self {
        self.cue_spot = spot;
        self
    }

    /// Advance by one frame
    ///
    /// Fails only if `dt` is not positive and finite, in which case nothing
    /// changes.
    pub fn step(&mut self, dt: f64) -> Result<StepReport> {
        validate_timestep(dt)?;

        let ctx = StepContext {
            table: &self.table,
            pockets: &self.pockets,
            params: &self.params,
            schemes: &self.schemes,
            cue_spot: self.cue_spot,
            time: self.elapsed,
        };
        let report = step(&ctx, &mut self.balls, &mut self.cue_ball, dt);

        self.pocketed.extend_from_slice(&report.pocketed);
        self.elapsed += dt;
        self.frame += 1;
        Ok(report)
    }

    /// Step with a fixed `dt` until every ball is at rest
    ///
    /// Returns the number of frames taken, or `None` if the table was still
    /// moving after `max_frames`.
    pub fn run_until_rest(&mut self, dt: f64, max_frames: u64) -> Result<Option<u64>> {
        validate_timestep(dt)?;
        for taken in 0..max_frames {
            if self.can_shoot() {
                return Ok(Some(taken));
            }
            self.step(dt)?;
        }
        Ok(self.can_shoot().then_some(max_frames))
    }

    /// Strike the cue ball
    ///
    /// Not gated on [`Simulation::can_shoot`]; check it first.
    pub fn shoot(&mut self, direction: Vector2, force: f64) -> Result<()> {
        if let Err(err) = self.cue_ball.shoot(direction, force) {
            warn!("shot rejected: {}", err);
            return Err(err);
        }
        info!(
            "shot at frame {}: force {:.3} towards ({:.3}, {:.3})",
            self.frame, force, direction.x, direction.y
        );
        Ok(())
    }

    /// Check if every ball on the table is at rest
    pub fn can_shoot(&self) -> bool {
        all_at_rest(&self.balls, &self.cue_ball)
    }

    /// Replace the physical constants
    pub fn set_params(&mut self, params: PhysicsParameters) -> Result<()> {
        params.validate()?;
        self.params = params;
        Ok(())
    }

    /// Object balls still in play
    pub fn balls(&self) -> &ActiveSet {
        &self.balls
    }

    /// Mutable access to the object balls
    pub fn balls_mut(&mut self) -> &mut ActiveSet {
        &mut self.balls
    }

    /// The cue ball
    pub fn cue_ball(&self) -> &Ball {
        &self.cue_ball
    }

    /// Mutable access to the cue ball
    pub fn cue_ball_mut(&mut self) -> &mut Ball {
        &mut self.cue_ball
    }

    /// Play area
    pub fn table(&self) -> &Table {
        &self.table
    }

    /// Pockets
    pub fn pockets(&self) -> &[Pocket] {
        &self.pockets
    }

    /// Physical constants
    pub fn params(&self) -> &PhysicsParameters {
        &self.params
    }

    /// Per-axis integrator selection
    pub fn schemes(&self) -> &SchemeTable {
        &self.schemes
    }

    /// Simulated time so far
    pub fn elapsed(&self) -> f64 {
        self.elapsed
    }

    /// Frames stepped so far
    pub fn frame(&self) -> u64 {
        self.frame
    }

    /// Object balls pocketed so far, in the order they dropped
    pub fn pocketed(&self) -> &[BallId] {
        &self.pocketed
    }

    /// Kinetic energy of every ball including the cue ball
    pub fn total_kinetic_energy(&self) -> f64 {
        total_kinetic_energy(&self.balls) + self.cue_ball.kinetic_energy()
    }
}

impl Default for Simulation {
    fn default() -> Self {
        Simulation::standard()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_setup() {
        let sim = Simulation::standard();
        assert_eq!(sim.balls().len(), 15);
        assert_eq!(sim.pockets().len(), 6);
        assert_eq!(sim.cue_ball().position(), STANDARD_CUE_SPOT);
        assert!(sim.can_shoot());
        assert_eq!(sim.total_kinetic_energy(), 0.0);
    }

    #[test]
    fn test_invalid_timestep_rejected() {
        let mut sim = Simulation::standard();
        for dt in [0.0, -0.01, f64::NAN, f64::INFINITY] {
            assert!(matches!(sim.step(dt), Err(PhysicsError::InvalidTimestep(_))));
        }
        assert_eq!(sim.frame(), 0);
        assert_eq!(sim.elapsed(), 0.0);
    }

    #[test]
    fn test_step_advances_clock() {
        let mut sim = Simulation::standard();
        sim.step(0.01).unwrap();
        sim.step(0.02).unwrap();
        assert_eq!(sim.frame(), 2);
        assert!((sim.elapsed() - 0.03).abs() < 1e-12);
    }

    #[test]
    fn test_set_params_validates() {
        let mut sim = Simulation::standard();
        let mut params = PhysicsParameters::default();
        params.restitution = 2.0;
        assert!(sim.set_params(params).is_err());
        assert_eq!(sim.params().restitution, PhysicsParameters::default().restitution);

        params.restitution = 0.5;
        sim.set_params(params).unwrap();
        assert_eq!(sim.params().restitution, 0.5);
    }

    #[test]
    #[should_panic(expected = "Physics parameters must be valid")]
    fn test_negative_friction_rejected_at_construction() {
        let params = PhysicsParameters {
            friction: -0.5,
            restitution: 0.9,
            gravity: 0.98,
        };
        let cue = Ball::new(BallId::CUE, Vector2::zero(), Vector2::new(0.5, 0.0), STANDARD_BALL_RADIUS);
        Simulation::new(Table::standard(), params, cue);
    }

    #[test]
    #[should_panic(expected = "Physics parameters must be valid")]
    fn test_out_of_range_restitution_rejected_at_construction() {
        let params = PhysicsParameters {
            restitution: 1.2,
            ..PhysicsParameters::default()
        };
        let cue = Ball::at_rest(BallId::CUE, Vector2::zero(), STANDARD_BALL_RADIUS);
        Simulation::new(Table::standard(), params, cue);
    }

    #[test]
    fn test_run_until_rest_on_idle_table() {
        let mut sim = Simulation::standard();
        assert_eq!(sim.run_until_rest(0.01, 10).unwrap(), Some(0));
    }
}
