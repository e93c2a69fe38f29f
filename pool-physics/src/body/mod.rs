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
//! Balls and the set of balls still in play
//!
//! A [`Ball`] is a circular body with a fixed radius and a planar position
//! and velocity. All balls have the same (unit) mass, which is what lets the
//! collision response work on velocities alone.

use crate::config::PhysicsParameters;
use crate::error::{PhysicsError, Result};
use crate::integration::SchemeTable;
use crate::vector::Vector2;
use std::fmt;

mod active_set;
mod friction;

pub use active_set::ActiveSet;
pub use friction::advance_axis;

/// Per-axis speed below which a ball is considered at rest
pub const REST_EPSILON: f64 = 5e-3;

/// Radius of a regulation ball in table units
pub const STANDARD_BALL_RADIUS: f64 = 0.028875;

/// Identifier of a ball, its number on the table
///
/// Number 0 is the cue ball.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BallId(u8);

impl BallId {
    /// The cue ball
    pub const CUE: BallId = BallId(0);

    /// Create an identifier from a ball number
    pub fn new(number: u8) -> Self {
        BallId(number)
    }

    /// Get the ball number
    pub fn number(&self) -> u8 {
        self.0
    }

    /// Check if this is the cue ball
    pub fn is_cue(&self) -> bool {
        self.0 == 0
    }
}

impl fmt::Display for BallId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_cue() {
            write!(f, "Ball(cue)")
        } else {
            write!(f, "Ball({})", self.0)
        }
    }
}

/// A circular body on the table
///
/// # Examples
///
/// ```
/// use pool_physics::{Ball, BallId, Vector2};
///
/// let ball = Ball::at_rest(BallId::new(8), Vector2::new(0.0, -0.3), 0.028875);
/// assert!(ball.is_at_rest());
/// assert_eq!(ball.kinetic_energy(), 0.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ball {
    id: BallId,
    position: Vector2,
    velocity: Vector2,
    radius: f64,
}

impl Ball {
    /// Create a new ball
    ///
    /// # Panics
    ///
    /// Panics if radius is non-positive, NaN, or infinite
    pub fn new(id: BallId, position: Vector2, velocity: Vector2, radius: f64) -> Self {
        assert!(
            radius > 0.0 && radius.is_finite(),
            "Radius must be positive and finite"
        );
        Ball {
            id,
            position,
            velocity,
            radius,
        }
    }

    /// Create a new ball, reporting a bad radius instead of panicking
    pub fn try_new(id: BallId, position: Vector2, velocity: Vector2, radius: f64) -> Result<Self> {
        if radius > 0.0 && radius.is_finite() {
            Ok(Ball::new(id, position, velocity, radius))
        } else {
            Err(PhysicsError::InvalidRadius(radius))
        }
    }

    /// Create a ball with zero velocity
    pub fn at_rest(id: BallId, position: Vector2, radius: f64) -> Self {
        Ball::new(id, position, Vector2::zero(), radius)
    }

    /// Get the identifier
    pub fn id(&self) -> BallId {
        self.id
    }

    /// Get the centre position
    pub fn position(&self) -> Vector2 {
        self.position
    }

    /// Get the velocity
    pub fn velocity(&self) -> Vector2 {
        self.velocity
    }

    /// Get the radius
    pub fn radius(&self) -> f64 {
        self.radius
    }

    /// Move the centre
    pub fn set_position(&mut self, position: Vector2) {
        self.position = position;
    }

    /// Replace the velocity
    pub fn set_velocity(&mut self, velocity: Vector2) {
        self.velocity = velocity;
    }

    /// Magnitude of the velocity
    pub fn speed(&self) -> f64 {
        self.velocity.length()
    }

    /// Check if the ball is slower than [`REST_EPSILON`]
    pub fn is_at_rest(&self) -> bool {
        self.speed() < REST_EPSILON
    }

    /// Kinetic energy for unit mass, 0.5 * v²
    pub fn kinetic_energy(&self) -> f64 {
        0.5 * self.velocity.length_squared()
    }

    /// Check if position and velocity are finite
    pub fn is_valid(&self) -> bool {
        self.position.is_valid() && self.velocity.is_valid()
    }

    /// Advance the ball by `dt` under rolling friction
    ///
    /// Each axis is updated independently by [`advance_axis`]. Axes slower
    /// than [`REST_EPSILON`] are snapped to zero velocity and do not move.
    /// `dt` is trusted; no validation happens here.
    pub fn integrate(&mut self, dt: f64, t: f64, params: &PhysicsParameters, schemes: &SchemeTable) {
        friction::integrate_ball(self, dt, t, params.friction_deceleration(), schemes);
    }

    /// Strike the ball
    ///
    /// Sets the velocity to `force * normalize(direction)`. Callers are
    /// expected to check that the table is at rest first; nothing here
    /// enforces it. On error the velocity is left unchanged.
    pub fn shoot(&mut self, direction: Vector2, force: f64) -> Result<()> {
        if !(force >= 0.0 && force.is_finite()) {
            return Err(PhysicsError::InvalidForce(force));
        }
        let unit = direction
            .normalized()
            .ok_or(PhysicsError::DegenerateDirection)?;
        self.velocity = unit * force;
        Ok(())
    }
}

impl fmt::Display for Ball {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} at ({:.4}, {:.4}) moving ({:.4}, {:.4})",
            self.id, self.position.x, self.position.y, self.velocity.x, self.velocity.y
        )
    }
}

/// Total kinetic energy of a group of balls
pub fn total_kinetic_energy<'a, I>(balls: I) -> f64
where
    I: IntoIterator<Item = &'a Ball>,
{
    balls.into_iter().map(Ball::kinetic_energy).sum()
}

/// Total linear momentum of a group of balls (unit masses)
pub fn total_momentum<'a, I>(balls: I) -> Vector2
where
    I: IntoIterator<Item = &'a Ball>,
{
    balls
        .into_iter()
        .fold(Vector2::zero(), |acc, ball| acc + ball.velocity())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ball_creation() {
        let ball = Ball::new(BallId::new(3), Vector2::new(0.1, 0.2), Vector2::new(1.0, 0.0), 0.03);
        assert_eq!(ball.id().number(), 3);
        assert_eq!(ball.radius(), 0.03);
        assert_eq!(ball.speed(), 1.0);
        assert!(!ball.is_at_rest());
        assert!(ball.is_valid());
    }

    #[test]
    #[should_panic(expected = "Radius must be positive and finite")]
    fn test_zero_radius_panics() {
        Ball::at_rest(BallId::new(1), Vector2::zero(), 0.0);
    }

    #[test]
    #[should_panic(expected = "Radius must be positive and finite")]
    fn test_nan_radius_panics() {
        Ball::at_rest(BallId::new(1), Vector2::zero(), f64::NAN);
    }

    #[test]
    fn test_try_new_reports_bad_radius() {
        let err = Ball::try_new(BallId::new(1), Vector2::zero(), Vector2::zero(), -0.03).unwrap_err();
        assert!(matches!(err, PhysicsError::InvalidRadius(r) if r == -0.03));
        assert!(Ball::try_new(BallId::new(1), Vector2::zero(), Vector2::zero(), 0.03).is_ok());
    }

    #[test]
    fn test_shoot_normalizes_direction() {
        let mut ball = Ball::at_rest(BallId::CUE, Vector2::zero(), 0.03);
        ball.shoot(Vector2::new(0.0, -10.0), 3.0).unwrap();
        assert_eq!(ball.velocity(), Vector2::new(0.0, -3.0));
    }

    #[test]
    fn test_shoot_rejects_zero_direction() {
        let mut ball = Ball::new(BallId::CUE, Vector2::zero(), Vector2::new(0.5, 0.0), 0.03);
        let err = ball.shoot(Vector2::zero(), 3.0).unwrap_err();
        assert!(matches!(err, PhysicsError::DegenerateDirection));
        assert_eq!(ball.velocity(), Vector2::new(0.5, 0.0));
    }

    #[test]
    fn test_shoot_rejects_negative_force() {
        let mut ball = Ball::at_rest(BallId::CUE, Vector2::zero(), 0.03);
        assert!(matches!(
            ball.shoot(Vector2::unit_y(), -1.0),
            Err(PhysicsError::InvalidForce(_))
        ));
    }

    #[test]
    fn test_energy_and_momentum_totals() {
        let a = Ball::new(BallId::new(1), Vector2::zero(), Vector2::new(1.0, 0.0), 0.03);
        let b = Ball::new(BallId::new(2), Vector2::zero(), Vector2::new(0.0, -2.0), 0.03);
        let balls = [a, b];
        assert!((total_kinetic_energy(&balls) - 2.5).abs() < 1e-12);
        assert_eq!(total_momentum(&balls), Vector2::new(1.0, -2.0));
    }

    #[test]
    fn test_display() {
        assert_eq!(BallId::CUE.to_string(), "Ball(cue)");
        assert_eq!(BallId::new(9).to_string(), "Ball(9)");
    }
}
