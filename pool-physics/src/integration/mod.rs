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
//! Numerical integration methods for first-order ODEs
//!
//! This module provides single-step solvers for systems of the form
//! `z' = f(t, z)`. Each solver is a pure function of `(f, h, t, z)`: it holds
//! no buffers and no timestep, so the same scheme can be reused for any axis
//! of any body.
//!
//! # Schemes
//!
//! - **Euler**: first order, one evaluation per step
//! - **Midpoint** (modified Euler): second order, two evaluations
//! - **Heun** (improved Euler): second order, two evaluations
//! - **RK4 (Runge-Kutta 4th order)**: fourth order, four evaluations
//!
//! # State types
//!
//! A state only needs vector-space arithmetic: addition and scaling by `f64`.
//! Plain `f64` works for scalar equations, and [`PhaseState`] carries the
//! `[position, velocity]` pair of a single axis.
//!
//! # Timestep Guidelines
//!
//! The step size `h` must be positive. This is the caller's contract and is
//! not checked here; see [`crate::simulation::validate_timestep`].

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, Mul};

mod euler;
mod heun;
mod midpoint;
mod rk4;
mod strategy;

pub use euler::Euler;
pub use heun::Heun;
pub use midpoint::Midpoint;
pub use rk4::RungeKutta4;
pub use strategy::{Axis, AxisUpdate, Direction, SchemeTable};

/// Vector-space operations required of an ODE state
pub trait OdeState: Copy + Add<Output = Self> + Mul<f64, Output = Self> {}

impl<T> OdeState for T where T: Copy + Add<Output = T> + Mul<f64, Output = T> {}

/// Trait for single-step ODE solvers
///
/// Implementations advance `z` from `t` to `t + h` using only evaluations of
/// `f`. They never mutate anything and never validate `h`.
pub trait StepFunction {
    /// Get the name of this scheme
    fn name(&self) -> &str;

    /// Order of accuracy of the global error
    fn order(&self) -> u32;

    /// Advance the state by one step
    fn step<S, F>(&self, f: &F, h: f64, t: f64, z: S) -> S
    where
        S: OdeState,
        F: Fn(f64, S) -> S;
}

/// Position and velocity along one axis
///
/// # Examples
///
/// ```
/// use pool_physics::integration::{PhaseState, Scheme};
///
/// // Constant deceleration of 1.0 starting at 2.0 units/s
/// let f = |_t: f64, z: PhaseState| PhaseState::new(z.velocity, -1.0);
/// let next = Scheme::Heun.step(&f, 0.5, 0.0, PhaseState::new(0.0, 2.0));
/// assert_eq!(next.velocity, 1.5);
/// assert_eq!(next.position, 0.875);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PhaseState {
    /// Coordinate along the axis
    pub position: f64,
    /// Rate of change of the coordinate
    pub velocity: f64,
}

impl PhaseState {
    /// Create a new phase state
    pub fn new(position: f64, velocity: f64) -> Self {
        PhaseState { position, velocity }
    }

    /// Check if both components are finite
    pub fn is_valid(&self) -> bool {
        self.position.is_finite() && self.velocity.is_finite()
    }
}

impl Add for PhaseState {
    type Output = PhaseState;

    fn add(self, rhs: PhaseState) -> PhaseState {
        PhaseState::new(self.position + rhs.position, self.velocity + rhs.velocity)
    }
}

impl Mul<f64> for PhaseState {
    type Output = PhaseState;

    fn mul(self, rhs: f64) -> PhaseState {
        PhaseState::new(self.position * rhs, self.velocity * rhs)
    }
}

/// The interchangeable single-step schemes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Scheme {
    /// Explicit (forward) Euler
    Euler,
    /// Modified Euler, evaluating the slope at the half step
    Midpoint,
    /// Improved Euler, averaging the slopes at both ends
    Heun,
    /// Classical fourth-order Runge-Kutta
    Rk4,
}

impl Scheme {
    /// All schemes, lowest order first
    pub const ALL: [Scheme; 4] = [Scheme::Euler, Scheme::Midpoint, Scheme::Heun, Scheme::Rk4];

    /// Advance the state by one step with this scheme
    pub fn step<S, F>(&self, f: &F, h: f64, t: f64, z: S) -> S
    where
        S: OdeState,
        F: Fn(f64, S) -> S,
    {
        match self {
            Scheme::Euler => Euler.step(f, h, t, z),
            Scheme::Midpoint => Midpoint.step(f, h, t, z),
            Scheme::Heun => Heun.step(f, h, t, z),
            Scheme::Rk4 => RungeKutta4.step(f, h, t, z),
        }
    }

    /// Get the name of this scheme
    pub fn name(&self) -> &'static str {
        match self {
            Scheme::Euler => "Euler",
            Scheme::Midpoint => "Midpoint",
            Scheme::Heun => "Heun",
            Scheme::Rk4 => "Runge-Kutta 4",
        }
    }

    /// Order of accuracy of the global error
    pub fn order(&self) -> u32 {
        match self {
            Scheme::Euler => Euler.order(),
            Scheme::Midpoint => Midpoint.order(),
            Scheme::Heun => Heun.order(),
            Scheme::Rk4 => RungeKutta4.order(),
        }
    }

    /// Number of evaluations of `f` per step
    pub fn evaluations(&self) -> u32 {
        match self {
            Scheme::Euler => 1,
            Scheme::Midpoint | Scheme::Heun => 2,
            Scheme::Rk4 => 4,
        }
    }
}

impl fmt::Display for Scheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // z' = z, z(0) = 1, exact solution e^t
    fn growth(_t: f64, z: f64) -> f64 {
        z
    }

    #[test]
    fn test_single_step_against_taylor_expansion() {
        let h = 0.1;
        assert!((Scheme::Euler.step(&growth, h, 0.0, 1.0) - 1.1).abs() < 1e-14);
        assert!((Scheme::Midpoint.step(&growth, h, 0.0, 1.0) - 1.105).abs() < 1e-14);
        assert!((Scheme::Heun.step(&growth, h, 0.0, 1.0) - 1.105).abs() < 1e-14);

        let rk4_expected = 1.0 + h + h * h / 2.0 + h.powi(3) / 6.0 + h.powi(4) / 24.0;
        assert!((Scheme::Rk4.step(&growth, h, 0.0, 1.0) - rk4_expected).abs() < 1e-14);
    }

    #[test]
    fn test_global_error_ordering() {
        let h = 0.01;
        let steps = 100;
        let exact = 1.0f64.exp();

        let errors: Vec<f64> = Scheme::ALL
            .iter()
            .map(|scheme| {
                let mut z = 1.0;
                let mut t = 0.0;
                for _ in 0..steps {
                    z = scheme.step(&growth, h, t, z);
                    t += h;
                }
                (z - exact).abs()
            })
            .collect();

        assert!(errors[0] > errors[1], "Euler should be less accurate than midpoint");
        assert!(errors[2] > errors[3], "Heun should be less accurate than RK4");
        assert!(errors[3] < 1e-9, "RK4 error too large: {}", errors[3]);
    }

    #[test]
    fn test_time_dependent_slope() {
        // z' = 2t integrates exactly to t^2 for every scheme of order >= 2
        let f = |t: f64, _z: f64| 2.0 * t;
        for scheme in [Scheme::Midpoint, Scheme::Heun, Scheme::Rk4] {
            let z = scheme.step(&f, 0.5, 1.0, 1.0);
            assert!((z - 2.25).abs() < 1e-12, "{} gave {}", scheme, z);
        }
    }

    #[test]
    fn test_phase_state_arithmetic() {
        let a = PhaseState::new(1.0, -2.0);
        let b = PhaseState::new(0.5, 0.5);
        assert_eq!(a + b, PhaseState::new(1.5, -1.5));
        assert_eq!(a * 2.0, PhaseState::new(2.0, -4.0));
        assert!(a.is_valid());
        assert!(!PhaseState::new(f64::NAN, 0.0).is_valid());
    }

    #[test]
    fn test_scheme_metadata() {
        assert_eq!(Scheme::Rk4.order(), 4);
        assert_eq!(Scheme::Euler.evaluations(), 1);
        assert_eq!(Scheme::Midpoint.to_string(), "Midpoint");
        let parsed: Scheme = serde_json::from_str("\"heun\"").unwrap();
        assert_eq!(parsed, Scheme::Heun);
    }
}
