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
//! # Pool Physics
//!
//! A deterministic 2D billiards physics core for teaching numerical
//! integration and collision response.
//!
//! ## Features
//!
//! - **Selectable Integrators**: Euler, midpoint, Heun and RK4 on a generic ODE state
//! - **Rolling Friction**: constant deceleration that brings balls exactly to rest
//! - **Collisions**: restitution-weighted ball-ball exchange and cushion reflection
//! - **Pockets**: balls are removed from play; the cue ball respawns on its spot
//! - **Frame Step**: fixed phase order and pair order for reproducible runs
//!
//! Rendering, input and audio are left to the caller. Feed a timestep in,
//! read ball positions out.
//!
//! ## Example
//!
//! ```rust
//! use pool_physics::{Ball, BallId, PhysicsParameters, SchemeTable, Vector2};
//!
//! let params = PhysicsParameters::default();
//! let schemes = SchemeTable::default();
//!
//! let mut ball = Ball::new(BallId::new(1), Vector2::zero(), Vector2::new(2.0, 0.0), 0.03);
//! for frame in 0..100 {
//!     ball.integrate(0.1, frame as f64 * 0.1, &params, &schemes);
//! }
//! assert!(ball.is_at_rest());
//! ```
//!
//! Logging goes through the [`log`] facade; install any logger to see
//! pocketing, shots and per-frame traces.

#![warn(missing_docs)]

/// Balls, the active set and rolling friction
pub mod body;

/// Ball-ball, cushion and pocket contacts
pub mod collision;

/// Physical constants and their JSON form
pub mod config;

/// Error types
pub mod error;

/// Numerical integration methods
pub mod integration;

/// Frame step and table setup
pub mod simulation;

/// 2D vector arithmetic
pub mod vector;

pub use body::{ActiveSet, Ball, BallId};
pub use collision::{Pocket, Table};
pub use config::PhysicsParameters;
pub use error::{PhysicsError, Result};
pub use integration::{Scheme, SchemeTable};
pub use simulation::{Simulation, StepReport};
pub use vector::Vector2;
