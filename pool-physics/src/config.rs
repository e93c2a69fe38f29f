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
//! Physics parameters
//!
//! Parameters are read once at start-up and passed by reference into every
//! step. They can be built in code or deserialized from a JSON document such
//! as:
//!
//! ```json
//! { "fricción": 0.5, "restitución": 0.9999 }
//! ```
//!
//! English keys (`friction`, `restitution`, `gravity`) are accepted as
//! aliases. Gravity is optional and defaults to [`DEFAULT_GRAVITY`].

use crate::error::{PhysicsError, Result};
use serde::{Deserialize, Serialize};
use std::io::Read;

/// Default friction coefficient (μ) between ball and cloth
pub const DEFAULT_FRICTION: f64 = 0.5;

/// Default gravitational acceleration in table units per second squared
pub const DEFAULT_GRAVITY: f64 = 0.98;

/// Default coefficient of restitution for ball-ball contacts
pub const DEFAULT_RESTITUTION: f64 = 0.9999;

fn default_gravity() -> f64 {
    DEFAULT_GRAVITY
}

/// Process-wide physical constants consumed by every step
///
/// # Examples
///
/// ```
/// use pool_physics::PhysicsParameters;
///
/// let params = PhysicsParameters::from_json_str(r#"{"fricción": 0.5, "restitución": 1.0}"#).unwrap();
/// assert!((params.friction_deceleration() - 0.49).abs() < 1e-12);
/// assert_eq!(params.restitution, 1.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PhysicsParameters {
    /// Rolling friction coefficient μ
    #[serde(rename = "fricción", alias = "friction")]
    pub friction: f64,

    /// Coefficient of restitution c in `[0, 1]`
    #[serde(rename = "restitución", alias = "restitution")]
    pub restitution: f64,

    /// Gravitational acceleration g
    #[serde(rename = "gravedad", alias = "gravity", default = "default_gravity")]
    pub gravity: f64,
}

impl PhysicsParameters {
    /// Create validated parameters
    pub fn new(friction: f64, gravity: f64, restitution: f64) -> Result<Self> {
        let params = PhysicsParameters {
            friction,
            restitution,
            gravity,
        };
        params.validate()?;
        Ok(params)
    }

    /// Parse and validate parameters from a JSON string
    pub fn from_json_str(json: &str) -> Result<Self> {
        let params: PhysicsParameters = serde_json::from_str(json)?;
        params.validate()?;
        Ok(params)
    }

    /// Parse and validate parameters from any reader yielding JSON
    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        let params: PhysicsParameters = serde_json::from_reader(reader)?;
        params.validate()?;
        Ok(params)
    }

    /// Serialize to a JSON string using the canonical keys
    pub fn to_json_string(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Check every parameter against its physical range
    pub fn validate(&self) -> Result<()> {
        if !(self.friction >= 0.0 && self.friction.is_finite()) {
            return Err(PhysicsError::InvalidFriction(self.friction));
        }
        if !(self.gravity >= 0.0 && self.gravity.is_finite()) {
            return Err(PhysicsError::InvalidGravity(self.gravity));
        }
        if !(0.0..=1.0).contains(&self.restitution) {
            return Err(PhysicsError::InvalidRestitution(self.restitution));
        }
        Ok(())
    }

    /// Magnitude of the friction deceleration μg
    pub fn friction_deceleration(&self) -> f64 {
        self.friction * self.gravity
    }

    /// Replace the restitution coefficient
    pub fn with_restitution(mut self, restitution: f64) -> Result<Self> {
        self.restitution = restitution;
        self.validate()?;
        Ok(self)
    }

    /// Frictionless, perfectly elastic parameters
    pub fn frictionless_elastic() -> Self {
        PhysicsParameters {
            friction: 0.0,
            restitution: 1.0,
            gravity: DEFAULT_GRAVITY,
        }
    }
}

impl Default for PhysicsParameters {
    fn default() -> Self {
        PhysicsParameters {
            friction: DEFAULT_FRICTION,
            restitution: DEFAULT_RESTITUTION,
            gravity: DEFAULT_GRAVITY,
        }
    }
}
