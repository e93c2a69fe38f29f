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
//! Error types
//!
//! Valid physical input never produces an error: degenerate geometry is
//! handled in place. Errors report caller contract violations at the
//! fallible entry points (parameter loading, stepping, shooting).

use thiserror::Error;

/// Errors reported by the physics core
#[derive(Debug, Error)]
pub enum PhysicsError {
    /// Timestep is zero, negative, NaN or infinite
    #[error("invalid timestep {0}: must be positive and finite")]
    InvalidTimestep(f64),

    /// Ball or pocket radius is not strictly positive
    #[error("invalid radius {0}: must be positive and finite")]
    InvalidRadius(f64),

    /// Restitution coefficient outside `[0, 1]`
    #[error("invalid restitution {0}: must lie in [0, 1]")]
    InvalidRestitution(f64),

    /// Friction coefficient is negative or not finite
    #[error("invalid friction coefficient {0}: must be non-negative and finite")]
    InvalidFriction(f64),

    /// Gravitational acceleration is negative or not finite
    #[error("invalid gravity {0}: must be non-negative and finite")]
    InvalidGravity(f64),

    /// Shot force is negative or not finite
    #[error("invalid shot force {0}: must be non-negative and finite")]
    InvalidForce(f64),

    /// Shot direction cannot be normalized
    #[error("shot direction has zero length or is not finite")]
    DegenerateDirection,

    /// Parameter file could not be parsed
    #[error("failed to parse physics parameters: {0}")]
    Config(#[from] serde_json::Error),
}

/// Result alias used throughout the crate
pub type Result<T> = std::result::Result<T, PhysicsError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_include_offending_value() {
        let msg = PhysicsError::InvalidRestitution(1.5).to_string();
        assert!(msg.contains("1.5"));
        assert!(msg.contains("[0, 1]"));

        let msg = PhysicsError::InvalidTimestep(-0.01).to_string();
        assert!(msg.contains("positive and finite"));
    }

    #[test]
    fn test_config_error_conversion() {
        let parse = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err: PhysicsError = parse.into();
        assert!(matches!(err, PhysicsError::Config(_)));
    }
}
