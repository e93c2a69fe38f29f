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
//! Per-axis integrator selection
//!
//! Friction is applied to each axis of a ball independently, and the update
//! rule for an axis depends on which way the ball is travelling along it.
//! [`SchemeTable`] is the decision table keyed on `(axis, direction)`.
//!
//! The default table reproduces the classic table behaviour:
//!
//! | axis | direction  | update                |
//! |------|------------|-----------------------|
//! | x    | forward    | direct                |
//! | x    | backward   | midpoint              |
//! | y    | forward    | direct                |
//! | y    | backward   | Heun                  |
//!
//! Under constant deceleration the midpoint, Heun and RK4 schemes produce
//! the same state, so swapping any of them in keeps the trajectory.

use super::Scheme;
use serde::{Deserialize, Serialize};

/// Axis of the table plane
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Axis {
    /// Short side of the table
    X,
    /// Long side of the table
    Y,
}

impl Axis {
    /// Both axes in update order
    pub const ALL: [Axis; 2] = [Axis::X, Axis::Y];
}

/// Sign of the velocity along an axis
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    /// Velocity is zero or positive
    Forward,
    /// Velocity is negative
    Backward,
}

impl Direction {
    /// Classify a velocity component
    pub fn of(velocity: f64) -> Direction {
        if velocity >= 0.0 {
            Direction::Forward
        } else {
            Direction::Backward
        }
    }

    /// +1 for forward, -1 for backward
    pub fn sign(&self) -> f64 {
        match self {
            Direction::Forward => 1.0,
            Direction::Backward => -1.0,
        }
    }
}

/// How one axis is advanced for one step
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AxisUpdate {
    /// Update velocity first, then move with the new velocity
    Direct,
    /// Integrate `[position, velocity]` with a step function
    Integrate(Scheme),
}

/// Decision table mapping `(axis, direction)` to an [`AxisUpdate`]
///
/// # Examples
///
/// ```
/// use pool_physics::integration::{Axis, AxisUpdate, Direction, Scheme, SchemeTable};
///
/// let table = SchemeTable::default().with(Axis::Y, Direction::Backward, AxisUpdate::Integrate(Scheme::Rk4));
/// assert_eq!(table.lookup(Axis::Y, Direction::Backward), AxisUpdate::Integrate(Scheme::Rk4));
/// assert_eq!(table.lookup(Axis::X, Direction::Forward), AxisUpdate::Direct);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SchemeTable {
    x_forward: AxisUpdate,
    x_backward: AxisUpdate,
    y_forward: AxisUpdate,
    y_backward: AxisUpdate,
}

impl SchemeTable {
    /// Use the same update everywhere
    pub fn uniform(update: AxisUpdate) -> Self {
        SchemeTable {
            x_forward: update,
            x_backward: update,
            y_forward: update,
            y_backward: update,
        }
    }

    /// Replace one entry
    pub fn with(mut self, axis: Axis, direction: Direction, update: AxisUpdate) -> Self {
        *self.entry_mut(axis, direction) = update;
        self
    }

    /// Look up the update for an axis moving in a direction
    pub fn lookup(&self, axis: Axis, direction: Direction) -> AxisUpdate {
        match (axis, direction) {
            (Axis::X, Direction::Forward) => self.x_forward,
            (Axis::X, Direction::Backward) => self.x_backward,
            (Axis::Y, Direction::Forward) => self.y_forward,
            (Axis::Y, Direction::Backward) => self.y_backward,
        }
    }

    fn entry_mut(&mut self, axis: Axis, direction: Direction) -> &mut AxisUpdate {
        match (axis, direction) {
            (Axis::X, Direction::Forward) => &mut self.x_forward,
            (Axis::X, Direction::Backward) => &mut self.x_backward,
            (Axis::Y, Direction::Forward) => &mut self.y_forward,
            (Axis::Y, Direction::Backward) => &mut self.y_backward,
        }
    }
}

impl Default for SchemeTable {
    fn default() -> Self {
        SchemeTable {
            x_forward: AxisUpdate::Direct,
            x_backward: AxisUpdate::Integrate(Scheme::Midpoint),
            y_forward: AxisUpdate::Direct,
            y_backward: AxisUpdate::Integrate(Scheme::Heun),
        }
    }
}
