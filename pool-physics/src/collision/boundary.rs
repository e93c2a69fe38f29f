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
//! Table cushions
//!
//! The playing surface is a rectangle centred on the origin. A ball touches
//! a cushion when its edge, not its centre, crosses the wall, so each wall is
//! effectively offset inward by the ball radius.

use crate::body::Ball;
use crate::vector::Vector2;
use log::debug;
use serde::{Deserialize, Serialize};

/// Width of a regulation play area in table units
pub const STANDARD_TABLE_WIDTH: f64 = 1.46;

/// Length of a regulation play area in table units
pub const STANDARD_TABLE_HEIGHT: f64 = 2.74;

/// Rectangular play area centred on the origin
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Table {
    half_width: f64,
    half_height: f64,
}

impl Table {
    /// Create a table from its full width and height
    ///
    /// # Panics
    ///
    /// Panics if either dimension is non-positive, NaN, or infinite
    pub fn new(width: f64, height: f64) -> Self {
        assert!(
            width > 0.0 && width.is_finite() && height > 0.0 && height.is_finite(),
            "Table dimensions must be positive and finite"
        );
        Table {
            half_width: width * 0.5,
            half_height: height * 0.5,
        }
    }

    /// Regulation 1.46 x 2.74 table
    pub fn standard() -> Self {
        Table::new(STANDARD_TABLE_WIDTH, STANDARD_TABLE_HEIGHT)
    }

    /// Half the width
    pub fn half_width(&self) -> f64 {
        self.half_width
    }

    /// Half the height
    pub fn half_height(&self) -> f64 {
        self.half_height
    }

    /// Full width
    pub fn width(&self) -> f64 {
        self.half_width * 2.0
    }

    /// Full height
    pub fn height(&self) -> f64 {
        self.half_height * 2.0
    }

    /// Check if a ball lies entirely inside the cushions
    pub fn contains(&self, ball: &Ball) -> bool {
        let p = ball.position();
        let r = ball.radius();
        p.x.abs() + r <= self.half_width && p.y.abs() + r <= self.half_height
    }

    /// The four corners, counter-clockwise from bottom-left
    pub fn corners(&self) -> [Vector2; 4] {
        let (w, h) = (self.half_width, self.half_height);
        [
            Vector2::new(-w, -h),
            Vector2::new(w, -h),
            Vector2::new(w, h),
            Vector2::new(-w, h),
        ]
    }
}

impl Default for Table {
    fn default() -> Self {
        Table::standard()
    }
}

/// Bounce a ball off any cushion it has crossed
///
/// For every wall the ball's edge has passed, the velocity component
/// perpendicular to that wall is made to point back into the table with its
/// magnitude unchanged. A ball already heading inward is left alone, so
/// calling this repeatedly while the ball is still past the wall is harmless.
/// Returns true if the velocity changed.
pub fn collide_with_border(ball: &mut Ball, table: &Table) -> bool {
    let p = ball.position();
    let r = ball.radius();
    let mut v = ball.velocity();

    if p.x + r > table.half_width {
        v.x = -v.x.abs();
    }
    if p.x - r < -table.half_width {
        v.x = v.x.abs();
    }
    if p.y + r > table.half_height {
        v.y = -v.y.abs();
    }
    if p.y - r < -table.half_height {
        v.y = v.y.abs();
    }

    if v == ball.velocity() {
        return false;
    }
    debug!("{} hit a cushion at ({:.4}, {:.4})", ball.id(), p.x, p.y);
    ball.set_velocity(v);
    true
}
