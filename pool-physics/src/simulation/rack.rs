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
//! Opening position
//!
//! Fifteen object balls in a five-row triangle. The apex points at the cue
//! ball (towards +y) and each row sits √3·R further down the table, so
//! neighbouring balls are exactly touching:
//!
//! ```text
//!         1          row 0
//!       2   3        row 1
//!     4   5   6      row 2
//!   7   8   9  10    row 3
//! 11  12  13  14  15 row 4
//! ```
//!
//! Ball `k` of row `r` sits at `apex + ((r - 2k)·R, -r·√3·R)`.

use crate::body::{Ball, BallId};
use crate::vector::Vector2;

/// Number of rows in the triangle
pub const RACK_ROWS: usize = 5;

/// Apex of the triangle on the standard table
pub const STANDARD_RACK_APEX: Vector2 = Vector2::new(0.0, -0.15);

/// Where the cue ball starts and respawns on the standard table
pub const STANDARD_CUE_SPOT: Vector2 = Vector2::new(0.0, 0.5);

/// Positions of the racked balls, numbered row by row from the apex
pub fn rack_positions(apex: Vector2, radius: f64) -> Vec<Vector2> {
    let row_step = 3f64.sqrt() * radius;
    let mut positions = Vec::with_capacity(RACK_ROWS * (RACK_ROWS + 1) / 2);
    for row in 0..RACK_ROWS {
        for k in 0..=row {
            let offset = row as f64 - 2.0 * k as f64;
            positions.push(Vector2::new(
                apex.x + offset * radius,
                apex.y - row as f64 * row_step,
            ));
        }
    }
    positions
}

/// Build the fifteen object balls at rest, numbered 1 to 15
pub fn triangle_rack(apex: Vector2, radius: f64) -> Vec<Ball> {
    rack_positions(apex, radius)
        .into_iter()
        .enumerate()
        .map(|(index, position)| Ball::at_rest(BallId::new(index as u8 + 1), position, radius))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::body::STANDARD_BALL_RADIUS;
    use crate::collision::Table;

    #[test]
    fn test_rack_has_fifteen_balls() {
        let rack = triangle_rack(STANDARD_RACK_APEX, STANDARD_BALL_RADIUS);
        assert_eq!(rack.len(), 15);
        assert_eq!(rack[0].id(), BallId::new(1));
        assert_eq!(rack[14].id(), BallId::new(15));
        assert_eq!(rack[0].position(), STANDARD_RACK_APEX);
    }

    #[test]
    fn test_neighbours_touch_without_overlap() {
        let r = STANDARD_BALL_RADIUS;
        let positions = rack_positions(STANDARD_RACK_APEX, r);
        for (i, a) in positions.iter().enumerate() {
            for b in positions.iter().skip(i + 1) {
                let d = a.distance(*b);
                assert!(d > 2.0 * r - 1e-9, "balls overlap: {}", d);
            }
        }
        // Row 1, left ball touches the apex
        assert!((positions[0].distance(positions[1]) - 2.0 * r).abs() < 1e-12);
    }

    #[test]
    fn test_rack_fits_standard_table() {
        let table = Table::standard();
        for ball in triangle_rack(STANDARD_RACK_APEX, STANDARD_BALL_RADIUS) {
            assert!(table.contains(&ball));
        }
    }

    #[test]
    fn test_back_row_spacing() {
        let r = 0.5;
        let positions = rack_positions(Vector2::zero(), r);
        let back: Vec<f64> = positions[10..].iter().map(|p| p.x).collect();
        assert_eq!(back, vec![2.0, 1.0, 0.0, -1.0, -2.0]);
        assert!((positions[10].y + 4.0 * 3f64.sqrt() * r).abs() < 1e-12);
    }
}
