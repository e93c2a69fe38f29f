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
//! Pockets

use super::Table;
use crate::body::{ActiveSet, Ball, BallId};
use crate::vector::Vector2;
use log::info;
use serde::{Deserialize, Serialize};

/// Radius of a regulation pocket in table units
pub const STANDARD_POCKET_RADIUS: f64 = 0.05;

/// A circular hole in the table
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Pocket {
    center: Vector2,
    radius: f64,
}

impl Pocket {
    /// Create a pocket
    ///
    /// # Panics
    ///
    /// Panics if radius is non-positive, NaN, or infinite
    pub fn new(center: Vector2, radius: f64) -> Self {
        assert!(
            radius > 0.0 && radius.is_finite(),
            "Pocket radius must be positive and finite"
        );
        Pocket { center, radius }
    }

    /// Centre of the hole
    pub fn center(&self) -> Vector2 {
        self.center
    }

    /// Radius of the hole
    pub fn radius(&self) -> f64 {
        self.radius
    }

    /// Check if a ball overlaps the hole
    pub fn captures(&self, ball: &Ball) -> bool {
        let reach = ball.radius() + self.radius;
        (ball.position() - self.center).length_squared() < reach * reach
    }
}

/// Four corner pockets followed by the two side pockets on the long cushions
pub fn standard_pockets(table: &Table, radius: f64) -> Vec<Pocket> {
    let side = table.half_width();
    let mut pockets: Vec<Pocket> = table
        .corners()
        .iter()
        .map(|&corner| Pocket::new(corner, radius))
        .collect();
    pockets.push(Pocket::new(Vector2::new(-side, 0.0), radius));
    pockets.push(Pocket::new(Vector2::new(side, 0.0), radius));
    pockets
}

/// Sink a ball if it overlaps a pocket
///
/// The ball is removed from the active set for good and returned. Returns
/// `None`, changing nothing, if the ball is not in play or misses the pocket.
pub fn collide_with_hole(active: &mut ActiveSet, id: BallId, pocket: &Pocket) -> Option<Ball> {
    let captured = active.get(id).map_or(false, |ball| pocket.captures(ball));
    if !captured {
        return None;
    }
    let ball = active.remove(id)?;
    info!(
        "{} pocketed at ({:.3}, {:.3})",
        id, pocket.center.x, pocket.center.y
    );
    Some(ball)
}
