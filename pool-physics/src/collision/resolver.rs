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
//! Ball-ball collision detection and response
//!
//! Contacts are frictionless and masses are equal. Velocities are split
//! along the line of centres (normal) and perpendicular to it (tangent);
//! only the normal components are exchanged:
//!
//! ```text
//! a_n' = (a_n (1 - c) + b_n (1 + c)) / 2
//! b_n' = (b_n (1 - c) + a_n (1 + c)) / 2
//! ```
//!
//! With c = 1 the normal components swap. With c = 0 both leave with the
//! mean normal velocity. Momentum is conserved for every c and kinetic
//! energy never increases.

use crate::body::Ball;
use crate::vector::Vector2;
use log::{debug, warn};

/// Check if two balls overlap
///
/// True iff the distance between centres is strictly less than the sum of
/// the radii. Balls exactly touching do not collide.
pub fn are_colliding(a: &Ball, b: &Ball) -> bool {
    let reach = a.radius() + b.radius();
    (b.position() - a.position()).length_squared() < reach * reach
}

/// Unit normal pointing from `a` to `b`
///
/// Coincident centres have no defined normal; +x is used instead so the
/// response stays deterministic.
pub fn contact_normal(a: &Ball, b: &Ball) -> Vector2 {
    match (b.position() - a.position()).normalized() {
        Some(normal) => normal,
        None => {
            warn!(
                "{} and {} share a centre, using +x as contact normal",
                a.id(),
                b.id()
            );
            Vector2::unit_x()
        }
    }
}

/// Resolve a collision between two balls
///
/// Does nothing unless the balls overlap and are approaching along the
/// contact normal, so a pair that is still overlapping after being resolved
/// is not resolved again on the next frame. Returns true if the velocities
/// were changed.
///
/// # Examples
///
/// ```
/// use pool_physics::{Ball, BallId, Vector2};
/// use pool_physics::collision::collide;
///
/// let mut a = Ball::new(BallId::new(1), Vector2::new(-0.029, 0.0), Vector2::new(1.0, 0.0), 0.03);
/// let mut b = Ball::new(BallId::new(2), Vector2::new(0.029, 0.0), Vector2::new(-1.0, 0.0), 0.03);
/// assert!(collide(&mut a, &mut b, 1.0));
/// assert!((a.velocity().x + 1.0).abs() < 1e-12);
/// assert!((b.velocity().x - 1.0).abs() < 1e-12);
/// ```
pub fn collide(a: &mut Ball, b: &mut Ball, restitution: f64) -> bool {
    debug_assert!(
        (0.0..=1.0).contains(&restitution),
        "Restitution must lie in [0, 1]"
    );

    if !are_colliding(a, b) {
        return false;
    }

    let normal = contact_normal(a, b);
    let tangent = normal.perp();

    let va = a.velocity();
    let vb = b.velocity();

    let a_n = va.dot(normal);
    let b_n = vb.dot(normal);

    // Separating or resting relative to each other
    if b_n - a_n >= 0.0 {
        return false;
    }

    let a_t = va.dot(tangent);
    let b_t = vb.dot(tangent);

    let new_a_n = (a_n * (1.0 - restitution) + b_n * (1.0 + restitution)) * 0.5;
    let new_b_n = (b_n * (1.0 - restitution) + a_n * (1.0 + restitution)) * 0.5;

    a.set_velocity(normal * new_a_n + tangent * a_t);
    b.set_velocity(normal * new_b_n + tangent * b_t);

    debug!(
        "resolved {} / {}: normal speeds {:.4}, {:.4} -> {:.4}, {:.4}",
        a.id(),
        b.id(),
        a_n,
        b_n,
        new_a_n,
        new_b_n
    );
    true
}
