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
//! Rolling friction on the cloth
//!
//! The cloth decelerates a ball at a constant rate μg opposing its motion.
//! Each axis obeys
//!
//! ```text
//! p' = v
//! v' = -sign(v) * μg
//! ```
//!
//! and is advanced on its own with the update chosen by the
//! [`SchemeTable`]. Friction only brings a ball to rest; it never reverses
//! it. A component whose sign would flip in one step is set to zero instead.

use super::{Ball, REST_EPSILON};
use crate::integration::{Axis, AxisUpdate, Direction, PhaseState, SchemeTable};
use crate::vector::Vector2;

/// Advance one axis of a ball by `dt`
///
/// 1. `|v| < REST_EPSILON`: velocity snaps to zero and the position is kept.
/// 2. Otherwise the table entry for `(axis, sign(v))` decides the update:
///    [`AxisUpdate::Direct`] applies the deceleration to the velocity and
///    then moves with the new velocity, [`AxisUpdate::Integrate`] runs the
///    selected step function on `[p, v]`.
///
/// # Examples
///
/// ```
/// use pool_physics::body::advance_axis;
/// use pool_physics::integration::{Axis, PhaseState, SchemeTable};
///
/// let next = advance_axis(PhaseState::new(0.0, 2.0), Axis::X, 0.1, 0.0, 0.49, &SchemeTable::default());
/// assert!((next.velocity - 1.951).abs() < 1e-12);
/// assert!((next.position - 0.1951).abs() < 1e-12);
/// ```
pub fn advance_axis(
    state: PhaseState,
    axis: Axis,
    dt: f64,
    t: f64,
    deceleration: f64,
    schemes: &SchemeTable,
) -> PhaseState {
    debug_assert!(
        deceleration >= 0.0 && deceleration.is_finite(),
        "Friction deceleration must be non-negative and finite"
    );

    if state.velocity.abs() < REST_EPSILON {
        return PhaseState::new(state.position, 0.0);
    }

    let direction = Direction::of(state.velocity);
    let acceleration = -direction.sign() * deceleration;

    match schemes.lookup(axis, direction) {
        AxisUpdate::Direct => {
            let velocity = stop_on_reversal(state.velocity, state.velocity + acceleration * dt);
            PhaseState::new(state.position + velocity * dt, velocity)
        }
        AxisUpdate::Integrate(scheme) => {
            let f = |_t: f64, z: PhaseState| PhaseState::new(z.velocity, acceleration);
            let next = scheme.step(&f, dt, t, state);
            PhaseState::new(next.position, stop_on_reversal(state.velocity, next.velocity))
        }
    }
}

fn stop_on_reversal(before: f64, after: f64) -> f64 {
    if before * after < 0.0 {
        0.0
    } else {
        after
    }
}

pub(super) fn integrate_ball(
    ball: &mut Ball,
    dt: f64,
    t: f64,
    deceleration: f64,
    schemes: &SchemeTable,
) {
    let x = advance_axis(
        PhaseState::new(ball.position.x, ball.velocity.x),
        Axis::X,
        dt,
        t,
        deceleration,
        schemes,
    );
    let y = advance_axis(
        PhaseState::new(ball.position.y, ball.velocity.y),
        Axis::Y,
        dt,
        t,
        deceleration,
        schemes,
    );

    ball.position = Vector2::new(x.position, y.position);
    ball.velocity = Vector2::new(x.velocity, y.velocity);
}
