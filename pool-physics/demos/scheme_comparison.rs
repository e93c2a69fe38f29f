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
//! Scheme comparison example
//!
//! Compares the four step functions two ways:
//!
//! 1. Stopping distance of a ball under rolling friction, against the
//!    closed form v²/(2μg)
//! 2. Global error after one period of a harmonic oscillator, for a few
//!    step sizes

use pool_physics::integration::{AxisUpdate, PhaseState, Scheme};
use pool_physics::{Ball, BallId, PhysicsParameters, SchemeTable, Vector2};
use std::f64::consts::PI;

fn main() {
    println!("Pool Physics - Scheme Comparison");
    println!("================================\n");

    stopping_distance();
    oscillator_error();
}

fn stopping_distance() {
    let params = PhysicsParameters::default();
    let speed = 2.0;
    let exact = speed * speed / (2.0 * params.friction_deceleration());

    println!("Rolling to rest from v = {} (exact distance {:.5})", speed, exact);
    println!("{:<16} {:>8} {:>12} {:>12}", "scheme", "dt", "distance", "error");

    let mut tables = vec![("default table", SchemeTable::default())];
    for scheme in Scheme::ALL {
        tables.push((scheme.name(), SchemeTable::uniform(AxisUpdate::Integrate(scheme))));
    }

    for dt in [0.1, 0.01] {
        for (label, schemes) in &tables {
            let mut ball = Ball::new(BallId::CUE, Vector2::zero(), Vector2::new(speed, 0.0), 0.03);
            let mut t = 0.0;
            while !ball.is_at_rest() {
                ball.integrate(dt, t, &params, schemes);
                t += dt;
            }
            let distance = ball.position().x;
            println!(
                "{:<16} {:>8} {:>12.5} {:>12.2e}",
                label,
                dt,
                distance,
                (distance - exact).abs()
            );
        }
    }
    println!();
}

fn oscillator_error() {
    println!("Harmonic oscillator x'' = -x, one period");
    println!("{:<16} {:>8} {:>12} {:>8}", "scheme", "steps", "error", "ratio");

    let f = |_t: f64, z: PhaseState| PhaseState::new(z.velocity, -z.position);

    for scheme in Scheme::ALL {
        let mut previous: Option<f64> = None;
        for steps in [50usize, 100, 200, 400] {
            let h = 2.0 * PI / steps as f64;
            let mut z = PhaseState::new(1.0, 0.0);
            for i in 0..steps {
                z = scheme.step(&f, h, i as f64 * h, z);
            }
            let error = ((z.position - 1.0).powi(2) + z.velocity.powi(2)).sqrt();
            let ratio = previous.map_or(String::from("-"), |p| format!("{:.2}", p / error));
            println!("{:<16} {:>8} {:>12.3e} {:>8}", scheme.name(), steps, error, ratio);
            previous = Some(error);
        }
    }
    println!("\nA ratio near 2^p means order p: Euler 2, Midpoint/Heun 4, RK4 16.");
}
