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
//! Explicit midpoint method ("modified Euler")
//!
//! ```text
//! z_half   = z(t) + (h/2)*f(t, z)
//! z(t + h) = z(t) + h*f(t + h/2, z_half)
//! ```
//!
//! Second-order accurate with two evaluations per step.

use super::{OdeState, StepFunction};

/// Midpoint step function
#[derive(Debug, Clone, Copy, Default)]
pub struct Midpoint;

impl StepFunction for Midpoint {
    fn name(&self) -> &str {
        "Midpoint"
    }

    fn order(&self) -> u32 {
        2
    }

    fn step<S, F>(&self, f: &F, h: f64, t: f64, z: S) -> S
    where
        S: OdeState,
        F: Fn(f64, S) -> S,
    {
        let h_2 = h * 0.5;
        let f_n = f(t, z);
        z + f(t + h_2, z + f_n * h_2) * h
    }
}
