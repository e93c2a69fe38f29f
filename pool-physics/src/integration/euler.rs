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
//! Explicit Euler
//!
//! ```text
//! z(t + h) = z(t) + h*f(t, z)
//! ```
//!
//! First-order accurate. Cheapest scheme, one evaluation per step.

use super::{OdeState, StepFunction};

/// Forward Euler step function
#[derive(Debug, Clone, Copy, Default)]
pub struct Euler;

impl StepFunction for Euler {
    fn name(&self) -> &str {
        "Euler"
    }

    fn order(&self) -> u32 {
        1
    }

    fn step<S, F>(&self, f: &F, h: f64, t: f64, z: S) -> S
    where
        S: OdeState,
        F: Fn(f64, S) -> S,
    {
        z + f(t, z) * h
    }
}
