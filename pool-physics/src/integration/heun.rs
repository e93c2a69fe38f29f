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
//! Heun's method ("improved Euler")
//!
//! ```text
//! predictor = z(t) + h*f(t, z)
//! z(t + h)  = z(t) + (h/2)*(f(t, z) + f(t + h, predictor))
//! ```
//!
//! Second-order accurate. The trapezoidal average of the slopes at both ends
//! of the step.

use super::{OdeState, StepFunction};

/// Heun step function
#[derive(Debug, Clone, Copy, Default)]
pub struct Heun;

impl StepFunction for Heun {
    fn name(&self) -> &str {
        "Heun"
    }

    fn order(&self) -> u32 {
        2
    }

    fn step<S, F>(&self, f: &F, h: f64, t: f64, z: S) -> S
    where
        S: OdeState,
        F: Fn(f64, S) -> S,
    {
        let f_n = f(t, z);
        let predictor = z + f_n * h;
        z + (f_n + f(t + h, predictor)) * (h * 0.5)
    }
}
