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
//! Collision detection and response
//!
//! Three kinds of contact are handled, all as instantaneous velocity
//! changes after integration:
//!
//! - **Ball-ball**: overlap test and restitution-weighted exchange of normal
//!   velocity ([`collide`])
//! - **Ball-cushion**: reflection of the perpendicular velocity component
//!   ([`collide_with_border`])
//! - **Ball-pocket**: permanent removal from play ([`collide_with_hole`])
//!
//! Detection is discrete. A ball moving more than its radius in one step
//! can pass through another ball or a cushion; keep the timestep small
//! enough that this does not happen.

mod boundary;
mod pocket;
mod resolver;

pub use boundary::{collide_with_border, Table, STANDARD_TABLE_HEIGHT, STANDARD_TABLE_WIDTH};
pub use pocket::{collide_with_hole, standard_pockets, Pocket, STANDARD_POCKET_RADIUS};
pub use resolver::{are_colliding, collide, contact_normal};
