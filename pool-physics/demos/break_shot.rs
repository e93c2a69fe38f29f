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
//! Break shot example
//!
//! Racks fifteen balls, breaks with the cue ball and runs the table at a
//! fixed 240 Hz until everything stops, printing what happened.
//!
//! Optionally pass a JSON parameter file as the first argument:
//!
//! ```text
//! cargo run --example break_shot -- params.json
//! ```

use pool_physics::{PhysicsParameters, Simulation, Vector2};
use std::error::Error;
use std::fs::File;

const DT: f64 = 1.0 / 240.0;
const MAX_FRAMES: u64 = 240 * 120;

fn main() -> Result<(), Box<dyn Error>> {
    println!("Pool Physics - Break Shot Example");
    println!("=================================\n");

    let mut sim = Simulation::standard();
    if let Some(path) = std::env::args().nth(1) {
        let file = File::open(&path)?;
        sim.set_params(PhysicsParameters::from_reader(file)?)?;
        println!("Loaded parameters from {}", path);
    }

    let params = *sim.params();
    println!("Friction:    μ = {}", params.friction);
    println!("Gravity:     g = {}", params.gravity);
    println!("Restitution: c = {}", params.restitution);
    println!("Balls racked: {}\n", sim.balls().len());

    sim.shoot(Vector2::new(0.01, -1.0), 3.0)?;
    println!("Break! Kinetic energy: {:.4}\n", sim.total_kinetic_energy());

    let mut collisions = 0;
    let mut cushion_hits = 0;
    let mut scratches = 0;
    while !sim.can_shoot() && sim.frame() < MAX_FRAMES {
        let report = sim.step(DT)?;
        collisions += report.collisions;
        cushion_hits += report.cushion_hits;
        if report.cue_ball_pocketed {
            scratches += 1;
            println!("  t = {:6.3}s  scratch, cue ball respawned", sim.elapsed());
        }
        for id in &report.pocketed {
            println!("  t = {:6.3}s  {} pocketed", sim.elapsed(), id);
        }
        if sim.frame() % 240 == 0 {
            println!(
                "  t = {:6.3}s  energy {:.5}, {} balls in play",
                sim.elapsed(),
                sim.total_kinetic_energy(),
                sim.balls().len()
            );
        }
    }

    println!("\nTable settled after {:.3}s ({} frames)", sim.elapsed(), sim.frame());
    println!("Ball contacts:  {}", collisions);
    println!("Cushion hits:   {}", cushion_hits);
    println!("Scratches:      {}", scratches);
    println!("Pocketed:       {:?}", sim.pocketed());

    println!("\nFinal positions:");
    println!("  {}", sim.cue_ball());
    for ball in sim.balls() {
        println!("  {}", ball);
    }

    Ok(())
}
