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
//! End-to-end table scenarios
//!
//! Each test drives the public API the way a game loop would and checks the
//! observable outcome.

use pool_physics::body::STANDARD_BALL_RADIUS;
use pool_physics::collision::{are_colliding, standard_pockets, STANDARD_POCKET_RADIUS};
use pool_physics::integration::{AxisUpdate, Scheme};
use pool_physics::simulation::STANDARD_CUE_SPOT;
use pool_physics::{Ball, BallId, PhysicsParameters, SchemeTable, Simulation, Table, Vector2};

const R: f64 = STANDARD_BALL_RADIUS;

fn frictionless_table(cue: Ball, others: Vec<Ball>) -> Simulation {
    Simulation::new(Table::standard(), PhysicsParameters::frictionless_elastic(), cue).with_balls(others)
}

#[test]
fn test_head_on_elastic_swap() {
    let cue = Ball::new(BallId::CUE, Vector2::new(-0.2, 0.0), Vector2::new(1.0, 0.0), R);
    let target = Ball::at_rest(BallId::new(1), Vector2::zero(), R);
    let mut sim = frictionless_table(cue, vec![target]);

    let mut hit = false;
    for _ in 0..1000 {
        if sim.step(0.001).unwrap().collisions > 0 {
            hit = true;
            break;
        }
    }
    assert!(hit, "cue ball never reached the target");

    let target = sim.balls().get(BallId::new(1)).unwrap();
    assert!(sim.cue_ball().velocity().length() < 1e-12);
    assert!((target.velocity().x - 1.0).abs() < 1e-12);
    assert!(target.velocity().y.abs() < 1e-12);
}

#[test]
fn test_friction_stops_ball_in_finite_steps() {
    // μ = 0.5, g = 0.98, v0 = 2, dt = 0.1: the speed drops by 0.049 per step
    let params = PhysicsParameters::default();
    let directions = [
        Vector2::new(2.0, 0.0),
        Vector2::new(-2.0, 0.0),
        Vector2::new(0.0, 2.0),
        Vector2::new(0.0, -2.0),
    ];

    for velocity in directions {
        let mut ball = Ball::new(BallId::new(1), Vector2::zero(), velocity, R);
        let mut speed = ball.speed();
        let mut steps = 0;

        while !ball.is_at_rest() {
            ball.integrate(0.1, steps as f64 * 0.1, &params, &SchemeTable::default());
            steps += 1;
            assert!(ball.speed() <= speed, "speed increased for {:?}", velocity);
            speed = ball.speed();
            assert!(steps <= 100, "ball starting at {:?} never stopped", velocity);
        }

        assert_eq!(steps, 41, "wrong stopping step for {:?}", velocity);
        assert_eq!(ball.velocity(), Vector2::zero());
    }
}

#[test]
fn test_friction_stopping_independent_of_scheme() {
    let params = PhysicsParameters::default();
    let mut stops = Vec::new();

    for scheme in Scheme::ALL {
        let schemes = SchemeTable::uniform(AxisUpdate::Integrate(scheme));
        let mut ball = Ball::new(BallId::new(1), Vector2::zero(), Vector2::new(2.0, 0.0), R);
        for frame in 0..100 {
            ball.integrate(0.1, frame as f64 * 0.1, &params, &schemes);
        }
        assert!(ball.is_at_rest(), "{} did not stop", scheme);
        stops.push(ball.position().x);
    }

    // Midpoint, Heun and RK4 are exact for constant deceleration
    assert!((stops[1] - stops[2]).abs() < 1e-12);
    assert!((stops[2] - stops[3]).abs() < 1e-12);
    // Euler moves with the old velocity, so it travels further
    assert!(stops[0] > stops[3]);
}

#[test]
fn test_resting_table_is_stable() {
    let mut sim = Simulation::standard();
    let before: Vec<Vector2> = sim.balls().iter().map(Ball::position).collect();

    for _ in 0..500 {
        let report = sim.step(1.0 / 60.0).unwrap();
        assert_eq!(report.collisions, 0);
        assert!(!report.any_pocketed());
    }

    let after: Vec<Vector2> = sim.balls().iter().map(Ball::position).collect();
    assert_eq!(before, after);
    assert_eq!(sim.cue_ball().position(), STANDARD_CUE_SPOT);
}

#[test]
fn test_ball_stays_inside_cushions() {
    let table = Table::new(1.0, 1.6);
    let cue = Ball::new(BallId::CUE, Vector2::zero(), Vector2::new(2.3, -1.7), R);
    let mut sim = Simulation::new(table, PhysicsParameters::frictionless_elastic(), cue);
    let dt = 0.002;

    for _ in 0..10_000 {
        sim.step(dt).unwrap();
        let ball = sim.cue_ball();
        let slack = ball.speed() * dt + 1e-12;
        assert!(ball.position().x.abs() + R <= table.half_width() + slack);
        assert!(ball.position().y.abs() + R <= table.half_height() + slack);
    }
}

#[test]
fn test_ball_is_pocketed_and_stays_out() {
    let table = Table::standard();
    let cue = Ball::at_rest(BallId::CUE, STANDARD_CUE_SPOT, R);
    let runner = Ball::new(BallId::new(9), Vector2::new(0.6, 1.24), Vector2::new(1.0, 1.0), R);
    let mut sim = Simulation::new(table, PhysicsParameters::default(), cue)
        .with_pockets(standard_pockets(&table, STANDARD_POCKET_RADIUS))
        .with_balls(vec![runner]);

    let mut sunk_at = None;
    for _ in 0..100 {
        let report = sim.step(0.01).unwrap();
        if report.pocketed.contains(&BallId::new(9)) {
            sunk_at = Some(sim.frame());
            break;
        }
    }
    assert!(sunk_at.is_some(), "ball never reached the corner pocket");
    assert!(sim.balls().is_empty());
    assert_eq!(sim.pocketed(), &[BallId::new(9)]);

    for _ in 0..100 {
        assert!(sim.step(0.01).unwrap().pocketed.is_empty());
    }
    assert!(!sim.balls().contains(BallId::new(9)));
}

#[test]
fn test_scratch_respawns_cue_ball() {
    let table = Table::standard();
    let cue = Ball::new(BallId::CUE, Vector2::new(-0.6, -1.24), Vector2::new(-1.0, -1.0), R);
    let mut sim = Simulation::new(table, PhysicsParameters::default(), cue)
        .with_pockets(standard_pockets(&table, STANDARD_POCKET_RADIUS))
        .with_cue_spot(STANDARD_CUE_SPOT);

    let mut scratched = false;
    for _ in 0..100 {
        if sim.step(0.01).unwrap().cue_ball_pocketed {
            scratched = true;
            break;
        }
    }
    assert!(scratched);
    assert_eq!(sim.cue_ball().position(), STANDARD_CUE_SPOT);
    assert_eq!(sim.cue_ball().velocity(), Vector2::zero());
    assert!(sim.pocketed().is_empty());
}

#[test]
fn test_scratch_avoids_occupied_spot() {
    let table = Table::standard();
    let cue = Ball::new(BallId::CUE, Vector2::new(0.6, -1.24), Vector2::new(1.0, -1.0), R);
    let blocker = Ball::at_rest(BallId::new(1), STANDARD_CUE_SPOT, R);
    let mut sim = Simulation::new(table, PhysicsParameters::default(), cue)
        .with_pockets(standard_pockets(&table, STANDARD_POCKET_RADIUS))
        .with_balls(vec![blocker])
        .with_cue_spot(STANDARD_CUE_SPOT);

    let mut scratched = false;
    for _ in 0..100 {
        if sim.step(0.01).unwrap().cue_ball_pocketed {
            scratched = true;
            break;
        }
    }
    assert!(scratched);

    for _ in 0..100 {
        sim.step(0.01).unwrap();
    }

    let blocker = sim.balls().get(BallId::new(1)).unwrap();
    let cue = sim.cue_ball();
    assert_eq!(blocker.position(), STANDARD_CUE_SPOT);
    assert_eq!(cue.position().x, STANDARD_CUE_SPOT.x);
    assert!(cue.position().y > STANDARD_CUE_SPOT.y);
    assert!(!are_colliding(cue, blocker), "cue ball respawned inside ball 1");
    assert!(sim.can_shoot());
}

#[test]
fn test_break_scatters_rack_and_settles() {
    let mut sim = Simulation::standard();
    sim.shoot(Vector2::new(0.0, -1.0), 3.0).unwrap();
    assert!(!sim.can_shoot());

    let mut collisions = 0;
    for _ in 0..600 {
        collisions += sim.step(1.0 / 240.0).unwrap().collisions;
    }
    assert!(collisions > 0, "cue ball never reached the rack");

    let racked = Simulation::standard();
    let scattered = sim.balls().iter().any(|ball| {
        racked
            .balls()
            .get(ball.id())
            .map_or(true, |start| start.position() != ball.position())
    });
    assert!(scattered, "rack did not move");

    let frames = sim.run_until_rest(1.0 / 240.0, 20_000).unwrap();
    assert!(frames.is_some(), "table still moving after the break");
    assert!(sim.can_shoot());
}

#[test]
fn test_break_is_deterministic() {
    fn play() -> (Vec<(BallId, Vector2, Vector2)>, Vec<BallId>, Ball) {
        let mut sim = Simulation::standard();
        sim.shoot(Vector2::new(0.02, -1.0), 3.5).unwrap();
        for _ in 0..3000 {
            sim.step(1.0 / 240.0).unwrap();
        }
        let balls = sim
            .balls()
            .iter()
            .map(|ball| (ball.id(), ball.position(), ball.velocity()))
            .collect();
        (balls, sim.pocketed().to_vec(), *sim.cue_ball())
    }

    assert_eq!(play(), play());
}
