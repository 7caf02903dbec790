//! Physics stepper
//!
//! One fixed timestep over every ball, in this order:
//! 1. Integrate positions
//! 2. Cushion bounce per axis
//! 3. Friction, plus extra damping for nearly stopped balls
//! 4. A single pass of pairwise ball collisions
//!
//! The single pass can leave a three-ball cluster slightly overlapped for a
//! tick; the next tick picks it up.

use super::collision::{ball_pair_contact, bounce_axis, resolve_pair};
use super::state::Ball;
use super::table::PlayArea;
use crate::settings::PhysicsTuning;

/// Contacts resolved during one step
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StepStats {
    pub cushion_hits: u32,
    pub ball_contacts: u32,
}

/// Advance all balls by `dt`
pub fn step(balls: &mut [Ball], table: &PlayArea, tuning: &PhysicsTuning, dt: f32) -> StepStats {
    let mut stats = StepStats::default();

    for ball in balls.iter_mut() {
        ball.pos += ball.vel * dt;

        let limits = table.center_limits(tuning.wall_inset, ball.radius);
        if bounce_axis(&mut ball.pos.x, &mut ball.vel.x, limits.x, tuning.restitution) {
            stats.cushion_hits += 1;
        }
        if bounce_axis(&mut ball.pos.y, &mut ball.vel.y, limits.y, tuning.restitution) {
            stats.cushion_hits += 1;
        }

        ball.vel *= tuning.friction;
        if ball.speed() < tuning.slow_speed {
            ball.vel *= tuning.slow_damping;
        }
    }

    // O(n²) over a fixed, small ball count
    for i in 0..balls.len() {
        let (head, tail) = balls.split_at_mut(i + 1);
        let a = &mut head[i];
        for b in tail.iter_mut() {
            let min_dist = a.radius + b.radius;
            if let Some(contact) = ball_pair_contact(a.pos, b.pos, min_dist) {
                resolve_pair(a, b, &contact, tuning.restitution);
                stats.ball_contacts += 1;
            }
        }
    }

    if stats.ball_contacts > 0 || stats.cushion_hits > 0 {
        log::trace!(
            "step: {} cushion hits, {} ball contacts",
            stats.cushion_hits,
            stats.ball_contacts
        );
    }

    stats
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::*;
    use crate::settings::RackLayout;
    use crate::sim::state::BallRegistry;
    use glam::Vec2;
    use proptest::prelude::*;

    fn total_energy(balls: &[Ball]) -> f32 {
        balls.iter().map(Ball::kinetic_energy).sum()
    }

    fn struck_rack(layout: &RackLayout) -> BallRegistry {
        let mut balls = BallRegistry::rack(layout);
        balls.cue_ball_mut().vel = Vec2::new(0.0, -1.8);
        balls
    }

    #[test]
    fn test_first_step_moves_cue_ball() {
        let mut balls = struck_rack(&RackLayout::default());
        step(
            balls.as_mut_slice(),
            &PlayArea::default(),
            &PhysicsTuning::default(),
            SIM_DT,
        );

        let cue = balls.cue_ball();
        assert!((cue.pos.y - 2.17).abs() < 1e-5, "cue z = {}", cue.pos.y);
        assert_eq!(cue.pos.x, 0.0);
        // Friction applied once
        assert!((cue.vel.y + 1.8 * 0.992).abs() < 1e-5);
        // Rack untouched
        let rack = BallRegistry::rack(&RackLayout::default());
        assert_eq!(&balls.as_slice()[..15], &rack.as_slice()[..15]);
    }

    #[test]
    fn test_cue_ball_hits_apex() {
        let layout = RackLayout::default();
        let mut balls = struck_rack(&layout);
        let apex = balls.get(0).unwrap().pos;
        // Just short of contact; one tick of travel closes the gap
        balls.cue_ball_mut().pos = apex + Vec2::new(0.0, 2.0 * BALL_RADIUS + 0.01);

        let stats = step(
            balls.as_mut_slice(),
            &PlayArea::default(),
            &PhysicsTuning::default(),
            SIM_DT,
        );
        assert_eq!(stats.ball_contacts, 1);

        let incoming = -1.8 * FRICTION;
        let apex_ball = balls.get(0).unwrap();
        let cue = balls.cue_ball();
        assert!((apex_ball.vel.y - incoming * RESTITUTION).abs() < 1e-4);
        assert!((cue.vel.y - incoming * (1.0 - RESTITUTION)).abs() < 1e-4);
        assert!(apex_ball.vel.x.abs() < 1e-6 && cue.vel.x.abs() < 1e-6);
        assert!(apex_ball.pos.distance(cue.pos) >= 2.0 * BALL_RADIUS - 1e-4);
    }

    #[test]
    fn test_slow_ball_is_damped_to_rest() {
        let mut balls = [Ball::new(1, Vec2::ZERO, BALL_RADIUS)];
        balls[0].vel = Vec2::new(0.005, 0.0);
        step(&mut balls, &PlayArea::default(), &PhysicsTuning::default(), SIM_DT);
        assert!((balls[0].vel.x - 0.005 * FRICTION * SLOW_DAMPING).abs() < 1e-7);

        for _ in 0..200 {
            step(&mut balls, &PlayArea::default(), &PhysicsTuning::default(), SIM_DT);
        }
        assert!(balls[0].speed() < 1e-10);
    }

    #[test]
    fn test_cushion_bounce() {
        let table = PlayArea::default();
        let tuning = PhysicsTuning::default();
        let limits = table.center_limits(tuning.wall_inset, BALL_RADIUS);
        let mut balls = [Ball::new(1, Vec2::new(limits.x - 0.001, 0.0), BALL_RADIUS)];
        balls[0].vel = Vec2::new(1.0, 0.0);

        let stats = step(&mut balls, &table, &tuning, SIM_DT);
        assert_eq!(stats.cushion_hits, 1);
        assert_eq!(balls[0].pos.x, limits.x);
        assert!((balls[0].vel.x + RESTITUTION * FRICTION).abs() < 1e-6);
    }

    #[test]
    fn test_coincident_balls_do_not_produce_nan() {
        let mut balls = [
            Ball::new(1, Vec2::new(0.3, 0.3), BALL_RADIUS),
            Ball::new(2, Vec2::new(0.3, 0.3), BALL_RADIUS),
        ];
        let stats = step(&mut balls, &PlayArea::default(), &PhysicsTuning::default(), SIM_DT);
        assert_eq!(stats.ball_contacts, 0);
        assert!(balls.iter().all(|b| b.pos.is_finite() && b.vel.is_finite()));
    }

    #[test]
    fn test_degenerate_table_is_total() {
        let table = PlayArea::new(0.0, 0.0, 0.0);
        let mut balls = BallRegistry::rack(&RackLayout::default());
        for _ in 0..10 {
            step(balls.as_mut_slice(), &table, &PhysicsTuning::default(), SIM_DT);
        }
        assert!(balls.iter().all(|b| b.pos.is_finite() && b.vel.is_finite()));
    }

    #[test]
    fn test_rack_settles_within_bound() {
        let mut balls = struck_rack(&RackLayout::default());
        let table = PlayArea::default();
        let tuning = PhysicsTuning::default();

        let mut settled_at = None;
        for tick in 0..2000 {
            step(balls.as_mut_slice(), &table, &tuning, SIM_DT);
            if balls.all_at_rest(REST_SPEED) {
                settled_at = Some(tick);
                break;
            }
        }
        assert!(settled_at.is_some(), "balls still moving after 2000 ticks");
    }

    #[test]
    fn test_break_keeps_invariants() {
        // Rack close enough that the cue ball reaches it
        let layout = RackLayout {
            apex_z: -0.5,
            ..RackLayout::default()
        };
        let mut balls = struck_rack(&layout);
        let table = PlayArea::default();
        let tuning = PhysicsTuning::default();
        let half = table.half_extents(tuning.wall_inset);

        let mut contacts = 0;
        let mut energy = balls.total_kinetic_energy();
        for _ in 0..2000 {
            contacts += step(balls.as_mut_slice(), &table, &tuning, SIM_DT).ball_contacts;

            let after = balls.total_kinetic_energy();
            assert!(after <= energy + 1e-6, "energy rose {} -> {}", energy, after);
            energy = after;

            for b in balls.iter() {
                assert!(b.pos.x.abs() <= half.x + 1e-4);
                assert!(b.pos.y.abs() <= half.y + 1e-4);
            }
        }
        assert!(contacts > 0, "cue ball never reached the rack");
        assert!(balls.all_at_rest(REST_SPEED));
    }

    fn arb_ball(max_speed: f32) -> impl Strategy<Value = Ball> {
        (
            -2.1f32..2.1,
            -4.4f32..4.4,
            -max_speed..max_speed,
            -max_speed..max_speed,
        )
            .prop_map(|(x, z, vx, vz)| {
                let mut ball = Ball::new(1, Vec2::new(x, z), BALL_RADIUS);
                ball.vel = Vec2::new(vx, vz);
                ball
            })
    }

    proptest! {
        #[test]
        fn energy_never_increases(mut balls in prop::collection::vec(arb_ball(3.0), 2..7)) {
            let before = total_energy(&balls);
            step(&mut balls, &PlayArea::default(), &PhysicsTuning::default(), SIM_DT);
            let after = total_energy(&balls);
            prop_assert!(after <= before * (1.0 + 1e-5) + 1e-7, "{} -> {}", before, after);
        }

        #[test]
        fn pair_never_left_overlapping(a in arb_ball(3.0), b in arb_ball(3.0)) {
            let next_a = a.pos + a.vel * SIM_DT;
            let next_b = b.pos + b.vel * SIM_DT;
            prop_assume!(next_a.distance(next_b) > 1e-3);

            let mut balls = [a, b];
            step(&mut balls, &PlayArea::default(), &PhysicsTuning::default(), SIM_DT);
            let dist = balls[0].pos.distance(balls[1].pos);
            prop_assert!(dist >= 2.0 * BALL_RADIUS - 1e-4, "distance {}", dist);
        }

        #[test]
        fn balls_stay_on_table(
            x in -2.255f32..2.255,
            z in -4.63f32..4.63,
            vx in -3.0f32..3.0,
            vz in -3.0f32..3.0,
            other in arb_ball(3.0),
        ) {
            let table = PlayArea::default();
            let tuning = PhysicsTuning::default();
            let half = table.half_extents(tuning.wall_inset);

            let mut ball = Ball::new(1, Vec2::new(x, z), BALL_RADIUS);
            ball.vel = Vec2::new(vx, vz);
            let mut balls = [ball, other];
            step(&mut balls, &table, &tuning, SIM_DT);

            for b in &balls {
                prop_assert!(b.pos.x.abs() <= half.x + 1e-4, "x = {}", b.pos.x);
                prop_assert!(b.pos.y.abs() <= half.y + 1e-4, "z = {}", b.pos.y);
            }
        }
    }
}
