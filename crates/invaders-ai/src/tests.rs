#[cfg(test)]
mod tests {
    use rand::rngs::mock::StepRng;

    use invaders_core::constants::*;
    use invaders_core::types::{InputState, Orientation, Vector3};

    use crate::policy::*;
    use crate::profiles::{get_profile, CooldownRule, Gunship};

    const DT: f32 = 1.0 / 60.0;

    /// Every draw is 0.0: always below any fire probability.
    fn always_fire() -> StepRng {
        StepRng::new(0, 0)
    }

    /// Every draw is just under 1.0: never below a fire probability.
    fn never_fire() -> StepRng {
        StepRng::new(u64::MAX, 0)
    }

    // ---- Profiles ----

    #[test]
    fn test_profiles_match_tuning() {
        let alien = get_profile(Gunship::Alien);
        assert_eq!(alien.hit_points, 4);
        assert_eq!(alien.fire_probability, 0.002);
        assert_eq!(
            alien.cooldown,
            CooldownRule::Uniform { min: 1.5, max: 3.5 }
        );

        let boss = get_profile(Gunship::Mothership);
        assert_eq!(boss.hit_points, 5);
        assert_eq!(boss.fire_probability, 0.02);
        assert_eq!(boss.cooldown, CooldownRule::Fixed(1.5));
        assert_eq!(boss.step_down, 0.0);
    }

    // ---- Patrol ----

    #[test]
    fn test_patrol_normalized_speed() {
        let profile = get_profile(Gunship::Alien);
        let step = patrol(&profile, Vector3::new(0.0, 10.0, 0.0), 1.0, DT);
        assert!((step.position.x - ALIEN_SPEED).abs() < 1e-6);
        assert_eq!(step.position.y, 10.0);
        assert!(!step.reversed);
    }

    #[test]
    fn test_alien_reverses_and_steps_down() {
        let profile = get_profile(Gunship::Alien);
        let step = patrol(&profile, Vector3::new(19.995, 10.0, 0.0), 1.0, DT);
        assert!(step.reversed);
        assert_eq!(step.direction, -1.0);
        assert_eq!(step.position.y, 10.0 - ALIEN_STEP_DOWN);
    }

    #[test]
    fn test_mothership_reverses_without_step_down() {
        let profile = get_profile(Gunship::Mothership);
        let step = patrol(&profile, Vector3::new(-19.95, 15.0, 0.0), -1.0, DT);
        assert!(step.reversed);
        assert_eq!(step.direction, 1.0);
        assert_eq!(step.position.y, 15.0);
    }

    #[test]
    fn test_patrol_overshoot_bounded_and_single_flip() {
        for kind in [Gunship::Alien, Gunship::Mothership] {
            let profile = get_profile(kind);
            let delta = profile.speed * DT * FRAME_RATE_NORMALIZER;
            let mut position = Vector3::new(0.0, 10.0, 0.0);
            let mut direction = 1.0;
            let mut reversals = 0;
            let mut outside_streak = 0;

            for _ in 0..20_000 {
                let step = patrol(&profile, position, direction, DT);
                assert!(
                    step.position.x.abs() <= HORIZONTAL_BOUND + delta + 1e-4,
                    "{kind:?} overshot to {}",
                    step.position.x
                );
                if step.reversed {
                    reversals += 1;
                }
                if step.position.x.abs() > HORIZONTAL_BOUND {
                    outside_streak += 1;
                    assert!(outside_streak <= 1, "{kind:?} lingered outside the bound");
                } else {
                    outside_streak = 0;
                }
                position = step.position;
                direction = step.direction;
            }

            // Expected crossings: first crossing after 20 units, then one per 40 units.
            let travelled = 20_000.0 * delta;
            let expected = ((travelled - HORIZONTAL_BOUND) / (2.0 * HORIZONTAL_BOUND)).floor() as i32 + 1;
            assert!(
                (reversals - expected).abs() <= 1,
                "{kind:?}: {reversals} reversals, expected about {expected}"
            );
        }
    }

    #[test]
    fn test_patrol_large_step_does_not_double_flip() {
        let profile = get_profile(Gunship::Mothership);
        // A long frame lands far outside; the return step must not flip again.
        let first = patrol(&profile, Vector3::new(19.0, 15.0, 0.0), 1.0, 0.5);
        assert!(first.reversed);
        let second = patrol(&profile, first.position, first.direction, 0.01);
        assert!(!second.reversed);
        assert_eq!(second.direction, -1.0);
    }

    // ---- Gunship fire ----

    #[test]
    fn test_gunship_fire_waits_for_cooldown() {
        let profile = get_profile(Gunship::Alien);
        let mut rng = always_fire();
        let decision = gunship_fire(&profile, 1.0, DT, &mut rng);
        assert!(!decision.fire);
        assert!((decision.cooldown_secs - (1.0 - DT)).abs() < 1e-6);
    }

    #[test]
    fn test_alien_fire_rearms_in_range() {
        let profile = get_profile(Gunship::Alien);
        let mut rng = always_fire();
        let decision = gunship_fire(&profile, 0.0, DT, &mut rng);
        assert!(decision.fire);
        assert!(decision.cooldown_secs >= ALIEN_FIRE_COOLDOWN_MIN);
        assert!(decision.cooldown_secs < ALIEN_FIRE_COOLDOWN_MAX);
    }

    #[test]
    fn test_mothership_fire_fixed_cooldown() {
        let profile = get_profile(Gunship::Mothership);
        let mut rng = always_fire();
        let decision = gunship_fire(&profile, -0.2, DT, &mut rng);
        assert!(decision.fire);
        assert_eq!(decision.cooldown_secs, MOTHERSHIP_FIRE_COOLDOWN);
    }

    #[test]
    fn test_gunship_fire_failed_roll_keeps_counting_down() {
        let profile = get_profile(Gunship::Mothership);
        let mut rng = never_fire();
        let decision = gunship_fire(&profile, 0.0, DT, &mut rng);
        assert!(!decision.fire);
        assert!(decision.cooldown_secs < 0.0);
    }

    #[test]
    fn test_hit_wobble_within_range() {
        let profile = get_profile(Gunship::Alien);
        let mut rng = never_fire();
        let wobble = hit_wobble(&profile, &mut rng);
        let (axis, angle) = wobble.to_axis_angle();
        assert!(angle <= 2.0 * ALIEN_HIT_TILT + 1e-4, "angle {angle}");
        assert!(angle > 0.0);
        assert!((axis.x.abs() - 1.0).abs() < 1e-4, "axis {axis}");
    }

    // ---- Player ----

    #[test]
    fn test_player_moves_at_unnormalized_speed() {
        let input = InputState {
            right: true,
            ..InputState::default()
        };
        let next = player_step(Vector3::new(0.0, -15.0, 0.0), &input, 0.1);
        assert!((next.x - PLAYER_SPEED * 0.1).abs() < 1e-6);
    }

    #[test]
    fn test_player_gated_at_bounds() {
        let right = InputState {
            right: true,
            ..InputState::default()
        };
        let left = InputState {
            left: true,
            ..InputState::default()
        };
        let at_edge = Vector3::new(HORIZONTAL_BOUND, -15.0, 0.0);
        assert_eq!(player_step(at_edge, &right, DT), at_edge);
        assert!(player_step(at_edge, &left, DT).x < HORIZONTAL_BOUND);

        let at_other_edge = Vector3::new(-HORIZONTAL_BOUND, -15.0, 0.0);
        assert_eq!(player_step(at_other_edge, &left, DT), at_other_edge);
    }

    #[test]
    fn test_player_fire_cooldown() {
        let fire = InputState::firing();
        let shot = player_fire(0.0, &fire, DT);
        assert!(shot.fire);
        assert_eq!(shot.cooldown_secs, PLAYER_FIRE_COOLDOWN);

        let held = player_fire(shot.cooldown_secs, &fire, DT);
        assert!(!held.fire);

        let idle = player_fire(0.0, &InputState::idle(), DT);
        assert!(!idle.fire);
        assert!(idle.cooldown_secs < 0.0);
    }

    // ---- Projectiles ----

    #[test]
    fn test_projectile_step_normalized() {
        let next = projectile_step(Vector3::ZERO, Vector3::Y, PLAYER_PROJECTILE_SPEED, DT);
        assert!((next.y - PLAYER_PROJECTILE_SPEED).abs() < 1e-6);
    }

    #[test]
    fn test_travel_bound_is_strict() {
        assert!(!beyond_travel_bound(Vector3::new(0.0, 120.0, 0.0), Vector3::Y));
        assert!(beyond_travel_bound(Vector3::new(0.0, 120.01, 0.0), Vector3::Y));
        assert!(beyond_travel_bound(Vector3::new(0.0, -121.0, 0.0), Vector3::NEG_Y));
        assert!(!beyond_travel_bound(Vector3::new(0.0, -121.0, 0.0), Vector3::Y));
    }

    #[test]
    fn test_alien_projectile_axis_follows_firer() {
        let straight = alien_projectile_axis(Orientation::IDENTITY);
        assert!((straight - Vector3::NEG_Y).length() < 1e-6);

        let tilted = alien_projectile_axis(Orientation::from_rotation_x(0.1));
        assert!(tilted.z.abs() > 0.05, "tilt should leak into z: {tilted}");
        assert!((tilted.length() - 1.0).abs() < 1e-5);
    }

    // ---- Placement ----

    #[test]
    fn test_mothership_entry_at_edge() {
        let (position, direction) = mothership_entry(&mut always_fire());
        assert_eq!(direction, -1.0);
        assert_eq!(position, Vector3::new(-HORIZONTAL_BOUND, MOTHERSHIP_SPAWN_Y, 0.0));

        let (position, direction) = mothership_entry(&mut never_fire());
        assert_eq!(direction, 1.0);
        assert_eq!(position.x, HORIZONTAL_BOUND);
    }

    #[test]
    fn test_formation_cells() {
        assert_eq!(formation_cell(0, 0), Vector3::new(-10.0, 10.0, 0.0));
        assert_eq!(formation_cell(0, 2), Vector3::new(0.0, 10.0, 0.0));
        assert_eq!(formation_cell(2, 4), Vector3::new(10.0, 16.0, 0.0));
    }
}
