#[cfg(test)]
mod tests {
    use crate::commands::SessionCommand;
    use crate::enums::*;
    use crate::error::AssetLoadFailure;
    use crate::events::GameEvent;
    use crate::state::GameStateSnapshot;
    use crate::types::{Aabb, SimTime, Vector3};

    // ---- Ray vs box ----

    fn unit_box_at(y: f32) -> Aabb {
        Aabb::from_center(Vector3::new(0.0, y, 0.0), Vector3::splat(1.0))
    }

    #[test]
    fn test_ray_hits_box_ahead() {
        let aabb = unit_box_at(3.0);
        let t = aabb.ray_distance(Vector3::ZERO, Vector3::Y, 4.0);
        assert_eq!(t, Some(2.0));
    }

    #[test]
    fn test_ray_misses_box_beyond_range() {
        let aabb = unit_box_at(10.0);
        assert_eq!(aabb.ray_distance(Vector3::ZERO, Vector3::Y, 4.0), None);
    }

    #[test]
    fn test_ray_misses_box_behind() {
        let aabb = unit_box_at(-3.0);
        assert_eq!(aabb.ray_distance(Vector3::ZERO, Vector3::Y, 4.0), None);
    }

    #[test]
    fn test_ray_misses_box_to_the_side() {
        let aabb = Aabb::from_center(Vector3::new(5.0, 2.0, 0.0), Vector3::splat(1.0));
        assert_eq!(aabb.ray_distance(Vector3::ZERO, Vector3::Y, 4.0), None);
    }

    #[test]
    fn test_ray_origin_inside_box_hits_at_zero() {
        let aabb = unit_box_at(0.5);
        assert_eq!(aabb.ray_distance(Vector3::ZERO, Vector3::Y, 4.0), Some(0.0));
    }

    #[test]
    fn test_ray_downward() {
        let aabb = unit_box_at(-3.0);
        let t = aabb.ray_distance(Vector3::ZERO, Vector3::NEG_Y, 4.0);
        assert_eq!(t, Some(2.0));
    }

    #[test]
    fn test_ray_diagonal() {
        let aabb = Aabb::from_center(Vector3::new(2.0, 2.0, 0.0), Vector3::splat(0.5));
        let dir = Vector3::new(1.0, 1.0, 0.0).normalize();
        let t = aabb.ray_distance(Vector3::ZERO, dir, 4.0).unwrap();
        assert!((t - 1.5 * 2f32.sqrt()).abs() < 1e-5, "t = {t}");
    }

    // ---- Time ----

    #[test]
    fn test_sim_time_advance_variable_dt() {
        let mut time = SimTime::default();
        time.advance(0.016);
        time.advance(0.034);
        assert_eq!(time.tick, 2);
        assert!((time.elapsed_secs - 0.05).abs() < 1e-6);
    }

    // ---- Names ----

    #[test]
    fn test_model_asset_names() {
        assert_eq!(ModelId::Player1.asset_name(), "Player_1");
        assert_eq!(ModelId::Mothership.to_string(), "Mothership");
        let names: Vec<_> = AlienSubtype::ALL
            .iter()
            .map(|s| s.model().asset_name())
            .collect();
        assert_eq!(names, vec!["Alien_1", "Alien_2", "Alien_3"]);
    }

    #[test]
    fn test_asset_load_failure_display() {
        let err = AssetLoadFailure::NotFound {
            model: ModelId::Alien2,
        };
        assert_eq!(err.to_string(), "model Alien_2.glb not found");
        assert_eq!(err.model(), ModelId::Alien2);

        let err = AssetLoadFailure::Malformed {
            model: ModelId::Mothership,
            reason: "truncated buffer".into(),
        };
        assert!(err.to_string().contains("truncated buffer"));
    }

    // ---- Serde ----

    #[test]
    fn test_game_event_tagged_serde() {
        let event = GameEvent::WaveStarted { wave: 3 };
        let json = serde_json::to_string(&event).unwrap();
        assert!(json.contains("\"type\":\"WaveStarted\""), "{json}");
        let back: GameEvent = serde_json::from_str(&json).unwrap();
        assert_eq!(back, event);
    }

    #[test]
    fn test_session_command_serde() {
        let json = serde_json::to_string(&SessionCommand::Restart).unwrap();
        let back: SessionCommand = serde_json::from_str(&json).unwrap();
        assert_eq!(back, SessionCommand::Restart);
    }

    #[test]
    fn test_default_snapshot_serializes() {
        let snap = GameStateSnapshot::default();
        assert_eq!(snap.phase, GamePhase::Title);
        assert_eq!(snap.wave_phase, WavePhase::WaveInProgress);
        let json = serde_json::to_string(&snap).unwrap();
        let back: GameStateSnapshot = serde_json::from_str(&json).unwrap();
        assert_eq!(back.wave, 0);
        assert!(!back.game_over);
        assert!(back.aliens.is_empty());
    }
}
