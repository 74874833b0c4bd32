#[cfg(test)]
mod tests {
    use glam::{Vec2, Vec3};

    use crate::commands::SessionCommand;
    use crate::constants::*;
    use crate::enums::*;
    use crate::error::{CollaboratorError, SimError};
    use crate::events::CombatEvent;
    use crate::input::InputSample;
    use crate::types::{EnemyId, HitTag, RayHit, SimTime};

    #[test]
    fn test_enemy_id_display_and_tag() {
        let id = EnemyId(7);
        assert_eq!(id.to_string(), "E7");
        assert_eq!(id.tag(), "enemy:E7");
        assert_eq!("E7".parse::<EnemyId>(), Ok(id));
        assert!("7".parse::<EnemyId>().is_err());
        assert!("Efoo".parse::<EnemyId>().is_err());
    }

    #[test]
    fn test_hit_tag_classification() {
        assert_eq!(HitTag::parse("enemy:E1"), HitTag::Enemy(EnemyId(1)));
        assert_eq!(HitTag::parse(PLAYER_TAG), HitTag::Player);
        assert_eq!(HitTag::parse(SCENERY_TAG), HitTag::Scenery);
        assert_eq!(HitTag::parse("crate_03"), HitTag::Scenery);
        // Malformed enemy tags block like scenery rather than vanishing.
        assert_eq!(HitTag::parse("enemy:"), HitTag::Scenery);
        assert_eq!(HitTag::parse("enemy:boss"), HitTag::Scenery);
        assert_eq!(
            RayHit::new("enemy:E2", 3.0).kind(),
            HitTag::Enemy(EnemyId(2))
        );
    }

    #[test]
    fn test_sim_time_advance() {
        let mut time = SimTime::default();
        for _ in 0..125 {
            time.advance(DT);
        }
        assert_eq!(time.tick, 125);
        assert!(
            (time.elapsed_secs - 2.0).abs() < 1e-5,
            "125 ticks of 16ms should be 2.0s, got {}",
            time.elapsed_secs
        );
    }

    #[test]
    fn test_session_command_serde() {
        let json = r#"{"type":"SetFireMode","mode":"level"}"#;
        let cmd: SessionCommand = serde_json::from_str(json).unwrap();
        assert!(matches!(
            cmd,
            SessionCommand::SetFireMode {
                mode: FireMode::Level
            }
        ));

        let spawn = SessionCommand::SpawnEnemy {
            position: Vec3::new(1.0, 0.0, -4.0),
        };
        let json = serde_json::to_string(&spawn).unwrap();
        let back: SessionCommand = serde_json::from_str(&json).unwrap();
        assert_eq!(json, serde_json::to_string(&back).unwrap());
    }

    #[test]
    fn test_input_sample_defaults_when_fields_missing() {
        let sample: InputSample = serde_json::from_str(r#"{"fire_pressed":true}"#).unwrap();
        assert_eq!(sample, InputSample::fire());
        assert_eq!(sample.move_axes, Vec2::ZERO);

        let sample: InputSample = serde_json::from_str("{}").unwrap();
        assert_eq!(sample, InputSample::idle());
    }

    #[test]
    fn test_combat_event_is_tagged() {
        let event = CombatEvent::EnemyHit {
            enemy: EnemyId(2),
            distance: 3.0,
        };
        let json = serde_json::to_string(&event).unwrap();
        assert!(json.contains(r#""type":"EnemyHit""#), "got {json}");
        let back: CombatEvent = serde_json::from_str(&json).unwrap();
        assert_eq!(back, event);
    }

    #[test]
    fn test_defaults() {
        assert_eq!(GamePhase::default(), GamePhase::Active);
        assert_eq!(FireMode::default(), FireMode::Edge);
    }

    #[test]
    fn test_collaborator_error_messages() {
        let err = CollaboratorError::RayQuery("scene manager gone".into());
        assert_eq!(err.to_string(), "ray query failed: scene manager gone");
        let err = CollaboratorError::Input("mouse unplugged".into());
        assert_eq!(err.to_string(), "input device failed: mouse unplugged");
    }

    #[test]
    fn test_sim_error_messages() {
        let err = SimError::InvalidConfig {
            field: "dt",
            expected: "a positive number of seconds",
            value: "-0.5".into(),
        };
        assert_eq!(
            err.to_string(),
            "dt must be a positive number of seconds, got -0.5"
        );
        let err = SimError::NonFiniteSpawn(Vec3::new(f32::NAN, 0.0, 1.0));
        assert!(err.to_string().starts_with("spawn position"), "got {err}");
    }
}
