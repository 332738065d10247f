#[cfg(test)]
mod tests {
    use glam::Vec2;

    use crate::config::{GameConfig, WaveEntry};
    use crate::enums::*;
    use crate::error::ConfigError;
    use crate::events::GameEvent;
    use crate::input::{Control, InputSnapshot, InputSource};
    use crate::state::HudView;
    use crate::types::{Direction, Rect, VehicleId};

    // ---- Direction ----

    #[test]
    fn test_direction_unit_vectors() {
        assert_eq!(Direction::Up.unit(), Vec2::new(0.0, -1.0));
        assert_eq!(Direction::Down.unit(), Vec2::new(0.0, 1.0));
        assert_eq!(Direction::Left.unit(), Vec2::new(-1.0, 0.0));
        assert_eq!(Direction::Right.unit(), Vec2::new(1.0, 0.0));
    }

    #[test]
    fn test_direction_angles_clockwise_from_up() {
        use std::f32::consts::PI;
        assert_eq!(Direction::Up.angle(), 0.0);
        assert!((Direction::Right.angle() - PI / 2.0).abs() < 1e-6);
        assert!((Direction::Down.angle() - PI).abs() < 1e-6);
        assert!((Direction::Left.angle() - 3.0 * PI / 2.0).abs() < 1e-6);
    }

    #[test]
    fn test_direction_opposite_is_involution() {
        for dir in Direction::ALL {
            assert_ne!(dir.opposite(), dir);
            assert_eq!(dir.opposite().opposite(), dir);
            assert_eq!(dir.unit() + dir.opposite().unit(), Vec2::ZERO);
        }
    }

    // ---- Rect ----

    #[test]
    fn test_rect_from_center() {
        let rect = Rect::from_center(Vec2::new(64.0, 64.0), 26.0);
        assert_eq!(rect, Rect::new(51.0, 51.0, 26.0, 26.0));
        assert_eq!(rect.center(), Vec2::new(64.0, 64.0));
    }

    #[test]
    fn test_rect_touching_edges_do_not_overlap() {
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        let b = Rect::new(10.0, 0.0, 10.0, 10.0);
        let c = Rect::new(9.5, 9.5, 10.0, 10.0);
        assert!(!a.overlaps(&b));
        assert!(a.overlaps(&c));
        assert!(c.overlaps(&a));
    }

    #[test]
    fn test_rect_is_within_bounds() {
        let bounds = Rect::new(0.0, 0.0, 640.0, 480.0);
        assert!(Rect::new(0.0, 0.0, 6.0, 6.0).is_within(&bounds));
        assert!(Rect::new(634.0, 474.0, 6.0, 6.0).is_within(&bounds));
        assert!(!Rect::new(-0.5, 10.0, 6.0, 6.0).is_within(&bounds));
        assert!(!Rect::new(635.0, 10.0, 6.0, 6.0).is_within(&bounds));
    }

    // ---- Config ----

    #[test]
    fn test_default_config_is_valid() {
        let config = GameConfig::default();
        config.validate().unwrap();
        assert_eq!(config.levels.len(), 2);
        for level in &config.levels {
            assert_eq!(level.layout.len(), config.grid.height);
            assert!(level
                .layout
                .iter()
                .all(|row| row.chars().count() == config.grid.width));
        }
        assert_eq!(config.levels[0].total_enemies(), 4);
        assert_eq!(config.levels[1].total_enemies(), 6);
    }

    #[test]
    fn test_partial_json_overrides_defaults() {
        let config =
            GameConfig::from_json_str(r#"{ "session": { "starting_lives": 5 } }"#).unwrap();
        assert_eq!(config.session.starting_lives, 5);
        assert_eq!(config.session.max_active_enemies, 3);
        assert_eq!(config.player.speed, 130.0);
        assert_eq!(config.levels.len(), 2);
    }

    #[test]
    fn test_config_json_round_trip() {
        let config = GameConfig::default();
        let json = serde_json::to_string(&config).unwrap();
        let back = GameConfig::from_json_str(&json).unwrap();
        assert_eq!(config, back);
    }

    #[test]
    fn test_unknown_enemy_tag_is_json_error() {
        let json = r#"{ "levels": [ { "name": "x", "layout": [], "enemies": [ { "type": "dragon", "count": 1 } ] } ] }"#;
        let err = GameConfig::from_json_str(json).unwrap_err();
        assert!(matches!(err, ConfigError::Json(_)));
    }

    #[test]
    fn test_missing_stat_entry_rejected() {
        let mut config = GameConfig::default();
        config.enemy_types.remove(&EnemyKind::Sniper);
        let err = config.validate().unwrap_err();
        assert!(matches!(
            err,
            ConfigError::UnknownEnemyType {
                kind: EnemyKind::Sniper,
                ..
            }
        ));
    }

    #[test]
    fn test_short_layout_rejected() {
        let mut config = GameConfig::default();
        config.levels[0].layout[3] = "S..".into();
        let err = config.validate().unwrap_err();
        assert!(matches!(err, ConfigError::LayoutColumns { row: 3, .. }));

        let mut config = GameConfig::default();
        config.levels[1].layout.pop();
        let err = config.validate().unwrap_err();
        assert!(matches!(err, ConfigError::LayoutRows { found: 14, .. }));
    }

    #[test]
    fn test_long_rows_are_truncated_on_load() {
        let mut config = GameConfig::default();
        config.levels[0].layout[1].push('S');
        config.levels[0].layout.push("SSSSSSSSSSSSSSSSSSSS".into());
        let json = serde_json::to_string(&config).unwrap();

        let loaded = GameConfig::from_json_str(&json).unwrap();
        assert_eq!(loaded.levels[0].layout.len(), 15);
        assert_eq!(loaded.levels[0].layout[1], "S..BB....BB....BB...");
    }

    #[test]
    fn test_empty_level_list_rejected() {
        let err = GameConfig::from_json_str(r#"{ "levels": [] }"#).unwrap_err();
        assert!(matches!(err, ConfigError::NoLevels));
    }

    #[test]
    fn test_inverted_patrol_range_rejected() {
        let mut config = GameConfig::default();
        config.ai.patrol_turn_min = 2.0;
        config.ai.patrol_turn_max = 1.0;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidValue { .. })
        ));
    }

    #[test]
    fn test_validate_rejects_nonpositive_speed() {
        let err = GameConfig::from_json_str(r#"{ "player": { "speed": -50.0 } }"#).unwrap_err();
        assert!(matches!(
            err,
            ConfigError::InvalidValue {
                field: "player",
                ..
            }
        ));

        let mut config = GameConfig::default();
        for stats in config.enemy_types.values_mut() {
            stats.speed = 0.0;
        }
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidValue {
                field: "enemy_types",
                ..
            })
        ));
    }

    #[test]
    fn test_wave_entry_uses_type_key() {
        let json = serde_json::to_string(&WaveEntry::new(EnemyKind::Heavy, 2)).unwrap();
        assert_eq!(json, r#"{"type":"heavy","count":2}"#);
    }

    // ---- Events & input ----

    #[test]
    fn test_game_event_serde() {
        let events = vec![
            GameEvent::Hit {
                target: VehicleId(3),
                position: Vec2::new(10.0, 20.0),
            },
            GameEvent::CameraShake {
                duration: 0.2,
                magnitude: 4.0,
            },
            GameEvent::TileDestroyed { col: 4, row: 7 },
            GameEvent::HudChanged {
                hud: HudView {
                    score: 100,
                    lives: 2,
                    level: 1,
                },
            },
            GameEvent::ModeChanged {
                mode: GameMode::GameOver,
            },
        ];
        for event in &events {
            let json = serde_json::to_string(event).unwrap();
            assert!(json.contains("\"type\""));
            let back: GameEvent = serde_json::from_str(&json).unwrap();
            assert_eq!(*event, back);
        }
    }

    #[test]
    fn test_input_capture_reads_every_control() {
        struct OnlyFire;
        impl InputSource for OnlyFire {
            fn is_held(&self, control: Control) -> bool {
                control == Control::Fire
            }
        }

        let snapshot = InputSnapshot::capture(&OnlyFire);
        assert_eq!(snapshot, InputSnapshot::default().with(Control::Fire));
        assert!(snapshot.is_held(Control::Fire));
        assert!(!snapshot.is_held(Control::Restart));
    }

    #[test]
    fn test_tile_symbols() {
        for tile in [Tile::Empty, Tile::Destructible, Tile::Indestructible] {
            assert_eq!(Tile::from_symbol(tile.symbol()), tile);
        }
        assert_eq!(Tile::from_symbol('x'), Tile::Empty);
    }
}
