//! Built-in campaign: the two hand-authored levels shipped with the game.

use crate::config::{EnemyStats, LevelDef, WaveEntry};
use crate::enums::EnemyKind;

#[rustfmt::skip]
const LEVEL_1_LAYOUT: [&str; 15] = [
    "SSSSSSSSSSSSSSSSSSSS",
    "S..BB....BB....BB...",
    "S..BB....BB....BB...",
    "S...................",
    "S..SS....BB....SS...",
    "S..BB....BB....BB...",
    "S...................",
    "S....BB....SS....B..",
    "S....BB....SS....B..",
    "S...................",
    "S..SS....BB....SS...",
    "S..BB....BB....BB...",
    "S...................",
    "S..BB....BB....BB...",
    "SSSSSSSSSSSSSSSSSSSS",
];

#[rustfmt::skip]
const LEVEL_2_LAYOUT: [&str; 15] = [
    "SSSSSSSSSSSSSSSSSSSS",
    "S..BB..SS..BB..SS...",
    "S..BB..SS..BB..SS...",
    "S...................",
    "S..SS....BB....SS...",
    "S..BB....SS....BB...",
    "S...................",
    "S..BB..SS....SS..B..",
    "S..BB..SS....SS..B..",
    "S...................",
    "S..SS....BB....SS...",
    "S..BB....SS....BB...",
    "S...................",
    "S..BB..SS..BB..SS...",
    "SSSSSSSSSSSSSSSSSSSS",
];

fn rows(layout: &[&str]) -> Vec<String> {
    layout.iter().map(|row| row.to_string()).collect()
}

/// The default level list, in play order.
pub fn default_levels() -> Vec<LevelDef> {
    vec![
        LevelDef {
            name: "Level 1".into(),
            layout: rows(&LEVEL_1_LAYOUT),
            enemies: vec![
                WaveEntry::new(EnemyKind::Scout, 3),
                WaveEntry::new(EnemyKind::Heavy, 1),
            ],
        },
        LevelDef {
            name: "Level 2".into(),
            layout: rows(&LEVEL_2_LAYOUT),
            enemies: vec![
                WaveEntry::new(EnemyKind::Scout, 2),
                WaveEntry::new(EnemyKind::Sniper, 2),
                WaveEntry::new(EnemyKind::Heavy, 2),
            ],
        },
    ]
}

/// Stat table entry for each enemy kind.
pub fn default_stats(kind: EnemyKind) -> EnemyStats {
    match kind {
        EnemyKind::Scout => EnemyStats {
            size: 24.0,
            speed: 110.0,
            max_health: 2,
            fire_cooldown: 0.9,
            detect_range: 200.0,
            attack_range: 150.0,
        },
        EnemyKind::Heavy => EnemyStats {
            size: 28.0,
            speed: 80.0,
            max_health: 4,
            fire_cooldown: 1.2,
            detect_range: 220.0,
            attack_range: 170.0,
        },
        EnemyKind::Sniper => EnemyStats {
            size: 24.0,
            speed: 95.0,
            max_health: 2,
            fire_cooldown: 0.6,
            detect_range: 260.0,
            attack_range: 210.0,
        },
    }
}
