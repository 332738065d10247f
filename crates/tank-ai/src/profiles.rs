//! Per-type behavioural profiles.
//!
//! Folds an enemy type's stat entry and the shared AI tuning into the
//! numbers the decision engine reads every tick.

use tank_core::config::{AiTuning, EnemyStats};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BehaviorProfile {
    /// Base speed (px/s), used while patrolling.
    pub speed: f32,
    /// Speed while chasing (px/s).
    pub chase_speed: f32,
    /// Speed while retreating (px/s).
    pub retreat_speed: f32,
    /// Chase when the player is at most this far away (px).
    pub detect_range: f32,
    /// Stop and fire when the player is at most this far away (px).
    pub attack_range: f32,
    /// Health ratio at or below which the enemy retreats.
    pub retreat_threshold: f32,
    /// Minimum time spent retreating once started (s).
    pub retreat_duration: f32,
    /// Bounds of the patrol wander duration (s).
    pub patrol_turn_min: f32,
    pub patrol_turn_max: f32,
}

impl BehaviorProfile {
    pub fn new(stats: &EnemyStats, tuning: &AiTuning) -> Self {
        Self {
            speed: stats.speed,
            chase_speed: stats.speed * tuning.chase_speed_factor,
            retreat_speed: stats.speed * tuning.retreat_speed_factor,
            detect_range: stats.detect_range,
            attack_range: stats.attack_range,
            retreat_threshold: tuning.retreat_threshold,
            retreat_duration: tuning.retreat_duration,
            patrol_turn_min: tuning.patrol_turn_min,
            patrol_turn_max: tuning.patrol_turn_max,
        }
    }
}
