//! Enemy tanks: a vehicle paired with its decision engine.

use glam::Vec2;

use tank_ai::enemy::EnemyBrain;
use tank_ai::profiles::BehaviorProfile;
use tank_core::config::{AiTuning, EffectsConfig, EnemyStats};
use tank_core::enums::{AiState, EnemyKind, Faction};
use tank_core::state::EnemyView;
use tank_core::types::{Direction, VehicleId};

use crate::vehicle::{Vehicle, VehicleSpec};

#[derive(Debug, Clone)]
pub struct EnemyTank {
    pub vehicle: Vehicle,
    pub kind: EnemyKind,
    pub brain: EnemyBrain,
}

impl EnemyTank {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        id: VehicleId,
        kind: EnemyKind,
        position: Vec2,
        facing: Direction,
        stats: &EnemyStats,
        tuning: &AiTuning,
        invulnerability: f32,
        brain_seed: u64,
    ) -> Self {
        let mut vehicle = Vehicle::new(
            id,
            Faction::Enemy,
            position,
            VehicleSpec::from(stats),
            invulnerability,
        );
        vehicle.facing = facing;
        let brain = EnemyBrain::new(BehaviorProfile::new(stats, tuning), facing, brain_seed);
        Self {
            vehicle,
            kind,
            brain,
        }
    }

    pub fn ai_state(&self) -> AiState {
        self.brain.state()
    }

    pub fn view(&self, effects: &EffectsConfig) -> EnemyView {
        EnemyView {
            vehicle: self.vehicle.view(effects),
            kind: self.kind,
            ai_state: self.ai_state(),
        }
    }
}
