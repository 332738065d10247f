//! Enemy decision engine.
//!
//! Each enemy owns an `EnemyBrain`: a `StateMachine` over Patrol, Chase,
//! Attack and Retreat plus the mind those states read and write. The brain
//! never touches the vehicle. It turns the facts of one tick into an
//! `Intent`, which the simulation applies through the same move and fire
//! calls the player uses.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use tank_core::enums::AiState;
use tank_core::types::Direction;

use crate::fsm::{StateDef, StateMachine};
use crate::profiles::BehaviorProfile;
use crate::steering::{direction_away_from, direction_to_target};

/// What an enemy knows about the world this tick.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Facts {
    pub position: Vec2,
    pub player: Vec2,
    /// Centre-to-centre distance to the player (px).
    pub distance: f32,
    /// Current health over max health.
    pub health_ratio: f32,
}

impl Facts {
    pub fn observe(position: Vec2, player: Vec2, health: u32, max_health: u32) -> Self {
        let health_ratio = if max_health == 0 {
            0.0
        } else {
            health as f32 / max_health as f32
        };
        Self {
            position,
            player,
            distance: position.distance(player),
            health_ratio,
        }
    }
}

/// What the enemy wants its vehicle to do this tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Intent {
    pub facing: Direction,
    /// Displacement to attempt this tick, if moving.
    pub travel: Option<Vec2>,
    pub fire: bool,
}

impl Intent {
    fn hold(facing: Direction) -> Self {
        Self {
            facing,
            travel: None,
            fire: false,
        }
    }
}

/// State the behaviours read and write between ticks.
#[derive(Debug, Clone)]
pub struct EnemyMind {
    pub profile: BehaviorProfile,
    pub facts: Facts,
    pub facing: Direction,
    /// Time left before the next random patrol turn (s).
    pub patrol_timer: f32,
    /// Time left in the current retreat; never negative (s).
    pub retreat_timer: f32,
    rng: ChaCha8Rng,
    intent: Intent,
}

impl EnemyMind {
    fn sample_patrol_duration(&mut self) -> f32 {
        let (min, max) = (self.profile.patrol_turn_min, self.profile.patrol_turn_max);
        min + self.rng.gen::<f32>() * (max - min)
    }

    fn travel(&mut self, speed: f32, dt: f32) {
        self.intent.travel = Some(self.facing.unit() * speed * dt);
    }
}

/// Precedence rule shared by every state; the first match wins.
pub fn select_state(facts: &Facts, retreat_timer: f32, profile: &BehaviorProfile) -> AiState {
    if facts.health_ratio <= profile.retreat_threshold || retreat_timer > 0.0 {
        AiState::Retreat
    } else if facts.distance <= profile.attack_range {
        AiState::Attack
    } else if facts.distance <= profile.detect_range {
        AiState::Chase
    } else {
        AiState::Patrol
    }
}

fn decide(mind: &EnemyMind) -> Option<AiState> {
    Some(select_state(&mind.facts, mind.retreat_timer, &mind.profile))
}

fn enter_patrol(mind: &mut EnemyMind) {
    mind.patrol_timer = mind.sample_patrol_duration();
}

fn patrol(mind: &mut EnemyMind, dt: f32) {
    mind.patrol_timer -= dt;
    if mind.patrol_timer <= 0.0 {
        mind.facing = Direction::ALL[mind.rng.gen_range(0..Direction::ALL.len())];
        mind.patrol_timer = mind.sample_patrol_duration();
    }
    mind.travel(mind.profile.speed, dt);
}

fn chase(mind: &mut EnemyMind, dt: f32) {
    mind.facing = direction_to_target(mind.facts.position, mind.facts.player);
    mind.travel(mind.profile.chase_speed, dt);
}

fn attack(mind: &mut EnemyMind, _dt: f32) {
    mind.facing = direction_to_target(mind.facts.position, mind.facts.player);
    mind.intent.fire = true;
}

fn enter_retreat(mind: &mut EnemyMind) {
    mind.retreat_timer = mind.profile.retreat_duration;
}

fn retreat(mind: &mut EnemyMind, dt: f32) {
    mind.retreat_timer = (mind.retreat_timer - dt).max(0.0);
    mind.facing = direction_away_from(mind.facts.position, mind.facts.player);
    mind.travel(mind.profile.retreat_speed, dt);
}

/// Decision engine for one enemy.
#[derive(Debug, Clone)]
pub struct EnemyBrain {
    machine: StateMachine<AiState, EnemyMind>,
    mind: EnemyMind,
}

impl EnemyBrain {
    /// New brain in Patrol. `seed` feeds this enemy's private random stream.
    pub fn new(profile: BehaviorProfile, facing: Direction, seed: u64) -> Self {
        let mut mind = EnemyMind {
            profile,
            facts: Facts::default(),
            facing,
            patrol_timer: 0.0,
            retreat_timer: 0.0,
            rng: ChaCha8Rng::seed_from_u64(seed),
            intent: Intent::hold(facing),
        };
        let machine = StateMachine::start(
            StateDef::new(AiState::Patrol, decide, patrol).on_enter(enter_patrol),
            [
                StateDef::new(AiState::Chase, decide, chase),
                StateDef::new(AiState::Attack, decide, attack),
                StateDef::new(AiState::Retreat, decide, retreat).on_enter(enter_retreat),
            ],
            &mut mind,
        );
        Self { machine, mind }
    }

    pub fn state(&self) -> AiState {
        self.machine.current()
    }

    pub fn mind(&self) -> &EnemyMind {
        &self.mind
    }

    /// Run one tick of the state machine against fresh facts.
    pub fn think(&mut self, facing: Direction, facts: Facts, dt: f32) -> Intent {
        self.mind.facing = facing;
        self.mind.facts = facts;
        self.mind.intent = Intent::hold(facing);

        let before = self.machine.current();
        self.machine.update(&mut self.mind, dt);
        let after = self.machine.current();
        if before != after {
            tracing::debug!(
                "enemy AI {:?} -> {:?} (distance {:.1}, health {:.2})",
                before,
                after,
                facts.distance,
                facts.health_ratio
            );
        }

        self.mind.intent.facing = self.mind.facing;
        self.mind.intent
    }
}
