//! Enemy AI for the tank battle simulation.
//!
//! A generic named-state machine, axis-dominant steering helpers, per-type
//! behaviour profiles and the enemy decision engine built on top of them.

pub mod enemy;
pub mod fsm;
pub mod profiles;
pub mod steering;

pub use tank_core as core;

pub use enemy::{select_state, EnemyBrain, Facts, Intent};
pub use fsm::{StateDef, StateMachine};
