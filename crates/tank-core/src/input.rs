//! Player input as seen by the simulation.
//!
//! The core never subscribes to key events. Each frame it reads a snapshot of
//! which logical controls are held.

use serde::{Deserialize, Serialize};

/// Logical controls.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Control {
    Up,
    Down,
    Left,
    Right,
    Fire,
    Restart,
}

/// Anything that can answer "is this control held right now".
pub trait InputSource {
    fn is_held(&self, control: Control) -> bool;
}

/// Held state of every control for one frame.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InputSnapshot {
    pub up: bool,
    pub down: bool,
    pub left: bool,
    pub right: bool,
    pub fire: bool,
    pub restart: bool,
}

impl InputSnapshot {
    /// Read every control from `source` once.
    pub fn capture(source: &impl InputSource) -> Self {
        Self {
            up: source.is_held(Control::Up),
            down: source.is_held(Control::Down),
            left: source.is_held(Control::Left),
            right: source.is_held(Control::Right),
            fire: source.is_held(Control::Fire),
            restart: source.is_held(Control::Restart),
        }
    }

    /// Builder-style helper: mark `control` as held.
    pub fn with(mut self, control: Control) -> Self {
        match control {
            Control::Up => self.up = true,
            Control::Down => self.down = true,
            Control::Left => self.left = true,
            Control::Right => self.right = true,
            Control::Fire => self.fire = true,
            Control::Restart => self.restart = true,
        }
        self
    }
}

impl InputSource for InputSnapshot {
    fn is_held(&self, control: Control) -> bool {
        match control {
            Control::Up => self.up,
            Control::Down => self.down,
            Control::Left => self.left,
            Control::Right => self.right,
            Control::Fire => self.fire,
            Control::Restart => self.restart,
        }
    }
}
