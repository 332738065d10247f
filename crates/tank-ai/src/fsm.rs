//! Generic finite state machine.
//!
//! States are plain data: a name plus function pointers over a context `C`
//! owned by the caller. The machine never stores the context, so the same
//! type drives both enemy behaviour and the top-level game mode.

use std::fmt;

pub type EnterFn<C> = fn(&mut C);
pub type TransitionFn<K, C> = fn(&C) -> Option<K>;
pub type UpdateFn<C> = fn(&mut C, f32);

/// One named state.
pub struct StateDef<K, C> {
    pub name: K,
    /// Runs once on every switch into this state, and for the initial state
    /// when the machine starts.
    pub enter: Option<EnterFn<C>>,
    /// Pure: names the state to switch to, if any.
    pub transition: TransitionFn<K, C>,
    /// Runs every update while this is the current state.
    pub update: UpdateFn<C>,
}

impl<K, C> StateDef<K, C> {
    pub fn new(name: K, transition: TransitionFn<K, C>, update: UpdateFn<C>) -> Self {
        Self {
            name,
            enter: None,
            transition,
            update,
        }
    }

    pub fn on_enter(mut self, enter: EnterFn<C>) -> Self {
        self.enter = Some(enter);
        self
    }
}

impl<K: Clone, C> Clone for StateDef<K, C> {
    fn clone(&self) -> Self {
        Self {
            name: self.name.clone(),
            enter: self.enter,
            transition: self.transition,
            update: self.update,
        }
    }
}

/// A set of states and the index of the current one.
pub struct StateMachine<K, C> {
    states: Vec<StateDef<K, C>>,
    current: usize,
}

impl<K: Copy + PartialEq, C> StateMachine<K, C> {
    /// Build a machine in `initial` and run its enter hook.
    ///
    /// When two states share a name the first one wins.
    pub fn start(
        initial: StateDef<K, C>,
        others: impl IntoIterator<Item = StateDef<K, C>>,
        ctx: &mut C,
    ) -> Self {
        let mut states = vec![initial];
        for state in others {
            if !states.iter().any(|known| known.name == state.name) {
                states.push(state);
            }
        }
        let machine = Self { states, current: 0 };
        if let Some(enter) = machine.states[0].enter {
            enter(ctx);
        }
        machine
    }

    pub fn current(&self) -> K {
        self.states[self.current].name
    }

    pub fn contains(&self, name: K) -> bool {
        self.index_of(name).is_some()
    }

    fn index_of(&self, name: K) -> Option<usize> {
        self.states.iter().position(|state| state.name == name)
    }

    /// Switch to `next` and run its enter hook. Unknown names and the
    /// current state are ignored; returns whether a switch happened.
    pub fn set_state(&mut self, next: K, ctx: &mut C) -> bool {
        if next == self.current() {
            return false;
        }
        let Some(index) = self.index_of(next) else {
            return false;
        };
        self.current = index;
        if let Some(enter) = self.states[index].enter {
            enter(ctx);
        }
        true
    }

    /// Apply the current state's transition, then run the (possibly new)
    /// current state's update.
    pub fn update(&mut self, ctx: &mut C, dt: f32) {
        if let Some(next) = (self.states[self.current].transition)(ctx) {
            self.set_state(next, ctx);
        }
        (self.states[self.current].update)(ctx, dt);
    }
}

impl<K: Clone, C> Clone for StateMachine<K, C> {
    fn clone(&self) -> Self {
        Self {
            states: self.states.clone(),
            current: self.current,
        }
    }
}

impl<K: fmt::Debug, C> fmt::Debug for StateMachine<K, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StateMachine")
            .field("current", &self.states[self.current].name)
            .field("states", &self.states.len())
            .finish()
    }
}
