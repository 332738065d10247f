//! State shared between the runner's main thread and the game loop thread.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc;
use std::sync::{Arc, Mutex};

use tank_core::input::InputSnapshot;
use tank_core::state::GameSnapshot;

/// Messages sent to the game loop thread.
#[derive(Debug)]
pub enum GameLoopCommand {
    /// Controls held from now on, until the next `Input`.
    Input(InputSnapshot),
    /// Shut down the game loop thread gracefully.
    Shutdown,
}

/// Handles the main thread keeps on a running game loop.
///
/// - `command_tx` forwards input to the loop
/// - `latest_snapshot` is overwritten by the loop after every frame
/// - `running` is cleared by the loop when it exits
pub struct AppState {
    pub command_tx: Mutex<Option<mpsc::Sender<GameLoopCommand>>>,
    pub latest_snapshot: Arc<Mutex<Option<GameSnapshot>>>,
    pub running: Arc<AtomicBool>,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            command_tx: Mutex::new(None),
            latest_snapshot: Arc::new(Mutex::new(None)),
            running: Arc::new(AtomicBool::new(false)),
        }
    }
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_running(&self) -> bool {
        self.running.load(Ordering::SeqCst)
    }

    /// Send a command to the loop. False if no loop is attached or it has
    /// already exited.
    pub fn send(&self, command: GameLoopCommand) -> bool {
        match self.command_tx.lock() {
            Ok(guard) => guard
                .as_ref()
                .is_some_and(|tx| tx.send(command).is_ok()),
            Err(_) => false,
        }
    }

    /// Copy of the most recent snapshot, if any frame has run yet.
    pub fn snapshot(&self) -> Option<GameSnapshot> {
        self.latest_snapshot
            .lock()
            .ok()
            .and_then(|guard| guard.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_state_creation() {
        let state = AppState::new();
        assert!(state.command_tx.lock().unwrap().is_none());
        assert!(state.latest_snapshot.lock().unwrap().is_none());
        assert!(!state.is_running());
    }

    #[test]
    fn test_send_without_loop_fails() {
        let state = AppState::new();
        assert!(!state.send(GameLoopCommand::Shutdown));
    }

    #[test]
    fn test_send_reaches_receiver() {
        let state = AppState::new();
        let (tx, rx) = mpsc::channel();
        *state.command_tx.lock().unwrap() = Some(tx);

        assert!(state.send(GameLoopCommand::Input(InputSnapshot::default())));
        assert!(matches!(rx.try_recv(), Ok(GameLoopCommand::Input(_))));

        drop(rx);
        assert!(!state.send(GameLoopCommand::Shutdown));
    }
}
