//! Events broadcast to listeners and the listener registry.

use std::fmt;
use std::sync::Arc;

use crate::command::CommandResult;
use crate::config::GameConfig;

/// Everything a presentation layer needs to replay a game.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(tag = "event", rename_all = "snake_case")
)]
pub enum GameEvent {
    Win,
    Lose,
    /// A fresh board was dealt under `config`.
    Restart { config: GameConfig },
    /// A command ran (or was undone).
    Command(CommandResult),
}

impl GameEvent {
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Win | Self::Lose)
    }
}

/// Receives every event the game emits, synchronously and in order.
pub trait GameListener: Send + Sync {
    fn on_event(&self, event: &GameEvent);
}

impl<F> GameListener for F
where
    F: Fn(&GameEvent) + Send + Sync,
{
    fn on_event(&self, event: &GameEvent) {
        self(event)
    }
}

/// Registered listeners in registration order. Identity is the `Arc`
/// allocation, so adding the same listener twice is a no-op.
#[derive(Clone, Default)]
pub struct ListenerSet {
    listeners: Vec<Arc<dyn GameListener>>,
}

impl ListenerSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns false when the listener was already registered.
    pub fn add(&mut self, listener: Arc<dyn GameListener>) -> bool {
        if self.contains(&listener) {
            return false;
        }
        self.listeners.push(listener);
        true
    }

    /// Returns false when the listener was not registered.
    pub fn remove(&mut self, listener: &Arc<dyn GameListener>) -> bool {
        let before = self.listeners.len();
        self.listeners
            .retain(|registered| !Arc::ptr_eq(registered, listener));
        self.listeners.len() != before
    }

    pub fn contains(&self, listener: &Arc<dyn GameListener>) -> bool {
        self.listeners
            .iter()
            .any(|registered| Arc::ptr_eq(registered, listener))
    }

    pub fn len(&self) -> usize {
        self.listeners.len()
    }

    pub fn is_empty(&self) -> bool {
        self.listeners.is_empty()
    }

    pub fn emit(&self, event: &GameEvent) {
        for listener in &self.listeners {
            listener.on_event(event);
        }
    }
}

impl fmt::Debug for ListenerSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ListenerSet")
            .field("len", &self.listeners.len())
            .finish()
    }
}
