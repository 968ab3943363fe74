//! Maintains the CLI message log in response to engine events.
use std::sync::Mutex;

use blast_core::{CommandResult, GameEvent, GameListener};

/// Listener that turns every event into a log line and a message for the
/// player.
#[derive(Debug, Default)]
pub struct EventLog {
    messages: Mutex<Vec<String>>,
}

impl EventLog {
    /// Adds a message that did not come from the engine.
    pub fn push(&self, message: impl Into<String>) {
        match self.messages.lock() {
            Ok(mut messages) => messages.push(message.into()),
            Err(poisoned) => poisoned.into_inner().push(message.into()),
        }
    }

    /// Messages collected since the last call.
    pub fn drain(&self) -> Vec<String> {
        match self.messages.lock() {
            Ok(mut messages) => std::mem::take(&mut *messages),
            Err(poisoned) => std::mem::take(&mut *poisoned.into_inner()),
        }
    }
}

impl GameListener for EventLog {
    fn on_event(&self, event: &GameEvent) {
        let message = describe(event);
        if event.is_terminal() || matches!(event, GameEvent::Restart { .. }) {
            tracing::info!("{}", message);
        } else {
            tracing::debug!("{}", message);
        }

        self.push(message);
    }
}

/// Player-facing summary of one event.
pub fn describe(event: &GameEvent) -> String {
    match event {
        GameEvent::Win => "You win!".to_owned(),
        GameEvent::Lose => "Game over.".to_owned(),
        GameEvent::Restart { config } => format!(
            "New {}x{} board: {} moves to reach {} points",
            config.width, config.height, config.moves, config.win_score
        ),
        GameEvent::Command(result) => describe_command(result),
    }
}

fn describe_command(result: &CommandResult) -> String {
    match result {
        CommandResult::GroupCleared { origin, tiles, delta } => format!(
            "Cleared {} tiles at {} ({:+} points)",
            tiles.len(),
            origin,
            delta.score
        ),
        CommandResult::Burned {
            detonator,
            tiles,
            delta,
        } => format!(
            "Detonation at {} burned {} tiles ({:+} points)",
            detonator,
            tiles.len(),
            delta.score
        ),
        CommandResult::Moved { moves } => format!("{} tiles fell", moves.len()),
        CommandResult::Refilled { tiles } => format!("{} new tiles", tiles.len()),
        CommandResult::Appeared { tiles, delta } => match tiles.as_slice() {
            [single] if delta.is_zero() => format!("{} appeared at {}", single.tile, single.position),
            _ => format!("{} tiles restored ({:+} points)", tiles.len(), delta.score),
        },
        CommandResult::Disappeared { tiles, .. } => format!("{} tiles removed", tiles.len()),
    }
}

#[cfg(test)]
mod tests {
    use blast_core::{Position, StatDelta, TileKind, TilePosition};

    use super::*;

    fn tiles(n: i32) -> Vec<TilePosition> {
        (0..n)
            .map(|x| TilePosition::new(Position::new(x, 0), TileKind::new("red")))
            .collect()
    }

    #[test]
    fn describes_commands() {
        let cleared = GameEvent::Command(CommandResult::GroupCleared {
            origin: Position::new(1, 2),
            tiles: tiles(3),
            delta: StatDelta::new(3, -1),
        });
        assert_eq!(describe(&cleared), "Cleared 3 tiles at (1, 2) (+3 points)");

        let spawned = GameEvent::Command(CommandResult::Appeared {
            tiles: vec![TilePosition::new(Position::new(0, 0), TileKind::new("bomb"))],
            delta: StatDelta::ZERO,
        });
        assert_eq!(describe(&spawned), "bomb appeared at (0, 0)");

        let restored = GameEvent::Command(CommandResult::Appeared {
            tiles: tiles(2),
            delta: StatDelta::new(-2, 1),
        });
        assert_eq!(describe(&restored), "2 tiles restored (-2 points)");
    }

    #[test]
    fn collects_messages_until_drained() {
        let log = EventLog::default();
        log.on_event(&GameEvent::Win);
        log.on_event(&GameEvent::Command(CommandResult::Moved { moves: Vec::new() }));

        assert_eq!(log.drain(), ["You win!", "0 tiles fell"]);
        assert!(log.drain().is_empty());
    }
}
