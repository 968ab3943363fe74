//! Undo bookkeeping: one batch per player action.

use std::collections::VecDeque;
use std::num::NonZeroUsize;

use crate::command::Command;

/// Commands executed for one player action, in execution order, including
/// every reaction spliced in along the way.
#[derive(Clone, Debug, Default)]
pub struct CommandBatch {
    commands: Vec<Command>,
}

impl CommandBatch {
    pub fn commands(&self) -> &[Command] {
        &self.commands
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }
}

impl From<Vec<Command>> for CommandBatch {
    fn from(commands: Vec<Command>) -> Self {
        Self { commands }
    }
}

/// Stack of executed batches, optionally capped.
///
/// When a cap is set, pushing past it drops the oldest batch; that action
/// can no longer be undone.
#[derive(Clone, Debug, Default)]
pub struct UndoHistory {
    batches: VecDeque<CommandBatch>,
    limit: Option<NonZeroUsize>,
}

impl UndoHistory {
    pub fn new(limit: Option<NonZeroUsize>) -> Self {
        Self {
            batches: VecDeque::new(),
            limit,
        }
    }

    pub fn limit(&self) -> Option<NonZeroUsize> {
        self.limit
    }

    pub fn push(&mut self, batch: CommandBatch) {
        if let Some(limit) = self.limit {
            while self.batches.len() >= limit.get() {
                let Some(evicted) = self.batches.pop_front() else {
                    break;
                };
                tracing::warn!(
                    limit = limit.get(),
                    commands = evicted.len(),
                    "undo history full, dropping oldest batch"
                );
            }
        }
        self.batches.push_back(batch);
    }

    pub fn pop(&mut self) -> Option<CommandBatch> {
        self.batches.pop_back()
    }

    pub fn clear(&mut self) {
        self.batches.clear();
    }

    pub fn len(&self) -> usize {
        self.batches.len()
    }

    pub fn is_empty(&self) -> bool {
        self.batches.is_empty()
    }
}
