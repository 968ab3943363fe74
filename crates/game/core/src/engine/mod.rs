//! Game orchestration: picks, cascades, undo and win/lose tracking.
//!
//! [`Game`] owns the board and counters and is the only thing that mutates
//! them. A pick becomes one [`CommandBatch`]: the seed command, then gravity,
//! then refill, with every reaction from the [`ReactionFactory`] spliced in
//! directly after the command that triggered it. Each executed command is
//! broadcast to listeners as it happens.
mod batch;
mod errors;
mod events;
mod reaction;

pub use batch::{CommandBatch, UndoHistory};
pub use errors::EngineError;
pub use events::{GameEvent, GameListener, ListenerSet};
pub use reaction::{DefaultReactionFactory, ReactionFactory};

use std::collections::VecDeque;
use std::num::NonZeroUsize;
use std::sync::Arc;

use crate::command::{
    ClearGroupCommand, Command, CommandEnv, CommandTransition, DEFAULT_MOVE_COST, FallCommand,
    RefillCommand,
};
use crate::config::{GameConfig, Rules};
use crate::env::{PcgRng, TileGenerator, TileRng};
use crate::state::{BoardState, Position, TileGrid, TileKind, has_moves};

/// The rule engine for one board.
#[derive(Debug)]
pub struct Game<F: ReactionFactory = DefaultReactionFactory> {
    rules: Rules,
    generator: TileGenerator,
    factory: F,
    state: BoardState,
    history: UndoHistory,
    listeners: ListenerSet,
}

impl Game {
    /// Starts configuring a game with the default reaction rules.
    pub fn builder(config: GameConfig) -> GameBuilder {
        GameBuilder::new(config)
    }
}

impl<F: ReactionFactory> Game<F> {
    /// Deals a random board from `generator` under `rules`.
    pub fn new(rules: Rules, mut generator: TileGenerator, factory: F) -> Result<Self, EngineError> {
        let grid = deal(&rules, &mut generator)?;
        Ok(Self::with_grid(rules, generator, factory, grid, UndoHistory::default()))
    }

    fn with_grid(
        rules: Rules,
        generator: TileGenerator,
        factory: F,
        grid: TileGrid,
        history: UndoHistory,
    ) -> Self {
        let state = BoardState::new(grid, rules.moves());
        Self {
            rules,
            generator,
            factory,
            state,
            history,
            listeners: ListenerSet::new(),
        }
    }

    /// Resolves a pick at `(x, y)` into one undoable batch.
    ///
    /// Does nothing once the game is over, or when the pick is a lone color
    /// tile. Picking an empty or unknown kind is an error. If a command fails
    /// part way, the commands that already ran stay on the undo stack.
    pub fn pick_tile(&mut self, x: i32, y: i32) -> Result<(), EngineError> {
        if self.is_game_over() {
            tracing::debug!(x, y, "pick ignored, game is over");
            return Ok(());
        }

        let position = Position::new(x, y);
        let tile = self
            .state
            .grid
            .get(position)
            .cloned()
            .ok_or(EngineError::OutOfBounds { position })?;

        let seed: Command = if self.rules.is_color_tile(&tile) {
            let clear = ClearGroupCommand::new(&self.state.grid, position);
            if clear.is_idle() {
                tracing::debug!(%position, %tile, "idle pick");
                return Ok(());
            }
            clear.into()
        } else if let Some(actions) = self.rules.actions_for(&tile) {
            if actions.is_empty() {
                return Err(EngineError::MissingSuperActions { tile });
            }
            self.factory
                .super_command(actions, position, DEFAULT_MOVE_COST)
                .map_err(|source| EngineError::command("burn", source))?
        } else {
            return Err(EngineError::UnpickableTile { position, tile });
        };

        tracing::debug!(%position, %tile, command = seed.name(), "pick");
        let seeds = [seed, FallCommand::lazy().into(), RefillCommand::new().into()];
        let executed = self.run_cascade(seeds.into());
        self.finish_batch(executed)
    }

    /// Reverts the most recent batch. Returns false when there is nothing to
    /// undo.
    pub fn undo(&mut self) -> Result<bool, EngineError> {
        let Some(batch) = self.history.pop() else {
            tracing::debug!("nothing to undo");
            return Ok(false);
        };

        tracing::debug!(commands = batch.len(), "undo");
        for command in batch.commands().iter().rev() {
            let result = command
                .revert(&mut self.state)
                .map_err(|source| EngineError::command(command.name(), source))?;
            tracing::trace!(command = command.name(), "reverted");
            self.listeners.emit(&GameEvent::Command(result));
        }
        Ok(true)
    }

    /// Deals a fresh board, optionally under a new configuration.
    ///
    /// An invalid configuration leaves the current game untouched.
    pub fn restart(&mut self, config: Option<GameConfig>) -> Result<(), EngineError> {
        if let Some(config) = config {
            let rules = Rules::new(config)?;
            self.generator.reconfigure(&rules);
            self.rules = rules;
        }

        let grid = deal(&self.rules, &mut self.generator)?;
        self.state = BoardState::new(grid, self.rules.moves());
        self.history.clear();

        tracing::debug!(
            width = self.rules.width(),
            height = self.rules.height(),
            moves = self.rules.moves(),
            "restart"
        );
        self.listeners.emit(&GameEvent::Restart {
            config: self.rules.config().clone(),
        });
        Ok(())
    }

    pub fn tile(&self, x: i32, y: i32) -> Option<&TileKind> {
        self.state.grid.tile(x, y)
    }

    pub fn score(&self) -> u32 {
        self.state.score()
    }

    pub fn moves_left(&self) -> u32 {
        self.state.moves_left()
    }

    /// Out of moves, or no legal pick left on the board.
    pub fn is_game_over(&self) -> bool {
        self.state.moves_left() == 0 || !self.has_moves()
    }

    pub fn width(&self) -> u32 {
        self.rules.width()
    }

    pub fn height(&self) -> u32 {
        self.rules.height()
    }

    pub fn rules(&self) -> &Rules {
        &self.rules
    }

    pub fn grid(&self) -> &TileGrid {
        &self.state.grid
    }

    pub fn state(&self) -> &BoardState {
        &self.state
    }

    /// Number of batches that can currently be undone.
    pub fn history_len(&self) -> usize {
        self.history.len()
    }

    pub fn add_listener(&mut self, listener: Arc<dyn GameListener>) {
        self.listeners.add(listener);
    }

    pub fn remove_listener(&mut self, listener: &Arc<dyn GameListener>) {
        self.listeners.remove(listener);
    }

    fn has_moves(&self) -> bool {
        has_moves(&self.state.grid, |tile| self.rules.is_super_tile(tile))
    }

    /// Drains `pending` front to back. Reactions to a command are pushed to
    /// the front of the queue, so they run before anything scheduled earlier.
    fn run_cascade(&mut self, mut pending: VecDeque<Command>) -> Executed {
        let mut executed = Vec::with_capacity(pending.len());

        while let Some(mut command) = pending.pop_front() {
            let name = command.name();
            let mut env = CommandEnv::new(&self.rules, &mut self.generator);

            let result = match command.apply(&mut self.state, &mut env) {
                Ok(result) => result,
                Err(source) => return Executed::failed(executed, EngineError::command(name, source)),
            };
            let reactions = self.factory.reactions(&result, &mut env);
            executed.push(command);

            tracing::trace!(
                command = name,
                score = self.state.score(),
                moves_left = self.state.moves_left(),
                "applied"
            );
            self.listeners.emit(&GameEvent::Command(result));

            match reactions {
                Ok(reactions) => {
                    for reaction in reactions.into_iter().rev() {
                        pending.push_front(reaction);
                    }
                }
                Err(source) => return Executed::failed(executed, EngineError::command(name, source)),
            }
        }

        Executed {
            commands: executed,
            error: None,
        }
    }

    fn finish_batch(&mut self, executed: Executed) -> Result<(), EngineError> {
        let Executed { commands, error } = executed;
        let count = commands.len();
        if !commands.is_empty() {
            self.history.push(commands.into());
        }
        if let Some(error) = error {
            tracing::debug!(commands = count, %error, "batch aborted");
            return Err(error);
        }

        tracing::debug!(
            commands = count,
            score = self.state.score(),
            moves_left = self.state.moves_left(),
            "batch complete"
        );
        self.announce_outcome();
        Ok(())
    }

    /// Emits at most one terminal event.
    fn announce_outcome(&self) {
        let outcome = if self.state.moves_left() == 0 {
            if self.state.score() >= self.rules.win_score() {
                GameEvent::Win
            } else {
                GameEvent::Lose
            }
        } else if !self.has_moves() {
            GameEvent::Lose
        } else {
            return;
        };

        tracing::info!(
            won = matches!(outcome, GameEvent::Win),
            score = self.state.score(),
            moves_left = self.state.moves_left(),
            "game over"
        );
        self.listeners.emit(&outcome);
    }
}

/// Commands that ran, plus the error that stopped the cascade early.
struct Executed {
    commands: Vec<Command>,
    error: Option<EngineError>,
}

impl Executed {
    fn failed(commands: Vec<Command>, error: EngineError) -> Self {
        Self {
            commands,
            error: Some(error),
        }
    }
}

/// Fills a board with random colors.
fn deal(rules: &Rules, generator: &mut TileGenerator) -> Result<TileGrid, EngineError> {
    let cells = rules.width() as usize * rules.height() as usize;
    let tiles = generator.random_colors(cells)?;
    Ok(TileGrid::new(rules.width(), rules.height(), tiles)?)
}

/// Step-by-step construction of a [`Game`].
pub struct GameBuilder<F: ReactionFactory = DefaultReactionFactory> {
    config: GameConfig,
    rng: Option<Box<dyn TileRng + Send>>,
    seed: u64,
    grid: Option<TileGrid>,
    factory: F,
    history_limit: Option<NonZeroUsize>,
}

impl GameBuilder {
    pub fn new(config: GameConfig) -> Self {
        Self {
            config,
            rng: None,
            seed: 0,
            grid: None,
            factory: DefaultReactionFactory,
            history_limit: None,
        }
    }
}

impl<F: ReactionFactory> GameBuilder<F> {
    /// Seeds the built-in [`PcgRng`]. Defaults to 0. Ignored when an
    /// explicit RNG is supplied.
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    pub fn rng<R>(mut self, rng: R) -> Self
    where
        R: TileRng + Send + 'static,
    {
        self.rng = Some(Box::new(rng));
        self
    }

    /// Starts from this board instead of a random one.
    pub fn grid(mut self, grid: TileGrid) -> Self {
        self.grid = Some(grid);
        self
    }

    pub fn factory<G: ReactionFactory>(self, factory: G) -> GameBuilder<G> {
        GameBuilder {
            config: self.config,
            rng: self.rng,
            seed: self.seed,
            grid: self.grid,
            factory,
            history_limit: self.history_limit,
        }
    }

    /// Keeps at most `limit` undoable batches.
    pub fn history_limit(mut self, limit: NonZeroUsize) -> Self {
        self.history_limit = Some(limit);
        self
    }

    pub fn build(self) -> Result<Game<F>, EngineError> {
        let rules = Rules::new(self.config)?;
        let mut generator = match self.rng {
            Some(rng) => TileGenerator::from_rules(&rules, rng),
            None => TileGenerator::from_rules(&rules, PcgRng::new(self.seed)),
        };

        let grid = match self.grid {
            Some(grid) => {
                if grid.width() != rules.width() || grid.height() != rules.height() {
                    return Err(EngineError::GridMismatch {
                        width: grid.width(),
                        height: grid.height(),
                        expected_width: rules.width(),
                        expected_height: rules.height(),
                    });
                }
                grid
            }
            None => deal(&rules, &mut generator)?,
        };

        Ok(Game::with_grid(
            rules,
            generator,
            self.factory,
            grid,
            UndoHistory::new(self.history_limit),
        ))
    }
}
