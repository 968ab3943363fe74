#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use blast_core::{
    BurnRule, CommandResult, Game, GameConfig, GameEvent, GameListener, ReactionFactory,
    SuperAction, TileGrid, TileRng,
};

pub const COLORS: [&str; 5] = ["red", "green", "blue", "purple", "yellow"];

/// Five colors and the four classic supers.
pub fn config(width: u32, height: u32) -> GameConfig {
    GameConfig::new(width, height, 10, 500, COLORS)
        .with_count_to_super(6)
        .with_super("burn_row", [SuperAction::burn([BurnRule::row()])])
        .with_super("burn_column", [SuperAction::burn([BurnRule::column()])])
        .with_super("burn_around", [SuperAction::burn([BurnRule::square(1)])])
        .with_super("burn_all", [SuperAction::burn([BurnRule::board()])])
}

/// Builds a grid from whitespace-separated rows, row `y = 0` first.
pub fn grid(width: u32, height: u32, rows: &[&str]) -> TileGrid {
    let names: Vec<&str> = rows.iter().flat_map(|row| row.split_whitespace()).collect();
    TileGrid::from_names(width, height, &names).unwrap()
}

/// Color board without adjacent equal pairs in a row; `(x, y)` gets
/// `COLORS[(x + 2y) % 5]`.
pub fn striped(width: u32, height: u32) -> TileGrid {
    let names: Vec<&str> = (0..height)
        .flat_map(|y| (0..width).map(move |x| COLORS[((x + 2 * y) % 5) as usize]))
        .collect();
    TileGrid::from_names(width, height, &names).unwrap()
}

pub fn row<F: ReactionFactory>(game: &Game<F>, y: i32) -> Vec<String> {
    (0..game.width() as i32)
        .map(|x| game.tile(x, y).map(ToString::to_string).unwrap_or_default())
        .collect()
}

/// Replays `draws`, then repeats the last one.
pub struct Scripted {
    draws: Vec<u32>,
    cursor: usize,
}

impl Scripted {
    pub fn new(draws: impl Into<Vec<u32>>) -> Self {
        Self {
            draws: draws.into(),
            cursor: 0,
        }
    }
}

impl TileRng for Scripted {
    fn next_u32(&mut self) -> u32 {
        let idx = self.cursor.min(self.draws.len().saturating_sub(1));
        self.cursor += 1;
        self.draws.get(idx).copied().unwrap_or(0)
    }
}

/// Always draws the first entry of any pool.
pub fn first_pick() -> Scripted {
    Scripted::new([0])
}

#[derive(Default)]
pub struct Recorder {
    events: Mutex<Vec<GameEvent>>,
}

impl Recorder {
    pub fn attach<F: ReactionFactory>(game: &mut Game<F>) -> Arc<Self> {
        let recorder = Arc::new(Self::default());
        game.add_listener(recorder.clone());
        recorder
    }

    pub fn take(&self) -> Vec<GameEvent> {
        std::mem::take(&mut *self.events.lock().unwrap())
    }

    /// Event kinds in order, e.g. `["burned", "moved", "refilled", "win"]`.
    pub fn take_kinds(&self) -> Vec<&'static str> {
        self.take().iter().map(kind).collect()
    }
}

impl GameListener for Recorder {
    fn on_event(&self, event: &GameEvent) {
        self.events.lock().unwrap().push(event.clone());
    }
}

pub fn kind(event: &GameEvent) -> &'static str {
    match event {
        GameEvent::Win => "win",
        GameEvent::Lose => "lose",
        GameEvent::Restart { .. } => "restart",
        GameEvent::Command(result) => match result {
            CommandResult::GroupCleared { .. } => "group_cleared",
            CommandResult::Burned { .. } => "burned",
            CommandResult::Moved { .. } => "moved",
            CommandResult::Refilled { .. } => "refilled",
            CommandResult::Appeared { .. } => "appeared",
            CommandResult::Disappeared { .. } => "disappeared",
        },
    }
}
