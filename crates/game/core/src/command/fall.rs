use super::{CommandEnv, CommandError, CommandResult, CommandTransition};
use crate::state::{BoardState, Position, TileGrid, TileKind, TileMove};

/// Computes the moves that settle every column toward `y = 0`.
///
/// Columns are scanned bottom-up. A cell is vacant when it is empty or its
/// tile has already been scheduled to leave; each vacancy pulls the nearest
/// tile above it that is occupied and not already leaving. Every tile moves
/// at most once.
pub fn compute_falls(grid: &TileGrid) -> Vec<TileMove> {
    let mut moves: Vec<TileMove> = Vec::new();
    let leaving = |moves: &[TileMove], position: Position| moves.iter().any(|m| m.from == position);
    let taken = |moves: &[TileMove], position: Position| moves.iter().any(|m| m.to == position);

    let (width, height) = (grid.width() as i32, grid.height() as i32);
    for x in 0..width {
        for y in 0..height {
            let vacancy = Position::new(x, y);
            if !grid.is_empty_at(vacancy) && !leaving(&moves, vacancy) {
                continue;
            }
            for fall_y in (y + 1)..height {
                let source = Position::new(x, fall_y);
                let settled = grid.get(source).is_none_or(TileKind::is_empty)
                    || leaving(&moves, source)
                    || taken(&moves, vacancy);
                if settled {
                    continue;
                }
                moves.push(TileMove::new(source, vacancy));
                break;
            }
        }
    }

    moves
}

/// Relocates tiles along `moves`, then blanks every source that no other
/// move refilled.
fn shift(grid: &mut TileGrid, moves: &[TileMove]) {
    let carried: Vec<Option<TileKind>> = moves.iter().map(|m| grid.get(m.from).cloned()).collect();
    for (step, tile) in moves.iter().zip(carried) {
        if let Some(tile) = tile {
            grid.set(step.to, tile);
        }
    }
    for step in moves {
        if !moves.iter().any(|other| other.to == step.from) {
            grid.set(step.from, TileKind::empty());
        }
    }
}

/// Gravity.
///
/// Built either from an explicit move list or lazily, in which case the
/// moves are computed from the board the first time the command runs.
/// Reverting replays the same moves backwards.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FallCommand {
    moves: Option<Vec<TileMove>>,
}

impl FallCommand {
    /// Moves computed from the live board on first apply.
    pub fn lazy() -> Self {
        Self { moves: None }
    }

    pub fn with_moves(moves: Vec<TileMove>) -> Self {
        Self { moves: Some(moves) }
    }

    /// Moves against `grid` as it is now.
    pub fn from_grid(grid: &TileGrid) -> Self {
        Self::with_moves(compute_falls(grid))
    }

    /// Scheduled moves; `None` until a lazy command has run.
    pub fn moves(&self) -> Option<&[TileMove]> {
        self.moves.as_deref()
    }
}

impl CommandTransition for FallCommand {
    fn apply(
        &mut self,
        state: &mut BoardState,
        _env: &mut CommandEnv<'_>,
    ) -> Result<CommandResult, CommandError> {
        let moves = self
            .moves
            .get_or_insert_with(|| compute_falls(&state.grid))
            .clone();
        shift(&mut state.grid, &moves);
        Ok(CommandResult::Moved { moves })
    }

    fn revert(&self, state: &mut BoardState) -> Result<CommandResult, CommandError> {
        let moves = self.moves.as_ref().ok_or(CommandError::NotApplied)?;
        let reversed: Vec<TileMove> = moves.iter().map(|m| m.reversed()).collect();
        shift(&mut state.grid, &reversed);
        Ok(CommandResult::Moved { moves: reversed })
    }
}
