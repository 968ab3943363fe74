use sha2::{Digest, Sha256};

use super::error::GridError;
use super::types::{Position, TileKind};

/// Fixed-size, row-major board of tile kinds.
///
/// Dimensions never change after construction. Every cell always holds exactly
/// one [`TileKind`]; out-of-range reads return `None` and out-of-range writes
/// are ignored.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TileGrid {
    width: u32,
    height: u32,
    tiles: Vec<TileKind>,
}

impl TileGrid {
    /// Builds a grid from `width * height` tiles laid out row by row,
    /// starting with row `y = 0`.
    pub fn new(width: u32, height: u32, tiles: Vec<TileKind>) -> Result<Self, GridError> {
        let expected = width as usize * height as usize;
        if tiles.len() != expected {
            return Err(GridError::SizeMismatch {
                width,
                height,
                expected,
                actual: tiles.len(),
            });
        }
        Ok(Self {
            width,
            height,
            tiles,
        })
    }

    /// Convenience constructor taking tile names.
    pub fn from_names<S: AsRef<str>>(
        width: u32,
        height: u32,
        names: &[S],
    ) -> Result<Self, GridError> {
        Self::new(width, height, names.iter().map(TileKind::new).collect())
    }

    /// A grid where every cell holds `kind`.
    pub fn filled(width: u32, height: u32, kind: TileKind) -> Self {
        Self {
            width,
            height,
            tiles: vec![kind; width as usize * height as usize],
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    #[inline]
    pub fn contains(&self, position: Position) -> bool {
        position.x >= 0
            && position.y >= 0
            && (position.x as u32) < self.width
            && (position.y as u32) < self.height
    }

    #[inline]
    fn index(&self, position: Position) -> Option<usize> {
        self.contains(position)
            .then(|| position.y as usize * self.width as usize + position.x as usize)
    }

    /// Returns the kind at `position`, or `None` outside the board.
    pub fn get(&self, position: Position) -> Option<&TileKind> {
        self.index(position).map(|idx| &self.tiles[idx])
    }

    pub fn tile(&self, x: i32, y: i32) -> Option<&TileKind> {
        self.get(Position::new(x, y))
    }

    /// Overwrites the cell at `position`. Returns `false` (and changes
    /// nothing) when the position lies outside the board.
    pub fn set(&mut self, position: Position, kind: TileKind) -> bool {
        match self.index(position) {
            Some(idx) => {
                self.tiles[idx] = kind;
                true
            }
            None => false,
        }
    }

    pub fn is_empty_at(&self, position: Position) -> bool {
        self.get(position).is_some_and(TileKind::is_empty)
    }

    /// Every position, column by column (x outer, y inner).
    pub fn positions(&self) -> impl Iterator<Item = Position> + use<> {
        let (width, height) = (self.width as i32, self.height as i32);
        (0..width).flat_map(move |x| (0..height).map(move |y| Position::new(x, y)))
    }

    /// Row-major view of all cells.
    pub fn tiles(&self) -> &[TileKind] {
        &self.tiles
    }

    /// Deterministic SHA-256 fingerprint of dimensions and contents.
    ///
    /// Two grids share a root exactly when they have the same size and every
    /// cell holds the same kind.
    pub fn state_root(&self) -> [u8; 32] {
        let mut hasher = Sha256::new();
        hasher.update(self.width.to_le_bytes());
        hasher.update(self.height.to_le_bytes());
        for tile in &self.tiles {
            let name = tile.as_str().as_bytes();
            hasher.update((name.len() as u32).to_le_bytes());
            hasher.update(name);
        }
        hasher.finalize().into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> TileGrid {
        TileGrid::from_names(3, 2, &["red", "green", "blue", "yellow", "red", "purple"]).unwrap()
    }

    #[test]
    fn reads_row_major_cells() {
        let grid = sample();
        assert_eq!(grid.tile(0, 0).map(TileKind::as_str), Some("red"));
        assert_eq!(grid.tile(2, 0).map(TileKind::as_str), Some("blue"));
        assert_eq!(grid.tile(1, 1).map(TileKind::as_str), Some("red"));
    }

    #[test]
    fn out_of_range_reads_are_absent() {
        let grid = sample();
        for (x, y) in [(-1, 0), (0, -1), (3, 0), (0, 2), (i32::MAX, i32::MIN)] {
            assert!(grid.tile(x, y).is_none(), "({x}, {y}) should be absent");
        }
    }

    #[test]
    fn out_of_range_writes_are_ignored() {
        let mut grid = sample();
        let before = grid.clone();
        assert!(!grid.set(Position::new(3, 1), TileKind::new("green")));
        assert!(!grid.set(Position::new(-1, -1), TileKind::new("green")));
        assert_eq!(grid, before);

        assert!(grid.set(Position::new(1, 0), TileKind::empty()));
        assert!(grid.is_empty_at(Position::new(1, 0)));
    }

    #[test]
    fn rejects_wrong_tile_count() {
        let err = TileGrid::from_names(2, 2, &["red"]).unwrap_err();
        assert_eq!(
            err,
            GridError::SizeMismatch {
                width: 2,
                height: 2,
                expected: 4,
                actual: 1
            }
        );
    }

    #[test]
    fn state_root_tracks_contents() {
        let mut grid = sample();
        let root = grid.state_root();
        assert_eq!(root, sample().state_root());

        grid.set(Position::new(0, 0), TileKind::new("blue"));
        assert_ne!(grid.state_root(), root);

        grid.set(Position::new(0, 0), TileKind::new("red"));
        assert_eq!(hex::encode(grid.state_root()), hex::encode(root));
    }

    #[test]
    fn positions_walk_columns() {
        let grid = sample();
        let positions: Vec<_> = grid.positions().collect();
        assert_eq!(positions.len(), 6);
        assert_eq!(positions[0], Position::new(0, 0));
        assert_eq!(positions[1], Position::new(0, 1));
        assert_eq!(positions[2], Position::new(1, 0));
    }
}
