use std::fmt;
use std::sync::{Arc, OnceLock};

/// Opaque identifier of a tile kind (a color, a super tile, or empty).
///
/// Kinds are compared by name. Cloning is cheap: the name is shared.
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(from = "String", into = "String")
)]
pub struct TileKind(Arc<str>);

impl TileKind {
    /// Reserved name marking an unoccupied cell.
    pub const EMPTY_NAME: &'static str = "empty";

    pub fn new(name: impl AsRef<str>) -> Self {
        Self(Arc::from(name.as_ref()))
    }

    /// The reserved kind for unoccupied cells.
    pub fn empty() -> Self {
        static EMPTY: OnceLock<TileKind> = OnceLock::new();
        EMPTY
            .get_or_init(|| TileKind::new(TileKind::EMPTY_NAME))
            .clone()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        &*self.0 == Self::EMPTY_NAME
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for TileKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", &*self.0)
    }
}

impl fmt::Display for TileKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for TileKind {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<&str> for TileKind {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl From<String> for TileKind {
    fn from(name: String) -> Self {
        Self(Arc::from(name))
    }
}

impl From<TileKind> for String {
    fn from(kind: TileKind) -> Self {
        kind.0.to_string()
    }
}

/// Discrete grid position expressed in tile coordinates.
///
/// Row `y = 0` is the bottom of the board; gravity pulls toward it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub const ORIGIN: Self = Self { x: 0, y: 0 };

    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    pub const fn offset(self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }
}

impl Default for Position {
    fn default() -> Self {
        Self::ORIGIN
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// A position together with the kind that occupies (or occupied) it.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TilePosition {
    pub position: Position,
    pub tile: TileKind,
}

impl TilePosition {
    pub fn new(position: Position, tile: TileKind) -> Self {
        Self { position, tile }
    }
}

/// One-step relocation of a tile from `from` to `to`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TileMove {
    pub from: Position,
    pub to: Position,
}

impl TileMove {
    pub const fn new(from: Position, to: Position) -> Self {
        Self { from, to }
    }

    /// The same move travelled backwards.
    pub const fn reversed(self) -> Self {
        Self {
            from: self.to,
            to: self.from,
        }
    }
}

/// Signed change applied to the score and moves-left counters.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StatDelta {
    pub score: i32,
    pub moves: i32,
}

impl StatDelta {
    pub const ZERO: Self = Self { score: 0, moves: 0 };

    pub const fn new(score: i32, moves: i32) -> Self {
        Self { score, moves }
    }

    /// Score of `cleared` tiles paid for with `cost` moves.
    pub fn spend(cleared: usize, cost: u32) -> Self {
        Self {
            score: i32::try_from(cleared).unwrap_or(i32::MAX),
            moves: -i32::try_from(cost).unwrap_or(i32::MAX),
        }
    }

    pub const fn inverse(self) -> Self {
        Self {
            score: -self.score,
            moves: -self.moves,
        }
    }

    pub const fn is_zero(&self) -> bool {
        self.score == 0 && self.moves == 0
    }
}
