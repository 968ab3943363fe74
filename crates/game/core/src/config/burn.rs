//! Burn patterns bound to super tiles and their resolution against a board.

use crate::state::Position;

/// One endpoint coordinate of a ranged burn.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AxisBound {
    /// Offset relative to the detonator along this axis.
    Offset(i32),
    /// Extends to the board boundary on this side.
    Edge,
}

/// Corner of a ranged burn.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RangePoint {
    pub x: AxisBound,
    pub y: AxisBound,
}

impl RangePoint {
    pub const fn new(x: AxisBound, y: AxisBound) -> Self {
        Self { x, y }
    }
}

/// A single cell offset or an axis-aligned rectangle relative to the
/// detonator.
///
/// On the wire an offset is `{ x, y }` and a range is a two-element array of
/// corners, where either coordinate of a corner may be `"edge"` (or the
/// short form `"e"`).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(untagged)
)]
pub enum BurnRule {
    Offset { x: i32, y: i32 },
    Range(RangePoint, RangePoint),
}

impl BurnRule {
    pub const fn offset(x: i32, y: i32) -> Self {
        Self::Offset { x, y }
    }

    pub const fn range(from: RangePoint, to: RangePoint) -> Self {
        Self::Range(from, to)
    }

    /// Every cell of the row through the detonator.
    pub const fn row() -> Self {
        Self::Range(
            RangePoint::new(AxisBound::Edge, AxisBound::Offset(0)),
            RangePoint::new(AxisBound::Edge, AxisBound::Offset(0)),
        )
    }

    /// Every cell of the column through the detonator.
    pub const fn column() -> Self {
        Self::Range(
            RangePoint::new(AxisBound::Offset(0), AxisBound::Edge),
            RangePoint::new(AxisBound::Offset(0), AxisBound::Edge),
        )
    }

    /// The square of the given radius around the detonator.
    pub const fn square(radius: i32) -> Self {
        Self::Range(
            RangePoint::new(AxisBound::Offset(-radius), AxisBound::Offset(-radius)),
            RangePoint::new(AxisBound::Offset(radius), AxisBound::Offset(radius)),
        )
    }

    /// The whole board.
    pub const fn board() -> Self {
        Self::Range(
            RangePoint::new(AxisBound::Edge, AxisBound::Edge),
            RangePoint::new(AxisBound::Edge, AxisBound::Edge),
        )
    }
}

/// Lower end of a range along one axis.
fn range_start(center: i64, bound: AxisBound) -> i64 {
    match bound {
        AxisBound::Edge => 0,
        AxisBound::Offset(offset) => (center + i64::from(offset)).max(0),
    }
}

/// Upper end of a range along one axis.
fn range_end(center: i64, bound: AxisBound, size: u32) -> i64 {
    let last = i64::from(size) - 1;
    match bound {
        AxisBound::Edge => last,
        AxisBound::Offset(offset) => (center + i64::from(offset)).min(last),
    }
}

/// Resolves burn rules into absolute board positions.
///
/// The result is in-bounds, free of duplicates (first occurrence wins) and
/// never contains the detonator itself. Rules are applied in order; range
/// cells are enumerated column by column.
pub fn resolve_burn_positions(
    rules: &[BurnRule],
    detonator: Position,
    width: u32,
    height: u32,
) -> Vec<Position> {
    let (cx, cy) = (i64::from(detonator.x), i64::from(detonator.y));
    let in_bounds =
        |x: i64, y: i64| x >= 0 && y >= 0 && x < i64::from(width) && y < i64::from(height);

    let mut positions = Vec::new();
    let mut push = |x: i64, y: i64| {
        if !in_bounds(x, y) {
            return;
        }
        // In-bounds coordinates always fit in i32.
        let position = Position::new(x as i32, y as i32);
        if position != detonator && !positions.contains(&position) {
            positions.push(position);
        }
    };

    for rule in rules {
        match *rule {
            BurnRule::Offset { x, y } => push(cx + i64::from(x), cy + i64::from(y)),
            BurnRule::Range(from, to) => {
                let (x0, x1) = (range_start(cx, from.x), range_end(cx, to.x, width));
                let (y0, y1) = (range_start(cy, from.y), range_end(cy, to.y, height));
                for x in x0..=x1 {
                    for y in y0..=y1 {
                        push(x, y);
                    }
                }
            }
        }
    }

    positions
}

#[cfg(feature = "serde")]
mod wire {
    use core::fmt;

    use serde::de::{self, Deserializer, Visitor};
    use serde::ser::Serializer;

    use super::AxisBound;

    const EDGE: &str = "edge";
    const EDGE_SHORT: &str = "e";

    impl serde::Serialize for AxisBound {
        fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
            match self {
                Self::Offset(offset) => serializer.serialize_i32(*offset),
                Self::Edge => serializer.serialize_str(EDGE),
            }
        }
    }

    struct AxisBoundVisitor;

    impl<'de> Visitor<'de> for AxisBoundVisitor {
        type Value = AxisBound;

        fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str("an integer offset or \"edge\"")
        }

        fn visit_i64<E: de::Error>(self, value: i64) -> Result<AxisBound, E> {
            i32::try_from(value)
                .map(AxisBound::Offset)
                .map_err(|_| E::invalid_value(de::Unexpected::Signed(value), &self))
        }

        fn visit_u64<E: de::Error>(self, value: u64) -> Result<AxisBound, E> {
            i32::try_from(value)
                .map(AxisBound::Offset)
                .map_err(|_| E::invalid_value(de::Unexpected::Unsigned(value), &self))
        }

        fn visit_str<E: de::Error>(self, value: &str) -> Result<AxisBound, E> {
            match value {
                EDGE | EDGE_SHORT => Ok(AxisBound::Edge),
                other => Err(E::invalid_value(de::Unexpected::Str(other), &self)),
            }
        }
    }

    impl<'de> serde::Deserialize<'de> for AxisBound {
        fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
            deserializer.deserialize_any(AxisBoundVisitor)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sorted(mut positions: Vec<Position>) -> Vec<Position> {
        positions.sort();
        positions
    }

    #[test]
    fn offsets_outside_the_board_are_dropped() {
        let rules = [BurnRule::offset(-1, 0), BurnRule::offset(1, 0)];
        let resolved = resolve_burn_positions(&rules, Position::new(0, 0), 3, 3);
        assert_eq!(resolved, vec![Position::new(1, 0)]);
    }

    #[test]
    fn row_spans_the_board_without_the_detonator() {
        let resolved = resolve_burn_positions(&[BurnRule::row()], Position::new(2, 1), 4, 3);
        assert_eq!(
            resolved,
            vec![Position::new(0, 1), Position::new(1, 1), Position::new(3, 1)]
        );
    }

    #[test]
    fn square_is_clipped_at_the_corner() {
        let resolved = resolve_burn_positions(&[BurnRule::square(1)], Position::new(0, 0), 4, 4);
        assert_eq!(
            sorted(resolved),
            vec![Position::new(0, 1), Position::new(1, 0), Position::new(1, 1)]
        );
    }

    #[test]
    fn overlapping_rules_are_deduplicated_in_order() {
        let rules = [BurnRule::column(), BurnRule::offset(0, 1), BurnRule::row()];
        let resolved = resolve_burn_positions(&rules, Position::new(1, 1), 3, 3);
        assert_eq!(
            resolved,
            vec![
                Position::new(1, 0),
                Position::new(1, 2),
                Position::new(0, 1),
                Position::new(2, 1),
            ]
        );
    }

    #[test]
    fn board_rule_covers_everything_else() {
        let resolved = resolve_burn_positions(&[BurnRule::board()], Position::new(1, 1), 3, 2);
        assert_eq!(resolved.len(), 5);
        assert!(!resolved.contains(&Position::new(1, 1)));
    }

    #[test]
    fn half_open_range_reaches_one_edge() {
        let rule = BurnRule::range(
            RangePoint::new(AxisBound::Offset(1), AxisBound::Offset(0)),
            RangePoint::new(AxisBound::Edge, AxisBound::Offset(0)),
        );
        let resolved = resolve_burn_positions(&[rule], Position::new(1, 0), 5, 1);
        assert_eq!(
            resolved,
            vec![Position::new(2, 0), Position::new(3, 0), Position::new(4, 0)]
        );
    }

    #[cfg(feature = "serde")]
    #[test]
    fn wire_format_accepts_both_edge_spellings() {
        let rules: Vec<BurnRule> =
            serde_json::from_str(r#"[{"x":1,"y":-1},[{"x":"e","y":0},{"x":"edge","y":0}]]"#)
                .unwrap();
        assert_eq!(rules, vec![BurnRule::offset(1, -1), BurnRule::row()]);

        let written = serde_json::to_string(&BurnRule::row()).unwrap();
        assert_eq!(written, r#"[{"x":"edge","y":0},{"x":"edge","y":0}]"#);
    }
}
