//! Board rendering.
use std::collections::HashMap;
use std::fmt::Write;

use blast_content::SpriteTable;
use blast_core::{Rules, TileGrid, TileKind};

const SUPER_GLYPHS: &str = "123456789";
const FALLBACK_GLYPHS: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";
const EMPTY_GLYPH: char = '.';
const UNKNOWN_GLYPH: char = '?';

/// One-character symbol per tile kind.
///
/// Colors get the upper-case initial of their name (or the first free
/// letter when initials collide); super tiles get digits in configuration
/// order.
#[derive(Clone, Debug)]
pub struct Glyphs {
    symbols: HashMap<TileKind, char>,
    order: Vec<TileKind>,
}

impl Glyphs {
    pub fn new(rules: &Rules) -> Self {
        let mut symbols = HashMap::new();
        let mut order = Vec::new();
        let mut used = Vec::new();

        for color in rules.colors() {
            let initial = color
                .as_str()
                .chars()
                .next()
                .map(|c| c.to_ascii_uppercase())
                .filter(|c| c.is_ascii_uppercase() && !used.contains(c));
            let glyph = initial
                .or_else(|| FALLBACK_GLYPHS.chars().find(|c| !used.contains(c)))
                .unwrap_or(UNKNOWN_GLYPH);
            used.push(glyph);
            symbols.insert(color.clone(), glyph);
            order.push(color.clone());
        }

        let mut digits = SUPER_GLYPHS.chars();
        for kind in rules.super_kinds() {
            symbols.insert(kind.clone(), digits.next().unwrap_or('*'));
            order.push(kind.clone());
        }

        Self { symbols, order }
    }

    pub fn glyph(&self, kind: &TileKind) -> char {
        if kind.is_empty() {
            return EMPTY_GLYPH;
        }
        self.symbols.get(kind).copied().unwrap_or(UNKNOWN_GLYPH)
    }

    /// `glyph kind (sprite)` entries in configuration order.
    pub fn legend(&self, sprites: &SpriteTable) -> String {
        self.order
            .iter()
            .map(|kind| match sprites.get(kind) {
                Some(sprite) => format!("{} {kind} ({sprite})", self.glyph(kind)),
                None => format!("{} {kind}", self.glyph(kind)),
            })
            .collect::<Vec<_>>()
            .join(", ")
    }
}

/// Draws the grid with the top row first and axis labels on the left and
/// bottom.
pub fn render_board(grid: &TileGrid, glyphs: &Glyphs) -> String {
    let cell = digits(grid.width().saturating_sub(1));
    let label = digits(grid.height().saturating_sub(1));
    let mut out = String::new();

    for y in (0..grid.height() as i32).rev() {
        let _ = write!(out, "{y:>label$} |");
        for x in 0..grid.width() as i32 {
            let glyph = grid
                .tile(x, y)
                .map_or(UNKNOWN_GLYPH, |kind| glyphs.glyph(kind));
            let _ = write!(out, " {glyph:>cell$}");
        }
        out.push('\n');
    }

    let _ = write!(out, "{:>label$}  ", "");
    for x in 0..grid.width() {
        let _ = write!(out, " {x:>cell$}");
    }
    out.push('\n');
    out
}

fn digits(value: u32) -> usize {
    value.checked_ilog10().map_or(1, |log| log as usize + 1)
}
