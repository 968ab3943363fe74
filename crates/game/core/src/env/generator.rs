use std::fmt;

use super::error::GeneratorError;
use super::rng::{PcgRng, TileRng};
use crate::config::Rules;
use crate::state::TileKind;

/// Draws random tile kinds from the configured color and super pools.
pub struct TileGenerator {
    colors: Vec<TileKind>,
    supers: Vec<TileKind>,
    rng: Box<dyn TileRng + Send>,
}

impl TileGenerator {
    pub fn new<R>(colors: Vec<TileKind>, supers: Vec<TileKind>, rng: R) -> Self
    where
        R: TileRng + Send + 'static,
    {
        Self {
            colors,
            supers,
            rng: Box::new(rng),
        }
    }

    /// Pools taken from validated rules.
    pub fn from_rules<R>(rules: &Rules, rng: R) -> Self
    where
        R: TileRng + Send + 'static,
    {
        Self::new(
            rules.colors().to_vec(),
            rules.super_kinds().cloned().collect(),
            rng,
        )
    }

    /// Convenience for a seeded [`PcgRng`].
    pub fn seeded(rules: &Rules, seed: u64) -> Self {
        Self::from_rules(rules, PcgRng::new(seed))
    }

    /// Replaces both pools, keeping the random stream.
    pub fn reconfigure(&mut self, rules: &Rules) {
        self.colors = rules.colors().to_vec();
        self.supers = rules.super_kinds().cloned().collect();
    }

    pub fn colors(&self) -> &[TileKind] {
        &self.colors
    }

    pub fn supers(&self) -> &[TileKind] {
        &self.supers
    }

    pub fn random_color_tile(&mut self) -> Result<TileKind, GeneratorError> {
        if self.colors.is_empty() {
            return Err(GeneratorError::EmptyColorPool);
        }
        let idx = self.rng.index(self.colors.len());
        Ok(self.colors[idx].clone())
    }

    pub fn random_super_tile(&mut self) -> Result<TileKind, GeneratorError> {
        if self.supers.is_empty() {
            return Err(GeneratorError::EmptySuperPool);
        }
        let idx = self.rng.index(self.supers.len());
        Ok(self.supers[idx].clone())
    }

    /// `count` independent color draws.
    pub fn random_colors(&mut self, count: usize) -> Result<Vec<TileKind>, GeneratorError> {
        (0..count).map(|_| self.random_color_tile()).collect()
    }
}

impl fmt::Debug for TileGenerator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TileGenerator")
            .field("colors", &self.colors)
            .field("supers", &self.supers)
            .finish_non_exhaustive()
    }
}
