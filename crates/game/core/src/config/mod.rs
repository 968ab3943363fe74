//! Game configuration and the tile classifier built from it.
//!
//! [`GameConfig`] is the raw, deserializable shape supplied by loaders.
//! [`Rules`] is the only way to use it: construction validates every field
//! and reports all violations at once.
mod burn;
mod error;
mod rules;

use std::collections::{BTreeMap, HashSet};

pub use burn::{AxisBound, BurnRule, RangePoint, resolve_burn_positions};
pub use error::{ConfigError, ConfigField, FieldError};
pub use rules::Rules;

use crate::state::TileKind;

/// Effect family of a super action.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, strum::Display, strum::AsRefStr,
)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "snake_case")
)]
#[strum(serialize_all = "snake_case")]
pub enum ActionKind {
    #[default]
    Burn,
}

/// One action bound to a super tile kind.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SuperAction {
    #[cfg_attr(feature = "serde", serde(default))]
    pub id: ActionKind,
    pub burns: Vec<BurnRule>,
}

impl SuperAction {
    pub fn burn(burns: impl IntoIterator<Item = BurnRule>) -> Self {
        Self {
            id: ActionKind::Burn,
            burns: burns.into_iter().collect(),
        }
    }
}

/// Raw game configuration.
///
/// Field names are camelCase on the wire (`winScore`, `countToSuper`,
/// `superActions`).
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "camelCase")
)]
pub struct GameConfig {
    pub width: u32,
    pub height: u32,
    pub moves: u32,
    pub win_score: u32,
    /// Minimum cleared group size that spawns a super tile.
    pub count_to_super: u32,
    pub colors: Vec<TileKind>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub super_actions: BTreeMap<TileKind, Vec<SuperAction>>,
}

impl GameConfig {
    /// A configuration without super tiles.
    pub fn new<I, S>(width: u32, height: u32, moves: u32, win_score: u32, colors: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<TileKind>,
    {
        Self {
            width,
            height,
            moves,
            win_score,
            count_to_super: 0,
            colors: colors.into_iter().map(Into::into).collect(),
            super_actions: BTreeMap::new(),
        }
    }

    pub fn with_count_to_super(mut self, count_to_super: u32) -> Self {
        self.count_to_super = count_to_super;
        self
    }

    /// Binds `actions` to the super tile `kind`, replacing earlier bindings.
    pub fn with_super(
        mut self,
        kind: impl Into<TileKind>,
        actions: impl IntoIterator<Item = SuperAction>,
    ) -> Self {
        self.super_actions
            .insert(kind.into(), actions.into_iter().collect());
        self
    }

    /// Checks every field and collects all violations.
    ///
    /// Colors and super kinds share one uniqueness check, so a name used in
    /// both sets is reported against `super_actions`. The reserved empty
    /// kind is never accepted as either.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let mut errors = Vec::new();
        let mut seen = HashSet::new();

        let dimensions = [
            (ConfigField::Width, self.width),
            (ConfigField::Height, self.height),
        ];
        for (field, value) in dimensions {
            if value == 0 || i32::try_from(value).is_err() {
                errors.push(FieldError::new(field, value.to_string()));
            }
        }
        if self.moves == 0 {
            errors.push(FieldError::new(ConfigField::Moves, self.moves.to_string()));
        }
        if self.win_score == 0 {
            errors.push(FieldError::new(
                ConfigField::WinScore,
                self.win_score.to_string(),
            ));
        }

        let colors_unique = register_unique(&self.colors, &mut seen);
        if self.colors.is_empty() || !colors_unique {
            errors.push(FieldError::new(
                ConfigField::Colors,
                join_kinds(&self.colors),
            ));
        }

        let supers: Vec<_> = self.super_actions.keys().cloned().collect();
        if !register_unique(&supers, &mut seen) {
            errors.push(FieldError::new(
                ConfigField::SuperActions,
                join_kinds(&supers),
            ));
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(ConfigError::Invalid { errors })
        }
    }
}

/// Records every kind in `seen`; false when any was already present or is
/// the empty kind.
fn register_unique(kinds: &[TileKind], seen: &mut HashSet<TileKind>) -> bool {
    let mut unique = true;
    for kind in kinds {
        if kind.is_empty() || !seen.insert(kind.clone()) {
            unique = false;
        }
    }
    unique
}

fn join_kinds(kinds: &[TileKind]) -> String {
    kinds
        .iter()
        .map(TileKind::as_str)
        .collect::<Vec<_>>()
        .join(",")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid() -> GameConfig {
        GameConfig::new(5, 5, 10, 100, ["red", "green"])
            .with_count_to_super(4)
            .with_super("bomb", [SuperAction::burn([BurnRule::square(1)])])
    }

    #[test]
    fn accepts_a_well_formed_config() {
        assert_eq!(valid().validate(), Ok(()));
    }

    #[test]
    fn reports_every_violation_in_order() {
        let mut config = valid();
        config.width = 0;
        config.moves = 0;
        config.win_score = 0;
        config.colors.clear();

        let err = config.validate().unwrap_err();
        let fields: Vec<_> = err.fields().collect();
        assert_eq!(
            fields,
            vec![
                ConfigField::Width,
                ConfigField::Moves,
                ConfigField::WinScore,
                ConfigField::Colors,
            ]
        );
        assert_eq!(
            err.to_string(),
            "invalid value for width: 0; invalid value for moves: 0; \
             invalid value for win_score: 0; invalid value for colors: "
        );
    }

    #[test]
    fn duplicate_colors_are_rejected() {
        let config = GameConfig::new(3, 3, 1, 1, ["red", "blue", "red"]);
        let err = config.validate().unwrap_err();
        assert_eq!(
            err.errors(),
            &[FieldError::new(ConfigField::Colors, "red,blue,red")]
        );
    }

    #[test]
    fn super_kind_reusing_a_color_is_rejected() {
        let config = valid().with_super("red", [SuperAction::burn([BurnRule::row()])]);
        let err = config.validate().unwrap_err();
        assert_eq!(err.fields().collect::<Vec<_>>(), vec![ConfigField::SuperActions]);
    }

    #[test]
    fn empty_kind_is_reserved() {
        let config = GameConfig::new(3, 3, 1, 1, ["red", "empty"]);
        let err = config.validate().unwrap_err();
        assert_eq!(err.fields().collect::<Vec<_>>(), vec![ConfigField::Colors]);

        let config = GameConfig::new(3, 3, 1, 1, ["red"]).with_super("empty", []);
        assert!(config.validate().is_err());
    }

    #[test]
    fn oversized_dimensions_are_rejected() {
        let mut config = valid();
        config.height = u32::MAX;
        let err = config.validate().unwrap_err();
        assert_eq!(err.fields().collect::<Vec<_>>(), vec![ConfigField::Height]);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn reads_camel_case_json() {
        let json = r#"{
            "width": 4, "height": 3, "moves": 5, "winScore": 20, "countToSuper": 3,
            "colors": ["red", "blue"],
            "superActions": {
                "burn_row": [{ "id": "burn", "burns": [[{"x":"e","y":0},{"x":"e","y":0}]] }],
                "spark": [{ "burns": [{"x":1,"y":0}] }]
            }
        }"#;
        let config: GameConfig = serde_json::from_str(json).unwrap();
        assert_eq!(config.win_score, 20);
        assert_eq!(config.count_to_super, 3);
        assert_eq!(
            config.super_actions[&TileKind::new("burn_row")],
            vec![SuperAction::burn([BurnRule::row()])]
        );
        assert_eq!(
            config.super_actions[&TileKind::new("spark")][0].id,
            ActionKind::Burn
        );
        assert_eq!(config.validate(), Ok(()));
    }
}
