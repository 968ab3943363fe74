use super::{ConfigError, GameConfig, SuperAction};
use crate::state::TileKind;

/// Validated configuration plus tile classification.
///
/// Immutable once built. A restart with a new configuration builds a new
/// `Rules`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Rules {
    config: GameConfig,
}

impl Rules {
    pub fn new(config: GameConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn into_config(self) -> GameConfig {
        self.config
    }

    pub fn width(&self) -> u32 {
        self.config.width
    }

    pub fn height(&self) -> u32 {
        self.config.height
    }

    pub fn moves(&self) -> u32 {
        self.config.moves
    }

    pub fn win_score(&self) -> u32 {
        self.config.win_score
    }

    pub fn count_to_super(&self) -> u32 {
        self.config.count_to_super
    }

    pub fn colors(&self) -> &[TileKind] {
        &self.config.colors
    }

    /// Super tile kinds in ascending name order.
    pub fn super_kinds(&self) -> impl Iterator<Item = &TileKind> + '_ {
        self.config.super_actions.keys()
    }

    pub fn is_color_tile(&self, kind: &TileKind) -> bool {
        self.config.colors.contains(kind)
    }

    pub fn is_super_tile(&self, kind: &TileKind) -> bool {
        self.config.super_actions.contains_key(kind)
    }

    /// Actions bound to a super kind; `None` for any other kind.
    pub fn actions_for(&self, kind: &TileKind) -> Option<&[SuperAction]> {
        self.config.super_actions.get(kind).map(Vec::as_slice)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{BurnRule, ConfigField};

    fn rules() -> Rules {
        let config = GameConfig::new(4, 4, 10, 50, ["red", "blue"])
            .with_super("burn_row", [SuperAction::burn([BurnRule::row()])])
            .with_super("burn_all", [SuperAction::burn([BurnRule::board()])]);
        Rules::new(config).unwrap()
    }

    #[test]
    fn classifies_tiles() {
        let rules = rules();
        let red = TileKind::new("red");
        let row = TileKind::new("burn_row");

        assert!(rules.is_color_tile(&red));
        assert!(!rules.is_super_tile(&red));
        assert!(rules.is_super_tile(&row));
        assert!(!rules.is_color_tile(&row));
        assert!(!rules.is_color_tile(&TileKind::empty()));
        assert!(!rules.is_super_tile(&TileKind::empty()));
        assert!(!rules.is_color_tile(&TileKind::new("green")));
    }

    #[test]
    fn exposes_actions_for_supers_only() {
        let rules = rules();
        assert_eq!(
            rules.actions_for(&TileKind::new("burn_row")),
            Some(&[SuperAction::burn([BurnRule::row()])][..])
        );
        assert!(rules.actions_for(&TileKind::new("red")).is_none());
        let supers: Vec<_> = rules.super_kinds().map(TileKind::as_str).collect();
        assert_eq!(supers, vec!["burn_all", "burn_row"]);
    }

    #[test]
    fn refuses_invalid_config() {
        let err = Rules::new(GameConfig::new(0, 0, 0, 0, Vec::<TileKind>::new())).unwrap_err();
        assert_eq!(
            err.fields().collect::<Vec<_>>(),
            vec![
                ConfigField::Width,
                ConfigField::Height,
                ConfigField::Moves,
                ConfigField::WinScore,
                ConfigField::Colors,
            ]
        );
    }
}
