//! Active game edition and version
//!
//! Several optional keywords only exist in later game editions; the grammars
//! consult this read-only configuration to decide whether to recognize them.
//! The parser never mutates it.

use serde::Serialize;

/// Which branch of the game family the data files target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
pub enum GameEdition {
    /// The original release.
    Vanilla,
    /// The expansion; adds per-model speed caps among other keywords.
    Armageddon,
    /// The standalone successor; adds reinforcement stats and extra
    /// scenario keys.
    DarkestHour,
}

/// Edition plus a numeric data-format version within that edition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct GameConfig {
    pub edition: GameEdition,
    pub version: u32,
}

impl GameConfig {
    pub fn new(edition: GameEdition, version: u32) -> Self {
        GameConfig { edition, version }
    }

    /// Keywords introduced with the expansion are recognized from there on.
    pub fn has_armageddon_keys(&self) -> bool {
        self.edition >= GameEdition::Armageddon
    }

    pub fn is_darkest_hour(&self) -> bool {
        self.edition == GameEdition::DarkestHour
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        GameConfig::new(GameEdition::Armageddon, 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_edition_ordering() {
        assert!(GameEdition::Vanilla < GameEdition::Armageddon);
        assert!(GameConfig::new(GameEdition::DarkestHour, 104).has_armageddon_keys());
        assert!(!GameConfig::new(GameEdition::Vanilla, 0).has_armageddon_keys());
    }
}
