//! Shared configuration loader for the scen toolchain.
//!
//! `defaults/scen.default.toml` is embedded into every binary so that docs
//! and runtime behavior stay in sync. Applications layer user-specific files
//! on top of those defaults via [`Loader`] before deserializing into
//! [`ScenConfig`], then hand the result to the parser through
//! [`ScenConfig::game_config`] and [`ScenConfig::code_tables`].

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, File, FileFormat, ValueKind};
use scen_parser::{CodeTables, GameConfig, GameEdition};
use serde::Deserialize;
use std::path::Path;

const DEFAULT_TOML: &str = include_str!("../defaults/scen.default.toml");

/// Top-level configuration consumed by scen applications.
#[derive(Debug, Clone, Deserialize)]
pub struct ScenConfig {
    pub game: GameSection,
    pub parser: ParserSection,
    pub tables: TablesSection,
}

/// Which game edition's keyword set the parser accepts.
#[derive(Debug, Clone, Deserialize)]
pub struct GameSection {
    pub edition: Edition,
    pub version: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Edition {
    Vanilla,
    Armageddon,
    DarkestHour,
}

/// Parser behavior knobs.
#[derive(Debug, Clone, Deserialize)]
pub struct ParserSection {
    pub include_depth_limit: usize,
}

/// Additions and restrictions to the stock code tables.
#[derive(Debug, Clone, Deserialize)]
pub struct TablesSection {
    pub extra_tags: Vec<String>,
    /// Empty means every known tag stays active.
    pub active_tags: Vec<String>,
}

impl ScenConfig {
    /// The [`GameConfig`] this configuration describes.
    pub fn game_config(&self) -> GameConfig {
        GameConfig {
            edition: match self.game.edition {
                Edition::Vanilla => GameEdition::Vanilla,
                Edition::Armageddon => GameEdition::Armageddon,
                Edition::DarkestHour => GameEdition::DarkestHour,
            },
            version: self.game.version,
        }
    }

    /// The stock code tables with this configuration's tag additions and
    /// active-subset restriction applied.
    pub fn code_tables(&self) -> CodeTables {
        let mut tables = CodeTables::standard();
        for tag in &self.tables.extra_tags {
            tables.add_country_tag(tag);
        }
        if !self.tables.active_tags.is_empty() {
            tables.set_active_tags(self.tables.active_tags.iter().map(String::as_str));
        }
        tables
    }
}

/// Helper for layering user overrides over the built-in defaults.
#[derive(Debug, Clone)]
pub struct Loader {
    builder: ConfigBuilder<DefaultState>,
}

impl Loader {
    /// Start a loader seeded with the embedded defaults.
    pub fn new() -> Self {
        let builder = Config::builder().add_source(File::from_str(DEFAULT_TOML, FileFormat::Toml));
        Self { builder }
    }

    /// Layer a configuration file. Missing files trigger an error.
    pub fn with_file(mut self, path: impl AsRef<Path>) -> Self {
        let source = File::from(path.as_ref())
            .format(FileFormat::Toml)
            .required(true);
        self.builder = self.builder.add_source(source);
        self
    }

    /// Layer an optional configuration file (ignored if the file is absent).
    pub fn with_optional_file(mut self, path: impl AsRef<Path>) -> Self {
        let source = File::from(path.as_ref())
            .format(FileFormat::Toml)
            .required(false);
        self.builder = self.builder.add_source(source);
        self
    }

    /// Apply a single key/value override (useful for CLI settings).
    pub fn set_override<I>(mut self, key: &str, value: I) -> Result<Self, ConfigError>
    where
        I: Into<ValueKind>,
    {
        self.builder = self.builder.set_override(key, value)?;
        Ok(self)
    }

    /// Finalize the builder and deserialize the resulting configuration.
    pub fn build(self) -> Result<ScenConfig, ConfigError> {
        self.builder.build()?.try_deserialize()
    }
}

impl Default for Loader {
    fn default() -> Self {
        Self::new()
    }
}

/// Convenience helper for callers that only need the defaults.
pub fn load_defaults() -> Result<ScenConfig, ConfigError> {
    Loader::new().build()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn loads_default_config() {
        let config = load_defaults().expect("defaults to deserialize");
        assert_eq!(config.game.edition, Edition::Armageddon);
        assert_eq!(config.parser.include_depth_limit, 16);
        assert!(config.tables.extra_tags.is_empty());
    }

    #[test]
    fn supports_overrides() {
        let config = Loader::new()
            .set_override("game.edition", "darkest-hour")
            .expect("override to apply")
            .build()
            .expect("config to build");
        assert_eq!(config.game.edition, Edition::DarkestHour);
        assert!(config.game_config().is_darkest_hour());
    }

    #[test]
    fn extra_tags_reach_the_tables() {
        let config = Loader::new()
            .set_override("tables.extra_tags", vec!["u61"])
            .expect("override to apply")
            .build()
            .expect("config to build");
        let tables = config.code_tables();
        assert!(tables.country("U61").is_some());
    }

    #[test]
    fn active_subset_restricts_lookup() {
        let config = Loader::new()
            .set_override("tables.active_tags", vec!["GER", "ENG"])
            .expect("override to apply")
            .build()
            .expect("config to build");
        let tables = config.code_tables();
        assert!(tables.country("GER").is_some());
        assert!(tables.country("FRA").is_none());
    }
}
