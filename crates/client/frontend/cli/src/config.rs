//! CLI-specific configuration for the text interface.
use std::env;

use duel_core::duel::DEFAULT_VITALITY_GLYPH;

/// CLI text interface configuration.
///
/// This contains settings specific to the terminal interface,
/// separate from match configuration.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CliConfig {
    pub ui: UiConfig,
}

impl CliConfig {
    /// Construct CLI configuration from environment variables.
    ///
    /// Environment variables:
    /// - `MAGIC_FIGHT_VITALITY_GLYPH` - Character drawn per vitality point (default: `+`)
    /// - `MAGIC_FIGHT_SHOW_BANNER` - Print the welcome banner (default: true)
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Some(glyph) = read_env::<char>("MAGIC_FIGHT_VITALITY_GLYPH") {
            config.ui.vitality_glyph = glyph;
        }

        if let Some(show) = read_env::<bool>("MAGIC_FIGHT_SHOW_BANNER") {
            config.ui.show_banner = show;
        }

        config
    }
}

/// Display configuration.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UiConfig {
    /// Glyph repeated once per remaining vitality point.
    pub vitality_glyph: char,
    /// Whether to print the rules banner before character selection.
    pub show_banner: bool,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            vitality_glyph: DEFAULT_VITALITY_GLYPH,
            show_banner: true,
        }
    }
}

fn read_env<T>(key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    env::var(key).ok()?.trim().parse().ok()
}
