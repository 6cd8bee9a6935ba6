//! Duel runtime configuration structures and loaders.
use std::env;
use std::path::PathBuf;

/// Storage root used when `MAGIC_FIGHT_CHARACTERS_DIR` is unset.
pub const DEFAULT_CHARACTERS_DIR: &str = "character_infos";

/// Configuration required to bootstrap a match.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DuelConfig {
    pub characters_dir: PathBuf,
    pub rules_path: Option<PathBuf>,
    pub seed: Option<u64>,
    pub session_id: Option<String>,
    pub log_dir: Option<PathBuf>,
}

impl Default for DuelConfig {
    fn default() -> Self {
        Self {
            characters_dir: PathBuf::from(DEFAULT_CHARACTERS_DIR),
            rules_path: None,
            seed: None,
            session_id: None,
            log_dir: None,
        }
    }
}

impl DuelConfig {
    /// Construct configuration from process environment variables.
    ///
    /// Environment variables:
    /// - `MAGIC_FIGHT_CHARACTERS_DIR` - Character storage root (default: `character_infos`)
    /// - `MAGIC_FIGHT_RULES` - Path to a TOML rules file (default: built-in rules)
    /// - `MAGIC_FIGHT_SEED` - RNG seed for a reproducible match (default: OS entropy)
    /// - `MAGIC_FIGHT_SESSION_ID` - Session name for log files (default: auto-generated)
    /// - `MAGIC_FIGHT_LOG_DIR` - Log directory (default: platform-specific)
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Construct configuration from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(dir) = lookup("MAGIC_FIGHT_CHARACTERS_DIR").filter(|v| !v.is_empty()) {
            config.characters_dir = PathBuf::from(dir);
        }

        config.rules_path = lookup("MAGIC_FIGHT_RULES")
            .filter(|v| !v.is_empty())
            .map(PathBuf::from);

        config.seed = lookup("MAGIC_FIGHT_SEED")
            .filter(|v| !v.trim().is_empty())
            .and_then(|raw| match raw.trim().parse::<u64>() {
                Ok(seed) => Some(seed),
                Err(e) => {
                    tracing::warn!(
                        value = %raw,
                        error = %e,
                        "Ignoring malformed MAGIC_FIGHT_SEED; seeding from OS entropy"
                    );
                    None
                }
            });

        config.session_id = lookup("MAGIC_FIGHT_SESSION_ID").filter(|v| !v.is_empty());

        config.log_dir = lookup("MAGIC_FIGHT_LOG_DIR")
            .filter(|v| !v.is_empty())
            .map(PathBuf::from);

        config
    }
}
