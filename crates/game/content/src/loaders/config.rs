//! Duel rules loader.

use std::path::Path;

use duel_core::DuelRules;

use crate::loaders::{LoadResult, read_file};

/// Loader for duel rules from TOML files.
pub struct RulesLoader;

impl RulesLoader {
    /// Load rules from a TOML file. Keys left out take their defaults.
    pub fn load(path: &Path) -> LoadResult<DuelRules> {
        let content = read_file(path)?;
        let rules: DuelRules = toml::from_str(&content)
            .map_err(|e| anyhow::anyhow!("Failed to parse rules TOML: {}", e))?;

        Ok(rules)
    }

    /// Load rules from `path` when given, otherwise use the defaults.
    pub fn load_or_default(path: Option<&Path>) -> LoadResult<DuelRules> {
        match path {
            Some(path) => Self::load(path),
            None => Ok(DuelRules::default()),
        }
    }
}
