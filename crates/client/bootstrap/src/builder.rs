//! Builds the roster, rules, and RNG bundle used by front-ends.
use anyhow::{Context, Result};
use duel_content::{RulesLoader, load_roster};
use duel_core::{DuelRules, Roster};
use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::config::DuelConfig;

/// Builder that assembles everything a front-end needs to run a match.
pub struct DuelBuilder {
    config: DuelConfig,
}

impl DuelBuilder {
    pub fn new(config: DuelConfig) -> Self {
        Self { config }
    }

    /// Load the roster and rules, and seed the RNG.
    ///
    /// Any failure here is a configuration problem: nothing has been shown to
    /// the player yet.
    pub fn build(self) -> Result<DuelSetup> {
        let roster = load_roster(&self.config.characters_dir).with_context(|| {
            format!(
                "Failed to load characters from {}",
                self.config.characters_dir.display()
            )
        })?;

        let rules = RulesLoader::load_or_default(self.config.rules_path.as_deref())?;
        tracing::info!(
            damage_roll = %rules.damage_roll,
            opponent_strategy = %rules.opponent_strategy,
            show_taunts = rules.show_taunts,
            "rules loaded"
        );

        let rng = match self.config.seed {
            Some(seed) => {
                tracing::info!(seed, "using fixed RNG seed");
                StdRng::seed_from_u64(seed)
            }
            None => StdRng::from_entropy(),
        };

        Ok(DuelSetup {
            config: self.config,
            roster,
            rules,
            rng,
        })
    }
}

pub struct DuelSetup {
    pub config: DuelConfig,
    pub roster: Roster,
    pub rules: DuelRules,
    pub rng: StdRng,
}
