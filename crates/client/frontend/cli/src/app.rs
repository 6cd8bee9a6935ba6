//! Terminal front-end for a single match.

use client_bootstrap::DuelSetup;
use duel_core::{Console, DuelEngine, DuelReport, Result};

use crate::config::CliConfig;
use crate::presentation::WELCOME_BANNER;

/// Text front-end that plays one match over a [`Console`].
///
/// The frontend does not own the roster or RNG; it borrows them from the
/// [`DuelSetup`] assembled by the bootstrap layer.
pub struct CliFrontend {
    config: CliConfig,
}

impl CliFrontend {
    pub fn new(config: CliConfig) -> Self {
        Self { config }
    }

    /// Show the banner (if enabled) and run a full match.
    pub fn run<C>(&self, setup: &mut DuelSetup, console: &mut C) -> Result<DuelReport>
    where
        C: Console + ?Sized,
    {
        if self.config.ui.show_banner {
            console.render(WELCOME_BANNER)?;
        }

        let report = DuelEngine::new(&setup.roster, &setup.rules, console, &mut setup.rng)
            .vitality_glyph(self.config.ui.vitality_glyph)
            .run()?;

        tracing::info!(
            winner = report.winner().unwrap_or("draw"),
            rounds = report.rounds,
            "match finished"
        );
        Ok(report)
    }
}
