//! Top-level client orchestrating match setup and the frontend.
//!
//! # Architecture
//!
//! ```text
//! Client (Top-level container)
//!   ├─→ DuelSetup (roster, rules, seeded RNG from client-bootstrap)
//!   └─→ CliFrontend (banner + duel engine over a Console)
//! ```
//!
//! The client also owns the process exit contract: a finished match exits 0,
//! a configuration problem 2, closed input 3, any other I/O failure 1.

mod builder;

pub use builder::ClientBuilder;

use client_bootstrap::DuelSetup;
use client_frontend_cli::CliFrontend;
use duel_core::error::EXIT_CONFIG;
use duel_core::{Console, DuelError, DuelReport};

/// Top-level client container.
pub struct Client {
    setup: DuelSetup,
    frontend: CliFrontend,
}

impl Client {
    /// Create a new ClientBuilder.
    pub fn builder() -> ClientBuilder {
        ClientBuilder::new()
    }

    /// Play one match over `console` and print its outcome.
    pub fn run<C>(&mut self, console: &mut C) -> duel_core::Result<DuelReport>
    where
        C: Console + ?Sized,
    {
        tracing::info!(
            characters = self.setup.roster.len(),
            root = %self.setup.config.characters_dir.display(),
            "Starting match"
        );
        self.frontend.run(&mut self.setup, console)
    }
}

/// Map a top-level failure onto the process exit status.
///
/// Duel errors carry their own status; anything else happened while loading
/// configuration or content and counts as a configuration error.
pub fn exit_status(err: &anyhow::Error) -> u8 {
    match err.downcast_ref::<DuelError>() {
        Some(duel) => duel.exit_code(),
        None => EXIT_CONFIG,
    }
}
