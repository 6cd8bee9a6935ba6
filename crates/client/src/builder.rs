//! Client builder with dependency injection pattern.

use anyhow::{Context, Result};
use client_bootstrap::DuelSetup;
use client_frontend_cli::CliFrontend;

use crate::Client;

/// Builder for constructing a Client with proper validation.
///
/// Both the setup and the frontend are required; `build()` fails fast when
/// either is missing.
#[derive(Default)]
pub struct ClientBuilder {
    setup: Option<DuelSetup>,
    frontend: Option<CliFrontend>,
}

impl ClientBuilder {
    /// Create a new ClientBuilder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the match setup (required).
    ///
    /// It should be constructed via `DuelBuilder` from the `client-bootstrap` crate.
    pub fn setup(mut self, setup: DuelSetup) -> Self {
        self.setup = Some(setup);
        self
    }

    /// Set the frontend (required).
    pub fn frontend(mut self, frontend: CliFrontend) -> Self {
        self.frontend = Some(frontend);
        self
    }

    /// Build the Client.
    ///
    /// # Errors
    ///
    /// Returns an error if the setup or the frontend is missing.
    pub fn build(self) -> Result<Client> {
        let setup = self
            .setup
            .context("Match setup is required. Use .setup() to provide it.")?;
        let frontend = self
            .frontend
            .context("Frontend is required. Use .frontend() to provide it.")?;

        Ok(Client { setup, frontend })
    }
}
