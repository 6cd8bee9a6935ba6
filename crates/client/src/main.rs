//! Magic Fight client binary.
//!
//! Main entry point for a terminal duel.
//!
//! # Architecture
//!
//! This binary is the composition root that assembles:
//! 1. Match setup (roster, rules, RNG) via DuelBuilder
//! 2. Frontend (text UI) over stdin/stdout
//!
//! # Examples
//!
//! ```bash
//! # Reproducible match against the bundled characters
//! MAGIC_FIGHT_SEED=7 cargo run -p magic-fight-client
//!
//! # Custom roster and rules
//! MAGIC_FIGHT_CHARACTERS_DIR=./my_chars MAGIC_FIGHT_RULES=rules.toml cargo run -p magic-fight-client
//! ```

use std::process::ExitCode;

use anyhow::Result;
use client_bootstrap::{DuelBuilder, DuelConfig};
use client_frontend_cli::{CliConfig, CliFrontend, TerminalConsole, logging};
use magic_fight_client::{Client, exit_status};

fn main() -> ExitCode {
    // Load .env file if it exists (silently ignore if not found)
    let _ = dotenvy::dotenv();

    // 1. Load configuration from environment
    let duel_config = DuelConfig::from_env();
    let cli_config = CliConfig::from_env();

    // 2. Setup logging (kept alive until exit so buffered lines are flushed)
    let _log_guard = match logging::setup_logging(
        duel_config.session_id.as_deref(),
        duel_config.log_dir.as_deref(),
    ) {
        Ok(guard) => Some(guard),
        Err(e) => {
            eprintln!("warning: file logging disabled: {e:#}");
            None
        }
    };

    match run(duel_config, cli_config) {
        Ok(()) => {
            tracing::info!("Client shutdown complete");
            ExitCode::SUCCESS
        }
        Err(e) => {
            let status = exit_status(&e);
            tracing::error!(status, "Client aborted: {:#}", e);
            eprintln!("error: {e:#}");
            ExitCode::from(status)
        }
    }
}

fn run(duel_config: DuelConfig, cli_config: CliConfig) -> Result<()> {
    tracing::info!("Starting Magic Fight client");
    tracing::info!("Characters: {}", duel_config.characters_dir.display());

    // 3. Build match setup (roster, rules, RNG)
    let setup = DuelBuilder::new(duel_config).build()?;

    // 4. Build Client (composition layer)
    let mut client = Client::builder()
        .setup(setup)
        .frontend(CliFrontend::new(cli_config))
        .build()?;

    // 5. Play over the terminal
    let mut console = TerminalConsole::stdio();
    client.run(&mut console)?;

    Ok(())
}
