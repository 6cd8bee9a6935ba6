//! Terminal frontend for Magic Fight.
//!
//! This crate provides a line-based text interface for the duel engine.
//!
//! # Architecture
//!
//! CliFrontend is a pure UI layer that:
//! - Receives a DuelSetup (roster, rules, RNG) from the bootstrap layer
//! - Does NOT load content or choose seeds itself
//! - Talks to the engine only through the `Console` boundary

mod app;
mod config;
pub mod logging;
pub mod presentation;

pub use app::CliFrontend;
pub use config::{CliConfig, UiConfig};
pub use presentation::TerminalConsole;
