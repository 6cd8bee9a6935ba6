//! Shared bootstrap utilities for client front-ends.
//!
//! Provides configuration loading and match setup (roster, rules, seeded RNG)
//! that can be reused by the CLI or any other front-end crate.
pub mod builder;
pub mod config;

pub use builder::{DuelBuilder, DuelSetup};
pub use config::DuelConfig;
