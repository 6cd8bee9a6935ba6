//! Battle rules and data types for two-party magic duels.
//!
//! `duel-core` defines the canonical rules (characters, magic profiles, the
//! choice protocol, and the turn engine) and performs no I/O of its own.
//! Text goes through the [`Console`] boundary and every random roll through
//! an injected [`rand::RngCore`], so a seeded RNG and a [`ScriptedConsole`]
//! replay a match exactly.
pub mod character;
pub mod choice;
pub mod config;
pub mod console;
pub mod duel;
pub mod error;
pub mod magic;
pub mod roster;
pub mod spells;

pub use character::{Character, STARTING_VITALITY, title_case};
pub use choice::{ChoiceOption, confirm, prompt_choice};
pub use config::{DamageRoll, DuelRules, OpponentStrategy};
pub use console::{Console, ScriptedConsole};
pub use duel::{DuelEngine, DuelPhase, DuelReport, DuelState, Outcome, Side, vitality_bar};
pub use error::{ConfigError, DuelError, ProfileError, Result};
pub use magic::{Dimension, MagicProfile, SpellBook, SpellBookSpec};
pub use roster::{MIN_ROSTER_SIZE, Roster};
pub use spells::{CastChoice, build_castable_options};
