//! Data-driven duelist definitions and loaders.
//!
//! This crate is the character repository: it reads duelists from a storage
//! root laid out as one directory per character,
//!
//! ```text
//! character_infos/
//!   ├── adrian/
//!   │   ├── bio.txt      plain text, trimmed
//!   │   ├── magic.json   {"deals": {"<dimension>": {"spells": [..], "amount": n}, ..}}
//!   │   └── taunts.json  ["...", "..."]
//!   └── morgana/
//!       └── ...
//! ```
//!
//! and loads optional duel rules from TOML. Malformed records are rejected at
//! load time with a configuration error so they never surface mid-battle.

#[cfg(feature = "loaders")]
pub mod loaders;

#[cfg(feature = "loaders")]
pub use loaders::{CharacterLoader, RulesLoader, load_roster};
