//! Content loaders for reading duel data from files.
//!
//! Characters come from a directory tree of JSON and text files, rules from
//! an optional TOML file.

pub mod characters;
pub mod config;

pub use characters::{CharacterLoader, load_roster};
pub use config::RulesLoader;

use std::path::Path;

/// Common result type for loaders.
pub type LoadResult<T> = anyhow::Result<T>;

/// Helper function to read file contents.
pub(crate) fn read_file(path: &Path) -> LoadResult<String> {
    std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("Failed to read file {}: {}", path.display(), e))
}
