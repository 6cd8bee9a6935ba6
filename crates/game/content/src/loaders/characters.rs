//! Character repository loader.
//!
//! Loads one duelist per subdirectory of the storage root.

use std::collections::BTreeMap;
use std::path::Path;

use anyhow::Context;
use duel_core::{Character, ConfigError, MagicProfile, Roster, SpellBookSpec};

use crate::loaders::{LoadResult, read_file};

pub const BIO_FILE: &str = "bio.txt";
pub const MAGIC_FILE: &str = "magic.json";
pub const TAUNTS_FILE: &str = "taunts.json";

/// On-disk shape of `magic.json`.
#[derive(Debug, serde::Deserialize)]
struct MagicFile {
    deals: BTreeMap<String, SpellBookSpec>,
}

/// Loader for duelists stored as `<root>/<id>/{bio.txt, magic.json, taunts.json}`.
pub struct CharacterLoader;

impl CharacterLoader {
    /// Load a single character from its directory.
    ///
    /// The directory name is the character id.
    pub fn load(dir: &Path) -> LoadResult<Character> {
        let id = dir
            .file_name()
            .and_then(|name| name.to_str())
            .with_context(|| format!("Invalid character directory name: {}", dir.display()))?
            .to_string();

        let bio = read_file(&dir.join(BIO_FILE))?;

        let magic_path = dir.join(MAGIC_FILE);
        let magic_file: MagicFile = serde_json::from_str(&read_file(&magic_path)?)
            .map_err(|e| anyhow::anyhow!("Failed to parse {}: {}", magic_path.display(), e))?;
        let magic = MagicProfile::from_specs(magic_file.deals).map_err(|reason| {
            ConfigError::InvalidCharacter {
                id: id.clone(),
                reason,
            }
        })?;

        let taunts_path = dir.join(TAUNTS_FILE);
        let taunts: Vec<String> = serde_json::from_str(&read_file(&taunts_path)?)
            .map_err(|e| anyhow::anyhow!("Failed to parse {}: {}", taunts_path.display(), e))?;

        tracing::debug!(
            character = %id,
            castable = magic.castable().count(),
            taunts = taunts.len(),
            "character loaded"
        );

        Ok(Character::new(id, bio.trim(), magic).with_taunts(taunts))
    }

    /// Load every character directory under `root`, sorted by id.
    ///
    /// Plain files directly under `root` are ignored.
    pub fn load_all(root: &Path) -> LoadResult<Vec<Character>> {
        let entries = std::fs::read_dir(root)
            .with_context(|| format!("Failed to read character directory {}", root.display()))?;

        let mut characters = Vec::new();
        for entry in entries {
            let entry = entry?;
            if !entry.file_type()?.is_dir() {
                continue;
            }
            characters.push(Self::load(&entry.path())?);
        }
        characters.sort_by(|a, b| a.id().cmp(b.id()));

        Ok(characters)
    }
}

/// Load the full roster under `root`, requiring at least two characters.
pub fn load_roster(root: &Path) -> LoadResult<Roster> {
    let characters = CharacterLoader::load_all(root)?;
    let roster = Roster::new(characters)?;
    tracing::info!(root = %root.display(), characters = roster.len(), "roster loaded");
    Ok(roster)
}

#[cfg(test)]
mod tests {
    use super::*;
    use duel_core::{Dimension, ProfileError};
    use std::fs;
    use tempfile::TempDir;

    const FULL_MAGIC: &str = r#"{
        "deals": {
            "dark": {"spells": ["gloom", "umbra"], "amount": 5},
            "light": {"spells": [], "amount": 0},
            "chaotic": {"spells": [], "amount": 0},
            "ordered": {"spells": [], "amount": 0},
            "hot": {"spells": ["flare"], "amount": 3},
            "cold": {"spells": [], "amount": 0}
        }
    }"#;

    fn write_character(root: &Path, id: &str, magic: &str) {
        let dir = root.join(id);
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join(BIO_FILE), format!("  {id} is a sorcerer.\n\n")).unwrap();
        fs::write(dir.join(MAGIC_FILE), magic).unwrap();
        fs::write(dir.join(TAUNTS_FILE), r#"["Is that all?"]"#).unwrap();
    }

    #[test]
    fn loads_a_character_directory() {
        let temp_dir = TempDir::new().unwrap();
        write_character(temp_dir.path(), "adrian", FULL_MAGIC);

        let character = CharacterLoader::load(&temp_dir.path().join("adrian")).unwrap();

        assert_eq!(character.id(), "adrian");
        assert_eq!(character.display_name(), "Adrian");
        assert_eq!(character.bio(), "adrian is a sorcerer.");
        assert_eq!(character.taunts(), ["Is that all?"]);
        assert_eq!(
            character.magic().book(Dimension::Dark).spells,
            vec!["gloom", "umbra"]
        );
        let castable: Vec<_> = character.magic().castable().map(|(d, _)| d).collect();
        assert_eq!(castable, vec![Dimension::Dark, Dimension::Hot]);
    }

    #[test]
    fn missing_dimension_is_a_configuration_error() {
        let temp_dir = TempDir::new().unwrap();
        let magic = r#"{"deals": {
            "dark": {"spells": ["gloom"], "amount": 5},
            "light": {"spells": [], "amount": 0},
            "chaotic": {"spells": [], "amount": 0},
            "ordered": {"spells": [], "amount": 0},
            "hot": {"spells": [], "amount": 0}
        }}"#;
        write_character(temp_dir.path(), "partial", magic);

        let err = CharacterLoader::load(&temp_dir.path().join("partial")).unwrap_err();

        assert_eq!(
            err.downcast_ref::<ConfigError>(),
            Some(&ConfigError::InvalidCharacter {
                id: "partial".to_string(),
                reason: ProfileError::MissingDimension(Dimension::Cold),
            })
        );
    }

    #[test]
    fn unknown_dimension_is_a_configuration_error() {
        let temp_dir = TempDir::new().unwrap();
        let magic = FULL_MAGIC.replace(r#""cold": {"spells": [], "amount": 0}"#, r#""cold_x": {"spells": [], "amount": 0}"#);
        write_character(temp_dir.path(), "broken", &magic);

        let err = CharacterLoader::load(&temp_dir.path().join("broken")).unwrap_err();
        let config = err.downcast_ref::<ConfigError>().unwrap();

        assert_eq!(
            config,
            &ConfigError::InvalidCharacter {
                id: "broken".to_string(),
                reason: ProfileError::UnknownDimension("cold_x".to_string()),
            }
        );
    }

    #[test]
    fn dimension_listed_twice_is_rejected() {
        let temp_dir = TempDir::new().unwrap();
        let magic = FULL_MAGIC.replace(
            r#""light": {"spells": [], "amount": 0},"#,
            r#""light": {"spells": [], "amount": 0}, "Dark": {"spells": ["umbra"], "amount": 9},"#,
        );
        write_character(temp_dir.path(), "twice", &magic);

        let err = CharacterLoader::load(&temp_dir.path().join("twice")).unwrap_err();

        assert_eq!(
            err.downcast_ref::<ConfigError>(),
            Some(&ConfigError::InvalidCharacter {
                id: "twice".to_string(),
                reason: ProfileError::DuplicateDimension(Dimension::Dark),
            })
        );
    }

    #[test]
    fn negative_amount_is_rejected() {
        let temp_dir = TempDir::new().unwrap();
        let magic = FULL_MAGIC.replace(r#""amount": 3"#, r#""amount": -3"#);
        write_character(temp_dir.path(), "broken", &magic);

        let err = CharacterLoader::load(&temp_dir.path().join("broken")).unwrap_err();

        assert!(matches!(
            err.downcast_ref::<ConfigError>(),
            Some(ConfigError::InvalidCharacter {
                reason: ProfileError::NegativeAmount { .. },
                ..
            })
        ));
    }

    #[test]
    fn malformed_json_is_reported_with_path() {
        let temp_dir = TempDir::new().unwrap();
        write_character(temp_dir.path(), "garbled", "{ not json");

        let err = CharacterLoader::load(&temp_dir.path().join("garbled")).unwrap_err();
        assert!(err.to_string().contains(MAGIC_FILE));
    }

    #[test]
    fn load_all_skips_files_and_sorts_ids() {
        let temp_dir = TempDir::new().unwrap();
        write_character(temp_dir.path(), "zora", FULL_MAGIC);
        write_character(temp_dir.path(), "adrian", FULL_MAGIC);
        fs::write(temp_dir.path().join("README.txt"), "not a character").unwrap();

        let characters = CharacterLoader::load_all(temp_dir.path()).unwrap();
        let ids: Vec<_> = characters.iter().map(Character::id).collect();

        assert_eq!(ids, vec!["adrian", "zora"]);
    }

    #[test]
    fn roster_needs_two_characters() {
        let temp_dir = TempDir::new().unwrap();
        write_character(temp_dir.path(), "solo", FULL_MAGIC);

        let err = load_roster(temp_dir.path()).unwrap_err();
        assert_eq!(
            err.downcast_ref::<ConfigError>(),
            Some(&ConfigError::RosterTooSmall { found: 1 })
        );
    }

    #[test]
    fn missing_root_is_an_error() {
        let temp_dir = TempDir::new().unwrap();
        assert!(load_roster(&temp_dir.path().join("nowhere")).is_err());
    }
}
