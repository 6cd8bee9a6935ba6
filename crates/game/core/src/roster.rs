//! Immutable set of duelists available for a match.

use std::collections::BTreeSet;

use rand::Rng;
use rand::seq::SliceRandom;

use crate::character::Character;
use crate::error::ConfigError;

/// Minimum number of characters a roster must hold.
pub const MIN_ROSTER_SIZE: usize = 2;

/// Characters keyed by id, kept in ascending id order.
///
/// The roster itself never changes once built. Pairing takes the set of ids
/// to leave out instead of removing entries.
#[derive(Clone, Debug)]
pub struct Roster {
    characters: Vec<Character>,
}

impl Roster {
    /// Build a roster, rejecting anything smaller than [`MIN_ROSTER_SIZE`].
    ///
    /// Later entries with an id already present are dropped.
    pub fn new(characters: impl IntoIterator<Item = Character>) -> Result<Self, ConfigError> {
        let mut characters: Vec<Character> = characters.into_iter().collect();
        characters.sort_by(|a, b| a.id().cmp(b.id()));
        characters.dedup_by(|later, earlier| later.id() == earlier.id());

        if characters.len() < MIN_ROSTER_SIZE {
            return Err(ConfigError::RosterTooSmall {
                found: characters.len(),
            });
        }

        Ok(Self { characters })
    }

    pub fn len(&self) -> usize {
        self.characters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.characters.is_empty()
    }

    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.characters.iter().map(Character::id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Character> {
        self.characters.iter()
    }

    pub fn get(&self, id: &str) -> Option<&Character> {
        self.characters
            .binary_search_by(|c| c.id().cmp(id))
            .ok()
            .map(|index| &self.characters[index])
    }

    /// Pick an opponent uniformly at random among ids not in `excluded`.
    pub fn pick_opponent<R>(
        &self,
        excluded: &BTreeSet<String>,
        rng: &mut R,
    ) -> Result<&Character, ConfigError>
    where
        R: Rng + ?Sized,
    {
        let candidates: Vec<&Character> = self
            .characters
            .iter()
            .filter(|c| !excluded.contains(c.id()))
            .collect();

        candidates
            .choose(rng)
            .copied()
            .ok_or(ConfigError::RosterTooSmall {
                found: candidates.len(),
            })
    }
}
