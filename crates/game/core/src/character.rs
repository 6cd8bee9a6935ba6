//! Duelist definitions and their battle state.

use crate::magic::MagicProfile;

/// Life total every fighter starts a duel with.
///
/// Taking this much damage in total defeats a fighter.
pub const STARTING_VITALITY: i32 = 10;

/// A duelist: immutable definition plus current vitality.
///
/// `vitality` is the only field that changes once a character is loaded, and
/// only the duel engine mutates it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Character {
    id: String,
    display_name: String,
    bio: String,
    magic: MagicProfile,
    taunts: Vec<String>,
    vitality: i32,
}

impl Character {
    pub fn new(id: impl Into<String>, bio: impl Into<String>, magic: MagicProfile) -> Self {
        let id = id.into();
        Self {
            display_name: title_case(&id),
            id,
            bio: bio.into(),
            magic,
            taunts: Vec::new(),
            vitality: STARTING_VITALITY,
        }
    }

    #[must_use]
    pub fn with_taunts(mut self, taunts: Vec<String>) -> Self {
        self.taunts = taunts;
        self
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn display_name(&self) -> &str {
        &self.display_name
    }

    pub fn bio(&self) -> &str {
        &self.bio
    }

    pub fn magic(&self) -> &MagicProfile {
        &self.magic
    }

    pub fn taunts(&self) -> &[String] {
        &self.taunts
    }

    pub fn vitality(&self) -> i32 {
        self.vitality
    }

    /// Reduce vitality by `amount`. Vitality may go below zero.
    pub fn apply_damage(&mut self, amount: u32) {
        let amount = i32::try_from(amount).unwrap_or(i32::MAX);
        self.vitality = self.vitality.saturating_sub(amount);
    }

    pub fn is_defeated(&self) -> bool {
        self.vitality <= 0
    }
}

/// Upper-case the first letter of every alphabetic run and lower-case the rest.
///
/// `"dark_mage"` becomes `"Dark_Mage"`, `"o'neil"` becomes `"O'Neil"`.
pub fn title_case(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut at_word_start = true;
    for ch in text.chars() {
        if ch.is_alphabetic() {
            if at_word_start {
                out.extend(ch.to_uppercase());
            } else {
                out.extend(ch.to_lowercase());
            }
            at_word_start = false;
        } else {
            out.push(ch);
            at_word_start = true;
        }
    }
    out
}
