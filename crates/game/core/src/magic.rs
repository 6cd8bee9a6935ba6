//! Elemental dimensions and per-character magic profiles.
//!
//! Every profile carries exactly one [`SpellBook`] per [`Dimension`]. A book
//! with no spell names (or a zero cap) means the character cannot cast that
//! element at all.

use std::collections::BTreeMap;

use crate::error::ProfileError;

/// One of the six fixed elemental categories.
///
/// Declaration order is the canonical order used for every enumeration that
/// reaches the player, so option indices are stable across runs.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum Dimension {
    Dark,
    Light,
    Chaotic,
    Ordered,
    Hot,
    Cold,
}

impl Dimension {
    pub const COUNT: usize = 6;

    /// All dimensions in canonical order.
    pub const ALL: [Dimension; Self::COUNT] = [
        Dimension::Dark,
        Dimension::Light,
        Dimension::Chaotic,
        Dimension::Ordered,
        Dimension::Hot,
        Dimension::Cold,
    ];

    const fn index(self) -> usize {
        self as usize
    }
}

/// Spells and damage cap a character holds for a single dimension.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SpellBook {
    pub spells: Vec<String>,
    pub max_amount: u32,
}

impl SpellBook {
    pub fn new(spells: impl IntoIterator<Item = impl Into<String>>, max_amount: u32) -> Self {
        Self {
            spells: spells.into_iter().map(Into::into).collect(),
            max_amount,
        }
    }

    /// A book is castable when it names at least one spell and can deal damage.
    pub fn is_castable(&self) -> bool {
        !self.spells.is_empty() && self.max_amount > 0
    }
}

/// Raw, unvalidated spell book as it appears in content files.
///
/// `amount` is signed so that negative values can be reported instead of
/// failing deserialization with an opaque message.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SpellBookSpec {
    #[cfg_attr(feature = "serde", serde(default))]
    pub spells: Vec<String>,
    pub amount: i64,
}

/// Complete per-dimension magic profile of a character.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MagicProfile {
    books: [SpellBook; Dimension::COUNT],
}

impl MagicProfile {
    /// Build a profile from one book per dimension.
    pub fn new(books: [SpellBook; Dimension::COUNT]) -> Self {
        Self { books }
    }

    /// Resolve content-file specs into a validated profile.
    ///
    /// Keys are matched case-insensitively against the dimension tags. Every
    /// dimension must be present exactly once; unknown keys, keys naming the
    /// same dimension twice, and negative amounts are rejected.
    pub fn from_specs(specs: BTreeMap<String, SpellBookSpec>) -> Result<Self, ProfileError> {
        let mut slots: [Option<SpellBook>; Dimension::COUNT] = Default::default();

        for (key, spec) in specs {
            let dimension: Dimension = key
                .parse()
                .map_err(|_| ProfileError::UnknownDimension(key.clone()))?;
            if spec.amount < 0 {
                return Err(ProfileError::NegativeAmount {
                    dimension,
                    amount: spec.amount,
                });
            }
            let max_amount = u32::try_from(spec.amount).map_err(|_| ProfileError::AmountOverflow {
                dimension,
                amount: spec.amount,
            })?;
            let slot = &mut slots[dimension.index()];
            if slot.is_some() {
                return Err(ProfileError::DuplicateDimension(dimension));
            }
            *slot = Some(SpellBook {
                spells: spec.spells,
                max_amount,
            });
        }

        let mut books: [SpellBook; Dimension::COUNT] = Default::default();
        for dimension in Dimension::ALL {
            books[dimension.index()] = slots[dimension.index()]
                .take()
                .ok_or(ProfileError::MissingDimension(dimension))?;
        }

        Ok(Self { books })
    }

    pub fn book(&self, dimension: Dimension) -> &SpellBook {
        &self.books[dimension.index()]
    }

    /// Castable dimensions with their books, in canonical order.
    pub fn castable(&self) -> impl Iterator<Item = (Dimension, &SpellBook)> + '_ {
        Dimension::ALL
            .into_iter()
            .map(|dimension| (dimension, self.book(dimension)))
            .filter(|(_, book)| book.is_castable())
    }

    pub fn has_castable(&self) -> bool {
        self.castable().next().is_some()
    }
}
