/// Tunable duel rules.
///
/// Loaded from a TOML rules file when one is configured; every field falls
/// back to its default when absent.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default, deny_unknown_fields))]
pub struct DuelRules {
    /// How a cast's damage is rolled against its dimension cap.
    pub damage_roll: DamageRoll,
    /// How the computer-controlled opponent picks its spell.
    pub opponent_strategy: OpponentStrategy,
    /// Show one of the opponent's taunts when the duel is announced.
    pub show_taunts: bool,
}

impl DuelRules {
    pub fn new() -> Self {
        Self {
            damage_roll: DamageRoll::default(),
            opponent_strategy: OpponentStrategy::default(),
            show_taunts: true,
        }
    }
}

impl Default for DuelRules {
    fn default() -> Self {
        Self::new()
    }
}

/// Damage roll law for a cast with cap `max`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, strum::Display, strum::EnumString)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum DamageRoll {
    /// Uniform over `[1, max]`, so every cast with a positive cap lands.
    #[default]
    FromOne,
    /// Uniform over `[0, max]`; a cast may fizzle.
    FromZero,
}

/// Spell selection policy for the computer-controlled opponent.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, strum::Display, strum::EnumString)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum OpponentStrategy {
    /// Uniform over castable dimensions.
    #[default]
    Random,
    /// Highest cap; the first dimension in canonical order wins ties.
    Strongest,
}
