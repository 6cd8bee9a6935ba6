//! Castable spell options and damage rolls.

use rand::Rng;
use rand::seq::SliceRandom;

use crate::character::Character;
use crate::choice::ChoiceOption;
use crate::config::{DamageRoll, OpponentStrategy};
use crate::magic::Dimension;

/// What a caster commits to when picking an option: the element, the spell
/// name shown for it this turn, and the damage cap.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CastChoice {
    pub dimension: Dimension,
    pub spell: String,
    pub max_amount: u32,
}

/// Build this turn's spell menu for `character`.
///
/// One entry per castable dimension, in canonical order. The displayed spell
/// name is drawn at random from that dimension's list on every call.
pub fn build_castable_options<R>(character: &Character, rng: &mut R) -> Vec<ChoiceOption<CastChoice>>
where
    R: Rng + ?Sized,
{
    character
        .magic()
        .castable()
        .filter_map(|(dimension, book)| {
            let spell = book.spells.choose(&mut *rng)?.clone();
            Some(ChoiceOption::new(
                format!("{spell} ({dimension})"),
                CastChoice {
                    dimension,
                    spell,
                    max_amount: book.max_amount,
                },
            ))
        })
        .collect()
}

impl DamageRoll {
    /// Roll the damage of a cast capped at `max_amount`.
    pub fn roll<R>(self, max_amount: u32, rng: &mut R) -> u32
    where
        R: Rng + ?Sized,
    {
        match self {
            DamageRoll::FromOne if max_amount == 0 => 0,
            DamageRoll::FromOne => rng.gen_range(1..=max_amount),
            DamageRoll::FromZero => rng.gen_range(0..=max_amount),
        }
    }
}

impl OpponentStrategy {
    /// Pick one option. Returns `None` only when `options` is empty.
    pub fn choose<R>(self, mut options: Vec<ChoiceOption<CastChoice>>, rng: &mut R) -> Option<CastChoice>
    where
        R: Rng + ?Sized,
    {
        if options.is_empty() {
            return None;
        }
        let index = match self {
            OpponentStrategy::Random => rng.gen_range(0..options.len()),
            OpponentStrategy::Strongest => options
                .iter()
                .enumerate()
                .min_by_key(|(_, option)| std::cmp::Reverse(option.payload.max_amount))
                .map(|(index, _)| index)?,
        };
        Some(options.swap_remove(index).payload)
    }
}
