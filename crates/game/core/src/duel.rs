//! Battle state machine.
//!
//! A match walks through these phases:
//!
//! ```text
//! SelectingCharacter -> ConfirmingCharacter -> PairingOpponent
//!        ^                    |  (declined)
//!        +--------------------+
//!
//! PairingOpponent -> PlayerTurn -> OpponentTurn -> CheckTerminal -> PlayerTurn | Concluded
//! ```
//!
//! Both sides act every round; the terminal check runs after the opponent's
//! turn, so a simultaneous knockout is reported as a draw. A side that has no
//! castable dimension when its turn comes forfeits.

use std::collections::BTreeSet;

use rand::RngCore;

use crate::character::Character;
use crate::choice::{ChoiceOption, confirm, prompt_choice};
use crate::config::DuelRules;
use crate::console::Console;
use crate::error::{ConfigError, Result};
use crate::roster::Roster;
use crate::spells::{CastChoice, build_castable_options};

pub const CHARACTER_PROMPT: &str = "Press a key to choose a character:";
pub const CONFIRM_PROMPT: &str = "Confirm choice? Type y or n.";
pub const SPELL_PROMPT: &str = "Choose your spell:";

/// Glyph used for one point of vitality when none is configured.
pub const DEFAULT_VITALITY_GLYPH: char = '+';

/// One of the two fighters in a duel.
#[derive(Clone, Copy, Debug, PartialEq, Eq, strum::Display)]
#[strum(serialize_all = "snake_case")]
pub enum Side {
    Player,
    Opponent,
}

impl Side {
    pub const fn other(self) -> Side {
        match self {
            Side::Player => Side::Opponent,
            Side::Opponent => Side::Player,
        }
    }
}

/// Where the engine currently is in a match.
#[derive(Clone, Copy, Debug, PartialEq, Eq, strum::Display)]
#[strum(serialize_all = "snake_case")]
pub enum DuelPhase {
    SelectingCharacter,
    ConfirmingCharacter,
    PairingOpponent,
    PlayerTurn,
    OpponentTurn,
    CheckTerminal,
    Concluded,
}

/// The two fighters of a running duel.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DuelState {
    pub player: Character,
    pub opponent: Character,
    pub turn_owner: Side,
    pub round: u32,
}

impl DuelState {
    /// Start a duel between two distinct characters.
    pub fn new(player: Character, opponent: Character) -> Self {
        debug_assert_ne!(player.id(), opponent.id(), "a character cannot duel itself");
        Self {
            player,
            opponent,
            turn_owner: Side::Player,
            round: 0,
        }
    }

    pub fn fighter(&self, side: Side) -> &Character {
        match side {
            Side::Player => &self.player,
            Side::Opponent => &self.opponent,
        }
    }

    fn fighter_mut(&mut self, side: Side) -> &mut Character {
        match side {
            Side::Player => &mut self.player,
            Side::Opponent => &mut self.opponent,
        }
    }

    /// Terminal outcome, if either fighter is down.
    pub fn outcome(&self) -> Option<Outcome> {
        match (self.player.is_defeated(), self.opponent.is_defeated()) {
            (false, false) => None,
            (true, true) => Some(Outcome::Draw),
            (false, true) => Some(Outcome::Victory {
                winner: Side::Player,
                forfeit: false,
            }),
            (true, false) => Some(Outcome::Victory {
                winner: Side::Opponent,
                forfeit: false,
            }),
        }
    }
}

/// How a duel ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome {
    /// `winner` is still standing, or the other side forfeited.
    Victory { winner: Side, forfeit: bool },
    /// Both fighters fell in the same round.
    Draw,
}

/// Final result of a completed duel.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DuelReport {
    pub outcome: Outcome,
    pub rounds: u32,
    pub player: Character,
    pub opponent: Character,
}

impl DuelReport {
    fn name(&self, side: Side) -> &str {
        match side {
            Side::Player => self.player.display_name(),
            Side::Opponent => self.opponent.display_name(),
        }
    }

    /// Winner's display name, or `None` on a draw.
    pub fn winner(&self) -> Option<&str> {
        match self.outcome {
            Outcome::Victory { winner, .. } => Some(self.name(winner)),
            Outcome::Draw => None,
        }
    }

    /// Unambiguous outcome statement shown to the player.
    pub fn message(&self) -> String {
        match self.outcome {
            Outcome::Draw => format!(
                "Draw! {} and {} knock each other out.",
                self.name(Side::Player),
                self.name(Side::Opponent)
            ),
            Outcome::Victory { winner, forfeit } => {
                let verdict = match winner {
                    Side::Player => "You win!",
                    Side::Opponent => "You lose!",
                };
                let winner_name = self.name(winner);
                let loser_name = self.name(winner.other());
                if forfeit {
                    format!(
                        "{verdict} {loser_name} has no spell to cast and forfeits. {winner_name} wins the duel."
                    )
                } else {
                    format!("{verdict} {winner_name} defeats {loser_name}.")
                }
            }
        }
    }
}

/// Render `character`'s vitality as a name and a bar of `glyph`s.
pub fn vitality_bar(character: &Character, glyph: char) -> String {
    let points = usize::try_from(character.vitality()).unwrap_or(0);
    let bar: String = std::iter::repeat_n(glyph, points).collect();
    format!("{}: {}", character.display_name(), bar)
}

/// Drives one match over a roster, talking to the user through a console.
pub struct DuelEngine<'a, C: ?Sized, R: ?Sized> {
    roster: &'a Roster,
    rules: &'a DuelRules,
    console: &'a mut C,
    rng: &'a mut R,
    glyph: char,
    phase: DuelPhase,
}

impl<'a, C, R> DuelEngine<'a, C, R>
where
    C: Console + ?Sized,
    R: RngCore + ?Sized,
{
    pub fn new(roster: &'a Roster, rules: &'a DuelRules, console: &'a mut C, rng: &'a mut R) -> Self {
        Self {
            roster,
            rules,
            console,
            rng,
            glyph: DEFAULT_VITALITY_GLYPH,
            phase: DuelPhase::SelectingCharacter,
        }
    }

    /// Use `glyph` for one point of vitality in the round header.
    #[must_use]
    pub fn vitality_glyph(mut self, glyph: char) -> Self {
        self.glyph = glyph;
        self
    }

    pub fn phase(&self) -> DuelPhase {
        self.phase
    }

    /// Play a full match: selection, pairing, then rounds until a terminal state.
    pub fn run(&mut self) -> Result<DuelReport> {
        let chosen = self.select_character()?;
        let state = self.pair(&chosen)?;
        let report = self.fight(state)?;
        self.console.render(&report.message())?;
        Ok(report)
    }

    /// Let the user pick and confirm a character; returns its id.
    ///
    /// Declining the confirmation restarts from the full roster.
    pub fn select_character(&mut self) -> Result<String> {
        loop {
            self.transition(DuelPhase::SelectingCharacter);
            let options = self
                .roster
                .ids()
                .map(|id| ChoiceOption::new(id, id.to_string()))
                .collect();
            let chosen: String = prompt_choice(&mut *self.console, CHARACTER_PROMPT, options, true)?;

            self.transition(DuelPhase::ConfirmingCharacter);
            let character = self
                .roster
                .get(&chosen)
                .ok_or_else(|| ConfigError::UnknownCharacter(chosen.clone()))?;
            let question = format!("{}\n\n{CONFIRM_PROMPT}", character.bio());
            if confirm(&mut *self.console, &question)? {
                tracing::info!(character = %chosen, "character confirmed");
                return Ok(chosen);
            }
            tracing::info!(character = %chosen, "character declined, restarting selection");
        }
    }

    /// Pair `player_id` with a random opponent from the rest of the roster.
    pub fn pair(&mut self, player_id: &str) -> Result<DuelState> {
        self.transition(DuelPhase::PairingOpponent);

        let player = self
            .roster
            .get(player_id)
            .ok_or_else(|| ConfigError::UnknownCharacter(player_id.to_string()))?
            .clone();
        let excluded = BTreeSet::from([player_id.to_string()]);
        let opponent = self.roster.pick_opponent(&excluded, &mut *self.rng)?.clone();

        if !player.magic().has_castable() && !opponent.magic().has_castable() {
            return Err(ConfigError::NoCastableDimensions {
                player: player.id().to_string(),
                opponent: opponent.id().to_string(),
            }
            .into());
        }

        tracing::info!(player = %player.id(), opponent = %opponent.id(), "duel paired");
        self.console
            .render(&format!("\n{} wants to duel!\n", opponent.display_name()))?;
        if self.rules.show_taunts {
            if let Some(taunt) = pick(opponent.taunts(), &mut *self.rng) {
                self.console
                    .render(&format!("{}: \"{taunt}\"\n", opponent.display_name()))?;
            }
        }
        self.console.render("Ready?\n")?;

        Ok(DuelState::new(player, opponent))
    }

    /// Run rounds until one side is down or forfeits.
    pub fn fight(&mut self, mut state: DuelState) -> Result<DuelReport> {
        loop {
            state.round += 1;
            self.console.render(&format!(
                "{}\n{}\n",
                vitality_bar(&state.player, self.glyph),
                vitality_bar(&state.opponent, self.glyph)
            ))?;

            for side in [Side::Player, Side::Opponent] {
                state.turn_owner = side;
                self.transition(match side {
                    Side::Player => DuelPhase::PlayerTurn,
                    Side::Opponent => DuelPhase::OpponentTurn,
                });

                let Some(cast) = self.select_cast(&state, side)? else {
                    tracing::info!(side = %side, round = state.round, "no castable dimension, forfeiting");
                    let outcome = Outcome::Victory {
                        winner: side.other(),
                        forfeit: true,
                    };
                    return Ok(self.conclude(state, outcome));
                };
                self.resolve_cast(&mut state, side, &cast)?;
            }

            self.transition(DuelPhase::CheckTerminal);
            if let Some(outcome) = state.outcome() {
                return Ok(self.conclude(state, outcome));
            }
        }
    }

    fn select_cast(&mut self, state: &DuelState, side: Side) -> Result<Option<CastChoice>> {
        let options = build_castable_options(state.fighter(side), &mut *self.rng);
        if options.is_empty() {
            return Ok(None);
        }
        match side {
            Side::Player => prompt_choice(&mut *self.console, SPELL_PROMPT, options, false).map(Some),
            Side::Opponent => Ok(self.rules.opponent_strategy.choose(options, &mut *self.rng)),
        }
    }

    fn resolve_cast(&mut self, state: &mut DuelState, side: Side, cast: &CastChoice) -> Result<()> {
        let damage = self.rules.damage_roll.roll(cast.max_amount, &mut *self.rng);
        let caster = state.fighter(side).display_name().to_string();

        let target = state.fighter_mut(side.other());
        target.apply_damage(damage);
        tracing::debug!(
            caster = %caster,
            target = %target.id(),
            dimension = %cast.dimension,
            max = cast.max_amount,
            damage,
            remaining = target.vitality(),
            "cast resolved"
        );

        self.console.render(&format!(
            "{caster} casts {} ({}) for {damage} damage!\n",
            cast.spell, cast.dimension
        ))?;
        Ok(())
    }

    fn conclude(&mut self, state: DuelState, outcome: Outcome) -> DuelReport {
        self.transition(DuelPhase::Concluded);
        tracing::info!(?outcome, rounds = state.round, "duel concluded");
        DuelReport {
            outcome,
            rounds: state.round,
            player: state.player,
            opponent: state.opponent,
        }
    }

    fn transition(&mut self, next: DuelPhase) {
        tracing::trace!(from = %self.phase, to = %next, "phase transition");
        self.phase = next;
    }
}

fn pick<'t, R>(items: &'t [String], rng: &mut R) -> Option<&'t String>
where
    R: RngCore + ?Sized,
{
    use rand::seq::SliceRandom;
    items.choose(rng)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{DamageRoll, OpponentStrategy};
    use crate::console::ScriptedConsole;
    use crate::magic::{MagicProfile, SpellBook};
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn book(spells: &[&str], cap: u32) -> SpellBook {
        SpellBook::new(spells.iter().copied(), cap)
    }

    fn alice() -> Character {
        let mut books: [SpellBook; 6] = Default::default();
        books[0] = book(&["gloom"], 5);
        Character::new("alice", "Alice studies the dark.", MagicProfile::new(books))
            .with_taunts(vec!["Lights out.".to_string()])
    }

    fn bob() -> Character {
        let mut books: [SpellBook; 6] = Default::default();
        books[4] = book(&["flare"], 3);
        Character::new("bob", "Bob runs hot.", MagicProfile::new(books))
    }

    fn mute(id: &str) -> Character {
        Character::new(id, "Says nothing.", MagicProfile::default())
    }

    fn roster() -> Roster {
        Roster::new(vec![alice(), bob()]).unwrap()
    }

    #[test]
    fn selection_confirms_and_pairs_the_other_character() {
        let roster = roster();
        let rules = DuelRules::default();
        let mut console = ScriptedConsole::new(["0", "y"]);
        let mut rng = StdRng::seed_from_u64(11);
        let mut engine = DuelEngine::new(&roster, &rules, &mut console, &mut rng);

        let chosen = engine.select_character().unwrap();
        assert_eq!(chosen, "alice");
        let state = engine.pair(&chosen).unwrap();

        assert_eq!(state.player.id(), "alice");
        assert_eq!(state.opponent.id(), "bob");
        assert_eq!(state.turn_owner, Side::Player);
        assert_eq!(engine.phase(), DuelPhase::PairingOpponent);
        assert!(console.transcript().contains("Bob wants to duel!"));
    }

    #[test]
    fn declining_restarts_from_the_full_roster() {
        let roster = roster();
        let rules = DuelRules::default();
        let mut console = ScriptedConsole::new(["0", "n", "0", "y"]);
        let mut rng = StdRng::seed_from_u64(11);

        let chosen = DuelEngine::new(&roster, &rules, &mut console, &mut rng)
            .select_character()
            .unwrap();

        assert_eq!(chosen, "alice");
        let menus: Vec<_> = console
            .output()
            .iter()
            .filter(|block| block.starts_with(CHARACTER_PROMPT))
            .collect();
        assert_eq!(menus.len(), 2);
        assert!(menus.iter().all(|menu| menu.contains("0: Alice") && menu.contains("1: Bob")));
    }

    #[test]
    fn confirmation_shows_the_bio() {
        let roster = roster();
        let rules = DuelRules::default();
        let mut console = ScriptedConsole::new(["1", "y"]);
        let mut rng = StdRng::seed_from_u64(1);

        DuelEngine::new(&roster, &rules, &mut console, &mut rng)
            .select_character()
            .unwrap();

        assert!(console.output().contains(&format!("Bob runs hot.\n\n{CONFIRM_PROMPT}")));
    }

    #[test]
    fn full_duel_ends_with_a_single_verdict_within_ten_rounds() {
        for seed in 0..16 {
            let roster = roster();
            let rules = DuelRules::default();
            let mut script = vec!["0".to_string(), "y".to_string()];
            script.extend(std::iter::repeat_n("0".to_string(), 10));
            let mut console = ScriptedConsole::new(script);
            let mut rng = StdRng::seed_from_u64(seed);

            let report = DuelEngine::new(&roster, &rules, &mut console, &mut rng)
                .run()
                .unwrap();

            assert!(report.rounds >= 1 && report.rounds <= 10);
            assert!(report.player.is_defeated() || report.opponent.is_defeated());
            match report.outcome {
                Outcome::Victory { winner, forfeit } => {
                    assert!(!forfeit);
                    assert!(!report.fighter_is_defeated(winner));
                    assert!(report.fighter_is_defeated(winner.other()));
                }
                Outcome::Draw => {
                    assert!(report.player.is_defeated() && report.opponent.is_defeated());
                }
            }
            assert_eq!(console.output().last(), Some(&report.message()));
        }
    }

    #[test]
    fn player_spell_menu_lists_only_castable_dimensions() {
        let roster = roster();
        let rules = DuelRules::default();
        let mut console = ScriptedConsole::new(["0", "y", "0"]);
        let mut rng = StdRng::seed_from_u64(5);

        let err = DuelEngine::new(&roster, &rules, &mut console, &mut rng)
            .run()
            .unwrap_err();

        assert!(matches!(err, crate::error::DuelError::InputClosed));
        let spell_menu = console
            .output()
            .iter()
            .find(|block| block.starts_with(SPELL_PROMPT))
            .unwrap();
        assert_eq!(spell_menu, &format!("{SPELL_PROMPT}\n0: gloom (dark)"));
    }

    #[test]
    fn simultaneous_knockout_is_a_draw() {
        let rules = DuelRules::default();
        let mut console = ScriptedConsole::new(["0"]);
        let mut rng = StdRng::seed_from_u64(2);
        let roster = roster();
        let mut engine = DuelEngine::new(&roster, &rules, &mut console, &mut rng);

        let mut state = DuelState::new(alice(), bob());
        state.player.apply_damage(9);
        state.opponent.apply_damage(9);

        let report = engine.fight(state).unwrap();
        assert_eq!(report.outcome, Outcome::Draw);
        assert_eq!(report.rounds, 1);
        assert_eq!(report.winner(), None);
        assert!(report.message().starts_with("Draw!"));
    }

    #[test]
    fn opponent_without_spells_forfeits() {
        let rules = DuelRules::default();
        let mut console = ScriptedConsole::new(["0"]);
        let mut rng = StdRng::seed_from_u64(2);
        let roster = roster();
        let mut engine = DuelEngine::new(&roster, &rules, &mut console, &mut rng);

        let report = engine.fight(DuelState::new(alice(), mute("carl"))).unwrap();

        assert_eq!(
            report.outcome,
            Outcome::Victory {
                winner: Side::Player,
                forfeit: true
            }
        );
        assert_eq!(report.winner(), Some("Alice"));
        assert!(report.message().contains("Carl has no spell to cast and forfeits"));
    }

    #[test]
    fn player_without_spells_forfeits_before_prompting() {
        let rules = DuelRules::default();
        let mut console = ScriptedConsole::default();
        let mut rng = StdRng::seed_from_u64(2);
        let roster = roster();
        let mut engine = DuelEngine::new(&roster, &rules, &mut console, &mut rng);

        let report = engine.fight(DuelState::new(mute("carl"), bob())).unwrap();

        assert_eq!(
            report.outcome,
            Outcome::Victory {
                winner: Side::Opponent,
                forfeit: true
            }
        );
        assert!(report.message().starts_with("You lose!"));
        assert_eq!(engine.phase(), DuelPhase::Concluded);
    }

    #[test]
    fn pairing_two_spell_less_characters_is_a_configuration_error() {
        let roster = Roster::new(vec![mute("carl"), mute("dora")]).unwrap();
        let rules = DuelRules::default();
        let mut console = ScriptedConsole::default();
        let mut rng = StdRng::seed_from_u64(2);

        let err = DuelEngine::new(&roster, &rules, &mut console, &mut rng)
            .pair("carl")
            .unwrap_err();

        assert_eq!(err.exit_code(), crate::error::EXIT_CONFIG);
    }

    #[test]
    fn taunts_follow_the_rules_flag() {
        let roster = roster();
        let mut rng = StdRng::seed_from_u64(4);

        let rules = DuelRules::default();
        let mut console = ScriptedConsole::default();
        DuelEngine::new(&roster, &rules, &mut console, &mut rng)
            .pair("bob")
            .unwrap();
        assert!(console.transcript().contains("Alice: \"Lights out.\""));

        let rules = DuelRules {
            show_taunts: false,
            ..DuelRules::default()
        };
        let mut console = ScriptedConsole::default();
        DuelEngine::new(&roster, &rules, &mut console, &mut rng)
            .pair("bob")
            .unwrap();
        assert!(!console.transcript().contains("Lights out."));
    }

    #[test]
    fn strongest_opponent_with_zero_floor_still_terminates_eventually() {
        let roster = roster();
        let rules = DuelRules {
            damage_roll: DamageRoll::FromZero,
            opponent_strategy: OpponentStrategy::Strongest,
            show_taunts: false,
        };
        let script = std::iter::repeat_n("0", 500);
        let mut console = ScriptedConsole::new(script);
        let mut rng = StdRng::seed_from_u64(8);
        let mut engine = DuelEngine::new(&roster, &rules, &mut console, &mut rng);

        let report = engine.fight(DuelState::new(alice(), bob())).unwrap();
        assert!(report.winner().is_some() || report.outcome == Outcome::Draw);
    }

    #[test]
    fn vitality_bar_is_proportional_and_clamped() {
        let mut fighter = alice();
        assert_eq!(vitality_bar(&fighter, '+'), "Alice: ++++++++++");

        fighter.apply_damage(7);
        assert_eq!(vitality_bar(&fighter, '#'), "Alice: ###");

        fighter.apply_damage(10);
        assert_eq!(vitality_bar(&fighter, '+'), "Alice: ");
    }

    impl DuelReport {
        fn fighter_is_defeated(&self, side: Side) -> bool {
            match side {
                Side::Player => self.player.is_defeated(),
                Side::Opponent => self.opponent.is_defeated(),
            }
        }
    }
}
