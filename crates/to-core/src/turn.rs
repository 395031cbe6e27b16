//! A single player's turn

use crate::config::GameConfig;
use crate::console::{Console, RerollChoice, ask_reroll};
use crate::dice::{DiceList, Partition, categorize, tuple_out};
use crate::error::GameError;
use crate::rng::DiceRoller;

/// What happened during one turn
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TurnOutcome {
    /// Initial roll and its categorization
    pub partition: Partition,
    /// Fresh dice replacing the non-fixed ones, if the player rerolled
    pub reroll: Option<Vec<u32>>,
    /// Fixed faces followed by any rerolled dice
    pub resulting_dice: Vec<u32>,
    /// Fixed faces; these are what the turn scores
    pub fixed_dice: Vec<u32>,
}

impl TurnOutcome {
    /// Score contributed by this turn
    pub fn score(&self) -> u32 {
        self.fixed_dice.iter().sum()
    }
}

/// Play one turn for `player`: roll, categorize, and offer a reroll of the
/// non-fixed dice. Only the fixed dice count towards the score.
pub fn play_turn<R, C>(
    player: &str,
    config: &GameConfig,
    roller: &mut R,
    console: &mut C,
) -> Result<TurnOutcome, GameError>
where
    R: DiceRoller + ?Sized,
    C: Console + ?Sized,
{
    let roll = roller.roll(config.dice_count, config.sides);
    console.print(&format!("{}'s turn: {}", player, DiceList(&roll)))?;

    if tuple_out(&roll) {
        console.print(&format!("{}: Tuple Out!", player))?;
    } else {
        console.print(&format!("{}: No Tuple Out.", player))?;
    }

    let partition = categorize(&roll);
    console.print(&format!("{}: Fixed dice: {}", player, DiceList(&partition.fixed)))?;
    console.print(&format!(
        "{}: Non-fixed dice: {}",
        player,
        DiceList(&partition.non_fixed)
    ))?;
    if !partition.unscored.is_empty() {
        console.print(&format!(
            "{}: Unscored dice: {}",
            player,
            DiceList(&partition.unscored)
        ))?;
    }

    let choice = if partition.has_non_fixed() {
        ask_reroll(console, player)?
    } else {
        RerollChoice::Keep
    };

    let fixed_dice = partition.fixed.clone();
    let mut resulting_dice = fixed_dice.clone();
    let reroll = match choice {
        RerollChoice::Reroll => {
            let fresh = roller.roll(partition.non_fixed.len(), config.sides);
            console.print(&format!(
                "{}: Rerolling non-fixed dice: {}",
                player,
                DiceList(&fresh)
            ))?;
            resulting_dice.extend_from_slice(&fresh);
            Some(fresh)
        }
        RerollChoice::Keep if partition.has_non_fixed() => {
            console.print(&format!("{}: Keeping fixed dice, ending turn.", player))?;
            None
        }
        RerollChoice::Keep => {
            console.print(&format!("{}: No dice to reroll, ending turn.", player))?;
            None
        }
    };

    tracing::debug!(player, ?roll, ?fixed_dice, ?reroll, "turn played");

    Ok(TurnOutcome {
        partition,
        reroll,
        resulting_dice,
        fixed_dice,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::console::ScriptedConsole;
    use crate::testing::LoadedDice;

    fn config() -> GameConfig {
        GameConfig::new(vec!["A".into(), "B".into()], 1)
    }

    #[test]
    fn test_keep_scores_fixed_only() {
        let mut dice = LoadedDice::new([4, 4, 2]);
        let mut console = ScriptedConsole::new(["n"]);
        let outcome = play_turn("A", &config(), &mut dice, &mut console).unwrap();

        assert_eq!(outcome.partition.roll, vec![4, 4, 2]);
        assert_eq!(outcome.fixed_dice, vec![4]);
        assert_eq!(outcome.resulting_dice, vec![4]);
        assert_eq!(outcome.reroll, None);
        assert_eq!(outcome.score(), 4);
        assert!(console.saw("A: Tuple Out!"));
        assert!(console.saw("A: Keeping fixed dice"));
    }

    #[test]
    fn test_reroll_replaces_non_fixed() {
        let mut dice = LoadedDice::new([3, 1, 3, 6]);
        let mut console = ScriptedConsole::new(["y"]);
        let outcome = play_turn("A", &config(), &mut dice, &mut console).unwrap();

        assert_eq!(outcome.reroll, Some(vec![6]));
        assert_eq!(outcome.resulting_dice, vec![3, 6]);
        assert_eq!(outcome.fixed_dice, vec![3]);
        assert_eq!(outcome.score(), 3);
        assert_eq!(dice.remaining(), 0);
    }

    #[test]
    fn test_all_distinct_reroll_rolls_every_die() {
        let mut dice = LoadedDice::new([1, 2, 3, 5, 5, 6]);
        let mut console = ScriptedConsole::new(["Y"]);
        let outcome = play_turn("B", &config(), &mut dice, &mut console).unwrap();

        assert!(console.saw("B: No Tuple Out."));
        assert!(outcome.fixed_dice.is_empty());
        assert_eq!(outcome.reroll, Some(vec![5, 5, 6]));
        assert_eq!(outcome.resulting_dice, vec![5, 5, 6]);
        assert_eq!(outcome.score(), 0);
    }

    #[test]
    fn test_three_of_a_kind_skips_prompt() {
        let mut dice = LoadedDice::new([2, 2, 2]);
        let mut console = ScriptedConsole::new(Vec::<String>::new());
        let outcome = play_turn("A", &config(), &mut dice, &mut console).unwrap();

        assert!(outcome.fixed_dice.is_empty());
        assert!(outcome.resulting_dice.is_empty());
        assert_eq!(outcome.score(), 0);
        assert!(console.saw("A: Unscored dice: [2]"));
        assert!(console.saw("No dice to reroll"));
        assert!(!console.saw("do you want to reroll"));
    }

    #[test]
    fn test_keep_never_invents_faces() {
        let mut dice = LoadedDice::new([6, 5, 6]);
        let mut console = ScriptedConsole::new(["n"]);
        let outcome = play_turn("A", &config(), &mut dice, &mut console).unwrap();
        assert!(outcome
            .resulting_dice
            .iter()
            .all(|d| outcome.partition.roll.contains(d)));
        assert_eq!(outcome.resulting_dice, outcome.fixed_dice);
    }

    #[test]
    fn test_closed_input_aborts_turn() {
        let mut dice = LoadedDice::new([1, 2, 2]);
        let mut console = ScriptedConsole::new(["what"]);
        let err = play_turn("A", &config(), &mut dice, &mut console).unwrap_err();
        assert!(matches!(err, GameError::InputClosed));
    }
}
