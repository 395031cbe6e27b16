//! End-of-game final roll
//!
//! Any player holding fewer fixed dice than the dice count gets the missing
//! dice rolled for them. A list already at or above the dice count is scored
//! as it stands.

use crate::config::GameConfig;
use crate::console::Console;
use crate::dice::DiceList;
use crate::error::GameError;
use crate::rng::DiceRoller;

/// Result of a player's final roll
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FinalRoll {
    /// Dice rolled to top up the fixed list (empty if none were needed)
    pub rolled: Vec<u32>,
    /// Sum of the fixed list after the top-up
    pub score: u32,
}

/// Top `fixed_dice` up to the dice count and score it.
///
/// The rolled dice are appended to `fixed_dice`. The running game score is
/// left to the caller.
pub fn resolve_final<R, C>(
    player: &str,
    fixed_dice: &mut Vec<u32>,
    config: &GameConfig,
    roller: &mut R,
    console: &mut C,
) -> Result<FinalRoll, GameError>
where
    R: DiceRoller + ?Sized,
    C: Console + ?Sized,
{
    console.print(&format!("{}'s final roll:", player))?;

    let missing = config.dice_count.saturating_sub(fixed_dice.len());
    let rolled = if missing > 0 {
        let rolled = roller.roll(missing, config.sides);
        console.print(&format!("{}: Rolling non-fixed dice: {}", player, DiceList(&rolled)))?;
        fixed_dice.extend_from_slice(&rolled);
        rolled
    } else {
        console.print(&format!("{}: No dice to roll, all dice are fixed.", player))?;
        Vec::new()
    };

    let score: u32 = fixed_dice.iter().sum();
    console.print(&format!("{}: Final score: {}", player, score))?;

    Ok(FinalRoll { rolled, score })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::console::ScriptedConsole;
    use crate::testing::LoadedDice;

    #[test]
    fn test_top_up_short_list() {
        let config = GameConfig::default();
        let mut dice = LoadedDice::new([5, 1]);
        let mut console = ScriptedConsole::default();
        let mut fixed = vec![4];

        let result = resolve_final("A", &mut fixed, &config, &mut dice, &mut console).unwrap();

        assert_eq!(result.rolled, vec![5, 1]);
        assert_eq!(fixed, vec![4, 5, 1]);
        assert_eq!(result.score, 10);
        assert!(console.saw("A: Final score: 10"));
    }

    #[test]
    fn test_empty_list_rolls_full_set() {
        let config = GameConfig::default();
        let mut dice = LoadedDice::new([2, 3, 6]);
        let mut console = ScriptedConsole::default();
        let mut fixed = Vec::new();

        let result = resolve_final("A", &mut fixed, &config, &mut dice, &mut console).unwrap();

        assert_eq!(fixed.len(), config.dice_count);
        assert_eq!(result.score, 11);
    }

    #[test]
    fn test_full_list_untouched() {
        let config = GameConfig::default();
        let mut dice = LoadedDice::new(Vec::<u32>::new());
        let mut console = ScriptedConsole::default();
        let mut fixed = vec![3, 5, 2];

        let result = resolve_final("A", &mut fixed, &config, &mut dice, &mut console).unwrap();

        assert!(result.rolled.is_empty());
        assert_eq!(fixed, vec![3, 5, 2]);
        assert_eq!(result.score, 10);
        assert!(console.saw("all dice are fixed"));
    }

    #[test]
    fn test_excess_list_summed_as_is() {
        let config = GameConfig::default();
        let mut dice = LoadedDice::new(Vec::<u32>::new());
        let mut console = ScriptedConsole::default();
        let mut fixed = vec![6, 6, 4, 1];

        let result = resolve_final("A", &mut fixed, &config, &mut dice, &mut console).unwrap();

        assert_eq!(fixed.len(), 4);
        assert_eq!(result.score, 17);
    }
}
