//! Default game constants

/// Dice rolled per turn
pub const DICE_COUNT: usize = 3;

/// Faces on each die
pub const DICE_SIDES: u32 = 6;

/// Rounds played before the final roll phase
pub const MAX_TURNS: u32 = 3;

/// Players used when none are given
pub const DEFAULT_PLAYERS: [&str; 2] = ["Ewurabena", "Chaz"];

/// Notice shown when an answer is not one of the accepted tokens
pub const INVALID_CHOICE: &str = "Invalid choice. Please try again.";
