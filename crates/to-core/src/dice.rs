//! Dice categorization
//!
//! A roll is split by how often each face occurs: faces seen exactly twice
//! are fixed, faces seen once may be rerolled. Faces seen three or more times
//! belong to neither group and do not score.

use std::collections::BTreeMap;
use std::fmt;

/// Count occurrences of each distinct face, ascending by face.
pub fn count_faces(roll: &[u32]) -> BTreeMap<u32, usize> {
    let mut counts = BTreeMap::new();
    for &die in roll {
        *counts.entry(die).or_insert(0) += 1;
    }
    counts
}

/// True iff the roll holds exactly two distinct faces.
pub fn tuple_out(roll: &[u32]) -> bool {
    count_faces(roll).len() == 2
}

/// A roll together with its fixed / non-fixed split.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Partition {
    /// The roll as it came off the dice
    pub roll: Vec<u32>,
    /// Distinct faces occurring exactly twice, ascending
    pub fixed: Vec<u32>,
    /// Distinct faces occurring exactly once, ascending
    pub non_fixed: Vec<u32>,
    /// Distinct faces occurring three or more times, ascending
    pub unscored: Vec<u32>,
}

impl Partition {
    /// Whether the player has anything to reroll
    pub fn has_non_fixed(&self) -> bool {
        !self.non_fixed.is_empty()
    }

    /// Sum of the fixed faces
    pub fn fixed_score(&self) -> u32 {
        self.fixed.iter().sum()
    }
}

/// Split a roll into fixed, non-fixed and unscored faces.
pub fn categorize(roll: &[u32]) -> Partition {
    let mut fixed = Vec::new();
    let mut non_fixed = Vec::new();
    let mut unscored = Vec::new();

    for (face, count) in count_faces(roll) {
        match count {
            1 => non_fixed.push(face),
            2 => fixed.push(face),
            _ => unscored.push(face),
        }
    }

    Partition {
        roll: roll.to_vec(),
        fixed,
        non_fixed,
        unscored,
    }
}

/// Display wrapper rendering dice as `[4, 4, 2]`.
pub struct DiceList<'a>(pub &'a [u32]);

impl fmt::Display for DiceList<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (i, die) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{}", die)?;
        }
        f.write_str("]")
    }
}
