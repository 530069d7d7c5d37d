//! Prize ladder value object

use crate::core::error::GameError;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Monetary amount, in whole currency units.
pub type Prize = u64;

/// Classic fifteen step prize table.
const CLASSIC_PRIZES: [Prize; 15] = [
    100, 200, 300, 500, 1_000, 2_000, 4_000, 8_000, 16_000, 32_000, 64_000, 125_000, 250_000,
    500_000, 1_000_000,
];

/// Question indices whose prize is guaranteed once answered.
const CLASSIC_FIREPROOF: [usize; 3] = [4, 9, 14];

/// Prize ladder (Value Object)
///
/// `prizes[i]` is the prize for having answered question index `i` correctly,
/// i.e. for `i + 1` completed levels. Fireproof levels are question indices.
///
/// # Example
///
/// ```
/// use ladder_domain::ladder::PrizeLadder;
///
/// let ladder = PrizeLadder::classic();
/// assert_eq!(ladder.len(), 15);
/// assert_eq!(ladder.prize_for(5), 1_000);
/// assert_eq!(ladder.prize_for(15), 1_000_000);
/// assert_eq!(ladder.fireproof_prize_for(7), 1_000);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PrizeLadder {
    prizes: Vec<Prize>,
    fireproof_levels: BTreeSet<usize>,
}

impl PrizeLadder {
    /// Build a ladder from an explicit table.
    ///
    /// Prizes must be non-empty and strictly increasing; every fireproof
    /// index must point inside the table.
    pub fn new(
        prizes: Vec<Prize>,
        fireproof_levels: impl IntoIterator<Item = usize>,
    ) -> Result<Self, GameError> {
        if prizes.is_empty() {
            return Err(GameError::InvalidLadder(
                "at least one prize is required".to_string(),
            ));
        }
        if let Some(i) = prizes.windows(2).position(|w| w[0] >= w[1]) {
            return Err(GameError::InvalidLadder(format!(
                "prizes must be strictly increasing (level {} -> {})",
                i,
                i + 1
            )));
        }

        let fireproof_levels: BTreeSet<usize> = fireproof_levels.into_iter().collect();
        if let Some(&out) = fireproof_levels.iter().find(|&&l| l >= prizes.len()) {
            return Err(GameError::InvalidLadder(format!(
                "fireproof level {} is outside a ladder of {} levels",
                out,
                prizes.len()
            )));
        }

        Ok(Self {
            prizes,
            fireproof_levels,
        })
    }

    /// The classic 15-level ladder with fireproof levels 5, 10 and 15.
    pub fn classic() -> Self {
        Self {
            prizes: CLASSIC_PRIZES.to_vec(),
            fireproof_levels: CLASSIC_FIREPROOF.into_iter().collect(),
        }
    }

    /// Number of questions in a game (N).
    pub fn len(&self) -> usize {
        self.prizes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.prizes.is_empty()
    }

    pub fn prizes(&self) -> &[Prize] {
        &self.prizes
    }

    pub fn fireproof_levels(&self) -> impl Iterator<Item = usize> + '_ {
        self.fireproof_levels.iter().copied()
    }

    /// Whether answering question index `level` secures a guaranteed prize.
    pub fn is_fireproof(&self, level: usize) -> bool {
        self.fireproof_levels.contains(&level)
    }

    /// Prize for having completed `completed` levels. Zero for none;
    /// saturates at the top prize.
    pub fn prize_for(&self, completed: usize) -> Prize {
        match completed {
            0 => 0,
            n => self.prizes[n.min(self.prizes.len()) - 1],
        }
    }

    /// Highest fireproof prize secured after completing `completed` levels,
    /// or 0 if no fireproof level has been reached.
    pub fn fireproof_prize_for(&self, completed: usize) -> Prize {
        self.fireproof_levels
            .range(..completed)
            .next_back()
            .map(|&level| self.prizes[level])
            .unwrap_or(0)
    }

    /// The maximum (terminal) prize.
    pub fn top_prize(&self) -> Prize {
        self.prize_for(self.prizes.len())
    }
}

impl Default for PrizeLadder {
    fn default() -> Self {
        Self::classic()
    }
}
