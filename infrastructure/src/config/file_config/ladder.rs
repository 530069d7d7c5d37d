//! Prize ladder configuration from TOML (`[ladder]` section)
//!
//! `prizes[i]` is paid for answering question `i` (0-based) correctly;
//! `fireproof_levels` lists the 0-based questions whose prize is kept after
//! a later wrong answer or timeout.
//!
//! ```toml
//! [ladder]
//! prizes = [100, 200, 300, 500, 1000]
//! fireproof_levels = [4]
//! ```

use super::ConfigIssue;
use ladder_domain::{GameError, Prize, PrizeLadder};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileLadderConfig {
    pub prizes: Vec<Prize>,
    pub fireproof_levels: Vec<usize>,
}

impl Default for FileLadderConfig {
    fn default() -> Self {
        let classic = PrizeLadder::classic();
        Self {
            prizes: classic.prizes().to_vec(),
            fireproof_levels: classic.fireproof_levels().collect(),
        }
    }
}

impl FileLadderConfig {
    pub fn to_ladder(&self) -> Result<PrizeLadder, GameError> {
        PrizeLadder::new(self.prizes.clone(), self.fireproof_levels.iter().copied())
    }

    pub(super) fn validate(&self) -> Vec<ConfigIssue> {
        let mut issues = Vec::new();

        if self.prizes.is_empty() {
            issues.push(ConfigIssue::error(
                "ladder.prizes",
                "ladder.prizes must list at least one prize",
            ));
        }
        if self.prizes.windows(2).any(|w| w[0] >= w[1]) {
            issues.push(ConfigIssue::error(
                "ladder.prizes",
                "ladder.prizes must be strictly increasing",
            ));
        }
        for level in &self.fireproof_levels {
            if *level >= self.prizes.len() {
                issues.push(ConfigIssue::error(
                    "ladder.fireproof_levels",
                    format!(
                        "fireproof level {} is outside a ladder of {} levels",
                        level,
                        self.prizes.len()
                    ),
                ));
            }
        }
        if !self.prizes.is_empty() && self.fireproof_levels.is_empty() {
            issues.push(ConfigIssue::warning(
                "ladder.fireproof_levels",
                "no fireproof levels: a wrong answer always ends with nothing",
            ));
        }

        issues
    }
}
