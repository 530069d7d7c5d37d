//! Help (aid) domain
//!
//! A game offers two one-time aids, each applied to the current question only:
//!
//! - **Audience help**: a vote-share distribution over all four keys where the
//!   correct key receives a plurality but never certainty
//! - **Fifty-fifty**: removes two wrong answers, leaving the correct key and one
//!   randomly chosen wrong key
//!
//! Computation lives in [`engine`]; the per-question record of applied aids is
//! [`HelpHash`].

pub mod engine;

use crate::core::question::AnswerKey;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::str::FromStr;
use thiserror::Error;

pub use engine::{audience_distribution, fifty_fifty};

/// Kind of aid a player may invoke once per game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HelpType {
    AudienceHelp,
    FiftyFifty,
}

impl HelpType {
    pub const ALL: [HelpType; 2] = [HelpType::AudienceHelp, HelpType::FiftyFifty];

    pub fn as_str(&self) -> &'static str {
        match self {
            HelpType::AudienceHelp => "audience_help",
            HelpType::FiftyFifty => "fifty_fifty",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            HelpType::AudienceHelp => "Ask the audience",
            HelpType::FiftyFifty => "50/50",
        }
    }
}

impl std::fmt::Display for HelpType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Unknown help type: '{0}'")]
pub struct ParseHelpTypeError(pub String);

impl FromStr for HelpType {
    type Err = ParseHelpTypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "audience_help" | "audience" => Ok(HelpType::AudienceHelp),
            "fifty_fifty" | "5050" | "50/50" => Ok(HelpType::FiftyFifty),
            _ => Err(ParseHelpTypeError(s.to_string())),
        }
    }
}

/// Audience vote shares in percent, one entry per answer key, summing to 100.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AudienceVotes(BTreeMap<AnswerKey, u8>);

impl AudienceVotes {
    pub fn new(shares: BTreeMap<AnswerKey, u8>) -> Self {
        Self(shares)
    }

    /// Vote share for a key (0 if absent).
    pub fn share(&self, key: AnswerKey) -> u8 {
        self.0.get(&key).copied().unwrap_or(0)
    }

    pub fn keys(&self) -> impl Iterator<Item = AnswerKey> + '_ {
        self.0.keys().copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (AnswerKey, u8)> + '_ {
        self.0.iter().map(|(k, v)| (*k, *v))
    }

    pub fn total(&self) -> u32 {
        self.0.values().map(|v| u32::from(*v)).sum()
    }

    /// Key with the largest share.
    pub fn leader(&self) -> Option<AnswerKey> {
        self.0
            .iter()
            .max_by_key(|(_, share)| **share)
            .map(|(key, _)| *key)
    }
}

/// The two keys left after a fifty-fifty, in key order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FiftyFifty([AnswerKey; 2]);

impl FiftyFifty {
    /// Build from two distinct keys; the pair is stored sorted.
    pub fn new(first: AnswerKey, second: AnswerKey) -> Self {
        if first <= second {
            Self([first, second])
        } else {
            Self([second, first])
        }
    }

    pub fn keys(&self) -> &[AnswerKey; 2] {
        &self.0
    }

    pub fn contains(&self, key: AnswerKey) -> bool {
        self.0.contains(&key)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        false
    }
}

/// Aid payloads computed for one game question.
///
/// Each field is populated only when the matching aid is invoked on the
/// question; once set it is never recomputed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HelpHash {
    pub audience_help: Option<AudienceVotes>,
    pub fifty_fifty: Option<FiftyFifty>,
}

impl HelpHash {
    pub fn is_empty(&self) -> bool {
        self.audience_help.is_none() && self.fifty_fifty.is_none()
    }

    pub fn contains(&self, help_type: HelpType) -> bool {
        match help_type {
            HelpType::AudienceHelp => self.audience_help.is_some(),
            HelpType::FiftyFifty => self.fifty_fifty.is_some(),
        }
    }
}
