//! Help engine: computes aid payloads against a question's answer set.
//!
//! Randomness is injected so outcomes are reproducible under a seeded RNG.

use super::{AudienceVotes, FiftyFifty};
use crate::core::question::{AnswerKey, Question};
use rand::Rng;
use rand::seq::SliceRandom;
use std::collections::BTreeMap;

/// Share range (percent) given to the correct key. The lower bound keeps the
/// correct key ahead of the other three combined, the upper bound keeps it
/// short of certainty.
const CORRECT_SHARE_MIN: u8 = 51;
const CORRECT_SHARE_MAX: u8 = 85;

/// Compute an audience vote distribution over all four keys.
pub fn audience_distribution<R: Rng + ?Sized>(question: &Question, rng: &mut R) -> AudienceVotes {
    let correct_share = rng.gen_range(CORRECT_SHARE_MIN..=CORRECT_SHARE_MAX);
    let remainder = 100 - correct_share;

    let first = rng.gen_range(0..=remainder);
    let second = rng.gen_range(0..=remainder - first);
    let mut wrong_shares = [first, second, remainder - first - second];
    wrong_shares.shuffle(rng);

    let mut shares = BTreeMap::new();
    shares.insert(question.correct_key(), correct_share);
    for (key, share) in question.wrong_keys().into_iter().zip(wrong_shares) {
        shares.insert(key, share);
    }

    AudienceVotes::new(shares)
}

/// Keep the correct key plus one wrong key chosen uniformly at random.
pub fn fifty_fifty<R: Rng + ?Sized>(question: &Question, rng: &mut R) -> FiftyFifty {
    let wrong: Vec<AnswerKey> = question.wrong_keys();
    let kept = wrong[rng.gen_range(0..wrong.len())];
    FiftyFifty::new(question.correct_key(), kept)
}
