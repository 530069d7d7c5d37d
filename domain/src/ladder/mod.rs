//! Prize ladder domain
//!
//! Static table mapping completed levels to monetary prizes, with designated
//! "fireproof" levels whose prize is retained after a later wrong answer.

pub mod prize_ladder;

pub use prize_ladder::{Prize, PrizeLadder};
