//! Game domain: the aggregate root and its state machine.
//!
//! # State Transitions
//!
//! ```text
//!              ┌──> Won        (last question answered correctly)
//!              ├──> CashedOut  (take_money at level > 0)
//! InProgress ──┼──> TimedOut   (time limit exceeded)
//!              └──> Failed     (wrong answer)
//! ```
//!
//! All four outcomes are terminal. A finished game never changes its level,
//! prize or help flags again.

pub mod entities;
pub mod rules;
pub mod status;
pub mod value_objects;

pub use entities::{Game, GameQuestion};
pub use rules::GameRules;
pub use status::{Finish, FinishReason, GameStatus};
pub use value_objects::{GameSnapshot, Settlement};
