//! Combat resolution: outcome table, dispatch and the round engine

pub mod dispatch;
pub mod round;
pub mod rules;

pub use dispatch::{resolve_fight, Attack, Engagement};
pub use round::{run_round, RoundReport};
pub use rules::{resolve, FightOutcome};
