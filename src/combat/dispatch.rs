//! Fight dispatch
//!
//! Both sides arrive as plain `NpcRef`s. The variant pair is matched against the
//! outcome table and the bound observer hears about the result exactly once,
//! whatever it was.

use crate::combat::rules::{self, FightOutcome};
use crate::core::error::Result;
use crate::entity::{Npc, NpcRef};
use crate::observer::FightObserver;

/// An attack bound to its attacker, ready to be aimed at defenders
#[derive(Debug, Clone, Copy)]
pub struct Attack<'a> {
    attacker: &'a NpcRef,
}

/// What came out of one engagement
#[derive(Debug)]
#[must_use]
pub struct Engagement {
    pub outcome: FightOutcome,
    /// Result of notifying the observer. The outcome stands either way.
    pub notified: Result<()>,
}

impl Engagement {
    /// True when the defender is defeated
    pub fn won(&self) -> bool {
        self.outcome.attacker_won()
    }
}

impl<'a> Attack<'a> {
    pub fn new(attacker: &'a NpcRef) -> Self {
        Self { attacker }
    }

    pub fn attacker(&self) -> &'a NpcRef {
        self.attacker
    }

    /// Table lookup only; nobody is notified
    pub fn outcome_against(&self, defender: &Npc) -> FightOutcome {
        rules::resolve(self.attacker.variant(), defender.variant())
    }

    /// Resolve the fight and notify the observer once
    pub fn engage(&self, defender: &NpcRef, observer: &mut dyn FightObserver) -> Engagement {
        let outcome = self.outcome_against(defender);

        tracing::debug!(
            "{} fights {} - {}",
            self.attacker,
            defender,
            rules::narrate(self.attacker.variant(), defender.variant())
        );

        let notified = observer.on_fight(self.attacker, defender, outcome.attacker_won());
        Engagement { outcome, notified }
    }
}

/// Resolve a single fight. Returns true iff the defender is defeated.
///
/// Does not touch life state; killing is up to the caller.
pub fn resolve_fight(
    attacker: &NpcRef,
    defender: &NpcRef,
    observer: &mut dyn FightObserver,
) -> Result<bool> {
    let engagement = Attack::new(attacker).engage(defender, observer);
    let won = engagement.won();
    engagement.notified?;
    Ok(won)
}
