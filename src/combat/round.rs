//! One round of proximity fighting
//!
//! Every live NPC attacks every other live NPC within range, in population
//! order. A defender dies the first time it loses. Once dead it is skipped by
//! every later attacker in the round and is not notified again, and it never
//! gets its own turn as attacker.

use std::rc::Rc;

use crate::combat::dispatch::Attack;
use crate::entity::NpcRef;
use crate::observer::FightObserver;

/// What happened in one round
#[derive(Debug, Default)]
pub struct RoundReport {
    pub range: f64,
    /// Fights resolved (and notified)
    pub fights: usize,
    /// NPCs killed this round, in order of death
    pub killed: Vec<NpcRef>,
    /// Notifications the observer reported as failed
    pub notify_failures: usize,
}

impl RoundReport {
    pub fn kill_count(&self) -> usize {
        self.killed.len()
    }
}

/// Run one round over `population` at the given proximity threshold.
///
/// The population itself is left alone; removing the dead is the caller's job.
pub fn run_round(population: &[NpcRef], range: f64, observer: &mut dyn FightObserver) -> RoundReport {
    let mut report = RoundReport {
        range,
        ..Default::default()
    };

    for attacker in population {
        if !attacker.is_alive() {
            continue;
        }
        let attack = Attack::new(attacker);

        for defender in population {
            if !defender.is_alive() || Rc::ptr_eq(attacker, defender) {
                continue;
            }
            if attacker.distance(defender) > range {
                continue;
            }

            let engagement = attack.engage(defender, observer);
            report.fights += 1;

            if let Err(e) = &engagement.notified {
                tracing::warn!("Notification for {} vs {} failed: {}", attacker, defender, e);
                report.notify_failures += 1;
            }

            if engagement.won() && defender.is_alive() {
                defender.kill();
                report.killed.push(Rc::clone(defender));
            }
        }
    }

    tracing::info!(
        "Round at range {}: {} fights, {} killed",
        range,
        report.fights,
        report.killed.len()
    );

    report
}
