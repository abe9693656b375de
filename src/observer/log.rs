//! In-memory fight history

use serde::{Deserialize, Serialize};

use crate::core::error::Result;
use crate::core::types::EntityId;
use crate::entity::{Npc, NpcRef, Variant};
use crate::observer::FightObserver;

/// Who took part in a fight, detached from the live NPC
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Combatant {
    pub id: EntityId,
    pub variant: Variant,
    pub name: String,
}

impl From<&Npc> for Combatant {
    fn from(npc: &Npc) -> Self {
        Self {
            id: npc.id(),
            variant: npc.variant(),
            name: npc.name().to_string(),
        }
    }
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct FightEvent {
    pub seq: u32,
    pub attacker: Combatant,
    pub defender: Combatant,
    pub won: bool,
}

/// Records every notification in arrival order
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct FightLog {
    pub events: Vec<FightEvent>,
    next_seq: u32,
}

impl FightLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn last(&self) -> Option<&FightEvent> {
        self.events.last()
    }

    /// Fights the attacker won
    pub fn victories(&self) -> impl Iterator<Item = &FightEvent> {
        self.events.iter().filter(|e| e.won)
    }

    pub fn events_for(&self, id: EntityId) -> impl Iterator<Item = &FightEvent> {
        self.events
            .iter()
            .filter(move |e| e.attacker.id == id || e.defender.id == id)
    }
}

impl FightObserver for FightLog {
    fn on_fight(&mut self, attacker: &NpcRef, defender: &NpcRef, won: bool) -> Result<()> {
        let seq = self.next_seq;
        self.next_seq += 1;

        self.events.push(FightEvent {
            seq,
            attacker: Combatant::from(attacker.as_ref()),
            defender: Combatant::from(defender.as_ref()),
            won,
        });
        Ok(())
    }
}
