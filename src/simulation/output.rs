//! Campaign output and serialization

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::core::error::Result;
use crate::core::types::EntityId;
use crate::entity::{Npc, NpcRef, Variant};

/// Serializable view of an NPC at a point in time
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct NpcSnapshot {
    pub id: EntityId,
    pub variant: Variant,
    pub name: String,
    pub x: i32,
    pub y: i32,
    pub alive: bool,
}

impl From<&Npc> for NpcSnapshot {
    fn from(npc: &Npc) -> Self {
        Self {
            id: npc.id(),
            variant: npc.variant(),
            name: npc.name().to_string(),
            x: npc.x(),
            y: npc.y(),
            alive: npc.is_alive(),
        }
    }
}

impl NpcSnapshot {
    /// Snapshot a whole population, preserving order
    pub fn all(population: &[NpcRef]) -> Vec<Self> {
        population.iter().map(|npc| Self::from(npc.as_ref())).collect()
    }
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct RoundStats {
    pub range: u32,
    pub fights: usize,
    pub killed: Vec<NpcSnapshot>,
    pub alive_after: usize,
    pub notify_failures: usize,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct CampaignStats {
    pub seed: Option<u64>,
    pub rounds_fought: usize,
    pub total_fights: usize,
    pub population_at_start: usize,
    pub population_at_end: usize,
    pub total_killed: usize,
}

/// Complete campaign output
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct CampaignOutput {
    pub rounds: Vec<RoundStats>,
    pub survivors: Vec<NpcSnapshot>,
    pub statistics: CampaignStats,
}

impl CampaignOutput {
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn summary(&self) -> String {
        format!(
            "{} rounds, {} fights, {} of {} NPCs killed, {} survive",
            self.statistics.rounds_fought,
            self.statistics.total_fights,
            self.statistics.total_killed,
            self.statistics.population_at_start,
            self.statistics.population_at_end,
        )
    }
}

impl fmt::Display for RoundStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "     Battle statistics     ")?;
        writeln!(f, "Range: {}", self.range)?;
        writeln!(f, "Killed: {}", self.killed.len())?;
        if !self.killed.is_empty() {
            writeln!(f, "Killed NPCs:")?;
            for npc in &self.killed {
                writeln!(f, "  {} {} at ({}, {})", npc.variant, npc.name, npc.x, npc.y)?;
            }
        }
        writeln!(f, "Alive: {}", self.alive_after)
    }
}

/// Roster listing for a population
pub struct Roster<'a>(pub &'a [NpcSnapshot]);

impl fmt::Display for Roster<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Total NPCs: {}", self.0.len())?;
        for npc in self.0 {
            writeln!(
                f,
                "{} \"{}\" at position: ({}, {}) - {}",
                npc.variant,
                npc.name,
                npc.x,
                npc.y,
                if npc.alive { "Alive" } else { "Dead" }
            )?;
        }
        Ok(())
    }
}
