//! Campaign loop: rounds at growing ranges until the schedule or the population runs out

use ahash::AHashSet;

use crate::combat::run_round;
use crate::core::config::ArenaConfig;
use crate::core::types::EntityId;
use crate::entity::NpcRef;
use crate::observer::FightObserver;
use crate::simulation::output::{CampaignOutput, CampaignStats, NpcSnapshot, RoundStats};

/// Run every round of the configured range schedule.
///
/// Killed NPCs are dropped from the working population between rounds. Stops
/// early once nobody is left.
pub fn run_campaign(
    mut population: Vec<NpcRef>,
    config: &ArenaConfig,
    observer: &mut dyn FightObserver,
) -> CampaignOutput {
    let mut statistics = CampaignStats {
        seed: config.seed,
        population_at_start: population.len(),
        ..Default::default()
    };
    let mut rounds = Vec::new();

    for range in config.ranges() {
        if population.is_empty() {
            break;
        }

        let report = run_round(&population, f64::from(range), observer);

        let dead: AHashSet<EntityId> = report.killed.iter().map(|npc| npc.id()).collect();
        population.retain(|npc| !dead.contains(&npc.id()));

        statistics.rounds_fought += 1;
        statistics.total_fights += report.fights;
        statistics.total_killed += report.killed.len();

        rounds.push(RoundStats {
            range,
            fights: report.fights,
            killed: NpcSnapshot::all(&report.killed),
            alive_after: population.len(),
            notify_failures: report.notify_failures,
        });
    }

    statistics.population_at_end = population.len();

    CampaignOutput {
        rounds,
        survivors: NpcSnapshot::all(&population),
        statistics,
    }
}
