//! Multi-round orchestration and reporting

pub mod campaign;
pub mod output;

pub use campaign::run_campaign;
pub use output::{CampaignOutput, CampaignStats, NpcSnapshot, Roster, RoundStats};
