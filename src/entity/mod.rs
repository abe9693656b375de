pub mod npc;
pub mod variant;

pub use npc::{Npc, NpcRef};
pub use variant::Variant;
