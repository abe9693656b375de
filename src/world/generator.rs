//! Random population generation

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::core::error::Result;
use crate::core::types::{WORLD_MAX, WORLD_MIN};
use crate::entity::{Npc, NpcRef, Variant};

/// Spawns NPCs of uniform-random variant at uniform-random positions
pub struct PopulationGenerator {
    seed: u64,
    rng: ChaCha8Rng,
}

impl PopulationGenerator {
    /// Deterministic generator for reproducible runs
    pub fn with_seed(seed: u64) -> Self {
        Self {
            seed,
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    pub fn from_entropy() -> Self {
        Self::with_seed(rand::random())
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Generate `count` NPCs named `<Variant>_<index>`
    pub fn generate(&mut self, count: usize) -> Result<Vec<NpcRef>> {
        (0..count).map(|i| self.spawn_one(i)).collect()
    }

    fn spawn_one(&mut self, index: usize) -> Result<NpcRef> {
        let variant = Variant::from_index(self.rng.gen_range(0..Variant::ALL.len()))?;
        let x = self.rng.gen_range(WORLD_MIN..=WORLD_MAX);
        let y = self.rng.gen_range(WORLD_MIN..=WORLD_MAX);
        Npc::spawn(variant, format!("{}_{}", variant, index), x, y)
    }
}
