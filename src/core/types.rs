//! Core type definitions used throughout the codebase

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Lowest legal coordinate on either axis
pub const WORLD_MIN: i32 = 0;
/// Highest legal coordinate on either axis
pub const WORLD_MAX: i32 = 500;

/// Unique identifier for NPCs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EntityId(pub Uuid);

impl EntityId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for EntityId {
    fn default() -> Self {
        Self::new()
    }
}

/// Integer grid position, always inside the world bounds once constructed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    /// Returns `None` when either axis is outside `WORLD_MIN..=WORLD_MAX`
    pub fn checked(x: i32, y: i32) -> Option<Self> {
        let bounds = WORLD_MIN..=WORLD_MAX;
        if bounds.contains(&x) && bounds.contains(&y) {
            Some(Self { x, y })
        } else {
            None
        }
    }

    /// Euclidean distance
    pub fn distance(&self, other: &Self) -> f64 {
        let dx = f64::from(self.x - other.x);
        let dy = f64::from(self.y - other.y);
        (dx * dx + dy * dy).sqrt()
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}
