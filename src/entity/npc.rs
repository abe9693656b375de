//! NPC identity, position and life state
//!
//! NPCs are shared between the working population and any kill report through
//! `NpcRef` handles. Nothing is ever copied: fight eligibility and kill
//! bookkeeping compare handles, not attributes, so two NPCs with the same name
//! and position are still distinct opponents.

use std::cell::Cell;
use std::fmt;
use std::rc::Rc;

use crate::core::error::{ArenaError, Result};
use crate::core::types::{EntityId, Position};
use crate::entity::variant::Variant;

/// Shared handle to an NPC
pub type NpcRef = Rc<Npc>;

#[derive(Debug)]
pub struct Npc {
    id: EntityId,
    variant: Variant,
    name: String,
    position: Position,
    alive: Cell<bool>,
}

impl Npc {
    /// Create a live NPC, validating coordinates and name up front
    pub fn new(variant: Variant, name: impl Into<String>, x: i32, y: i32) -> Result<Self> {
        let name = name.into();
        if name.is_empty() || name.chars().any(char::is_whitespace) {
            return Err(ArenaError::InvalidName(name));
        }
        let position = Position::checked(x, y).ok_or(ArenaError::InvalidCoordinate { x, y })?;

        Ok(Self {
            id: EntityId::new(),
            variant,
            name,
            position,
            alive: Cell::new(true),
        })
    }

    /// Same as `new`, wrapped in a shared handle
    pub fn spawn(variant: Variant, name: impl Into<String>, x: i32, y: i32) -> Result<NpcRef> {
        Self::new(variant, name, x, y).map(Rc::new)
    }

    pub fn id(&self) -> EntityId {
        self.id
    }

    pub fn variant(&self) -> Variant {
        self.variant
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn position(&self) -> Position {
        self.position
    }

    pub fn x(&self) -> i32 {
        self.position.x
    }

    pub fn y(&self) -> i32 {
        self.position.y
    }

    pub fn distance(&self, other: &Npc) -> f64 {
        self.position.distance(&other.position)
    }

    pub fn is_alive(&self) -> bool {
        self.alive.get()
    }

    /// Mark as dead. There is no way back.
    pub fn kill(&self) {
        self.alive.set(false);
    }
}

impl fmt::Display for Npc {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.variant, self.name)
    }
}
