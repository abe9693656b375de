//! Fight notification sinks
//!
//! An observer hears about every resolved fight, synchronously and exactly once,
//! as an (attacker, defender, won) triple. `won` is true when the defender was
//! defeated. Draws and lost attacks are reported too.

pub mod composite;
pub mod log;
pub mod text;

pub use composite::CompositeObserver;
pub use log::{Combatant, FightEvent, FightLog};
pub use text::{FileObserver, TextObserver};

use std::cell::RefCell;
use std::rc::Rc;

use crate::core::error::Result;
use crate::entity::NpcRef;

pub trait FightObserver {
    fn on_fight(&mut self, attacker: &NpcRef, defender: &NpcRef, won: bool) -> Result<()>;
}

/// Observer for callers that attach no sink
#[derive(Debug, Clone, Copy, Default)]
pub struct NullObserver;

impl FightObserver for NullObserver {
    fn on_fight(&mut self, _attacker: &NpcRef, _defender: &NpcRef, _won: bool) -> Result<()> {
        Ok(())
    }
}

/// Lets a caller keep a handle on a sink that also sits inside a composite
impl<T: FightObserver + ?Sized> FightObserver for Rc<RefCell<T>> {
    fn on_fight(&mut self, attacker: &NpcRef, defender: &NpcRef, won: bool) -> Result<()> {
        self.borrow_mut().on_fight(attacker, defender, won)
    }
}
