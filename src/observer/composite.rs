//! Fan-out to several sinks

use crate::core::error::Result;
use crate::entity::NpcRef;
use crate::observer::FightObserver;

/// Forwards each fight to every registered sink in registration order.
///
/// A failing sink does not stop the others. Each failure is logged; the first
/// one is returned once all sinks have been called.
#[derive(Default)]
pub struct CompositeObserver {
    observers: Vec<Box<dyn FightObserver>>,
}

impl CompositeObserver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, observer: impl FightObserver + 'static) {
        self.observers.push(Box::new(observer));
    }

    pub fn with(mut self, observer: impl FightObserver + 'static) -> Self {
        self.add(observer);
        self
    }

    pub fn len(&self) -> usize {
        self.observers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.observers.is_empty()
    }
}

impl FightObserver for CompositeObserver {
    fn on_fight(&mut self, attacker: &NpcRef, defender: &NpcRef, won: bool) -> Result<()> {
        let mut first_error = None;

        for (index, observer) in self.observers.iter_mut().enumerate() {
            if let Err(e) = observer.on_fight(attacker, defender, won) {
                tracing::warn!("Fight sink #{} failed: {}", index, e);
                first_error.get_or_insert(e);
            }
        }

        match first_error {
            Some(e) => Err(e),
            None => Ok(()),
        }
    }
}

impl std::fmt::Debug for CompositeObserver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CompositeObserver")
            .field("observers", &self.observers.len())
            .finish()
    }
}
