//! NPC Arena - proximity combat between Toads, Dragons and Knights

pub mod combat;
pub mod core;
pub mod entity;
pub mod observer;
pub mod simulation;
pub mod world;
