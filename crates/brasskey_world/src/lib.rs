//! Entity model and world state for brasskey.
//!
//! This crate provides:
//! - [`Entity`] / [`EntityKind`] - Interactive objects with typed per-kind state
//! - [`Scene`] - An owned collection of entities
//! - [`Inventory`] - The player's ordered item list
//! - [`WorldState`] - The canonical mutable "what is true right now"
//! - Read-only snapshot views for the rendering boundary

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

mod entity;
mod inventory;
mod scene;
mod snapshot;
mod state;

pub use entity::{BoxState, DoorState, Entity, EntityKind, KeyPlacement, KeyState, KindState, TableState};
pub use inventory::{Inventory, InventoryItem};
pub use scene::Scene;
pub use snapshot::{EntityView, InventoryView, ItemView, SceneView};
pub use state::{PendingUse, WorldState};
