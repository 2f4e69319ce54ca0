//! Read-only snapshot views for the rendering boundary.
//!
//! The UI layer never touches entities directly; it renders from these
//! plain-data views taken after each resolved command.

use serde::{Deserialize, Serialize};

use brasskey_foundation::{ObjectId, Position, SceneId};

use crate::state::WorldState;

/// What the renderer needs to draw one entity.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntityView {
    /// Entity id, for hit-testing callbacks.
    pub id: ObjectId,
    /// Display name.
    pub name: String,
    /// Scene placement.
    pub position: Position,
    /// Whether to draw the entity at all.
    pub visible: bool,
}

/// The active scene, flattened for rendering.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SceneView {
    /// Scene id.
    pub id: SceneId,
    /// Display name.
    pub name: String,
    /// Background reference, if any.
    pub background: Option<String>,
    /// Entities in declaration order, hidden ones included.
    pub entities: Vec<EntityView>,
}

/// One inventory slot.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemView {
    /// Entity id.
    pub id: ObjectId,
    /// Display name.
    pub name: String,
}

/// The inventory, flattened for rendering.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InventoryView {
    /// Items in pickup order.
    pub items: Vec<ItemView>,
}

impl WorldState {
    /// Snapshot of the active scene.
    #[must_use]
    pub fn scene_view(&self) -> SceneView {
        let scene = self.current_scene();
        SceneView {
            id: scene.id.clone(),
            name: scene.name.clone(),
            background: scene.background.clone(),
            entities: scene
                .entities()
                .iter()
                .map(|entity| EntityView {
                    id: entity.id.clone(),
                    name: entity.name.clone(),
                    position: entity.position,
                    visible: entity.visible,
                })
                .collect(),
        }
    }

    /// Snapshot of the inventory.
    #[must_use]
    pub fn inventory_view(&self) -> InventoryView {
        InventoryView {
            items: self
                .inventory()
                .items()
                .iter()
                .map(|item| ItemView {
                    id: item.id.clone(),
                    name: item.name.clone(),
                })
                .collect(),
        }
    }
}
