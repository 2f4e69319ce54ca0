//! The canonical mutable session state.
//!
//! Exactly one `WorldState` exists per session, constructed at session
//! start and threaded as the single mutable reference through action
//! resolution, rule evaluation, and effect application. There is no
//! global registry; everything the other layers read or mutate lives
//! here.

use brasskey_foundation::{Error, ObjectId, Result, SceneId};

use crate::entity::{Entity, KeyPlacement};
use crate::inventory::Inventory;
use crate::scene::Scene;

/// A two-operand verb waiting for its second target.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PendingUse {
    /// The verb token that started the composition (`use`, `give`).
    pub verb: String,
    /// The first selected object.
    pub first: ObjectId,
}

/// Owns the scenes, the inventory, and the session-global flags.
#[derive(Debug)]
pub struct WorldState {
    scenes: Vec<Scene>,
    current: usize,
    inventory: Inventory,
    pending: Option<PendingUse>,
    game_won: bool,
    visited: Vec<SceneId>,
}

impl WorldState {
    /// Creates a world from scenes, starting in `start`.
    ///
    /// # Errors
    ///
    /// Returns [`brasskey_foundation::ErrorKind::EmptyDefinition`] if no
    /// scenes are given, or `SceneNotFound` if `start` is not among them.
    pub fn new(scenes: Vec<Scene>, start: &SceneId) -> Result<Self> {
        if scenes.is_empty() {
            return Err(Error::empty_definition());
        }
        let current = scenes
            .iter()
            .position(|scene| &scene.id == start)
            .ok_or_else(|| Error::scene_not_found(start.clone()))?;
        let visited = vec![start.clone()];
        Ok(Self {
            scenes,
            current,
            inventory: Inventory::new(),
            pending: None,
            game_won: false,
            visited,
        })
    }

    /// The active scene.
    #[must_use]
    pub fn current_scene(&self) -> &Scene {
        &self.scenes[self.current]
    }

    /// The active scene, mutably.
    pub fn current_scene_mut(&mut self) -> &mut Scene {
        &mut self.scenes[self.current]
    }

    /// The active scene's id.
    #[must_use]
    pub fn current_scene_id(&self) -> &SceneId {
        &self.scenes[self.current].id
    }

    /// Looks up any scene by id.
    #[must_use]
    pub fn scene(&self, id: &SceneId) -> Option<&Scene> {
        self.scenes.iter().find(|scene| &scene.id == id)
    }

    /// Looks up any scene by id, mutably.
    pub fn scene_mut(&mut self, id: &SceneId) -> Option<&mut Scene> {
        self.scenes.iter_mut().find(|scene| &scene.id == id)
    }

    /// Switches the active scene; marks the destination visited.
    ///
    /// Returns `false` (and changes nothing) if the scene id is unknown.
    pub fn change_scene(&mut self, id: &SceneId) -> bool {
        let Some(index) = self.scenes.iter().position(|scene| &scene.id == id) else {
            return false;
        };
        self.current = index;
        if !self.visited.contains(id) {
            self.visited.push(id.clone());
        }
        true
    }

    /// Returns true if the scene has ever been active.
    #[must_use]
    pub fn visited(&self, id: &SceneId) -> bool {
        self.visited.contains(id)
    }

    /// Looks up an entity in the active scene.
    ///
    /// Carried items resolve from whichever scene holds them: the
    /// inventory travels with the player, so a key picked up in one
    /// scene stays reachable after a scene change.
    #[must_use]
    pub fn entity(&self, id: &ObjectId) -> Option<&Entity> {
        if let Some(entity) = self.current_scene().entity(id) {
            return Some(entity);
        }
        if !self.inventory.contains(id) {
            return None;
        }
        self.scenes.iter().find_map(|scene| scene.entity(id))
    }

    /// Looks up an entity in the active scene, mutably. Carried items
    /// resolve from whichever scene holds them, as in [`Self::entity`].
    pub fn entity_mut(&mut self, id: &ObjectId) -> Option<&mut Entity> {
        if self.current_scene().contains(id) || !self.inventory.contains(id) {
            return self.current_scene_mut().entity_mut(id);
        }
        self.scenes.iter_mut().find_map(|scene| scene.entity_mut(id))
    }

    /// The player's inventory.
    #[must_use]
    pub fn inventory(&self) -> &Inventory {
        &self.inventory
    }

    /// The player's inventory, mutably.
    pub fn inventory_mut(&mut self) -> &mut Inventory {
        &mut self.inventory
    }

    /// Moves an entity from the active scene into the inventory.
    ///
    /// The entity stays in the scene's collection but becomes invisible;
    /// a key's placement flips to in-inventory. Returns `false` if the
    /// id is unknown here or already carried, with no state change.
    pub fn take_into_inventory(&mut self, id: &ObjectId) -> bool {
        if self.inventory.contains(id) {
            return false;
        }
        let Some(entity) = self.current_scene_mut().entity_mut(id) else {
            return false;
        };
        entity.visible = false;
        if let Some(key) = entity.key_state_mut() {
            key.placement = KeyPlacement::InInventory;
        }
        let name = entity.name.clone();
        self.inventory.add(id.clone(), name)
    }

    /// Removes an item from the inventory (consumed or given away).
    pub fn remove_from_inventory(&mut self, id: &ObjectId) -> bool {
        self.inventory.remove(id)
    }

    /// The pending first half of a two-operand verb, if any.
    #[must_use]
    pub fn pending(&self) -> Option<&PendingUse> {
        self.pending.as_ref()
    }

    /// Records the first half of a two-operand verb.
    pub fn set_pending(&mut self, verb: impl Into<String>, first: ObjectId) {
        self.pending = Some(PendingUse {
            verb: verb.into(),
            first,
        });
    }

    /// Clears any pending selection; returns what was pending.
    pub fn clear_pending(&mut self) -> Option<PendingUse> {
        self.pending.take()
    }

    /// Whether the session has been won.
    #[must_use]
    pub fn game_won(&self) -> bool {
        self.game_won
    }

    /// Raises the session win flag. Never lowered within a session.
    pub fn mark_won(&mut self) {
        self.game_won = true;
    }
}
