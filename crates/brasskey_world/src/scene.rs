//! Scenes: owned collections of entities.

use serde::{Deserialize, Serialize};

use brasskey_foundation::{ObjectId, SceneId};

use crate::entity::Entity;

/// A scene with its entities in declaration order.
///
/// Scenes are small (a handful of clickable objects), so entities live in
/// a plain ordered vector and lookups scan it. Relational references
/// between entities (a door's required key, a table's hidden items) are
/// looked up defensively; a dangling id is "not found", never a panic.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Scene {
    /// Scene identifier.
    pub id: SceneId,
    /// Display name.
    pub name: String,
    /// Background asset reference (presentational).
    pub background: Option<String>,
    entities: Vec<Entity>,
}

impl Scene {
    /// Creates an empty scene.
    pub fn new(id: impl Into<SceneId>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            background: None,
            entities: Vec::new(),
        }
    }

    /// Sets the background reference.
    #[must_use]
    pub fn with_background(mut self, background: impl Into<String>) -> Self {
        self.background = Some(background.into());
        self
    }

    /// Adds an entity, replacing any existing entity with the same id.
    pub fn insert(&mut self, entity: Entity) {
        if let Some(existing) = self.entities.iter_mut().find(|e| e.id == entity.id) {
            *existing = entity;
        } else {
            self.entities.push(entity);
        }
    }

    /// Adds an entity, builder style.
    #[must_use]
    pub fn with_entity(mut self, entity: Entity) -> Self {
        self.insert(entity);
        self
    }

    /// Looks up an entity by id.
    #[must_use]
    pub fn entity(&self, id: &ObjectId) -> Option<&Entity> {
        self.entities.iter().find(|e| &e.id == id)
    }

    /// Looks up an entity by id, mutably.
    pub fn entity_mut(&mut self, id: &ObjectId) -> Option<&mut Entity> {
        self.entities.iter_mut().find(|e| &e.id == id)
    }

    /// Returns true if an entity with this id exists here.
    #[must_use]
    pub fn contains(&self, id: &ObjectId) -> bool {
        self.entity(id).is_some()
    }

    /// All entities in declaration order.
    #[must_use]
    pub fn entities(&self) -> &[Entity] {
        &self.entities
    }

    /// Number of entities in this scene.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entities.len()
    }

    /// Returns true if the scene has no entities.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }
}
