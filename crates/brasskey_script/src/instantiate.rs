//! Turning a parsed definition into live world state.

use brasskey_foundation::Result;
use brasskey_world::{
    BoxState, DoorState, Entity, EntityKind, KeyState, KindState, Scene, TableState, WorldState,
};

use crate::ast::{ObjectDecl, WorldDefinition};

impl WorldDefinition {
    /// Instantiates the declared scenes and objects into a fresh
    /// [`WorldState`] positioned at the first declared scene.
    ///
    /// Objects named by another object's `hiding=` property start
    /// invisible regardless of their own `hidden` flag; they are
    /// concealed until a Push/Pull-style effect reveals them.
    ///
    /// # Errors
    ///
    /// Returns an error if the definition declares no scenes.
    pub fn instantiate(&self) -> Result<WorldState> {
        let mut scenes = Vec::with_capacity(self.scenes.len());
        for decl in &self.scenes {
            let mut scene = Scene::new(decl.id.clone(), decl.name.clone());
            scene.background.clone_from(&decl.background);
            for object in &decl.objects {
                scene.insert(build_entity(object));
            }
            // Conceal everything listed beneath another object.
            let concealed: Vec<_> = decl
                .objects
                .iter()
                .flat_map(|object| object.hiding.iter().cloned())
                .collect();
            for id in concealed {
                if let Some(entity) = scene.entity_mut(&id) {
                    entity.visible = false;
                }
            }
            scenes.push(scene);
        }

        let start = self
            .start_scene()
            .ok_or_else(brasskey_foundation::Error::empty_definition)?;
        WorldState::new(scenes, start)
    }
}

fn build_entity(decl: &ObjectDecl) -> Entity {
    let state = match decl.kind {
        EntityKind::Door => KindState::Door(DoorState {
            open: false,
            locked: decl.locked,
            key_required: decl.key_required.clone(),
        }),
        EntityKind::Key => KindState::Key(KeyState::default()),
        EntityKind::Table => KindState::Table(TableState {
            items_on_top: Vec::new(),
            items_underneath: decl.hiding.clone(),
            has_been_moved: false,
        }),
        EntityKind::Box => KindState::Box(BoxState {
            open: false,
            contents: decl.contents.clone(),
        }),
        EntityKind::Generic => KindState::Generic,
    };

    let mut entity = Entity::new(decl.id.clone(), decl.name.clone(), state).at(decl.position);
    if decl.hidden {
        entity.visible = false;
    }
    if let Some(description) = &decl.description {
        entity.description.clone_from(description);
    }
    for (field, value) in &decl.extra {
        entity.set_field(field, value.clone());
    }
    entity
}
