//! Applying rule effects to world state.

use brasskey_foundation::{Diagnostic, Diagnostics};
use brasskey_script::Effect;
use brasskey_world::WorldState;

/// Whether the session continues after a command resolves.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SessionStatus {
    /// The session accepts further commands.
    #[default]
    Running,
    /// A `WIN_GAME` effect fired; the session is over.
    Won,
}

/// Applies effects strictly in list order.
///
/// Entity lookups always go through the scene that is active *at that
/// point in the list*, so a `CHANGE_SCENE` mid-list re-targets every
/// effect after it to the new scene. Unknown ids become diagnostics and
/// the remaining effects still run. `WIN_GAME` is terminal: effects
/// listed after it never run.
pub fn apply_effects(
    effects: &[Effect],
    world: &mut WorldState,
    diagnostics: &mut Diagnostics,
) -> SessionStatus {
    for effect in effects {
        match effect {
            Effect::Show(id) => set_visible(world, id, true, diagnostics),
            Effect::Hide(id) => set_visible(world, id, false, diagnostics),
            Effect::AddToInventory(id) => {
                if world.entity(id).is_some() {
                    world.take_into_inventory(id);
                } else {
                    diagnostics.unknown_object(id.clone());
                }
            }
            Effect::RemoveFromInventory(id) => {
                if !world.remove_from_inventory(id) {
                    diagnostics.unknown_object(id.clone());
                }
            }
            Effect::Set {
                object,
                field,
                value,
            } => match world.entity_mut(object) {
                Some(entity) => {
                    if !entity.set_field(field, value.clone()) {
                        diagnostics.push(Diagnostic::BadFieldWrite {
                            id: object.clone(),
                            field: field.clone(),
                        });
                    }
                }
                None => diagnostics.unknown_object(object.clone()),
            },
            Effect::SetGameWon => world.mark_won(),
            Effect::ChangeScene(id) => {
                if !world.change_scene(id) {
                    diagnostics.unknown_scene(id.clone());
                }
            }
            Effect::WinGame => {
                world.mark_won();
                return SessionStatus::Won;
            }
        }
    }
    SessionStatus::Running
}

fn set_visible(
    world: &mut WorldState,
    id: &brasskey_foundation::ObjectId,
    visible: bool,
    diagnostics: &mut Diagnostics,
) {
    match world.entity_mut(id) {
        Some(entity) => entity.visible = visible,
        None => diagnostics.unknown_object(id.clone()),
    }
}
