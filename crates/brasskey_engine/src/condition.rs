//! Evaluating rule preconditions against live world state.

use brasskey_script::Condition;
use brasskey_world::WorldState;

/// Evaluates one condition against the active scene and the inventory.
///
/// Missing references degrade rather than error:
/// - equality against a missing entity or field is `false`;
/// - inequality against a missing entity or field is `true` (the field
///   certainly does not hold the rejected value);
/// - inventory membership of an unknown id is `false`.
#[must_use]
pub fn evaluate_condition(condition: &Condition, world: &WorldState) -> bool {
    match condition {
        Condition::InInventory(id) => world.inventory().contains(id),
        Condition::FieldEquals {
            object,
            field,
            value,
        } => world
            .entity(object)
            .and_then(|entity| entity.field(field))
            .is_some_and(|live| live == *value),
        Condition::FieldNotEquals {
            object,
            field,
            value,
        } => world
            .entity(object)
            .and_then(|entity| entity.field(field))
            .is_none_or(|live| live != *value),
        Condition::Visited(scene) => world.visited(scene),
    }
}
