//! Entity-default verb behavior.
//!
//! Every entity kind carries an [`ActionTable`]: the verbs it responds
//! to and the verbs it explicitly refuses. Responses are an
//! [`ActionEffect`], either a fixed message or a handler function, so
//! dispatch is a table walk plus one `match` - no reflection, no
//! downcasting.
//!
//! Handlers never panic on a missing id; they degrade to a soft
//! message. State changes and their messages live in the same handler
//! so a refusal can never leave a half-applied transition behind.

use brasskey_foundation::ObjectId;
use brasskey_world::{
    DoorState, Entity, EntityKind, KeyPlacement, KindState, WorldState,
};

use crate::deflect::Deflections;
use crate::verb::Verb;

/// A player-facing response line.
pub type Message = String;

/// A verb handler: reads and mutates world state, returns the response.
pub type Handler = fn(&ObjectId, &mut WorldState) -> Message;

const NOT_HERE: &str = "You don't see that here.";

/// How an entity kind responds to one verb.
#[derive(Clone, Copy)]
pub enum ActionEffect {
    /// A fixed response with no state change.
    StaticMessage(&'static str),
    /// A function that may mutate world state.
    Handler(Handler),
}

/// Runs one action effect against the world.
pub fn invoke(effect: &ActionEffect, id: &ObjectId, world: &mut WorldState) -> Message {
    match effect {
        ActionEffect::StaticMessage(text) => (*text).to_string(),
        ActionEffect::Handler(handler) => handler(id, world),
    }
}

/// The default verb responses for one entity kind.
pub struct ActionTable {
    allowed: Vec<(Verb, ActionEffect)>,
    forbidden: Vec<(Verb, &'static str)>,
}

impl ActionTable {
    /// The table for a given kind.
    #[must_use]
    pub fn for_kind(kind: EntityKind) -> Self {
        match kind {
            EntityKind::Door => Self {
                allowed: vec![
                    (Verb::Open, ActionEffect::Handler(open_door)),
                    (Verb::Close, ActionEffect::Handler(close_door)),
                    (Verb::Lock, ActionEffect::Handler(lock_door)),
                    (Verb::Unlock, ActionEffect::Handler(unlock_door)),
                    (Verb::LookAt, ActionEffect::Handler(look_at_door)),
                    (
                        Verb::Push,
                        ActionEffect::StaticMessage("It rattles in its frame but stays put."),
                    ),
                    (
                        Verb::Pull,
                        ActionEffect::StaticMessage("You tug at it. It doesn't give."),
                    ),
                ],
                forbidden: vec![
                    (Verb::Take, "It's firmly fixed to its hinges."),
                    (Verb::TalkTo, "It's a door. It has nothing to say."),
                ],
            },
            EntityKind::Key => Self {
                allowed: vec![
                    (Verb::Take, ActionEffect::Handler(take_key)),
                    (Verb::LookAt, ActionEffect::Handler(look_at_key)),
                    (Verb::Use, ActionEffect::Handler(use_key_alone)),
                ],
                forbidden: vec![(Verb::Open, "There's nothing to open on a key.")],
            },
            EntityKind::Table => Self {
                allowed: vec![
                    (Verb::LookAt, ActionEffect::Handler(look_at_table)),
                    (Verb::Push, ActionEffect::Handler(move_table)),
                    (Verb::Pull, ActionEffect::Handler(move_table)),
                ],
                forbidden: vec![(Verb::Take, "Far too heavy to carry.")],
            },
            EntityKind::Box => Self {
                allowed: vec![
                    (Verb::Open, ActionEffect::Handler(open_box)),
                    (Verb::Close, ActionEffect::Handler(close_box)),
                    (Verb::LookAt, ActionEffect::Handler(look_at_box)),
                ],
                forbidden: vec![(Verb::Take, "Too bulky to carry around.")],
            },
            EntityKind::Generic => Self {
                allowed: vec![(Verb::LookAt, ActionEffect::Handler(look_at_generic))],
                forbidden: Vec::new(),
            },
        }
    }

    /// The response for an allowed verb, if any.
    #[must_use]
    pub fn allowed(&self, verb: Verb) -> Option<&ActionEffect> {
        self.allowed
            .iter()
            .find(|(candidate, _)| *candidate == verb)
            .map(|(_, effect)| effect)
    }

    /// The refusal message for a forbidden verb, if any.
    #[must_use]
    pub fn forbidden(&self, verb: Verb) -> Option<&'static str> {
        self.forbidden
            .iter()
            .find(|(candidate, _)| *candidate == verb)
            .map(|(_, message)| *message)
    }
}

/// Whether a verb would do anything to this entity right now.
///
/// Strict: a `false` here guarantees [`perform_action`] with the same
/// arguments changes no state. UIs use it to grey out verbs.
#[must_use]
pub fn can_interact(world: &WorldState, id: &ObjectId, verb: Verb) -> bool {
    let Some(entity) = world.entity(id) else {
        return false;
    };
    if !entity.interactive {
        return false;
    }
    if !entity.visible && !world.inventory().contains(id) {
        return false;
    }
    let table = ActionTable::for_kind(entity.kind());
    if table.forbidden(verb).is_some() || table.allowed(verb).is_none() {
        return false;
    }
    kind_permits(entity, verb, world)
}

fn kind_permits(entity: &Entity, verb: Verb, world: &WorldState) -> bool {
    match (&entity.state, verb) {
        (KindState::Door(door), Verb::Open) => {
            !door.open && (!door.locked || key_available(door, world))
        }
        (KindState::Door(door), Verb::Close) => door.open,
        (KindState::Door(door), Verb::Lock) => !door.open && !door.locked,
        (KindState::Door(door), Verb::Unlock) => door.locked && key_available(door, world),
        (KindState::Key(key), Verb::Take) => key.placement == KeyPlacement::OnGround,
        (KindState::Table(table), Verb::Push | Verb::Pull) => !table.has_been_moved,
        (KindState::Box(chest), Verb::Open) => !chest.open,
        (KindState::Box(chest), Verb::Close) => chest.open,
        _ => true,
    }
}

fn key_available(door: &DoorState, world: &WorldState) -> bool {
    door.key_required
        .as_ref()
        .is_none_or(|key| world.inventory().contains(key))
}

/// Resolves a single-target verb against the entity's default table.
///
/// Precedence: forbidden refusals, then allowed responses, then a
/// deflection. Invisible, non-carried entities read as absent.
pub fn perform_action(
    world: &mut WorldState,
    deflections: &mut Deflections,
    id: &ObjectId,
    verb: Verb,
) -> Message {
    let Some(entity) = world.entity(id) else {
        return NOT_HERE.to_string();
    };
    if !entity.visible && !world.inventory().contains(id) {
        return NOT_HERE.to_string();
    }
    if !entity.interactive {
        return deflections.nothing_happens().to_string();
    }
    let table = ActionTable::for_kind(entity.kind());
    if let Some(message) = table.forbidden(verb) {
        return message.to_string();
    }
    match table.allowed(verb) {
        Some(effect) => invoke(effect, id, world),
        None => deflections.nothing_happens().to_string(),
    }
}

/// Resolves `use X with Y`.
///
/// The only built-in combination is key-on-door (either operand order):
/// the right key unlocks a locked door without opening it. Everything
/// else deflects.
pub fn use_with(
    world: &mut WorldState,
    deflections: &mut Deflections,
    first: &ObjectId,
    second: &ObjectId,
) -> Message {
    let kinds = (kind_of(world, first), kind_of(world, second));
    let pair = match kinds {
        (Some(EntityKind::Door), Some(EntityKind::Key)) => Some((first, second)),
        (Some(EntityKind::Key), Some(EntityKind::Door)) => Some((second, first)),
        _ => None,
    };
    if let Some((door_id, key_id)) = pair {
        return unlock_with_key(world, door_id, key_id);
    }
    let first_name = name_or_id(world, first);
    let second_name = name_or_id(world, second);
    deflections.incompatible(&first_name, &second_name)
}

/// Resolves `give X to Y`. Nothing accepts gifts by default.
pub fn give_to(
    world: &WorldState,
    deflections: &mut Deflections,
    item: &ObjectId,
    recipient: &ObjectId,
) -> Message {
    let item_name = name_or_id(world, item);
    let recipient_name = name_or_id(world, recipient);
    deflections.refuse_gift(&item_name, &recipient_name)
}

fn unlock_with_key(world: &mut WorldState, door_id: &ObjectId, key_id: &ObjectId) -> Message {
    let Some((name, _, door)) = door_facts(world, door_id) else {
        return NOT_HERE.to_string();
    };
    let key_name = name_or_id(world, key_id);
    if !door.locked {
        return format!("The {name} isn't locked.");
    }
    if door.key_required.as_ref() == Some(key_id) {
        with_door(world, door_id, |door| door.locked = false);
        format!("You slide the {key_name} into the lock. The {name} is unlocked.")
    } else {
        format!("The {key_name} doesn't fit the lock on the {name}.")
    }
}

fn open_door(id: &ObjectId, world: &mut WorldState) -> Message {
    let Some((name, _, door)) = door_facts(world, id) else {
        return NOT_HERE.to_string();
    };
    if door.open {
        return format!("The {name} is already open.");
    }
    if door.locked {
        return match &door.key_required {
            Some(key) if world.inventory().contains(key) => {
                let key_name = name_or_id(world, key);
                with_door(world, id, |door| door.locked = false);
                format!("You unlock the {name} with the {key_name}.")
            }
            Some(_) => format!("The {name} is locked."),
            None => {
                with_door(world, id, |door| door.locked = false);
                format!("The lock on the {name} clicks open.")
            }
        };
    }
    with_door(world, id, |door| door.open = true);
    format!("The {name} swings open.")
}

fn close_door(id: &ObjectId, world: &mut WorldState) -> Message {
    let Some((name, _, door)) = door_facts(world, id) else {
        return NOT_HERE.to_string();
    };
    if !door.open {
        return format!("The {name} is already closed.");
    }
    with_door(world, id, |door| door.open = false);
    format!("You close the {name}.")
}

fn lock_door(id: &ObjectId, world: &mut WorldState) -> Message {
    let Some((name, _, door)) = door_facts(world, id) else {
        return NOT_HERE.to_string();
    };
    if door.open {
        return format!("You can't lock the {name} while it stands open.");
    }
    if door.locked {
        return format!("The {name} is already locked.");
    }
    with_door(world, id, |door| door.locked = true);
    format!("You lock the {name}.")
}

fn unlock_door(id: &ObjectId, world: &mut WorldState) -> Message {
    let Some((name, _, door)) = door_facts(world, id) else {
        return NOT_HERE.to_string();
    };
    if !door.locked {
        return format!("The {name} isn't locked.");
    }
    if let Some(key) = &door.key_required {
        if !world.inventory().contains(key) {
            return format!("You need the right key to unlock the {name}.");
        }
    }
    with_door(world, id, |door| door.locked = false);
    format!("You unlock the {name}.")
}

fn look_at_door(id: &ObjectId, world: &mut WorldState) -> Message {
    let Some((name, description, door)) = door_facts(world, id) else {
        return NOT_HERE.to_string();
    };
    let state = if door.open {
        "open"
    } else if door.locked {
        "locked"
    } else {
        "closed"
    };
    with_detail(format!("The {name} is {state}."), &description)
}

fn take_key(id: &ObjectId, world: &mut WorldState) -> Message {
    let Some(entity) = world.entity(id) else {
        return NOT_HERE.to_string();
    };
    let name = entity.name.clone();
    if world.inventory().contains(id) {
        return format!("You already have the {name}.");
    }
    if world.take_into_inventory(id) {
        format!("You pick up the {name}.")
    } else {
        NOT_HERE.to_string()
    }
}

fn look_at_key(id: &ObjectId, world: &mut WorldState) -> Message {
    let Some(entity) = world.entity(id) else {
        return NOT_HERE.to_string();
    };
    let name = &entity.name;
    let base = match entity.key_state().map(|key| key.placement) {
        Some(KeyPlacement::InInventory) => format!("The {name} sits in your pocket."),
        _ => format!("A {name} lies here."),
    };
    with_detail(base, &entity.description)
}

fn use_key_alone(id: &ObjectId, world: &mut WorldState) -> Message {
    let Some(entity) = world.entity(id) else {
        return NOT_HERE.to_string();
    };
    format!("You turn the {} in the air. It needs a lock.", entity.name)
}

fn look_at_table(id: &ObjectId, world: &mut WorldState) -> Message {
    let Some(entity) = world.entity(id) else {
        return NOT_HERE.to_string();
    };
    let Some(table) = entity.table_state() else {
        return NOT_HERE.to_string();
    };
    let name = &entity.name;
    let on_top: Vec<String> = table
        .items_on_top
        .iter()
        .filter_map(|item| world.entity(item))
        .filter(|item| item.visible)
        .map(|item| item.name.clone())
        .collect();
    let base = if on_top.is_empty() {
        format!("A {name}.")
    } else {
        format!("A {name} with {} on it.", on_top.join(", "))
    };
    with_detail(base, &entity.description)
}

fn move_table(id: &ObjectId, world: &mut WorldState) -> Message {
    let Some(entity) = world.entity(id) else {
        return NOT_HERE.to_string();
    };
    let Some(table) = entity.table_state() else {
        return NOT_HERE.to_string();
    };
    let name = entity.name.clone();
    if table.has_been_moved {
        return format!("The {name} doesn't move any further.");
    }
    let underneath = table.items_underneath.clone();
    if let Some(table) = world.entity_mut(id).and_then(Entity::table_state_mut) {
        table.has_been_moved = true;
    }
    let mut revealed = Vec::new();
    for item in &underneath {
        if let Some(entity) = world.entity_mut(item) {
            entity.visible = true;
            revealed.push(entity.name.clone());
        }
    }
    if revealed.is_empty() {
        format!("You shift the {name} a little. Nothing was under it.")
    } else {
        format!(
            "You heave the {name} aside, revealing {}!",
            revealed.join(", ")
        )
    }
}

fn open_box(id: &ObjectId, world: &mut WorldState) -> Message {
    let Some(entity) = world.entity(id) else {
        return NOT_HERE.to_string();
    };
    let Some(chest) = entity.box_state() else {
        return NOT_HERE.to_string();
    };
    let name = entity.name.clone();
    if chest.open {
        return format!("The {name} is already open.");
    }
    let contents = chest.contents.clone();
    if let Some(chest) = world.entity_mut(id).and_then(Entity::box_state_mut) {
        chest.open = true;
    }
    if contents.is_empty() {
        format!("You open the {name}. It is empty.")
    } else {
        format!("You open the {name}. Inside: {}.", contents.join(", "))
    }
}

fn close_box(id: &ObjectId, world: &mut WorldState) -> Message {
    let Some(entity) = world.entity(id) else {
        return NOT_HERE.to_string();
    };
    let Some(chest) = entity.box_state() else {
        return NOT_HERE.to_string();
    };
    let name = entity.name.clone();
    if !chest.open {
        return format!("The {name} is already closed.");
    }
    if let Some(chest) = world.entity_mut(id).and_then(Entity::box_state_mut) {
        chest.open = false;
    }
    format!("You close the {name}.")
}

fn look_at_box(id: &ObjectId, world: &mut WorldState) -> Message {
    let Some(entity) = world.entity(id) else {
        return NOT_HERE.to_string();
    };
    let Some(chest) = entity.box_state() else {
        return NOT_HERE.to_string();
    };
    let name = &entity.name;
    if chest.open {
        if chest.contents.is_empty() {
            format!("An open, empty {name}.")
        } else {
            format!("An open {name} holding {}.", chest.contents.join(", "))
        }
    } else {
        with_detail(format!("A closed {name}."), &entity.description)
    }
}

fn look_at_generic(id: &ObjectId, world: &mut WorldState) -> Message {
    let Some(entity) = world.entity(id) else {
        return NOT_HERE.to_string();
    };
    if entity.description.is_empty() {
        format!("Nothing special about the {}.", entity.name)
    } else {
        entity.description.clone()
    }
}

fn door_facts(world: &WorldState, id: &ObjectId) -> Option<(String, String, DoorState)> {
    let entity = world.entity(id)?;
    let door = entity.door_state()?.clone();
    Some((entity.name.clone(), entity.description.clone(), door))
}

fn with_door<F: FnOnce(&mut DoorState)>(world: &mut WorldState, id: &ObjectId, mutate: F) {
    if let Some(door) = world.entity_mut(id).and_then(Entity::door_state_mut) {
        mutate(door);
    }
}

fn kind_of(world: &WorldState, id: &ObjectId) -> Option<EntityKind> {
    world.entity(id).map(Entity::kind)
}

/// Display name from the scene or the inventory, falling back to the id.
pub(crate) fn name_or_id(world: &WorldState, id: &ObjectId) -> String {
    if let Some(entity) = world.entity(id) {
        return entity.name.clone();
    }
    world
        .inventory()
        .items()
        .iter()
        .find(|item| &item.id == id)
        .map_or_else(|| id.as_str().to_string(), |item| item.name.clone())
}

fn with_detail(base: String, description: &str) -> String {
    if description.is_empty() {
        base
    } else {
        format!("{base} {description}")
    }
}
