//! Interactive entities with typed per-kind state.
//!
//! Every object a player can click is an [`Entity`]. The kind-specific
//! state lives in a tagged [`KindState`] union so dispatch is a `match`,
//! never reflection over type names.
//!
//! Entities also expose a dynamic field surface ([`Entity::field`] /
//! [`Entity::set_field`]) backing the script grammar's `SET <id>.<field>`
//! effects and `<id>.<field> = <literal>` conditions. Unknown field names
//! are tolerated and stored as free-form values, matching the fail-soft
//! contract.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use brasskey_foundation::{ObjectId, Position, Value};

/// The kind tag of an entity.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EntityKind {
    /// A door that can open, close, lock, and unlock.
    Door,
    /// A key that can be picked up and used on doors.
    Key,
    /// A table that may hide items underneath.
    Table,
    /// A container with openable contents.
    Box,
    /// Anything else; only generic responses apply.
    Generic,
}

impl EntityKind {
    /// Returns the script token for this kind.
    #[must_use]
    pub const fn token(self) -> &'static str {
        match self {
            Self::Door => "door",
            Self::Key => "key",
            Self::Table => "table",
            Self::Box => "box",
            Self::Generic => "generic",
        }
    }

    /// Parses a script kind token.
    #[must_use]
    pub fn parse(token: &str) -> Option<Self> {
        match token.to_ascii_lowercase().as_str() {
            "door" => Some(Self::Door),
            "key" => Some(Self::Key),
            "table" => Some(Self::Table),
            "box" | "chest" => Some(Self::Box),
            "generic" => Some(Self::Generic),
            _ => None,
        }
    }
}

/// Door state machine: closed-locked, closed-unlocked, or open.
///
/// `open` and `locked` are tracked independently, but no verb transition
/// ever leaves both true at once.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DoorState {
    /// Whether the door stands open.
    pub open: bool,
    /// Whether the door is locked.
    pub locked: bool,
    /// The key object required to unlock, if any.
    pub key_required: Option<ObjectId>,
}

/// Where a key currently is.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum KeyPlacement {
    /// Lying in the scene, available to take.
    #[default]
    OnGround,
    /// Carried by the player; taking it again is refused.
    InInventory,
}

/// Key state.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyState {
    /// Current placement.
    pub placement: KeyPlacement,
}

/// Box state: a simple open/close toggle over fixed contents.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoxState {
    /// Whether the lid is open.
    pub open: bool,
    /// Display names of whatever is inside.
    pub contents: Vec<String>,
}

/// Table state.
///
/// The first Push/Pull reveals `items_underneath` and latches
/// `has_been_moved`; after that the table refuses to budge.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableState {
    /// Ids of objects sitting on top (listed by look-at while visible).
    pub items_on_top: Vec<ObjectId>,
    /// Ids of objects concealed underneath until the table is moved.
    pub items_underneath: Vec<ObjectId>,
    /// Whether the table has already been pushed or pulled.
    pub has_been_moved: bool,
}

/// Kind-specific state, tagged by entity kind.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum KindState {
    /// Door state.
    Door(DoorState),
    /// Key state.
    Key(KeyState),
    /// Table state.
    Table(TableState),
    /// Box state.
    Box(BoxState),
    /// No kind-specific state.
    Generic,
}

impl KindState {
    /// Returns the kind tag for this state.
    #[must_use]
    pub const fn kind(&self) -> EntityKind {
        match self {
            Self::Door(_) => EntityKind::Door,
            Self::Key(_) => EntityKind::Key,
            Self::Table(_) => EntityKind::Table,
            Self::Box(_) => EntityKind::Box,
            Self::Generic => EntityKind::Generic,
        }
    }
}

/// An interactive in-scene or in-inventory object.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entity {
    /// Stable identity; unique across all entities in a session.
    pub id: ObjectId,
    /// Display name.
    pub name: String,
    /// Scene placement (presentational).
    pub position: Position,
    /// Whether the entity is drawn and clickable in its scene.
    pub visible: bool,
    /// Whether the entity responds to verbs at all.
    pub interactive: bool,
    /// Free-form description used by look-at messages.
    pub description: String,
    /// Kind-specific state.
    pub state: KindState,
    /// Free-form fields written by `SET` effects on unknown names.
    extra: HashMap<String, Value>,
}

impl Entity {
    /// Creates a visible, interactive entity with the given kind state.
    pub fn new(id: impl Into<ObjectId>, name: impl Into<String>, state: KindState) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            position: Position::default(),
            visible: true,
            interactive: true,
            description: String::new(),
            state,
            extra: HashMap::new(),
        }
    }

    /// Creates a closed, unlocked door.
    pub fn door(id: impl Into<ObjectId>, name: impl Into<String>) -> Self {
        Self::new(id, name, KindState::Door(DoorState::default()))
    }

    /// Creates a key lying on the ground.
    pub fn key(id: impl Into<ObjectId>, name: impl Into<String>) -> Self {
        Self::new(id, name, KindState::Key(KeyState::default()))
    }

    /// Creates an unmoved table.
    pub fn table(id: impl Into<ObjectId>, name: impl Into<String>) -> Self {
        Self::new(id, name, KindState::Table(TableState::default()))
    }

    /// Creates a generic entity.
    pub fn generic(id: impl Into<ObjectId>, name: impl Into<String>) -> Self {
        Self::new(id, name, KindState::Generic)
    }

    /// Sets the position.
    #[must_use]
    pub const fn at(mut self, position: Position) -> Self {
        self.position = position;
        self
    }

    /// Sets the description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Marks the entity initially hidden.
    #[must_use]
    pub const fn hidden(mut self) -> Self {
        self.visible = false;
        self
    }

    /// Returns the kind tag.
    #[must_use]
    pub const fn kind(&self) -> EntityKind {
        self.state.kind()
    }

    /// Returns door state, if this is a door.
    #[must_use]
    pub const fn door_state(&self) -> Option<&DoorState> {
        match &self.state {
            KindState::Door(s) => Some(s),
            _ => None,
        }
    }

    /// Returns mutable door state, if this is a door.
    pub const fn door_state_mut(&mut self) -> Option<&mut DoorState> {
        match &mut self.state {
            KindState::Door(s) => Some(s),
            _ => None,
        }
    }

    /// Returns key state, if this is a key.
    #[must_use]
    pub const fn key_state(&self) -> Option<&KeyState> {
        match &self.state {
            KindState::Key(s) => Some(s),
            _ => None,
        }
    }

    /// Returns mutable key state, if this is a key.
    pub const fn key_state_mut(&mut self) -> Option<&mut KeyState> {
        match &mut self.state {
            KindState::Key(s) => Some(s),
            _ => None,
        }
    }

    /// Returns table state, if this is a table.
    #[must_use]
    pub const fn table_state(&self) -> Option<&TableState> {
        match &self.state {
            KindState::Table(s) => Some(s),
            _ => None,
        }
    }

    /// Returns mutable table state, if this is a table.
    pub const fn table_state_mut(&mut self) -> Option<&mut TableState> {
        match &mut self.state {
            KindState::Table(s) => Some(s),
            _ => None,
        }
    }

    /// Returns box state, if this is a box.
    #[must_use]
    pub const fn box_state(&self) -> Option<&BoxState> {
        match &self.state {
            KindState::Box(s) => Some(s),
            _ => None,
        }
    }

    /// Returns mutable box state, if this is a box.
    pub const fn box_state_mut(&mut self) -> Option<&mut BoxState> {
        match &mut self.state {
            KindState::Box(s) => Some(s),
            _ => None,
        }
    }

    /// Reads a field by its script name.
    ///
    /// Typed fields come first (`visible`, `open`, `locked`, ...); names
    /// nothing matches fall back to the free-form store. Returns `None`
    /// for fields this entity has never carried, which condition
    /// evaluation treats per the vacuous-truth rules.
    #[must_use]
    pub fn field(&self, field: &str) -> Option<Value> {
        match field {
            "name" => return Some(Value::Text(self.name.clone())),
            "description" => return Some(Value::Text(self.description.clone())),
            "visible" => return Some(Value::Bool(self.visible)),
            "interactive" => return Some(Value::Bool(self.interactive)),
            _ => {}
        }
        match &self.state {
            KindState::Door(door) => match field {
                "open" => return Some(Value::Bool(door.open)),
                "locked" => return Some(Value::Bool(door.locked)),
                "key_required" => {
                    return door
                        .key_required
                        .as_ref()
                        .map(|id| Value::Text(id.as_str().to_string()));
                }
                "state" => {
                    let state = if door.open { "open" } else { "closed" };
                    return Some(Value::Text(state.to_string()));
                }
                _ => {}
            },
            KindState::Key(key) => {
                if field == "state" {
                    let state = match key.placement {
                        KeyPlacement::OnGround => "on_ground",
                        KeyPlacement::InInventory => "in_inventory",
                    };
                    return Some(Value::Text(state.to_string()));
                }
            }
            KindState::Table(table) => {
                if field == "moved" || field == "has_been_moved" {
                    return Some(Value::Bool(table.has_been_moved));
                }
            }
            KindState::Box(chest) => {
                if field == "open" {
                    return Some(Value::Bool(chest.open));
                }
            }
            KindState::Generic => {}
        }
        self.extra.get(field).cloned()
    }

    /// Writes a field by its script name.
    ///
    /// Returns `false` when the field exists but the value has the wrong
    /// type (the write is dropped). Unknown names are stored free-form
    /// and succeed.
    pub fn set_field(&mut self, field: &str, value: Value) -> bool {
        match field {
            "name" => {
                return match value {
                    Value::Text(s) => {
                        self.name = s;
                        true
                    }
                    _ => false,
                };
            }
            "description" => {
                return match value {
                    Value::Text(s) => {
                        self.description = s;
                        true
                    }
                    _ => false,
                };
            }
            "visible" => {
                return match value.as_bool() {
                    Some(b) => {
                        self.visible = b;
                        true
                    }
                    None => false,
                };
            }
            "interactive" => {
                return match value.as_bool() {
                    Some(b) => {
                        self.interactive = b;
                        true
                    }
                    None => false,
                };
            }
            _ => {}
        }
        match &mut self.state {
            KindState::Door(door) => match field {
                "open" => {
                    return match value.as_bool() {
                        Some(b) => {
                            door.open = b;
                            true
                        }
                        None => false,
                    };
                }
                "locked" => {
                    return match value.as_bool() {
                        Some(b) => {
                            door.locked = b;
                            true
                        }
                        None => false,
                    };
                }
                "key_required" => {
                    return match value {
                        Value::Text(s) => {
                            door.key_required = Some(ObjectId::new(s));
                            true
                        }
                        _ => false,
                    };
                }
                _ => {}
            },
            KindState::Table(table) => {
                if field == "moved" || field == "has_been_moved" {
                    return match value.as_bool() {
                        Some(b) => {
                            table.has_been_moved = b;
                            true
                        }
                        None => false,
                    };
                }
            }
            KindState::Box(chest) => {
                if field == "open" {
                    return match value.as_bool() {
                        Some(b) => {
                            chest.open = b;
                            true
                        }
                        None => false,
                    };
                }
            }
            KindState::Key(_) | KindState::Generic => {}
        }
        self.extra.insert(field.to_string(), value);
        true
    }
}
