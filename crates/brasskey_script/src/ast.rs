//! Typed representation of a parsed script.

use std::fmt;

use serde::{Deserialize, Serialize};

use brasskey_foundation::{ObjectId, Position, SceneId, Value};
use brasskey_world::EntityKind;

/// Everything a script declares: scenes with their objects, plus the
/// scene-scoped verb rules and forbidden entries.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct WorldDefinition {
    /// Scenes in declaration order; the first is the starting scene.
    pub scenes: Vec<SceneDecl>,
    /// Verb rules in declaration order (order is match precedence).
    pub rules: Vec<Rule>,
    /// Scripted rejections consulted before entity defaults.
    pub forbidden: Vec<ForbiddenDecl>,
}

impl WorldDefinition {
    /// The starting scene id (first declared), if any scene exists.
    #[must_use]
    pub fn start_scene(&self) -> Option<&SceneId> {
        self.scenes.first().map(|scene| &scene.id)
    }

    /// Looks up a scene declaration by id.
    #[must_use]
    pub fn scene(&self, id: &SceneId) -> Option<&SceneDecl> {
        self.scenes.iter().find(|scene| &scene.id == id)
    }
}

/// A `SCENE` block.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SceneDecl {
    /// Scene id.
    pub id: SceneId,
    /// Display name.
    pub name: String,
    /// Background reference from `background=` (presentational).
    pub background: Option<String>,
    /// Objects declared in this scene, in order.
    pub objects: Vec<ObjectDecl>,
}

impl SceneDecl {
    /// Creates an empty scene declaration.
    pub fn new(id: impl Into<SceneId>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            background: None,
            objects: Vec::new(),
        }
    }
}

/// An `OBJECT` line.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ObjectDecl {
    /// Object id.
    pub id: ObjectId,
    /// Display name.
    pub name: String,
    /// Scene placement.
    pub position: Position,
    /// Entity kind, explicit (`type=`) or inferred from the id.
    pub kind: EntityKind,
    /// `locked` property (doors).
    pub locked: bool,
    /// `hidden` property: start invisible.
    pub hidden: bool,
    /// `key_required=` property (doors).
    pub key_required: Option<ObjectId>,
    /// `hiding=` properties: ids concealed beneath this object.
    pub hiding: Vec<ObjectId>,
    /// `description=` property.
    pub description: Option<String>,
    /// `contents=` property (boxes), comma-separated display names.
    pub contents: Vec<String>,
    /// Properties the grammar does not recognize, kept as values.
    pub extra: Vec<(String, Value)>,
}

impl ObjectDecl {
    /// Creates a bare object declaration of the given kind.
    pub fn new(id: impl Into<ObjectId>, name: impl Into<String>, kind: EntityKind) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            position: Position::default(),
            kind,
            locked: false,
            hidden: false,
            key_required: None,
            hiding: Vec::new(),
            description: None,
            contents: Vec::new(),
            extra: Vec::new(),
        }
    }
}

/// A scene-scoped `ACTION` rule.
///
/// Rules are created once at load time and immutable thereafter; their
/// conditions and effects reference world state by id, so the same rule
/// is reusable across repeated triggers.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Rule {
    /// The scene this rule is scoped to.
    pub scene: SceneId,
    /// Verb token, lowercase.
    pub verb: String,
    /// First target: an object id or a kind token.
    pub target1: String,
    /// Second target for two-operand verbs.
    pub target2: Option<String>,
    /// Message shown when the rule fires.
    pub message: String,
    /// Preconditions; all must hold for the rule to fire.
    pub requires: Vec<Condition>,
    /// Effects applied, in order, when the rule fires.
    pub effects: Vec<Effect>,
}

impl Rule {
    /// Creates a rule with no conditions or effects.
    pub fn new(
        scene: impl Into<SceneId>,
        verb: impl Into<String>,
        target1: impl Into<String>,
    ) -> Self {
        Self {
            scene: scene.into(),
            verb: verb.into().to_lowercase(),
            target1: target1.into(),
            target2: None,
            message: String::new(),
            requires: Vec::new(),
            effects: Vec::new(),
        }
    }

    /// Sets the second target.
    #[must_use]
    pub fn with_target2(mut self, target2: impl Into<String>) -> Self {
        self.target2 = Some(target2.into());
        self
    }

    /// Sets the success message.
    #[must_use]
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    /// Adds a precondition.
    #[must_use]
    pub fn with_require(mut self, condition: Condition) -> Self {
        self.requires.push(condition);
        self
    }

    /// Adds an effect.
    #[must_use]
    pub fn with_effect(mut self, effect: Effect) -> Self {
        self.effects.push(effect);
        self
    }
}

/// A scene-scoped `FORBIDDEN` entry.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ForbiddenDecl {
    /// The scene this entry is scoped to.
    pub scene: SceneId,
    /// Verb token, lowercase.
    pub verb: String,
    /// Target object id or kind token.
    pub target: String,
    /// The rejection message.
    pub message: String,
}

/// A rule precondition over live world state.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum Condition {
    /// `<id> IN inventory` - inventory membership.
    InInventory(ObjectId),
    /// `<id>.<field> = <literal>` - equality against a live field.
    FieldEquals {
        /// The object to inspect.
        object: ObjectId,
        /// The field name.
        field: String,
        /// The expected value.
        value: Value,
    },
    /// `<id>.<field> != <literal>` - inequality against a live field.
    FieldNotEquals {
        /// The object to inspect.
        object: ObjectId,
        /// The field name.
        field: String,
        /// The rejected value.
        value: Value,
    },
    /// `VISITED <scene_id>` - whether a scene has ever been active.
    Visited(SceneId),
}

impl fmt::Display for Condition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InInventory(id) => write!(f, "{id} IN inventory"),
            Self::FieldEquals {
                object,
                field,
                value,
            } => write!(f, "{object}.{field} = {}", value.script_literal()),
            Self::FieldNotEquals {
                object,
                field,
                value,
            } => write!(f, "{object}.{field} != {}", value.script_literal()),
            Self::Visited(id) => write!(f, "VISITED {id}"),
        }
    }
}

/// A single world-state mutation performed by a fired rule.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum Effect {
    /// `SHOW <id>` - make an object visible.
    Show(ObjectId),
    /// `HIDE <id>` - make an object invisible.
    Hide(ObjectId),
    /// `ADD_TO_INVENTORY <id>` - move an object into the inventory.
    AddToInventory(ObjectId),
    /// `REMOVE_FROM_INVENTORY <id>` - consume a carried item.
    RemoveFromInventory(ObjectId),
    /// `SET <id>.<field> <literal>` - assign a live field.
    Set {
        /// The object to mutate.
        object: ObjectId,
        /// The field name.
        field: String,
        /// The new value.
        value: Value,
    },
    /// `SET game.won true` - raise the global win flag.
    SetGameWon,
    /// `CHANGE_SCENE <scene_id>` - switch the active scene.
    ChangeScene(SceneId),
    /// `WIN_GAME` - terminal effect; ends the session successfully.
    WinGame,
}

impl fmt::Display for Effect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Show(id) => write!(f, "SHOW {id}"),
            Self::Hide(id) => write!(f, "HIDE {id}"),
            Self::AddToInventory(id) => write!(f, "ADD_TO_INVENTORY {id}"),
            Self::RemoveFromInventory(id) => write!(f, "REMOVE_FROM_INVENTORY {id}"),
            Self::Set {
                object,
                field,
                value,
            } => write!(f, "SET {object}.{field} {}", value.script_literal()),
            Self::SetGameWon => write!(f, "SET game.won true"),
            Self::ChangeScene(id) => write!(f, "CHANGE_SCENE {id}"),
            Self::WinGame => write!(f, "WIN_GAME"),
        }
    }
}
