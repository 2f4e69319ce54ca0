//! The verb vocabulary.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Normalizes a raw verb token: lowercased, interior whitespace
/// collapsed to underscores. `"Look At"` becomes `"look_at"`.
#[must_use]
pub fn normalize(token: &str) -> String {
    token
        .to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join("_")
}

/// A recognized player verb.
///
/// Scripts may still use verb tokens outside this set; such rules match
/// by literal token and simply have no entity-default fallback.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Verb {
    /// Open a door or a container.
    Open,
    /// Close a door or a container.
    Close,
    /// Pick an item up into the inventory.
    Take,
    /// Describe the target.
    LookAt,
    /// Use one object with another (two-operand).
    Use,
    /// Offer one object to another (two-operand).
    Give,
    /// Shove the target.
    Push,
    /// Drag the target.
    Pull,
    /// Address the target.
    TalkTo,
    /// Lock a closed door.
    Lock,
    /// Unlock a locked door.
    Unlock,
}

impl Verb {
    /// Parses a raw token, accepting the common aliases
    /// (`look`/`look_at`, `take`/`pick_up`, `talk`/`talk_to`).
    #[must_use]
    pub fn parse(token: &str) -> Option<Self> {
        match normalize(token).as_str() {
            "open" => Some(Self::Open),
            "close" => Some(Self::Close),
            "take" | "pick_up" => Some(Self::Take),
            "look" | "look_at" => Some(Self::LookAt),
            "use" => Some(Self::Use),
            "give" => Some(Self::Give),
            "push" => Some(Self::Push),
            "pull" => Some(Self::Pull),
            "talk" | "talk_to" => Some(Self::TalkTo),
            "lock" => Some(Self::Lock),
            "unlock" => Some(Self::Unlock),
            _ => None,
        }
    }

    /// The canonical script token.
    #[must_use]
    pub const fn token(self) -> &'static str {
        match self {
            Self::Open => "open",
            Self::Close => "close",
            Self::Take => "take",
            Self::LookAt => "look_at",
            Self::Use => "use",
            Self::Give => "give",
            Self::Push => "push",
            Self::Pull => "pull",
            Self::TalkTo => "talk_to",
            Self::Lock => "lock",
            Self::Unlock => "unlock",
        }
    }

    /// Whether the verb needs a second target to complete.
    #[must_use]
    pub const fn is_two_operand(self) -> bool {
        matches!(self, Self::Use | Self::Give)
    }
}

impl fmt::Display for Verb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}
