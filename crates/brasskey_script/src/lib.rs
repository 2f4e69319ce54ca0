//! Script parsing for brasskey.
//!
//! A script is a line-oriented UTF-8 text describing scenes, objects,
//! and verb rules:
//!
//! ```text
//! SCENE hall "Entrance Hall"
//!   OBJECT door "oak door" at (300, 200) [locked, key_required=key]
//!   OBJECT key "brass key" at (500, 350) [hidden]
//!
//! ACTION take key -> "You pocket the brass key."
//!   EFFECTS:
//!   - ADD_TO_INVENTORY key
//!
//! FORBIDDEN talk_to door -> "The door has nothing to say."
//! ```
//!
//! Parsing is single-pass and fail-soft: malformed lines are skipped and
//! reported to the caller's [`brasskey_foundation::Diagnostics`] sink,
//! never aborting the load. [`load`] is a pure function of the source
//! text; each call yields an independent [`WorldDefinition`].

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

mod ast;
mod instantiate;
mod parser;
mod serialize;

pub use ast::{Condition, Effect, ForbiddenDecl, ObjectDecl, Rule, SceneDecl, WorldDefinition};
pub use parser::load;
pub use serialize::serialize;
