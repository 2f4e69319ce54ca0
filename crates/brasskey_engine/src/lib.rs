//! Action resolution for brasskey.
//!
//! This crate turns a player command (a verb plus one or two targets)
//! into a message and a batch of world-state mutations:
//!
//! - [`Verb`] - The fixed verb vocabulary
//! - [`evaluate_condition`] / [`apply_effects`] - Rule machinery over
//!   live world state
//! - [`find_rule`] - Scene-scoped rule matching in declaration order
//! - [`ActionTable`] - Per-kind default verb responses
//! - [`Deflections`] - Seeded fallback messages for verbs nothing handles
//! - [`Resolver`] - The single entry point tying the above together
//!
//! Scripted rules always win over entity defaults; entity defaults win
//! over deflections. Nothing in this crate panics on unknown ids; bad
//! references degrade to diagnostics and soft messages.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

mod actions;
mod condition;
mod deflect;
mod effect;
mod resolve;
mod rules;
mod verb;

pub use actions::{
    can_interact, give_to, invoke, perform_action, use_with, ActionEffect, ActionTable, Handler,
    Message,
};
pub use condition::evaluate_condition;
pub use deflect::Deflections;
pub use effect::{apply_effects, SessionStatus};
pub use resolve::{Resolution, Resolver};
pub use rules::{find_rule, matching_rules, unmet_message};
pub use verb::{normalize, Verb};
