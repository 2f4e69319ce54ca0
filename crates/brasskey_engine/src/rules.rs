//! Scene-scoped rule matching.
//!
//! Rules are consulted in declaration order. A rule whose signature
//! matches but whose preconditions fail is skipped so a later rule can
//! fire; only when every signature match fails its preconditions does
//! the player get an unmet-requirement message.

use brasskey_foundation::{ObjectId, Value};
use brasskey_script::{Condition, Rule, WorldDefinition};
use brasskey_world::{EntityKind, WorldState};

use crate::condition::evaluate_condition;
use crate::verb::Verb;

/// All rules in the active scene whose signature matches the command,
/// in declaration order, regardless of preconditions.
#[must_use]
pub fn matching_rules<'a>(
    definition: &'a WorldDefinition,
    world: &WorldState,
    verb: &str,
    target1: &str,
    target2: Option<&str>,
) -> Vec<&'a Rule> {
    definition
        .rules
        .iter()
        .filter(|rule| &rule.scene == world.current_scene_id())
        .filter(|rule| verbs_match(&rule.verb, verb))
        .filter(|rule| target_matches(&rule.target1, target1, world))
        .filter(|rule| match (&rule.target2, target2) {
            (None, None) => true,
            (Some(pattern), Some(target)) => target_matches(pattern, target, world),
            _ => false,
        })
        .collect()
}

/// The first matching rule whose preconditions all hold, if any.
#[must_use]
pub fn find_rule<'a>(
    definition: &'a WorldDefinition,
    world: &WorldState,
    verb: &str,
    target1: &str,
    target2: Option<&str>,
) -> Option<&'a Rule> {
    matching_rules(definition, world, verb, target1, target2)
        .into_iter()
        .find(|rule| {
            rule.requires
                .iter()
                .all(|condition| evaluate_condition(condition, world))
        })
}

/// A player-facing message for a rule that matched but cannot fire.
#[must_use]
pub fn unmet_message(rule: &Rule, world: &WorldState) -> String {
    let unmet: Vec<&Condition> = rule
        .requires
        .iter()
        .filter(|condition| !evaluate_condition(condition, world))
        .collect();
    if let Some(hint) = unmet
        .iter()
        .find_map(|condition| requirement_hint(condition, world))
    {
        return hint;
    }
    let listed: Vec<String> = unmet
        .iter()
        .map(|condition| condition.to_string())
        .collect();
    format!("You can't do that yet (missing: {}).", listed.join("; "))
}

/// Friendly phrasings for the two most common unmet requirements.
fn requirement_hint(condition: &Condition, world: &WorldState) -> Option<String> {
    match condition {
        Condition::FieldEquals {
            object,
            field,
            value,
        } if field == "locked" && *value == Value::Bool(false) => world
            .entity(object)
            .map(|entity| format!("The {} is locked.", entity.name)),
        Condition::InInventory(id) => {
            let name = world
                .entity(id)
                .map_or_else(|| id.as_str().to_string(), |entity| entity.name.clone());
            Some(format!("You don't have the {name}."))
        }
        _ => None,
    }
}

pub(crate) fn verbs_match(rule_verb: &str, token: &str) -> bool {
    if rule_verb == token {
        return true;
    }
    match (Verb::parse(rule_verb), Verb::parse(token)) {
        (Some(a), Some(b)) => a == b,
        _ => false,
    }
}

/// A rule target matches an object by exact id or by kind token
/// (`door` matches any door in the scene).
pub(crate) fn target_matches(pattern: &str, target: &str, world: &WorldState) -> bool {
    if pattern.eq_ignore_ascii_case(target) {
        return true;
    }
    let Some(kind) = EntityKind::parse(pattern) else {
        return false;
    };
    world
        .entity(&ObjectId::new(target))
        .is_some_and(|entity| entity.kind() == kind)
}
