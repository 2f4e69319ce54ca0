//! Resolution precedence: rules, forbidden entries, entity defaults.

use brasskey_engine::{Resolver, SessionStatus};
use brasskey_foundation::{Diagnostics, ObjectId};
use brasskey_script::{load, WorldDefinition};
use brasskey_world::WorldState;

const SOURCE: &str = r#"
SCENE hall "Entrance Hall"
  OBJECT front_door "front door" at (10, 10)
  OBJECT key "brass key" at (20, 20)
  OBJECT wand "willow wand" at (30, 30)

ACTION look_at front_door -> "Brass key in hand, the door looks friendlier."
  REQUIRES: key IN inventory

ACTION look_at front_door -> "An unremarkable front door."

ACTION look_at door -> "Some door or other."

ACTION wave wand -> "Sparks fizz from the tip."
ACTION push wand -> "It bends alarmingly, then springs back."

FORBIDDEN look_at wand -> "Its maker forbade scrutiny."
FORBIDDEN push wand -> "Best not to push it."
FORBIDDEN talk_to front_door -> "Doors make poor conversation."
"#;

fn session() -> (WorldDefinition, WorldState, Resolver, Diagnostics) {
    let mut diagnostics = Diagnostics::new();
    let definition = load(SOURCE, &mut diagnostics);
    assert!(diagnostics.is_empty(), "load diagnostics: {diagnostics:?}");
    let world = definition.instantiate().unwrap();
    (definition, world, Resolver::new(0), Diagnostics::new())
}

#[test]
fn first_satisfied_rule_in_declaration_order_wins() {
    let (definition, mut world, mut resolver, mut diagnostics) = session();
    world.take_into_inventory(&ObjectId::new("key"));

    let resolution = resolver.resolve(
        &definition,
        &mut world,
        &mut diagnostics,
        "look_at",
        "front_door",
        None,
    );
    assert_eq!(
        resolution.message,
        "Brass key in hand, the door looks friendlier."
    );
}

#[test]
fn a_failing_rule_is_skipped_for_a_later_match() {
    let (definition, mut world, mut resolver, mut diagnostics) = session();

    let resolution = resolver.resolve(
        &definition,
        &mut world,
        &mut diagnostics,
        "look_at",
        "front_door",
        None,
    );
    assert_eq!(resolution.message, "An unremarkable front door.");
    assert_eq!(resolution.status, SessionStatus::Running);
}

#[test]
fn verb_aliases_reach_the_same_rule() {
    let (definition, mut world, mut resolver, mut diagnostics) = session();

    let resolution = resolver.resolve(
        &definition,
        &mut world,
        &mut diagnostics,
        "look at",
        "front_door",
        None,
    );
    assert_eq!(resolution.message, "An unremarkable front door.");
}

#[test]
fn kind_token_rules_match_any_entity_of_the_kind() {
    let (definition, mut world, mut resolver, mut diagnostics) = session();
    // front_door is covered by its specific rules; a second door is not.
    world
        .current_scene_mut()
        .insert(brasskey_world::Entity::door("back_door", "back door"));

    let resolution = resolver.resolve(
        &definition,
        &mut world,
        &mut diagnostics,
        "look_at",
        "back_door",
        None,
    );
    assert_eq!(resolution.message, "Some door or other.");
}

#[test]
fn a_matching_rule_beats_a_forbidden_entry() {
    let (definition, mut world, mut resolver, mut diagnostics) = session();
    // `push wand` is both a scripted rule and a forbidden entry.
    let resolution = resolver.resolve(
        &definition,
        &mut world,
        &mut diagnostics,
        "push",
        "wand",
        None,
    );
    assert_eq!(resolution.message, "It bends alarmingly, then springs back.");
}

#[test]
fn a_forbidden_entry_applies_when_no_rule_matches() {
    let (definition, mut world, mut resolver, mut diagnostics) = session();

    let resolution = resolver.resolve(
        &definition,
        &mut world,
        &mut diagnostics,
        "look_at",
        "wand",
        None,
    );
    assert_eq!(resolution.message, "Its maker forbade scrutiny.");
}

#[test]
fn a_forbidden_entry_beats_the_entity_default() {
    let (definition, mut world, mut resolver, mut diagnostics) = session();

    let resolution = resolver.resolve(
        &definition,
        &mut world,
        &mut diagnostics,
        "talk_to",
        "front_door",
        None,
    );
    assert_eq!(resolution.message, "Doors make poor conversation.");
}

#[test]
fn rules_may_use_verbs_outside_the_built_in_set() {
    let (definition, mut world, mut resolver, mut diagnostics) = session();

    let resolution =
        resolver.resolve(&definition, &mut world, &mut diagnostics, "wave", "wand", None);
    assert_eq!(resolution.message, "Sparks fizz from the tip.");

    // The same verb with no rule falls to a deflection, not an error.
    let resolution =
        resolver.resolve(&definition, &mut world, &mut diagnostics, "wave", "key", None);
    assert!(!resolution.message.is_empty());
    assert_eq!(resolution.status, SessionStatus::Running);
}
