//! Parsing a complete script into its declared shape.

use brasskey_foundation::{Diagnostics, ObjectId, SceneId};
use brasskey_script::{load, Condition, Effect};
use brasskey_world::EntityKind;

const MANOR: &str = include_str!("../../demos/manor.script");

fn kinds(definition: &brasskey_script::WorldDefinition) -> Vec<(String, EntityKind)> {
    definition
        .scenes
        .iter()
        .flat_map(|scene| scene.objects.iter())
        .map(|object| (object.id.as_str().to_string(), object.kind))
        .collect()
}

#[test]
fn manor_script_loads_cleanly() {
    let mut diagnostics = Diagnostics::new();
    let definition = load(MANOR, &mut diagnostics);

    assert!(diagnostics.is_empty(), "diagnostics: {diagnostics:?}");
    assert_eq!(definition.scenes.len(), 2);
    assert_eq!(definition.start_scene(), Some(&SceneId::new("hall")));
    assert_eq!(definition.scenes[0].objects.len(), 4);
    assert_eq!(definition.scenes[1].objects.len(), 2);
    assert_eq!(definition.rules.len(), 3);
    assert_eq!(definition.forbidden.len(), 2);
}

#[test]
fn kinds_are_inferred_from_ids_and_props() {
    let mut diagnostics = Diagnostics::new();
    let definition = load(MANOR, &mut diagnostics);

    let kinds = kinds(&definition);
    assert!(kinds.contains(&("door".into(), EntityKind::Door)));
    assert!(kinds.contains(&("table".into(), EntityKind::Table)));
    assert!(kinds.contains(&("key".into(), EntityKind::Key)));
    assert!(kinds.contains(&("chest".into(), EntityKind::Box)));
    assert!(kinds.contains(&("portrait".into(), EntityKind::Generic)));
    assert!(kinds.contains(&("trophy".into(), EntityKind::Generic)));
}

#[test]
fn win_rule_carries_conditions_and_terminal_effect() {
    let mut diagnostics = Diagnostics::new();
    let definition = load(MANOR, &mut diagnostics);

    let rule = definition
        .rules
        .iter()
        .find(|rule| rule.verb == "take" && rule.target1 == "trophy")
        .expect("take trophy rule");
    assert_eq!(rule.scene, SceneId::new("cellar"));
    assert!(rule.requires.contains(&Condition::Visited(SceneId::new("hall"))));
    assert_eq!(rule.effects.last(), Some(&Effect::WinGame));
    assert!(rule
        .effects
        .contains(&Effect::AddToInventory(ObjectId::new("trophy"))));
}

#[test]
fn forbidden_entries_scope_to_their_scene() {
    let mut diagnostics = Diagnostics::new();
    let definition = load(MANOR, &mut diagnostics);

    assert!(definition
        .forbidden
        .iter()
        .all(|entry| entry.scene == SceneId::new("hall")));
    assert!(definition
        .forbidden
        .iter()
        .any(|entry| entry.target == "portrait"));
}
