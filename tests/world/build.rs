//! Instantiating scripts into live world state.

use brasskey_foundation::{Diagnostics, ObjectId, SceneId, Value};
use brasskey_script::load;
use brasskey_world::WorldState;

const MANOR: &str = include_str!("../../demos/manor.script");

fn manor_world() -> WorldState {
    let mut diagnostics = Diagnostics::new();
    let definition = load(MANOR, &mut diagnostics);
    assert!(diagnostics.is_empty(), "diagnostics: {diagnostics:?}");
    definition.instantiate().unwrap()
}

#[test]
fn manor_world_starts_in_the_hall() {
    let world = manor_world();
    assert_eq!(world.current_scene_id(), &SceneId::new("hall"));
    assert!(world.visited(&SceneId::new("hall")));
    assert!(!world.visited(&SceneId::new("cellar")));

    let door = world.entity(&ObjectId::new("door")).unwrap();
    let state = door.door_state().unwrap();
    assert!(state.locked);
    assert!(!state.open);
    assert_eq!(state.key_required, Some(ObjectId::new("key")));
}

#[test]
fn hiding_props_conceal_entities_at_start() {
    let world = manor_world();
    // The key starts concealed beneath the table.
    assert!(!world.entity(&ObjectId::new("key")).unwrap().visible);
    let table = world.entity(&ObjectId::new("table")).unwrap();
    assert_eq!(
        table.table_state().unwrap().items_underneath,
        vec![ObjectId::new("key")]
    );
}

#[test]
fn descriptions_are_readable_as_fields() {
    let world = manor_world();
    let portrait = world.entity(&ObjectId::new("portrait")).unwrap();
    assert_eq!(
        portrait.field("description"),
        Some(Value::Text("A stern ancestor glares down at you.".into()))
    );
}

#[test]
fn box_contents_come_from_the_contents_prop() {
    let mut world = manor_world();
    world.change_scene(&SceneId::new("cellar"));
    let chest = world.entity(&ObjectId::new("chest")).unwrap();
    let state = chest.box_state().unwrap();
    assert!(!state.open);
    assert_eq!(state.contents, vec!["a dusty trophy"]);
}

#[test]
fn inventory_survives_scene_changes() {
    let mut world = manor_world();
    assert!(world.take_into_inventory(&ObjectId::new("key")));
    world.change_scene(&SceneId::new("cellar"));
    assert!(world.inventory().contains(&ObjectId::new("key")));

    // The carried key stays reachable from the new scene; the table,
    // left behind in the hall, does not.
    assert!(world.entity(&ObjectId::new("key")).is_some());
    assert!(world.entity(&ObjectId::new("table")).is_none());
}
