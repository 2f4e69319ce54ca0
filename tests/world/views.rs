//! Snapshot views for the rendering boundary.

use brasskey_foundation::{ObjectId, SceneId};
use brasskey_world::{Entity, Scene, WorldState};

fn world() -> WorldState {
    let hall = Scene::new("hall", "Entrance Hall")
        .with_background("hall.png")
        .with_entity(Entity::door("door", "oak door"))
        .with_entity(Entity::key("key", "brass key").hidden())
        .with_entity(Entity::generic("coin", "copper coin"));
    WorldState::new(vec![hall], &SceneId::new("hall")).unwrap()
}

#[test]
fn scene_view_preserves_order_and_visibility() {
    let world = world();
    let view = world.scene_view();

    assert_eq!(view.id, SceneId::new("hall"));
    assert_eq!(view.background.as_deref(), Some("hall.png"));
    let ids: Vec<&str> = view.entities.iter().map(|e| e.id.as_str()).collect();
    assert_eq!(ids, ["door", "key", "coin"]);
    assert!(view.entities[0].visible);
    assert!(!view.entities[1].visible);
}

#[test]
fn views_track_mutations() {
    let mut world = world();
    world.take_into_inventory(&ObjectId::new("coin"));

    let scene = world.scene_view();
    let coin = scene
        .entities
        .iter()
        .find(|entity| entity.id == ObjectId::new("coin"))
        .unwrap();
    assert!(!coin.visible, "carried items are not drawn in the scene");

    let inventory = world.inventory_view();
    assert_eq!(inventory.items.len(), 1);
    assert_eq!(inventory.items[0].name, "copper coin");
}
