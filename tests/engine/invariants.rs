//! State-machine invariants under arbitrary verb sequences.

use brasskey_engine::{can_interact, perform_action, Deflections, Verb};
use brasskey_foundation::{ObjectId, SceneId};
use brasskey_world::{Entity, Scene, WorldState};
use proptest::prelude::*;

fn door_world(locked: bool) -> WorldState {
    let mut door = Entity::door("door", "oak door");
    if let Some(state) = door.door_state_mut() {
        state.locked = locked;
        state.key_required = Some(ObjectId::new("key"));
    }
    let hall = Scene::new("hall", "Hall")
        .with_entity(door)
        .with_entity(Entity::key("key", "brass key"));
    WorldState::new(vec![hall], &SceneId::new("hall")).unwrap()
}

fn door_verbs() -> impl Strategy<Value = Verb> {
    prop_oneof![
        Just(Verb::Open),
        Just(Verb::Close),
        Just(Verb::Lock),
        Just(Verb::Unlock),
        Just(Verb::LookAt),
        Just(Verb::Push),
        Just(Verb::Pull),
        Just(Verb::Take),
    ]
}

proptest! {
    #[test]
    fn a_door_is_never_open_and_locked(
        verbs in proptest::collection::vec(door_verbs(), 1..48),
        locked in any::<bool>(),
        carry_key in any::<bool>(),
    ) {
        let mut world = door_world(locked);
        if carry_key {
            world.take_into_inventory(&ObjectId::new("key"));
        }
        let mut deflections = Deflections::new(0);

        for verb in verbs {
            perform_action(&mut world, &mut deflections, &ObjectId::new("door"), verb);
            let state = world
                .entity(&ObjectId::new("door"))
                .unwrap()
                .door_state()
                .unwrap();
            prop_assert!(!(state.open && state.locked));
        }
    }

    #[test]
    fn take_never_duplicates_an_item(repeats in 1usize..8) {
        let mut world = door_world(false);
        let mut deflections = Deflections::new(0);
        for _ in 0..repeats {
            perform_action(&mut world, &mut deflections, &ObjectId::new("key"), Verb::Take);
        }
        prop_assert_eq!(world.inventory().len(), 1);
    }
}

#[test]
fn repeated_open_and_close_are_no_ops() {
    let mut world = door_world(false);
    let mut deflections = Deflections::new(0);
    let door = ObjectId::new("door");

    perform_action(&mut world, &mut deflections, &door, Verb::Open);
    let once = world.entity(&door).unwrap().door_state().unwrap().clone();
    let message = perform_action(&mut world, &mut deflections, &door, Verb::Open);
    assert_eq!(message, "The oak door is already open.");
    assert_eq!(world.entity(&door).unwrap().door_state().unwrap(), &once);

    perform_action(&mut world, &mut deflections, &door, Verb::Close);
    let once = world.entity(&door).unwrap().door_state().unwrap().clone();
    let message = perform_action(&mut world, &mut deflections, &door, Verb::Close);
    assert_eq!(message, "The oak door is already closed.");
    assert_eq!(world.entity(&door).unwrap().door_state().unwrap(), &once);
}

#[test]
fn a_false_can_interact_means_no_state_change() {
    let all = [
        Verb::Open,
        Verb::Close,
        Verb::Take,
        Verb::LookAt,
        Verb::Use,
        Verb::Give,
        Verb::Push,
        Verb::Pull,
        Verb::TalkTo,
        Verb::Lock,
        Verb::Unlock,
    ];
    let mut world = door_world(true);
    let mut deflections = Deflections::new(0);

    for target in [ObjectId::new("door"), ObjectId::new("key")] {
        for verb in all {
            if can_interact(&world, &target, verb) {
                continue;
            }
            let before = world.current_scene().entities().to_vec();
            let carried = world.inventory().len();
            perform_action(&mut world, &mut deflections, &target, verb);
            assert_eq!(
                world.current_scene().entities(),
                before.as_slice(),
                "{verb} on {target} mutated state despite can_interact() == false"
            );
            assert_eq!(world.inventory().len(), carried);
        }
    }
}
