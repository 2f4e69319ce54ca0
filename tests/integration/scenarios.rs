//! End-to-end behavior of the canonical puzzle beats.

use brasskey_engine::{SessionStatus, Verb};
use brasskey_foundation::{ObjectId, SceneId};
use brasskey_runtime::Session;

const SOURCE: &str = r#"
SCENE hall "Entrance Hall"
  OBJECT door "oak door" at (300, 200) [locked, key_required=key]
  OBJECT key "brass key" at (150, 320) [hidden]
  OBJECT table "side table" at (150, 300) [hiding=gem]
  OBJECT gem "green gem" at (150, 310)
  OBJECT vault "vault hatch" at (400, 380)

ACTION take key -> "You quietly palm the key."
  EFFECTS:
  - ADD_TO_INVENTORY key

ACTION open vault -> "The hatch grinds aside. Stairs descend into glittering dark."
  EFFECTS:
  - CHANGE_SCENE treasure_chamber
  - SHOW goblet

SCENE treasure_chamber "Treasure Chamber"
  OBJECT goblet "golden goblet" at (220, 240) [hidden]
"#;

fn session() -> Session {
    let session = Session::from_script(SOURCE, 0).unwrap();
    assert!(
        session.diagnostics().is_empty(),
        "load diagnostics: {:?}",
        session.diagnostics()
    );
    session
}

#[test]
fn a_scripted_take_fills_the_inventory_without_revealing_the_item() {
    let mut session = session();

    let resolution = session.resolve("take", "key", None);
    assert_eq!(resolution.message, "You quietly palm the key.");
    assert!(session.world().inventory().contains(&ObjectId::new("key")));
    assert!(!session.world().entity(&ObjectId::new("key")).unwrap().visible);
}

#[test]
fn a_locked_door_refuses_to_open_without_the_key() {
    let mut session = session();

    let resolution = session.resolve("open", "door", None);
    assert_eq!(resolution.message, "The oak door is locked.");

    let state = session
        .world()
        .entity(&ObjectId::new("door"))
        .unwrap()
        .door_state()
        .unwrap();
    assert!(state.locked);
    assert!(!state.open);
}

#[test]
fn opening_with_the_key_in_hand_unlocks_the_door() {
    let mut session = session();
    session.resolve("take", "key", None);

    let resolution = session.resolve("open", "door", None);
    assert_eq!(
        resolution.message,
        "You unlock the oak door with the brass key."
    );

    let state = session
        .world()
        .entity(&ObjectId::new("door"))
        .unwrap()
        .door_state()
        .unwrap();
    assert!(!state.locked);
    assert!(!state.open, "unlocking does not swing the door open");
}

#[test]
fn pushing_the_table_reveals_its_hoard_exactly_once() {
    let mut session = session();
    assert!(!session.world().entity(&ObjectId::new("gem")).unwrap().visible);

    let resolution = session.resolve("push", "table", None);
    assert!(resolution.message.contains("green gem"), "got: {}", resolution.message);
    assert!(session.world().entity(&ObjectId::new("gem")).unwrap().visible);
    assert!(
        session
            .world()
            .entity(&ObjectId::new("table"))
            .unwrap()
            .table_state()
            .unwrap()
            .has_been_moved
    );

    let resolution = session.resolve("push", "table", None);
    assert_eq!(resolution.message, "The side table doesn't move any further.");
}

#[test]
fn scene_change_retargets_effects_later_in_the_same_list() {
    let mut session = session();

    let resolution = session.resolve("open", "vault", None);
    assert_eq!(resolution.status, SessionStatus::Running);
    assert_eq!(
        session.world().current_scene_id(),
        &SceneId::new("treasure_chamber")
    );
    // SHOW ran after the scene change, so it found the goblet there.
    assert!(
        session
            .world()
            .entity(&ObjectId::new("goblet"))
            .unwrap()
            .visible
    );
    assert!(
        session.diagnostics().is_empty(),
        "diagnostics: {:?}",
        session.diagnostics()
    );
}

const COURTYARD: &str = r#"
SCENE courtyard "Courtyard"
  OBJECT key "iron key" at (100, 100)
  OBJECT coin "copper coin" at (50, 60)
  OBJECT guard "sleepy guard" at (60, 200)
  OBJECT hatch "cellar hatch" at (200, 200)

ACTION pull hatch -> "The hatch swings up over dark stairs."
  EFFECTS:
  - CHANGE_SCENE cellar

ACTION take coin -> "You pick the coin off the flagstones."
  EFFECTS:
  - ADD_TO_INVENTORY coin

ACTION give coin guard -> "The guard pockets the coin and waves you on."
  REQUIRES: coin IN inventory
  EFFECTS:
  - REMOVE_FROM_INVENTORY coin

SCENE cellar "Cellar"
  OBJECT vault_door "iron door" at (300, 300) [locked, key_required=key]
"#;

fn courtyard() -> Session {
    let session = Session::from_script(COURTYARD, 0).unwrap();
    assert!(
        session.diagnostics().is_empty(),
        "load diagnostics: {:?}",
        session.diagnostics()
    );
    session
}

#[test]
fn a_carried_key_still_works_after_a_scene_change() {
    let mut session = courtyard();
    session.resolve("take", "key", None);
    session.resolve("pull", "hatch", None);
    assert_eq!(session.world().current_scene_id(), &SceneId::new("cellar"));

    let resolution = session.resolve("look_at", "key", None);
    assert_eq!(resolution.message, "The iron key sits in your pocket.");

    assert!(session.can_interact(&ObjectId::new("vault_door"), Verb::Open));
    let resolution = session.resolve("use", "key", Some("vault_door"));
    assert_eq!(
        resolution.message,
        "You slide the iron key into the lock. The iron door is unlocked."
    );
    let state = session
        .world()
        .entity(&ObjectId::new("vault_door"))
        .unwrap()
        .door_state()
        .unwrap();
    assert!(!state.locked);
}

#[test]
fn giving_a_scripted_item_consumes_it() {
    let mut session = courtyard();

    // Empty-handed: the rule matches but its requirement reports.
    let resolution = session.resolve("give", "coin", Some("guard"));
    assert_eq!(resolution.message, "You don't have the copper coin.");

    session.command("take coin");
    assert_eq!(
        session.command("give coin to guard"),
        "The guard pockets the coin and waves you on."
    );
    assert!(session.world().inventory().is_empty());
}

#[test]
fn unscripted_gifts_are_politely_refused() {
    let mut session = courtyard();
    session.resolve("take", "key", None);

    let resolution = session.resolve("give", "key", Some("guard"));
    assert!(resolution.message.contains("iron key"), "got: {}", resolution.message);
    assert!(resolution.message.contains("sleepy guard"), "got: {}", resolution.message);
    assert!(session.world().inventory().contains(&ObjectId::new("key")));
}
