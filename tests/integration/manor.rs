//! Playing the bundled manor script from the command line surface.

use brasskey_engine::SessionStatus;
use brasskey_foundation::{ObjectId, SceneId};
use brasskey_runtime::Session;

const MANOR: &str = include_str!("../../demos/manor.script");

fn session() -> Session {
    let session = Session::from_script(MANOR, 0).unwrap();
    assert!(
        session.diagnostics().is_empty(),
        "load diagnostics: {:?}",
        session.diagnostics()
    );
    session
}

#[test]
fn the_manor_can_be_won_from_typed_commands_alone() {
    let mut session = session();

    assert_eq!(
        session.command("push table"),
        "You heave the side table aside, revealing brass key!"
    );
    assert_eq!(session.command("take key"), "You pick up the brass key.");
    assert_eq!(
        session.command("use key with door"),
        "You slide the brass key into the lock. The oak door is unlocked."
    );
    assert_eq!(
        session.command("open door"),
        "The door creaks open onto a dark stair."
    );
    assert_eq!(session.world().current_scene_id(), &SceneId::new("cellar"));

    assert_eq!(
        session.command("open chest"),
        "The lid groans open. A dusty trophy gleams inside."
    );
    assert_eq!(
        session.command("take trophy"),
        "You lift the trophy. The manor gives up its secret!"
    );
    assert_eq!(session.status(), SessionStatus::Won);
    assert!(
        session
            .world()
            .inventory()
            .contains(&ObjectId::new("trophy"))
    );
    assert!(
        session.diagnostics().is_empty(),
        "diagnostics: {:?}",
        session.diagnostics()
    );
}

#[test]
fn the_door_rule_reports_its_unmet_requirement() {
    let mut session = session();
    assert_eq!(session.command("open door"), "The oak door is locked.");
    assert_eq!(session.world().current_scene_id(), &SceneId::new("hall"));
}

#[test]
fn scripted_refusals_answer_idle_chatter() {
    let mut session = session();
    assert_eq!(
        session.command("talk to door"),
        "The door has nothing to say."
    );
    assert_eq!(
        session.command("talk to portrait"),
        "The painted eyes ignore you."
    );
}

#[test]
fn looking_around_mixes_defaults_and_descriptions() {
    let mut session = session();
    assert_eq!(
        session.command("look at portrait"),
        "A stern ancestor glares down at you."
    );
    assert_eq!(
        session.command("look at door"),
        "The oak door is locked. Heavy oak, iron-banded."
    );
}
