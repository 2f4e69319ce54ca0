//! Serialization round trips.

use brasskey_foundation::Diagnostics;
use brasskey_script::{load, serialize, WorldDefinition};
use proptest::prelude::*;

const MANOR: &str = include_str!("../../demos/manor.script");

fn load_clean(source: &str) -> WorldDefinition {
    let mut diagnostics = Diagnostics::new();
    let definition = load(source, &mut diagnostics);
    assert!(diagnostics.is_empty(), "diagnostics: {diagnostics:?}");
    definition
}

#[test]
fn manor_script_round_trips() {
    let first = load_clean(MANOR);
    let second = load_clean(&serialize(&first));
    assert_eq!(first, second);
}

proptest! {
    // Kind inference runs on both sides of the trip, so an explicit
    // `type=` must survive whenever the id alone would mislead it.
    #[test]
    fn generated_objects_round_trip(
        id in "[a-z][a-z0-9_]{0,8}",
        name in "[a-zA-Z][a-zA-Z ]{0,11}",
        x in -500i32..500,
        y in -500i32..500,
        locked in any::<bool>(),
        hidden in any::<bool>(),
        kind in prop_oneof![
            Just("door"),
            Just("key"),
            Just("table"),
            Just("box"),
            Just("generic"),
        ],
    ) {
        let mut props = vec![format!("type={kind}")];
        if locked {
            props.push("locked".to_string());
        }
        if hidden {
            props.push("hidden".to_string());
        }
        let source = format!(
            "SCENE room \"Room\"\n  OBJECT {id} \"{name}\" at ({x}, {y}) [{}]",
            props.join(", ")
        );

        let mut diagnostics = Diagnostics::new();
        let first = load(&source, &mut diagnostics);
        prop_assert!(diagnostics.is_empty());

        let mut diagnostics = Diagnostics::new();
        let second = load(&serialize(&first), &mut diagnostics);
        prop_assert!(diagnostics.is_empty());
        prop_assert_eq!(first, second);
    }
}
