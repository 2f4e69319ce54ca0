//! Fail-soft recovery from malformed script input.

use brasskey_foundation::{Diagnostic, Diagnostics};
use brasskey_script::load;

#[test]
fn unknown_effect_verb_is_skipped_and_reported() {
    let mut diagnostics = Diagnostics::new();
    let definition = load(
        r#"
        SCENE hall "Hall"
        ACTION open door -> "Open."
          EFFECTS:
          - FROBNICATE door
          - SET door.open true
        "#,
        &mut diagnostics,
    );

    let rule = &definition.rules[0];
    assert_eq!(rule.effects.len(), 1, "only the valid effect survives");
    assert_eq!(diagnostics.len(), 1);
    assert!(matches!(
        &diagnostics.entries()[0],
        Diagnostic::SkippedLine { reason, .. } if reason == "unparsable effect"
    ));
}

#[test]
fn unknown_condition_shape_is_skipped_and_reported() {
    let mut diagnostics = Diagnostics::new();
    let definition = load(
        r#"
        SCENE hall "Hall"
        ACTION open door -> "Open."
          REQUIRES: whenever you feel like it
          REQUIRES: key IN inventory
        "#,
        &mut diagnostics,
    );

    assert_eq!(definition.rules[0].requires.len(), 1);
    assert_eq!(diagnostics.len(), 1);
}

#[test]
fn requires_outside_an_action_is_reported() {
    let mut diagnostics = Diagnostics::new();
    let definition = load(
        "SCENE hall \"Hall\"\nREQUIRES: key IN inventory",
        &mut diagnostics,
    );

    assert!(definition.rules.is_empty());
    assert_eq!(diagnostics.len(), 1);
}

#[test]
fn declarations_before_any_scene_are_diagnosed() {
    let mut diagnostics = Diagnostics::new();
    let definition = load(
        r#"
        OBJECT door "oak door" at (1, 2)
        FORBIDDEN talk_to door -> "No."
        SCENE hall "Hall"
          OBJECT key "brass key" at (3, 4)
        "#,
        &mut diagnostics,
    );

    // The stray declarations are dropped; parsing continues normally.
    assert_eq!(definition.scenes.len(), 1);
    assert_eq!(definition.scenes[0].objects.len(), 1);
    assert!(definition.forbidden.is_empty());
    assert_eq!(diagnostics.len(), 2);
    assert!(diagnostics
        .entries()
        .iter()
        .all(|entry| matches!(entry, Diagnostic::OutsideScene { .. })));
}

#[test]
fn a_heavily_damaged_script_still_yields_its_good_parts() {
    let mut diagnostics = Diagnostics::new();
    let definition = load(
        r#"
        SCENE hall "Hall"
          OBJECT door "oak door" at (not, numbers)
          OBJECT key "brass key" at (5, 6)
        ACTION open -> missing quote
        ACTION take key -> "Got it."
        ~~~~
        "#,
        &mut diagnostics,
    );

    assert_eq!(definition.scenes[0].objects.len(), 1);
    assert_eq!(definition.rules.len(), 1);
    assert_eq!(definition.rules[0].verb, "take");
    assert_eq!(diagnostics.len(), 3);
}
