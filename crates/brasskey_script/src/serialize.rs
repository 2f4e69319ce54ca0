//! Re-emitting a definition as script text.
//!
//! The emitted text is canonical rather than byte-faithful: property
//! order is fixed and inferred kinds are made explicit where the id
//! alone would not recover them. Re-parsing the output yields an
//! equivalent definition, which guards the parser against lossy
//! interpretation of its own format.

use std::fmt::Write;

use crate::ast::{ObjectDecl, WorldDefinition};

/// Renders a definition back into script source.
#[must_use]
pub fn serialize(definition: &WorldDefinition) -> String {
    let mut out = String::new();
    for scene in &definition.scenes {
        let _ = write!(out, "SCENE {} \"{}\"", scene.id, scene.name);
        if let Some(background) = &scene.background {
            let _ = write!(out, " [background={background}]");
        }
        out.push('\n');

        for object in &scene.objects {
            let _ = write!(
                out,
                "  OBJECT {} \"{}\" at ({}, {})",
                object.id, object.name, object.position.x, object.position.y
            );
            let props = object_props(object);
            if !props.is_empty() {
                let _ = write!(out, " [{}]", props.join(", "));
            }
            out.push('\n');
        }

        for rule in definition.rules.iter().filter(|rule| rule.scene == scene.id) {
            let _ = write!(out, "ACTION {} {}", rule.verb, rule.target1);
            if let Some(target2) = &rule.target2 {
                let _ = write!(out, " {target2}");
            }
            let _ = writeln!(out, " -> \"{}\"", rule.message);
            for condition in &rule.requires {
                let _ = writeln!(out, "  REQUIRES: {condition}");
            }
            if !rule.effects.is_empty() {
                out.push_str("  EFFECTS:\n");
                for effect in &rule.effects {
                    let _ = writeln!(out, "  - {effect}");
                }
            }
        }

        for entry in definition
            .forbidden
            .iter()
            .filter(|entry| entry.scene == scene.id)
        {
            let _ = writeln!(
                out,
                "FORBIDDEN {} {} -> \"{}\"",
                entry.verb, entry.target, entry.message
            );
        }

        out.push('\n');
    }
    out
}

fn object_props(object: &ObjectDecl) -> Vec<String> {
    let mut props = Vec::new();
    // Emit `type=` whenever inference alone would not recover the kind.
    if crate::parser::infer_kind(object) != object.kind {
        props.push(format!("type={}", object.kind.token()));
    }
    if object.hidden {
        props.push("hidden".to_string());
    }
    if object.locked {
        props.push("locked".to_string());
    }
    if let Some(key) = &object.key_required {
        props.push(format!("key_required={key}"));
    }
    for id in &object.hiding {
        props.push(format!("hiding={id}"));
    }
    if let Some(description) = &object.description {
        props.push(format!("description=\"{description}\""));
    }
    if !object.contents.is_empty() {
        props.push(format!("contents=\"{}\"", object.contents.join(", ")));
    }
    for (key, value) in &object.extra {
        props.push(format!("{key}={}", value.script_literal()));
    }
    props
}
