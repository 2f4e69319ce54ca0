//! Single-pass, fail-soft script parser.
//!
//! Dispatch is by leading keyword rather than indentation depth, which
//! makes the parser tolerant of ragged indentation while still honoring
//! the block structure: `OBJECT` lines attach to the most recent
//! `SCENE`, and `REQUIRES:` / `EFFECTS:` / `- ` lines attach to the most
//! recent `ACTION`.

use brasskey_foundation::{Diagnostic, Diagnostics, ObjectId, Position, SceneId, Value};
use brasskey_world::EntityKind;

use crate::ast::{Condition, Effect, ForbiddenDecl, ObjectDecl, Rule, SceneDecl, WorldDefinition};

/// Parses script source into a [`WorldDefinition`].
///
/// Pure function of the text: no state is retained between calls, so
/// each call yields an independent definition. Malformed lines are
/// skipped and reported to `diagnostics`; a load never fails outright.
#[must_use]
pub fn load(source: &str, diagnostics: &mut Diagnostics) -> WorldDefinition {
    let mut definition = WorldDefinition::default();
    let mut current_scene: Option<SceneId> = None;
    let mut open_rule: Option<Rule> = None;

    for (index, raw) in source.lines().enumerate() {
        let number = index + 1;
        let line = raw.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        if let Some(rest) = line.strip_prefix("SCENE ") {
            flush_rule(&mut definition, &mut open_rule);
            match parse_scene(rest) {
                Some(scene) => {
                    current_scene = Some(scene.id.clone());
                    definition.scenes.push(scene);
                }
                None => diagnostics.skipped_line(number, line, "malformed SCENE header"),
            }
        } else if let Some(rest) = line.strip_prefix("OBJECT ") {
            match parse_object(rest) {
                Some(object) => match current_scene.as_ref() {
                    Some(scene_id) => {
                        if let Some(scene) =
                            definition.scenes.iter_mut().find(|s| &s.id == scene_id)
                        {
                            scene.objects.push(object);
                        }
                    }
                    None => diagnostics.push(Diagnostic::OutsideScene {
                        line: number,
                        text: line.to_string(),
                    }),
                },
                None => diagnostics.skipped_line(number, line, "malformed OBJECT line"),
            }
        } else if let Some(rest) = line.strip_prefix("ACTION ") {
            flush_rule(&mut definition, &mut open_rule);
            match current_scene.as_ref() {
                Some(scene_id) => match parse_action(scene_id, rest) {
                    Some(rule) => open_rule = Some(rule),
                    None => diagnostics.skipped_line(number, line, "malformed ACTION header"),
                },
                None => diagnostics.push(Diagnostic::OutsideScene {
                    line: number,
                    text: line.to_string(),
                }),
            }
        } else if let Some(rest) = line.strip_prefix("FORBIDDEN ") {
            flush_rule(&mut definition, &mut open_rule);
            match current_scene.as_ref() {
                Some(scene_id) => match parse_forbidden(scene_id, rest) {
                    Some(entry) => definition.forbidden.push(entry),
                    None => diagnostics.skipped_line(number, line, "malformed FORBIDDEN line"),
                },
                None => diagnostics.push(Diagnostic::OutsideScene {
                    line: number,
                    text: line.to_string(),
                }),
            }
        } else if let Some(rest) = line.strip_prefix("REQUIRES:") {
            match open_rule.as_mut() {
                Some(rule) => match parse_condition(rest) {
                    Some(condition) => rule.requires.push(condition),
                    None => diagnostics.skipped_line(number, line, "unparsable condition"),
                },
                None => diagnostics.skipped_line(number, line, "REQUIRES outside an ACTION"),
            }
        } else if line == "EFFECTS:" {
            if open_rule.is_none() {
                diagnostics.skipped_line(number, line, "EFFECTS outside an ACTION");
            }
        } else if let Some(rest) = line.strip_prefix("- ") {
            match open_rule.as_mut() {
                Some(rule) => match parse_effect(rest) {
                    Some(effect) => rule.effects.push(effect),
                    None => diagnostics.skipped_line(number, line, "unparsable effect"),
                },
                None => diagnostics.skipped_line(number, line, "effect outside an ACTION"),
            }
        } else {
            diagnostics.skipped_line(number, line, "unrecognized directive");
        }
    }

    flush_rule(&mut definition, &mut open_rule);
    definition
}

fn flush_rule(definition: &mut WorldDefinition, open_rule: &mut Option<Rule>) {
    if let Some(rule) = open_rule.take() {
        definition.rules.push(rule);
    }
}

// `SCENE <id> "<name>" [prop=val, ...]`
fn parse_scene(rest: &str) -> Option<SceneDecl> {
    let mut cursor = Cursor::new(rest);
    let id = cursor.word()?;
    let name = cursor.quoted()?;
    let mut scene = SceneDecl::new(id, name);
    if let Some(props) = cursor.bracketed() {
        for prop in split_props(props) {
            if let Some((key, value)) = prop.split_once('=') {
                if key.trim() == "background" {
                    scene.background = Some(unquote(value.trim()).to_string());
                }
            }
        }
    }
    Some(scene)
}

// `OBJECT <id> "<name>" at (<x>, <y>) [prop, prop=val, ...]`
fn parse_object(rest: &str) -> Option<ObjectDecl> {
    let mut cursor = Cursor::new(rest);
    let id = cursor.word()?;
    let name = cursor.quoted()?;
    if cursor.word()? != "at" {
        return None;
    }
    let coords = cursor.parens()?;
    let (x, y) = coords.split_once(',')?;
    let position = Position::new(x.trim().parse().ok()?, y.trim().parse().ok()?);

    let mut decl = ObjectDecl::new(id, name, EntityKind::Generic);
    decl.position = position;
    let mut explicit_kind = None;

    if let Some(props) = cursor.bracketed() {
        for prop in split_props(props) {
            apply_prop(&mut decl, &mut explicit_kind, prop);
        }
    }

    decl.kind = explicit_kind.unwrap_or_else(|| infer_kind(&decl));
    Some(decl)
}

fn apply_prop(decl: &mut ObjectDecl, explicit_kind: &mut Option<EntityKind>, prop: &str) {
    if let Some((key, value)) = prop.split_once('=') {
        let key = key.trim();
        let value = value.trim();
        match key {
            "locked" => decl.locked = Value::parse(value).as_bool().unwrap_or(true),
            "hidden" => decl.hidden = Value::parse(value).as_bool().unwrap_or(true),
            "key_required" => decl.key_required = Some(ObjectId::new(value)),
            "hiding" => decl.hiding.push(ObjectId::new(value)),
            "type" => *explicit_kind = EntityKind::parse(value),
            "description" => decl.description = Some(unquote(value).to_string()),
            "contents" => {
                decl.contents = unquote(value)
                    .split(',')
                    .map(|item| item.trim().to_string())
                    .filter(|item| !item.is_empty())
                    .collect();
            }
            _ => decl.extra.push((key.to_string(), Value::parse(value))),
        }
    } else {
        match prop {
            "locked" => decl.locked = true,
            "hidden" => decl.hidden = true,
            _ => decl.extra.push((prop.to_string(), Value::Bool(true))),
        }
    }
}

/// Recovers the kind for objects with no explicit `type=` property:
/// first from the id, then from kind-implying properties.
pub(crate) fn infer_kind(decl: &ObjectDecl) -> EntityKind {
    let id = decl.id.as_str().to_ascii_lowercase();
    for kind in [
        EntityKind::Door,
        EntityKind::Key,
        EntityKind::Table,
        EntityKind::Box,
    ] {
        if id.contains(kind.token()) {
            return kind;
        }
    }
    if id.contains("chest") {
        return EntityKind::Box;
    }
    if decl.locked || decl.key_required.is_some() {
        return EntityKind::Door;
    }
    if !decl.hiding.is_empty() {
        return EntityKind::Table;
    }
    if !decl.contents.is_empty() {
        return EntityKind::Box;
    }
    EntityKind::Generic
}

// `ACTION <verb> <target1> [<target2>] -> "<message>"`
fn parse_action(scene: &SceneId, rest: &str) -> Option<Rule> {
    let mut cursor = Cursor::new(rest);
    let verb = cursor.word()?;
    let target1 = cursor.word()?;
    let mut rule = Rule::new(scene.clone(), verb, target1);
    if !cursor.literal("->") {
        rule = rule.with_target2(cursor.word()?);
        if !cursor.literal("->") {
            return None;
        }
    }
    Some(rule.with_message(cursor.quoted()?))
}

// `FORBIDDEN <verb> <target> -> "<message>"`
fn parse_forbidden(scene: &SceneId, rest: &str) -> Option<ForbiddenDecl> {
    let mut cursor = Cursor::new(rest);
    let verb = cursor.word()?.to_lowercase();
    let target = cursor.word()?.to_string();
    if !cursor.literal("->") {
        return None;
    }
    Some(ForbiddenDecl {
        scene: scene.clone(),
        verb,
        target,
        message: cursor.quoted()?,
    })
}

fn parse_condition(rest: &str) -> Option<Condition> {
    let rest = rest.trim();
    if let Some(id) = rest.strip_suffix("IN inventory") {
        let id = id.trim();
        if !id.is_empty() {
            return Some(Condition::InInventory(ObjectId::new(id)));
        }
        return None;
    }
    if let Some(scene) = rest.strip_prefix("VISITED ") {
        return Some(Condition::Visited(SceneId::new(scene.trim())));
    }
    if let Some((left, right)) = rest.split_once("!=") {
        let (object, field) = left.trim().split_once('.')?;
        return Some(Condition::FieldNotEquals {
            object: ObjectId::new(object.trim()),
            field: field.trim().to_string(),
            value: Value::parse(right),
        });
    }
    if let Some((left, right)) = rest.split_once('=') {
        let (object, field) = left.trim().split_once('.')?;
        return Some(Condition::FieldEquals {
            object: ObjectId::new(object.trim()),
            field: field.trim().to_string(),
            value: Value::parse(right),
        });
    }
    None
}

fn parse_effect(rest: &str) -> Option<Effect> {
    let rest = rest.trim();
    if rest == "WIN_GAME" {
        return Some(Effect::WinGame);
    }
    if let Some(id) = rest.strip_prefix("SHOW ") {
        return Some(Effect::Show(ObjectId::new(id.trim())));
    }
    if let Some(id) = rest.strip_prefix("HIDE ") {
        return Some(Effect::Hide(ObjectId::new(id.trim())));
    }
    if let Some(id) = rest.strip_prefix("ADD_TO_INVENTORY ") {
        return Some(Effect::AddToInventory(ObjectId::new(id.trim())));
    }
    if let Some(id) = rest.strip_prefix("REMOVE_FROM_INVENTORY ") {
        return Some(Effect::RemoveFromInventory(ObjectId::new(id.trim())));
    }
    if let Some(id) = rest.strip_prefix("CHANGE_SCENE ") {
        return Some(Effect::ChangeScene(SceneId::new(id.trim())));
    }
    if let Some(assignment) = rest.strip_prefix("SET ") {
        let assignment = assignment.trim();
        let split = assignment.find(char::is_whitespace)?;
        let (target, literal) = assignment.split_at(split);
        let (object, field) = target.split_once('.')?;
        let value = Value::parse(literal);
        if object == "game" && field == "won" {
            return match value.as_bool() {
                Some(true) => Some(Effect::SetGameWon),
                _ => None,
            };
        }
        return Some(Effect::Set {
            object: ObjectId::new(object),
            field: field.to_string(),
            value,
        });
    }
    None
}

/// Splits a `[...]` property list on commas that are outside quotes.
fn split_props(props: &str) -> Vec<&str> {
    let mut parts = Vec::new();
    let mut start = 0;
    let mut in_quotes = false;
    for (index, ch) in props.char_indices() {
        match ch {
            '"' => in_quotes = !in_quotes,
            ',' if !in_quotes => {
                let part = props[start..index].trim();
                if !part.is_empty() {
                    parts.push(part);
                }
                start = index + 1;
            }
            _ => {}
        }
    }
    let tail = props[start..].trim();
    if !tail.is_empty() {
        parts.push(tail);
    }
    parts
}

fn unquote(value: &str) -> &str {
    if value.len() >= 2 && value.starts_with('"') && value.ends_with('"') {
        &value[1..value.len() - 1]
    } else {
        value
    }
}

/// Minimal left-to-right scanner over one line.
struct Cursor<'a> {
    rest: &'a str,
}

impl<'a> Cursor<'a> {
    fn new(line: &'a str) -> Self {
        Self { rest: line }
    }

    fn skip_ws(&mut self) {
        self.rest = self.rest.trim_start();
    }

    /// Next whitespace-delimited word.
    fn word(&mut self) -> Option<&'a str> {
        self.skip_ws();
        if self.rest.is_empty() {
            return None;
        }
        let end = self
            .rest
            .find(char::is_whitespace)
            .unwrap_or(self.rest.len());
        let (word, rest) = self.rest.split_at(end);
        self.rest = rest;
        Some(word)
    }

    /// Next `"..."` string, quotes stripped.
    fn quoted(&mut self) -> Option<String> {
        self.skip_ws();
        let after_open = self.rest.strip_prefix('"')?;
        let close = after_open.find('"')?;
        let content = after_open[..close].to_string();
        self.rest = &after_open[close + 1..];
        Some(content)
    }

    /// Consumes an exact token if present.
    fn literal(&mut self, token: &str) -> bool {
        self.skip_ws();
        match self.rest.strip_prefix(token) {
            Some(rest) => {
                self.rest = rest;
                true
            }
            None => false,
        }
    }

    /// Content of the next `(...)` group.
    fn parens(&mut self) -> Option<&'a str> {
        self.skip_ws();
        let after_open = self.rest.strip_prefix('(')?;
        let close = after_open.find(')')?;
        self.rest = &after_open[close + 1..];
        Some(&after_open[..close])
    }

    /// Content of the next `[...]` group.
    fn bracketed(&mut self) -> Option<&'a str> {
        self.skip_ws();
        let after_open = self.rest.strip_prefix('[')?;
        let close = after_open.rfind(']')?;
        self.rest = &after_open[close + 1..];
        Some(&after_open[..close])
    }
}
