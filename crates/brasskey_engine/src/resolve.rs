//! The command resolution pipeline.

use brasskey_foundation::{Diagnostics, ObjectId};
use brasskey_script::WorldDefinition;
use brasskey_world::WorldState;

use crate::actions::{give_to, name_or_id, perform_action, use_with, Message};
use crate::deflect::Deflections;
use crate::effect::{apply_effects, SessionStatus};
use crate::rules::{find_rule, matching_rules, target_matches, unmet_message, verbs_match};
use crate::verb::{normalize, Verb};

/// What a resolved command produced.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Resolution {
    /// The player-facing response line.
    pub message: Message,
    /// Whether the session continues.
    pub status: SessionStatus,
}

impl Resolution {
    fn running(message: impl Into<Message>) -> Self {
        Self {
            message: message.into(),
            status: SessionStatus::Running,
        }
    }
}

/// Resolves player commands against a definition and live world state.
///
/// Resolution order for a complete command:
/// 1. scripted rules in the active scene (declaration order, skipping
///    rules whose preconditions fail);
/// 2. an unmet-requirement message if rules matched but none fired;
/// 3. scripted `FORBIDDEN` refusals;
/// 4. the target entity's default verb table;
/// 5. a seeded deflection.
///
/// Two-operand verbs (`use`, `give`) arriving with a single target are
/// held as a pending selection; the next target completes them, and
/// repeating the pending target resolves the verb on it alone. Any
/// completed resolution clears the pending selection.
#[derive(Debug)]
pub struct Resolver {
    deflections: Deflections,
}

impl Resolver {
    /// Creates a resolver; the seed fixes the deflection sequence.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            deflections: Deflections::new(seed),
        }
    }

    /// Resolves one command.
    pub fn resolve(
        &mut self,
        definition: &WorldDefinition,
        world: &mut WorldState,
        diagnostics: &mut Diagnostics,
        verb: &str,
        target: &str,
        second: Option<&str>,
    ) -> Resolution {
        let token = normalize(verb);
        let parsed = Verb::parse(&token);

        let mut first = target.to_string();
        let mut second: Option<String> = second.map(str::to_string);

        // Two-operand verbs may arrive one click at a time.
        if second.is_none() && parsed.is_some_and(Verb::is_two_operand) {
            match world.clear_pending() {
                Some(pending) if pending.verb == token && pending.first.as_str() != target => {
                    second = Some(first);
                    first = pending.first.as_str().to_string();
                }
                // Repeating the pending target completes the verb on it
                // alone (e.g. turning a key with nothing to unlock).
                Some(pending) if pending.verb == token => {}
                _ => {
                    let id = ObjectId::new(target);
                    let name = name_or_id(world, &id);
                    world.set_pending(token.clone(), id);
                    let prompt = if parsed == Some(Verb::Give) {
                        format!("Give the {name} to whom?")
                    } else {
                        format!("Use the {name} with what?")
                    };
                    return Resolution::running(prompt);
                }
            }
        }

        // Scripted rules take precedence over entity defaults.
        let candidates = matching_rules(definition, world, &token, &first, second.as_deref());
        if !candidates.is_empty() {
            if let Some(rule) = find_rule(definition, world, &token, &first, second.as_deref()) {
                let status = apply_effects(&rule.effects, world, diagnostics);
                world.clear_pending();
                return Resolution {
                    message: rule.message.clone(),
                    status,
                };
            }
            let message = unmet_message(candidates[0], world);
            world.clear_pending();
            return Resolution::running(message);
        }

        let first_id = ObjectId::new(first.as_str());
        let message = match &second {
            Some(second) => {
                let second_id = ObjectId::new(second.as_str());
                if parsed == Some(Verb::Give) {
                    give_to(world, &mut self.deflections, &first_id, &second_id)
                } else {
                    use_with(world, &mut self.deflections, &first_id, &second_id)
                }
            }
            None => {
                if let Some(message) = forbidden_message(definition, world, &token, &first) {
                    message
                } else if let Some(verb) = parsed {
                    perform_action(world, &mut self.deflections, &first_id, verb)
                } else {
                    self.deflections.nothing_happens().to_string()
                }
            }
        };
        world.clear_pending();
        Resolution::running(message)
    }
}

/// The first scripted refusal matching the command, if any.
fn forbidden_message(
    definition: &WorldDefinition,
    world: &WorldState,
    verb: &str,
    target: &str,
) -> Option<Message> {
    definition
        .forbidden
        .iter()
        .filter(|entry| &entry.scene == world.current_scene_id())
        .find(|entry| verbs_match(&entry.verb, verb) && target_matches(&entry.target, target, world))
        .map(|entry| entry.message.clone())
}
