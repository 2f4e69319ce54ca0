//! A loaded script and its live world.

use brasskey_engine::{can_interact, Resolution, Resolver, SessionStatus, Verb};
use brasskey_foundation::{Diagnostic, Diagnostics, ObjectId, Result};
use brasskey_script::WorldDefinition;
use brasskey_world::{InventoryView, SceneView, WorldState};

/// One playthrough: the immutable definition, the mutable world, and a
/// resolver whose deflection sequence is fixed by the seed.
#[derive(Debug)]
pub struct Session {
    definition: WorldDefinition,
    world: WorldState,
    resolver: Resolver,
    diagnostics: Diagnostics,
    status: SessionStatus,
}

impl Session {
    /// Loads a script and instantiates its world.
    ///
    /// Malformed script lines are skipped and kept as diagnostics on the
    /// session; they never abort the load.
    ///
    /// # Errors
    ///
    /// Returns an error if the script declares no scenes.
    pub fn from_script(source: &str, seed: u64) -> Result<Self> {
        let mut diagnostics = Diagnostics::new();
        let definition = brasskey_script::load(source, &mut diagnostics);
        let world = definition.instantiate()?;
        Ok(Self {
            definition,
            world,
            resolver: Resolver::new(seed),
            diagnostics,
            status: SessionStatus::Running,
        })
    }

    /// Resolves one structured command.
    pub fn resolve(&mut self, verb: &str, target: &str, second: Option<&str>) -> Resolution {
        let resolution = self.resolver.resolve(
            &self.definition,
            &mut self.world,
            &mut self.diagnostics,
            verb,
            target,
            second,
        );
        if resolution.status == SessionStatus::Won {
            self.status = SessionStatus::Won;
        }
        resolution
    }

    /// Parses and resolves one command line.
    pub fn command(&mut self, line: &str) -> String {
        match parse_command(line) {
            Some((verb, target, second)) => self.resolve(&verb, &target, second.as_deref()).message,
            None => "Try: <verb> <object> [with <object>]".to_string(),
        }
    }

    /// Whether a verb would do anything to this entity right now.
    #[must_use]
    pub fn can_interact(&self, id: &ObjectId, verb: Verb) -> bool {
        can_interact(&self.world, id, verb)
    }

    /// The loaded definition.
    #[must_use]
    pub const fn definition(&self) -> &WorldDefinition {
        &self.definition
    }

    /// The live world state.
    #[must_use]
    pub const fn world(&self) -> &WorldState {
        &self.world
    }

    /// The live world state, mutably.
    pub fn world_mut(&mut self) -> &mut WorldState {
        &mut self.world
    }

    /// Whether the session is still accepting commands.
    #[must_use]
    pub const fn status(&self) -> SessionStatus {
        self.status
    }

    /// Snapshot of the active scene for rendering.
    #[must_use]
    pub fn scene_view(&self) -> SceneView {
        self.world.scene_view()
    }

    /// Snapshot of the inventory for rendering.
    #[must_use]
    pub fn inventory_view(&self) -> InventoryView {
        self.world.inventory_view()
    }

    /// Diagnostics accumulated so far (load plus resolution).
    #[must_use]
    pub fn diagnostics(&self) -> &[Diagnostic] {
        self.diagnostics.entries()
    }

    /// Removes and returns accumulated diagnostics.
    pub fn drain_diagnostics(&mut self) -> Vec<Diagnostic> {
        self.diagnostics.drain()
    }
}

/// Splits a command line into verb, target, and optional second target.
///
/// The two-word verbs (`look at`, `pick up`, `talk to`) are joined; the
/// separators `with`, `on`, and `to` introduce a second target:
/// `use key with door`, `give coin to guard`.
#[must_use]
pub fn parse_command(line: &str) -> Option<(String, String, Option<String>)> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    if tokens.len() < 2 {
        return None;
    }
    let head = tokens[0].to_lowercase();
    let compound = matches!(
        (head.as_str(), tokens.get(1).map(|t| t.to_lowercase()).as_deref()),
        ("look", Some("at")) | ("pick", Some("up")) | ("talk", Some("to"))
    );
    let (verb, rest): (String, &[&str]) = if compound {
        (format!("{head}_{}", tokens[1].to_lowercase()), &tokens[2..])
    } else {
        (head, &tokens[1..])
    };
    let target = (*rest.first()?).to_string();
    let second = match rest.get(1).map(|token| token.to_lowercase()) {
        Some(sep) if sep == "with" || sep == "on" || sep == "to" => {
            rest.get(2).map(|token| (*token).to_string())
        }
        _ => None,
    };
    Some((verb, target, second))
}
