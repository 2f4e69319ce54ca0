//! Diagnostic sink for fail-soft recovery.
//!
//! The parser and the effect applier never abort on bad input: a
//! malformed line is skipped, an unknown id becomes a no-op, and either
//! way the anomaly lands here so callers (tests, developer tooling) can
//! see exactly what was ignored.

use std::fmt;

use crate::{ObjectId, SceneId};

/// A single recovered anomaly.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Diagnostic {
    /// A script line could not be parsed and was skipped.
    SkippedLine {
        /// 1-based line number in the source text.
        line: usize,
        /// The offending line text.
        text: String,
        /// Why the line was skipped.
        reason: String,
    },
    /// A rule or forbidden entry appeared before any `SCENE` header.
    OutsideScene {
        /// 1-based line number in the source text.
        line: usize,
        /// The offending line text.
        text: String,
    },
    /// An effect or condition referenced an object that does not exist.
    UnknownObject {
        /// The dangling object id.
        id: ObjectId,
    },
    /// An effect referenced a scene that does not exist.
    UnknownScene {
        /// The dangling scene id.
        id: SceneId,
    },
    /// A `SET` effect wrote a value of the wrong type; the write was dropped.
    BadFieldWrite {
        /// The target object.
        id: ObjectId,
        /// The field that rejected the value.
        field: String,
    },
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::SkippedLine { line, text, reason } => {
                write!(f, "line {line}: skipped `{text}` ({reason})")
            }
            Self::OutsideScene { line, text } => {
                write!(f, "line {line}: `{text}` declared before any SCENE")
            }
            Self::UnknownObject { id } => write!(f, "unknown object: {id}"),
            Self::UnknownScene { id } => write!(f, "unknown scene: {id}"),
            Self::BadFieldWrite { id, field } => {
                write!(f, "dropped ill-typed write to {id}.{field}")
            }
        }
    }
}

/// Collects diagnostics across a load or a resolve call.
#[derive(Clone, Debug, Default)]
pub struct Diagnostics {
    entries: Vec<Diagnostic>,
}

impl Diagnostics {
    /// Creates an empty sink.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a diagnostic.
    pub fn push(&mut self, diagnostic: Diagnostic) {
        self.entries.push(diagnostic);
    }

    /// Records a skipped line.
    pub fn skipped_line(&mut self, line: usize, text: &str, reason: impl Into<String>) {
        self.push(Diagnostic::SkippedLine {
            line,
            text: text.to_string(),
            reason: reason.into(),
        });
    }

    /// Records an unknown object reference.
    pub fn unknown_object(&mut self, id: ObjectId) {
        self.push(Diagnostic::UnknownObject { id });
    }

    /// Records an unknown scene reference.
    pub fn unknown_scene(&mut self, id: SceneId) {
        self.push(Diagnostic::UnknownScene { id });
    }

    /// Returns all recorded entries.
    #[must_use]
    pub fn entries(&self) -> &[Diagnostic] {
        &self.entries
    }

    /// Returns true if nothing was recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns the number of recorded entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Removes and returns all recorded entries.
    pub fn drain(&mut self) -> Vec<Diagnostic> {
        std::mem::take(&mut self.entries)
    }
}
