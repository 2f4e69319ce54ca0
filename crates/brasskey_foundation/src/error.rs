//! Error types for the brasskey system.
//!
//! Uses `thiserror` for ergonomic error definition.
//!
//! Player-driven input is total: every verb/target combination resolves
//! to a message, never an error. `Error` covers the boundaries that can
//! genuinely fail, such as loading a script file or starting a session
//! against a definition with no scenes.

use thiserror::Error;

use crate::SceneId;

/// Convenience result alias for brasskey operations.
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for brasskey operations.
#[derive(Debug, Error)]
#[error("{kind}")]
pub struct Error {
    /// The kind of error that occurred.
    pub kind: ErrorKind,
    /// Optional context about where the error occurred.
    pub context: Option<String>,
}

impl Error {
    /// Creates a new error with the given kind.
    #[must_use]
    pub fn new(kind: ErrorKind) -> Self {
        Self {
            kind,
            context: None,
        }
    }

    /// Adds context to this error.
    #[must_use]
    pub fn with_context(mut self, context: impl Into<String>) -> Self {
        self.context = Some(context.into());
        self
    }

    /// Creates an empty-definition error.
    #[must_use]
    pub fn empty_definition() -> Self {
        Self::new(ErrorKind::EmptyDefinition)
    }

    /// Creates a scene-not-found error.
    #[must_use]
    pub fn scene_not_found(id: SceneId) -> Self {
        Self::new(ErrorKind::SceneNotFound(id))
    }

    /// Creates an I/O error with a descriptive message.
    #[must_use]
    pub fn io(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Io(message.into()))
    }

    /// Creates an editor error (REPL line editing failed).
    #[must_use]
    pub fn editor(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Editor(message.into()))
    }
}

impl From<ErrorKind> for Error {
    fn from(kind: ErrorKind) -> Self {
        Self::new(kind)
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Self::io(err.to_string())
    }
}

/// Categorized error kinds for pattern matching.
#[derive(Debug, Error)]
pub enum ErrorKind {
    /// A script definition contained no scenes to start from.
    #[error("script defines no scenes")]
    EmptyDefinition,

    /// A scene id was not present in the definition.
    #[error("scene not found: {0}")]
    SceneNotFound(SceneId),

    /// An I/O operation failed (script file loading).
    #[error("i/o error: {0}")]
    Io(String),

    /// The line editor failed (REPL only).
    #[error("editor error: {0}")]
    Editor(String),
}
