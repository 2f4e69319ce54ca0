//! Core types shared by every brasskey layer.
//!
//! This crate provides:
//! - [`ObjectId`] / [`SceneId`] - Stable string identifiers
//! - [`Position`] - 2D placement (presentational only)
//! - [`Value`] - Literal values used by script fields and conditions
//! - [`Error`] - Error types with context
//! - [`Diagnostics`] - The fail-soft diagnostic sink

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

mod diagnostics;
mod error;
mod id;
mod position;
mod value;

pub use diagnostics::{Diagnostic, Diagnostics};
pub use error::{Error, ErrorKind, Result};
pub use id::{ObjectId, SceneId};
pub use position::Position;
pub use value::Value;
