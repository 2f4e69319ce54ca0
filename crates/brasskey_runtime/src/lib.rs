//! Game session, REPL, and CLI for brasskey.
//!
//! This crate provides:
//! - [`Session`] - A loaded script plus its live world state
//! - [`Repl`] - An interactive command loop over a session
//! - [`LineEditor`] / [`RustylineEditor`] - Swappable terminal input

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

mod editor;
mod repl;
mod session;

pub use editor::{LineEditor, ReadResult, RustylineEditor};
pub use repl::Repl;
pub use session::{parse_command, Session};
