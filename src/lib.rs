//! Brasskey - Scripted scene and action interpreter
//!
//! This crate re-exports all layers of the brasskey system for convenient
//! access. For detailed documentation, see the individual layer crates.
//!
//! # Architecture
//!
//! ```text
//! Layer 4: brasskey_runtime    — Session, REPL, CLI
//! Layer 3: brasskey_engine     — Verbs, rules, effects, deflections
//! Layer 2: brasskey_script     — Script parsing and instantiation
//! Layer 1: brasskey_world      — Entities, scenes, inventory, world state
//! Layer 0: brasskey_foundation — Core types (ids, values, errors, diagnostics)
//! ```

pub use brasskey_engine as engine;
pub use brasskey_foundation as foundation;
pub use brasskey_runtime as runtime;
pub use brasskey_script as script;
pub use brasskey_world as world;
