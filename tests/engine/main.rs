//! Engine layer integration tests.

mod invariants;
mod precedence;
