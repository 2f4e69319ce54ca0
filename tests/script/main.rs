//! Script layer integration tests.

mod parsing;
mod recovery;
mod round_trip;
