//! World layer integration tests.

mod build;
mod views;
