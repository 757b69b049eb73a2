//! Core traits for the voice ledger
//!
//! Components implement these traits to enable pluggable backends and
//! testing with mocks.

mod catalog;

pub use catalog::CategoryProvider;
