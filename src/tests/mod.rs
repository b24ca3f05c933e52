//! Larger, cross-module end-to-end tests, kept separate from the colocated
//! `#[cfg(test)]` units in each module the same way the teacher splits
//! per-module unit tests from its `src/tests/` integration suite.

mod scenarios;
