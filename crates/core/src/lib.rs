//! Shared domain types for the prompt vault service.
//!
//! Nothing in this crate performs I/O; the `db` and `api` crates build on
//! these types.

pub mod error;
pub mod patch;
pub mod prompt;
pub mod types;
