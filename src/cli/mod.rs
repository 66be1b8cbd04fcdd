//! Command implementations for the `ugraph` binary.

pub mod commands;

pub use commands::WalkOrder;
