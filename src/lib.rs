//! Workspace host for `airportdb-core` and `airportdb-cli`.
//!
//! Re-exports the core crate so the demos under `demos/` can be run from the
//! workspace root with `cargo run --example <name>`.
pub use airportdb_core::*;
