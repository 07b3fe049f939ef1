//! World implementations for the harness runner.

pub mod graph;
pub mod maze;
