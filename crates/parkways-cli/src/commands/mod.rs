//! CLI command implementations

pub mod completions;
pub mod park;
pub mod trip;
pub mod visitor;
