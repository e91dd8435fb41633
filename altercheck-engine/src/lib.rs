//! # altercheck-engine
//!
//! The execution-and-comparison pipeline: query loading, migration
//! execution with failure capture, table dumping, the name-keyed
//! fixture store, the three-way capture comparison, and the per-fixture
//! runner that ties them together.

pub mod compare;
pub mod executor;
pub mod fixtures;
pub mod introspect;
pub mod loader;
pub mod render;
pub mod runner;
pub mod seed;
