//! # altercheck-core
//!
//! Domain types for the ALTER TABLE verification harness:
//! table captures, query specs, the ADD COLUMN statement predicate,
//! harness configuration, and the error taxonomy.

pub mod capture;
pub mod config;
pub mod errors;
pub mod query_spec;
pub mod validator;
