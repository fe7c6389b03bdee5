//! Unit tests for the tasks module.
//!
//! Tests are organised by concern: domain validation and lifecycle rules,
//! service orchestration over the in-memory store, and ownership scoping.

mod domain_tests;
