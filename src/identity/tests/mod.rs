//! Unit tests for the identity module.
//!
//! Tests cover field validation in the domain layer and the coarse error
//! behaviour of the account service over the in-memory store.

mod account_tests;
