//! Orchestration services for account registration and login.

pub mod accounts;

pub use accounts::{AccountError, AccountResult, AccountService, Registration};
