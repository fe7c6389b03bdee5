//! Domain model for user identities.
//!
//! The identity domain models registered accounts: a unique username, a
//! unique email address, and a salted password hash. No infrastructure
//! concerns cross the domain boundary.

mod error;
mod ids;
mod password;
mod user;

pub use error::IdentityDomainError;
pub use ids::{EmailAddress, UserId, Username};
pub use password::PasswordHash;
pub use user::{Identity, PersistedIdentityData};
