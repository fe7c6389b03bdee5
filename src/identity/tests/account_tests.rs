//! Account service tests for registration and login behaviour.

use std::sync::Arc;

use crate::identity::{
    adapters::memory::InMemoryCredentialStore,
    domain::IdentityDomainError,
    services::{AccountError, AccountService, Registration},
};
use mockable::DefaultClock;
use rstest::{fixture, rstest};

type TestService = AccountService<InMemoryCredentialStore, DefaultClock>;

#[fixture]
fn service() -> TestService {
    AccountService::new(
        Arc::new(InMemoryCredentialStore::new()),
        Arc::new(DefaultClock),
    )
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn register_then_authenticate_round_trips(service: TestService) {
    let registered = service
        .register(Registration::new("alice", "alice@example.com", "hunter22"))
        .await
        .expect("registration should succeed");

    let authenticated = service
        .authenticate("alice", "hunter22")
        .await
        .expect("authentication should succeed");

    assert_eq!(authenticated.id(), registered.id());
    assert_eq!(authenticated.username().as_str(), "alice");
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn register_rejects_invalid_email(service: TestService) {
    let result = service
        .register(Registration::new("alice", "not-an-email", "hunter22"))
        .await;

    assert!(matches!(
        result,
        Err(AccountError::Domain(IdentityDomainError::InvalidEmail(_)))
    ));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn register_rejects_empty_password(service: TestService) {
    let result = service
        .register(Registration::new("alice", "alice@example.com", ""))
        .await;

    assert!(matches!(
        result,
        Err(AccountError::Domain(IdentityDomainError::EmptyPassword))
    ));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn duplicate_username_reports_taken_without_detail(service: TestService) {
    service
        .register(Registration::new("alice", "alice@example.com", "hunter22"))
        .await
        .expect("registration should succeed");

    let result = service
        .register(Registration::new("alice", "other@example.com", "hunter22"))
        .await;

    assert!(matches!(result, Err(AccountError::Taken)));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn duplicate_email_reports_taken_without_detail(service: TestService) {
    service
        .register(Registration::new("alice", "alice@example.com", "hunter22"))
        .await
        .expect("registration should succeed");

    let result = service
        .register(Registration::new("bob", "alice@example.com", "hunter22"))
        .await;

    assert!(matches!(result, Err(AccountError::Taken)));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn duplicate_email_lookup_is_case_insensitive(service: TestService) {
    service
        .register(Registration::new("alice", "alice@example.com", "hunter22"))
        .await
        .expect("registration should succeed");

    let result = service
        .register(Registration::new("bob", "ALICE@Example.com", "hunter22"))
        .await;

    assert!(matches!(result, Err(AccountError::Taken)));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn unknown_username_and_wrong_password_are_indistinguishable(service: TestService) {
    service
        .register(Registration::new("alice", "alice@example.com", "hunter22"))
        .await
        .expect("registration should succeed");

    let missing = service.authenticate("mallory", "hunter22").await;
    let wrong_password = service.authenticate("alice", "wrong").await;

    assert!(matches!(missing, Err(AccountError::InvalidCredentials)));
    assert!(matches!(
        wrong_password,
        Err(AccountError::InvalidCredentials)
    ));
}

#[rstest]
fn registration_debug_output_redacts_the_password() {
    let registration = Registration::new("alice", "alice@example.com", "hunter22");

    let debug = format!("{registration:?}");

    assert!(debug.contains("[REDACTED]"));
    assert!(!debug.contains("hunter22"));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn authenticate_trims_submitted_username(service: TestService) {
    service
        .register(Registration::new("alice", "alice@example.com", "hunter22"))
        .await
        .expect("registration should succeed");

    let authenticated = service.authenticate("  alice  ", "hunter22").await;

    assert!(authenticated.is_ok());
}
