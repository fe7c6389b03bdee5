//! End-to-end flows through the router over in-memory stores.
//!
//! These tests drive the full HTTP surface — session layer, guards,
//! handlers, and templates — without a database, asserting on redirects,
//! cookies, and rendered page content.

#![expect(
    clippy::expect_used,
    reason = "Test code uses expect for assertion clarity"
)]
#![expect(
    clippy::indexing_slicing,
    reason = "Test code uses indexing after length checks"
)]

use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use axum::http::{Request, Response, StatusCode, header};
use http_body_util::BodyExt;
use mockable::DefaultClock;
use tower::ServiceExt;

use taskboard::identity::adapters::InMemoryCredentialStore;
use taskboard::identity::services::AccountService;
use taskboard::session::{SessionConfig, SessionManager, SessionSecret};
use taskboard::tasks::adapters::InMemoryTaskStore;
use taskboard::tasks::domain::{TaskId, TaskStatus};
use taskboard::tasks::services::TaskLifecycleService;
use taskboard::web::views::ViewEngine;
use taskboard::web::{AppState, router};

/// Router plus out-of-band handles for seeding and inspecting state.
struct TestApp {
    app: Router,
    tasks: TaskLifecycleService<InMemoryTaskStore, DefaultClock>,
    sessions: SessionManager<DefaultClock>,
}

fn test_app() -> TestApp {
    let clock = Arc::new(DefaultClock);
    let credentials = Arc::new(InMemoryCredentialStore::new());
    let task_store = Arc::new(InMemoryTaskStore::new());
    let secret = SessionSecret::new("integration-test-secret-of-decent-length");
    let sessions = SessionManager::new(SessionConfig::default(), secret, Arc::clone(&clock));
    let tasks = TaskLifecycleService::new(Arc::clone(&task_store), Arc::clone(&clock));

    let state = AppState::new(
        AccountService::new(credentials, Arc::clone(&clock)),
        tasks.clone(),
        sessions.clone(),
        Arc::new(ViewEngine::new().expect("templates should compile")),
    );

    TestApp {
        app: router(state),
        tasks,
        sessions,
    }
}

fn get(uri: &str) -> Request<Body> {
    Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .expect("request should build")
}

fn get_with_cookie(uri: &str, cookie: &str) -> Request<Body> {
    Request::builder()
        .method("GET")
        .uri(uri)
        .header(header::COOKIE, cookie)
        .body(Body::empty())
        .expect("request should build")
}

fn post_form(uri: &str, body: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::from(body.to_owned()))
        .expect("request should build")
}

fn post_form_with_cookie(uri: &str, cookie: &str, body: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::COOKIE, cookie)
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::from(body.to_owned()))
        .expect("request should build")
}

/// Extracts the `name=token` pair from a response's `Set-Cookie` header.
fn session_cookie(response: &Response<Body>) -> String {
    let set_cookie = response
        .headers()
        .get(header::SET_COOKIE)
        .expect("response should set a session cookie")
        .to_str()
        .expect("cookie should be ASCII");
    set_cookie
        .split(';')
        .next()
        .expect("cookie should have a name-value pair")
        .to_owned()
}

fn location(response: &Response<Body>) -> &str {
    response
        .headers()
        .get(header::LOCATION)
        .expect("response should redirect")
        .to_str()
        .expect("location should be ASCII")
}

async fn body_text(response: Response<Body>) -> String {
    let bytes = response
        .into_body()
        .collect()
        .await
        .expect("body should collect")
        .to_bytes();
    String::from_utf8(bytes.to_vec()).expect("body should be UTF-8")
}

/// Registers a user through the HTTP surface and returns the session cookie.
async fn register(app: &Router, username: &str, email_local: &str) -> String {
    let body = format!("username={username}&email={email_local}%40example.com&password=hunter22");
    let response = app
        .clone()
        .oneshot(post_form("/register", &body))
        .await
        .expect("request should succeed");
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&response), "/dashboard");
    session_cookie(&response)
}

/// Resolves the first task id for the user behind a session cookie.
async fn sole_task_id(test: &TestApp, cookie: &str) -> TaskId {
    let claims = test
        .sessions
        .resolve(Some(cookie))
        .expect("session should resolve");
    let listed = test
        .tasks
        .list(claims.user_id)
        .await
        .expect("listing should succeed");
    assert_eq!(listed.len(), 1);
    listed[0].id()
}

#[tokio::test(flavor = "multi_thread")]
async fn registration_establishes_session_and_lands_on_dashboard() {
    let test = test_app();
    let cookie = register(&test.app, "alice", "alice").await;

    let response = test
        .app
        .clone()
        .oneshot(get_with_cookie("/dashboard", &cookie))
        .await
        .expect("request should succeed");

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_text(response).await;
    assert!(body.contains("alice"));
}

#[tokio::test(flavor = "multi_thread")]
async fn registration_with_missing_fields_rerenders_form() {
    let test = test_app();

    let response = test
        .app
        .clone()
        .oneshot(post_form("/register", "username=alice&email=&password="))
        .await
        .expect("request should succeed");

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_text(response).await;
    assert!(body.contains("All fields are required."));
}

#[tokio::test(flavor = "multi_thread")]
async fn duplicate_registration_rerenders_with_generic_message() {
    let test = test_app();
    register(&test.app, "alice", "alice").await;

    let response = test
        .app
        .clone()
        .oneshot(post_form(
            "/register",
            "username=alice&email=other%40example.com&password=hunter22",
        ))
        .await
        .expect("request should succeed");

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_text(response).await;
    assert!(body.contains("Username or email already exists."));
}

#[tokio::test(flavor = "multi_thread")]
async fn login_round_trip_reaches_dashboard() {
    let test = test_app();
    register(&test.app, "alice", "alice").await;

    let response = test
        .app
        .clone()
        .oneshot(post_form("/login", "username=alice&password=hunter22"))
        .await
        .expect("request should succeed");

    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&response), "/dashboard");
    let cookie = session_cookie(&response);

    let dashboard = test
        .app
        .clone()
        .oneshot(get_with_cookie("/dashboard", &cookie))
        .await
        .expect("request should succeed");
    assert_eq!(dashboard.status(), StatusCode::OK);
}

#[tokio::test(flavor = "multi_thread")]
async fn failed_login_rerenders_preserving_username() {
    let test = test_app();
    register(&test.app, "alice", "alice").await;

    let response = test
        .app
        .clone()
        .oneshot(post_form("/login", "username=alice&password=wrong"))
        .await
        .expect("request should succeed");

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_text(response).await;
    assert!(body.contains("Invalid username or password."));
    assert!(body.contains("value=\"alice\""));
}

#[tokio::test(flavor = "multi_thread")]
async fn protected_routes_redirect_anonymous_callers_to_login() {
    let test = test_app();

    for uri in ["/dashboard", "/tasks/add"] {
        let response = test
            .app
            .clone()
            .oneshot(get(uri))
            .await
            .expect("request should succeed");
        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        assert_eq!(location(&response), "/login");
    }
}

#[tokio::test(flavor = "multi_thread")]
async fn auth_pages_redirect_signed_in_callers_to_dashboard() {
    let test = test_app();
    let cookie = register(&test.app, "alice", "alice").await;

    for uri in ["/login", "/register"] {
        let response = test
            .app
            .clone()
            .oneshot(get_with_cookie(uri, &cookie))
            .await
            .expect("request should succeed");
        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        assert_eq!(location(&response), "/dashboard");
    }
}

#[tokio::test(flavor = "multi_thread")]
async fn logout_clears_the_session_cookie() {
    let test = test_app();
    let cookie = register(&test.app, "alice", "alice").await;

    let response = test
        .app
        .clone()
        .oneshot(get_with_cookie("/logout", &cookie))
        .await
        .expect("request should succeed");

    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&response), "/login");
    let set_cookie = response
        .headers()
        .get(header::SET_COOKIE)
        .expect("logout should clear the cookie")
        .to_str()
        .expect("cookie should be ASCII");
    assert!(set_cookie.contains("Max-Age=0"));
}

#[tokio::test(flavor = "multi_thread")]
async fn created_task_appears_on_the_dashboard() {
    let test = test_app();
    let cookie = register(&test.app, "alice", "alice").await;

    let response = test
        .app
        .clone()
        .oneshot(post_form_with_cookie(
            "/tasks/add",
            &cookie,
            "title=Water+the+plants&description=Back+garden&due_date=2026-09-04&status=pending",
        ))
        .await
        .expect("request should succeed");
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&response), "/dashboard");

    let dashboard = test
        .app
        .clone()
        .oneshot(get_with_cookie("/dashboard", &cookie))
        .await
        .expect("request should succeed");
    let body = body_text(dashboard).await;
    assert!(body.contains("Water the plants"));
    assert!(body.contains("2026-09-04"));
}

#[tokio::test(flavor = "multi_thread")]
async fn blank_title_rerenders_the_add_form() {
    let test = test_app();
    let cookie = register(&test.app, "alice", "alice").await;

    let response = test
        .app
        .clone()
        .oneshot(post_form_with_cookie(
            "/tasks/add",
            &cookie,
            "title=+&description=&due_date=&status=pending",
        ))
        .await
        .expect("request should succeed");

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_text(response).await;
    assert!(body.contains("Title is required."));
}

#[tokio::test(flavor = "multi_thread")]
async fn completing_a_task_preserves_its_other_fields() {
    let test = test_app();
    let cookie = register(&test.app, "alice", "alice").await;
    test.app
        .clone()
        .oneshot(post_form_with_cookie(
            "/tasks/add",
            &cookie,
            "title=File+expenses&description=Q3&due_date=2026-09-30&status=in_progress",
        ))
        .await
        .expect("request should succeed");
    let id = sole_task_id(&test, &cookie).await;

    let response = test
        .app
        .clone()
        .oneshot(post_form_with_cookie(
            &format!("/tasks/complete/{id}"),
            &cookie,
            "",
        ))
        .await
        .expect("request should succeed");
    assert_eq!(response.status(), StatusCode::SEE_OTHER);

    let claims = test
        .sessions
        .resolve(Some(&cookie))
        .expect("session should resolve");
    let task = test
        .tasks
        .fetch(claims.user_id, id)
        .await
        .expect("fetch should succeed")
        .expect("task should exist");
    assert_eq!(task.status(), TaskStatus::Completed);
    assert_eq!(task.title(), "File expenses");
    assert_eq!(task.description(), Some("Q3"));
}

#[tokio::test(flavor = "multi_thread")]
async fn deleting_a_task_removes_it_from_the_dashboard() {
    let test = test_app();
    let cookie = register(&test.app, "alice", "alice").await;
    test.app
        .clone()
        .oneshot(post_form_with_cookie(
            "/tasks/add",
            &cookie,
            "title=Temporary&description=&due_date=&status=pending",
        ))
        .await
        .expect("request should succeed");
    let id = sole_task_id(&test, &cookie).await;

    let response = test
        .app
        .clone()
        .oneshot(post_form_with_cookie(
            &format!("/tasks/delete/{id}"),
            &cookie,
            "",
        ))
        .await
        .expect("request should succeed");
    assert_eq!(response.status(), StatusCode::SEE_OTHER);

    let dashboard = test
        .app
        .clone()
        .oneshot(get_with_cookie("/dashboard", &cookie))
        .await
        .expect("request should succeed");
    let body = body_text(dashboard).await;
    assert!(!body.contains("Temporary"));
}

#[tokio::test(flavor = "multi_thread")]
async fn another_users_task_cannot_be_completed() {
    let test = test_app();
    let alice = register(&test.app, "alice", "alice").await;
    let bob = register(&test.app, "bob", "bob").await;
    test.app
        .clone()
        .oneshot(post_form_with_cookie(
            "/tasks/add",
            &alice,
            "title=Private&description=&due_date=&status=pending",
        ))
        .await
        .expect("request should succeed");
    let id = sole_task_id(&test, &alice).await;

    let response = test
        .app
        .clone()
        .oneshot(post_form_with_cookie(
            &format!("/tasks/complete/{id}"),
            &bob,
            "",
        ))
        .await
        .expect("request should succeed");

    // The miss is indistinguishable from success.
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&response), "/dashboard");

    let claims = test
        .sessions
        .resolve(Some(&alice))
        .expect("session should resolve");
    let task = test
        .tasks
        .fetch(claims.user_id, id)
        .await
        .expect("fetch should succeed")
        .expect("task should exist");
    assert_eq!(task.status(), TaskStatus::Pending);
}

#[tokio::test(flavor = "multi_thread")]
async fn another_users_edit_page_redirects_silently() {
    let test = test_app();
    let alice = register(&test.app, "alice", "alice").await;
    let bob = register(&test.app, "bob", "bob").await;
    test.app
        .clone()
        .oneshot(post_form_with_cookie(
            "/tasks/add",
            &alice,
            "title=Private&description=&due_date=&status=pending",
        ))
        .await
        .expect("request should succeed");
    let id = sole_task_id(&test, &alice).await;

    let response = test
        .app
        .clone()
        .oneshot(get_with_cookie(&format!("/tasks/edit/{id}"), &bob))
        .await
        .expect("request should succeed");

    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&response), "/dashboard");
}

#[tokio::test(flavor = "multi_thread")]
async fn unparseable_task_id_redirects_like_a_miss() {
    let test = test_app();
    let cookie = register(&test.app, "alice", "alice").await;

    let response = test
        .app
        .clone()
        .oneshot(get_with_cookie("/tasks/edit/not-a-uuid", &cookie))
        .await
        .expect("request should succeed");

    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&response), "/dashboard");
}

#[tokio::test(flavor = "multi_thread")]
async fn editing_overwrites_fields_and_shows_on_dashboard() {
    let test = test_app();
    let cookie = register(&test.app, "alice", "alice").await;
    test.app
        .clone()
        .oneshot(post_form_with_cookie(
            "/tasks/add",
            &cookie,
            "title=Old+title&description=Old&due_date=2026-09-01&status=pending",
        ))
        .await
        .expect("request should succeed");
    let id = sole_task_id(&test, &cookie).await;

    let response = test
        .app
        .clone()
        .oneshot(post_form_with_cookie(
            &format!("/tasks/edit/{id}"),
            &cookie,
            "title=New+title&description=&due_date=&status=in_progress",
        ))
        .await
        .expect("request should succeed");
    assert_eq!(response.status(), StatusCode::SEE_OTHER);

    let dashboard = test
        .app
        .clone()
        .oneshot(get_with_cookie("/dashboard", &cookie))
        .await
        .expect("request should succeed");
    let body = body_text(dashboard).await;
    assert!(body.contains("New title"));
    assert!(!body.contains("Old title"));
}
