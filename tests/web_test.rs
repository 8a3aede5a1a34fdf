//! End-to-end tests driving the real router over an in-memory database.
//!
//! Each test builds the full application (repositories, services, templates,
//! session key) and exercises it through HTTP requests, cookies included.

use std::sync::Arc;

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use axum::response::Response;
use axum::Router;
use axum_extra::extract::cookie::Key;
use sea_orm::ConnectOptions;
use sea_orm_migration::MigratorTrait;
use tower::ServiceExt;

use alumnet::api::views::Views;
use alumnet::api::{create_router, AppState};
use alumnet::infra::{Database, Migrator, RequestLedger, UserStore};
use alumnet::services::{Authenticator, MentorshipManager};

/// Build the application over a fresh in-memory database. The pool is
/// pinned to a single connection so every query sees the same database.
async fn test_app() -> Router {
    let mut options = ConnectOptions::new("sqlite::memory:");
    options.max_connections(1);

    let conn = sea_orm::Database::connect(options)
        .await
        .expect("Failed to connect to test database");
    Migrator::up(&conn, None)
        .await
        .expect("Failed to run migrations");

    let database = Arc::new(Database::from_connection(conn));
    let users = Arc::new(UserStore::new(database.get_connection()));
    let requests = Arc::new(RequestLedger::new(database.get_connection()));

    let state = AppState::new(
        Arc::new(Authenticator::new(users.clone())),
        Arc::new(MentorshipManager::new(users, requests)),
        Arc::new(Views::from_dir("templates").expect("Failed to load templates")),
        database,
        Key::derive_from(b"integration-test-session-secret-0123456789"),
    );

    create_router(state)
}

fn get(path: &str, cookie: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder().method("GET").uri(path);
    if let Some(cookie) = cookie {
        builder = builder.header(header::COOKIE, cookie);
    }
    builder.body(Body::empty()).unwrap()
}

fn post_form(path: &str, body: &str, cookie: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder()
        .method("POST")
        .uri(path)
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded");
    if let Some(cookie) = cookie {
        builder = builder.header(header::COOKIE, cookie);
    }
    builder.body(Body::from(body.to_string())).unwrap()
}

async fn send(app: &Router, request: Request<Body>) -> Response {
    app.clone().oneshot(request).await.unwrap()
}

async fn body_text(response: Response) -> String {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}

/// The session cookie pair (`name=value`) from a login response.
fn session_cookie(response: &Response) -> String {
    let header = response
        .headers()
        .get(header::SET_COOKIE)
        .expect("response carries no Set-Cookie header")
        .to_str()
        .unwrap();
    header.split(';').next().unwrap().to_string()
}

fn location(response: &Response) -> &str {
    response
        .headers()
        .get(header::LOCATION)
        .expect("response carries no Location header")
        .to_str()
        .unwrap()
}

/// Register with the shared test password; profile fields left blank.
async fn register_user(app: &Router, name: &str, email: &str, role: &str) {
    let body = format!("name={}&email={}&password=secret-pw&role={}", name, email, role);
    let response = send(app, post_form("/register", &body, None)).await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&response), "/login");
}

async fn login_user(app: &Router, email: &str) -> String {
    let body = format!("email={}&password=secret-pw", email);
    let response = send(app, post_form("/login", &body, None)).await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&response), "/dashboard");
    session_cookie(&response)
}

#[tokio::test]
async fn the_landing_page_renders() {
    let app = test_app().await;

    let response = send(&app, get("/", None)).await;
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_text(response).await;
    assert!(body.contains("Alumnet"));
}

#[tokio::test]
async fn the_auth_pages_render() {
    let app = test_app().await;

    for path in ["/register", "/login"] {
        let response = send(&app, get(path, None)).await;
        assert_eq!(response.status(), StatusCode::OK);
        let body = body_text(response).await;
        assert!(body.contains("<form"));
    }
}

#[tokio::test]
async fn the_health_endpoint_reports_the_database() {
    let app = test_app().await;

    let response = send(&app, get("/health", None)).await;
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_text(response).await;
    assert!(body.contains("healthy"));
}

#[tokio::test]
async fn a_request_travels_from_student_to_alumni_and_back() {
    let app = test_app().await;

    // Asha registers as alumni with a profile, Ravi as a student
    let asha_form = "name=Asha+Rao&email=asha@example.com&password=secret-pw&role=alumni\
                     &field=Databases&company=Acme&bio=Happy+to+help";
    let response = send(&app, post_form("/register", asha_form, None)).await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    register_user(&app, "Ravi+Patel", "ravi@example.com", "student").await;

    // Ravi logs in and sees Asha's card in the directory
    let ravi = login_user(&app, "ravi@example.com").await;
    let dashboard = body_text(send(&app, get("/dashboard", Some(&ravi))).await).await;
    assert!(dashboard.contains("Alumni directory"));
    assert!(dashboard.contains("Asha Rao"));
    assert!(dashboard.contains("Databases"));

    // Ravi sends a mentorship request to Asha (user id 1)
    let response = send(
        &app,
        post_form("/request/1", "message=Can+you+mentor+me%3F", Some(&ravi)),
    )
    .await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&response), "/dashboard");

    // It shows on Ravi's dashboard as pending
    let dashboard = body_text(send(&app, get("/dashboard", Some(&ravi))).await).await;
    assert!(dashboard.contains("Can you mentor me?"));
    assert!(dashboard.contains("Pending"));

    // Asha sees exactly one request, under Ravi's name, and accepts
    let asha = login_user(&app, "asha@example.com").await;
    let dashboard = body_text(send(&app, get("/dashboard", Some(&asha))).await).await;
    assert!(dashboard.contains("Mentorship requests"));
    assert!(dashboard.contains("Ravi Patel"));
    assert_eq!(dashboard.matches("Can you mentor me?").count(), 1);
    assert!(dashboard.contains("Pending"));

    let response = send(&app, get("/update/1/Accepted", Some(&asha))).await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);

    // Ravi sees the accepted status and nothing pending anymore
    let dashboard = body_text(send(&app, get("/dashboard", Some(&ravi))).await).await;
    assert!(dashboard.contains("Accepted"));
    assert!(!dashboard.contains("Pending"));
}

#[tokio::test]
async fn a_taken_email_re_renders_the_registration_form() {
    let app = test_app().await;
    register_user(&app, "Asha+Rao", "asha@example.com", "alumni").await;

    let response = send(
        &app,
        post_form(
            "/register",
            "name=Impostor&email=asha@example.com&password=other-pw&role=student",
            None,
        ),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_text(response).await;
    assert!(body.contains("Email already registered!"));
}

#[tokio::test]
async fn an_unknown_role_is_rejected() {
    let app = test_app().await;

    let response = send(
        &app,
        post_form(
            "/register",
            "name=Eve&email=eve@example.com&password=pw&role=admin",
            None,
        ),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = body_text(response).await;
    assert!(body.contains("not a valid role"));
}

#[tokio::test]
async fn failed_logins_are_indistinguishable() {
    let app = test_app().await;
    register_user(&app, "Asha+Rao", "asha@example.com", "alumni").await;

    let wrong_password = send(
        &app,
        post_form("/login", "email=asha@example.com&password=not-it", None),
    )
    .await;
    let unknown_email = send(
        &app,
        post_form("/login", "email=ghost@example.com&password=not-it", None),
    )
    .await;

    assert_eq!(wrong_password.status(), StatusCode::OK);
    assert_eq!(unknown_email.status(), StatusCode::OK);

    let first = body_text(wrong_password).await;
    let second = body_text(unknown_email).await;
    assert!(first.contains("Invalid email or password!"));
    assert_eq!(first, second);
}

#[tokio::test]
async fn the_dashboard_requires_a_session() {
    let app = test_app().await;

    let response = send(&app, get("/dashboard", None)).await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&response), "/login");
}

#[tokio::test]
async fn a_tampered_cookie_reads_as_logged_out() {
    let app = test_app().await;

    let response = send(&app, get("/dashboard", Some("alumnet_session=forged"))).await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&response), "/login");
}

#[tokio::test]
async fn alumni_cannot_send_requests() {
    let app = test_app().await;
    register_user(&app, "Asha+Rao", "asha@example.com", "alumni").await;
    register_user(&app, "Luis+Ortega", "luis@example.com", "alumni").await;

    let luis = login_user(&app, "luis@example.com").await;
    let response = send(&app, post_form("/request/1", "message=Hi", Some(&luis))).await;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn requests_to_non_alumni_are_rejected() {
    let app = test_app().await;
    register_user(&app, "Ravi+Patel", "ravi@example.com", "student").await;
    register_user(&app, "Mina+Park", "mina@example.com", "student").await;

    let ravi = login_user(&app, "ravi@example.com").await;

    // Another student is not a valid recipient
    let response = send(&app, post_form("/request/2", "message=Hi", Some(&ravi))).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    // Neither is a user id that does not exist
    let response = send(&app, post_form("/request/404", "message=Hi", Some(&ravi))).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn only_the_addressed_alumni_may_answer() {
    let app = test_app().await;
    register_user(&app, "Asha+Rao", "asha@example.com", "alumni").await;
    register_user(&app, "Luis+Ortega", "luis@example.com", "alumni").await;
    register_user(&app, "Ravi+Patel", "ravi@example.com", "student").await;

    let ravi = login_user(&app, "ravi@example.com").await;
    let response = send(&app, post_form("/request/1", "message=Hi", Some(&ravi))).await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);

    // The student cannot answer his own request
    let response = send(&app, get("/update/1/Accepted", Some(&ravi))).await;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);

    // Neither can an alumni the request is not addressed to
    let luis = login_user(&app, "luis@example.com").await;
    let response = send(&app, get("/update/1/Accepted", Some(&luis))).await;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);

    // The addressed alumni can
    let asha = login_user(&app, "asha@example.com").await;
    let response = send(&app, get("/update/1/Accepted", Some(&asha))).await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
}

#[tokio::test]
async fn unknown_status_tokens_are_rejected() {
    let app = test_app().await;
    register_user(&app, "Asha+Rao", "asha@example.com", "alumni").await;

    let asha = login_user(&app, "asha@example.com").await;
    let response = send(&app, get("/update/1/Banana", Some(&asha))).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = body_text(response).await;
    assert!(body.contains("not a valid request status"));
}

#[tokio::test]
async fn answering_a_missing_request_is_not_found() {
    let app = test_app().await;
    register_user(&app, "Asha+Rao", "asha@example.com", "alumni").await;

    let asha = login_user(&app, "asha@example.com").await;
    let response = send(&app, get("/update/404/Accepted", Some(&asha))).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn logout_clears_the_session_cookie() {
    let app = test_app().await;
    register_user(&app, "Asha+Rao", "asha@example.com", "alumni").await;
    let asha = login_user(&app, "asha@example.com").await;

    let response = send(&app, get("/logout", Some(&asha))).await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&response), "/");

    let removal = response
        .headers()
        .get(header::SET_COOKIE)
        .unwrap()
        .to_str()
        .unwrap();
    assert!(removal.starts_with("alumnet_session="));
    assert!(removal.contains("Max-Age=0"));
}
