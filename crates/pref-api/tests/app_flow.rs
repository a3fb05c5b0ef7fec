mod common;

use common::{MockBackend, Reply, app_for, app_with_store, sign_in, student_json};
use pref_api::{NavTarget, NoticeKind, Section, Slot, View};
use pref_auth::MemoryStore;
use pref_auth::credentials::{ROLE_KEY, TOKEN_KEY, USERNAME_KEY};
use pref_core::Role;
use pref_core::dto::RegisterRequest;
use pretty_assertions::assert_eq;
use serde_json::json;

const DASHBOARD_ROUTES: [(&str, &str); 6] = [
    ("GET", "/api/students/count"),
    ("GET", "/api/preferences/count"),
    ("GET", "/api/courses"),
    ("GET", "/api/packs"),
    ("GET", "/api/grades"),
    ("GET", "/api/microservices/quickgrade/health"),
];

fn stub_dashboard(backend: &MockBackend) {
    backend
        .on("GET", "/api/students/count", Reply::text(200, "12"))
        .on("GET", "/api/preferences/count", Reply::text(200, "30\n"))
        .on("GET", "/api/courses", Reply::json(200, &json!([{"id": 1, "type": "COMPULSORY"}, {"id": 2, "type": "OPTIONAL"}])))
        .on("GET", "/api/packs", Reply::json(200, &json!([{"id": 1, "name": "Y1S1", "year": 1, "semester": 1}])))
        .on("GET", "/api/grades", Reply::json(200, &json!([])))
        .on(
            "GET",
            "/api/microservices/quickgrade/health",
            Reply::json(200, &json!({"service": "QuickGrade", "status": "UP", "available": true})),
        );
}

fn panel_value(app: &pref_api::App, label: &str) -> String {
    match app.screen().view(Section::Dashboard, Slot::Summary) {
        Some(View::Panel(fields)) => fields
            .into_iter()
            .find(|f| f.label == label)
            .map(|f| f.value)
            .unwrap_or_else(|| panic!("no field {label}")),
        other => panic!("expected dashboard panel, got {other:?}"),
    }
}

#[tokio::test]
async fn start_without_session_forces_login() {
    let backend = MockBackend::start();
    let app = app_for(&backend);

    assert_eq!(app.start().await, Section::Login);
    assert_eq!(app.screen().active(), Section::Login);
    assert!(backend.requests().is_empty());
    assert_eq!(app.navigation().len(), 1);
    assert_eq!(app.navigation()[0].target, NavTarget::Section(Section::Login));
}

#[tokio::test]
async fn start_with_partial_triple_forces_login() {
    let backend = MockBackend::start();
    let store = MemoryStore::with_entries(&[(TOKEN_KEY, "jwt"), (USERNAME_KEY, "alice")]);
    let app = app_with_store(&backend, store);

    assert_eq!(app.start().await, Section::Login);
    assert!(!app.session().is_authenticated());
    assert!(backend.requests().is_empty());
}

#[tokio::test]
async fn start_with_full_triple_opens_dashboard_without_revalidation() {
    let backend = MockBackend::start();
    stub_dashboard(&backend);
    let store = MemoryStore::with_entries(&[
        (TOKEN_KEY, "jwt"),
        (USERNAME_KEY, "alice"),
        (ROLE_KEY, "STUDENT"),
    ]);
    let app = app_with_store(&backend, store);

    assert_eq!(app.start().await, Section::Dashboard);
    assert_eq!(backend.count("GET", "/api/auth/me"), 0);
    assert_eq!(panel_value(&app, "Role"), "STUDENT");
}

#[tokio::test]
async fn login_as_alice_switches_to_dashboard_with_counts() {
    let backend = MockBackend::start();
    backend.on(
        "POST",
        "/api/auth/login",
        Reply::json(200, &json!({"token": "jwt-alice", "type": "Bearer", "username": "alice", "role": "ADMIN"})),
    );
    stub_dashboard(&backend);
    let app = app_for(&backend);
    app.start().await;

    let session = app.login("alice", "pw").await.unwrap();

    assert_eq!(session.username, "alice");
    assert_eq!(session.role, Role::Admin);
    assert_eq!(app.session().token().as_deref(), Some("jwt-alice"));
    assert_eq!(app.screen().active(), Section::Dashboard);

    let login = backend.last("POST", "/api/auth/login").unwrap();
    assert_eq!(login.authorization, None);
    assert_eq!(
        serde_json::from_str::<serde_json::Value>(&login.body).unwrap(),
        json!({"username": "alice", "password": "pw"})
    );

    for (method, path) in DASHBOARD_ROUTES {
        assert_eq!(backend.count(method, path), 1, "{path}");
    }
    assert_eq!(
        backend.last("GET", "/api/students/count").unwrap().authorization.as_deref(),
        Some("Bearer jwt-alice")
    );
    assert_eq!(backend.last("GET", "/api/courses").unwrap().authorization, None);

    assert_eq!(panel_value(&app, "User"), "Welcome, alice!");
    assert_eq!(panel_value(&app, "Students"), "12");
    assert_eq!(panel_value(&app, "Preferences"), "30");
    assert_eq!(panel_value(&app, "Courses"), "2");
    assert_eq!(panel_value(&app, "Packs"), "1");
    assert_eq!(panel_value(&app, "Grades"), "0");
    assert_eq!(panel_value(&app, "QuickGrade"), "UP");
    assert_eq!(app.navigation().len(), 9);
}

#[tokio::test]
async fn rejected_login_shows_server_message() {
    let backend = MockBackend::start();
    backend.on(
        "POST",
        "/api/auth/login",
        Reply::json(401, &json!({"message": "Invalid username or password"})),
    );
    let app = app_for(&backend);

    assert!(app.login("alice", "wrong").await.is_err());
    assert!(!app.session().is_authenticated());
    let notice = app.screen().notice(Section::Login).unwrap();
    assert_eq!(notice.kind, NoticeKind::Error);
    assert_eq!(notice.text, "Invalid username or password");
}

#[tokio::test]
async fn login_with_unknown_role_is_rejected() {
    let backend = MockBackend::start();
    backend.on(
        "POST",
        "/api/auth/login",
        Reply::json(200, &json!({"token": "t", "username": "x", "role": "JANITOR"})),
    );
    let app = app_for(&backend);

    assert!(app.login("x", "pw").await.is_err());
    assert!(!app.session().is_authenticated());
}

#[tokio::test]
async fn dashboard_survives_partial_failure() {
    let backend = MockBackend::start();
    backend
        .on("GET", "/api/students/count", Reply::empty(500))
        .on("GET", "/api/preferences/count", Reply::text(200, "not a number"));
    backend
        .on("GET", "/api/courses", Reply::json(200, &json!([])))
        .on("GET", "/api/packs", Reply::json(200, &json!([])))
        .on("GET", "/api/grades", Reply::empty(403))
        .on(
            "GET",
            "/api/microservices/quickgrade/health",
            Reply::json(200, &json!({"service": "QuickGrade", "status": "DOWN", "available": false})),
        );
    let app = app_for(&backend);
    sign_in(&app, Role::Instructor);
    app.screen().activate(Section::Dashboard);

    let summary = app.dashboard.refresh().await;

    assert_eq!(summary.students, None);
    assert_eq!(summary.preferences, None);
    assert_eq!(summary.courses, Some(0));
    assert_eq!(summary.packs, Some(0));
    assert_eq!(summary.grades, None);
    assert_eq!(summary.service_status.as_deref(), Some("DOWN"));
    assert_eq!(panel_value(&app, "Students"), "-");
    assert_eq!(panel_value(&app, "Grades"), "-");
}

#[tokio::test]
async fn unknown_section_is_a_no_op() {
    let backend = MockBackend::start();
    let app = app_for(&backend);
    sign_in(&app, Role::Admin);
    app.show_section(Section::Packs).await;
    let generation = app.screen().generation();
    let before = backend.requests().len();

    assert!(!app.show("settings").await);
    assert_eq!(app.screen().active(), Section::Packs);
    assert_eq!(app.screen().generation(), generation);
    assert_eq!(backend.requests().len(), before);
}

#[tokio::test]
async fn show_without_session_activates_but_does_not_load() {
    let backend = MockBackend::start();
    let app = app_for(&backend);

    assert!(app.show("students").await);
    assert_eq!(app.screen().active(), Section::Students);
    assert!(backend.requests().is_empty());
}

#[tokio::test]
async fn failed_section_load_leaves_notice_and_stays() {
    let backend = MockBackend::start();
    backend.on("GET", "/api/courses", Reply::empty(503));
    let app = app_for(&backend);
    sign_in(&app, Role::Instructor);

    assert!(app.show("courses").await);

    assert_eq!(app.screen().active(), Section::Courses);
    let notice = app.screen().notice(Section::Courses).expect("notice");
    assert_eq!(notice.kind, NoticeKind::Error);
    assert_eq!(notice.text, "Failed to load courses");
    assert!(app.screen().view(Section::Courses, Slot::List).is_none());
}

#[tokio::test]
async fn preferences_section_loads_dropdowns() {
    let backend = MockBackend::start();
    backend
        .on("GET", "/api/preferences", Reply::json(200, &json!([])))
        .on("GET", "/api/students", Reply::json(200, &json!([student_json(3, "Ana")])))
        .on(
            "GET",
            "/api/courses",
            Reply::json(200, &json!([{"id": 7, "code": "C07", "name": "Cloud", "type": "OPTIONAL"}])),
        );
    let app = app_for(&backend);
    sign_in(&app, Role::Student);

    assert!(app.show("preferences").await);

    let options = app.preference_form.options();
    assert_eq!(options.students[0].label, "Ana (S003)");
    assert_eq!(options.courses[0].id, 7);
    assert_eq!(options.courses[0].label, "Cloud (C07)");
    assert_eq!(backend.last("GET", "/api/students").unwrap().authorization, None);
}

#[tokio::test]
async fn dropdown_failure_keeps_previous_options() {
    let backend = MockBackend::start();
    backend
        .on("GET", "/api/students", Reply::json(200, &json!([student_json(3, "Ana")])))
        .on("GET", "/api/students", Reply::empty(500));
    let app = app_for(&backend);

    assert!(app.preference_form.load_students().await);
    assert!(!app.preference_form.load_students().await);
    assert_eq!(app.preference_form.options().students.len(), 1);
}

#[tokio::test]
async fn actuator_section_renders_health_and_missing_info() {
    let backend = MockBackend::start();
    backend
        .on("GET", "/actuator/health", Reply::json(200, &json!({"status": "UP"})))
        .on("GET", "/actuator/info", Reply::empty(404));
    let app = app_for(&backend);
    sign_in(&app, Role::Admin);

    app.show_section(Section::Actuator).await;

    assert_eq!(
        app.screen().view(Section::Actuator, Slot::Health),
        Some(View::Json(json!({"status": "UP"})))
    );
    assert_eq!(
        app.screen().view(Section::Actuator, Slot::Info),
        Some(View::Text("No info available".into()))
    );
    assert_eq!(backend.last("GET", "/actuator/health").unwrap().authorization, None);
}

#[tokio::test]
async fn statistics_failure_prefers_server_message() {
    let backend = MockBackend::start();
    backend.on(
        "GET",
        "/api/microservices/quickgrade/statistics",
        Reply::json(503, &json!({"message": "QuickGrade service is not reachable"})),
    );
    let app = app_for(&backend);
    sign_in(&app, Role::Admin);
    app.screen().activate(Section::Microservices);

    assert!(app.services.statistics().await.is_err());
    assert_eq!(
        app.screen().notice(Section::Microservices).unwrap().text,
        "QuickGrade service is not reachable"
    );
}

#[tokio::test]
async fn register_then_login_prompt() {
    let backend = MockBackend::start();
    backend.on(
        "POST",
        "/api/auth/register",
        Reply::json(200, &json!({"message": "User registered successfully", "username": "bob", "role": "STUDENT"})),
    );
    let app = app_for(&backend);

    let registration = RegisterRequest {
        username: "bob".into(),
        password: "pw".into(),
        name: "Bob".into(),
        email: "bob@uaic.ro".into(),
        role: Role::Student,
    };
    app.register(&registration).await.unwrap();

    assert_eq!(app.screen().active(), Section::Login);
    assert_eq!(
        app.screen().notice(Section::Login).unwrap().text,
        "Registration successful! Please login."
    );
    assert!(!app.session().is_authenticated());
}

#[tokio::test]
async fn register_failure_uses_error_field() {
    let backend = MockBackend::start();
    backend.on(
        "POST",
        "/api/auth/register",
        Reply::json(400, &json!({"error": "Username already exists"})),
    );
    let app = app_for(&backend);

    let registration = RegisterRequest {
        username: "bob".into(),
        password: "pw".into(),
        name: "Bob".into(),
        email: "bob@uaic.ro".into(),
        role: Role::Student,
    };
    assert!(app.register(&registration).await.is_err());
    assert_eq!(
        app.screen().notice(Section::Register).unwrap().text,
        "Username already exists"
    );
}

#[tokio::test]
async fn logout_clears_everything() {
    let backend = MockBackend::start();
    let store = MemoryStore::with_entries(&[
        (TOKEN_KEY, "jwt"),
        (USERNAME_KEY, "alice"),
        (ROLE_KEY, "ADMIN"),
    ]);
    let app = app_with_store(&backend, store);
    assert!(app.session().restore().is_some());

    app.logout();

    assert!(!app.session().is_authenticated());
    assert_eq!(app.screen().active(), Section::Login);
    assert_eq!(app.navigation()[0].label, "Login");
    assert!(app.session().restore().is_none());
}
