// tests/common/mod.rs

use std::sync::{
    Arc, Mutex,
    atomic::{AtomicBool, AtomicUsize, Ordering},
};

use axum::{
    Json, Router,
    extract::{Path, Query, State},
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    routing::{get, post},
};
use chrono::Utc;
use serde_json::json;

use elearn_admin::config::Config;
use elearn_admin::http::HttpService;
use elearn_admin::models::{
    Paginated,
    activity::{ActivityAttempt, AttemptDetail, GradeSubmission, GradingStatus},
    user::{User, UserRole},
};

pub const TEST_TOKEN: &str = "grader-token";

/// Shared state of the mock backend. Tests seed it, the handlers
/// mutate it, assertions read it back.
#[derive(Default)]
pub struct MockBackend {
    pub attempts: Mutex<Vec<ActivityAttempt>>,
    pub details: Mutex<Vec<AttemptDetail>>,
    pub users: Mutex<Vec<User>>,
    pub list_calls: AtomicUsize,
    pub grade_calls: AtomicUsize,
    pub user_calls: AtomicUsize,
    /// When set, the next grade submission fails with a 500.
    pub fail_next_grade: AtomicBool,
    pub last_submission: Mutex<Option<GradeSubmission>>,
}

impl MockBackend {
    pub fn attempt(&self, id: i64) -> Option<ActivityAttempt> {
        self.attempts.lock().unwrap().iter().find(|a| a.id == id).cloned()
    }
}

fn unauthorized() -> Response {
    (
        StatusCode::UNAUTHORIZED,
        Json(json!({ "error": "Missing or invalid bearer token" })),
    )
        .into_response()
}

fn check_auth(headers: &HeaderMap) -> bool {
    headers
        .get("authorization")
        .and_then(|v| v.to_str().ok())
        .map(|v| v == format!("Bearer {}", TEST_TOKEN))
        .unwrap_or(false)
}

#[derive(serde::Deserialize)]
#[serde(rename_all = "camelCase")]
struct AttemptsQuery {
    activity_id: i64,
    search: Option<String>,
}

async fn list_attempts(
    State(state): State<Arc<MockBackend>>,
    headers: HeaderMap,
    Query(query): Query<AttemptsQuery>,
) -> Response {
    if !check_auth(&headers) {
        return unauthorized();
    }
    state.list_calls.fetch_add(1, Ordering::SeqCst);

    let needle = query.search.unwrap_or_default().to_lowercase();
    let items: Vec<ActivityAttempt> = state
        .attempts
        .lock()
        .unwrap()
        .iter()
        .filter(|a| a.activity_id == query.activity_id)
        .filter(|a| {
            needle.is_empty()
                || format!("{} {}", a.student.first_name, a.student.last_name)
                    .to_lowercase()
                    .contains(&needle)
        })
        .cloned()
        .collect();

    let total = items.len() as i64;
    Json(Paginated { items, total }).into_response()
}

async fn get_attempt_detail(
    State(state): State<Arc<MockBackend>>,
    headers: HeaderMap,
    Path(id): Path<i64>,
) -> Response {
    if !check_auth(&headers) {
        return unauthorized();
    }
    match state.details.lock().unwrap().iter().find(|d| d.attempt.id == id) {
        Some(detail) => Json(detail.clone()).into_response(),
        None => (
            StatusCode::NOT_FOUND,
            Json(json!({ "error": "Attempt not found" })),
        )
            .into_response(),
    }
}

async fn grade_attempt(
    State(state): State<Arc<MockBackend>>,
    headers: HeaderMap,
    Path(id): Path<i64>,
    Json(submission): Json<GradeSubmission>,
) -> Response {
    if !check_auth(&headers) {
        return unauthorized();
    }
    state.grade_calls.fetch_add(1, Ordering::SeqCst);

    if state.fail_next_grade.swap(false, Ordering::SeqCst) {
        return (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({ "error": "Simulated backend failure" })),
        )
            .into_response();
    }

    let mut attempts = state.attempts.lock().unwrap();
    let Some(attempt) = attempts.iter_mut().find(|a| a.id == id) else {
        return (
            StatusCode::NOT_FOUND,
            Json(json!({ "error": "Attempt not found" })),
        )
            .into_response();
    };

    attempt.grading_status = GradingStatus::Graded;
    attempt.score = Some(submission.answers.iter().map(|a| a.score).sum());
    attempt.graded_at = Some(Utc::now());
    attempt.grader_feedback = Some(submission.overall_feedback.clone());
    let updated = attempt.clone();
    drop(attempts);

    *state.last_submission.lock().unwrap() = Some(submission);

    Json(updated).into_response()
}

async fn list_users(
    State(state): State<Arc<MockBackend>>,
    headers: HeaderMap,
) -> Response {
    if !check_auth(&headers) {
        return unauthorized();
    }
    state.user_calls.fetch_add(1, Ordering::SeqCst);
    let items = state.users.lock().unwrap().clone();
    let total = items.len() as i64;
    Json(Paginated { items, total }).into_response()
}

async fn create_user(
    State(state): State<Arc<MockBackend>>,
    headers: HeaderMap,
    Json(body): Json<serde_json::Value>,
) -> Response {
    if !check_auth(&headers) {
        return unauthorized();
    }
    state.user_calls.fetch_add(1, Ordering::SeqCst);

    let mut users = state.users.lock().unwrap();
    let id = users.iter().map(|u| u.id).max().unwrap_or(0) + 1;
    let user = User {
        id,
        email: None,
        first_name: body["firstName"].as_str().unwrap_or_default().to_string(),
        last_name: body["lastName"].as_str().unwrap_or_default().to_string(),
        role: UserRole::Student,
        gender: None,
        date_of_birth: None,
        phone_number: body["phoneNumber"].as_str().map(|s| s.to_string()),
        avatar_image_file_url: None,
        created_at: Utc::now(),
        updated_at: Utc::now(),
    };
    users.push(user.clone());

    (StatusCode::CREATED, Json(user)).into_response()
}

async fn get_user(
    State(state): State<Arc<MockBackend>>,
    headers: HeaderMap,
    Path(id): Path<i64>,
) -> Response {
    if !check_auth(&headers) {
        return unauthorized();
    }
    match state.users.lock().unwrap().iter().find(|u| u.id == id) {
        Some(user) => Json(user.clone()).into_response(),
        None => (
            StatusCode::NOT_FOUND,
            Json(json!({ "error": "User not found" })),
        )
            .into_response(),
    }
}

async fn delete_user(
    State(state): State<Arc<MockBackend>>,
    headers: HeaderMap,
    Path(id): Path<i64>,
) -> Response {
    if !check_auth(&headers) {
        return unauthorized();
    }
    let mut users = state.users.lock().unwrap();
    match users.iter().position(|u| u.id == id) {
        Some(idx) => Json(users.remove(idx)).into_response(),
        None => (
            StatusCode::NOT_FOUND,
            Json(json!({ "error": "User not found" })),
        )
            .into_response(),
    }
}

fn router(state: Arc<MockBackend>) -> Router {
    Router::new()
        .route("/api/activities/attempts", get(list_attempts))
        .route("/api/activities/attempts/{id}", get(get_attempt_detail))
        .route("/api/activities/attempts/{id}/grade", post(grade_attempt))
        .route("/api/users/admin-paginated", get(list_users))
        .route("/api/users/admin-create", post(create_user))
        .route(
            "/api/users/admin-one/{id}",
            get(get_user),
        )
        .route(
            "/api/users/admin-delete/{id}",
            axum::routing::delete(delete_user),
        )
        .with_state(state)
}

/// Spawns the mock backend on a random port and returns its base URL.
pub async fn spawn_app(state: Arc<MockBackend>) -> String {
    let app = router(state);

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind random port");
    let port = listener.local_addr().unwrap().port();
    let address = format!("http://127.0.0.1:{}", port);

    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    address
}

/// HttpService pointed at the mock backend, with the grader token set.
pub fn http_for(address: &str) -> HttpService {
    let config = Config {
        api_base_url: address.to_string(),
        api_token: Some(TEST_TOKEN.to_string()),
        request_timeout_secs: 5,
        rust_log: "error".to_string(),
    };
    HttpService::new(&config).expect("Failed to build HttpService")
}
