//! In-process mock of the judge backend
//!
//! Routes answer with snake_case bodies and `{code, reason, message}` failure
//! envelopes, the way the real backend does.

#![allow(dead_code)]

use axum::{
    Json, Router,
    extract::{Path, RawQuery},
    http::{HeaderMap, StatusCode, header},
    response::{IntoResponse, Response},
    routing::{get, post},
};
use base64::{Engine, engine::general_purpose::URL_SAFE_NO_PAD};
use serde_json::{Value, json};
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;

use rustoj_client::{Backend, ClientConfig, Environment};

pub const CLAIMS: &str = r#"{"address":"127.0.0.1","expires":"2099-01-01T00:00:00+08:00","subject":{"id":1,"name":"alice"}}"#;

pub const RANKLIST_QUERY: &str = "scoring_rule=highest&tie_breaker=submission_time";

/// Compact token as issued on login: base64url claims, then a signature
pub fn issued_token() -> String {
    format!("{}.{}", URL_SAFE_NO_PAD.encode(CLAIMS), URL_SAFE_NO_PAD.encode("signature"))
}

pub fn failure(status: StatusCode, code: i32, reason: &str, message: &str) -> Response {
    (
        status,
        Json(json!({"code": code, "reason": reason, "message": message})),
    )
        .into_response()
}

pub fn job_wire(id: i32, submission: Value) -> Value {
    json!({
        "id": id,
        "created_time": "2022-08-27T02:05:29.000Z",
        "updated_time": "2022-08-27T02:05:30.000Z",
        "submission": submission,
        "state": "Finished",
        "result": "Accepted",
        "score": 100.0,
        "cases": [
            {"id": 0, "result": "Compilation Success", "time": 0, "memory": 0, "info": ""},
            {"id": 1, "result": "Accepted", "time": 1200, "memory": 0, "info": ""}
        ]
    })
}

fn default_submission() -> Value {
    json!({
        "source_code": "fn main() {}",
        "language": "Rust",
        "user_id": 1,
        "contest_id": 0,
        "problem_id": 0
    })
}

async fn greet() -> &'static str {
    "Hello, world!"
}

async fn echo_query(RawQuery(query): RawQuery) -> Json<Value> {
    Json(json!({"raw_query": query}))
}

async fn echo_body(headers: HeaderMap, Json(body): Json<Value>) -> Json<Value> {
    let content_type = headers
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .map(str::to_string);
    Json(json!({"content_type": content_type, "received_body": body}))
}

async fn whoami(headers: HeaderMap) -> Json<Value> {
    let cookie = headers
        .get(header::COOKIE)
        .and_then(|v| v.to_str().ok())
        .map(str::to_string);
    Json(json!({"cookie_header": cookie}))
}

async fn not_json() -> &'static str {
    "<html>oops</html>"
}

async fn broken() -> Response {
    (StatusCode::BAD_GATEWAY, "upstream unavailable").into_response()
}

async fn teapot() -> Response {
    (StatusCode::IM_A_TEAPOT, Json(json!({"error": "short and stout"}))).into_response()
}

async fn list_jobs(RawQuery(query): RawQuery) -> Json<Value> {
    match query.as_deref() {
        Some("user_id=1") | None => Json(json!([job_wire(0, default_submission())])),
        Some(_) => Json(json!([])),
    }
}

async fn get_job(Path(id): Path<i32>) -> Response {
    if id == 0 {
        Json(job_wire(0, default_submission())).into_response()
    } else {
        failure(
            StatusCode::NOT_FOUND,
            3,
            "ERR_NOT_FOUND",
            &format!("Job {} not found.", id),
        )
    }
}

async fn post_job(Json(body): Json<Value>) -> Response {
    if body.get("source_code").is_none() || body.get("problem_id").is_none() {
        return failure(StatusCode::BAD_REQUEST, 1, "ERR_INVALID_ARGUMENT", "Malformed job.");
    }
    Json(job_wire(7, body)).into_response()
}

async fn list_users() -> Json<Value> {
    Json(json!([{"id": 0, "name": "root"}, {"id": 1, "name": "alice"}]))
}

async fn post_user(Json(body): Json<Value>) -> Response {
    let name = body["name"].as_str().unwrap_or_default().to_string();
    match body.get("id").and_then(Value::as_i64) {
        Some(id) if id > 1 => failure(
            StatusCode::NOT_FOUND,
            3,
            "ERR_NOT_FOUND",
            &format!("User {} not found.", id),
        ),
        Some(id) => Json(json!({"id": id, "name": name})).into_response(),
        None => Json(json!({"id": 2, "name": name})).into_response(),
    }
}

async fn login(Json(body): Json<Value>) -> Response {
    match body["name"].as_str() {
        Some("alice") => {
            let token = issued_token();
            (
                [(header::SET_COOKIE, format!("rustoj-token={}; Path=/", token))],
                Json(json!({"token": token})),
            )
                .into_response()
        }
        Some(name) => failure(
            StatusCode::NOT_FOUND,
            3,
            "ERR_NOT_FOUND",
            &format!("User '{}' not found.", name),
        ),
        None => failure(StatusCode::BAD_REQUEST, 1, "ERR_INVALID_ARGUMENT", ""),
    }
}

fn contest_wire(id: i32) -> Value {
    json!({
        "id": id,
        "name": "Rust Course Project 2",
        "from": "2022-08-27T02:05:29.000Z",
        "to": "2022-08-28T02:05:29.000Z",
        "problem_ids": [0],
        "user_ids": [0, 1],
        "submission_limit": 32
    })
}

async fn list_contests() -> Json<Value> {
    Json(json!([contest_wire(1)]))
}

async fn get_contest(Path(id): Path<i32>) -> Response {
    if id == 1 {
        Json(contest_wire(1)).into_response()
    } else {
        failure(
            StatusCode::NOT_FOUND,
            3,
            "ERR_NOT_FOUND",
            &format!("Contest {} not found.", id),
        )
    }
}

async fn post_contest(Json(body): Json<Value>) -> Response {
    if body.get("problem_ids").is_none() || body.get("submission_limit").is_none() {
        return failure(StatusCode::BAD_REQUEST, 1, "ERR_INVALID_ARGUMENT", "Malformed contest.");
    }
    let id = body.get("id").and_then(Value::as_i64).unwrap_or(2);
    let mut contest = body;
    contest["id"] = json!(id);
    Json(contest).into_response()
}

fn problem_wire() -> Value {
    json!({
        "id": 0,
        "name": "aplusb",
        "type": "standard",
        "desc": "Compute a + b.",
        "cases": 2,
        "score": 100.0
    })
}

async fn contest_problems(Path(_id): Path<i32>) -> Json<Value> {
    Json(json!([problem_wire()]))
}

async fn ranklist(Path(_id): Path<i32>, RawQuery(query): RawQuery) -> Response {
    if query.as_deref() != Some(RANKLIST_QUERY) {
        return failure(
            StatusCode::BAD_REQUEST,
            1,
            "ERR_INVALID_ARGUMENT",
            &format!("Unexpected query {:?}", query),
        );
    }
    Json(json!([
        {"user": {"id": 1, "name": "alice"}, "rank": 1, "scores": [100.0]},
        {"user": {"id": 0, "name": "root"}, "rank": 2, "scores": [0.0]}
    ]))
    .into_response()
}

async fn get_problem(Path(id): Path<i32>) -> Response {
    if id == 0 {
        Json(problem_wire()).into_response()
    } else {
        failure(
            StatusCode::NOT_FOUND,
            3,
            "ERR_NOT_FOUND",
            &format!("Problem {} not found.", id),
        )
    }
}

fn router() -> Router {
    Router::new()
        .route("/greet", get(greet))
        .route("/echo/query", get(echo_query))
        .route("/echo/body", post(echo_body))
        .route("/whoami", get(whoami))
        .route("/not-json", get(not_json))
        .route("/broken", get(broken))
        .route("/teapot", get(teapot))
        .route("/jobs", get(list_jobs).post(post_job))
        .route("/jobs/{id}", get(get_job))
        .route("/users", get(list_users).post(post_user))
        .route("/users/login", post(login))
        .route("/contests", get(list_contests).post(post_contest))
        .route("/contests/{id}", get(get_contest))
        .route("/contests/{id}/problems", get(contest_problems))
        .route("/contests/{id}/ranklist", get(ranklist))
        .route("/problems/{id}", get(get_problem))
}

/// Start the mock backend on an ephemeral port and return a client for it
pub async fn spawn_backend() -> Backend {
    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind mock backend");
    let addr = listener.local_addr().expect("Failed to read local address");

    tokio::spawn(async move {
        axum::serve(listener, router())
            .await
            .expect("Mock backend crashed");
    });

    Backend::new(ClientConfig::new(
        Environment::Development,
        format!("http://{}", addr),
    ))
    .expect("Failed to build client")
}

/// Start a server whose 200 responses promise more body than they deliver
pub async fn spawn_truncated_backend() -> Backend {
    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind truncated backend");
    let addr = listener.local_addr().expect("Failed to read local address");

    tokio::spawn(async move {
        while let Ok((mut stream, _)) = listener.accept().await {
            let mut request = [0u8; 4096];
            let _ = stream.read(&mut request).await;
            let _ = stream
                .write_all(
                    b"HTTP/1.1 200 OK\r\ncontent-type: application/json\r\ncontent-length: 64\r\n\r\n{\"id\"",
                )
                .await;
            let _ = stream.shutdown().await;
        }
    });

    Backend::new(ClientConfig::new(
        Environment::Development,
        format!("http://{}", addr),
    ))
    .expect("Failed to build client")
}
