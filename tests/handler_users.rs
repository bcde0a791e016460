mod common;

use axum::http::StatusCode;
use serde_json::{Value, json};

// ─── LIST ────────────────────────────────────────────────────────────────────

#[tokio::test]
async fn test_users_list_sorted_by_name() {
    let server = common::seeded_server();

    let response = server.get("/api/users").await;

    response.assert_status_ok();

    let json = response.json::<Value>();
    let items = json["items"].as_array().unwrap();
    let names: Vec<&str> = items.iter().map(|u| u["name"].as_str().unwrap()).collect();

    assert_eq!(names, vec!["Amal", "Huda", "Layla", "Noor", "Omar", "Sami"]);
}

#[tokio::test]
async fn test_users_list_structure() {
    let server = common::seeded_server();

    let json = server.get("/api/users").await.json::<Value>();
    let sami = json["items"]
        .as_array()
        .unwrap()
        .iter()
        .find(|u| u["id"] == "u5")
        .unwrap();

    assert_eq!(sami["role"], "student");
    assert_eq!(sami["email"], "sami@school.test");
    assert!(sami["last_active"].is_null());
    assert!(sami.get("created_at").is_some());
}

// ─── CREATE ──────────────────────────────────────────────────────────────────

#[tokio::test]
async fn test_create_user_success() {
    let server = common::seeded_server();

    let response = server
        .post("/api/users")
        .json(&json!({
            "name": "Rania",
            "email": "rania@school.test",
            "role": "guardian",
            "phone": "+961 1 234 567"
        }))
        .await;

    response.assert_status(StatusCode::CREATED);

    let body = response.json::<Value>();
    assert_eq!(body["name"], "Rania");
    assert_eq!(body["role"], "guardian");
    assert_eq!(body["phone"], "+961 1 234 567");
    assert_eq!(body["id"].as_str().unwrap().len(), 20);
    assert!(body["created_at"].is_string());

    let list = server.get("/api/users").await.json::<Value>();
    assert_eq!(list["items"].as_array().unwrap().len(), 7);
}

#[tokio::test]
async fn test_create_user_invalid_email() {
    let server = common::seeded_server();

    let response = server
        .post("/api/users")
        .json(&json!({ "name": "Rania", "email": "not-an-email", "role": "guardian" }))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);

    let body = response.json::<Value>();
    assert_eq!(body["error"]["code"], "validation_error");
    assert_eq!(body["error"]["details"]["fields"], json!(["email"]));
}

#[tokio::test]
async fn test_create_user_empty_name() {
    let server = common::seeded_server();

    let response = server
        .post("/api/users")
        .json(&json!({ "name": "", "email": "x@school.test", "role": "admin" }))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_create_user_unknown_role() {
    let server = common::seeded_server();

    let response = server
        .post("/api/users")
        .json(&json!({ "name": "Rania", "email": "rania@school.test", "role": "janitor" }))
        .await;

    response.assert_status(StatusCode::UNPROCESSABLE_ENTITY);
}

// ─── UPDATE ──────────────────────────────────────────────────────────────────

#[tokio::test]
async fn test_update_user_changes_role() {
    let server = common::seeded_server();

    let response = server
        .patch("/api/users/u4")
        .json(&json!({ "role": "guardian" }))
        .await;

    response.assert_status(StatusCode::NO_CONTENT);

    let dashboard = server.get("/api/reports/dashboard").await.json::<Value>();
    assert_eq!(dashboard["report"]["total_students"], 1);
    assert_eq!(dashboard["report"]["total_guardians"], 2);
}

#[tokio::test]
async fn test_update_user_not_found() {
    let server = common::seeded_server();

    let response = server
        .patch("/api/users/missing")
        .json(&json!({ "name": "Ghost" }))
        .await;

    response.assert_status(StatusCode::NOT_FOUND);

    let body = response.json::<Value>();
    assert_eq!(body["error"]["code"], "not_found");
    assert_eq!(body["error"]["details"]["collection"], "users");
    assert_eq!(body["error"]["details"]["id"], "missing");
}

#[tokio::test]
async fn test_update_user_empty_patch() {
    let server = common::seeded_server();

    let response = server.patch("/api/users/u1").json(&json!({})).await;

    response.assert_status(StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_update_user_clears_phone() {
    let server = common::seeded_server();

    server
        .patch("/api/users/u1")
        .json(&json!({ "phone": "555-0100" }))
        .await
        .assert_status(StatusCode::NO_CONTENT);
    server
        .patch("/api/users/u1")
        .json(&json!({ "phone": null }))
        .await
        .assert_status(StatusCode::NO_CONTENT);

    let list = server.get("/api/users").await.json::<Value>();
    let amal = list["items"]
        .as_array()
        .unwrap()
        .iter()
        .find(|u| u["id"] == "u1")
        .unwrap();
    assert!(amal["phone"].is_null());
}

// ─── DELETE ──────────────────────────────────────────────────────────────────

#[tokio::test]
async fn test_delete_user_is_idempotent() {
    let server = common::seeded_server();

    server
        .delete("/api/users/u3")
        .await
        .assert_status(StatusCode::NO_CONTENT);
    server
        .delete("/api/users/u3")
        .await
        .assert_status(StatusCode::NO_CONTENT);

    let list = server.get("/api/users").await.json::<Value>();
    assert_eq!(list["items"].as_array().unwrap().len(), 5);
}
