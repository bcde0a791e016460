mod common;

use axum::http::StatusCode;
use serde_json::{Value, json};

#[tokio::test]
async fn test_subjects_list_sorted_by_grade_then_name() {
    let server = common::seeded_server();

    let response = server.get("/api/subjects").await;

    response.assert_status_ok();

    let json = response.json::<Value>();
    let names: Vec<&str> = json["items"]
        .as_array()
        .unwrap()
        .iter()
        .map(|s| s["name"].as_str().unwrap())
        .collect();

    assert_eq!(names, vec!["Music", "Maths", "Science", "Art"]);
}

#[tokio::test]
async fn test_create_subject_with_teacher() {
    let server = common::seeded_server();

    let response = server
        .post("/api/subjects")
        .json(&json!({
            "name": "History",
            "grade": "grade 2",
            "teacher_id": "u3",
            "teacher_name": "Noor"
        }))
        .await;

    response.assert_status(StatusCode::CREATED);

    let body = response.json::<Value>();
    assert_eq!(body["name"], "History");
    assert_eq!(body["teacher_id"], "u3");
    assert_eq!(body["teacher_name"], "Noor");
    assert!(body["created_at"].is_string());
}

#[tokio::test]
async fn test_create_subject_empty_teacher_is_unassigned() {
    let server = common::seeded_server();

    let response = server
        .post("/api/subjects")
        .json(&json!({ "name": "Drama", "grade": "grade 3", "teacher_id": "" }))
        .await;

    response.assert_status(StatusCode::CREATED);
    assert!(response.json::<Value>()["teacher_id"].is_null());

    let stats = server.get("/api/reports/subjects").await.json::<Value>();
    assert_eq!(stats["report"]["subjects_without_teacher"], 3);
}

#[tokio::test]
async fn test_create_subject_missing_grade() {
    let server = common::seeded_server();

    let response = server
        .post("/api/subjects")
        .json(&json!({ "name": "Drama", "grade": "" }))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);

    let body = response.json::<Value>();
    assert_eq!(body["error"]["details"]["fields"], json!(["grade"]));
}

#[tokio::test]
async fn test_update_subject_unassigns_teacher() {
    let server = common::seeded_server();

    server
        .patch("/api/subjects/sub1")
        .json(&json!({ "teacher_id": null, "teacher_name": null }))
        .await
        .assert_status(StatusCode::NO_CONTENT);

    let stats = server.get("/api/reports/subjects").await.json::<Value>();
    assert_eq!(stats["report"]["subjects_without_teacher"], 3);
    assert_eq!(stats["report"]["subjects_by_teacher"]["Omar"], 1);
}

#[tokio::test]
async fn test_update_subject_moves_grade() {
    let server = common::seeded_server();

    server
        .patch("/api/subjects/sub4")
        .json(&json!({ "grade": "grade 2" }))
        .await
        .assert_status(StatusCode::NO_CONTENT);

    let overview = server.get("/api/reports/overview").await.json::<Value>();
    assert_eq!(
        overview["report"]["subjects_by_grade"],
        json!({ "grade 1": 2, "grade 2": 2 })
    );
}

#[tokio::test]
async fn test_update_subject_not_found() {
    let server = common::seeded_server();

    let response = server
        .patch("/api/subjects/nope")
        .json(&json!({ "name": "x" }))
        .await;

    response.assert_status(StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_delete_subject() {
    let server = common::seeded_server();

    server
        .delete("/api/subjects/sub3")
        .await
        .assert_status(StatusCode::NO_CONTENT);

    let list = server.get("/api/subjects").await.json::<Value>();
    assert_eq!(list["items"].as_array().unwrap().len(), 3);
}
