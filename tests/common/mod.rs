#![allow(dead_code)]

use async_trait::async_trait;
use axum::Router;
use axum_test::TestServer;
use chrono::{TimeDelta, Utc};
use serde_json::{Value, json};
use std::sync::Arc;

use school_admin::api::routes::{collection_routes, report_routes};
use school_admin::api::handlers::health_handler;
use school_admin::application::services::ReportSettings;
use school_admin::domain::document::{Collection, Document, Fields};
use school_admin::domain::repositories::DocumentStore;
use school_admin::error::StoreError;
use school_admin::infrastructure::persistence::MemoryDocumentStore;
use school_admin::state::AppState;

fn days_ago(days: i64) -> String {
    (Utc::now() - TimeDelta::days(days)).to_rfc3339()
}

/// Store contents shared by the handler tests.
///
/// - 6 users: 1 admin, 2 teachers, 2 students, 1 guardian; 3 active in the last 30 days
/// - 3 students: 2 in grade 1, 1 inactive; 1 enrolled in the last 30 days
/// - 4 subjects: 2 in grade 1 taught by Omar, 1 without grade, 2 without teacher
/// - 3 fees: 2 active totalling 1100.0
pub fn seed() -> Value {
    let recent_enrollment = (Utc::now() - TimeDelta::days(5)).date_naive().to_string();
    let old_enrollment = (Utc::now() - TimeDelta::days(200)).date_naive().to_string();

    json!({
        "users": [
            { "id": "u1", "name": "Amal", "email": "amal@school.test", "role": "admin", "lastActive": days_ago(2) },
            { "id": "u2", "name": "Omar", "email": "omar@school.test", "role": "teacher", "lastActive": days_ago(40) },
            { "id": "u3", "name": "Noor", "email": "noor@school.test", "role": "teacher" },
            { "id": "u4", "name": "Layla", "email": "layla@school.test", "role": "student", "lastActive": days_ago(1) },
            { "id": "u5", "name": "Sami", "email": "sami@school.test", "role": "student", "lastActive": "not a date" },
            { "id": "u6", "name": "Huda", "email": "huda@school.test", "role": "guardian", "lastActive": days_ago(10) }
        ],
        "students": [
            { "id": "s1", "name": "Layla", "grade": "grade 1", "class": "A", "enrollmentDate": recent_enrollment },
            { "id": "s2", "name": "Yusuf", "grade": "grade 1", "class": "B", "enrollmentDate": old_enrollment },
            { "id": "s3", "name": "Mariam", "grade": "grade 2", "class": "A", "status": "inactive" }
        ],
        "subjects": [
            { "id": "sub1", "name": "Maths", "grade": "grade 1", "teacherId": "u2", "teacherName": "Omar" },
            { "id": "sub2", "name": "Science", "grade": "grade 1", "teacherId": "u2", "teacherName": "Omar" },
            { "id": "sub3", "name": "Art", "grade": "grade 2", "teacherId": null },
            { "id": "sub4", "name": "Music", "teacherId": "" }
        ],
        "fees": [
            { "id": "f1", "title": "Tuition", "amount": 1000.0, "description": "Yearly tuition", "type": "yearly", "status": "active", "grade": "grade 1" },
            { "id": "f2", "title": "Bus", "amount": 100.0, "description": "School bus", "type": "monthly", "status": "active", "grade": "grade 1" },
            { "id": "f3", "title": "Trip", "amount": 300.0, "description": "Museum trip", "type": "one-time", "status": "inactive" }
        ]
    })
}

pub fn seeded_store() -> Arc<MemoryDocumentStore> {
    Arc::new(MemoryDocumentStore::from_snapshot(seed()).unwrap())
}

pub fn create_test_state(store: Arc<dyn DocumentStore>) -> AppState {
    AppState::new(store, ReportSettings::default())
}

pub fn make_server(state: AppState) -> TestServer {
    let api = collection_routes().nest("/reports", report_routes());
    let app = Router::new()
        .route("/health", axum::routing::get(health_handler))
        .nest("/api", api)
        .with_state(state);
    TestServer::new(app).unwrap()
}

pub fn seeded_server() -> TestServer {
    make_server(create_test_state(seeded_store()))
}

/// Store whose every operation fails as if the backend were down.
pub struct FailingStore;

fn down() -> StoreError {
    StoreError::Unavailable("connection refused".to_string())
}

#[async_trait]
impl DocumentStore for FailingStore {
    async fn list_all(&self, _collection: Collection) -> Result<Vec<Document>, StoreError> {
        Err(down())
    }

    async fn create(&self, _collection: Collection, _fields: Fields) -> Result<String, StoreError> {
        Err(down())
    }

    async fn update(
        &self,
        _collection: Collection,
        _id: &str,
        _fields: Fields,
    ) -> Result<(), StoreError> {
        Err(down())
    }

    async fn delete(&self, _collection: Collection, _id: &str) -> Result<(), StoreError> {
        Err(down())
    }

    async fn ping(&self) -> Result<(), StoreError> {
        Err(down())
    }
}
