//! API route configuration.

use crate::api::handlers::{
    activity_report_handler, create_fee_handler, create_student_handler, create_subject_handler,
    create_user_handler, dashboard_report_handler, delete_fee_handler, delete_student_handler,
    delete_subject_handler, delete_user_handler, fee_list_handler, fee_report_handler,
    overview_report_handler, student_list_handler, student_report_handler, subject_list_handler,
    subject_report_handler, update_fee_handler, update_student_handler, update_subject_handler,
    update_user_handler, user_list_handler,
};
use crate::state::AppState;
use axum::{
    Router,
    routing::{get, patch},
};

/// Collection management routes.
///
/// # Endpoints
///
/// - `GET    /users`          - List users
/// - `POST   /users`          - Create a user
/// - `PATCH  /users/{id}`     - Update a user
/// - `DELETE /users/{id}`     - Delete a user
///
/// The same four routes exist for `/students`, `/subjects`, and `/fees`.
pub fn collection_routes() -> Router<AppState> {
    Router::new()
        .route("/users", get(user_list_handler).post(create_user_handler))
        .route(
            "/users/{id}",
            patch(update_user_handler).delete(delete_user_handler),
        )
        .route(
            "/students",
            get(student_list_handler).post(create_student_handler),
        )
        .route(
            "/students/{id}",
            patch(update_student_handler).delete(delete_student_handler),
        )
        .route(
            "/subjects",
            get(subject_list_handler).post(create_subject_handler),
        )
        .route(
            "/subjects/{id}",
            patch(update_subject_handler).delete(delete_subject_handler),
        )
        .route("/fees", get(fee_list_handler).post(create_fee_handler))
        .route(
            "/fees/{id}",
            patch(update_fee_handler).delete(delete_fee_handler),
        )
}

/// Report routes, nested under `/reports`.
///
/// # Endpoints
///
/// - `GET /dashboard`           - User counts per role
/// - `GET /overview`            - Totals with role and grade breakdowns
/// - `GET /subjects?grade=`     - Subject statistics
/// - `GET /activity`            - Users active within the window
/// - `GET /fees`                - Fee summary
/// - `GET /students`            - Enrollment summary
pub fn report_routes() -> Router<AppState> {
    Router::new()
        .route("/dashboard", get(dashboard_report_handler))
        .route("/overview", get(overview_report_handler))
        .route("/subjects", get(subject_report_handler))
        .route("/activity", get(activity_report_handler))
        .route("/fees", get(fee_report_handler))
        .route("/students", get(student_report_handler))
}
