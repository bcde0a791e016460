//! DTOs for report endpoints.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Query parameters for `GET /api/reports/subjects`.
#[derive(Debug, Default, Deserialize)]
pub struct SubjectReportQuery {
    /// Restricts the statistics to one grade. Empty means all grades.
    pub grade: Option<String>,
}

/// Envelope shared by every report response.
#[derive(Debug, Serialize)]
pub struct ReportResponse<T> {
    pub generated_at: DateTime<Utc>,
    pub report: T,
}

impl<T> ReportResponse<T> {
    pub fn new(generated_at: DateTime<Utc>, report: T) -> Self {
        Self {
            generated_at,
            report,
        }
    }
}
