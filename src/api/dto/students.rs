//! DTOs for student management.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::domain::entities::{NewStudent, Status, Student, UpdateStudent};

/// Request body for `POST /api/students`.
///
/// `enrollment_date` defaults to today when omitted.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateStudentRequest {
    #[validate(length(min = 1, max = 200))]
    pub name: String,

    #[serde(default)]
    pub email: String,

    #[serde(default)]
    pub phone: String,

    #[validate(length(min = 1, max = 50))]
    pub grade: String,

    #[validate(length(min = 1, max = 50))]
    pub class_section: String,

    #[serde(default)]
    pub guardian_name: String,

    #[serde(default)]
    pub guardian_phone: String,

    #[serde(default)]
    pub guardian_email: String,

    #[serde(default)]
    pub address: String,

    pub date_of_birth: Option<NaiveDate>,

    pub enrollment_date: Option<NaiveDate>,

    #[serde(default)]
    pub status: Status,
}

impl From<CreateStudentRequest> for NewStudent {
    fn from(req: CreateStudentRequest) -> Self {
        NewStudent {
            name: req.name,
            email: req.email,
            phone: req.phone,
            grade: req.grade,
            class_section: req.class_section,
            guardian_name: req.guardian_name,
            guardian_phone: req.guardian_phone,
            guardian_email: req.guardian_email,
            address: req.address,
            date_of_birth: req.date_of_birth,
            enrollment_date: req.enrollment_date,
            status: req.status,
        }
    }
}

/// Request body for `PATCH /api/students/{id}`. Absent fields are left unchanged.
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateStudentRequest {
    #[validate(length(min = 1, max = 200))]
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    #[validate(length(min = 1, max = 50))]
    pub grade: Option<String>,
    #[validate(length(min = 1, max = 50))]
    pub class_section: Option<String>,
    pub guardian_name: Option<String>,
    pub guardian_phone: Option<String>,
    pub guardian_email: Option<String>,
    pub address: Option<String>,
    pub date_of_birth: Option<NaiveDate>,
    pub enrollment_date: Option<NaiveDate>,
    pub status: Option<Status>,
}

impl From<UpdateStudentRequest> for UpdateStudent {
    fn from(req: UpdateStudentRequest) -> Self {
        UpdateStudent {
            name: req.name,
            email: req.email,
            phone: req.phone,
            grade: req.grade,
            class_section: req.class_section,
            guardian_name: req.guardian_name,
            guardian_phone: req.guardian_phone,
            guardian_email: req.guardian_email,
            address: req.address,
            date_of_birth: req.date_of_birth,
            enrollment_date: req.enrollment_date,
            status: req.status,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct StudentItem {
    pub id: String,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub grade: String,
    pub class_section: String,
    pub guardian_name: String,
    pub guardian_phone: String,
    pub guardian_email: String,
    pub address: String,
    pub date_of_birth: Option<NaiveDate>,
    pub enrollment_date: Option<NaiveDate>,
    pub status: Status,
}

impl From<Student> for StudentItem {
    fn from(s: Student) -> Self {
        StudentItem {
            id: s.id,
            name: s.name,
            email: s.email,
            phone: s.phone,
            grade: s.grade,
            class_section: s.class_section,
            guardian_name: s.guardian_name,
            guardian_phone: s.guardian_phone,
            guardian_email: s.guardian_email,
            address: s.address,
            date_of_birth: s.date_of_birth,
            enrollment_date: s.enrollment_date,
            status: s.status,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct StudentListResponse {
    pub items: Vec<StudentItem>,
}
