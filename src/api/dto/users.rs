//! DTOs for user management.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::domain::entities::{NewUser, Role, UpdateUser, User};

/// Request body for `POST /api/users`.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateUserRequest {
    #[validate(length(min = 1, max = 200))]
    pub name: String,

    #[validate(email(message = "Invalid email format"))]
    pub email: String,

    pub role: Role,

    pub phone: Option<String>,
}

impl From<CreateUserRequest> for NewUser {
    fn from(req: CreateUserRequest) -> Self {
        NewUser {
            name: req.name,
            email: req.email,
            role: req.role,
            phone: req.phone.filter(|p| !p.is_empty()),
        }
    }
}

/// Request body for `PATCH /api/users/{id}`.
///
/// Absent fields are left unchanged. `phone: null` clears the phone number.
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateUserRequest {
    #[validate(length(min = 1, max = 200))]
    pub name: Option<String>,

    #[validate(email(message = "Invalid email format"))]
    pub email: Option<String>,

    pub role: Option<Role>,

    #[serde(default, with = "::serde_with::rust::double_option")]
    pub phone: Option<Option<String>>,
}

impl From<UpdateUserRequest> for UpdateUser {
    fn from(req: UpdateUserRequest) -> Self {
        UpdateUser {
            name: req.name,
            email: req.email,
            role: req.role,
            phone: req.phone,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct UserItem {
    pub id: String,
    pub name: String,
    pub email: String,
    pub role: Option<Role>,
    pub phone: Option<String>,
    pub created_at: Option<DateTime<Utc>>,
    pub last_active: Option<DateTime<Utc>>,
}

impl From<User> for UserItem {
    fn from(u: User) -> Self {
        UserItem {
            id: u.id,
            name: u.name,
            email: u.email,
            role: u.role,
            phone: u.phone,
            created_at: u.created_at,
            last_active: u.last_active,
        }
    }
}

/// Response containing the list of users.
#[derive(Debug, Serialize)]
pub struct UserListResponse {
    pub items: Vec<UserItem>,
}
