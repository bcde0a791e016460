//! Application users: staff, students, and guardians.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_with::{DefaultOnError, serde_as};

/// Role a user holds in the school.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    Teacher,
    #[default]
    Student,
    Guardian,
}

impl Role {
    pub const ALL: [Role; 4] = [Role::Admin, Role::Teacher, Role::Student, Role::Guardian];

    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Admin => "admin",
            Role::Teacher => "teacher",
            Role::Student => "student",
            Role::Guardian => "guardian",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Role::ALL
            .into_iter()
            .find(|r| r.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| format!("unknown role '{s}'"))
    }
}

/// A user document from the `users` collection.
#[serde_as]
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    #[serde_as(as = "DefaultOnError")]
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    /// Absent or unrecognised roles decode to `None`.
    #[serde_as(as = "DefaultOnError")]
    #[serde(default)]
    pub role: Option<Role>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde_as(as = "DefaultOnError")]
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    /// Last time the user was seen in the app, if ever recorded.
    #[serde_as(as = "DefaultOnError")]
    #[serde(default)]
    pub last_active: Option<DateTime<Utc>>,
}

/// Input data for creating a user.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewUser {
    pub name: String,
    pub email: String,
    pub role: Role,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
}

/// Partial update of a user. `None` leaves a field unchanged; for `phone`,
/// `Some(None)` clears it.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateUser {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<Role>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "::serde_with::rust::double_option"
    )]
    pub phone: Option<Option<String>>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::document::{Document, to_fields};
    use serde_json::json;

    #[test]
    fn test_decode_user_with_timestamps() {
        let fields = json!({
            "name": "Amal",
            "email": "amal@school.test",
            "role": "teacher",
            "createdAt": "2026-01-10T08:00:00Z",
            "lastActive": "2026-03-01T09:30:00Z"
        });
        let doc = Document::new("u1", fields.as_object().cloned().unwrap());

        let user: User = doc.decode().unwrap();

        assert_eq!(user.id, "u1");
        assert_eq!(user.role, Some(Role::Teacher));
        assert!(user.created_at.is_some());
        assert!(user.last_active.is_some());
        assert!(user.phone.is_none());
    }

    #[test]
    fn test_malformed_timestamp_decodes_to_none() {
        let fields = json!({
            "name": "Omar",
            "role": "student",
            "createdAt": "yesterday",
            "lastActive": 17
        });
        let doc = Document::new("u2", fields.as_object().cloned().unwrap());

        let user: User = doc.decode().unwrap();

        assert!(user.created_at.is_none());
        assert!(user.last_active.is_none());
    }

    #[test]
    fn test_unknown_or_missing_role_decodes_to_none() {
        let unknown = json!({ "name": "Ghost", "role": "janitor" });
        let missing = json!({ "email": "nobody@school.test" });

        let ghost: User = Document::new("u3", unknown.as_object().cloned().unwrap())
            .decode()
            .unwrap();
        let nameless: User = Document::new("u4", missing.as_object().cloned().unwrap())
            .decode()
            .unwrap();

        assert_eq!(ghost.role, None);
        assert_eq!(nameless.role, None);
        assert_eq!(nameless.name, "");
    }

    #[test]
    fn test_role_from_str() {
        assert_eq!("Guardian".parse::<Role>().unwrap(), Role::Guardian);
        assert!("principal".parse::<Role>().is_err());
    }

    #[test]
    fn test_update_user_serializes_only_set_fields() {
        let update = UpdateUser {
            role: Some(Role::Admin),
            phone: Some(None),
            ..Default::default()
        };

        let fields = to_fields(&update).unwrap();

        assert_eq!(fields.len(), 2);
        assert_eq!(fields["role"], "admin");
        assert!(fields["phone"].is_null());
    }
}
