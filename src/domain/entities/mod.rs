//! Records held in the document store.
//!
//! Entities decode from stored documents, whose field names are camelCase.
//! Each entity has a `New*` struct for creation and an `Update*` struct for
//! partial updates; both serialize straight into document fields.
//!
//! Timestamps that are absent or malformed decode to `None`. They are never
//! replaced with the current time, so reports can tell "unknown" apart from
//! "just now". Fields that reports count or group by decode leniently too,
//! so a partial document still shows up in totals.

pub mod fee;
pub mod student;
pub mod subject;
pub mod user;

pub use fee::{Fee, FeeType, NewFee, UpdateFee};
pub use student::{NewStudent, Student, UpdateStudent};
pub use subject::{NewSubject, Subject, UpdateSubject};
pub use user::{NewUser, Role, UpdateUser, User};

use serde::{Deserialize, Serialize};

/// Whether a fee or student enrollment is currently in effect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    #[default]
    Active,
    Inactive,
}

impl Status {
    pub fn as_str(&self) -> &'static str {
        match self {
            Status::Active => "active",
            Status::Inactive => "inactive",
        }
    }
}
