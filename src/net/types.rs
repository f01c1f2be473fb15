//! Shared domain types for the attendance views and the auth boundary.
//!
//! DESIGN
//! ======
//! Field names mirror the documents stored by the hosted backend (camelCase on
//! the wire) so page views can deserialize records without adapter structs.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Coarse access role. Closed set; adding a variant forces every route
/// mapping below to be revisited.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    Admin,
    Faculty,
    Student,
}

impl UserRole {
    /// Wire name, as stored in the `role` field of a roster document.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Admin => "admin",
            Self::Faculty => "faculty",
            Self::Student => "student",
        }
    }

    /// Default page the layout sends this role to after resolution.
    pub fn landing_route(self) -> &'static str {
        match self {
            Self::Admin => "/dashboard/admin",
            Self::Faculty => "/dashboard/faculty",
            Self::Student => "/dashboard/student",
        }
    }

    /// Human-readable label for navigation chrome.
    pub fn label(self) -> &'static str {
        match self {
            Self::Admin => "Admin",
            Self::Faculty => "Faculty",
            Self::Student => "Student",
        }
    }
}

impl fmt::Display for UserRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Error returned when a string is not one of the known role names.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("unknown user role: {0}")]
pub struct UnknownRole(pub String);

impl FromStr for UserRole {
    type Err = UnknownRole;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "admin" => Ok(Self::Admin),
            "faculty" => Ok(Self::Faculty),
            "student" => Ok(Self::Student),
            other => Err(UnknownRole(other.to_owned())),
        }
    }
}

/// Authenticated user handle issued by the auth provider.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identity {
    /// Provider-issued unique user id; roster documents are keyed by it.
    pub uid: String,
    pub email: Option<String>,
    pub display_name: Option<String>,
    /// Bearer token for document reads. `None` once the token has expired.
    #[serde(default, skip_serializing)]
    pub id_token: Option<String>,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum UserStatus {
    #[default]
    Active,
    Inactive,
}

/// User profile row as shown in the admin user list.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub name: String,
    pub email: String,
    pub role: UserRole,
    pub avatar_url: String,
    #[serde(default)]
    pub status: UserStatus,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Class {
    pub id: String,
    pub name: String,
    /// Display name of the teaching faculty member.
    pub faculty: String,
    pub student_count: u32,
    pub section: String,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum AttendanceStatus {
    Present,
    Absent,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AttendanceRecord {
    pub id: String,
    pub student_name: String,
    pub student_id: String,
    /// Calendar date as stored by the backend (`YYYY-MM-DD`).
    pub date: String,
    pub status: AttendanceStatus,
}

/// Per-subject attendance summary for the student dashboard.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StudentAttendance {
    pub subject: String,
    pub total_classes: u32,
    pub attended_classes: u32,
    pub percentage: f64,
}

impl StudentAttendance {
    /// Build a summary with the percentage derived from the two counts.
    pub fn new(subject: impl Into<String>, total_classes: u32, attended_classes: u32) -> Self {
        Self {
            subject: subject.into(),
            total_classes,
            attended_classes,
            percentage: attendance_percentage(total_classes, attended_classes),
        }
    }
}

/// Percentage of attended classes, rounded to one decimal. Zero when no classes were held.
pub fn attendance_percentage(total_classes: u32, attended_classes: u32) -> f64 {
    if total_classes == 0 {
        return 0.0;
    }
    let raw = f64::from(attended_classes.min(total_classes)) * 100.0 / f64::from(total_classes);
    (raw * 10.0).round() / 10.0
}
