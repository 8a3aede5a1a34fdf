//! Mentorship request entity and status lifecycle.

use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::config::{STATUS_ACCEPTED, STATUS_PENDING, STATUS_REJECTED};
use crate::errors::AppError;

/// Request status enumeration
///
/// The status column only ever holds one of these three tokens; overwrites
/// are permissive among them (last write wins, no transition graph).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RequestStatus {
    Pending,
    Accepted,
    Rejected,
}

impl Default for RequestStatus {
    fn default() -> Self {
        RequestStatus::Pending
    }
}

impl FromStr for RequestStatus {
    type Err = AppError;

    /// Strict, case-sensitive parse; arbitrary strings are rejected at the
    /// boundary so they can never land in the status column.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            STATUS_PENDING => Ok(RequestStatus::Pending),
            STATUS_ACCEPTED => Ok(RequestStatus::Accepted),
            STATUS_REJECTED => Ok(RequestStatus::Rejected),
            other => Err(AppError::BadRequest(format!(
                "{:?} is not a valid request status",
                other
            ))),
        }
    }
}

impl std::fmt::Display for RequestStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RequestStatus::Pending => write!(f, "{}", STATUS_PENDING),
            RequestStatus::Accepted => write!(f, "{}", STATUS_ACCEPTED),
            RequestStatus::Rejected => write!(f, "{}", STATUS_REJECTED),
        }
    }
}

/// Mentorship request domain entity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MentorshipRequest {
    pub id: i64,
    pub student_id: i64,
    pub alumni_id: i64,
    pub message: String,
    pub status: RequestStatus,
    /// Stamped at creation, truncated to whole seconds
    pub created_at: DateTime<Utc>,
}

/// A request row joined with the name of the user on the other side:
/// the alumni name for a student's listing, the student name for an
/// alumni's listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestWithCounterpart {
    pub id: i64,
    pub counterpart_name: String,
    pub message: String,
    pub status: RequestStatus,
    pub created_at: DateTime<Utc>,
}
