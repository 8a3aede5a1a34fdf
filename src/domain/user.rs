//! User domain entity and related types.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::config::{ROLE_ALUMNI, ROLE_STUDENT};
use crate::errors::AppError;

/// User roles enumeration
///
/// Exactly two roles exist; a user's role is fixed at registration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Student,
    Alumni,
}

impl Role {
    /// Check if this is the requesting side
    pub fn is_student(&self) -> bool {
        matches!(self, Role::Student)
    }

    /// Check if this is the mentoring side
    pub fn is_alumni(&self) -> bool {
        matches!(self, Role::Alumni)
    }
}

impl FromStr for Role {
    type Err = AppError;

    /// Parsing is strict: only the two canonical lowercase tokens are
    /// accepted, so unknown roles never reach the store.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            ROLE_STUDENT => Ok(Role::Student),
            ROLE_ALUMNI => Ok(Role::Alumni),
            other => Err(AppError::BadRequest(format!(
                "{:?} is not a valid role",
                other
            ))),
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Role::Student => write!(f, "{}", ROLE_STUDENT),
            Role::Alumni => write!(f, "{}", ROLE_ALUMNI),
        }
    }
}

/// User domain entity
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct User {
    pub id: i64,
    pub name: String,
    pub email: String,
    #[serde(skip_serializing)]
    pub password_hash: String,
    pub role: Role,
    /// Optional profile fields, shown on the alumni directory
    pub field: Option<String>,
    pub company: Option<String>,
    pub bio: Option<String>,
}

/// Registration data, before the password is hashed and an id assigned
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUser {
    pub name: String,
    pub email: String,
    pub role: Role,
    pub field: Option<String>,
    pub company: Option<String>,
    pub bio: Option<String>,
}

/// Authenticated identity carried by the session cookie.
///
/// Deliberately small: everything else is loaded per request from the store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionUser {
    pub user_id: i64,
    pub name: String,
    pub role: Role,
}

impl From<&User> for SessionUser {
    fn from(user: &User) -> Self {
        Self {
            user_id: user.id,
            name: user.name.clone(),
            role: user.role,
        }
    }
}
