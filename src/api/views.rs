//! Server-rendered HTML views.
//!
//! Templates are compiled once at startup from the templates directory;
//! the structs here are the data each page is rendered with.

use axum::response::Html;
use handlebars::Handlebars;
use serde::Serialize;

use crate::config::CREATED_AT_FORMAT;
use crate::domain::{RequestWithCounterpart, SessionUser, User};
use crate::errors::{AppError, AppResult};

/// Compiled template registry.
pub struct Views {
    registry: Handlebars<'static>,
}

impl Views {
    /// Load every `.html` template under `dir`, keyed by file stem.
    pub fn from_dir(dir: &str) -> AppResult<Self> {
        let mut registry = Handlebars::new();
        // Reload templates from disk on every render in debug builds.
        #[cfg(debug_assertions)]
        registry.set_dev_mode(true);
        registry
            .register_templates_directory(".html", dir)
            .map_err(|err| {
                AppError::internal(format!("Failed to load templates from {:?}: {}", dir, err))
            })?;

        Ok(Self { registry })
    }

    /// Render a registered template to an HTML response body.
    pub fn render<T: Serialize>(&self, template: &str, data: &T) -> AppResult<Html<String>> {
        Ok(Html(self.registry.render(template, data)?))
    }
}

/// Data for the register and login pages.
#[derive(Debug, Serialize)]
pub struct AuthPage {
    /// Inline error shown above the form, if the last submission failed
    pub error: Option<String>,
}

/// One alumni entry in the student's directory.
#[derive(Debug, Serialize)]
pub struct AlumniCard {
    pub id: i64,
    pub name: String,
    pub field: Option<String>,
    pub company: Option<String>,
    pub bio: Option<String>,
}

impl From<User> for AlumniCard {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            name: user.name,
            field: user.field,
            company: user.company,
            bio: user.bio,
        }
    }
}

/// One request row on either dashboard, counterpart name included.
#[derive(Debug, Serialize)]
pub struct RequestRow {
    pub id: i64,
    pub name: String,
    pub message: String,
    pub status: String,
    pub created_at: String,
}

impl From<RequestWithCounterpart> for RequestRow {
    fn from(request: RequestWithCounterpart) -> Self {
        Self {
            id: request.id,
            name: request.counterpart_name,
            message: request.message,
            status: request.status.to_string(),
            created_at: request.created_at.format(CREATED_AT_FORMAT).to_string(),
        }
    }
}

/// Data for the dashboard page; one side is populated per role.
#[derive(Debug, Serialize)]
pub struct DashboardPage {
    pub name: String,
    pub is_student: bool,
    pub alumni: Vec<AlumniCard>,
    pub my_requests: Vec<RequestRow>,
    pub incoming: Vec<RequestRow>,
}

impl DashboardPage {
    /// Student view: the alumni directory plus the student's own requests.
    pub fn student(
        session: &SessionUser,
        alumni: Vec<User>,
        requests: Vec<RequestWithCounterpart>,
    ) -> Self {
        Self {
            name: session.name.clone(),
            is_student: true,
            alumni: alumni.into_iter().map(AlumniCard::from).collect(),
            my_requests: requests.into_iter().map(RequestRow::from).collect(),
            incoming: Vec::new(),
        }
    }

    /// Alumni view: the requests addressed to this alumni.
    pub fn alumni(session: &SessionUser, requests: Vec<RequestWithCounterpart>) -> Self {
        Self {
            name: session.name.clone(),
            is_student: false,
            alumni: Vec::new(),
            my_requests: Vec::new(),
            incoming: requests.into_iter().map(RequestRow::from).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{RequestStatus, Role};
    use chrono::TimeZone;
    use chrono::Utc;

    fn sample_request() -> RequestWithCounterpart {
        RequestWithCounterpart {
            id: 4,
            counterpart_name: "Asha Rao".to_string(),
            message: "Can you mentor me?".to_string(),
            status: RequestStatus::Accepted,
            created_at: Utc.with_ymd_and_hms(2025, 6, 1, 9, 30, 0).unwrap(),
        }
    }

    fn session(role: Role) -> SessionUser {
        SessionUser {
            user_id: 2,
            name: "Ravi Patel".to_string(),
            role,
        }
    }

    #[test]
    fn request_rows_format_status_and_timestamp_for_display() {
        let row = RequestRow::from(sample_request());

        assert_eq!(row.name, "Asha Rao");
        assert_eq!(row.status, "Accepted");
        assert_eq!(row.created_at, "2025-06-01 09:30:00");
    }

    #[test]
    fn the_student_dashboard_carries_no_incoming_requests() {
        let alumni = vec![User {
            id: 1,
            name: "Asha Rao".to_string(),
            email: "asha@example.com".to_string(),
            password_hash: "$argon2-x".to_string(),
            role: Role::Alumni,
            field: Some("Databases".to_string()),
            company: None,
            bio: None,
        }];

        let page = DashboardPage::student(&session(Role::Student), alumni, vec![sample_request()]);

        assert!(page.is_student);
        assert_eq!(page.alumni.len(), 1);
        assert_eq!(page.my_requests.len(), 1);
        assert!(page.incoming.is_empty());
    }

    #[test]
    fn the_alumni_dashboard_carries_no_directory() {
        let page = DashboardPage::alumni(&session(Role::Alumni), vec![sample_request()]);

        assert!(!page.is_student);
        assert!(page.alumni.is_empty());
        assert!(page.my_requests.is_empty());
        assert_eq!(page.incoming.len(), 1);
    }
}
