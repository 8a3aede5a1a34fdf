//! Mentorship service - request creation, dashboard listings, responses.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::{SubsecRound, Utc};

use crate::domain::{MentorshipRequest, RequestStatus, RequestWithCounterpart, SessionUser, User};
use crate::errors::{AppError, AppResult, OptionExt};
use crate::infra::{RequestRepository, UserRepository};

/// Mentorship service trait for dependency injection.
///
/// Every operation takes the caller's session identity and enforces the
/// authorization rules itself; handlers only route.
#[async_trait]
pub trait MentorshipService: Send + Sync {
    /// Create a request from the session's student to an alumni
    async fn send_request(
        &self,
        session: &SessionUser,
        alumni_id: i64,
        message: String,
    ) -> AppResult<MentorshipRequest>;

    /// The session's own requests, with each alumni name
    async fn requests_for_student(
        &self,
        session: &SessionUser,
    ) -> AppResult<Vec<RequestWithCounterpart>>;

    /// The requests addressed to the session's alumni, with each student name
    async fn requests_for_alumni(
        &self,
        session: &SessionUser,
    ) -> AppResult<Vec<RequestWithCounterpart>>;

    /// Accept or reject a request addressed to the session's alumni
    async fn respond(
        &self,
        session: &SessionUser,
        request_id: i64,
        status: RequestStatus,
    ) -> AppResult<()>;

    /// All alumni, for the student dashboard directory
    async fn alumni_directory(&self) -> AppResult<Vec<User>>;
}

/// Concrete implementation of MentorshipService.
pub struct MentorshipManager {
    users: Arc<dyn UserRepository>,
    requests: Arc<dyn RequestRepository>,
}

impl MentorshipManager {
    /// Create new mentorship service instance
    pub fn new(users: Arc<dyn UserRepository>, requests: Arc<dyn RequestRepository>) -> Self {
        Self { users, requests }
    }
}

#[async_trait]
impl MentorshipService for MentorshipManager {
    async fn send_request(
        &self,
        session: &SessionUser,
        alumni_id: i64,
        message: String,
    ) -> AppResult<MentorshipRequest> {
        if !session.role.is_student() {
            return Err(AppError::Forbidden);
        }

        // The recipient must exist and be an alumni before a row referencing
        // it is written; the schema itself carries no foreign keys.
        let recipient = self
            .users
            .find_by_id(alumni_id)
            .await?
            .ok_or(AppError::RecipientNotFound)?;
        if !recipient.role.is_alumni() {
            return Err(AppError::RecipientNotAlumni);
        }

        let created_at = Utc::now().trunc_subsecs(0);
        self.requests
            .create(session.user_id, alumni_id, message, created_at)
            .await
    }

    async fn requests_for_student(
        &self,
        session: &SessionUser,
    ) -> AppResult<Vec<RequestWithCounterpart>> {
        self.requests.list_for_student(session.user_id).await
    }

    async fn requests_for_alumni(
        &self,
        session: &SessionUser,
    ) -> AppResult<Vec<RequestWithCounterpart>> {
        self.requests.list_for_alumni(session.user_id).await
    }

    async fn respond(
        &self,
        session: &SessionUser,
        request_id: i64,
        status: RequestStatus,
    ) -> AppResult<()> {
        let request = self.requests.find_by_id(request_id).await?.ok_or_not_found()?;

        // Only the alumni the request is addressed to may answer it.
        if !session.role.is_alumni() || request.alumni_id != session.user_id {
            return Err(AppError::Forbidden);
        }

        self.requests.update_status(request_id, status).await
    }

    async fn alumni_directory(&self) -> AppResult<Vec<User>> {
        self.users.list_alumni().await
    }
}
