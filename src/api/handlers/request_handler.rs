//! Mentorship request handlers - sending and answering requests.

use axum::{
    extract::{Path, State},
    response::Redirect,
    routing::{get, post},
    Form, Router,
};
use serde::Deserialize;

use crate::api::AppState;
use crate::domain::{RequestStatus, SessionUser};
use crate::errors::AppResult;

/// Mentorship request form fields
#[derive(Debug, Deserialize)]
pub struct RequestForm {
    pub message: String,
}

/// Create mentorship request routes
pub fn request_routes() -> Router<AppState> {
    Router::new()
        .route("/request/:alumni_id", post(send_request))
        .route("/update/:request_id/:status", get(update_status))
}

/// Send a mentorship request to an alumni
async fn send_request(
    State(state): State<AppState>,
    session: SessionUser,
    Path(alumni_id): Path<i64>,
    Form(form): Form<RequestForm>,
) -> AppResult<Redirect> {
    state
        .mentorship_service
        .send_request(&session, alumni_id, form.message)
        .await?;

    Ok(Redirect::to("/dashboard"))
}

/// Accept or reject a request addressed to the logged-in alumni
async fn update_status(
    State(state): State<AppState>,
    session: SessionUser,
    Path((request_id, status)): Path<(i64, String)>,
) -> AppResult<Redirect> {
    let status: RequestStatus = status.parse()?;
    state
        .mentorship_service
        .respond(&session, request_id, status)
        .await?;

    Ok(Redirect::to("/dashboard"))
}
