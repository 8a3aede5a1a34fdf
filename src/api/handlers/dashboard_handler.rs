//! Dashboard handler - the role-specific home page.

use axum::{extract::State, response::Html, routing::get, Router};

use crate::api::views::DashboardPage;
use crate::api::AppState;
use crate::domain::{Role, SessionUser};
use crate::errors::AppResult;

/// Create dashboard routes
pub fn dashboard_routes() -> Router<AppState> {
    Router::new().route("/dashboard", get(dashboard))
}

/// Render the dashboard for the logged-in user's role.
///
/// Students see the alumni directory and their own requests; alumni see
/// the requests addressed to them.
async fn dashboard(
    State(state): State<AppState>,
    session: SessionUser,
) -> AppResult<Html<String>> {
    let page = match session.role {
        Role::Student => {
            let alumni = state.mentorship_service.alumni_directory().await?;
            let requests = state
                .mentorship_service
                .requests_for_student(&session)
                .await?;
            DashboardPage::student(&session, alumni, requests)
        }
        Role::Alumni => {
            let incoming = state
                .mentorship_service
                .requests_for_alumni(&session)
                .await?;
            DashboardPage::alumni(&session, incoming)
        }
    };

    state.views.render("dashboard", &page)
}
