//! Mentorship request database entity for SeaORM.

use sea_orm::entity::prelude::*;

use crate::domain::{MentorshipRequest, RequestStatus};
use crate::errors::{AppError, AppResult};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "mentorship_requests")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub student_id: i64,
    pub alumni_id: i64,
    pub message: String,
    pub status: String,
    pub created_at: DateTimeUtc,
}

/// Two relations point at the users table, one per side of the request.
/// Joins pick a side explicitly via `Relation::Student.def()` or
/// `Relation::Alumni.def()`; no `Related` impl exists because it would
/// be ambiguous.
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::StudentId",
        to = "super::user::Column::Id"
    )]
    Student,
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::AlumniId",
        to = "super::user::Column::Id"
    )]
    Alumni,
}

impl ActiveModelBehavior for ActiveModel {}

/// Decode a status column value, surfacing rows mutated outside the
/// application as internal errors rather than panics.
pub(crate) fn decode_status(request_id: i64, raw: &str) -> AppResult<RequestStatus> {
    raw.parse::<RequestStatus>().map_err(|_| {
        AppError::internal(format!(
            "request {} carries unknown status {:?}",
            request_id, raw
        ))
    })
}

impl TryFrom<Model> for MentorshipRequest {
    type Error = AppError;

    fn try_from(model: Model) -> Result<Self, Self::Error> {
        let status = decode_status(model.id, &model.status)?;

        Ok(MentorshipRequest {
            id: model.id,
            student_id: model.student_id,
            alumni_id: model.alumni_id,
            message: model.message,
            status,
            created_at: model.created_at,
        })
    }
}
