//! Mentorship request repository - request ledger persistence.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sea_orm::sea_query::Expr;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, FromQueryResult, JoinType,
    NotSet, QueryFilter, QueryOrder, QuerySelect, RelationTrait, Set,
};

use super::entities::mentorship_request::{
    self, decode_status, ActiveModel, Entity as RequestEntity, Relation,
};
use super::entities::user;
use crate::domain::{MentorshipRequest, RequestStatus, RequestWithCounterpart};
use crate::errors::{AppError, AppResult};

#[cfg(test)]
use mockall::automock;

/// Request repository trait for dependency injection.
///
/// Rows are append-and-update only; nothing ever deletes a request.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait RequestRepository: Send + Sync {
    /// Insert a new request with status `Pending` and the supplied stamp
    async fn create(
        &self,
        student_id: i64,
        alumni_id: i64,
        message: String,
        created_at: DateTime<Utc>,
    ) -> AppResult<MentorshipRequest>;

    /// Find request by ID
    async fn find_by_id(&self, id: i64) -> AppResult<Option<MentorshipRequest>>;

    /// List a student's own requests, joined with each alumni name,
    /// ordered by request id ascending
    async fn list_for_student(&self, student_id: i64) -> AppResult<Vec<RequestWithCounterpart>>;

    /// List the requests addressed to an alumni, joined with each student
    /// name, ordered by request id ascending
    async fn list_for_alumni(&self, alumni_id: i64) -> AppResult<Vec<RequestWithCounterpart>>;

    /// Overwrite the status column; last write wins, no transition checks
    async fn update_status(&self, request_id: i64, status: RequestStatus) -> AppResult<()>;
}

/// Row shape produced by the two dashboard listing joins
#[derive(Debug, FromQueryResult)]
struct CounterpartRow {
    id: i64,
    counterpart_name: String,
    message: String,
    status: String,
    created_at: DateTime<Utc>,
}

impl CounterpartRow {
    fn into_domain(self) -> AppResult<RequestWithCounterpart> {
        Ok(RequestWithCounterpart {
            id: self.id,
            counterpart_name: self.counterpart_name,
            message: self.message,
            status: decode_status(self.id, &self.status)?,
            created_at: self.created_at,
        })
    }
}

/// Concrete implementation of RequestRepository over SeaORM
pub struct RequestLedger {
    db: DatabaseConnection,
}

impl RequestLedger {
    /// Create new repository instance
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl RequestRepository for RequestLedger {
    async fn create(
        &self,
        student_id: i64,
        alumni_id: i64,
        message: String,
        created_at: DateTime<Utc>,
    ) -> AppResult<MentorshipRequest> {
        let active_model = ActiveModel {
            id: NotSet,
            student_id: Set(student_id),
            alumni_id: Set(alumni_id),
            message: Set(message),
            status: Set(RequestStatus::default().to_string()),
            created_at: Set(created_at),
        };

        let model = active_model.insert(&self.db).await.map_err(AppError::from)?;
        model.try_into()
    }

    async fn find_by_id(&self, id: i64) -> AppResult<Option<MentorshipRequest>> {
        let result = RequestEntity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(AppError::from)?;

        result.map(MentorshipRequest::try_from).transpose()
    }

    async fn list_for_student(&self, student_id: i64) -> AppResult<Vec<RequestWithCounterpart>> {
        let rows = RequestEntity::find()
            .select_only()
            .column(mentorship_request::Column::Id)
            .column_as(user::Column::Name, "counterpart_name")
            .column(mentorship_request::Column::Message)
            .column(mentorship_request::Column::Status)
            .column(mentorship_request::Column::CreatedAt)
            .join(JoinType::InnerJoin, Relation::Alumni.def())
            .filter(mentorship_request::Column::StudentId.eq(student_id))
            .order_by_asc(mentorship_request::Column::Id)
            .into_model::<CounterpartRow>()
            .all(&self.db)
            .await
            .map_err(AppError::from)?;

        rows.into_iter().map(CounterpartRow::into_domain).collect()
    }

    async fn list_for_alumni(&self, alumni_id: i64) -> AppResult<Vec<RequestWithCounterpart>> {
        let rows = RequestEntity::find()
            .select_only()
            .column(mentorship_request::Column::Id)
            .column_as(user::Column::Name, "counterpart_name")
            .column(mentorship_request::Column::Message)
            .column(mentorship_request::Column::Status)
            .column(mentorship_request::Column::CreatedAt)
            .join(JoinType::InnerJoin, Relation::Student.def())
            .filter(mentorship_request::Column::AlumniId.eq(alumni_id))
            .order_by_asc(mentorship_request::Column::Id)
            .into_model::<CounterpartRow>()
            .all(&self.db)
            .await
            .map_err(AppError::from)?;

        rows.into_iter().map(CounterpartRow::into_domain).collect()
    }

    async fn update_status(&self, request_id: i64, status: RequestStatus) -> AppResult<()> {
        // Single UPDATE statement, so concurrent responders settle on
        // whichever write lands last.
        RequestEntity::update_many()
            .col_expr(
                mentorship_request::Column::Status,
                Expr::value(status.to_string()),
            )
            .filter(mentorship_request::Column::Id.eq(request_id))
            .exec(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(())
    }
}
