//! Migration: Create the mentorship_requests table.
//!
//! The student_id/alumni_id columns are plain integers, not SQL foreign
//! keys; the role invariant behind them is enforced by the service layer.

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(MentorshipRequests::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(MentorshipRequests::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(MentorshipRequests::StudentId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(MentorshipRequests::AlumniId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(ColumnDef::new(MentorshipRequests::Message).text().not_null())
                    .col(
                        ColumnDef::new(MentorshipRequests::Status)
                            .text()
                            .not_null()
                            .default("Pending"),
                    )
                    .col(
                        ColumnDef::new(MentorshipRequests::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        // One index per listing query (by student, by alumni)
        manager
            .create_index(
                Index::create()
                    .name("idx_mentorship_requests_student_id")
                    .table(MentorshipRequests::Table)
                    .col(MentorshipRequests::StudentId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_mentorship_requests_alumni_id")
                    .table(MentorshipRequests::Table)
                    .col(MentorshipRequests::AlumniId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Drop the indexes first
        manager
            .drop_index(
                Index::drop()
                    .name("idx_mentorship_requests_student_id")
                    .table(MentorshipRequests::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name("idx_mentorship_requests_alumni_id")
                    .table(MentorshipRequests::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(MentorshipRequests::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum MentorshipRequests {
    Table,
    Id,
    StudentId,
    AlumniId,
    Message,
    Status,
    CreatedAt,
}
