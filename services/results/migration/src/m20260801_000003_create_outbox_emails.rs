use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(OutboxEmails::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(OutboxEmails::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(OutboxEmails::Recipient).string().not_null())
                    .col(ColumnDef::new(OutboxEmails::Subject).string().not_null())
                    .col(ColumnDef::new(OutboxEmails::Body).text().not_null())
                    .col(
                        ColumnDef::new(OutboxEmails::IdempotencyKey)
                            .string()
                            .not_null()
                            .unique_key(),
                    )
                    .col(
                        ColumnDef::new(OutboxEmails::Attempts)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .col(ColumnDef::new(OutboxEmails::LastError).string())
                    .col(
                        ColumnDef::new(OutboxEmails::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(OutboxEmails::NextAttemptAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(ColumnDef::new(OutboxEmails::ProcessedAt).timestamp_with_time_zone())
                    .col(ColumnDef::new(OutboxEmails::FailedAt).timestamp_with_time_zone())
                    .to_owned(),
            )
            .await?;

        // Index for worker poll queries (unprocessed, unfailed, by next_attempt_at).
        manager
            .create_index(
                Index::create()
                    .table(OutboxEmails::Table)
                    .col(OutboxEmails::NextAttemptAt)
                    .name("idx_outbox_emails_next_attempt_at")
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(OutboxEmails::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum OutboxEmails {
    Table,
    Id,
    Recipient,
    Subject,
    Body,
    IdempotencyKey,
    Attempts,
    LastError,
    CreatedAt,
    NextAttemptAt,
    ProcessedAt,
    FailedAt,
}
