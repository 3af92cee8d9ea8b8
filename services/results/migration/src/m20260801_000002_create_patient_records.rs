use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(PatientRecords::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(PatientRecords::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(PatientRecords::Name).string().not_null())
                    .col(ColumnDef::new(PatientRecords::Email).string().not_null())
                    .col(ColumnDef::new(PatientRecords::TestType).string().not_null())
                    .col(
                        ColumnDef::new(PatientRecords::ResultSummary)
                            .string()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(PatientRecords::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await?;

        // Listing returns records in insertion order.
        manager
            .create_index(
                Index::create()
                    .table(PatientRecords::Table)
                    .col(PatientRecords::CreatedAt)
                    .name("idx_patient_records_created_at")
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(PatientRecords::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum PatientRecords {
    Table,
    Id,
    Name,
    Email,
    TestType,
    ResultSummary,
    CreatedAt,
}
