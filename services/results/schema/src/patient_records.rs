use sea_orm::entity::prelude::*;

/// Patient test-result record. `email` is the notification destination; it
/// is not unique and not validated as well-formed. No ownership column — any
/// authenticated staff member may read or delete any record.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "patient_records")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub test_type: String,
    pub result_summary: String,
    pub created_at: chrono::DateTime<chrono::Utc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
