use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::types::PatientRecord;
use crate::error::ResultsServiceError;
use crate::session::CurrentUser;
use crate::state::AppState;
use crate::usecase::record::{
    AddRecordInput, AddRecordUseCase, ListRecordsUseCase, RemoveRecordUseCase,
};

#[derive(Serialize)]
pub struct RecordResponse {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub test_type: String,
    pub result_summary: String,
    #[serde(serialize_with = "clinica_core::serde::to_rfc3339_ms")]
    pub created_at: chrono::DateTime<chrono::Utc>,
}

impl From<PatientRecord> for RecordResponse {
    fn from(record: PatientRecord) -> Self {
        Self {
            id: record.id,
            name: record.name,
            email: record.email,
            test_type: record.test_type,
            result_summary: record.result_summary,
            created_at: record.created_at,
        }
    }
}

// ── GET / ────────────────────────────────────────────────────────────────────

pub async fn list_records(
    _current: CurrentUser,
    State(state): State<AppState>,
) -> Result<Json<Vec<RecordResponse>>, ResultsServiceError> {
    let usecase = ListRecordsUseCase {
        repo: state.record_repo(),
    };
    let records = usecase.execute().await?;
    Ok(Json(records.into_iter().map(Into::into).collect()))
}

// ── POST /add ────────────────────────────────────────────────────────────────

#[derive(Deserialize)]
pub struct AddRecordRequest {
    pub name: String,
    pub email: String,
    pub test_type: String,
    pub result_summary: String,
}

/// Create a record. The notification is committed to the outbox in the same
/// transaction; 201 means both are durable, not that the email was delivered.
pub async fn add_record(
    _current: CurrentUser,
    State(state): State<AppState>,
    Json(body): Json<AddRecordRequest>,
) -> Result<(StatusCode, Json<RecordResponse>), ResultsServiceError> {
    let usecase = AddRecordUseCase {
        repo: state.record_repo(),
    };
    let record = usecase
        .execute(AddRecordInput {
            name: body.name,
            email: body.email,
            test_type: body.test_type,
            result_summary: body.result_summary,
        })
        .await?;
    Ok((StatusCode::CREATED, Json(record.into())))
}

// ── POST /delete/{id} ────────────────────────────────────────────────────────

pub async fn delete_record(
    _current: CurrentUser,
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, ResultsServiceError> {
    let usecase = RemoveRecordUseCase {
        repo: state.record_repo(),
    };
    usecase.execute(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
