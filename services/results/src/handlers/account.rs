use axum::{Json, extract::State, http::StatusCode};
use serde::Deserialize;

use crate::error::ResultsServiceError;
use crate::state::AppState;
use crate::usecase::account::{RegisterAccountInput, RegisterAccountUseCase};

// ── POST /register ───────────────────────────────────────────────────────────

#[derive(Deserialize)]
pub struct RegisterRequest {
    pub email: String,
    pub secret: String,
}

/// Create a staff account. No session is issued — the caller logs in
/// separately.
pub async fn register(
    State(state): State<AppState>,
    Json(body): Json<RegisterRequest>,
) -> Result<StatusCode, ResultsServiceError> {
    let usecase = RegisterAccountUseCase {
        repo: state.user_repo(),
    };
    usecase
        .execute(RegisterAccountInput {
            email: body.email,
            secret: body.secret,
        })
        .await?;
    Ok(StatusCode::CREATED)
}
