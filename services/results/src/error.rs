use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

/// Results service domain error variants.
///
/// Unknown email and wrong secret both map to `InvalidCredentials` — the
/// two are deliberately indistinguishable to the caller.
#[derive(Debug, thiserror::Error)]
pub enum ResultsServiceError {
    #[error("invalid email or secret")]
    InvalidCredentials,
    #[error("email already registered")]
    DuplicateEmail,
    #[error("login required")]
    Unauthorized,
    #[error("record not found")]
    NotFound,
    #[error("notification delivery failed: {0}")]
    DeliveryFailed(String),
    #[error("internal error")]
    Internal(#[from] anyhow::Error),
}

impl ResultsServiceError {
    pub fn kind(&self) -> &'static str {
        match self {
            Self::InvalidCredentials => "INVALID_CREDENTIALS",
            Self::DuplicateEmail => "DUPLICATE_EMAIL",
            Self::Unauthorized => "UNAUTHORIZED",
            Self::NotFound => "NOT_FOUND",
            Self::DeliveryFailed(_) => "DELIVERY_FAILED",
            Self::Internal(_) => "INTERNAL",
        }
    }
}

impl IntoResponse for ResultsServiceError {
    fn into_response(self) -> Response {
        let status = match &self {
            Self::InvalidCredentials | Self::Unauthorized => StatusCode::UNAUTHORIZED,
            Self::DuplicateEmail => StatusCode::CONFLICT,
            Self::NotFound => StatusCode::NOT_FOUND,
            Self::DeliveryFailed(_) => StatusCode::BAD_GATEWAY,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };
        // Log 500s only — tower-http TraceLayer already records method/uri/status for all
        // requests. 4xx are expected client errors; logging them here would be noise.
        // Internal errors need the anyhow chain logged so the root cause is traceable.
        if let Self::Internal(ref e) = self {
            tracing::error!(error = %e, kind = "INTERNAL", "internal error");
        }
        let body = serde_json::json!({
            "kind": self.kind(),
            "message": self.to_string(),
        });
        (status, axum::Json(body)).into_response()
    }
}
