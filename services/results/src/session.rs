//! Session extractor — the auth gate wrapping every protected handler.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use axum_extra::extract::CookieJar;
use uuid::Uuid;

use clinica_session::cookie::CLINICA_SESSION;
use clinica_session::token::validate_session_token;

use crate::error::ResultsServiceError;
use crate::state::AppState;

/// Identity bound to the request's session cookie.
///
/// A missing cookie, expired token, bad signature, or malformed token all
/// reject with `Unauthorized` before the handler body runs, so guarded
/// operations never mutate anything for an unauthenticated caller.
#[derive(Debug, Clone)]
pub struct CurrentUser {
    pub user_id: Uuid,
    pub session_exp: u64,
}

impl FromRequestParts<AppState> for CurrentUser {
    type Rejection = ResultsServiceError;

    // axum-core 0.5 defines this as `fn -> impl Future + Send` (not `async fn`).
    // In Rust 1.82+ precise capturing, `async fn` captures lifetimes differently,
    // causing E0195. Fix: extract values synchronously, return a 'static async move block.
    fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> impl std::future::Future<Output = Result<Self, Self::Rejection>> + Send {
        let jar = CookieJar::from_headers(&parts.headers);
        let token_value = jar.get(CLINICA_SESSION).map(|c| c.value().to_owned());
        let secret = state.session_secret.clone();

        async move {
            let token_value = token_value.ok_or(ResultsServiceError::Unauthorized)?;
            let info = validate_session_token(&token_value, &secret)
                .map_err(|_| ResultsServiceError::Unauthorized)?;
            Ok(Self {
                user_id: info.user_id,
                session_exp: info.session_exp,
            })
        }
    }
}
