use axum::{
    Json,
    extract::State,
    http::{HeaderMap, HeaderName, HeaderValue, StatusCode},
    response::IntoResponse,
};
use axum_extra::extract::CookieJar;
use serde::Deserialize;

use clinica_session::cookie::{clear_session_cookie, set_session_cookie};

use crate::error::ResultsServiceError;
use crate::session::CurrentUser;
use crate::state::AppState;
use crate::usecase::session::{LoginInput, LoginUseCase};

const X_CLINICA_SESSION_EXPIRES: &str = "x-clinica-session-expires";

fn session_expires_header(exp: u64) -> (HeaderName, HeaderValue) {
    (
        HeaderName::from_static(X_CLINICA_SESSION_EXPIRES),
        HeaderValue::from_str(&exp.to_string()).unwrap(),
    )
}

// ── POST /login ──────────────────────────────────────────────────────────────

#[derive(Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub secret: String,
}

pub async fn login(
    State(state): State<AppState>,
    jar: CookieJar,
    Json(body): Json<LoginRequest>,
) -> Result<impl IntoResponse, ResultsServiceError> {
    let usecase = LoginUseCase {
        repo: state.user_repo(),
        session_secret: state.session_secret.clone(),
    };

    let out = usecase
        .execute(LoginInput {
            email: body.email,
            secret: body.secret,
        })
        .await?;

    let jar = set_session_cookie(jar, out.session_token, state.cookie_domain.clone());

    let mut headers = HeaderMap::new();
    let (name, value) = session_expires_header(out.session_exp);
    headers.insert(name, value);

    Ok((StatusCode::CREATED, jar, headers))
}

// ── GET /logout ──────────────────────────────────────────────────────────────

pub async fn logout(
    State(state): State<AppState>,
    _current: CurrentUser,
    jar: CookieJar,
) -> Result<impl IntoResponse, ResultsServiceError> {
    let jar = clear_session_cookie(jar, state.cookie_domain.clone());
    Ok((StatusCode::NO_CONTENT, jar))
}
