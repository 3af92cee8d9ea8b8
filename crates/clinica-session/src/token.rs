//! Session token issue and validation.

use std::time::{SystemTime, UNIX_EPOCH};

use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::cookie::SESSION_EXP;

/// Identity extracted from a validated session token.
#[derive(Debug, Clone)]
pub struct SessionInfo {
    pub user_id: Uuid,
    pub session_exp: u64,
}

/// Errors returned by [`validate_session_token`].
#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    #[error("invalid signature")]
    InvalidSignature,
    #[error("session expired")]
    Expired,
    #[error("malformed token")]
    Malformed,
}

/// JWT claims payload. `sub` is the user ID, `exp` seconds since epoch.
#[derive(Debug, Serialize, Deserialize)]
pub struct SessionClaims {
    pub sub: String,
    pub exp: u64,
}

fn now_secs() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("system clock before UNIX epoch")
        .as_secs()
}

/// Issue a session token for `user_id`, returning the token and its
/// expiration timestamp. Signing errors only occur with a broken key setup,
/// so they surface as [`SessionError::Malformed`].
pub fn issue_session_token(user_id: Uuid, secret: &str) -> Result<(String, u64), SessionError> {
    let exp = now_secs() + SESSION_EXP;
    let claims = SessionClaims {
        sub: user_id.to_string(),
        exp,
    };
    let token = encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )
    .map_err(|_| SessionError::Malformed)?;
    Ok((token, exp))
}

/// Validate a session-cookie value, returning the bound identity.
///
/// Validation: HS256, exp checked, required claims `exp` + `sub`.
/// Default leeway (60s) tolerates clock skew.
pub fn validate_session_token(cookie_value: &str, secret: &str) -> Result<SessionInfo, SessionError> {
    let mut validation = Validation::new(jsonwebtoken::Algorithm::HS256);
    validation.validate_exp = true;
    validation.required_spec_claims.clear();
    validation.set_required_spec_claims(&["exp", "sub"]);

    let data = decode::<SessionClaims>(
        cookie_value,
        &DecodingKey::from_secret(secret.as_bytes()),
        &validation,
    )
    .map_err(|e| match e.kind() {
        jsonwebtoken::errors::ErrorKind::ExpiredSignature => SessionError::Expired,
        jsonwebtoken::errors::ErrorKind::InvalidSignature => SessionError::InvalidSignature,
        _ => SessionError::Malformed,
    })?;

    let user_id = data
        .claims
        .sub
        .parse::<Uuid>()
        .map_err(|_| SessionError::Malformed)?;

    Ok(SessionInfo {
        user_id,
        session_exp: data.claims.exp,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const TEST_SECRET: &str = "test-secret-key-for-unit-tests";

    #[test]
    fn should_round_trip_issued_token() {
        let user_id = Uuid::new_v4();
        let (token, exp) = issue_session_token(user_id, TEST_SECRET).unwrap();

        let info = validate_session_token(&token, TEST_SECRET).unwrap();
        assert_eq!(info.user_id, user_id);
        assert_eq!(info.session_exp, exp);
    }

    #[test]
    fn should_reject_expired_token() {
        let claims = SessionClaims {
            sub: Uuid::new_v4().to_string(),
            exp: 1_000_000, // 1970, well past leeway
        };
        let token = encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(TEST_SECRET.as_bytes()),
        )
        .unwrap();

        let err = validate_session_token(&token, TEST_SECRET).unwrap_err();
        assert!(matches!(err, SessionError::Expired));
    }

    #[test]
    fn should_reject_wrong_secret() {
        let (token, _) = issue_session_token(Uuid::new_v4(), TEST_SECRET).unwrap();

        let err = validate_session_token(&token, "wrong-secret").unwrap_err();
        assert!(matches!(err, SessionError::InvalidSignature));
    }

    #[test]
    fn should_reject_malformed_token() {
        let err = validate_session_token("not-a-jwt", TEST_SECRET).unwrap_err();
        assert!(matches!(err, SessionError::Malformed));
    }

    #[test]
    fn should_reject_non_uuid_subject() {
        let claims = SessionClaims {
            sub: "staff-17".to_string(),
            exp: now_secs() + 3600,
        };
        let token = encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(TEST_SECRET.as_bytes()),
        )
        .unwrap();

        let err = validate_session_token(&token, TEST_SECRET).unwrap_err();
        assert!(matches!(err, SessionError::Malformed));
    }
}
