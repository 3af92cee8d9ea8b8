use clinica_session::token::issue_session_token;
use uuid::Uuid;

use crate::domain::repository::UserRepository;
use crate::domain::secret::verify_secret;
use crate::error::ResultsServiceError;

// ── Login ────────────────────────────────────────────────────────────────────

pub struct LoginInput {
    pub email: String,
    pub secret: String,
}

#[derive(Debug)]
pub struct LoginOutput {
    pub user_id: Uuid,
    pub session_token: String,
    pub session_exp: u64,
}

pub struct LoginUseCase<R: UserRepository> {
    pub repo: R,
    pub session_secret: String,
}

impl<R: UserRepository> LoginUseCase<R> {
    /// Authenticate and issue a session token. Unknown email and wrong
    /// secret both return `InvalidCredentials` — the caller cannot tell
    /// which one happened.
    pub async fn execute(&self, input: LoginInput) -> Result<LoginOutput, ResultsServiceError> {
        let user = self
            .repo
            .find_by_email(&input.email)
            .await?
            .ok_or(ResultsServiceError::InvalidCredentials)?;

        if !verify_secret(&input.secret, &user.secret_hash)? {
            return Err(ResultsServiceError::InvalidCredentials);
        }

        let (session_token, session_exp) = issue_session_token(user.id, &self.session_secret)
            .map_err(|e| anyhow::anyhow!("issue session token: {e}"))?;

        Ok(LoginOutput {
            user_id: user.id,
            session_token,
            session_exp,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use clinica_session::token::validate_session_token;

    use crate::domain::secret::hash_secret;
    use crate::domain::types::User;

    const TEST_SECRET: &str = "test-session-signing-key";

    struct MockUserRepo {
        user: Option<User>,
    }

    impl UserRepository for MockUserRepo {
        async fn find_by_email(&self, email: &str) -> Result<Option<User>, ResultsServiceError> {
            Ok(self
                .user
                .clone()
                .filter(|u| u.email == email))
        }

        async fn create(&self, _user: &User) -> Result<(), ResultsServiceError> {
            Ok(())
        }
    }

    fn staff_user(secret: &str) -> User {
        User {
            id: Uuid::now_v7(),
            email: "staff@clinic.example".into(),
            secret_hash: hash_secret(secret).unwrap(),
            created_at: Utc::now(),
        }
    }

    #[tokio::test]
    async fn should_issue_validating_token_on_correct_credentials() {
        let user = staff_user("hunter2");
        let user_id = user.id;
        let usecase = LoginUseCase {
            repo: MockUserRepo { user: Some(user) },
            session_secret: TEST_SECRET.into(),
        };

        let out = usecase
            .execute(LoginInput {
                email: "staff@clinic.example".into(),
                secret: "hunter2".into(),
            })
            .await
            .unwrap();

        assert_eq!(out.user_id, user_id);
        let info = validate_session_token(&out.session_token, TEST_SECRET).unwrap();
        assert_eq!(info.user_id, user_id);
        assert_eq!(info.session_exp, out.session_exp);
    }

    #[tokio::test]
    async fn should_reject_wrong_secret_as_invalid_credentials() {
        let usecase = LoginUseCase {
            repo: MockUserRepo {
                user: Some(staff_user("hunter2")),
            },
            session_secret: TEST_SECRET.into(),
        };

        let result = usecase
            .execute(LoginInput {
                email: "staff@clinic.example".into(),
                secret: "hunter3".into(),
            })
            .await;

        assert!(matches!(
            result,
            Err(ResultsServiceError::InvalidCredentials)
        ));
    }

    #[tokio::test]
    async fn should_reject_unknown_email_with_same_error() {
        let usecase = LoginUseCase {
            repo: MockUserRepo { user: None },
            session_secret: TEST_SECRET.into(),
        };

        let result = usecase
            .execute(LoginInput {
                email: "nobody@clinic.example".into(),
                secret: "hunter2".into(),
            })
            .await;

        // Indistinguishable from the wrong-secret case above.
        assert!(matches!(
            result,
            Err(ResultsServiceError::InvalidCredentials)
        ));
    }
}
