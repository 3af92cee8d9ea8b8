use chrono::Utc;
use uuid::Uuid;

use crate::domain::repository::UserRepository;
use crate::domain::secret::hash_secret;
use crate::domain::types::User;
use crate::error::ResultsServiceError;

// ── RegisterAccount ──────────────────────────────────────────────────────────

pub struct RegisterAccountInput {
    pub email: String,
    pub secret: String,
}

pub struct RegisterAccountUseCase<R: UserRepository> {
    pub repo: R,
}

impl<R: UserRepository> RegisterAccountUseCase<R> {
    /// Create an account. Duplicate emails surface as `DuplicateEmail` from
    /// the store's unique index — there is no pre-check to race against.
    /// Success does not log the caller in.
    pub async fn execute(&self, input: RegisterAccountInput) -> Result<(), ResultsServiceError> {
        let user = User {
            id: Uuid::now_v7(),
            email: input.email,
            secret_hash: hash_secret(&input.secret)?,
            created_at: Utc::now(),
        };
        self.repo.create(&user).await
    }
}
