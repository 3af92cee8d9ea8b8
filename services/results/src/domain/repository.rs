#![allow(async_fn_in_trait)]

use uuid::Uuid;

use crate::domain::types::{EmailMessage, PatientRecord, PendingEmail, User};
use crate::error::ResultsServiceError;

/// Repository for staff accounts.
pub trait UserRepository: Send + Sync {
    /// Exact, case-sensitive match on the stored email.
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, ResultsServiceError>;

    /// Insert a new account. A unique-index violation on `email` surfaces as
    /// `DuplicateEmail`.
    async fn create(&self, user: &User) -> Result<(), ResultsServiceError>;
}

/// Repository for patient test-result records.
pub trait PatientRecordRepository: Send + Sync {
    /// All records in insertion order (`created_at` ascending).
    async fn list(&self) -> Result<Vec<PatientRecord>, ResultsServiceError>;

    async fn find_by_id(&self, id: Uuid) -> Result<Option<PatientRecord>, ResultsServiceError>;

    /// Insert the record and its notification outbox row in one transaction.
    async fn create_with_outbox(
        &self,
        record: &PatientRecord,
        email: &EmailMessage,
    ) -> Result<(), ResultsServiceError>;

    /// Delete a record. Returns `true` if a row was deleted.
    async fn delete(&self, id: Uuid) -> Result<bool, ResultsServiceError>;
}

/// Repository for the notification outbox, driven by the delivery worker.
pub trait OutboxRepository: Send + Sync {
    /// Rows due for delivery: not processed, not failed, `next_attempt_at`
    /// in the past. Oldest first, at most `limit`.
    async fn fetch_due(&self, limit: u64) -> Result<Vec<PendingEmail>, ResultsServiceError>;

    async fn mark_processed(&self, id: Uuid) -> Result<(), ResultsServiceError>;

    /// Record a failed attempt: bump `attempts`, store `last_error`, schedule
    /// the next attempt, and park the row once the attempt cap is reached.
    async fn mark_failed(
        &self,
        id: Uuid,
        attempts: i32,
        error: &str,
    ) -> Result<(), ResultsServiceError>;
}

/// Port for outbound message delivery, decoupled from transport specifics.
pub trait MailPort: Send + Sync {
    /// Hand one message to the external transport. Network, auth, and
    /// recipient failures all collapse to `DeliveryFailed`.
    async fn send(
        &self,
        recipient: &str,
        subject: &str,
        body: &str,
    ) -> Result<(), ResultsServiceError>;
}
