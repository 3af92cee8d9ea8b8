use chrono::{DateTime, Utc};
use uuid::Uuid;

/// Staff account. Secrets are stored as Argon2id PHC strings only.
#[derive(Debug, Clone)]
pub struct User {
    pub id: Uuid,
    pub email: String,
    pub secret_hash: String,
    pub created_at: DateTime<Utc>,
}

/// Patient test-result record. Carries no owner — access control is
/// all-or-nothing per authenticated session, not per record.
#[derive(Debug, Clone)]
pub struct PatientRecord {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub test_type: String,
    pub result_summary: String,
    pub created_at: DateTime<Utc>,
}

/// A fully rendered notification, ready to enqueue alongside its record.
#[derive(Debug, Clone)]
pub struct EmailMessage {
    pub id: Uuid,
    pub recipient: String,
    pub subject: String,
    pub body: String,
    /// `record_created:{record_id}` — keeps the notification intent unique
    /// per record even if the enqueue is retried.
    pub idempotency_key: String,
}

/// Outbox row as seen by the delivery worker.
#[derive(Debug, Clone)]
pub struct PendingEmail {
    pub id: Uuid,
    pub recipient: String,
    pub subject: String,
    pub body: String,
    pub attempts: i32,
}

/// Delivery attempts before an outbox row is parked with `failed_at`.
pub const MAX_DELIVERY_ATTEMPTS: i32 = 5;

/// Linear retry backoff per attempt, in seconds.
pub const RETRY_BACKOFF_SECS: i64 = 60;

/// Worker poll interval in seconds.
pub const OUTBOX_POLL_SECS: u64 = 5;

/// Maximum outbox rows drained per poll.
pub const OUTBOX_BATCH: u64 = 20;
