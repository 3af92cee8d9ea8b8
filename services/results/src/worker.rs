//! Outbox delivery worker.
//!
//! Polls the outbox and hands due notifications to the mail port. Delivery
//! is at-least-once: a crash between a successful send and `mark_processed`
//! re-sends the row on the next poll.

use std::time::Duration;

use tracing::{error, info, warn};

use crate::domain::repository::{MailPort, OutboxRepository};
use crate::domain::types::{MAX_DELIVERY_ATTEMPTS, OUTBOX_BATCH, OUTBOX_POLL_SECS};
use crate::error::ResultsServiceError;
use crate::state::AppState;

/// Poll loop. Spawn once at startup; never returns.
pub async fn run(state: AppState) {
    let outbox = state.outbox_repo();
    let mut tick = tokio::time::interval(Duration::from_secs(OUTBOX_POLL_SECS));
    loop {
        tick.tick().await;
        if let Err(e) = drain_due(&outbox, &state.mailer).await {
            // Poll errors (e.g. database hiccups) are transient; the next
            // tick retries from scratch.
            error!(error = %e, "outbox poll failed");
        }
    }
}

/// Deliver every due outbox row once. Returns how many were delivered.
pub async fn drain_due<O, M>(outbox: &O, mailer: &M) -> Result<usize, ResultsServiceError>
where
    O: OutboxRepository,
    M: MailPort,
{
    let due = outbox.fetch_due(OUTBOX_BATCH).await?;
    let mut delivered = 0;

    for email in due {
        match mailer.send(&email.recipient, &email.subject, &email.body).await {
            Ok(()) => {
                info!(id = %email.id, recipient = %email.recipient, "notification delivered");
                outbox.mark_processed(email.id).await?;
                delivered += 1;
            }
            Err(e) => {
                let attempts = email.attempts + 1;
                if attempts >= MAX_DELIVERY_ATTEMPTS {
                    warn!(id = %email.id, attempts, error = %e, "notification parked after max attempts");
                } else {
                    warn!(id = %email.id, attempts, error = %e, "notification delivery failed, will retry");
                }
                outbox.mark_failed(email.id, attempts, &e.to_string()).await?;
            }
        }
    }

    Ok(delivered)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;
    use uuid::Uuid;

    use crate::domain::types::PendingEmail;

    struct MockOutbox {
        due: Vec<PendingEmail>,
        processed: Mutex<Vec<Uuid>>,
        failed: Mutex<Vec<(Uuid, i32, String)>>,
    }

    impl MockOutbox {
        fn with_due(due: Vec<PendingEmail>) -> Self {
            Self {
                due,
                processed: Mutex::new(Vec::new()),
                failed: Mutex::new(Vec::new()),
            }
        }
    }

    impl OutboxRepository for MockOutbox {
        async fn fetch_due(&self, _limit: u64) -> Result<Vec<PendingEmail>, ResultsServiceError> {
            Ok(self.due.clone())
        }

        async fn mark_processed(&self, id: Uuid) -> Result<(), ResultsServiceError> {
            self.processed.lock().unwrap().push(id);
            Ok(())
        }

        async fn mark_failed(
            &self,
            id: Uuid,
            attempts: i32,
            error: &str,
        ) -> Result<(), ResultsServiceError> {
            self.failed
                .lock()
                .unwrap()
                .push((id, attempts, error.to_owned()));
            Ok(())
        }
    }

    struct MockMailer {
        fail: bool,
        sent: Mutex<Vec<(String, String, String)>>,
    }

    impl MailPort for MockMailer {
        async fn send(
            &self,
            recipient: &str,
            subject: &str,
            body: &str,
        ) -> Result<(), ResultsServiceError> {
            if self.fail {
                return Err(ResultsServiceError::DeliveryFailed(
                    "relay returned 503 Service Unavailable".into(),
                ));
            }
            self.sent
                .lock()
                .unwrap()
                .push((recipient.into(), subject.into(), body.into()));
            Ok(())
        }
    }

    fn pending(attempts: i32) -> PendingEmail {
        PendingEmail {
            id: Uuid::new_v4(),
            recipient: "jane@example.com".into(),
            subject: "Your Blood Panel Results Are Ready".into(),
            body: "Hello Jane Doe,\n\nYour Blood Panel results are: Normal.\n\nThank you and have a great day.".into(),
            attempts,
        }
    }

    #[tokio::test]
    async fn should_send_and_mark_processed() {
        let email = pending(0);
        let id = email.id;
        let outbox = MockOutbox::with_due(vec![email]);
        let mailer = MockMailer {
            fail: false,
            sent: Mutex::new(Vec::new()),
        };

        let delivered = drain_due(&outbox, &mailer).await.unwrap();

        assert_eq!(delivered, 1);
        assert_eq!(*outbox.processed.lock().unwrap(), vec![id]);
        assert!(outbox.failed.lock().unwrap().is_empty());
        let sent = mailer.sent.lock().unwrap();
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].0, "jane@example.com");
    }

    #[tokio::test]
    async fn should_record_failure_with_incremented_attempts() {
        let email = pending(0);
        let id = email.id;
        let outbox = MockOutbox::with_due(vec![email]);
        let mailer = MockMailer {
            fail: true,
            sent: Mutex::new(Vec::new()),
        };

        let delivered = drain_due(&outbox, &mailer).await.unwrap();

        assert_eq!(delivered, 0);
        assert!(outbox.processed.lock().unwrap().is_empty());
        let failed = outbox.failed.lock().unwrap();
        assert_eq!(failed.len(), 1);
        let (failed_id, attempts, error) = &failed[0];
        assert_eq!(*failed_id, id);
        assert_eq!(*attempts, 1);
        assert!(error.contains("relay returned 503"));
    }

    #[tokio::test]
    async fn should_keep_record_even_when_every_delivery_fails() {
        // The record side is untouched by delivery failures: the worker only
        // ever writes outbox bookkeeping, never deletes the intent.
        let email = pending(MAX_DELIVERY_ATTEMPTS - 1);
        let outbox = MockOutbox::with_due(vec![email]);
        let mailer = MockMailer {
            fail: true,
            sent: Mutex::new(Vec::new()),
        };

        drain_due(&outbox, &mailer).await.unwrap();

        let failed = outbox.failed.lock().unwrap();
        assert_eq!(failed[0].1, MAX_DELIVERY_ATTEMPTS);
    }

    #[tokio::test]
    async fn should_deliver_batch_in_order() {
        let first = pending(0);
        let second = pending(0);
        let ids = vec![first.id, second.id];
        let outbox = MockOutbox::with_due(vec![first, second]);
        let mailer = MockMailer {
            fail: false,
            sent: Mutex::new(Vec::new()),
        };

        let delivered = drain_due(&outbox, &mailer).await.unwrap();

        assert_eq!(delivered, 2);
        assert_eq!(*outbox.processed.lock().unwrap(), ids);
    }
}
