use anyhow::Context as _;
use chrono::{Duration, Utc};
use sea_orm::{
    ActiveModelTrait, ActiveValue::Set, ColumnTrait, DatabaseConnection, DatabaseTransaction,
    EntityTrait, QueryFilter, QueryOrder, QuerySelect, SqlErr, TransactionTrait,
};
use uuid::Uuid;

use clinica_results_schema::{outbox_emails, patient_records, users};

use crate::domain::repository::{OutboxRepository, PatientRecordRepository, UserRepository};
use crate::domain::types::{
    EmailMessage, MAX_DELIVERY_ATTEMPTS, PatientRecord, PendingEmail, RETRY_BACKOFF_SECS, User,
};
use crate::error::ResultsServiceError;

// ── User repository ──────────────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbUserRepository {
    pub db: DatabaseConnection,
}

impl UserRepository for DbUserRepository {
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, ResultsServiceError> {
        let model = users::Entity::find()
            .filter(users::Column::Email.eq(email))
            .one(&self.db)
            .await
            .context("find user by email")?;
        Ok(model.map(user_from_model))
    }

    async fn create(&self, user: &User) -> Result<(), ResultsServiceError> {
        let result = users::ActiveModel {
            id: Set(user.id),
            email: Set(user.email.clone()),
            secret_hash: Set(user.secret_hash.clone()),
            created_at: Set(user.created_at),
        }
        .insert(&self.db)
        .await;

        match result {
            Ok(_) => Ok(()),
            // The unique index on email is the duplicate check — two racing
            // registrations serialize here instead of both succeeding.
            Err(e) if matches!(e.sql_err(), Some(SqlErr::UniqueConstraintViolation(_))) => {
                Err(ResultsServiceError::DuplicateEmail)
            }
            Err(e) => Err(anyhow::Error::new(e).context("create user").into()),
        }
    }
}

fn user_from_model(model: users::Model) -> User {
    User {
        id: model.id,
        email: model.email,
        secret_hash: model.secret_hash,
        created_at: model.created_at,
    }
}

// ── Patient record repository ────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbPatientRecordRepository {
    pub db: DatabaseConnection,
}

impl PatientRecordRepository for DbPatientRecordRepository {
    async fn list(&self) -> Result<Vec<PatientRecord>, ResultsServiceError> {
        let models = patient_records::Entity::find()
            .order_by_asc(patient_records::Column::CreatedAt)
            .all(&self.db)
            .await
            .context("list patient records")?;
        Ok(models.into_iter().map(record_from_model).collect())
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<PatientRecord>, ResultsServiceError> {
        let model = patient_records::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .context("find patient record by id")?;
        Ok(model.map(record_from_model))
    }

    async fn create_with_outbox(
        &self,
        record: &PatientRecord,
        email: &EmailMessage,
    ) -> Result<(), ResultsServiceError> {
        self.db
            .transaction::<_, (), sea_orm::DbErr>(|txn| {
                let record = record.clone();
                let email = email.clone();
                Box::pin(async move {
                    insert_patient_record(txn, &record).await?;
                    insert_outbox_email(txn, &email).await?;
                    Ok(())
                })
            })
            .await
            .context("create patient record with outbox")?;
        Ok(())
    }

    async fn delete(&self, id: Uuid) -> Result<bool, ResultsServiceError> {
        let result = patient_records::Entity::delete_by_id(id)
            .exec(&self.db)
            .await
            .context("delete patient record")?;
        Ok(result.rows_affected > 0)
    }
}

async fn insert_patient_record(
    txn: &DatabaseTransaction,
    record: &PatientRecord,
) -> Result<(), sea_orm::DbErr> {
    patient_records::ActiveModel {
        id: Set(record.id),
        name: Set(record.name.clone()),
        email: Set(record.email.clone()),
        test_type: Set(record.test_type.clone()),
        result_summary: Set(record.result_summary.clone()),
        created_at: Set(record.created_at),
    }
    .insert(txn)
    .await?;
    Ok(())
}

async fn insert_outbox_email(
    txn: &DatabaseTransaction,
    email: &EmailMessage,
) -> Result<(), sea_orm::DbErr> {
    let now = Utc::now();
    outbox_emails::ActiveModel {
        id: Set(email.id),
        recipient: Set(email.recipient.clone()),
        subject: Set(email.subject.clone()),
        body: Set(email.body.clone()),
        idempotency_key: Set(email.idempotency_key.clone()),
        attempts: Set(0),
        last_error: Set(None),
        created_at: Set(now),
        next_attempt_at: Set(now),
        processed_at: Set(None),
        failed_at: Set(None),
    }
    .insert(txn)
    .await?;
    Ok(())
}

fn record_from_model(model: patient_records::Model) -> PatientRecord {
    PatientRecord {
        id: model.id,
        name: model.name,
        email: model.email,
        test_type: model.test_type,
        result_summary: model.result_summary,
        created_at: model.created_at,
    }
}

// ── Outbox repository ────────────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbOutboxRepository {
    pub db: DatabaseConnection,
}

impl OutboxRepository for DbOutboxRepository {
    async fn fetch_due(&self, limit: u64) -> Result<Vec<PendingEmail>, ResultsServiceError> {
        let now = Utc::now();
        let models = outbox_emails::Entity::find()
            .filter(outbox_emails::Column::ProcessedAt.is_null())
            .filter(outbox_emails::Column::FailedAt.is_null())
            .filter(outbox_emails::Column::NextAttemptAt.lte(now))
            .order_by_asc(outbox_emails::Column::NextAttemptAt)
            .limit(limit)
            .all(&self.db)
            .await
            .context("fetch due outbox emails")?;
        Ok(models
            .into_iter()
            .map(|m| PendingEmail {
                id: m.id,
                recipient: m.recipient,
                subject: m.subject,
                body: m.body,
                attempts: m.attempts,
            })
            .collect())
    }

    async fn mark_processed(&self, id: Uuid) -> Result<(), ResultsServiceError> {
        outbox_emails::ActiveModel {
            id: Set(id),
            processed_at: Set(Some(Utc::now())),
            ..Default::default()
        }
        .update(&self.db)
        .await
        .context("mark outbox email processed")?;
        Ok(())
    }

    async fn mark_failed(
        &self,
        id: Uuid,
        attempts: i32,
        error: &str,
    ) -> Result<(), ResultsServiceError> {
        let now = Utc::now();
        let mut am = outbox_emails::ActiveModel {
            id: Set(id),
            attempts: Set(attempts),
            last_error: Set(Some(error.to_owned())),
            next_attempt_at: Set(now + Duration::seconds(RETRY_BACKOFF_SECS * attempts as i64)),
            ..Default::default()
        };
        if attempts >= MAX_DELIVERY_ATTEMPTS {
            am.failed_at = Set(Some(now));
        }
        am.update(&self.db)
            .await
            .context("mark outbox email failed")?;
        Ok(())
    }
}
