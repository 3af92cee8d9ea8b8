use chrono::Utc;
use uuid::Uuid;

use crate::domain::notification::ResultsReadyEmail;
use crate::domain::repository::PatientRecordRepository;
use crate::domain::types::{EmailMessage, PatientRecord};
use crate::error::ResultsServiceError;

// ── ListRecords ──────────────────────────────────────────────────────────────

pub struct ListRecordsUseCase<R: PatientRecordRepository> {
    pub repo: R,
}

impl<R: PatientRecordRepository> ListRecordsUseCase<R> {
    pub async fn execute(&self) -> Result<Vec<PatientRecord>, ResultsServiceError> {
        self.repo.list().await
    }
}

// ── AddRecord ────────────────────────────────────────────────────────────────

pub struct AddRecordInput {
    pub name: String,
    pub email: String,
    pub test_type: String,
    pub result_summary: String,
}

pub struct AddRecordUseCase<R: PatientRecordRepository> {
    pub repo: R,
}

impl<R: PatientRecordRepository> AddRecordUseCase<R> {
    /// Persist the record together with its rendered notification, in one
    /// transaction. Success means both committed; delivery itself happens
    /// asynchronously and never rolls the record back.
    pub async fn execute(
        &self,
        input: AddRecordInput,
    ) -> Result<PatientRecord, ResultsServiceError> {
        let record = PatientRecord {
            id: Uuid::now_v7(),
            name: input.name,
            email: input.email,
            test_type: input.test_type,
            result_summary: input.result_summary,
            created_at: Utc::now(),
        };

        let rendered = ResultsReadyEmail {
            name: &record.name,
            test_type: &record.test_type,
            result_summary: &record.result_summary,
        };
        let email = EmailMessage {
            id: Uuid::new_v4(),
            recipient: record.email.clone(),
            subject: rendered.subject(),
            body: rendered.body(),
            idempotency_key: format!("record_created:{}", record.id),
        };

        self.repo.create_with_outbox(&record, &email).await?;
        Ok(record)
    }
}

// ── RemoveRecord ─────────────────────────────────────────────────────────────

pub struct RemoveRecordUseCase<R: PatientRecordRepository> {
    pub repo: R,
}

impl<R: PatientRecordRepository> RemoveRecordUseCase<R> {
    pub async fn execute(&self, id: Uuid) -> Result<(), ResultsServiceError> {
        if !self.repo.delete(id).await? {
            return Err(ResultsServiceError::NotFound);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    #[derive(Default)]
    struct MockRecordRepo {
        records: Vec<PatientRecord>,
        created: Mutex<Vec<(PatientRecord, EmailMessage)>>,
    }

    impl PatientRecordRepository for MockRecordRepo {
        async fn list(&self) -> Result<Vec<PatientRecord>, ResultsServiceError> {
            Ok(self.records.clone())
        }

        async fn find_by_id(
            &self,
            id: Uuid,
        ) -> Result<Option<PatientRecord>, ResultsServiceError> {
            Ok(self.records.iter().find(|r| r.id == id).cloned())
        }

        async fn create_with_outbox(
            &self,
            record: &PatientRecord,
            email: &EmailMessage,
        ) -> Result<(), ResultsServiceError> {
            self.created
                .lock()
                .unwrap()
                .push((record.clone(), email.clone()));
            Ok(())
        }

        async fn delete(&self, id: Uuid) -> Result<bool, ResultsServiceError> {
            Ok(self.records.iter().any(|r| r.id == id))
        }
    }

    fn sample_record() -> PatientRecord {
        PatientRecord {
            id: Uuid::now_v7(),
            name: "John Roe".into(),
            email: "john@example.com".into(),
            test_type: "Lipid Profile".into(),
            result_summary: "Elevated LDL".into(),
            created_at: Utc::now(),
        }
    }

    #[tokio::test]
    async fn should_persist_record_with_exactly_one_notification() {
        let usecase = AddRecordUseCase {
            repo: MockRecordRepo::default(),
        };

        let record = usecase
            .execute(AddRecordInput {
                name: "Jane Doe".into(),
                email: "jane@example.com".into(),
                test_type: "Blood Panel".into(),
                result_summary: "Normal".into(),
            })
            .await
            .unwrap();

        let created = usecase.repo.created.lock().unwrap();
        assert_eq!(created.len(), 1);
        let (stored, email) = &created[0];
        assert_eq!(stored.id, record.id);
        assert_eq!(stored.name, "Jane Doe");
        assert_eq!(stored.email, "jane@example.com");
        assert_eq!(stored.test_type, "Blood Panel");
        assert_eq!(stored.result_summary, "Normal");

        assert_eq!(email.recipient, "jane@example.com");
        assert_eq!(email.subject, "Your Blood Panel Results Are Ready");
        assert_eq!(
            email.body,
            "Hello Jane Doe,\n\nYour Blood Panel results are: Normal.\n\nThank you and have a great day."
        );
        assert_eq!(email.idempotency_key, format!("record_created:{}", record.id));
    }

    #[tokio::test]
    async fn should_list_records_from_store() {
        let record = sample_record();
        let usecase = ListRecordsUseCase {
            repo: MockRecordRepo {
                records: vec![record.clone()],
                created: Mutex::new(Vec::new()),
            },
        };

        let records = usecase.execute().await.unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].id, record.id);
    }

    #[tokio::test]
    async fn should_remove_existing_record() {
        let record = sample_record();
        let usecase = RemoveRecordUseCase {
            repo: MockRecordRepo {
                records: vec![record.clone()],
                created: Mutex::new(Vec::new()),
            },
        };

        assert!(usecase.execute(record.id).await.is_ok());
    }

    #[tokio::test]
    async fn should_return_not_found_for_missing_record() {
        let usecase = RemoveRecordUseCase {
            repo: MockRecordRepo::default(),
        };

        let result = usecase.execute(Uuid::now_v7()).await;
        assert!(matches!(result, Err(ResultsServiceError::NotFound)));
    }
}
