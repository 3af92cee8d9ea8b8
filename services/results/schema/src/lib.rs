//! sea-orm entities for the results service.
//!
//! `users` and `patient_records` are deliberately unrelated — any
//! authenticated staff member may list or delete any record.

pub mod outbox_emails;
pub mod patient_records;
pub mod users;
