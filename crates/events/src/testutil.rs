//! In-memory doubles for the directory-store and push-transport
//! capabilities, plus row builders, shared across this crate's tests.

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use aula_core::types::DbId;
use aula_db::models::event::CalendarEvent;
use aula_db::models::notification::Notification;
use chrono::NaiveDate;
use uuid::Uuid;

use crate::delivery::{PushMessage, PushTransport, SendOutcome, TransportError};
use crate::directory::{DirectoryStore, StoreError};

// ---------------------------------------------------------------------------
// InMemoryDirectory
// ---------------------------------------------------------------------------

/// A [`DirectoryStore`] over plain vectors and maps.
#[derive(Default)]
pub(crate) struct InMemoryDirectory {
    /// Token lists, one entry per staff account.
    pub staff: Vec<Vec<String>>,
    /// (grade_level, tokens), one entry per student.
    pub students: Vec<(String, Vec<String>)>,
    /// Point-lookup table for single-account resolution.
    pub accounts: HashMap<DbId, Vec<String>>,
    /// course id -> grade levels the course is taught in.
    pub course_grades: HashMap<DbId, Vec<String>>,
    /// Make the staff scan fail, to exercise fail-open behavior.
    pub fail_staff_scan: bool,
    /// Make the student scan fail.
    pub fail_student_scan: bool,
    /// How many times `student_tokens_in_grades` was called.
    pub student_grade_queries: AtomicUsize,
}

#[async_trait]
impl DirectoryStore for InMemoryDirectory {
    async fn all_staff_tokens(&self) -> Result<Vec<String>, StoreError> {
        if self.fail_staff_scan {
            return Err(StoreError::Unavailable("staff scan failed".to_string()));
        }
        Ok(self.staff.iter().flatten().cloned().collect())
    }

    async fn all_student_tokens(&self) -> Result<Vec<String>, StoreError> {
        if self.fail_student_scan {
            return Err(StoreError::Unavailable("student scan failed".to_string()));
        }
        Ok(self
            .students
            .iter()
            .flat_map(|(_, tokens)| tokens.iter().cloned())
            .collect())
    }

    async fn account_tokens(&self, id: DbId) -> Result<Vec<String>, StoreError> {
        Ok(self.accounts.get(&id).cloned().unwrap_or_default())
    }

    async fn grades_assigned_to_course(&self, course_id: DbId) -> Result<Vec<String>, StoreError> {
        Ok(self.course_grades.get(&course_id).cloned().unwrap_or_default())
    }

    async fn student_tokens_in_grades(
        &self,
        grades: &[String],
    ) -> Result<Vec<String>, StoreError> {
        self.student_grade_queries.fetch_add(1, Ordering::SeqCst);
        Ok(self
            .students
            .iter()
            .filter(|(grade, _)| grades.contains(grade))
            .flat_map(|(_, tokens)| tokens.iter().cloned())
            .collect())
    }
}

// ---------------------------------------------------------------------------
// RecordingTransport
// ---------------------------------------------------------------------------

/// A [`PushTransport`] that records every multicast it receives.
#[derive(Default)]
pub(crate) struct RecordingTransport {
    /// Every message passed to `send_multicast`, in call order.
    pub calls: Arc<Mutex<Vec<PushMessage>>>,
    /// Tokens to report as failed with reason `NotRegistered`.
    pub failing_tokens: Vec<String>,
    /// When set, the whole call errors with this message.
    pub fail_all: Option<String>,
    /// When set, drop the last result entry to simulate a short response.
    pub truncate_results: bool,
}

#[async_trait]
impl PushTransport for RecordingTransport {
    async fn send_multicast(
        &self,
        message: &PushMessage,
    ) -> Result<Vec<SendOutcome>, TransportError> {
        self.calls.lock().unwrap().push(message.clone());

        if let Some(reason) = &self.fail_all {
            return Err(TransportError::Response(reason.clone()));
        }

        let mut outcomes: Vec<SendOutcome> = message
            .tokens
            .iter()
            .map(|token| {
                if self.failing_tokens.contains(token) {
                    SendOutcome::Failed("NotRegistered".to_string())
                } else {
                    SendOutcome::Delivered
                }
            })
            .collect();

        if self.truncate_results {
            outcomes.pop();
        }

        Ok(outcomes)
    }
}

// ---------------------------------------------------------------------------
// Row builders
// ---------------------------------------------------------------------------

pub(crate) fn notification_row(
    title: &str,
    description: &str,
    recipient: serde_json::Value,
) -> Notification {
    Notification {
        id: Uuid::new_v4(),
        title: title.to_string(),
        description: description.to_string(),
        sender_id: None,
        recipient,
        created_at: chrono::Utc::now(),
    }
}

pub(crate) fn event_row(title: &str, date: Option<NaiveDate>) -> CalendarEvent {
    CalendarEvent {
        id: Uuid::new_v4(),
        title: title.to_string(),
        description: None,
        category: "academico".to_string(),
        date,
        created_at: chrono::Utc::now(),
    }
}
