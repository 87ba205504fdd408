//! Recipient resolution: descriptor in, deduplicated token set out.
//!
//! Resolution never fails. A directory sub-query that errors is logged
//! and contributes nothing, so a flaky lookup shrinks the audience
//! instead of aborting the whole fan-out.

use aula_core::recipient::Recipient;

use crate::directory::{DirectoryStore, StoreError};

/// Resolve a recipient descriptor into the device tokens to notify.
///
/// The returned list has set semantics: every token appears once, in
/// first-seen order, no matter how many accounts contributed it.
///
/// Behavior by kind:
///
/// - `All` -- union of the staff and student scans. The two scans have no
///   data dependency and run concurrently.
/// - `User` / `Teacher` -- point lookup of one account; an unknown id
///   contributes nothing.
/// - `Course` -- two stages: grade levels assigned to the course first,
///   then students in those grade levels. The second query's filter set
///   is the first query's output, so the stages are sequential. A course
///   taught in zero grade levels resolves to the empty set.
/// - `Unknown` -- empty set.
pub async fn resolve<S>(store: &S, recipient: &Recipient) -> Vec<String>
where
    S: DirectoryStore + ?Sized,
{
    let tokens = match recipient {
        Recipient::All => {
            let (staff, students) =
                tokio::join!(store.all_staff_tokens(), store.all_student_tokens());
            let mut tokens = or_empty(staff, "staff token scan");
            tokens.extend(or_empty(students, "student token scan"));
            tokens
        }

        Recipient::User { id } | Recipient::Teacher { id } => {
            or_empty(store.account_tokens(*id).await, "account token lookup")
        }

        Recipient::Course { id } => {
            let grades = or_empty(
                store.grades_assigned_to_course(*id).await,
                "course grade lookup",
            );
            if grades.is_empty() {
                tracing::debug!(course_id = %id, "Course assigned to no grade levels; no recipients");
                Vec::new()
            } else {
                or_empty(
                    store.student_tokens_in_grades(&grades).await,
                    "student token lookup",
                )
            }
        }

        Recipient::Unknown => {
            tracing::warn!("Recipient kind missing or unrecognized; resolving to no recipients");
            Vec::new()
        }
    };

    dedup(tokens)
}

/// Unwrap a sub-query result, logging and contributing nothing on error.
fn or_empty(result: Result<Vec<String>, StoreError>, query: &str) -> Vec<String> {
    match result {
        Ok(tokens) => tokens,
        Err(e) => {
            tracing::warn!(error = %e, query, "Directory sub-query failed; contributing no recipients");
            Vec::new()
        }
    }
}

/// Remove duplicate tokens, keeping first-seen order.
fn dedup(tokens: Vec<String>) -> Vec<String> {
    let mut seen = std::collections::HashSet::new();
    tokens.into_iter().filter(|t| seen.insert(t.clone())).collect()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
