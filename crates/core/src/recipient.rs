//! The recipient descriptor attached to every notification record.
//!
//! Serialized as an internally tagged JSON object, matching what clients
//! store in the `notifications.recipient` column:
//!
//! ```json
//! {"type": "all"}
//! {"type": "user", "id": "..."}
//! {"type": "teacher", "id": "..."}
//! {"type": "course", "id": "..."}
//! ```
//!
//! `teacher` is a wire-level alias of the single-account kind: the fan-out
//! resolves both through the same account lookup.

use serde::{Deserialize, Serialize};

use crate::types::DbId;

/// Who a notification is addressed to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Recipient {
    /// Every staff account and every student.
    All,
    /// A single account, looked up across staff and students.
    User { id: DbId },
    /// A single teacher account. Resolved identically to [`Recipient::User`].
    Teacher { id: DbId },
    /// Every student enrolled in the course, via grade-level assignment.
    Course { id: DbId },
    /// Any tag this build does not recognize. Resolves to no recipients.
    #[serde(other)]
    Unknown,
}

impl Recipient {
    /// Decode a stored descriptor, tolerating malformed values.
    ///
    /// A missing `type`, a missing `id` on a kind that requires one, or a
    /// non-object value all decode to [`Recipient::Unknown`] so that a bad
    /// record yields zero recipients instead of failing the whole fan-out.
    pub fn from_value(value: &serde_json::Value) -> Self {
        serde_json::from_value(value.clone()).unwrap_or(Recipient::Unknown)
    }

    /// Short tag name for log fields.
    pub fn kind(&self) -> &'static str {
        match self {
            Recipient::All => "all",
            Recipient::User { .. } => "user",
            Recipient::Teacher { .. } => "teacher",
            Recipient::Course { .. } => "course",
            Recipient::Unknown => "unknown",
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;
    use serde_json::json;

    #[test]
    fn decodes_all_kind_without_id() {
        let r = Recipient::from_value(&json!({"type": "all"}));
        assert_eq!(r, Recipient::All);
    }

    #[test]
    fn decodes_user_and_teacher_kinds() {
        let id = uuid::Uuid::new_v4();
        let user = Recipient::from_value(&json!({"type": "user", "id": id}));
        assert_eq!(user, Recipient::User { id });

        let teacher = Recipient::from_value(&json!({"type": "teacher", "id": id}));
        assert_eq!(teacher, Recipient::Teacher { id });
    }

    #[test]
    fn decodes_course_kind() {
        let id = uuid::Uuid::new_v4();
        let r = Recipient::from_value(&json!({"type": "course", "id": id}));
        assert_eq!(r, Recipient::Course { id });
    }

    #[test]
    fn unknown_tag_decodes_to_unknown() {
        let r = Recipient::from_value(&json!({"type": "parents", "id": "x"}));
        assert_matches!(r, Recipient::Unknown);
    }

    #[test]
    fn malformed_values_decode_to_unknown() {
        // Missing id on a kind that requires one.
        assert_matches!(
            Recipient::from_value(&json!({"type": "user"})),
            Recipient::Unknown
        );
        // Missing type entirely.
        assert_matches!(
            Recipient::from_value(&json!({"id": "u1"})),
            Recipient::Unknown
        );
        // Not an object at all.
        assert_matches!(Recipient::from_value(&json!("all")), Recipient::Unknown);
        assert_matches!(Recipient::from_value(&json!(null)), Recipient::Unknown);
    }

    #[test]
    fn round_trips_through_json() {
        let id = uuid::Uuid::new_v4();
        let original = Recipient::Course { id };
        let value = serde_json::to_value(&original).unwrap();
        assert_eq!(value["type"], "course");
        assert_eq!(Recipient::from_value(&value), original);
    }
}
