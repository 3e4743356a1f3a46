//! The server-owned event record.
//!
//! The server is the source of truth; the client holds a transient copy
//! while an editing session is open and writes it back as a whole. Field
//! names follow the JSON contract (`type` on the wire, `event_type` in
//! Rust).

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::priority::Priority;

/// Time-of-day value the server stores for events without a specific
/// time. An empty string means the same thing on read.
pub const ALL_DAY_TIME: &str = "00:00";

/// A calendar event as stored on the server.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Event {
    /// Opaque server-assigned identifier. Empty means "not yet persisted".
    #[serde(default)]
    pub id: String,

    /// Calendar date (ISO `YYYY-MM-DD`).
    pub date: NaiveDate,

    /// Time of day as `HH:MM`. Empty or `"00:00"` means all day.
    #[serde(default)]
    pub time: String,

    /// Event type label. Usually one of the known set, but the server
    /// accepts and returns arbitrary labels for "Other" events.
    #[serde(rename = "type")]
    pub event_type: String,

    pub title: String,

    /// Comma-joined participant names, e.g. `"Denis, Isis, Consultant X"`.
    #[serde(default)]
    pub collaborators: String,

    #[serde(default)]
    pub priority: Priority,

    #[serde(default)]
    pub notes: String,

    /// Relative paths of previously uploaded attachments.
    #[serde(default)]
    pub files: Vec<String>,
}

impl Event {
    /// Whether this record represents an all-day event.
    pub fn is_all_day(&self) -> bool {
        self.time.is_empty() || self.time == ALL_DAY_TIME
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_minimal_record() {
        let json = r#"{
            "id": "7",
            "date": "2024-03-05",
            "type": "Team meeting",
            "title": "Weekly sync"
        }"#;

        let event: Event = serde_json::from_str(json).unwrap();
        assert_eq!(event.id, "7");
        assert_eq!(event.date, NaiveDate::from_ymd_opt(2024, 3, 5).unwrap());
        assert!(event.is_all_day());
        assert_eq!(event.priority, Priority::Normal);
        assert!(event.files.is_empty());
    }

    #[test]
    fn all_day_detection() {
        let mut event: Event = serde_json::from_str(
            r#"{"id":"1","date":"2024-01-01","type":"Admin","title":"x","time":"09:30"}"#,
        )
        .unwrap();
        assert!(!event.is_all_day());

        event.time = ALL_DAY_TIME.to_string();
        assert!(event.is_all_day());
    }
}
