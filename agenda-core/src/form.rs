//! The editable event draft.
//!
//! `EventForm` is the in-memory state of one editing session: what the
//! modal's fields would hold in a browser. `populate` fills it from a
//! server record and `serialize` turns it back into a save payload,
//! applying the normalization rules:
//!
//! - all-day checked (or a blank time field) serializes as `"00:00"`
//! - an unknown type label shows up as "Other" + custom text and is
//!   emitted back verbatim
//! - collaborators split into known checkboxes plus an "other" field and
//!   rejoin with `", "`
//!
//! Validation happens here, before any network traffic: an empty title
//! or date fails immediately and the draft stays untouched.

use std::path::PathBuf;

use chrono::NaiveDate;

use crate::collaborators::{
    CollaboratorSelection, parse_collaborators, serialize_collaborators,
};
use crate::error::ValidationError;
use crate::event::{ALL_DAY_TIME, Event};
use crate::event_type::EventType;
use crate::priority::Priority;
use crate::protocol::SaveEventRequest;

/// Field state of one editing session.
#[derive(Debug, Clone, Default)]
pub struct EventForm {
    /// Bound record id. `None` means this session creates a new event;
    /// this binding alone decides create vs. update on save.
    pub id: Option<String>,

    /// Date field text, ISO `YYYY-MM-DD`.
    pub date: String,

    /// Time field text, `HH:MM`. Ignored while `all_day` is set.
    pub time: String,

    pub all_day: bool,

    /// Current selector choice. `Other(..)` means the custom input is
    /// active; its text lives in `type_custom`.
    pub event_type: EventType,
    pub type_custom: String,

    pub title: String,

    /// Known names currently checked, in declaration order.
    pub checked_collaborators: Vec<String>,
    /// Free-text field for collaborators without a checkbox.
    pub other_collaborators: String,

    pub priority: Priority,
    pub notes: String,

    /// Attachments already on the server (read-only here).
    pub files: Vec<String>,
    /// Local files queued for upload after a successful save.
    pub pending_uploads: Vec<PathBuf>,
}

impl EventForm {
    /// Fresh draft for a new event on the given date.
    pub fn new_for(date: NaiveDate) -> Self {
        EventForm {
            date: date.to_string(),
            ..Default::default()
        }
    }

    /// Fill every field from a server record.
    pub fn populate(record: &Event, known_collaborators: &[String]) -> Self {
        let (event_type, type_custom) = match EventType::from_label(&record.event_type) {
            EventType::Other(custom) => (EventType::Other(custom.clone()), custom),
            known => (known, String::new()),
        };

        let CollaboratorSelection { checked, other } =
            parse_collaborators(&record.collaborators, known_collaborators);

        let all_day = record.is_all_day();

        EventForm {
            id: if record.id.is_empty() {
                None
            } else {
                Some(record.id.clone())
            },
            date: record.date.to_string(),
            time: if all_day { String::new() } else { record.time.clone() },
            all_day,
            event_type,
            type_custom,
            title: record.title.clone(),
            checked_collaborators: checked,
            other_collaborators: other,
            priority: record.priority,
            notes: record.notes.clone(),
            files: record.files.clone(),
            pending_uploads: Vec::new(),
        }
    }

    /// Whether this session updates an existing record.
    pub fn is_update(&self) -> bool {
        self.id.is_some()
    }

    /// Resolve the draft into a save payload. Fails fast on local
    /// validation without touching anything.
    pub fn serialize(&self) -> Result<SaveEventRequest, ValidationError> {
        let title = self.title.trim();
        if title.is_empty() {
            return Err(ValidationError::TitleRequired);
        }

        let date_text = self.date.trim();
        if date_text.is_empty() {
            return Err(ValidationError::DateRequired);
        }
        let date = NaiveDate::parse_from_str(date_text, "%Y-%m-%d")
            .map_err(|_| ValidationError::DateInvalid(date_text.to_string()))?;

        let time = if self.all_day || self.time.trim().is_empty() {
            ALL_DAY_TIME.to_string()
        } else {
            self.time.trim().to_string()
        };

        let event_type = if self.event_type.is_other() {
            let custom = self.type_custom.trim();
            if custom.is_empty() {
                crate::event_type::OTHER_LABEL.to_string()
            } else {
                custom.to_string()
            }
        } else {
            self.event_type.label().to_string()
        };

        let collaborators = serialize_collaborators(&CollaboratorSelection {
            checked: self.checked_collaborators.clone(),
            other: self.other_collaborators.clone(),
        });

        Ok(SaveEventRequest {
            id: self.id.clone(),
            date,
            time,
            event_type,
            title: title.to_string(),
            collaborators,
            priority: self.priority,
            notes: self.notes.clone(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn known() -> Vec<String> {
        vec!["Denis".to_string(), "Isis".to_string()]
    }

    fn record() -> Event {
        serde_json::from_str(
            r#"{
                "id": "12",
                "date": "2024-03-05",
                "time": "14:30",
                "type": "Team meeting",
                "title": "Quarterly review",
                "collaborators": "Denis, Isis, Consultant X",
                "priority": "high",
                "notes": "Bring the Q1 numbers",
                "files": ["12/agenda.pdf"]
            }"#,
        )
        .unwrap()
    }

    #[test]
    fn populate_then_serialize_reproduces_the_record() {
        let form = EventForm::populate(&record(), &known());
        let payload = form.serialize().unwrap();

        assert_eq!(payload.id.as_deref(), Some("12"));
        assert_eq!(payload.date.to_string(), "2024-03-05");
        assert_eq!(payload.time, "14:30");
        assert_eq!(payload.event_type, "Team meeting");
        assert_eq!(payload.title, "Quarterly review");
        assert_eq!(payload.collaborators, "Denis, Isis, Consultant X");
        assert_eq!(payload.priority, Priority::High);
        assert_eq!(payload.notes, "Bring the Q1 numbers");
    }

    #[test]
    fn populate_routes_unknown_type_through_other() {
        let mut rec = record();
        rec.event_type = "Consulting".to_string();

        let form = EventForm::populate(&rec, &known());
        assert!(form.event_type.is_other());
        assert_eq!(form.type_custom, "Consulting");
        assert_eq!(form.serialize().unwrap().event_type, "Consulting");
    }

    #[test]
    fn populate_checks_known_collaborators() {
        let form = EventForm::populate(&record(), &known());
        assert_eq!(form.checked_collaborators, vec!["Denis", "Isis"]);
        assert_eq!(form.other_collaborators, "Consultant X");
    }

    #[test]
    fn zero_time_populates_as_all_day() {
        let mut rec = record();
        rec.time = "00:00".to_string();

        let form = EventForm::populate(&rec, &known());
        assert!(form.all_day);
        assert!(form.time.is_empty());
    }

    #[test]
    fn all_day_overrides_stale_time_text() {
        let mut form = EventForm::populate(&record(), &known());
        form.all_day = true;
        form.time = "14:30".to_string();

        assert_eq!(form.serialize().unwrap().time, "00:00");
    }

    #[test]
    fn blank_time_defaults_to_all_day_sentinel() {
        let mut form = EventForm::new_for(NaiveDate::from_ymd_opt(2024, 3, 5).unwrap());
        form.title = "Cleaning".to_string();

        let payload = form.serialize().unwrap();
        assert_eq!(payload.title, "Cleaning");
        assert_eq!(payload.date.to_string(), "2024-03-05");
        assert_eq!(payload.time, "00:00");
        assert!(payload.id.is_none());
    }

    #[test]
    fn other_type_resolves_custom_text_or_literal() {
        let mut form = EventForm::new_for(NaiveDate::from_ymd_opt(2024, 3, 5).unwrap());
        form.title = "x".to_string();
        form.event_type = EventType::Other(String::new());

        form.type_custom = "  Consulting  ".to_string();
        assert_eq!(form.serialize().unwrap().event_type, "Consulting");

        form.type_custom = "   ".to_string();
        assert_eq!(form.serialize().unwrap().event_type, "Other");
    }

    #[test]
    fn empty_title_fails_validation() {
        let mut form = EventForm::new_for(NaiveDate::from_ymd_opt(2024, 3, 5).unwrap());
        form.title = "   ".to_string();
        assert_eq!(form.serialize().unwrap_err(), ValidationError::TitleRequired);
    }

    #[test]
    fn empty_date_fails_validation() {
        let mut form = EventForm::default();
        form.title = "x".to_string();
        assert_eq!(form.serialize().unwrap_err(), ValidationError::DateRequired);

        form.date = "05/03/2024".to_string();
        assert!(matches!(
            form.serialize().unwrap_err(),
            ValidationError::DateInvalid(_)
        ));
    }
}
