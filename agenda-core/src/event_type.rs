//! Event type labels.
//!
//! The form presents a fixed set of types plus an "Other" option with a
//! free-text input. Unknown labels coming back from the server must
//! survive a populate/serialize round trip, so `Other` carries the
//! original text instead of dropping it.

use serde::{Deserialize, Serialize};

/// Literal label used when "Other" is selected but no custom text given.
pub const OTHER_LABEL: &str = "Other";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(into = "String", from = "String")]
pub enum EventType {
    ClientMeeting,
    SupplierMeeting,
    TeamMeeting,
    Admin,
    Emergency,
    Training,
    /// Free-text type. Empty string means "Other" was picked but no
    /// custom label entered yet.
    Other(String),
}

/// The fixed set offered in the type selector, in display order.
pub const KNOWN_TYPES: [EventType; 6] = [
    EventType::ClientMeeting,
    EventType::SupplierMeeting,
    EventType::TeamMeeting,
    EventType::Admin,
    EventType::Emergency,
    EventType::Training,
];

impl EventType {
    /// The wire/display label for this type.
    pub fn label(&self) -> &str {
        match self {
            EventType::ClientMeeting => "Client meeting",
            EventType::SupplierMeeting => "Supplier meeting",
            EventType::TeamMeeting => "Team meeting",
            EventType::Admin => "Admin",
            EventType::Emergency => "Emergency",
            EventType::Training => "Training",
            EventType::Other(custom) => {
                if custom.is_empty() {
                    OTHER_LABEL
                } else {
                    custom
                }
            }
        }
    }

    /// Parse a wire label. Anything outside the known set becomes
    /// `Other` with the label preserved verbatim.
    pub fn from_label(label: &str) -> EventType {
        for known in KNOWN_TYPES {
            if known.label() == label {
                return known;
            }
        }
        if label == OTHER_LABEL {
            EventType::Other(String::new())
        } else {
            EventType::Other(label.to_string())
        }
    }

    pub fn is_other(&self) -> bool {
        matches!(self, EventType::Other(_))
    }
}

impl Default for EventType {
    fn default() -> Self {
        EventType::ClientMeeting
    }
}

impl From<EventType> for String {
    fn from(value: EventType) -> Self {
        value.label().to_string()
    }
}

impl From<String> for EventType {
    fn from(value: String) -> Self {
        EventType::from_label(&value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_labels_round_trip() {
        for known in KNOWN_TYPES {
            assert_eq!(EventType::from_label(known.label()), known);
        }
    }

    #[test]
    fn unknown_label_is_preserved_as_other() {
        let parsed = EventType::from_label("Consulting");
        assert_eq!(parsed, EventType::Other("Consulting".to_string()));
        assert_eq!(parsed.label(), "Consulting");
    }

    #[test]
    fn bare_other_has_empty_custom_text() {
        assert_eq!(
            EventType::from_label(OTHER_LABEL),
            EventType::Other(String::new())
        );
        assert_eq!(EventType::Other(String::new()).label(), OTHER_LABEL);
    }
}
