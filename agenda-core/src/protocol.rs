//! JSON envelopes for the agenda server API.
//!
//! Every mutating endpoint answers with a `status` field; only the exact
//! string `"success"` counts as success, anything else is a failure.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::{AgendaError, AgendaResult};
use crate::priority::Priority;

/// Body for `POST /save_event`. A present `id` makes this an update,
/// otherwise the server creates a new record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SaveEventRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub date: NaiveDate,
    /// Resolved time of day; `"00:00"` for all-day events.
    pub time: String,
    #[serde(rename = "type")]
    pub event_type: String,
    pub title: String,
    pub collaborators: String,
    pub priority: Priority,
    pub notes: String,
}

/// Body for `POST /delete_event`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeleteEventRequest {
    pub id: String,
}

/// Response to every mutating request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MutationResponse {
    pub status: String,
    /// Id of the written record; servers send this back on create.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub event_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl MutationResponse {
    pub fn is_success(&self) -> bool {
        self.status == "success"
    }

    /// Turn the envelope into a result, keeping the server's message
    /// when it sent one.
    pub fn into_result(self) -> AgendaResult<Option<String>> {
        if self.is_success() {
            Ok(self.event_id)
        } else {
            Err(AgendaError::Api(
                self.message
                    .unwrap_or_else(|| "request rejected by server".to_string()),
            ))
        }
    }
}
