//! Core types for the agenda client.
//!
//! This crate provides everything the interactive client shares with
//! embeddings and tests:
//! - `Event` and the editable `EventForm` draft
//! - `collaborators` parsing for the comma-joined participant string
//! - `protocol` module with the JSON request/response envelopes
//! - `config` for the user's `config.toml`

pub mod collaborators;
pub mod config;
pub mod error;
pub mod event;
pub mod event_type;
pub mod form;
pub mod priority;
pub mod protocol;

pub use collaborators::{CollaboratorSelection, parse_collaborators, serialize_collaborators};
pub use config::GlobalConfig;
pub use error::{AgendaError, AgendaResult, ValidationError};
pub use event::Event;
pub use event_type::EventType;
pub use form::EventForm;
pub use priority::Priority;
pub use protocol::{DeleteEventRequest, MutationResponse, SaveEventRequest};
