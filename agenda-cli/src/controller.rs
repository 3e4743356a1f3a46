//! Event form controller.
//!
//! Owns one editing session end to end: opening (blank or populated from
//! a fetched record), field edits, the save/delete round trips, and the
//! refresh notification afterwards. All session state lives in this one
//! struct; nothing ambient survives a close.
//!
//! The rendering layer (terminal prompts here, a modal dialog in a GUI)
//! only ever mutates the `EventForm` it borrows and decides when to call
//! `save`/`delete`, so the whole flow is testable against a fake
//! transport.

use std::path::PathBuf;

use agenda_core::{AgendaError, EventForm};
use anyhow::{Result, bail};
use chrono::NaiveDate;

use crate::client::EventApi;

/// Where the session currently is. A draft exists exactly while the
/// state is not `Closed` or `Loading`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    Closed,
    Loading,
    Editing,
    Saving,
    Uploading,
    Deleting,
}

/// What a successful save produced.
#[derive(Debug)]
pub struct SaveOutcome {
    /// Id of the written record, when known.
    pub event_id: Option<String>,
    /// True when this save created the record rather than updating it.
    pub created: bool,
    /// Set when the best-effort attachment upload failed. The record
    /// itself was still written; the caller decides how to show this.
    pub upload_warning: Option<String>,
}

pub struct FormController<A: EventApi> {
    api: A,
    known_collaborators: Vec<String>,
    /// Invoked after every successful mutation, in place of the web
    /// client's full page reload. A GUI would refetch its grid here.
    on_refresh: Box<dyn Fn() + Send + Sync>,
    state: SessionState,
    form: Option<EventForm>,
}

impl<A: EventApi> FormController<A> {
    pub fn new(
        api: A,
        known_collaborators: Vec<String>,
        on_refresh: Box<dyn Fn() + Send + Sync>,
    ) -> Self {
        FormController {
            api,
            known_collaborators,
            on_refresh,
            state: SessionState::Closed,
            form: None,
        }
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    /// Whether a request is currently in flight. Nothing here debounces
    /// duplicate submits; an embedding can grey out its submit control
    /// while this returns true.
    pub fn is_busy(&self) -> bool {
        matches!(
            self.state,
            SessionState::Loading
                | SessionState::Saving
                | SessionState::Uploading
                | SessionState::Deleting
        )
    }

    /// Open a session for a brand-new event on the given date.
    pub fn open_create(&mut self, date: NaiveDate) -> Result<&mut EventForm> {
        if self.state != SessionState::Closed {
            bail!("A session is already open");
        }
        self.form = Some(EventForm::new_for(date));
        self.state = SessionState::Editing;
        self.form_mut()
    }

    /// Fetch an existing record and open a session populated from it.
    /// On fetch failure the session stays closed.
    pub async fn open_edit(&mut self, id: &str) -> Result<&mut EventForm> {
        if self.state != SessionState::Closed {
            bail!("A session is already open");
        }
        self.state = SessionState::Loading;
        match self.api.fetch_event(id).await {
            Ok(record) => {
                self.form = Some(EventForm::populate(&record, &self.known_collaborators));
                self.state = SessionState::Editing;
                self.form_mut()
            }
            Err(e) => {
                self.state = SessionState::Closed;
                Err(e)
            }
        }
    }

    /// The current draft, for the rendering layer to edit.
    pub fn form_mut(&mut self) -> Result<&mut EventForm> {
        if self.state != SessionState::Editing {
            bail!("No editing session is open");
        }
        match self.form.as_mut() {
            Some(form) => Ok(form),
            None => bail!("No editing session is open"),
        }
    }

    fn editing_form(&self) -> Result<&EventForm> {
        if self.state != SessionState::Editing {
            bail!("No editing session is open");
        }
        match self.form.as_ref() {
            Some(form) => Ok(form),
            None => bail!("No editing session is open"),
        }
    }

    /// Discard the draft without saving.
    pub fn close(&mut self) {
        self.form = None;
        self.state = SessionState::Closed;
    }

    /// Serialize and write the draft. Validation failures return before
    /// any network call; transport or server failures return the session
    /// to `Editing` with the draft intact. Pending attachments upload
    /// after the record write, best effort: their failure becomes a
    /// warning on the outcome, never an error.
    pub async fn save(&mut self) -> Result<SaveOutcome> {
        let form = self.editing_form()?;
        let payload = form.serialize()?;
        let pending: Vec<PathBuf> = form.pending_uploads.clone();
        let created = !form.is_update();

        self.state = SessionState::Saving;
        let assigned = match self.api.save_event(&payload).await {
            Ok(assigned) => assigned,
            Err(e) => {
                self.state = SessionState::Editing;
                return Err(e);
            }
        };

        let event_id = assigned.or(payload.id);
        let mut upload_warning = None;

        if !pending.is_empty() {
            match &event_id {
                Some(id) => {
                    self.state = SessionState::Uploading;
                    if let Err(e) = self.api.upload_files(id, &pending).await {
                        upload_warning = Some(format!("{:#}", e));
                    }
                }
                None => {
                    upload_warning = Some(
                        "Server did not return an event id; attachments were not uploaded"
                            .to_string(),
                    );
                }
            }
        }

        self.close();
        (self.on_refresh)();

        Ok(SaveOutcome {
            event_id,
            created,
            upload_warning,
        })
    }

    /// Delete the bound record. `confirm` is consulted first and no
    /// request is made when it declines; the session then stays open
    /// unchanged. Returns `Ok(false)` on decline.
    pub async fn delete<F>(&mut self, confirm: F) -> Result<bool>
    where
        F: FnOnce(&EventForm) -> bool,
    {
        let form = self.editing_form()?;
        let id = match &form.id {
            Some(id) => id.clone(),
            None => return Err(AgendaError::NoBoundEvent.into()),
        };

        if !confirm(form) {
            return Ok(false);
        }

        self.state = SessionState::Deleting;
        if let Err(e) = self.api.delete_event(&id).await {
            self.state = SessionState::Editing;
            return Err(e);
        }

        self.close();
        (self.on_refresh)();
        Ok(true)
    }

}
