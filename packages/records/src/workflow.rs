//! # Workflow — orchestrates list/create/update/delete against a [`UserApi`]
//!
//! [`Workflow`] is the one piece of this repository with a real contract. It
//! holds the last successfully loaded list of records and the record currently
//! selected for editing (`None` means the form is creating a new one), and it
//! guarantees:
//!
//! - [`save`](Workflow::save) runs the validation rules first and never
//!   touches the transport when any field is invalid.
//! - Every successful mutation is followed by an implicit
//!   [`load_all`](Workflow::load_all) refresh, so the held list always mirrors
//!   the server. There is no optimistic local mutation to roll back.
//! - A transport failure leaves the held list exactly as it was and comes back
//!   as an explicit [`WorkflowError`] naming the operation; errors are never
//!   swallowed and never sticky.
//!
//! The workflow assumes one operation in flight at a time; disabling the
//! submit/delete affordances while a call is outstanding is the caller's job.

use std::sync::{Arc, Mutex};

use thiserror::Error;

use crate::client::{TransportError, UserApi};
use crate::models::{Mode, UserFields, UserRecord};
use crate::validate::{validate, FieldErrors};

/// Why a workflow operation failed.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum WorkflowError {
    /// Local rejection: one or more fields are invalid. No network call was
    /// made.
    #[error("validation failed")]
    ValidationFailed(FieldErrors),
    #[error("could not load users: {0}")]
    LoadFailed(TransportError),
    #[error("could not save user: {0}")]
    SaveFailed(TransportError),
    #[error("could not delete user: {0}")]
    DeleteFailed(TransportError),
}

#[derive(Debug, Default)]
struct State {
    users: Vec<UserRecord>,
    selected: Option<UserRecord>,
}

/// The record-management workflow. Cheap to clone; clones share state.
#[derive(Clone, Debug)]
pub struct Workflow<C: UserApi> {
    client: C,
    state: Arc<Mutex<State>>,
}

impl<C: UserApi> Workflow<C> {
    pub fn new(client: C) -> Self {
        Self {
            client,
            state: Arc::new(Mutex::new(State::default())),
        }
    }

    /// The last successfully loaded list, in server order.
    pub fn users(&self) -> Vec<UserRecord> {
        self.state.lock().unwrap().users.clone()
    }

    /// The record currently selected for editing, or `None` when creating.
    pub fn selected(&self) -> Option<UserRecord> {
        self.state.lock().unwrap().selected.clone()
    }

    /// Select an existing record for editing.
    pub fn select(&self, user: UserRecord) {
        self.state.lock().unwrap().selected = Some(user);
    }

    /// Switch back to create mode.
    pub fn clear_selection(&self) {
        self.state.lock().unwrap().selected = None;
    }

    /// Fetch the authoritative list and replace the held one wholesale.
    /// On failure the held list is left untouched.
    pub async fn load_all(&self) -> Result<Vec<UserRecord>, WorkflowError> {
        let users = self.client.list().await.map_err(WorkflowError::LoadFailed)?;
        self.state.lock().unwrap().users = users.clone();
        Ok(users)
    }

    /// Validate and persist the form's fields, creating or updating depending
    /// on the current selection. On success the list is refreshed and the
    /// selection cleared; the saved record (with its server-assigned id) is
    /// returned.
    ///
    /// The selection is only cleared once the refresh has succeeded. If the
    /// mutation lands but the refresh fails, the caller sees `LoadFailed`
    /// with the selection intact, so retrying the save re-issues an
    /// idempotent update instead of creating a duplicate.
    pub async fn save(&self, fields: &UserFields) -> Result<UserRecord, WorkflowError> {
        let selected_id = self.selected().map(|u| u.id);
        let errors = validate(fields, Mode::of(selected_id));
        if !errors.is_empty() {
            return Err(WorkflowError::ValidationFailed(errors));
        }

        let saved = match selected_id {
            Some(id) => self.client.update(id, fields).await,
            None => self.client.create(fields).await,
        }
        .map_err(WorkflowError::SaveFailed)?;

        self.load_all().await?;
        self.clear_selection();
        Ok(saved)
    }

    /// Delete a record. Confirmation is the caller's concern; this accepts an
    /// already-decided intent. On failure the held list is unchanged, so a
    /// stale entry may still show until the caller retries.
    pub async fn remove(&self, id: u64) -> Result<(), WorkflowError> {
        self.client
            .remove(id)
            .await
            .map_err(WorkflowError::DeleteFailed)?;
        self.load_all().await?;
        Ok(())
    }
}
