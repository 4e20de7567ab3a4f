//! Domain models for user records.
//!
//! [`UserRecord`] is the persisted record as the server echoes it back; the
//! password is never part of it. [`UserFields`] carries the form's candidate
//! values on the way in. [`Mode`] distinguishes creating a new record from
//! editing an existing one and is always derived from the presence of an id,
//! never stored.

use serde::{Deserialize, Serialize};

/// A persisted user record. The id is server-assigned and never changes.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserRecord {
    pub id: u64,
    pub username: String,
    pub email: String,
}

/// Candidate field values from the form. An empty `password` on edit means
/// "leave the stored password unchanged".
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserFields {
    pub username: String,
    pub email: String,
    pub password: String,
}

/// Whether the form is creating a new record or editing an existing one.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Mode {
    Create,
    Edit,
}

impl Mode {
    /// Derive the mode from the presence of a record id.
    pub fn of(id: Option<u64>) -> Self {
        match id {
            Some(_) => Mode::Edit,
            None => Mode::Create,
        }
    }
}

impl UserRecord {
    /// The record's current values as editable form fields, with an empty
    /// password (the server never echoes one back).
    pub fn to_fields(&self) -> UserFields {
        UserFields {
            username: self.username.clone(),
            email: self.email.clone(),
            password: String::new(),
        }
    }
}
