//! The transport abstraction the workflow talks to.
//!
//! [`UserApi`] is the capability-shaped interface over the remote user
//! service. The real implementation lives in the `api` crate (reqwest against
//! a REST endpoint); tests use [`crate::MemoryApi`]. Every method can fail
//! with a [`TransportError`], which the workflow wraps into a
//! [`crate::WorkflowError`] naming the operation that failed.

use thiserror::Error;

use crate::models::{UserFields, UserRecord};

/// A failure originating from the network or the remote service.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum TransportError {
    /// The server answered with a non-success status.
    #[error("server returned HTTP {status}")]
    Http { status: u16 },
    /// The request never completed: connection failure, timeout, or an
    /// unparseable response body.
    #[error("network error: {0}")]
    Network(String),
}

/// Async interface to the remote user service.
pub trait UserApi {
    /// Fetch all records, in server order.
    async fn list(&self) -> Result<Vec<UserRecord>, TransportError>;

    /// Fetch a single record by id.
    async fn get(&self, id: u64) -> Result<UserRecord, TransportError>;

    /// Create a new record; the server assigns the id.
    async fn create(&self, fields: &UserFields) -> Result<UserRecord, TransportError>;

    /// Update an existing record. An empty password in `fields` leaves the
    /// stored password unchanged.
    async fn update(&self, id: u64, fields: &UserFields) -> Result<UserRecord, TransportError>;

    /// Delete a record by id.
    async fn remove(&self, id: u64) -> Result<(), TransportError>;
}
