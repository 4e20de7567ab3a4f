//! In-memory [`UserApi`] for testing.

use std::sync::{Arc, Mutex};

use crate::client::{TransportError, UserApi};
use crate::models::{UserFields, UserRecord};

/// In-memory UserApi backed by a shared vector. Ids are assigned
/// monotonically starting at 1, like the real backend.
#[derive(Clone, Debug, Default)]
pub struct MemoryApi {
    inner: Arc<Mutex<Inner>>,
}

#[derive(Debug, Default)]
struct Inner {
    users: Vec<UserRecord>,
    next_id: u64,
}

impl MemoryApi {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-populate the backend with existing records. `next_id` advances
    /// past the highest seeded id.
    pub fn seed(&self, users: Vec<UserRecord>) {
        let mut inner = self.inner.lock().unwrap();
        inner.next_id = users.iter().map(|u| u.id).max().unwrap_or(0);
        inner.users = users;
    }
}

impl UserApi for MemoryApi {
    async fn list(&self) -> Result<Vec<UserRecord>, TransportError> {
        Ok(self.inner.lock().unwrap().users.clone())
    }

    async fn get(&self, id: u64) -> Result<UserRecord, TransportError> {
        self.inner
            .lock()
            .unwrap()
            .users
            .iter()
            .find(|u| u.id == id)
            .cloned()
            .ok_or(TransportError::Http { status: 404 })
    }

    async fn create(&self, fields: &UserFields) -> Result<UserRecord, TransportError> {
        let mut inner = self.inner.lock().unwrap();
        inner.next_id += 1;
        let user = UserRecord {
            id: inner.next_id,
            username: fields.username.clone(),
            email: fields.email.clone(),
        };
        inner.users.push(user.clone());
        Ok(user)
    }

    async fn update(&self, id: u64, fields: &UserFields) -> Result<UserRecord, TransportError> {
        let mut inner = self.inner.lock().unwrap();
        let user = inner
            .users
            .iter_mut()
            .find(|u| u.id == id)
            .ok_or(TransportError::Http { status: 404 })?;
        user.username = fields.username.clone();
        user.email = fields.email.clone();
        Ok(user.clone())
    }

    async fn remove(&self, id: u64) -> Result<(), TransportError> {
        let mut inner = self.inner.lock().unwrap();
        let before = inner.users.len();
        inner.users.retain(|u| u.id != id);
        if inner.users.len() == before {
            return Err(TransportError::Http { status: 404 });
        }
        Ok(())
    }
}
