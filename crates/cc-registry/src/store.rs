//! Shared in-memory registration table.

use std::collections::HashMap;
use std::sync::Arc;

use log::debug;
use tokio::sync::RwLock;

use crate::{Registration, RegistryError, RegistryResult};

/// Registrations keyed by id.  Ids start at 1 and are handed out in request
/// order; nothing is ever removed.
///
/// Cheap to clone: clones share the same table.
#[derive(Debug, Clone, Default)]
pub struct RegistrationStore {
    inner: Arc<RwLock<HashMap<u64, Registration>>>,
}

impl RegistrationStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store `registration` under the next id and return that id.
    pub async fn insert(&self, registration: Registration) -> u64 {
        let mut table = self.inner.write().await;
        let id = table.len() as u64 + 1;
        table.insert(id, registration);
        debug!("stored registration {id}");
        id
    }

    pub async fn get(&self, id: u64) -> RegistryResult<Registration> {
        self.inner.read().await.get(&id).cloned().ok_or(RegistryError::NotFound(id))
    }

    pub async fn len(&self) -> usize {
        self.inner.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}
