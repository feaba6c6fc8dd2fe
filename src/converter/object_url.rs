//! Revocable in-memory references to converted bytes

use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

/// Handle to a blob held by an [`ObjectUrlStore`]
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ObjectUrl(String);

impl std::fmt::Display for ObjectUrl {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Default)]
struct StoreInner {
    next_id: u64,
    blobs: HashMap<ObjectUrl, Arc<[u8]>>,
}

/// Shared table of live blobs. Cloning shares the table.
#[derive(Clone, Default)]
pub struct ObjectUrlStore {
    inner: Arc<Mutex<StoreInner>>,
}

impl ObjectUrlStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, StoreInner> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn create(&self, bytes: Arc<[u8]>) -> ObjectUrl {
        let mut inner = self.lock();
        inner.next_id += 1;
        let url = ObjectUrl(format!("blob:image-converter/{}", inner.next_id));
        inner.blobs.insert(url.clone(), bytes);
        url
    }

    pub fn resolve(&self, url: &ObjectUrl) -> Option<Arc<[u8]>> {
        self.lock().blobs.get(url).cloned()
    }

    /// Returns false if the url was already revoked.
    pub fn revoke(&self, url: &ObjectUrl) -> bool {
        self.lock().blobs.remove(url).is_some()
    }

    pub fn live_count(&self) -> usize {
        self.lock().blobs.len()
    }
}
