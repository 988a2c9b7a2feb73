use std::sync::Arc;

use crate::schemes::models::Scheme;
use crate::store::MemoryStore;

/// Read access to the scheme catalog
#[derive(Clone)]
pub struct SchemeRepository {
    store: Arc<MemoryStore>,
}

impl SchemeRepository {
    pub fn new(store: Arc<MemoryStore>) -> Self {
        Self { store }
    }

    pub async fn list(&self) -> Vec<Scheme> {
        self.store.schemes.read().await.all()
    }

    pub async fn find_by_id(&self, id: i32) -> Option<Scheme> {
        self.store.schemes.read().await.get(id).cloned()
    }
}
