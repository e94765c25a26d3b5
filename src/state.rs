use crate::config::StoreKind;
use crate::storage::LogStore;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<LogStore>,
}

impl AppState {
    pub fn new(store: LogStore) -> Self {
        Self {
            store: Arc::new(store),
        }
    }

    pub fn from_kind(kind: &StoreKind) -> Self {
        match kind {
            StoreKind::File(path) => Self::new(LogStore::file(path)),
            StoreKind::Memory => Self::new(LogStore::memory()),
        }
    }
}
