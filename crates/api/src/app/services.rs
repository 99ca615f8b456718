use std::sync::Arc;

use stockroom_infra::{InMemoryItemStore, ItemStore};

use crate::config::ApiConfig;

/// Pick and construct the item store backend.
pub fn build_store(config: &ApiConfig) -> Arc<dyn ItemStore> {
    if config.seed {
        Arc::new(InMemoryItemStore::seeded())
    } else {
        Arc::new(InMemoryItemStore::new())
    }
}
