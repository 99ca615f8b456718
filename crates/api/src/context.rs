use std::sync::Arc;

use stockroom_infra::ItemStore;

/// Store handle carried in request extensions.
///
/// Handlers reach the item store only through this, never through global state.
#[derive(Clone)]
pub struct StoreContext {
    store: Arc<dyn ItemStore>,
}

impl StoreContext {
    pub fn new(store: Arc<dyn ItemStore>) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &dyn ItemStore {
        self.store.as_ref()
    }
}
