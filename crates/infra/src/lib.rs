//! Infrastructure layer: item storage backends.

pub mod store;

pub use store::{InMemoryItemStore, ItemStore, StoreError, StoreResult};
