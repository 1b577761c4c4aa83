//! In-memory catalog store.
//!
//! Data lives for the lifetime of the process only. A single
//! [`CatalogStore`] is built at startup and shared by handle.

use std::sync::Arc;

pub mod collection;
pub mod models;
pub mod seed;
pub mod store;

pub use collection::Collection;
pub use store::CatalogStore;

/// Shared handle to the process-wide store.
pub type SharedStore = Arc<CatalogStore>;

/// Build the store, optionally pre-populated with the sample catalog.
pub fn create_store(seed_sample_data: bool) -> SharedStore {
    let store = if seed_sample_data {
        CatalogStore::seeded()
    } else {
        CatalogStore::new()
    };
    Arc::new(store)
}
