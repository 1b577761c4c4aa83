//! The contract every catalog entity kind implements so that a single
//! [`Collection`] can store and query it.

use serde::de::DeserializeOwned;
use serde::Serialize;
use storefront_core::types::EntityId;
use validator::Validate;

use crate::collection::Collection;
use crate::store::CatalogStore;

/// A kind of record held by the catalog store.
///
/// `Create` carries the caller-supplied fields; server-owned fields
/// (`id`, defaults) are filled in by [`CatalogEntity::from_create`].
/// `Update` carries only fields a caller may change after creation. Both
/// are validated by the HTTP layer before they reach a collection.
pub trait CatalogEntity: Clone + Serialize + Send + Sync + 'static {
    type Create: DeserializeOwned + Validate + Send;
    type Update: DeserializeOwned + Validate + Send;

    /// Human-readable entity name used in not-found errors.
    const ENTITY: &'static str;

    fn id(&self) -> &str;

    fn category(&self) -> &str;

    /// Fields consulted by free-text search, in no particular order.
    fn search_fields(&self) -> [&str; 3];

    /// Build a new record from caller input, assigning `id` and defaults.
    fn from_create(id: EntityId, input: Self::Create) -> Self;

    /// Shallow-merge a patch: every field present in `patch` overwrites the
    /// current value, absent fields are kept.
    fn apply_update(&mut self, patch: Self::Update);

    /// The collection in `store` that holds this kind.
    fn collection(store: &CatalogStore) -> &Collection<Self>;
}
