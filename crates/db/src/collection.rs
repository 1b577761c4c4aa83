//! Generic keyed collection implementing the catalog CRUD and query
//! operations once for every [`CatalogEntity`] kind.

use indexmap::IndexMap;
use storefront_core::search;
use storefront_core::types::EntityId;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::models::entity::CatalogEntity;
use crate::models::stats::FacetValue;

/// Thread-safe in-memory collection of one entity kind.
///
/// Every operation takes the lock exactly once and completes without
/// yielding while holding it, so each call is atomic with respect to every
/// other call on the same collection. Entries are kept in insertion order so
/// listings are deterministic.
pub struct Collection<E> {
    entries: RwLock<IndexMap<EntityId, E>>,
}

impl<E: CatalogEntity> Collection<E> {
    /// Create an empty collection.
    pub fn new() -> Self {
        Self {
            entries: RwLock::new(IndexMap::new()),
        }
    }

    /// Create a collection holding fully-formed records as-is.
    ///
    /// No defaults are applied. Used for seeding.
    pub fn with_entities(entities: impl IntoIterator<Item = E>) -> Self {
        let entries = entities
            .into_iter()
            .map(|e| (e.id().to_string(), e))
            .collect();
        Self {
            entries: RwLock::new(entries),
        }
    }

    /// All entities, in insertion order.
    pub async fn list(&self) -> Vec<E> {
        self.entries.read().await.values().cloned().collect()
    }

    /// Look up one entity. Unknown and malformed ids are both `None`.
    pub async fn get(&self, id: &str) -> Option<E> {
        self.entries.read().await.get(id).cloned()
    }

    /// Insert a new entity built from caller input, returning the stored
    /// record with its generated id and defaults.
    pub async fn create(&self, input: E::Create) -> E {
        let mut entries = self.entries.write().await;
        let id = loop {
            let candidate = Uuid::new_v4().to_string();
            if !entries.contains_key(&candidate) {
                break candidate;
            }
        };
        let entity = E::from_create(id.clone(), input);
        entries.insert(id, entity.clone());
        entity
    }

    /// Apply a patch to an existing entity.
    ///
    /// Returns `None` if no entity with the given `id` exists.
    pub async fn update(&self, id: &str, patch: E::Update) -> Option<E> {
        let mut entries = self.entries.write().await;
        let entity = entries.get_mut(id)?;
        entity.apply_update(patch);
        Some(entity.clone())
    }

    /// Remove an entity. Returns `true` if it existed.
    pub async fn delete(&self, id: &str) -> bool {
        self.entries.write().await.shift_remove(id).is_some()
    }

    /// Case-insensitive substring search over name, description and
    /// category. A blank query matches nothing.
    pub async fn search(&self, query: &str) -> Vec<E> {
        let Some(needle) = search::normalize_query(query) else {
            return Vec::new();
        };
        self.entries
            .read()
            .await
            .values()
            .filter(|e| search::matches_any(&needle, &e.search_fields()))
            .cloned()
            .collect()
    }

    /// Entities whose category equals `category` exactly (case-sensitive).
    pub async fn by_category(&self, category: &str) -> Vec<E> {
        self.entries
            .read()
            .await
            .values()
            .filter(|e| e.category() == category)
            .cloned()
            .collect()
    }

    pub async fn count(&self) -> usize {
        self.entries.read().await.len()
    }

    /// Distinct categories with their entity counts, in first-seen order.
    pub async fn categories(&self) -> Vec<FacetValue> {
        let entries = self.entries.read().await;
        let mut counts: IndexMap<&str, usize> = IndexMap::new();
        for entity in entries.values() {
            *counts.entry(entity.category()).or_default() += 1;
        }
        counts
            .into_iter()
            .map(|(value, count)| FacetValue {
                value: value.to_string(),
                count,
            })
            .collect()
    }
}

impl<E: CatalogEntity> Default for Collection<E> {
    fn default() -> Self {
        Self::new()
    }
}
