//! The catalog store aggregate: one collection per entity kind.

use crate::collection::Collection;
use crate::models::script::Script;
use crate::models::shop_item::ShopItem;
use crate::models::stats::CatalogStats;
use crate::seed;

/// Owns the Script and ShopItem collections.
///
/// The two collections are independent; no operation spans both except
/// [`CatalogStore::stats`], which reads each count separately.
pub struct CatalogStore {
    scripts: Collection<Script>,
    shop_items: Collection<ShopItem>,
}

impl CatalogStore {
    /// Create a store with both collections empty.
    pub fn new() -> Self {
        Self {
            scripts: Collection::new(),
            shop_items: Collection::new(),
        }
    }

    /// Create a store pre-populated with the sample catalog.
    pub fn seeded() -> Self {
        let scripts = seed::sample_scripts();
        let shop_items = seed::sample_shop_items();
        tracing::info!(
            scripts = scripts.len(),
            shop_items = shop_items.len(),
            "Seeded catalog with sample data",
        );
        Self {
            scripts: Collection::with_entities(scripts),
            shop_items: Collection::with_entities(shop_items),
        }
    }

    pub fn scripts(&self) -> &Collection<Script> {
        &self.scripts
    }

    pub fn shop_items(&self) -> &Collection<ShopItem> {
        &self.shop_items
    }

    /// Number of scripts and shop items currently stored.
    pub async fn stats(&self) -> CatalogStats {
        CatalogStats {
            script_count: self.scripts.count().await,
            item_count: self.shop_items.count().await,
        }
    }
}

impl Default for CatalogStore {
    fn default() -> Self {
        Self::new()
    }
}
