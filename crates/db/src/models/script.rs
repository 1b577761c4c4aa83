//! Script entity model and DTOs.

use serde::{Deserialize, Serialize};
use storefront_core::catalog::{
    DEFAULT_DOWNLOADS, DEFAULT_RATING, MAX_CATEGORY_LEN, MAX_DESCRIPTION_LEN, MAX_NAME_LEN,
    MAX_URL_LEN,
};
use storefront_core::types::EntityId;
use ts_rs::TS;
use validator::Validate;

use crate::collection::Collection;
use crate::models::entity::CatalogEntity;
use crate::store::CatalogStore;

/// A downloadable script listed in the catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct Script {
    pub id: EntityId,
    pub name: String,
    pub description: String,
    pub image_url: String,
    pub download_link: String,
    pub category: String,
    /// Starts at 0; not settable by callers.
    pub downloads: i32,
    /// One-decimal string such as `"4.8"`; starts at `"0.0"`.
    pub rating: String,
}

/// DTO for creating a script.
///
/// `id`, `downloads` and `rating` are not part of the payload; if a client
/// sends them they are dropped during deserialization.
#[derive(Debug, Clone, Deserialize, Validate, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct CreateScript {
    #[validate(length(min = 1, max = MAX_NAME_LEN))]
    pub name: String,
    #[validate(length(min = 1, max = MAX_DESCRIPTION_LEN))]
    pub description: String,
    #[validate(length(min = 1, max = MAX_URL_LEN))]
    pub image_url: String,
    #[validate(length(min = 1, max = MAX_URL_LEN))]
    pub download_link: String,
    #[validate(length(min = 1, max = MAX_CATEGORY_LEN))]
    pub category: String,
}

/// DTO for partially updating a script. All fields are optional.
#[derive(Debug, Clone, Default, Deserialize, Validate, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct UpdateScript {
    #[validate(length(min = 1, max = MAX_NAME_LEN))]
    pub name: Option<String>,
    #[validate(length(min = 1, max = MAX_DESCRIPTION_LEN))]
    pub description: Option<String>,
    #[validate(length(min = 1, max = MAX_URL_LEN))]
    pub image_url: Option<String>,
    #[validate(length(min = 1, max = MAX_URL_LEN))]
    pub download_link: Option<String>,
    #[validate(length(min = 1, max = MAX_CATEGORY_LEN))]
    pub category: Option<String>,
}

impl CatalogEntity for Script {
    type Create = CreateScript;
    type Update = UpdateScript;

    const ENTITY: &'static str = "Script";

    fn id(&self) -> &str {
        &self.id
    }

    fn category(&self) -> &str {
        &self.category
    }

    fn search_fields(&self) -> [&str; 3] {
        [&self.name, &self.description, &self.category]
    }

    fn from_create(id: EntityId, input: CreateScript) -> Self {
        Self {
            id,
            name: input.name,
            description: input.description,
            image_url: input.image_url,
            download_link: input.download_link,
            category: input.category,
            downloads: DEFAULT_DOWNLOADS,
            rating: DEFAULT_RATING.to_string(),
        }
    }

    fn apply_update(&mut self, patch: UpdateScript) {
        let UpdateScript {
            name,
            description,
            image_url,
            download_link,
            category,
        } = patch;

        if let Some(name) = name {
            self.name = name;
        }
        if let Some(description) = description {
            self.description = description;
        }
        if let Some(image_url) = image_url {
            self.image_url = image_url;
        }
        if let Some(download_link) = download_link {
            self.download_link = download_link;
        }
        if let Some(category) = category {
            self.category = category;
        }
    }

    fn collection(store: &CatalogStore) -> &Collection<Self> {
        store.scripts()
    }
}
