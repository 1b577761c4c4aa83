//! Shop item entity model and DTOs.

use serde::{Deserialize, Serialize};
use storefront_core::catalog::{
    self, DEFAULT_RATING, MAX_CATEGORY_LEN, MAX_DESCRIPTION_LEN, MAX_NAME_LEN, MAX_URL_LEN,
};
use storefront_core::types::EntityId;
use ts_rs::TS;
use validator::{Validate, ValidationError};

use crate::collection::Collection;
use crate::models::entity::CatalogEntity;
use crate::store::CatalogStore;

/// A purchasable item in the shop.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct ShopItem {
    pub id: EntityId,
    pub name: String,
    pub description: String,
    pub image_url: String,
    /// Two-decimal string such as `"12.99"`, stored exactly as supplied.
    pub price: String,
    pub category: String,
    /// Starts at `"0.0"`; not settable by callers.
    pub rating: String,
}

/// DTO for creating a shop item. `price` is required and never defaulted.
#[derive(Debug, Clone, Deserialize, Validate, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct CreateShopItem {
    #[validate(length(min = 1, max = MAX_NAME_LEN))]
    pub name: String,
    #[validate(length(min = 1, max = MAX_DESCRIPTION_LEN))]
    pub description: String,
    #[validate(length(min = 1, max = MAX_URL_LEN))]
    pub image_url: String,
    #[validate(custom(function = "validate_price_field"))]
    pub price: String,
    #[validate(length(min = 1, max = MAX_CATEGORY_LEN))]
    pub category: String,
}

/// DTO for partially updating a shop item. All fields are optional.
#[derive(Debug, Clone, Default, Deserialize, Validate, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct UpdateShopItem {
    #[validate(length(min = 1, max = MAX_NAME_LEN))]
    pub name: Option<String>,
    #[validate(length(min = 1, max = MAX_DESCRIPTION_LEN))]
    pub description: Option<String>,
    #[validate(length(min = 1, max = MAX_URL_LEN))]
    pub image_url: Option<String>,
    #[validate(custom(function = "validate_price_field"))]
    pub price: Option<String>,
    #[validate(length(min = 1, max = MAX_CATEGORY_LEN))]
    pub category: Option<String>,
}

fn validate_price_field(price: &str) -> Result<(), ValidationError> {
    catalog::validate_price(price).map_err(|e| {
        let mut err = ValidationError::new("price_format");
        err.message = Some(e.to_string().into());
        err
    })
}

impl CatalogEntity for ShopItem {
    type Create = CreateShopItem;
    type Update = UpdateShopItem;

    const ENTITY: &'static str = "ShopItem";

    fn id(&self) -> &str {
        &self.id
    }

    fn category(&self) -> &str {
        &self.category
    }

    fn search_fields(&self) -> [&str; 3] {
        [&self.name, &self.description, &self.category]
    }

    fn from_create(id: EntityId, input: CreateShopItem) -> Self {
        Self {
            id,
            name: input.name,
            description: input.description,
            image_url: input.image_url,
            price: input.price,
            category: input.category,
            rating: DEFAULT_RATING.to_string(),
        }
    }

    fn apply_update(&mut self, patch: UpdateShopItem) {
        let UpdateShopItem {
            name,
            description,
            image_url,
            price,
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
        if let Some(price) = price {
            self.price = price;
        }
        if let Some(category) = category {
            self.category = category;
        }
    }

    fn collection(store: &CatalogStore) -> &Collection<Self> {
        store.shop_items()
    }
}
