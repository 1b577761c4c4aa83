//! Catalog entity models and request DTOs.

pub mod entity;
pub mod script;
pub mod shop_item;
pub mod stats;
