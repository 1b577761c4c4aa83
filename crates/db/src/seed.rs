//! Sample catalog loaded at startup.
//!
//! Records are inserted fully formed, so their download counts and ratings
//! are kept rather than reset to the creation defaults.

use uuid::Uuid;

use crate::models::script::Script;
use crate::models::shop_item::ShopItem;

const IMG_FARMING: &str = "https://images.unsplash.com/photo-1581833971358-2c8b550f87b3?ixlib=rb-4.0.3&auto=format&fit=crop&w=800&h=400";
const IMG_MINING: &str = "https://images.unsplash.com/photo-1578662996442-48f60103fc96?ixlib=rb-4.0.3&auto=format&fit=crop&w=800&h=400";
const IMG_COMBAT: &str = "https://images.unsplash.com/photo-1551698618-1dfe5d97d256?ixlib=rb-4.0.3&auto=format&fit=crop&w=800&h=400";
const IMG_TRADING: &str = "https://images.unsplash.com/photo-1590283603385-17ffb3a7f29f?ixlib=rb-4.0.3&auto=format&fit=crop&w=800&h=400";
const IMG_INVENTORY: &str = "https://images.unsplash.com/photo-1586953208448-b95a79798f07?ixlib=rb-4.0.3&auto=format&fit=crop&w=800&h=400";
const IMG_WEAPON: &str = "https://images.unsplash.com/photo-1571019613454-1cb2f99b2d8b?ixlib=rb-4.0.3&auto=format&fit=crop&w=800&h=400";
const IMG_BUNDLE: &str = "https://images.unsplash.com/photo-1584464491033-06628f3a6b7b?ixlib=rb-4.0.3&auto=format&fit=crop&w=800&h=400";

fn script(
    name: &str,
    description: &str,
    image_url: &str,
    category: &str,
    downloads: i32,
    rating: &str,
) -> Script {
    Script {
        id: Uuid::new_v4().to_string(),
        name: name.to_string(),
        description: description.to_string(),
        image_url: image_url.to_string(),
        download_link: "#".to_string(),
        category: category.to_string(),
        downloads,
        rating: rating.to_string(),
    }
}

fn shop_item(
    name: &str,
    description: &str,
    image_url: &str,
    price: &str,
    category: &str,
    rating: &str,
) -> ShopItem {
    ShopItem {
        id: Uuid::new_v4().to_string(),
        name: name.to_string(),
        description: description.to_string(),
        image_url: image_url.to_string(),
        price: price.to_string(),
        category: category.to_string(),
        rating: rating.to_string(),
    }
}

/// The six sample scripts, each with a fresh id.
pub fn sample_scripts() -> Vec<Script> {
    vec![
        script(
            "Auto Farming Pro",
            "Advanced farming automation script with crop rotation and resource optimization.",
            IMG_FARMING,
            "Automation",
            2400,
            "4.8",
        ),
        script(
            "Smart Mining Bot",
            "Intelligent mining bot with ore detection and safety protocols.",
            IMG_MINING,
            "Mining",
            1800,
            "4.6",
        ),
        script(
            "Combat Assistant",
            "Advanced combat automation with strategy patterns and timing optimization.",
            IMG_COMBAT,
            "Combat",
            3100,
            "4.9",
        ),
        script(
            "Market Trader",
            "Automated trading system with market analysis and profit optimization.",
            IMG_TRADING,
            "Trading",
            1200,
            "4.7",
        ),
        script(
            "Resource Manager",
            "Smart inventory management with auto-sorting and optimization features.",
            IMG_INVENTORY,
            "Utilities",
            950,
            "4.5",
        ),
        script(
            "Quest Automation",
            "Automated quest completion with pathfinding and objective tracking.",
            IMG_COMBAT,
            "Automation",
            1500,
            "4.4",
        ),
    ]
}

/// The six sample shop items, each with a fresh id.
pub fn sample_shop_items() -> Vec<ShopItem> {
    vec![
        shop_item(
            "Diamond Sword",
            "Legendary weapon with maximum damage and durability",
            IMG_WEAPON,
            "12.99",
            "Weapons",
            "4.9",
        ),
        shop_item(
            "Enchanted Pickaxe",
            "Auto-mining pickaxe with fortune enchantment",
            IMG_MINING,
            "8.99",
            "Tools",
            "4.7",
        ),
        shop_item(
            "Resource Bundle",
            "1000 gold coins + 50 gems starter pack",
            IMG_BUNDLE,
            "4.99",
            "Resources",
            "4.8",
        ),
        shop_item(
            "Dragon Shield",
            "Ultimate protection with fire resistance",
            IMG_MINING,
            "15.99",
            "Weapons",
            "4.9",
        ),
        shop_item(
            "Mega Potion Set",
            "Health, mana, and buff potions collection",
            IMG_BUNDLE,
            "6.99",
            "Resources",
            "4.6",
        ),
        shop_item(
            "Elite Armor Set",
            "Complete armor set with stat bonuses",
            IMG_WEAPON,
            "24.99",
            "Weapons",
            "4.8",
        ),
    ]
}
