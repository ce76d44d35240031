//! Request DTOs for the application services.
//!
//! These are the deserialized shapes a transport layer hands over. All
//! validation happens in the services and the core value types; a DTO is
//! just structure.

use serde::{Deserialize, Serialize};

/// Request to register a new product.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductCreateRequest {
    pub name: String,
    pub price_cents: i64,
}

/// One requested menu line: product reference + quantity.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MenuProductRequest {
    pub product_id: String,
    pub quantity: i64,
}

/// Request to create a menu inside a group.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MenuCreateRequest {
    pub menu_group_id: String,
    pub name: String,
    pub price_cents: i64,
    pub displayed: bool,
    /// Ordered product lines; must be non-empty.
    pub menu_products: Vec<MenuProductRequest>,
}

/// Request to create a menu group.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MenuGroupCreateRequest {
    pub name: String,
}

/// Request to create an order table.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderTableCreateRequest {
    pub name: String,
}
