//! # Domain Types
//!
//! Core domain entities for DinePOS.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Entities                                 │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │    Product      │   │    MenuGroup    │   │   OrderTable    │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  id (UUID)      │   │  id (UUID)      │   │  id (UUID)      │       │
//! │  │  name           │   │  name           │   │  name           │       │
//! │  │  price_cents    │   └────────▲────────┘   │  occupied       │       │
//! │  └────────▲────────┘            │            │  number_of_     │       │
//! │           │ references          │ references │  guests         │       │
//! │           │                     │            └─────────────────┘       │
//! │  ┌────────┴─────────────────────┴────┐                                 │
//! │  │              Menu                 │                                 │
//! │  │  ───────────────────────────────  │                                 │
//! │  │  id, menu_group_id, name          │                                 │
//! │  │  price_cents, displayed           │                                 │
//! │  │  products: Vec<MenuProduct>       │  invariant:                     │
//! │  │    (product_id, quantity)         │  price ≤ Σ(price × qty)         │
//! │  └───────────────────────────────────┘                                 │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Ownership Model
//! A `Menu` holds product *references* (ids), never the products
//! themselves. Products are shared, independently lifecycled entities
//! resolved by identifier at validation time. The one cross-aggregate side
//! effect in the system (product price change hiding menus) is orchestrated
//! explicitly in the service layer, not hidden in these types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::{CoreError, CoreResult};
use crate::name::DisplayedName;
use crate::price::Price;
use crate::validation::{self, ValidationResult};

// =============================================================================
// Product
// =============================================================================

/// A sellable item with a display name and a price.
///
/// Products are never deleted; price changes go through
/// `ProductService::change_price`, which also triggers the menu-hiding
/// cascade.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
#[ts(export)]
pub struct Product {
    /// Unique identifier (UUID v4).
    pub id: String,

    /// Display name, profanity-checked at registration.
    pub name: String,

    /// Price in minor currency units.
    pub price_cents: i64,

    /// When the product was registered.
    #[ts(as = "String")]
    pub created_at: DateTime<Utc>,

    /// When the product was last updated.
    #[ts(as = "String")]
    pub updated_at: DateTime<Utc>,
}

impl Product {
    /// Builds a new product from already-validated parts.
    ///
    /// `DisplayedName` and `Price` can only be constructed through their
    /// validating constructors, so this cannot produce an invalid product.
    pub fn new(id: String, name: DisplayedName, price: Price, now: DateTime<Utc>) -> Self {
        Product {
            id,
            name: name.into_inner(),
            price_cents: price.cents(),
            created_at: now,
            updated_at: now,
        }
    }

    /// Returns the price as a typed value.
    #[inline]
    pub fn price(&self) -> Price {
        // price_cents only ever comes from a validated Price
        Price::from_cents(self.price_cents).unwrap_or_default()
    }

    /// Replaces the price. The menu cascade is the caller's job.
    pub fn change_price(&mut self, price: Price, now: DateTime<Utc>) {
        self.price_cents = price.cents();
        self.updated_at = now;
    }
}

// =============================================================================
// Menu Group
// =============================================================================

/// A named grouping for menus ("Chicken", "Set Menus", ...).
///
/// Immutable after creation.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
#[ts(export)]
pub struct MenuGroup {
    pub id: String,
    pub name: String,
    #[ts(as = "String")]
    pub created_at: DateTime<Utc>,
}

impl MenuGroup {
    /// Validates the name and builds a new menu group.
    pub fn new(id: String, name: &str, now: DateTime<Utc>) -> ValidationResult<Self> {
        validation::validate_name("name", name)?;
        Ok(MenuGroup {
            id,
            name: name.to_string(),
            created_at: now,
        })
    }
}

// =============================================================================
// Menu Product
// =============================================================================

/// One line inside a menu: a product reference and a quantity.
///
/// The quantity is non-negative; zero means the line is a free add-on that
/// contributes nothing to the menu total.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
#[ts(export)]
pub struct MenuProduct {
    /// Reference to the product, not ownership.
    pub product_id: String,

    /// How many units of the product the menu bundles.
    pub quantity: i64,
}

impl MenuProduct {
    /// Validates the quantity and builds a line.
    pub fn new(product_id: String, quantity: i64) -> ValidationResult<Self> {
        validation::validate_quantity(quantity)?;
        Ok(MenuProduct {
            product_id,
            quantity,
        })
    }
}

// =============================================================================
// Menu
// =============================================================================

/// A sellable bundle of products with its own price and display flag.
///
/// ## The Pricing Invariant
/// `price ≤ Σ(product.price × quantity)` over the menu's lines, evaluated
/// against the product-price snapshot current at creation or price-change
/// time. Display toggling does NOT re-evaluate it; only the product price
/// cascade forces `displayed = false` when the invariant breaks.
///
/// Line membership is fixed at creation; only the price and the display
/// flag change afterwards.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Menu {
    pub id: String,
    /// Reference to the owning menu group.
    pub menu_group_id: String,
    /// Display name, profanity-checked at creation.
    pub name: String,
    /// Menu price in minor currency units.
    pub price_cents: i64,
    /// Whether the menu is currently visible/sellable.
    pub displayed: bool,
    /// Ordered, non-empty product lines.
    pub products: Vec<MenuProduct>,
    #[ts(as = "String")]
    pub created_at: DateTime<Utc>,
    #[ts(as = "String")]
    pub updated_at: DateTime<Utc>,
}

impl Menu {
    /// Builds a new menu, enforcing the pricing invariant against the
    /// product total the caller resolved.
    ///
    /// ## Errors
    /// - [`CoreError::EmptyMenuProducts`] when `products` is empty
    /// - [`CoreError::PriceExceedsProductTotal`] when `price > total`
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        id: String,
        menu_group_id: String,
        name: DisplayedName,
        price: Price,
        products: Vec<MenuProduct>,
        displayed: bool,
        total: Price,
        now: DateTime<Utc>,
    ) -> CoreResult<Self> {
        if products.is_empty() {
            return Err(CoreError::EmptyMenuProducts);
        }
        Self::check_price_within_total(price, total)?;

        Ok(Menu {
            id,
            menu_group_id,
            name: name.into_inner(),
            price_cents: price.cents(),
            displayed,
            products,
            created_at: now,
            updated_at: now,
        })
    }

    /// The pricing invariant, shared by creation and price change.
    pub fn check_price_within_total(price: Price, total: Price) -> CoreResult<()> {
        if price > total {
            return Err(CoreError::PriceExceedsProductTotal {
                price_cents: price.cents(),
                total_cents: total.cents(),
            });
        }
        Ok(())
    }

    /// Returns the menu price as a typed value.
    #[inline]
    pub fn price(&self) -> Price {
        Price::from_cents(self.price_cents).unwrap_or_default()
    }

    /// Replaces the price after re-checking the invariant against a fresh
    /// product total. The display flag is untouched by this operation.
    pub fn change_price(&mut self, price: Price, total: Price, now: DateTime<Utc>) -> CoreResult<()> {
        Self::check_price_within_total(price, total)?;
        self.price_cents = price.cents();
        self.updated_at = now;
        Ok(())
    }

    /// Marks the menu visible. Idempotent, no re-validation.
    pub fn display(&mut self, now: DateTime<Utc>) {
        self.displayed = true;
        self.updated_at = now;
    }

    /// Marks the menu hidden. Idempotent.
    pub fn hide(&mut self, now: DateTime<Utc>) {
        self.displayed = false;
        self.updated_at = now;
    }

    /// Distinct product ids over the lines, in first-seen order.
    ///
    /// Used to batch-resolve live product prices when the total has to be
    /// recomputed.
    pub fn distinct_product_ids(&self) -> Vec<String> {
        let mut ids: Vec<String> = Vec::with_capacity(self.products.len());
        for line in &self.products {
            if !ids.contains(&line.product_id) {
                ids.push(line.product_id.clone());
            }
        }
        ids
    }
}

// =============================================================================
// Order Table
// =============================================================================

/// A dine-in table with an occupancy/guest-count state machine.
///
/// ## States and Transitions
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │                                                                         │
/// │            sit                        change_number_of_guests(n)        │
/// │   EMPTY ────────► OCCUPIED ◄────────────────────────────┐              │
/// │     ▲              │    │                               │              │
/// │     │              │    └───────────────────────────────┘              │
/// │     │    clear     │         (requires OCCUPIED; n ≥ 0)                │
/// │     └──────────────┘                                                    │
/// │       (guests reset to 0)                                               │
/// │                                                                         │
/// │   EMPTY    = occupied=false, guests=0                                   │
/// │   OCCUPIED = occupied=true,  guests≥0                                   │
/// │                                                                         │
/// │   There is no direct EMPTY → set-guests path.                           │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
#[ts(export)]
pub struct OrderTable {
    pub id: String,
    pub name: String,
    pub occupied: bool,
    pub number_of_guests: i64,
    #[ts(as = "String")]
    pub created_at: DateTime<Utc>,
    #[ts(as = "String")]
    pub updated_at: DateTime<Utc>,
}

impl OrderTable {
    /// Validates the name and builds a new table in the EMPTY state.
    pub fn new(id: String, name: &str, now: DateTime<Utc>) -> ValidationResult<Self> {
        validation::validate_name("name", name)?;
        Ok(OrderTable {
            id,
            name: name.to_string(),
            occupied: false,
            number_of_guests: 0,
            created_at: now,
            updated_at: now,
        })
    }

    /// Seats guests at the table: any state → OCCUPIED, guests unchanged.
    /// Re-entry on an already occupied table is allowed.
    pub fn sit(&mut self, now: DateTime<Utc>) {
        self.occupied = true;
        self.updated_at = now;
    }

    /// Clears the table: any state → EMPTY, guests reset to 0.
    pub fn clear(&mut self, now: DateTime<Utc>) {
        self.occupied = false;
        self.number_of_guests = 0;
        self.updated_at = now;
    }

    /// Sets the guest count. Requires the table to be OCCUPIED.
    ///
    /// ## Errors
    /// - [`CoreError::TableNotOccupied`] when the table is EMPTY, for any
    ///   requested count including 0
    /// - [`CoreError::Validation`] when `guests < 0`
    pub fn change_number_of_guests(&mut self, guests: i64, now: DateTime<Utc>) -> CoreResult<()> {
        if !self.occupied {
            return Err(CoreError::TableNotOccupied {
                table_id: self.id.clone(),
            });
        }
        validation::validate_guest_count(guests)?;

        self.number_of_guests = guests;
        self.updated_at = now;
        Ok(())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
