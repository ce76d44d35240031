//! Menu service.
//!
//! Owns menu creation (where the pricing invariant is first enforced),
//! direct price changes (where it is re-enforced against live product
//! prices), and display toggling (where it is deliberately NOT enforced).
//!
//! ## Creation Pipeline
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  create(request)                                                        │
//! │       │                                                                 │
//! │       ├─ 1. menu group exists?              → NotFound                 │
//! │       ├─ 2. lines present, quantities ≥ 0?  → InvalidArgument          │
//! │       ├─ 3. price ≥ 0?                      → InvalidArgument          │
//! │       ├─ 4. batch-resolve distinct ids      → InvalidArgument if short │
//! │       ├─ 5. price ≤ Σ(price × qty)?         → InvalidArgument          │
//! │       ├─ 6. name clean, non-empty?          → InvalidArgument          │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  persist menu + lines, return the snapshot                             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::collections::HashMap;
use std::sync::Arc;

use chrono::Utc;
use tracing::info;

use dinepos_core::{CoreError, DisplayedName, Menu, MenuProduct, Price, ProfanityChecker, Product};
use dinepos_db::repository::generate_id;
use dinepos_db::Database;

use crate::error::{ServiceError, ServiceResult};
use crate::request::MenuCreateRequest;

/// Application service for menus.
#[derive(Clone)]
pub struct MenuService {
    db: Database,
    checker: Arc<dyn ProfanityChecker + Send + Sync>,
}

impl MenuService {
    /// Creates a new MenuService.
    pub fn new(db: Database, checker: Arc<dyn ProfanityChecker + Send + Sync>) -> Self {
        MenuService { db, checker }
    }

    /// Creates a menu, enforcing the pricing invariant against the product
    /// prices current right now.
    ///
    /// No cascading writes: products and groups are only read.
    pub async fn create(&self, request: MenuCreateRequest) -> ServiceResult<Menu> {
        if !self
            .db
            .menu_groups()
            .exists_by_id(&request.menu_group_id)
            .await?
        {
            return Err(ServiceError::not_found("MenuGroup", &request.menu_group_id));
        }

        if request.menu_products.is_empty() {
            return Err(CoreError::EmptyMenuProducts.into());
        }

        let mut lines = Vec::with_capacity(request.menu_products.len());
        for line in &request.menu_products {
            lines.push(
                MenuProduct::new(line.product_id.clone(), line.quantity)
                    .map_err(CoreError::from)?,
            );
        }

        let price = Price::from_cents(request.price_cents).map_err(CoreError::from)?;

        // One batch lookup for all distinct referenced products; a short
        // result means at least one unknown id.
        let distinct_ids = distinct_product_ids(&lines);
        let products = self.db.products().get_all_by_ids(&distinct_ids).await?;
        if products.len() != distinct_ids.len() {
            return Err(CoreError::UnresolvedMenuProducts {
                requested: distinct_ids.len(),
                resolved: products.len(),
            }
            .into());
        }

        let total = total_against(&lines, &products)?;
        Menu::check_price_within_total(price, total)?;

        let name = DisplayedName::new(&request.name, self.checker.as_ref())
            .map_err(CoreError::from)?;

        let now = Utc::now();
        let menu = Menu::new(
            generate_id(),
            request.menu_group_id,
            name,
            price,
            lines,
            request.displayed,
            total,
            now,
        )?;

        self.db.menus().insert(&menu).await?;

        info!(id = %menu.id, name = %menu.name, price_cents = menu.price_cents, "Menu created");
        Ok(menu)
    }

    /// Changes a menu's price, re-checking the invariant against live
    /// product prices. The display flag is untouched; only the product
    /// price cascade ever clears it automatically.
    pub async fn change_price(&self, menu_id: &str, new_price_cents: i64) -> ServiceResult<Menu> {
        let mut menu = self
            .db
            .menus()
            .get_by_id(menu_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Menu", menu_id))?;

        let price = Price::from_cents(new_price_cents).map_err(CoreError::from)?;

        let products = self
            .db
            .products()
            .get_all_by_ids(&menu.distinct_product_ids())
            .await?;
        let total = total_against(&menu.products, &products)?;

        let now = Utc::now();
        menu.change_price(price, total, now)?;
        self.db.menus().update_price(&menu.id, menu.price_cents, now).await?;

        info!(id = %menu.id, price_cents = menu.price_cents, "Menu price changed");
        Ok(menu)
    }

    /// Marks a menu visible. Unconditional and idempotent: no
    /// re-validation against the current product total happens here.
    pub async fn display(&self, menu_id: &str) -> ServiceResult<Menu> {
        self.set_displayed(menu_id, true).await
    }

    /// Marks a menu hidden. Unconditional and idempotent.
    pub async fn hide(&self, menu_id: &str) -> ServiceResult<Menu> {
        self.set_displayed(menu_id, false).await
    }

    /// Lists all menus with their lines.
    pub async fn find_all(&self) -> ServiceResult<Vec<Menu>> {
        Ok(self.db.menus().list().await?)
    }

    async fn set_displayed(&self, menu_id: &str, displayed: bool) -> ServiceResult<Menu> {
        let mut menu = self
            .db
            .menus()
            .get_by_id(menu_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Menu", menu_id))?;

        let now = Utc::now();
        if displayed {
            menu.display(now);
        } else {
            menu.hide(now);
        }
        self.db.menus().set_displayed(&menu.id, displayed, now).await?;

        info!(id = %menu.id, displayed, "Menu display flag set");
        Ok(menu)
    }
}

/// Distinct product ids over a set of lines, in first-seen order.
fn distinct_product_ids(lines: &[MenuProduct]) -> Vec<String> {
    let mut ids: Vec<String> = Vec::with_capacity(lines.len());
    for line in lines {
        if !ids.contains(&line.product_id) {
            ids.push(line.product_id.clone());
        }
    }
    ids
}

/// Menu total: Σ(product price × quantity) over the lines, priced from the
/// resolved product batch.
fn total_against(lines: &[MenuProduct], products: &[Product]) -> Result<Price, CoreError> {
    let by_id: HashMap<&str, Price> = products
        .iter()
        .map(|product| (product.id.as_str(), product.price()))
        .collect();

    let mut total = Price::zero();
    for line in lines {
        let unit = by_id.get(line.product_id.as_str()).copied().ok_or(
            CoreError::UnresolvedMenuProducts {
                requested: lines.len(),
                resolved: by_id.len(),
            },
        )?;
        total += unit.multiply_quantity(line.quantity);
    }
    Ok(total)
}

// =============================================================================
// Unit Tests
// =============================================================================
