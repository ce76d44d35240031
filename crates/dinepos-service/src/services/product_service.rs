//! Product service.
//!
//! Registration plus the one cross-aggregate side effect in the system:
//! a product price change recomputes every referencing menu's total and
//! hides the menus whose price now exceeds it.
//!
//! ## The Cascade
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  change_price(product_id, new_price)                                   │
//! │       │                                                                 │
//! │       ▼  BEGIN TRANSACTION                                              │
//! │  UPDATE products SET price = new_price                                 │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  for each menu referencing the product:                                │
//! │      total = Σ(live product price × quantity)                          │
//! │      if menu.price > total: UPDATE menus SET displayed = 0             │
//! │       │                                                                 │
//! │       ▼  COMMIT (or roll back the whole pair)                           │
//! │                                                                         │
//! │  Menus not referencing the product are untouched. Menus still within   │
//! │  their total keep whatever display flag they had.                      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The coupling is deliberate and explicit: no listeners, no events, just
//! a queryable two-step inside one unit of work.

use std::sync::Arc;

use chrono::Utc;
use tracing::info;

use dinepos_core::{CoreError, DisplayedName, Price, ProfanityChecker, Product};
use dinepos_db::repository::generate_id;
use dinepos_db::{Database, DbError, MenuRepository, ProductRepository};

use crate::error::{ServiceError, ServiceResult};
use crate::request::ProductCreateRequest;

/// Application service for products.
#[derive(Clone)]
pub struct ProductService {
    db: Database,
    checker: Arc<dyn ProfanityChecker + Send + Sync>,
}

impl ProductService {
    /// Creates a new ProductService.
    pub fn new(db: Database, checker: Arc<dyn ProfanityChecker + Send + Sync>) -> Self {
        ProductService { db, checker }
    }

    /// Registers a product with a fresh identifier.
    ///
    /// The name is profanity-checked and the price validated non-negative;
    /// both fail as InvalidArgument-class errors.
    pub async fn create(&self, request: ProductCreateRequest) -> ServiceResult<Product> {
        let name = DisplayedName::new(&request.name, self.checker.as_ref())
            .map_err(CoreError::from)?;
        let price = Price::from_cents(request.price_cents).map_err(CoreError::from)?;

        let product = Product::new(generate_id(), name, price, Utc::now());
        self.db.products().insert(&product).await?;

        info!(id = %product.id, name = %product.name, price_cents = product.price_cents, "Product created");
        Ok(product)
    }

    /// Changes a product's price and hides every referencing menu whose
    /// price now exceeds its recomputed total.
    ///
    /// The price update and the cascade share one transaction: both
    /// commit or both roll back.
    pub async fn change_price(&self, product_id: &str, new_price_cents: i64) -> ServiceResult<Product> {
        let mut product = self
            .db
            .products()
            .get_by_id(product_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Product", product_id))?;

        let price = Price::from_cents(new_price_cents).map_err(CoreError::from)?;
        let now = Utc::now();
        product.change_price(price, now);

        let mut tx = self.db.pool().begin().await.map_err(DbError::from)?;

        ProductRepository::update_price(&mut tx, product_id, price.cents(), now).await?;

        let menus = MenuRepository::find_all_containing_product(&mut tx, product_id).await?;
        let mut hidden = 0usize;
        for menu in &menus {
            let resolved =
                ProductRepository::fetch_all_by_ids(&mut tx, &menu.distinct_product_ids()).await?;

            // Products are never deleted, so every line resolves; the
            // price just read inside this transaction is the live one.
            let total = Price::total_of(menu.products.iter().filter_map(|line| {
                resolved
                    .iter()
                    .find(|p| p.id == line.product_id)
                    .map(|p| (p.price(), line.quantity))
            }));

            if menu.price() > total {
                MenuRepository::hide(&mut tx, &menu.id, now).await?;
                hidden += 1;
            }
        }

        tx.commit().await.map_err(DbError::from)?;

        info!(
            id = %product_id,
            price_cents = new_price_cents,
            menus_checked = menus.len(),
            menus_hidden = hidden,
            "Product price changed"
        );
        Ok(product)
    }

    /// Lists all products.
    pub async fn find_all(&self) -> ServiceResult<Vec<Product>> {
        Ok(self.db.products().list().await?)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use crate::error::ErrorClass;
    use crate::request::{MenuGroupCreateRequest, ProductCreateRequest};
    use crate::services::testing::{context, menu_request};

    #[tokio::test]
    async fn test_create_validates_name_and_price() {
        let ctx = context().await;

        let product = ctx
            .products
            .create(ProductCreateRequest {
                name: "Fried".to_string(),
                price_cents: 16000,
            })
            .await
            .unwrap();
        assert_eq!(product.price_cents, 16000);

        let err = ctx
            .products
            .create(ProductCreateRequest {
                name: "badword snack".to_string(),
                price_cents: 1000,
            })
            .await
            .unwrap_err();
        assert_eq!(err.class(), ErrorClass::InvalidArgument);

        let err = ctx
            .products
            .create(ProductCreateRequest {
                name: "Fried".to_string(),
                price_cents: -1,
            })
            .await
            .unwrap_err();
        assert_eq!(err.class(), ErrorClass::InvalidArgument);
    }

    #[tokio::test]
    async fn test_change_price_rejections() {
        let ctx = context().await;

        let err = ctx.products.change_price("p-missing", 1000).await.unwrap_err();
        assert_eq!(err.class(), ErrorClass::NotFound);

        let product = ctx
            .products
            .create(ProductCreateRequest {
                name: "Fried".to_string(),
                price_cents: 16000,
            })
            .await
            .unwrap();

        let err = ctx.products.change_price(&product.id, -1).await.unwrap_err();
        assert_eq!(err.class(), ErrorClass::InvalidArgument);

        // The rejected change left the price alone
        let found = ctx.db.products().get_by_id(&product.id).await.unwrap().unwrap();
        assert_eq!(found.price_cents, 16000);
    }

    #[tokio::test]
    async fn test_price_drop_hides_only_violating_menus() {
        let ctx = context().await;

        let group = ctx
            .menu_groups
            .create(MenuGroupCreateRequest {
                name: "Chicken".to_string(),
            })
            .await
            .unwrap();
        let fried = ctx
            .products
            .create(ProductCreateRequest {
                name: "Fried".to_string(),
                price_cents: 16000,
            })
            .await
            .unwrap();
        let seasoned = ctx
            .products
            .create(ProductCreateRequest {
                name: "Seasoned".to_string(),
                price_cents: 17000,
            })
            .await
            .unwrap();

        // Priced at the full total: breaks as soon as Fried gets cheaper
        let combo = ctx
            .menus
            .create(menu_request(&group.id, "Combo", 16000, &[(&fried.id, 1)]))
            .await
            .unwrap();
        // Priced well under the total: survives the drop
        let value = ctx
            .menus
            .create(menu_request(&group.id, "Value", 5000, &[(&fried.id, 1)]))
            .await
            .unwrap();
        // Does not reference Fried at all: must be untouched
        let other = ctx
            .menus
            .create(menu_request(&group.id, "Spicy", 17000, &[(&seasoned.id, 1)]))
            .await
            .unwrap();

        let updated = ctx.products.change_price(&fried.id, 10000).await.unwrap();
        assert_eq!(updated.price_cents, 10000);

        let combo = ctx.db.menus().get_by_id(&combo.id).await.unwrap().unwrap();
        assert!(!combo.displayed, "16000 menu over a 10000 total must hide");

        let value = ctx.db.menus().get_by_id(&value.id).await.unwrap().unwrap();
        assert!(value.displayed, "5000 menu within a 10000 total must stay");

        let other = ctx.db.menus().get_by_id(&other.id).await.unwrap().unwrap();
        assert!(other.displayed, "menu not referencing the product must be untouched");
    }

    #[tokio::test]
    async fn test_price_rise_hides_nothing() {
        let ctx = context().await;

        let group = ctx
            .menu_groups
            .create(MenuGroupCreateRequest {
                name: "Chicken".to_string(),
            })
            .await
            .unwrap();
        let fried = ctx
            .products
            .create(ProductCreateRequest {
                name: "Fried".to_string(),
                price_cents: 16000,
            })
            .await
            .unwrap();
        let combo = ctx
            .menus
            .create(menu_request(&group.id, "Combo", 16000, &[(&fried.id, 1)]))
            .await
            .unwrap();

        ctx.products.change_price(&fried.id, 20000).await.unwrap();

        let combo = ctx.db.menus().get_by_id(&combo.id).await.unwrap().unwrap();
        assert!(combo.displayed);
    }

    #[tokio::test]
    async fn test_cascade_respects_quantities() {
        let ctx = context().await;

        let group = ctx
            .menu_groups
            .create(MenuGroupCreateRequest {
                name: "Chicken".to_string(),
            })
            .await
            .unwrap();
        let fried = ctx
            .products
            .create(ProductCreateRequest {
                name: "Fried".to_string(),
                price_cents: 16000,
            })
            .await
            .unwrap();

        // Two Frieds: total 32000, priced at 30000
        let double = ctx
            .menus
            .create(menu_request(&group.id, "Double", 30000, &[(&fried.id, 2)]))
            .await
            .unwrap();

        // 15000 × 2 = 30000: still exactly within total, stays visible
        ctx.products.change_price(&fried.id, 15000).await.unwrap();
        let menu = ctx.db.menus().get_by_id(&double.id).await.unwrap().unwrap();
        assert!(menu.displayed);

        // 14000 × 2 = 28000 < 30000: now hidden
        ctx.products.change_price(&fried.id, 14000).await.unwrap();
        let menu = ctx.db.menus().get_by_id(&double.id).await.unwrap().unwrap();
        assert!(!menu.displayed);
    }
}
