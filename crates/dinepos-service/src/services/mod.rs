//! # Application Services
//!
//! One service per aggregate, each a thin orchestration layer:
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Service operation                                                      │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  1. Resolve references (repositories)    → NotFound                    │
//! │  2. Validate input (core value types)    → InvalidArgument             │
//! │  3. Apply domain rules (core entities)   → InvalidArgument /           │
//! │       │                                    InvalidState                │
//! │       ▼                                                                 │
//! │  4. Persist                                                             │
//! │                                                                         │
//! │  All validation happens before any mutation. The one multi-write       │
//! │  effect (product price change + menu hide cascade) runs in a single    │
//! │  transaction.                                                           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

pub mod menu_group_service;
pub mod menu_service;
pub mod order_table_service;
pub mod product_service;

pub use menu_group_service::MenuGroupService;
pub use menu_service::MenuService;
pub use order_table_service::OrderTableService;
pub use product_service::ProductService;

// =============================================================================
// Test Support
// =============================================================================

#[cfg(test)]
pub(crate) mod testing {
    use std::sync::Arc;

    use dinepos_core::ProfanityChecker;
    use dinepos_db::{Database, DbConfig};

    use super::{MenuGroupService, MenuService, OrderTableService, ProductService};
    use crate::profanity::WordListChecker;
    use crate::request::{MenuCreateRequest, MenuProductRequest};

    /// Everything a service test needs, wired against an isolated
    /// in-memory database and a word-list checker that flags "badword".
    pub(crate) struct TestContext {
        pub db: Database,
        pub menu_groups: MenuGroupService,
        pub menus: MenuService,
        pub products: ProductService,
        pub order_tables: OrderTableService,
    }

    pub(crate) async fn context() -> TestContext {
        let db = Database::new(DbConfig::in_memory()).await.unwrap();
        let checker: Arc<dyn ProfanityChecker + Send + Sync> =
            Arc::new(WordListChecker::new(["badword"]));

        TestContext {
            menu_groups: MenuGroupService::new(db.clone()),
            menus: MenuService::new(db.clone(), checker.clone()),
            products: ProductService::new(db.clone(), checker),
            order_tables: OrderTableService::new(db.clone()),
            db,
        }
    }

    /// Builds a single-line menu creation request.
    pub(crate) fn menu_request(
        menu_group_id: &str,
        name: &str,
        price_cents: i64,
        lines: &[(&str, i64)],
    ) -> MenuCreateRequest {
        MenuCreateRequest {
            menu_group_id: menu_group_id.to_string(),
            name: name.to_string(),
            price_cents,
            displayed: true,
            menu_products: lines
                .iter()
                .map(|(product_id, quantity)| MenuProductRequest {
                    product_id: product_id.to_string(),
                    quantity: *quantity,
                })
                .collect(),
        }
    }
}
