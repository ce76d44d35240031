//! Order table service.
//!
//! Drives the two-state occupancy machine:
//!
//! ```text
//!              sit()
//!     ┌─────┐ ─────────▶ ┌──────────┐
//!     │EMPTY│            │ OCCUPIED │──┐ change_number_of_guests(n)
//!     └─────┘ ◀───────── └──────────┘◀─┘
//!              clear()
//! ```
//!
//! `sit` and `clear` are idempotent; a guest-count change on an EMPTY
//! table is a state error regardless of the requested count.

use chrono::Utc;
use tracing::info;

use dinepos_core::OrderTable;
use dinepos_db::repository::generate_id;
use dinepos_db::Database;

use crate::error::{ServiceError, ServiceResult};
use crate::request::OrderTableCreateRequest;

/// Application service for order tables.
#[derive(Clone)]
pub struct OrderTableService {
    db: Database,
}

impl OrderTableService {
    /// Creates a new OrderTableService.
    pub fn new(db: Database) -> Self {
        OrderTableService { db }
    }

    /// Registers a table. New tables start EMPTY with zero guests.
    pub async fn create(&self, request: OrderTableCreateRequest) -> ServiceResult<OrderTable> {
        let table = OrderTable::new(generate_id(), &request.name, Utc::now())
            .map_err(dinepos_core::CoreError::from)?;
        self.db.order_tables().insert(&table).await?;

        info!(id = %table.id, name = %table.name, "Order table created");
        Ok(table)
    }

    /// Marks a table OCCUPIED. Guests are left unchanged.
    pub async fn sit(&self, table_id: &str) -> ServiceResult<OrderTable> {
        let mut table = self.fetch(table_id).await?;
        table.sit(Utc::now());
        self.persist(&table).await?;

        info!(id = %table_id, "Order table occupied");
        Ok(table)
    }

    /// Marks a table EMPTY and resets its guest count to zero.
    pub async fn clear(&self, table_id: &str) -> ServiceResult<OrderTable> {
        let mut table = self.fetch(table_id).await?;
        table.clear(Utc::now());
        self.persist(&table).await?;

        info!(id = %table_id, "Order table cleared");
        Ok(table)
    }

    /// Sets the guest count of an OCCUPIED table.
    ///
    /// ## Errors
    /// - InvalidState if the table is EMPTY, whatever the count
    /// - InvalidArgument if the table is OCCUPIED and the count is negative
    pub async fn change_number_of_guests(
        &self,
        table_id: &str,
        number_of_guests: i64,
    ) -> ServiceResult<OrderTable> {
        let mut table = self.fetch(table_id).await?;
        table.change_number_of_guests(number_of_guests, Utc::now())?;
        self.persist(&table).await?;

        info!(id = %table_id, number_of_guests, "Guest count changed");
        Ok(table)
    }

    /// Lists all order tables.
    pub async fn find_all(&self) -> ServiceResult<Vec<OrderTable>> {
        Ok(self.db.order_tables().list().await?)
    }

    async fn fetch(&self, table_id: &str) -> ServiceResult<OrderTable> {
        self.db
            .order_tables()
            .get_by_id(table_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("OrderTable", table_id))
    }

    async fn persist(&self, table: &OrderTable) -> ServiceResult<()> {
        self.db
            .order_tables()
            .update_state(&table.id, table.occupied, table.number_of_guests, table.updated_at)
            .await?;
        Ok(())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use crate::error::ErrorClass;
    use crate::request::OrderTableCreateRequest;
    use crate::services::testing::context;

    fn request(name: &str) -> OrderTableCreateRequest {
        OrderTableCreateRequest {
            name: name.to_string(),
        }
    }

    #[tokio::test]
    async fn test_lifecycle_empty_to_occupied_and_back() {
        let ctx = context().await;

        let table = ctx.order_tables.create(request("Table 1")).await.unwrap();
        assert!(!table.occupied);
        assert_eq!(table.number_of_guests, 0);

        let table = ctx.order_tables.sit(&table.id).await.unwrap();
        assert!(table.occupied);
        assert_eq!(table.number_of_guests, 0);

        let table = ctx
            .order_tables
            .change_number_of_guests(&table.id, 4)
            .await
            .unwrap();
        assert_eq!(table.number_of_guests, 4);

        let table = ctx.order_tables.clear(&table.id).await.unwrap();
        assert!(!table.occupied);
        assert_eq!(table.number_of_guests, 0);

        // The cleared state actually hit the store
        let found = ctx
            .db
            .order_tables()
            .get_by_id(&table.id)
            .await
            .unwrap()
            .unwrap();
        assert!(!found.occupied);
        assert_eq!(found.number_of_guests, 0);
    }

    #[tokio::test]
    async fn test_change_guests_on_empty_table_is_state_error() {
        let ctx = context().await;
        let table = ctx.order_tables.create(request("Table 1")).await.unwrap();

        let err = ctx
            .order_tables
            .change_number_of_guests(&table.id, 4)
            .await
            .unwrap_err();
        assert_eq!(err.class(), ErrorClass::InvalidState);

        // Occupancy wins over the count check: negative on EMPTY is still a state error
        let err = ctx
            .order_tables
            .change_number_of_guests(&table.id, -1)
            .await
            .unwrap_err();
        assert_eq!(err.class(), ErrorClass::InvalidState);
    }

    #[tokio::test]
    async fn test_negative_guests_on_occupied_table_is_invalid_argument() {
        let ctx = context().await;
        let table = ctx.order_tables.create(request("Table 1")).await.unwrap();
        ctx.order_tables.sit(&table.id).await.unwrap();

        let err = ctx
            .order_tables
            .change_number_of_guests(&table.id, -1)
            .await
            .unwrap_err();
        assert_eq!(err.class(), ErrorClass::InvalidArgument);

        // Zero is a legal count
        let table = ctx
            .order_tables
            .change_number_of_guests(&table.id, 0)
            .await
            .unwrap();
        assert_eq!(table.number_of_guests, 0);
    }

    #[tokio::test]
    async fn test_sit_and_clear_are_idempotent() {
        let ctx = context().await;
        let table = ctx.order_tables.create(request("Table 1")).await.unwrap();

        ctx.order_tables.sit(&table.id).await.unwrap();
        let table = ctx.order_tables.sit(&table.id).await.unwrap();
        assert!(table.occupied);

        ctx.order_tables.clear(&table.id).await.unwrap();
        let table = ctx.order_tables.clear(&table.id).await.unwrap();
        assert!(!table.occupied);
    }

    #[tokio::test]
    async fn test_unknown_table_is_not_found() {
        let ctx = context().await;

        for result in [
            ctx.order_tables.sit("t-missing").await,
            ctx.order_tables.clear("t-missing").await,
            ctx.order_tables.change_number_of_guests("t-missing", 2).await,
        ] {
            assert_eq!(result.unwrap_err().class(), ErrorClass::NotFound);
        }
    }

    #[tokio::test]
    async fn test_create_rejects_blank_name() {
        let ctx = context().await;
        let err = ctx.order_tables.create(request("")).await.unwrap_err();
        assert_eq!(err.class(), ErrorClass::InvalidArgument);
    }
}
