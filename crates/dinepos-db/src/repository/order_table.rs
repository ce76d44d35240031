//! # Order Table Repository
//!
//! Database operations for dine-in order tables. The state machine lives in
//! dinepos-core; this repository just persists the resulting
//! (occupied, number_of_guests) pair.

use chrono::{DateTime, Utc};
use sqlx::SqlitePool;
use tracing::debug;

use crate::error::{DbError, DbResult};
use dinepos_core::OrderTable;

const TABLE_COLUMNS: &str = "id, name, occupied, number_of_guests, created_at, updated_at";

/// Repository for order table database operations.
#[derive(Debug, Clone)]
pub struct OrderTableRepository {
    pool: SqlitePool,
}

impl OrderTableRepository {
    /// Creates a new OrderTableRepository.
    pub fn new(pool: SqlitePool) -> Self {
        OrderTableRepository { pool }
    }

    /// Inserts a new order table.
    pub async fn insert(&self, table: &OrderTable) -> DbResult<()> {
        debug!(id = %table.id, name = %table.name, "Inserting order table");

        sqlx::query(&format!(
            "INSERT INTO order_tables ({TABLE_COLUMNS}) VALUES (?1, ?2, ?3, ?4, ?5, ?6)"
        ))
        .bind(&table.id)
        .bind(&table.name)
        .bind(table.occupied)
        .bind(table.number_of_guests)
        .bind(table.created_at)
        .bind(table.updated_at)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    /// Gets an order table by its id.
    pub async fn get_by_id(&self, id: &str) -> DbResult<Option<OrderTable>> {
        let table = sqlx::query_as::<_, OrderTable>(&format!(
            "SELECT {TABLE_COLUMNS} FROM order_tables WHERE id = ?1"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(table)
    }

    /// Lists all order tables, ordered by name.
    pub async fn list(&self) -> DbResult<Vec<OrderTable>> {
        let tables = sqlx::query_as::<_, OrderTable>(&format!(
            "SELECT {TABLE_COLUMNS} FROM order_tables ORDER BY name"
        ))
        .fetch_all(&self.pool)
        .await?;

        Ok(tables)
    }

    /// Persists the occupancy state after a sit/clear/guest-count
    /// transition.
    pub async fn update_state(
        &self,
        id: &str,
        occupied: bool,
        number_of_guests: i64,
        now: DateTime<Utc>,
    ) -> DbResult<()> {
        debug!(id = %id, occupied, number_of_guests, "Updating order table state");

        let result = sqlx::query(
            "UPDATE order_tables SET occupied = ?2, number_of_guests = ?3, updated_at = ?4
             WHERE id = ?1",
        )
        .bind(id)
        .bind(occupied)
        .bind(number_of_guests)
        .bind(now)
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(DbError::not_found("OrderTable", id));
        }

        Ok(())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use crate::pool::{Database, DbConfig};
    use chrono::Utc;
    use dinepos_core::OrderTable;

    #[tokio::test]
    async fn test_insert_update_and_get() {
        let db = Database::new(DbConfig::in_memory()).await.unwrap();
        let repo = db.order_tables();

        let table = OrderTable::new("t-1".to_string(), "Table 1", Utc::now()).unwrap();
        repo.insert(&table).await.unwrap();

        repo.update_state("t-1", true, 4, Utc::now()).await.unwrap();

        let found = repo.get_by_id("t-1").await.unwrap().unwrap();
        assert!(found.occupied);
        assert_eq!(found.number_of_guests, 4);

        assert!(repo.update_state("t-missing", true, 1, Utc::now()).await.is_err());
    }
}
