//! # Product Repository
//!
//! Database operations for products.
//!
//! ## Key Operations
//! - Batch resolution by id (one query per menu creation / total recompute)
//! - Price update sharing the cascade transaction
//!
//! ## Batch Resolution
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Menu creation asks for products [a, b, c]                             │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  SELECT ... WHERE id IN (?, ?, ?)   ← single round trip                │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  2 rows back? The service compares counts and rejects the request.     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use chrono::{DateTime, Utc};
use sqlx::{QueryBuilder, Sqlite, SqliteConnection, SqlitePool};
use tracing::debug;

use crate::error::{DbError, DbResult};
use dinepos_core::Product;

const PRODUCT_COLUMNS: &str = "id, name, price_cents, created_at, updated_at";

/// Repository for product database operations.
#[derive(Debug, Clone)]
pub struct ProductRepository {
    pool: SqlitePool,
}

impl ProductRepository {
    /// Creates a new ProductRepository.
    pub fn new(pool: SqlitePool) -> Self {
        ProductRepository { pool }
    }

    /// Inserts a new product.
    pub async fn insert(&self, product: &Product) -> DbResult<()> {
        debug!(id = %product.id, name = %product.name, "Inserting product");

        sqlx::query(
            "INSERT INTO products (id, name, price_cents, created_at, updated_at)
             VALUES (?1, ?2, ?3, ?4, ?5)",
        )
        .bind(&product.id)
        .bind(&product.name)
        .bind(product.price_cents)
        .bind(product.created_at)
        .bind(product.updated_at)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    /// Gets a product by its id.
    ///
    /// ## Returns
    /// * `Ok(Some(Product))` - Product found
    /// * `Ok(None)` - Product not found
    pub async fn get_by_id(&self, id: &str) -> DbResult<Option<Product>> {
        let product = sqlx::query_as::<_, Product>(&format!(
            "SELECT {PRODUCT_COLUMNS} FROM products WHERE id = ?1"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(product)
    }

    /// Lists all products, ordered by name.
    pub async fn list(&self) -> DbResult<Vec<Product>> {
        let products = sqlx::query_as::<_, Product>(&format!(
            "SELECT {PRODUCT_COLUMNS} FROM products ORDER BY name"
        ))
        .fetch_all(&self.pool)
        .await?;

        Ok(products)
    }

    /// Resolves a batch of product ids in one query.
    ///
    /// Returns only the products that exist; the caller compares result
    /// size against the distinct requested ids to detect unknown ids.
    pub async fn get_all_by_ids(&self, ids: &[String]) -> DbResult<Vec<Product>> {
        let mut conn = self.pool.acquire().await?;
        Self::fetch_all_by_ids(&mut conn, ids).await
    }

    /// Batch resolution on an explicit connection, for callers already
    /// inside a transaction (the cascade's total recompute).
    pub async fn fetch_all_by_ids(
        conn: &mut SqliteConnection,
        ids: &[String],
    ) -> DbResult<Vec<Product>> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        let mut builder: QueryBuilder<Sqlite> = QueryBuilder::new(format!(
            "SELECT {PRODUCT_COLUMNS} FROM products WHERE id IN ("
        ));
        let mut separated = builder.separated(", ");
        for id in ids {
            separated.push_bind(id);
        }
        builder.push(")");

        let products = builder
            .build_query_as::<Product>()
            .fetch_all(&mut *conn)
            .await?;

        debug!(requested = ids.len(), resolved = products.len(), "Resolved product batch");
        Ok(products)
    }

    /// Updates a product's price on an explicit connection.
    ///
    /// Takes a connection rather than the pool so the price update and the
    /// menu-hiding cascade commit or roll back together.
    pub async fn update_price(
        conn: &mut SqliteConnection,
        id: &str,
        price_cents: i64,
        now: DateTime<Utc>,
    ) -> DbResult<()> {
        debug!(id = %id, price_cents, "Updating product price");

        let result = sqlx::query(
            "UPDATE products SET price_cents = ?2, updated_at = ?3 WHERE id = ?1",
        )
        .bind(id)
        .bind(price_cents)
        .bind(now)
        .execute(&mut *conn)
        .await?;

        if result.rows_affected() == 0 {
            return Err(DbError::not_found("Product", id));
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
    use dinepos_core::Product;

    fn product(id: &str, name: &str, price_cents: i64) -> Product {
        let now = Utc::now();
        Product {
            id: id.to_string(),
            name: name.to_string(),
            price_cents,
            created_at: now,
            updated_at: now,
        }
    }

    #[tokio::test]
    async fn test_insert_and_get_roundtrip() {
        let db = Database::new(DbConfig::in_memory()).await.unwrap();
        let repo = db.products();

        repo.insert(&product("p-1", "Fried", 16000)).await.unwrap();

        let found = repo.get_by_id("p-1").await.unwrap().unwrap();
        assert_eq!(found.name, "Fried");
        assert_eq!(found.price_cents, 16000);

        assert!(repo.get_by_id("p-missing").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_batch_resolution_skips_unknown_ids() {
        let db = Database::new(DbConfig::in_memory()).await.unwrap();
        let repo = db.products();

        repo.insert(&product("p-1", "Fried", 16000)).await.unwrap();
        repo.insert(&product("p-2", "Seasoned", 17000)).await.unwrap();

        let ids = vec![
            "p-1".to_string(),
            "p-2".to_string(),
            "p-missing".to_string(),
        ];
        let resolved = repo.get_all_by_ids(&ids).await.unwrap();
        assert_eq!(resolved.len(), 2);

        let empty: Vec<String> = Vec::new();
        assert!(repo.get_all_by_ids(&empty).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_update_price_on_connection() {
        let db = Database::new(DbConfig::in_memory()).await.unwrap();
        let repo = db.products();

        repo.insert(&product("p-1", "Fried", 16000)).await.unwrap();

        let mut tx = db.pool().begin().await.unwrap();
        super::ProductRepository::update_price(&mut tx, "p-1", 10000, Utc::now())
            .await
            .unwrap();
        tx.commit().await.unwrap();

        let found = repo.get_by_id("p-1").await.unwrap().unwrap();
        assert_eq!(found.price_cents, 10000);
    }
}
