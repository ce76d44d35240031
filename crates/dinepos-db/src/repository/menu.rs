//! # Menu Repository
//!
//! Database operations for menus and their product lines.
//!
//! ## Storage Shape
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  menus            1 ──── n   menu_products                             │
//! │  ┌─────────────┐             ┌──────────────────────────┐              │
//! │  │ id          │             │ menu_id, seq (PK)        │              │
//! │  │ name, price │             │ product_id, quantity     │              │
//! │  │ displayed   │             └──────────────────────────┘              │
//! │  └─────────────┘             seq preserves requested line order        │
//! │                                                                         │
//! │  A Menu is always loaded whole: header row + ordered lines.            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! `find_all_containing_product` is the cascade's query: every menu whose
//! lines reference a given product, loaded inside the caller's transaction.

use chrono::{DateTime, Utc};
use sqlx::{SqliteConnection, SqlitePool};
use tracing::debug;

use crate::error::{DbError, DbResult};
use dinepos_core::{Menu, MenuProduct};

const MENU_COLUMNS: &str = "id, menu_group_id, name, price_cents, displayed, created_at, updated_at";

/// Header row of a menu, without its lines.
#[derive(Debug, sqlx::FromRow)]
struct MenuRow {
    id: String,
    menu_group_id: String,
    name: String,
    price_cents: i64,
    displayed: bool,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl MenuRow {
    fn into_menu(self, products: Vec<MenuProduct>) -> Menu {
        Menu {
            id: self.id,
            menu_group_id: self.menu_group_id,
            name: self.name,
            price_cents: self.price_cents,
            displayed: self.displayed,
            products,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

/// Repository for menu database operations.
#[derive(Debug, Clone)]
pub struct MenuRepository {
    pool: SqlitePool,
}

impl MenuRepository {
    /// Creates a new MenuRepository.
    pub fn new(pool: SqlitePool) -> Self {
        MenuRepository { pool }
    }

    /// Inserts a menu and its lines atomically.
    ///
    /// Line membership is fixed at creation, so this is the only place
    /// menu_products rows are ever written.
    pub async fn insert(&self, menu: &Menu) -> DbResult<()> {
        debug!(id = %menu.id, name = %menu.name, lines = menu.products.len(), "Inserting menu");

        let mut tx = self.pool.begin().await?;

        sqlx::query(&format!(
            "INSERT INTO menus ({MENU_COLUMNS}) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)"
        ))
        .bind(&menu.id)
        .bind(&menu.menu_group_id)
        .bind(&menu.name)
        .bind(menu.price_cents)
        .bind(menu.displayed)
        .bind(menu.created_at)
        .bind(menu.updated_at)
        .execute(&mut *tx)
        .await?;

        for (seq, line) in menu.products.iter().enumerate() {
            sqlx::query(
                "INSERT INTO menu_products (menu_id, seq, product_id, quantity)
                 VALUES (?1, ?2, ?3, ?4)",
            )
            .bind(&menu.id)
            .bind(seq as i64)
            .bind(&line.product_id)
            .bind(line.quantity)
            .execute(&mut *tx)
            .await?;
        }

        tx.commit().await?;
        Ok(())
    }

    /// Gets a menu (header + ordered lines) by its id.
    pub async fn get_by_id(&self, id: &str) -> DbResult<Option<Menu>> {
        let mut conn = self.pool.acquire().await?;

        let row = sqlx::query_as::<_, MenuRow>(&format!(
            "SELECT {MENU_COLUMNS} FROM menus WHERE id = ?1"
        ))
        .bind(id)
        .fetch_optional(&mut *conn)
        .await?;

        match row {
            Some(row) => {
                let products = Self::fetch_lines(&mut conn, id).await?;
                Ok(Some(row.into_menu(products)))
            }
            None => Ok(None),
        }
    }

    /// Lists all menus with their lines.
    pub async fn list(&self) -> DbResult<Vec<Menu>> {
        let mut conn = self.pool.acquire().await?;

        let rows = sqlx::query_as::<_, MenuRow>(&format!(
            "SELECT {MENU_COLUMNS} FROM menus ORDER BY name"
        ))
        .fetch_all(&mut *conn)
        .await?;

        let mut menus = Vec::with_capacity(rows.len());
        for row in rows {
            let products = Self::fetch_lines(&mut conn, &row.id).await?;
            menus.push(row.into_menu(products));
        }

        Ok(menus)
    }

    /// All menus whose lines reference the given product, loaded on an
    /// explicit connection so the cascade sees them inside its own
    /// transaction.
    pub async fn find_all_containing_product(
        conn: &mut SqliteConnection,
        product_id: &str,
    ) -> DbResult<Vec<Menu>> {
        let rows = sqlx::query_as::<_, MenuRow>(
            "SELECT DISTINCT m.id, m.menu_group_id, m.name, m.price_cents,
                    m.displayed, m.created_at, m.updated_at
             FROM menus m
             INNER JOIN menu_products mp ON mp.menu_id = m.id
             WHERE mp.product_id = ?1",
        )
        .bind(product_id)
        .fetch_all(&mut *conn)
        .await?;

        let mut menus = Vec::with_capacity(rows.len());
        for row in rows {
            let products = Self::fetch_lines(conn, &row.id).await?;
            menus.push(row.into_menu(products));
        }

        debug!(product_id = %product_id, menus = menus.len(), "Resolved menus containing product");
        Ok(menus)
    }

    /// Updates a menu's price. The display flag is untouched.
    pub async fn update_price(&self, id: &str, price_cents: i64, now: DateTime<Utc>) -> DbResult<()> {
        debug!(id = %id, price_cents, "Updating menu price");

        let result = sqlx::query("UPDATE menus SET price_cents = ?2, updated_at = ?3 WHERE id = ?1")
            .bind(id)
            .bind(price_cents)
            .bind(now)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(DbError::not_found("Menu", id));
        }

        Ok(())
    }

    /// Sets the display flag. Idempotent.
    pub async fn set_displayed(&self, id: &str, displayed: bool, now: DateTime<Utc>) -> DbResult<()> {
        debug!(id = %id, displayed, "Toggling menu display flag");

        let result = sqlx::query("UPDATE menus SET displayed = ?2, updated_at = ?3 WHERE id = ?1")
            .bind(id)
            .bind(displayed)
            .bind(now)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(DbError::not_found("Menu", id));
        }

        Ok(())
    }

    /// Hides a menu on an explicit connection, for the cascade.
    pub async fn hide(conn: &mut SqliteConnection, id: &str, now: DateTime<Utc>) -> DbResult<()> {
        debug!(id = %id, "Hiding menu (cascade)");

        sqlx::query("UPDATE menus SET displayed = 0, updated_at = ?2 WHERE id = ?1")
            .bind(id)
            .bind(now)
            .execute(&mut *conn)
            .await?;

        Ok(())
    }

    /// Ordered lines of one menu.
    async fn fetch_lines(conn: &mut SqliteConnection, menu_id: &str) -> DbResult<Vec<MenuProduct>> {
        let lines = sqlx::query_as::<_, MenuProduct>(
            "SELECT product_id, quantity FROM menu_products WHERE menu_id = ?1 ORDER BY seq",
        )
        .bind(menu_id)
        .fetch_all(&mut *conn)
        .await?;

        Ok(lines)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
