//! # Menu Group Repository
//!
//! Database operations for menu groups. Groups are immutable after
//! creation, so this is insert + reads only.

use sqlx::SqlitePool;
use tracing::debug;

use crate::error::DbResult;
use dinepos_core::MenuGroup;

/// Repository for menu group database operations.
#[derive(Debug, Clone)]
pub struct MenuGroupRepository {
    pool: SqlitePool,
}

impl MenuGroupRepository {
    /// Creates a new MenuGroupRepository.
    pub fn new(pool: SqlitePool) -> Self {
        MenuGroupRepository { pool }
    }

    /// Inserts a new menu group.
    pub async fn insert(&self, group: &MenuGroup) -> DbResult<()> {
        debug!(id = %group.id, name = %group.name, "Inserting menu group");

        sqlx::query("INSERT INTO menu_groups (id, name, created_at) VALUES (?1, ?2, ?3)")
            .bind(&group.id)
            .bind(&group.name)
            .bind(group.created_at)
            .execute(&self.pool)
            .await?;

        Ok(())
    }

    /// Gets a menu group by its id.
    pub async fn get_by_id(&self, id: &str) -> DbResult<Option<MenuGroup>> {
        let group = sqlx::query_as::<_, MenuGroup>(
            "SELECT id, name, created_at FROM menu_groups WHERE id = ?1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(group)
    }

    /// Checks whether a menu group exists without fetching it.
    pub async fn exists_by_id(&self, id: &str) -> DbResult<bool> {
        let exists: bool =
            sqlx::query_scalar("SELECT EXISTS (SELECT 1 FROM menu_groups WHERE id = ?1)")
                .bind(id)
                .fetch_one(&self.pool)
                .await?;

        Ok(exists)
    }

    /// Lists all menu groups, ordered by name.
    pub async fn list(&self) -> DbResult<Vec<MenuGroup>> {
        let groups = sqlx::query_as::<_, MenuGroup>(
            "SELECT id, name, created_at FROM menu_groups ORDER BY name",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(groups)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use crate::pool::{Database, DbConfig};
    use chrono::Utc;
    use dinepos_core::MenuGroup;

    #[tokio::test]
    async fn test_insert_exists_and_list() {
        let db = Database::new(DbConfig::in_memory()).await.unwrap();
        let repo = db.menu_groups();

        let group = MenuGroup::new("g-1".to_string(), "Chicken", Utc::now()).unwrap();
        repo.insert(&group).await.unwrap();

        assert!(repo.exists_by_id("g-1").await.unwrap());
        assert!(!repo.exists_by_id("g-missing").await.unwrap());

        let all = repo.list().await.unwrap();
        assert_eq!(all.len(), 1);
        assert_eq!(all[0].name, "Chicken");
    }
}
