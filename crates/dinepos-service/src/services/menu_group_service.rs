//! Menu group service.
//!
//! Groups are the simplest aggregate: a validated name, a generated id,
//! and pure reads. They are immutable after creation.

use chrono::Utc;
use tracing::info;

use dinepos_core::{CoreError, MenuGroup};
use dinepos_db::repository::generate_id;
use dinepos_db::Database;

use crate::error::ServiceResult;
use crate::request::MenuGroupCreateRequest;

/// Application service for menu groups.
#[derive(Debug, Clone)]
pub struct MenuGroupService {
    db: Database,
}

impl MenuGroupService {
    /// Creates a new MenuGroupService.
    pub fn new(db: Database) -> Self {
        MenuGroupService { db }
    }

    /// Creates a menu group with a fresh identifier.
    ///
    /// Fails with an InvalidArgument-class error when the name is empty.
    pub async fn create(&self, request: MenuGroupCreateRequest) -> ServiceResult<MenuGroup> {
        let group = MenuGroup::new(generate_id(), &request.name, Utc::now())
            .map_err(CoreError::from)?;

        self.db.menu_groups().insert(&group).await?;

        info!(id = %group.id, name = %group.name, "Menu group created");
        Ok(group)
    }

    /// Whether a menu group with this id exists.
    pub async fn exists_by_id(&self, id: &str) -> ServiceResult<bool> {
        Ok(self.db.menu_groups().exists_by_id(id).await?)
    }

    /// Lists all menu groups.
    pub async fn find_all(&self) -> ServiceResult<Vec<MenuGroup>> {
        Ok(self.db.menu_groups().list().await?)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
