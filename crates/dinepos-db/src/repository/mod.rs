//! # Repository Module
//!
//! Database repositories for DinePOS entities.
//!
//! ## Two Calling Conventions
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Pool-backed methods        repo.get_by_id(id)                         │
//! │    One-shot operations on their own connection.                        │
//! │                                                                         │
//! │  Connection-taking fns      MenuRepository::hide(&mut *tx, id, now)    │
//! │    Used where several writes must share ONE transaction - the          │
//! │    product price change + menu hide cascade commits or aborts as a     │
//! │    unit.                                                                │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

pub mod menu;
pub mod menu_group;
pub mod order_table;
pub mod product;

use uuid::Uuid;

/// Generates a fresh entity id.
///
/// UUID v4: globally unique without coordination.
pub fn generate_id() -> String {
    Uuid::new_v4().to_string()
}
