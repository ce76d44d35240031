//! # dinepos-db: Database Layer for DinePOS
//!
//! This crate provides database access for the DinePOS catalog and
//! order-table core. It uses SQLite for local storage with sqlx for async
//! operations.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        DinePOS Data Flow                                │
//! │                                                                         │
//! │  Service call (MenuService::create, ...)                               │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                     dinepos-db (THIS CRATE)                     │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────────┐    ┌───────────────┐    ┌──────────────┐  │   │
//! │  │   │   Database    │    │  Repositories │    │  Migrations  │  │   │
//! │  │   │   (pool.rs)   │    │  menu.rs      │    │  (embedded)  │  │   │
//! │  │   │               │    │  product.rs   │    │              │  │   │
//! │  │   │ SqlitePool    │◄───│  menu_group.rs│    │ 001_initial_ │  │   │
//! │  │   │ Transactions  │    │  order_table. │    │ schema.sql   │  │   │
//! │  │   └───────────────┘    └───────────────┘    └──────────────┘  │   │
//! │  │                                                                 │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  SQLite database file (or :memory: in tests)                           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Module Organization
//!
//! - [`pool`] - Connection pool creation and configuration
//! - [`migrations`] - Embedded database migrations
//! - [`error`] - Database error types
//! - [`repository`] - Repository implementations (menu, product, ...)
//!
//! ## Usage
//!
//! ```rust,ignore
//! use dinepos_db::{Database, DbConfig};
//!
//! let db = Database::new(DbConfig::new("./dinepos.db")).await?;
//! let menus = db.menus().list().await?;
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod migrations;
pub mod pool;
pub mod repository;

// =============================================================================
// Re-exports
// =============================================================================

pub use error::{DbError, DbResult};
pub use pool::{Database, DbConfig};

// Repository re-exports for convenience
pub use repository::menu::MenuRepository;
pub use repository::menu_group::MenuGroupRepository;
pub use repository::order_table::OrderTableRepository;
pub use repository::product::ProductRepository;
