//! # DinePOS Service
//!
//! Application services for the DinePOS catalog and table core.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                          dinepos-service                                │
//! │                                                                         │
//! │  ┌───────────────┐ ┌─────────────┐ ┌────────────────┐ ┌──────────────┐ │
//! │  │MenuGroupService│ │ MenuService │ │ ProductService │ │ OrderTable   │ │
//! │  │               │ │             │ │  (price →      │ │ Service      │ │
//! │  │               │ │             │ │   hide cascade)│ │              │ │
//! │  └───────┬───────┘ └──────┬──────┘ └───────┬────────┘ └──────┬───────┘ │
//! │          └────────────────┴───────┬────────┴────────────────┘          │
//! │                                   ▼                                     │
//! │                       dinepos-db (SQLite repositories)                  │
//! │                                   ▼                                     │
//! │                       dinepos-core (domain rules)                       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Each service owns a [`Database`](dinepos_db::Database) handle; the ones
//! that name things also hold a [`ProfanityChecker`](dinepos_core::ProfanityChecker).
//! Errors surface as [`ServiceError`] and classify into transport-agnostic
//! [`ErrorClass`] values for callers to map onto their protocol.

pub mod error;
pub mod profanity;
pub mod request;
pub mod services;

pub use error::{ErrorClass, ServiceError, ServiceResult};
pub use profanity::WordListChecker;
pub use request::{
    MenuCreateRequest, MenuGroupCreateRequest, MenuProductRequest, OrderTableCreateRequest,
    ProductCreateRequest,
};
pub use services::{MenuGroupService, MenuService, OrderTableService, ProductService};
