//! # dinepos-core: Pure Business Logic for DinePOS
//!
//! This crate is the **heart** of DinePOS. It contains the catalog and
//! order-table consistency rules as pure functions with zero I/O
//! dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        DinePOS Architecture                             │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                 Transport (HTTP, out of scope)                  │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                    dinepos-service                              │   │
//! │  │    MenuService, ProductService, OrderTableService, ...          │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ dinepos-core (THIS CRATE) ★                     │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   types   │  │   price   │  │   name    │  │ validation│  │   │
//! │  │   │   Menu    │  │   Price   │  │ Displayed │  │   rules   │  │   │
//! │  │   │OrderTable │  │  totals   │  │   Name    │  │  checks   │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO DATABASE • NO NETWORK • PURE FUNCTIONS           │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                    dinepos-db (Database Layer)                  │   │
//! │  │              SQLite queries, migrations, repositories           │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain entities (Product, Menu, MenuGroup, OrderTable)
//! - [`price`] - Price type with non-negative integer arithmetic
//! - [`name`] - Profanity-checked display names
//! - [`error`] - Domain error types
//! - [`validation`] - Business rule validation
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: Every function is deterministic - same input = same output
//! 2. **No I/O**: Database, network, file system access is FORBIDDEN here
//! 3. **Integer Money**: All monetary values are minor units (i64) to avoid float errors
//! 4. **Explicit Errors**: All errors are typed, never strings or panics
//!
//! ## Example Usage
//!
//! ```rust
//! use dinepos_core::price::Price;
//!
//! // Create prices from minor currency units (never from floats!)
//! let fried = Price::from_cents(16000).unwrap();
//!
//! // A menu with one line of (Fried, qty 1) has a total of 16000,
//! // so a menu price of 16000 is allowed and 17000 is not.
//! let total = fried.multiply_quantity(1);
//! assert!(Price::from_cents(16000).unwrap() <= total);
//! assert!(Price::from_cents(17000).unwrap() > total);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod name;
pub mod price;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use dinepos_core::Price` instead of
// `use dinepos_core::price::Price`

pub use error::{CoreError, ValidationError};
pub use name::{DisplayedName, ProfanityChecker};
pub use price::Price;
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Maximum length of any display name (menu, product, group, table).
///
/// ## Business Reason
/// Keeps names printable on receipts and kitchen tickets.
pub const MAX_NAME_LENGTH: usize = 255;

/// Maximum quantity of a single product line inside a menu.
///
/// ## Business Reason
/// Prevents accidental over-bundling (e.g. typing 1000 instead of 10).
pub const MAX_LINE_QUANTITY: i64 = 999;
