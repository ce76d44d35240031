//! # Error Types
//!
//! Domain-specific error types for dinepos-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  dinepos-core errors (this file)                                       │
//! │  ├── CoreError        - Invariant and state-machine violations         │
//! │  └── ValidationError  - Structurally invalid input                     │
//! │                                                                         │
//! │  dinepos-db errors (separate crate)                                    │
//! │  └── DbError          - Database operation failures                    │
//! │                                                                         │
//! │  dinepos-service errors (separate crate)                               │
//! │  └── ServiceError     - NotFound / InvalidArgument / InvalidState      │
//! │                                                                         │
//! │  Flow: ValidationError → CoreError → ServiceError → transport          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include context in error messages (ids, offending values)
//! 3. Errors are enum variants, never String
//! 4. All validation happens before any mutation is applied

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Core business rule violations.
///
/// Everything here maps to a rejected request: either an invalid argument
/// (the pricing invariant, unresolved product references) or an illegal
/// state transition (guest count on an empty table).
#[derive(Debug, Error)]
pub enum CoreError {
    /// A menu's price would exceed the sum of its product line totals.
    ///
    /// ## When This Occurs
    /// - Creating a menu priced above Σ(product price × quantity)
    /// - Changing a menu price above the current product total
    #[error("menu price {price_cents} exceeds product total {total_cents}")]
    PriceExceedsProductTotal { price_cents: i64, total_cents: i64 },

    /// A menu was requested with no product lines at all.
    #[error("a menu requires at least one product line")]
    EmptyMenuProducts,

    /// Batch product resolution came back short: at least one requested
    /// product id does not exist.
    ///
    /// ## When This Occurs
    /// - Menu creation referencing an unknown or deleted product id
    #[error("menu product resolution mismatch: requested {requested} distinct products, resolved {resolved}")]
    UnresolvedMenuProducts { requested: usize, resolved: usize },

    /// Guest count change on a table nobody is sitting at.
    ///
    /// This is a state error, not an argument error: the request shape is
    /// fine, the table just has to be occupied first.
    #[error("order table {table_id} is not occupied")]
    TableNotOccupied { table_id: String },

    /// Structurally invalid input (wraps ValidationError).
    #[error("validation error: {0}")]
    Validation(#[from] ValidationError),
}

impl CoreError {
    /// Whether this error is an illegal-state error rather than an
    /// invalid-argument error.
    ///
    /// State errors are fatal to the request and not retryable without
    /// first transitioning the entity; argument errors are plain rejects.
    pub fn is_state_error(&self) -> bool {
        matches!(self, CoreError::TableNotOccupied { .. })
    }
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// These occur when a request is structurally invalid, before any business
/// rule runs.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Field value is too long.
    #[error("{field} must be at most {max} characters")]
    TooLong { field: String, max: usize },

    /// Numeric value must not be negative (price, quantity, guest count).
    #[error("{field} must not be negative (got {value})")]
    Negative { field: String, value: i64 },

    /// Numeric value is out of range.
    #[error("{field} must be between {min} and {max}")]
    OutOfRange { field: String, min: i64, max: i64 },

    /// The display name was flagged by the profanity checker.
    #[error("name '{name}' contains disallowed content")]
    Profanity { name: String },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = CoreError::PriceExceedsProductTotal {
            price_cents: 17000,
            total_cents: 16000,
        };
        assert_eq!(
            err.to_string(),
            "menu price 17000 exceeds product total 16000"
        );
    }

    #[test]
    fn test_validation_error_messages() {
        let err = ValidationError::Required {
            field: "name".to_string(),
        };
        assert_eq!(err.to_string(), "name is required");

        let err = ValidationError::Negative {
            field: "quantity".to_string(),
            value: -3,
        };
        assert_eq!(err.to_string(), "quantity must not be negative (got -3)");
    }

    #[test]
    fn test_validation_converts_to_core_error() {
        let validation_err = ValidationError::Required {
            field: "name".to_string(),
        };
        let core_err: CoreError = validation_err.into();
        assert!(matches!(core_err, CoreError::Validation(_)));
        assert!(!core_err.is_state_error());
    }

    #[test]
    fn test_table_not_occupied_is_state_error() {
        let err = CoreError::TableNotOccupied {
            table_id: "t-1".to_string(),
        };
        assert!(err.is_state_error());
    }
}
