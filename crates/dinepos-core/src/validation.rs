//! # Validation Module
//!
//! Input validation utilities for DinePOS.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Service (request DTOs)                                       │
//! │  ├── THIS MODULE: structural checks before any lookup                  │
//! │  └── Value types: Price / DisplayedName validated constructors         │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: Domain invariants (dinepos-core types)                       │
//! │  ├── Menu pricing invariant                                            │
//! │  └── Order table state machine                                         │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: Database (SQLite)                                            │
//! │  ├── NOT NULL / CHECK constraints                                      │
//! │  └── Foreign key constraints                                           │
//! │                                                                         │
//! │  Defense in depth: multiple layers catch different errors              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use crate::error::ValidationError;
use crate::{MAX_LINE_QUANTITY, MAX_NAME_LENGTH};

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// String Validators
// =============================================================================

/// Validates an internal (non-customer-facing) name, such as a menu group
/// or order table name.
///
/// These names never go through the profanity checker; they only have to
/// be present and fit on a screen.
///
/// ## Example
/// ```rust
/// use dinepos_core::validation::validate_name;
///
/// assert!(validate_name("name", "Chicken").is_ok());
/// assert!(validate_name("name", "").is_err());
/// assert!(validate_name("name", "  ").is_err());
/// ```
pub fn validate_name(field: &str, name: &str) -> ValidationResult<()> {
    if name.trim().is_empty() {
        return Err(ValidationError::Required {
            field: field.to_string(),
        });
    }

    if name.len() > MAX_NAME_LENGTH {
        return Err(ValidationError::TooLong {
            field: field.to_string(),
            max: MAX_NAME_LENGTH,
        });
    }

    Ok(())
}

// =============================================================================
// Numeric Validators
// =============================================================================

/// Validates a menu product line quantity.
///
/// ## Rules
/// - Must not be negative (zero is allowed: a line can be a free add-on)
/// - Must not exceed [`MAX_LINE_QUANTITY`]
///
/// ## Example
/// ```rust
/// use dinepos_core::validation::validate_quantity;
///
/// assert!(validate_quantity(0).is_ok());
/// assert!(validate_quantity(2).is_ok());
/// assert!(validate_quantity(-1).is_err());
/// ```
pub fn validate_quantity(quantity: i64) -> ValidationResult<()> {
    if quantity < 0 {
        return Err(ValidationError::Negative {
            field: "quantity".to_string(),
            value: quantity,
        });
    }

    if quantity > MAX_LINE_QUANTITY {
        return Err(ValidationError::OutOfRange {
            field: "quantity".to_string(),
            min: 0,
            max: MAX_LINE_QUANTITY,
        });
    }

    Ok(())
}

/// Validates an order table guest count.
///
/// Occupancy is checked separately by the state machine; this only rejects
/// negative numbers.
///
/// ## Example
/// ```rust
/// use dinepos_core::validation::validate_guest_count;
///
/// assert!(validate_guest_count(0).is_ok());
/// assert!(validate_guest_count(4).is_ok());
/// assert!(validate_guest_count(-1).is_err());
/// ```
pub fn validate_guest_count(guests: i64) -> ValidationResult<()> {
    if guests < 0 {
        return Err(ValidationError::Negative {
            field: "number_of_guests".to_string(),
            value: guests,
        });
    }

    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================
