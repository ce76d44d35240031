//! Error types for the service layer.
//!
//! Every service failure falls into one of three caller-visible classes:
//!
//! - **NotFound**: a referenced id (menu, product, group, table) does not
//!   exist
//! - **InvalidArgument**: structurally invalid input or a violated
//!   invariant; nothing was committed
//! - **InvalidState**: the request was well-formed but illegal for the
//!   entity's current state; not retryable without a state transition
//!
//! A transport layer maps these classes onto its own status codes, the way
//! not-found vs. invariant violations surface as distinct client errors.

use thiserror::Error;

use dinepos_core::CoreError;
use dinepos_db::DbError;

/// Caller-visible error class of a [`ServiceError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorClass {
    /// Referenced identifier does not exist.
    NotFound,
    /// Structurally invalid input or violated invariant.
    InvalidArgument,
    /// Operation illegal in the entity's current state.
    InvalidState,
    /// Infrastructure failure (database, pool).
    Internal,
}

/// Application service errors.
#[derive(Debug, Error)]
pub enum ServiceError {
    /// Referenced entity does not exist.
    #[error("{entity} not found: {id}")]
    NotFound { entity: &'static str, id: String },

    /// Domain rule rejected the request.
    #[error(transparent)]
    Domain(#[from] CoreError),

    /// Database operation failed.
    #[error(transparent)]
    Db(#[from] DbError),
}

impl ServiceError {
    /// Creates a NotFound error for a given entity type and id.
    pub fn not_found(entity: &'static str, id: impl Into<String>) -> Self {
        ServiceError::NotFound {
            entity,
            id: id.into(),
        }
    }

    /// Classifies this error for the caller.
    ///
    /// ## Mapping
    /// ```text
    /// NotFound                          → NotFound
    /// Domain(TableNotOccupied)          → InvalidState
    /// Domain(anything else)             → InvalidArgument
    /// Db(NotFound)                      → NotFound (lost a race with a delete)
    /// Db(anything else)                 → Internal
    /// ```
    pub fn class(&self) -> ErrorClass {
        match self {
            ServiceError::NotFound { .. } => ErrorClass::NotFound,
            ServiceError::Domain(core) if core.is_state_error() => ErrorClass::InvalidState,
            ServiceError::Domain(_) => ErrorClass::InvalidArgument,
            ServiceError::Db(DbError::NotFound { .. }) => ErrorClass::NotFound,
            ServiceError::Db(_) => ErrorClass::Internal,
        }
    }
}

/// Result type for service operations.
pub type ServiceResult<T> = Result<T, ServiceError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use dinepos_core::ValidationError;

    #[test]
    fn test_not_found_class() {
        let err = ServiceError::not_found("Menu", "m-1");
        assert_eq!(err.class(), ErrorClass::NotFound);
        assert_eq!(err.to_string(), "Menu not found: m-1");
    }

    #[test]
    fn test_domain_errors_classify_by_kind() {
        let err: ServiceError = CoreError::TableNotOccupied {
            table_id: "t-1".to_string(),
        }
        .into();
        assert_eq!(err.class(), ErrorClass::InvalidState);

        let err: ServiceError = CoreError::Validation(ValidationError::Negative {
            field: "price".to_string(),
            value: -1,
        })
        .into();
        assert_eq!(err.class(), ErrorClass::InvalidArgument);
    }

    #[test]
    fn test_db_errors_classify() {
        let err: ServiceError = DbError::not_found("Menu", "m-1").into();
        assert_eq!(err.class(), ErrorClass::NotFound);

        let err: ServiceError = DbError::PoolExhausted.into();
        assert_eq!(err.class(), ErrorClass::Internal);
    }
}
