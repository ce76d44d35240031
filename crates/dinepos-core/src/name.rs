//! # Display Name Module
//!
//! Names shown to customers (menu names, product names) must be non-empty
//! and must pass a profanity check at construction time.
//!
//! ## The Capability Trait
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                     ProfanityChecker Seam                               │
//! │                                                                         │
//! │  DisplayedName::new(name, checker)                                     │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  &dyn ProfanityChecker ──► production: word-list / external service    │
//! │                        └─► tests:      deterministic stub              │
//! │                                                                         │
//! │  The domain never knows which one it got.                              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The check runs once, at construction. A `DisplayedName` is never
//! re-validated afterwards; renaming an entity would go back through this
//! constructor.

use crate::error::ValidationError;
use crate::MAX_NAME_LENGTH;

// =============================================================================
// Profanity Checker Capability
// =============================================================================

/// Reports whether a display name contains disallowed content.
///
/// Single-method capability interface so the real checker (an external
/// service in production) can be swapped for a deterministic stub in tests.
pub trait ProfanityChecker {
    /// Returns `true` when `text` contains disallowed content.
    fn contains_profanity(&self, text: &str) -> bool;
}

// =============================================================================
// DisplayedName
// =============================================================================

/// A customer-facing name, validated at construction.
///
/// ## Invariants
/// - Never empty (whitespace-only counts as empty)
/// - Never longer than [`MAX_NAME_LENGTH`]
/// - Passed the profanity check at creation time
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayedName(String);

impl DisplayedName {
    /// Validates and constructs a displayed name.
    ///
    /// ## Errors
    /// - [`ValidationError::Required`] when the name is empty
    /// - [`ValidationError::TooLong`] when it exceeds [`MAX_NAME_LENGTH`]
    /// - [`ValidationError::Profanity`] when the checker flags it
    pub fn new(name: &str, checker: &dyn ProfanityChecker) -> Result<Self, ValidationError> {
        if name.trim().is_empty() {
            return Err(ValidationError::Required {
                field: "name".to_string(),
            });
        }

        if name.len() > MAX_NAME_LENGTH {
            return Err(ValidationError::TooLong {
                field: "name".to_string(),
                max: MAX_NAME_LENGTH,
            });
        }

        if checker.contains_profanity(name) {
            return Err(ValidationError::Profanity {
                name: name.to_string(),
            });
        }

        Ok(DisplayedName(name.to_string()))
    }

    /// Returns the name as a string slice.
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consumes the wrapper, yielding the validated string.
    ///
    /// Entities store plain `String` names once validation has happened;
    /// this is the hand-off point.
    #[inline]
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl std::fmt::Display for DisplayedName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    /// Deterministic stub: flags any name containing a configured word.
    struct StubChecker(&'static str);

    impl ProfanityChecker for StubChecker {
        fn contains_profanity(&self, text: &str) -> bool {
            text.contains(self.0)
        }
    }

    #[test]
    fn test_accepts_clean_name() {
        let checker = StubChecker("badword");
        let name = DisplayedName::new("Fried Chicken", &checker).unwrap();
        assert_eq!(name.as_str(), "Fried Chicken");
    }

    #[test]
    fn test_rejects_empty_name() {
        let checker = StubChecker("badword");
        assert!(matches!(
            DisplayedName::new("", &checker),
            Err(ValidationError::Required { .. })
        ));
        assert!(matches!(
            DisplayedName::new("   ", &checker),
            Err(ValidationError::Required { .. })
        ));
    }

    #[test]
    fn test_rejects_profane_name() {
        let checker = StubChecker("badword");
        assert!(matches!(
            DisplayedName::new("badword combo", &checker),
            Err(ValidationError::Profanity { .. })
        ));
    }

    #[test]
    fn test_rejects_overlong_name() {
        let checker = StubChecker("badword");
        let long = "x".repeat(MAX_NAME_LENGTH + 1);
        assert!(matches!(
            DisplayedName::new(&long, &checker),
            Err(ValidationError::TooLong { .. })
        ));
    }

    #[test]
    fn test_into_inner_yields_validated_string() {
        let checker = StubChecker("badword");
        let name = DisplayedName::new("Combo", &checker).unwrap();
        assert_eq!(name.into_inner(), "Combo");
    }
}
