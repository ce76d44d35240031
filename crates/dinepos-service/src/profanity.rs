//! Profanity checking implementations.
//!
//! The domain only knows the [`ProfanityChecker`] capability trait from
//! dinepos-core. Production deployments typically back it with an external
//! screening service; that client lives behind the same trait and is wired
//! in at startup. This module provides the deterministic local
//! implementation used as a default and in tests.

use dinepos_core::ProfanityChecker;

/// Case-insensitive word-list checker.
///
/// A name is flagged when it contains any configured word as a substring,
/// ignoring ASCII case. Deterministic and offline, which is exactly what
/// tests need.
#[derive(Debug, Clone, Default)]
pub struct WordListChecker {
    words: Vec<String>,
}

impl WordListChecker {
    /// Builds a checker over the given disallowed words.
    ///
    /// ## Example
    /// ```rust
    /// use dinepos_core::ProfanityChecker;
    /// use dinepos_service::profanity::WordListChecker;
    ///
    /// let checker = WordListChecker::new(["badword"]);
    /// assert!(checker.contains_profanity("BadWord Combo"));
    /// assert!(!checker.contains_profanity("Fried Chicken"));
    /// ```
    pub fn new<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        WordListChecker {
            words: words
                .into_iter()
                .map(|w| w.into().to_ascii_lowercase())
                .collect(),
        }
    }
}

impl ProfanityChecker for WordListChecker {
    fn contains_profanity(&self, text: &str) -> bool {
        let lowered = text.to_ascii_lowercase();
        self.words.iter().any(|word| lowered.contains(word))
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flags_configured_words_case_insensitively() {
        let checker = WordListChecker::new(["badword", "worseword"]);

        assert!(checker.contains_profanity("badword"));
        assert!(checker.contains_profanity("BADWORD combo"));
        assert!(checker.contains_profanity("a WorseWord indeed"));
        assert!(!checker.contains_profanity("Fried Chicken"));
    }

    #[test]
    fn test_empty_list_flags_nothing() {
        let checker = WordListChecker::default();
        assert!(!checker.contains_profanity("anything at all"));
    }
}
