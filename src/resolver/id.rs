//! Video ID validation

use crate::utils::config::DEFAULT_ID_PATTERN;
use crate::utils::error::ResolveError;
use once_cell::sync::Lazy;
use regex::Regex;
use std::fmt;

static ID_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(DEFAULT_ID_PATTERN).expect("default ID pattern is valid"));

/// A validated YouTube video ID.
///
/// Validation happens exactly once at this boundary; later pipeline stages
/// only ever see a `VideoId` and never re-check the shape.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct VideoId(String);

impl VideoId {
    /// Validate `candidate` against the default ID shape.
    pub fn new(candidate: &str) -> Result<Self, ResolveError> {
        Self::with_pattern(candidate, &ID_PATTERN)
    }

    /// Validate `candidate` against an explicit pattern.
    pub fn with_pattern(candidate: &str, pattern: &Regex) -> Result<Self, ResolveError> {
        if pattern.is_match(candidate) {
            Ok(Self(candidate.to_string()))
        } else {
            Err(ResolveError::InvalidId(candidate.to_string()))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The default ID pattern (11 chars, word character first, word
    /// characters or hyphens after).
    pub fn default_pattern() -> &'static Regex {
        &ID_PATTERN
    }
}

impl fmt::Display for VideoId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_accepts_well_formed_ids() {
        for id in ["aqz-KE-bpKQ", "abcdefghijk", "A1b2C3d4E5_", "x----------"] {
            assert!(VideoId::new(id).is_ok(), "expected {:?} to validate", id);
        }
    }

    #[test]
    fn test_rejects_wrong_length() {
        for id in ["", "short", "abcdefghij", "abcdefghijkl"] {
            assert!(
                matches!(VideoId::new(id), Err(ResolveError::InvalidId(_))),
                "expected {:?} to be rejected",
                id
            );
        }
    }

    #[test]
    fn test_rejects_leading_hyphen() {
        assert!(matches!(
            VideoId::new("-bcdefghijk"),
            Err(ResolveError::InvalidId(_))
        ));
    }

    #[test]
    fn test_rejects_characters_outside_class() {
        for id in ["abcde/ghijk", "abcde ghijk", "abcde.ghijk", "abcde%ghijk"] {
            assert!(matches!(
                VideoId::new(id),
                Err(ResolveError::InvalidId(_))
            ));
        }
    }

    #[test]
    fn test_custom_pattern_override() {
        let pattern = Regex::new("^[a-z]{4}$").unwrap();
        assert!(VideoId::with_pattern("abcd", &pattern).is_ok());
        assert!(VideoId::with_pattern("aqz-KE-bpKQ", &pattern).is_err());
    }

    proptest! {
        #[test]
        fn any_string_not_eleven_chars_is_rejected(s in ".*") {
            prop_assume!(s.chars().count() != 11);
            prop_assert!(VideoId::new(&s).is_err());
        }

        #[test]
        fn well_formed_ids_are_accepted(s in "[A-Za-z0-9_][A-Za-z0-9_-]{10}") {
            let id = VideoId::new(&s).unwrap();
            prop_assert_eq!(id.as_str(), s.as_str());
        }

        #[test]
        fn eleven_chars_with_invalid_tail_char_are_rejected(
            head in "[A-Za-z0-9_]",
            tail in "[A-Za-z0-9_-]{9}",
            bad in "[^A-Za-z0-9_-]",
        ) {
            let id = format!("{}{}{}", head, bad, tail);
            prop_assume!(id.chars().count() == 11);
            prop_assert!(VideoId::new(&id).is_err());
        }
    }
}
