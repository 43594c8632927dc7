use serde::{Deserialize, Serialize};

use crate::utils::validation::{validate_identifier, ValidationError};

/// A single contig/sequence declared in an alignment header
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contig {
    /// Sequence name (SN tag in SAM)
    pub name: String,

    /// Sequence length (LN tag in SAM)
    pub length: u64,
}

impl Contig {
    pub fn new(name: impl Into<String>, length: u64) -> Self {
        Self {
            name: name.into(),
            length,
        }
    }
}

/// Identifier naming the mitochondrial reference sequence.
///
/// Matching is substring containment rather than equality, so `chrM` matches
/// `chrM_NC_012920.1` and `MT` matches `chrMT`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MtIdentifier(String);

impl MtIdentifier {
    /// Build an identifier, rejecting the empty string (which would match every contig).
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::EmptyIdentifier` if `s` is empty.
    pub fn new(s: impl Into<String>) -> Result<Self, ValidationError> {
        let s = s.into();
        validate_identifier(&s)?;
        Ok(Self(s))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether a reference sequence name belongs to the mitochondrial compartment
    #[inline]
    #[must_use]
    pub fn matches(&self, reference_name: &str) -> bool {
        reference_name.contains(self.0.as_str())
    }
}

impl std::fmt::Display for MtIdentifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identifier_substring_match() {
        let id = MtIdentifier::new("chrM").unwrap();
        assert!(id.matches("chrM"));
        assert!(id.matches("chrM_NC_012920.1"));
        assert!(!id.matches("chr1"));
        // Case sensitive
        assert!(!id.matches("chrm"));
    }

    #[test]
    fn test_identifier_embedded() {
        let id = MtIdentifier::new("MT").unwrap();
        assert!(id.matches("chrMT_extra"));
        assert!(id.matches("MT"));
        assert!(!id.matches("chr2"));
    }

    #[test]
    fn test_identifier_empty_rejected() {
        assert!(matches!(
            MtIdentifier::new(""),
            Err(ValidationError::EmptyIdentifier)
        ));
    }
}
