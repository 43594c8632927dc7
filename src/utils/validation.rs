//! Centralized validation and helper functions.

/// Maximum number of contigs allowed in a single header (DOS protection)
pub const MAX_CONTIGS: usize = 100_000;

/// Check if adding another contig would exceed the maximum allowed.
///
/// Call this with the current count BEFORE adding a new contig.
/// Returns an error message if adding would exceed the limit, None if safe to add.
///
/// # Example
/// ```ignore
/// if check_contig_limit(contigs.len()).is_some() {
///     return Err(...);
/// }
/// contigs.push(new_contig); // Safe to add
/// ```
#[must_use]
pub fn check_contig_limit(count: usize) -> Option<String> {
    if count >= MAX_CONTIGS {
        Some(format!(
            "Too many contigs: adding another would exceed maximum of {MAX_CONTIGS}"
        ))
    } else {
        None
    }
}

/// Input validation error types
#[derive(Debug, thiserror::Error)]
pub enum ValidationError {
    #[error("Mitochondrial identifier must not be empty")]
    EmptyIdentifier,
}

/// Validate a mitochondrial identifier.
///
/// An empty identifier is a substring of every name and would classify the
/// whole genome as mitochondrial.
///
/// # Examples
///
/// ```
/// use mtnucratio::utils::validation::validate_identifier;
///
/// assert!(validate_identifier("chrM").is_ok());
/// assert!(validate_identifier("").is_err());
/// ```
///
/// # Errors
///
/// Returns `ValidationError::EmptyIdentifier` if `identifier` is empty.
pub fn validate_identifier(identifier: &str) -> Result<(), ValidationError> {
    if identifier.is_empty() {
        return Err(ValidationError::EmptyIdentifier);
    }
    Ok(())
}
