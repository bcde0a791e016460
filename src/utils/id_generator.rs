//! Document identifier generation.

use rand::Rng;
use rand::distr::Alphanumeric;

/// Length of generated document identifiers.
pub const DOCUMENT_ID_LENGTH: usize = 20;

/// Generates a random alphanumeric document identifier.
///
/// # Examples
///
/// ```ignore
/// let id = generate_document_id();
/// assert_eq!(id.len(), 20);
/// assert!(id.chars().all(|c| c.is_ascii_alphanumeric()));
/// ```
pub fn generate_document_id() -> String {
    rand::rng()
        .sample_iter(&Alphanumeric)
        .take(DOCUMENT_ID_LENGTH)
        .map(char::from)
        .collect()
}
