//! Short identifier generation and validation.
//!
//! Codes are drawn uniformly from the 62-symbol alphanumeric alphabet
//! (`A-Z`, `a-z`, `0-9`). The generator is stateless; uniqueness is the
//! durable store's job, not this module's.

use rand::Rng;
use rand::distr::Alphanumeric;

/// Default length of generated short identifiers.
pub const DEFAULT_CODE_LENGTH: usize = 6;

/// Longest code the storage schema accepts.
pub const MAX_CODE_LENGTH: usize = 32;

/// Number of distinct symbols a code position can take.
pub const ALPHABET_SIZE: usize = 62;

/// Generates a random alphanumeric code of exactly `length` characters.
///
/// # Examples
///
/// ```ignore
/// let code = generate_code(6);
/// assert_eq!(code.len(), 6);
/// assert!(code.chars().all(|c| c.is_ascii_alphanumeric()));
/// ```
pub fn generate_code(length: usize) -> String {
    rand::rng()
        .sample_iter(&Alphanumeric)
        .take(length)
        .map(char::from)
        .collect()
}

/// Returns true if `code` could have been produced by [`generate_code`] for
/// some supported length.
///
/// Used to reject obviously bogus paths before touching any store. The exact
/// length is not enforced so codes survive a `CODE_LENGTH` change.
pub fn is_valid_code(code: &str) -> bool {
    (1..=MAX_CODE_LENGTH).contains(&code.len())
        && code.bytes().all(|b| b.is_ascii_alphanumeric())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_generate_code_has_requested_length() {
        assert_eq!(generate_code(DEFAULT_CODE_LENGTH).len(), 6);
        assert_eq!(generate_code(1).len(), 1);
        assert_eq!(generate_code(MAX_CODE_LENGTH).len(), 32);
    }

    #[test]
    fn test_generate_code_alphanumeric_only() {
        for _ in 0..100 {
            let code = generate_code(DEFAULT_CODE_LENGTH);
            assert!(code.chars().all(|c| c.is_ascii_alphanumeric()));
        }
    }

    #[test]
    fn test_generate_code_produces_unique_codes() {
        let codes: HashSet<String> = (0..1000)
            .map(|_| generate_code(DEFAULT_CODE_LENGTH))
            .collect();

        assert_eq!(codes.len(), 1000);
    }

    #[test]
    fn test_single_character_codes_cover_alphabet() {
        let symbols: HashSet<String> = (0..20_000).map(|_| generate_code(1)).collect();

        assert_eq!(symbols.len(), ALPHABET_SIZE);
    }

    #[test]
    fn test_is_valid_code() {
        assert!(is_valid_code("AbC123"));
        assert!(is_valid_code("Z"));
        assert!(is_valid_code(&generate_code(MAX_CODE_LENGTH)));
        assert!(!is_valid_code(&generate_code(MAX_CODE_LENGTH + 1)));
        assert!(!is_valid_code("AbC-12"));
        assert!(!is_valid_code("favicon.ico"));
        assert!(!is_valid_code(""));
    }
}
