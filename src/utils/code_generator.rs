//! Random alias generation.
//!
//! Produces cryptographically secure, URL-safe aliases of a requested length.

use base64::Engine as _;

/// Alias length used when the caller does not supply one.
pub const GENERATED_ALIAS_LENGTH: usize = 8;

/// Generates a random URL-safe alias of exactly `length` characters.
///
/// Draws `ceil(length * 3/4)` bytes from the system entropy source and
/// encodes them as URL-safe base64 without padding, so the result contains
/// only `[A-Za-z0-9_-]`. The encoded string is truncated to `length`.
///
/// Uniqueness is not guaranteed here; the caller retries against the store.
///
/// # Panics
///
/// Panics if the system random number generator fails (extremely rare).
///
/// # Examples
///
/// ```
/// use snaplink::utils::code_generator::generate_code;
///
/// let alias = generate_code(8);
/// assert_eq!(alias.len(), 8);
/// assert!(alias.chars().all(|c| c.is_alphanumeric() || c == '-' || c == '_'));
/// ```
pub fn generate_code(length: usize) -> String {
    // 3 random bytes encode to 4 base64 characters.
    let byte_len = length.div_ceil(4) * 3;
    let mut buffer = vec![0u8; byte_len];

    getrandom::fill(&mut buffer).expect("Failed to generate random bytes");

    let mut code = base64::engine::general_purpose::URL_SAFE_NO_PAD.encode(buffer);
    code.truncate(length);
    code
}
