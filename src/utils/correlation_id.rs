//! Correlation token generation for outcomes.

use base64::Engine as _;
use rand::RngCore;

/// Length of random bytes before base64 encoding.
const ID_LENGTH_BYTES: usize = 9;

/// Generates a random correlation token.
///
/// Uses `getrandom` for entropy and encodes the result as URL-safe base64
/// without padding, producing a 12-character token. If the OS source fails,
/// the thread-local generator from `rand` is used instead so callers always
/// get a token.
pub fn generate_id() -> String {
    let mut buffer = [0u8; ID_LENGTH_BYTES];

    if let Err(e) = getrandom::fill(&mut buffer) {
        tracing::warn!("OS random source failed ({}), using thread rng", e);
        rand::rng().fill_bytes(&mut buffer);
    }

    base64::engine::general_purpose::URL_SAFE_NO_PAD.encode(buffer)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_generate_id_length() {
        assert_eq!(generate_id().len(), 12);
    }

    #[test]
    fn test_generate_id_url_safe() {
        let id = generate_id();
        assert!(
            id.chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
        );
    }

    #[test]
    fn test_generate_id_unique() {
        let ids: HashSet<String> = (0..1000).map(|_| generate_id()).collect();
        assert_eq!(ids.len(), 1000);
    }
}
