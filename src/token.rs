//! Short Token Generation
//!
//! Produces the random identifiers used as mapping keys.

use uuid::Uuid;

// == Public Constants ==
/// Length of a generated short token in characters.
pub const TOKEN_LENGTH: usize = 6;

// == Generate ==
/// Generates a random short token.
///
/// Draws a v4 UUID and keeps the first six characters of its hyphenated
/// textual form. Uniqueness is probabilistic: collisions are improbable,
/// not prevented, and a colliding token overwrites the older mapping when
/// written.
pub fn generate() -> String {
    let mut token = Uuid::new_v4().to_string();
    token.truncate(TOKEN_LENGTH);
    token
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_has_fixed_length() {
        for _ in 0..100 {
            assert_eq!(generate().len(), TOKEN_LENGTH);
        }
    }

    #[test]
    fn test_token_uses_uuid_alphabet() {
        // The first six characters of a hyphenated UUID are lowercase hex
        for _ in 0..100 {
            let token = generate();
            assert!(
                token.chars().all(|c| c.is_ascii_hexdigit() && !c.is_ascii_uppercase()),
                "unexpected character in token {token:?}"
            );
        }
    }
}
