//! Generation of human-facing identifiers such as team join codes and pass display IDs.

use rand::Rng;

/// Characters used in generated codes, omitting look-alikes (`0`/`O`, `1`/`I`)
const CODE_ALPHABET: &[u8] = b"ABCDEFGHJKLMNPQRSTUVWXYZ23456789";

/// Length of a team join code
pub const JOIN_CODE_LENGTH: usize = 8;

/// Prefix of every pass display ID
pub const PASS_DISPLAY_ID_PREFIX: &str = "FEST";

/// Generates a random upper-case code of `length` characters.
pub fn generate_code(length: usize) -> String {
    let mut rng = rand::rng();

    (0..length)
        .map(|_| CODE_ALPHABET[rng.random_range(0..CODE_ALPHABET.len())] as char)
        .collect()
}

/// Generates a team join code such as `K7PX2MRA`.
pub fn generate_join_code() -> String {
    generate_code(JOIN_CODE_LENGTH)
}

/// Generates a pass display ID such as `FEST-9QZK4TBW`.
pub fn generate_pass_display_id() -> String {
    format!("{}-{}", PASS_DISPLAY_ID_PREFIX, generate_code(8))
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Expect join codes to be the configured length and only use the code alphabet
    #[test]
    fn join_code_uses_alphabet() {
        let code = generate_join_code();

        assert_eq!(code.len(), JOIN_CODE_LENGTH);
        assert!(code.bytes().all(|c| CODE_ALPHABET.contains(&c)));
    }

    /// Expect display IDs to carry the pass prefix
    #[test]
    fn display_id_has_prefix() {
        let display_id = generate_pass_display_id();

        assert!(display_id.starts_with("FEST-"));
        assert_eq!(display_id.len(), PASS_DISPLAY_ID_PREFIX.len() + 1 + 8);
    }
}
