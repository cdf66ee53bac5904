//! Error types for the oracle-cipher crate.

/// Error type for all fallible operations in the oracle-cipher crate.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CipherError {
    /// Returned when the key is empty, leaving the cyclic key position
    /// undefined.
    #[error("cipher key is empty")]
    EmptyKey,

    /// Returned when a key character required at some text position is
    /// outside the 36-symbol alphabet.
    #[error("invalid key character '{ch}' at key position {position} (key must use only a-z0-9)")]
    InvalidKeyCharacter {
        /// The offending key character.
        ch: char,
        /// Zero-based position of the character within the key.
        position: usize,
    },
}
