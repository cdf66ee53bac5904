//! Decoding and encoding over the repeating keystream.

use crate::alphabet::{ALPHABET_LEN, index_of, symbol_at};
use crate::error::CipherError;

/// Shift direction of the keystream applied at each position.
#[derive(Clone, Copy)]
enum Shift {
    /// Subtract the key index (ciphertext to plaintext).
    Backward,
    /// Add the key index (plaintext to ciphertext).
    Forward,
}

/// Recovers the plaintext hidden in `ciphertext` under the repeating `key`.
///
/// Both the ciphertext and key characters are case-folded before lookup.
/// Ciphertext characters outside the alphabet are emitted unchanged, in
/// their original case, at the same position; the key position for every
/// character is `i % key.len()` with `i` the absolute character position,
/// so a pass-through character still consumes one step of the key cycle.
///
/// # Errors
///
/// Returns [`CipherError::EmptyKey`] if `key` is empty, and
/// [`CipherError::InvalidKeyCharacter`] if a key character required at
/// some position is outside the alphabet. No partial result is returned.
pub fn decode(ciphertext: &str, key: &str) -> Result<String, CipherError> {
    shift(ciphertext, key, Shift::Backward)
}

/// Applies the forward keystream shift to `plaintext`, inverting [`decode`].
///
/// # Errors
///
/// Same conditions as [`decode`].
pub fn encode(plaintext: &str, key: &str) -> Result<String, CipherError> {
    shift(plaintext, key, Shift::Forward)
}

fn shift(text: &str, key: &str, direction: Shift) -> Result<String, CipherError> {
    if key.is_empty() {
        return Err(CipherError::EmptyKey);
    }
    let key_chars: Vec<char> = key.chars().collect();

    let mut out = String::with_capacity(text.len());
    for (i, original) in text.chars().enumerate() {
        let Some(text_index) = index_of(original.to_ascii_lowercase()) else {
            // Pass-through keeps the original character, but the key cycle
            // still advances since the key position is derived from `i`.
            out.push(original);
            continue;
        };

        let position = i % key_chars.len();
        let key_char = key_chars[position];
        let key_index = index_of(key_char.to_ascii_lowercase()).ok_or(
            CipherError::InvalidKeyCharacter {
                ch: key_char,
                position,
            },
        )?;

        let out_index = match direction {
            Shift::Backward => (text_index + ALPHABET_LEN - key_index) % ALPHABET_LEN,
            Shift::Forward => (text_index + key_index) % ALPHABET_LEN,
        };
        out.push(symbol_at(out_index));
    }
    Ok(out)
}
