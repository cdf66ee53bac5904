//! The fixed 36-symbol alphabet shared by ciphertext and key.

/// The ordered symbol set: 26 lowercase letters followed by 10 digits.
///
/// The position of a symbol in this string is its value in the modular
/// arithmetic of the cipher (`a` = 0, `z` = 25, `0` = 26, `9` = 35).
pub const ALPHABET: &str = "abcdefghijklmnopqrstuvwxyz0123456789";

/// Number of symbols in [`ALPHABET`].
pub(crate) const ALPHABET_LEN: u32 = 36;

/// Returns the alphabet index of `ch`, or `None` for characters outside
/// the symbol set. Expects already-lowercased input.
pub(crate) fn index_of(ch: char) -> Option<u32> {
    match ch {
        'a'..='z' => Some(ch as u32 - 'a' as u32),
        '0'..='9' => Some(26 + ch as u32 - '0' as u32),
        _ => None,
    }
}

/// Returns the symbol at alphabet index `index` (0..=35).
pub(crate) fn symbol_at(index: u32) -> char {
    debug_assert!(index < ALPHABET_LEN);
    if index < 26 {
        char::from(b'a' + index as u8)
    } else {
        char::from(b'0' + (index - 26) as u8)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn index_of_matches_alphabet_order() {
        for (i, ch) in ALPHABET.chars().enumerate() {
            assert_eq!(index_of(ch), Some(i as u32), "wrong index for '{ch}'");
        }
    }

    #[test]
    fn symbol_at_is_inverse_of_index_of() {
        for i in 0..ALPHABET_LEN {
            assert_eq!(index_of(symbol_at(i)), Some(i));
        }
    }

    #[test]
    fn index_of_rejects_non_members() {
        for ch in [' ', '-', '_', 'A', 'Z', 'é', '!', '\n'] {
            assert_eq!(index_of(ch), None, "'{ch}' should not be in the alphabet");
        }
    }

    #[test]
    fn alphabet_has_36_symbols() {
        assert_eq!(ALPHABET.chars().count() as u32, ALPHABET_LEN);
    }
}
