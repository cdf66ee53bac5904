//! # oracle-cipher
//!
//! Vigenère coding over the 36-symbol alphabet `a-z0-9`.
//!
//! Colordle encodes the friend-challenge color name with a classical
//! Vigenère keystream, except the alphabet is the 26 lowercase letters
//! followed by the 10 digits (36 symbols) rather than letters alone.
//! Characters outside the alphabet pass through unchanged and do not
//! desynchronize the keystream, because the key position is always taken
//! from the absolute character position.
//!
//! ## Quick Start
//!
//! ```ignore
//! use oracle_cipher::{decode, encode};
//!
//! let plain = decode("abc", "q2w").unwrap();
//! assert_eq!(plain, "ujq");
//!
//! let cipher = encode("ujq", "q2w").unwrap();
//! assert_eq!(cipher, "abc");
//! ```
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | `alphabet` | The fixed symbol set and index conversions |
//! | `vigenere` | Decoding and encoding over the keystream |
//! | `error` | Error types |

mod alphabet;
mod error;
mod vigenere;

pub use alphabet::ALPHABET;
pub use error::CipherError;
pub use vigenere::{decode, encode};
