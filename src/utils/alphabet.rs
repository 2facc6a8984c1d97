//! Ordered symbol sets the rotors are wired over.

use crate::error::{Result, RotorCryptError};
use crate::utils::modular::wrap_index;

/// The 26-letter alphabet used by every large rotor, reflector and plugboard.
pub const LETTERS: Alphabet = Alphabet::new(b"ABCDEFGHIJKLMNOPQRSTUVWXYZ");

/// The 10-digit alphabet used by SIGABA index rotors.
pub const DIGITS: Alphabet = Alphabet::new(b"0123456789");

/// An ordered, duplicate-free set of ASCII symbols.
///
/// Symbols are addressed by their index; lookups by index wrap with floor-modulo
/// so callers can pass offsets of either sign.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Alphabet {
    symbols: &'static [u8],
}

impl Alphabet {
    /// Creates an alphabet over the given ASCII symbols.
    pub const fn new(symbols: &'static [u8]) -> Self {
        Alphabet { symbols }
    }

    /// Returns the number of symbols.
    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    /// Returns `true` if the alphabet has no symbols.
    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    /// Returns the index of `symbol`, or `None` if it is not in the alphabet.
    pub fn index_of(&self, symbol: char) -> Option<usize> {
        if !symbol.is_ascii() {
            return None;
        }
        self.symbols.iter().position(|&s| s == symbol as u8)
    }

    /// Returns `true` if `symbol` belongs to the alphabet.
    pub fn contains(&self, symbol: char) -> bool {
        self.index_of(symbol).is_some()
    }

    /// Returns the symbol at `index`, wrapping negative and oversized indices.
    pub fn symbol(&self, index: i32) -> char {
        self.symbols[wrap_index(index, self.len())] as char
    }

    /// Converts a message into symbol indices.
    ///
    /// # Errors
    /// Returns [`RotorCryptError::UnsupportedSymbol`] for the first character
    /// that is not in the alphabet.
    pub fn encode_text(&self, text: &str) -> Result<Vec<usize>> {
        text.chars()
            .enumerate()
            .map(|(offset, symbol)| {
                self.index_of(symbol)
                    .ok_or(RotorCryptError::UnsupportedSymbol { symbol, offset })
            })
            .collect()
    }

    /// Converts symbol indices back into text.
    pub fn decode_text(&self, indices: &[usize]) -> String {
        indices
            .iter()
            .map(|&i| self.symbols[i % self.len()] as char)
            .collect()
    }

    /// Parses a key string of exactly `expected` symbols into indices.
    ///
    /// # Errors
    /// - [`RotorCryptError::KeyLength`] if the key does not have `expected` symbols.
    /// - [`RotorCryptError::InvalidKeySymbol`] if a symbol is outside the alphabet.
    pub fn parse_key(&self, key: &'static str, value: &str, expected: usize) -> Result<Vec<usize>> {
        let actual = value.chars().count();
        if actual != expected {
            return Err(RotorCryptError::KeyLength {
                key,
                expected,
                actual,
            });
        }
        value
            .chars()
            .map(|symbol| {
                self.index_of(symbol)
                    .ok_or(RotorCryptError::InvalidKeySymbol { key, symbol })
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_letters_and_digits() {
        assert_eq!(LETTERS.len(), 26);
        assert_eq!(DIGITS.len(), 10);
        assert_eq!(LETTERS.index_of('A'), Some(0));
        assert_eq!(LETTERS.index_of('Z'), Some(25));
        assert_eq!(DIGITS.index_of('7'), Some(7));
        assert_eq!(LETTERS.index_of('a'), None);
        assert_eq!(LETTERS.index_of('É'), None);
    }

    #[test]
    fn test_symbol_wraps() {
        assert_eq!(LETTERS.symbol(-1), 'Z');
        assert_eq!(LETTERS.symbol(26), 'A');
        assert_eq!(DIGITS.symbol(-11), '9');
    }

    #[test]
    fn test_encode_decode_text() {
        let indices = LETTERS.encode_text("HELLO").unwrap();
        assert_eq!(indices, vec![7, 4, 11, 11, 14]);
        assert_eq!(LETTERS.decode_text(&indices), "HELLO");
    }

    #[test]
    fn test_encode_text_rejects_first_bad_symbol() {
        assert_eq!(
            LETTERS.encode_text("HELLO WORLD"),
            Err(RotorCryptError::UnsupportedSymbol {
                symbol: ' ',
                offset: 5
            })
        );
    }

    #[test]
    fn test_parse_key_length_and_symbols() {
        assert_eq!(LETTERS.parse_key("position", "ABC", 3).unwrap(), vec![0, 1, 2]);
        assert_eq!(
            LETTERS.parse_key("position", "AB", 3),
            Err(RotorCryptError::KeyLength {
                key: "position",
                expected: 3,
                actual: 2
            })
        );
        assert_eq!(
            DIGITS.parse_key("index position", "02A67", 5),
            Err(RotorCryptError::InvalidKeySymbol {
                key: "index position",
                symbol: 'A'
            })
        );
    }

    #[test]
    fn test_custom_alphabet() {
        let wheel = Alphabet::new(b"ABCDEFGHIJKLMNOPQ");
        assert_eq!(wheel.len(), 17);
        assert!(wheel.contains('Q'));
        assert!(!wheel.contains('R'));
        assert!(!wheel.is_empty());
    }
}
