//! Plugboard: pairwise letter swaps applied before and after the rotors.

use crate::error::{Result, RotorCryptError};
use crate::utils::alphabet::LETTERS;

/// An Enigma plugboard (Steckerbrett).
///
/// Stored as a 26-entry involution. Unplugged letters map to themselves.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Plugboard {
    table: [u8; 26],
}

impl Default for Plugboard {
    fn default() -> Self {
        Self::identity()
    }
}

impl Plugboard {
    /// Creates a plugboard with no cables.
    pub fn identity() -> Self {
        let mut table = [0u8; 26];
        for (i, slot) in table.iter_mut().enumerate() {
            *slot = i as u8;
        }
        Plugboard { table }
    }

    /// Creates a plugboard from two strings of cable ends.
    ///
    /// Letter `i` of `first` is cabled to letter `i` of `second`.
    ///
    /// # Errors
    /// - [`RotorCryptError::KeyLength`] if the strings differ in length.
    /// - [`RotorCryptError::InvalidKeySymbol`] for anything outside `A-Z`.
    /// - [`RotorCryptError::PlugboardConflict`] if a letter is used twice.
    ///
    /// # Examples
    ///
    /// ```
    /// use rotorcrypt::plugboard::Plugboard;
    ///
    /// let board = Plugboard::from_pairs("AB", "YZ").unwrap();
    /// assert_eq!(board.swap(0), 24);
    /// assert_eq!(board.swap(25), 1);
    /// assert!(Plugboard::from_pairs("AB", "BC").is_err());
    /// ```
    pub fn from_pairs(first: &str, second: &str) -> Result<Self> {
        let left = LETTERS.parse_key("plugboard", first, first.chars().count())?;
        let right = LETTERS.parse_key("plugboard", second, left.len())?;

        let mut board = Self::identity();
        let mut used = [false; 26];
        for (&a, &b) in left.iter().zip(right.iter()) {
            for letter in [a, b] {
                if used[letter] {
                    return Err(RotorCryptError::PlugboardConflict(
                        LETTERS.symbol(letter as i32),
                    ));
                }
                used[letter] = true;
            }
            board.table[a] = b as u8;
            board.table[b] = a as u8;
        }
        Ok(board)
    }

    /// Returns the letter `symbol` is cabled to, or `symbol` itself.
    pub fn swap(&self, symbol: usize) -> usize {
        self.table[symbol] as usize
    }

    /// Returns the cabled pairs, each once, ordered by their first letter.
    pub fn pairs(&self) -> Vec<(char, char)> {
        self.table
            .iter()
            .enumerate()
            .filter(|&(i, &j)| i < j as usize)
            .map(|(i, &j)| (LETTERS.symbol(i as i32), LETTERS.symbol(j as i32)))
            .collect()
    }
}
