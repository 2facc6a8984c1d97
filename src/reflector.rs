//! Reflector: a fixed-point-free involution that turns the signal around.

use crate::error::{Result, RotorCryptError};
use crate::utils::alphabet::LETTERS;
use crate::wiring::ReflectorKind;

/// An Enigma reflector.
///
/// Never rotates. Every letter is paired with exactly one other letter, so
/// `reflect(reflect(x)) == x` and `reflect(x) != x`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reflector {
    table: [u8; 26],
}

impl Reflector {
    /// Creates a reflector from a 26-letter wiring.
    ///
    /// # Errors
    /// Returns [`RotorCryptError::InvalidWiring`] unless the wiring is an
    /// involution over `A-Z` without fixed points.
    pub fn new(wiring: &str) -> Result<Self> {
        let indices = LETTERS
            .encode_text(wiring)
            .map_err(|_| RotorCryptError::InvalidWiring)?;
        if indices.len() != LETTERS.len() {
            return Err(RotorCryptError::InvalidWiring);
        }

        let mut table = [0u8; 26];
        for (i, &target) in indices.iter().enumerate() {
            if target == i || indices[target] != i {
                return Err(RotorCryptError::InvalidWiring);
            }
            table[i] = target as u8;
        }
        Ok(Reflector { table })
    }

    /// Builds one of the catalogue reflectors.
    pub(crate) fn from_kind(kind: ReflectorKind) -> Result<Self> {
        Self::new(kind.wiring())
    }

    /// Returns the partner of `symbol`.
    pub fn reflect(&self, symbol: usize) -> usize {
        self.table[symbol] as usize
    }
}
