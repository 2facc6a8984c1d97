//! Rotor: a bijective wiring over an alphabet, plus an optional notch.
//!
//! A rotor is immutable. Its rotational offset lives in a `RotorState` owned
//! by the message being processed, so one rotor can be shared by any number of concurrent messages.

use crate::error::{Result, RotorCryptError};
use crate::utils::alphabet::Alphabet;
use crate::utils::modular::wrap_index;

/// A fixed substitution wheel.
///
/// Stores the wiring as forward and inverse index tables so both directions of
/// the [`pass`](Self::pass) primitive are a single lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rotor {
    alphabet: Alphabet,
    forward: Vec<u8>,
    inverse: Vec<u8>,
    notch: Option<usize>,
}

impl Rotor {
    /// Creates a rotor from a wiring string.
    ///
    /// `wiring[i]` is the symbol that contact `i` of the alphabet is wired to.
    ///
    /// # Parameters
    /// - `alphabet`: Alphabet the rotor operates over.
    /// - `wiring`: Permutation of `alphabet`, one symbol per contact.
    /// - `notch`: Symbol at which this rotor carries into its neighbour, if any.
    ///
    /// # Errors
    /// Returns [`RotorCryptError::InvalidWiring`] if `wiring` is not a bijection
    /// over `alphabet`, and [`RotorCryptError::InvalidKeySymbol`] if the notch is
    /// not in `alphabet`.
    pub fn new(alphabet: Alphabet, wiring: &str, notch: Option<char>) -> Result<Self> {
        let n = alphabet.len();
        if wiring.chars().count() != n {
            return Err(RotorCryptError::InvalidWiring);
        }

        let mut forward = Vec::with_capacity(n);
        let mut inverse = vec![u8::MAX; n];
        for (contact, symbol) in wiring.chars().enumerate() {
            let target = alphabet
                .index_of(symbol)
                .ok_or(RotorCryptError::InvalidWiring)?;
            if inverse[target] != u8::MAX {
                return Err(RotorCryptError::InvalidWiring);
            }
            inverse[target] = contact as u8;
            forward.push(target as u8);
        }

        let notch = match notch {
            Some(symbol) => Some(alphabet.index_of(symbol).ok_or(
                RotorCryptError::InvalidKeySymbol {
                    key: "notch",
                    symbol,
                },
            )?),
            None => None,
        };

        Ok(Rotor {
            alphabet,
            forward,
            inverse,
            notch,
        })
    }

    /// Returns the number of contacts (the alphabet length).
    pub fn len(&self) -> usize {
        self.forward.len()
    }

    /// Returns `true` if the rotor has no contacts.
    pub fn is_empty(&self) -> bool {
        self.forward.is_empty()
    }

    /// Returns the alphabet the rotor is wired over.
    pub fn alphabet(&self) -> Alphabet {
        self.alphabet
    }

    /// Returns the notch index, if the rotor has one.
    pub fn notch(&self) -> Option<usize> {
        self.notch
    }

    /// Sends a signal through the rotor at the given rotational position.
    ///
    /// The symbol enters at contact `symbol + position`, follows the wiring
    /// (or the inverse wiring when `invert` is set) and leaves shifted back by
    /// `position`. All arithmetic is floor-modulo, so negative offsets wrap to
    /// the same contact as `(index + N) % N`.
    ///
    /// # Parameters
    /// - `symbol`: Alphabet index of the incoming signal.
    /// - `position`: Rotational offset of the rotor.
    /// - `invert`: Traverse the wiring from the reflector side.
    ///
    /// # Returns
    /// Alphabet index of the outgoing signal.
    pub fn pass(&self, symbol: usize, position: i32, invert: bool) -> usize {
        let n = self.len();
        let contact = wrap_index(symbol as i32 + position, n);
        let wired = if invert {
            self.inverse[contact]
        } else {
            self.forward[contact]
        };
        wrap_index(wired as i32 - position, n)
    }

    /// Shorthand for [`pass`](Self::pass) with `invert = false`.
    pub fn forward(&self, symbol: usize, position: i32) -> usize {
        self.pass(symbol, position, false)
    }

    /// Shorthand for [`pass`](Self::pass) with `invert = true`.
    pub fn backward(&self, symbol: usize, position: i32) -> usize {
        self.pass(symbol, position, true)
    }
}
