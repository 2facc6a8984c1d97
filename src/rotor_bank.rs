//! RotorBank: an ordered group of rotors traversed as one signal path.
//!
//! Index 0 is the first rotor the signal meets on the forward path. The
//! rotational offsets live in a [`RotorState`] of the same size, so the
//! invariant `len(bank) == len(positions)` holds by construction.

use crate::rotor::Rotor;
use crate::stepping::RotorState;

/// A fixed-size sequence of rotors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RotorBank<const N: usize> {
    rotors: [Rotor; N],
}

impl<const N: usize> RotorBank<N> {
    /// Creates a bank from rotors in signal order.
    pub fn new(rotors: [Rotor; N]) -> Self {
        RotorBank { rotors }
    }

    /// Returns the notch of every rotor, in bank order.
    pub fn notches(&self) -> [Option<usize>; N] {
        std::array::from_fn(|i| self.rotors[i].notch())
    }

    /// Sends a signal through rotors `0..N` in order.
    ///
    /// # Parameters
    /// - `symbol`: Alphabet index entering rotor 0.
    /// - `state`: Offsets of every rotor.
    /// - `invert`: Use each rotor's inverse wiring.
    pub fn pass_through(&self, symbol: usize, state: &RotorState<N>, invert: bool) -> usize {
        self.rotors
            .iter()
            .enumerate()
            .fold(symbol, |signal, (i, rotor)| {
                rotor.pass(signal, state.position(i), invert)
            })
    }

    /// Sends a signal forward through the bank, rotor 0 first.
    pub fn forward(&self, symbol: usize, state: &RotorState<N>) -> usize {
        self.pass_through(symbol, state, false)
    }

    /// Sends a signal back through the bank on the inverse wiring, rotor `N-1` first.
    ///
    /// Undoes [`forward`](Self::forward) for the same state.
    pub fn backward(&self, symbol: usize, state: &RotorState<N>) -> usize {
        self.rotors
            .iter()
            .enumerate()
            .rev()
            .fold(symbol, |signal, (i, rotor)| {
                rotor.pass(signal, state.position(i), true)
            })
    }

    /// Returns an independent copy of the bank with the rotor order reversed.
    pub fn reversed(&self) -> Self {
        let mut rotors = self.rotors.clone();
        rotors.reverse();
        RotorBank { rotors }
    }
}
