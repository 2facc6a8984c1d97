//! Rotor stepping engine.
//!
//! A [`RotorState`] holds the rotational offset of every rotor in a bank and
//! is owned by the message being processed. A [`SteppingRule`] advances it by
//! one keystroke using the carry logic of a particular machine:
//!
//! ```text
//! Enigma   p0 += 1; p0 == notch0 => p1 += 1; p1 == notch1 => p1 += 1, p2 += 1
//! M-209    every wheel += 1, each modulo its own length
//! SIGABA   control p2 every symbol, p3 every 26th, p1 every 676th
//! ```

use crate::utils::modular::floor_mod;

/// Rotational offsets of an N-rotor bank, index 0 being the fastest rotor.
///
/// Every position is kept in `[0, len)` of the rotor it belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RotorState<const N: usize> {
    positions: [i32; N],
}

impl<const N: usize> RotorState<N> {
    /// Creates a state from explicit positions.
    pub fn new(positions: [i32; N]) -> Self {
        RotorState { positions }
    }

    /// Returns all positions, fastest rotor first.
    pub fn positions(&self) -> [i32; N] {
        self.positions
    }

    /// Returns the position of rotor `index`.
    pub fn position(&self, index: usize) -> i32 {
        self.positions[index]
    }

    /// Advances rotor `index` by one, wrapping at `len`.
    pub fn advance(&mut self, index: usize, len: i32) {
        self.positions[index] = floor_mod(self.positions[index] + 1, len);
    }

    /// Returns an independent copy with the positions in reverse order.
    ///
    /// Used when a bank is traversed backwards; the copy shares no storage
    /// with `self`.
    pub fn reversed(&self) -> Self {
        let mut positions = self.positions;
        positions.reverse();
        RotorState { positions }
    }
}

/// Machine-specific carry logic applied once per keystroke.
pub trait SteppingRule<const N: usize> {
    /// Advances `state` by one keystroke.
    fn step(&mut self, state: &mut RotorState<N>);
}

/// Enigma carry rule, including the double-step of the middle rotor.
///
/// The fast rotor always moves. If it lands on its notch the middle rotor
/// moves. If the middle rotor then sits on its own notch it moves again
/// together with the slow rotor. The second check runs on every keystroke,
/// so a middle rotor set up on its notch carries on the very next key even
/// without a carry from the fast rotor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EnigmaStepping {
    notches: [Option<i32>; 3],
}

impl EnigmaStepping {
    /// Number of contacts on an Enigma rotor.
    const CONTACTS: i32 = 26;

    /// Creates the rule from the notches of the fast, middle and slow rotors.
    pub fn new(notches: [Option<usize>; 3]) -> Self {
        EnigmaStepping {
            notches: notches.map(|n| n.map(|n| n as i32)),
        }
    }
}

impl SteppingRule<3> for EnigmaStepping {
    fn step(&mut self, state: &mut RotorState<3>) {
        state.advance(0, Self::CONTACTS);
        if Some(state.position(0)) == self.notches[0] {
            state.advance(1, Self::CONTACTS);
        }
        if Some(state.position(1)) == self.notches[1] {
            state.advance(1, Self::CONTACTS);
            state.advance(2, Self::CONTACTS);
        }
    }
}

/// Moves every rotor by one on every keystroke, each at its own length.
///
/// This is the M-209 wheel motion. Each counter wraps at the length of the
/// pin row it reads, and all six turn together.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UniformStepping<const N: usize> {
    lengths: [i32; N],
}

impl<const N: usize> UniformStepping<N> {
    /// Creates the rule from the length of each rotor.
    pub fn new(lengths: [usize; N]) -> Self {
        UniformStepping {
            lengths: lengths.map(|len| len as i32),
        }
    }
}

impl<const N: usize> SteppingRule<N> for UniformStepping<N> {
    fn step(&mut self, state: &mut RotorState<N>) {
        for (index, &len) in self.lengths.iter().enumerate() {
            state.advance(index, len);
        }
    }
}

/// SIGABA control-bank odometer.
///
/// Counts keystrokes from the start of the message (1-indexed). Rotor 2
/// moves on every keystroke, rotor 3 on every 26th and rotor 1 on every
/// 676th. Rotors 0 and 4 never move.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ControlStepping {
    count: u64,
}

impl ControlStepping {
    const CONTACTS: i32 = 26;
    const FAST: usize = 2;
    const MEDIUM: usize = 3;
    const SLOW: usize = 1;

    /// Returns the number of keystrokes stepped so far.
    pub fn count(&self) -> u64 {
        self.count
    }
}

impl SteppingRule<5> for ControlStepping {
    fn step(&mut self, state: &mut RotorState<5>) {
        self.count += 1;
        state.advance(Self::FAST, Self::CONTACTS);
        if self.count % 26 == 0 {
            state.advance(Self::MEDIUM, Self::CONTACTS);
        }
        if self.count % 676 == 0 {
            state.advance(Self::SLOW, Self::CONTACTS);
        }
    }
}
