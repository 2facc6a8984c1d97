//! SIGABA (ECM Mark II): a cipher bank stepped irregularly by a rotor maze.
//!
//! ```text
//!          F G H I
//!             |
//!        control bank  (odometer stepping)
//!             |
//!      digit-class table  (26 letters -> 1..=9)
//!             |
//!         index bank   (fixed positions)
//!             |
//!        {digit / 2}   -> cipher registers to advance
//! ```
//!
//! The message letter passes through the cipher bank first. The maze is then
//! read with the control positions of the same keystroke, the control bank
//! steps, and every selected cipher rotor moves by one.

use std::collections::BTreeSet;
use std::str::FromStr;

use tracing::{debug, trace};

use crate::config::SigabaSettings;
use crate::error::{Result, RotorCryptError};
use crate::machine::{CipherMachine, Direction};
use crate::rotor::Rotor;
use crate::rotor_bank::RotorBank;
use crate::stepping::{ControlStepping, RotorState, SteppingRule};
use crate::utils::alphabet::{DIGITS, LETTERS};
use crate::wiring::{digit_class, IndexRotor, SigabaRotor, SIGABA_CONTROL_INPUTS};

/// Rotors in each of the three banks.
const ROTORS: usize = 5;

/// Parses `ROTORS` catalogue names into a bank.
fn parse_bank<R>(
    names: &[String],
    key: &'static str,
    build: impl Fn(R) -> Result<Rotor>,
) -> Result<RotorBank<ROTORS>>
where
    R: FromStr<Err = RotorCryptError>,
{
    let length_error = RotorCryptError::KeyLength {
        key,
        expected: ROTORS,
        actual: names.len(),
    };
    if names.len() != ROTORS {
        return Err(length_error);
    }
    let rotors = names
        .iter()
        .map(|name| build(name.parse::<R>()?))
        .collect::<Result<Vec<_>>>()?;
    let rotors: [Rotor; ROTORS] = rotors.try_into().map_err(|_| length_error)?;
    Ok(RotorBank::new(rotors))
}

fn parse_state(key: &'static str, value: &str, digits: bool) -> Result<RotorState<ROTORS>> {
    let alphabet = if digits { DIGITS } else { LETTERS };
    let indices = alphabet.parse_key(key, value, ROTORS)?;
    Ok(RotorState::new(std::array::from_fn(|i| indices[i] as i32)))
}

/// Advances each selected cipher register by exactly one.
///
/// `registers` is a set, so a register selected by several maze outputs in
/// the same keystroke still moves once.
pub(crate) fn advance_registers(state: &mut RotorState<ROTORS>, registers: &BTreeSet<usize>) {
    for &register in registers {
        state.advance(register, LETTERS.len() as i32);
    }
}

/// A keyed SIGABA.
#[derive(Debug, Clone)]
pub struct Sigaba {
    cipher: RotorBank<ROTORS>,
    reversed_cipher: RotorBank<ROTORS>,
    control: RotorBank<ROTORS>,
    index: RotorBank<ROTORS>,
    cipher_start: RotorState<ROTORS>,
    control_start: RotorState<ROTORS>,
    index_positions: RotorState<ROTORS>,
}

impl Sigaba {
    /// Validates the key list and builds the machine.
    ///
    /// # Errors
    /// - [`RotorCryptError::KeyLength`] if a key does not have five entries.
    /// - [`RotorCryptError::UnknownRotor`] for names outside the catalogue.
    /// - [`RotorCryptError::InvalidKeySymbol`] for a position outside its alphabet.
    ///
    /// # Examples
    ///
    /// ```
    /// use rotorcrypt::{Sigaba, SigabaSettings};
    ///
    /// let sigaba = Sigaba::new(&SigabaSettings::default()).unwrap();
    /// let ciphertext = sigaba.encode("HELLOWORLD").unwrap();
    /// assert_eq!(sigaba.decode(&ciphertext).unwrap(), "HELLOWORLD");
    /// ```
    pub fn new(settings: &SigabaSettings) -> Result<Self> {
        let cipher = parse_bank(&settings.cipher_rotors, "cipher rotor", SigabaRotor::rotor)?;
        let control = parse_bank(&settings.control_rotors, "control rotor", SigabaRotor::rotor)?;
        let index = parse_bank(&settings.index_rotors, "index rotor", IndexRotor::rotor)?;

        let cipher_start = parse_state("indicator", &settings.indicator, false)?;
        let control_start = parse_state("control position", &settings.control_positions, false)?;
        let index_positions = parse_state("index position", &settings.index_positions, true)?;

        debug!(
            cipher = ?settings.cipher_rotors,
            control = ?settings.control_rotors,
            index = ?settings.index_rotors,
            "sigaba configured"
        );

        Ok(Sigaba {
            reversed_cipher: cipher.reversed(),
            cipher,
            control,
            index,
            cipher_start,
            control_start,
            index_positions,
        })
    }

    /// Enciphers `text`.
    pub fn encode(&self, text: &str) -> Result<String> {
        self.process(text, Direction::Encode)
    }

    /// Deciphers `text`.
    pub fn decode(&self, text: &str) -> Result<String> {
        self.process(text, Direction::Decode)
    }

    /// Runs `text` through the machine in the given direction.
    pub fn process(&self, text: &str, direction: Direction) -> Result<String> {
        let symbols = LETTERS.encode_text(text)?;
        let mut cipher = self.cipher_start;
        let mut control = self.control_start;
        let mut stepping = ControlStepping::default();

        let out: Vec<usize> = symbols
            .iter()
            .map(|&symbol| {
                let out = match direction {
                    Direction::Encode => self.cipher.forward(symbol, &cipher),
                    Direction::Decode => {
                        self.reversed_cipher
                            .pass_through(symbol, &cipher.reversed(), true)
                    }
                };
                let registers = self.registers(&control);
                stepping.step(&mut control);
                advance_registers(&mut cipher, &registers);
                trace!(
                    %direction,
                    keystroke = stepping.count(),
                    cipher = ?cipher.positions(),
                    control = ?control.positions(),
                    ?registers,
                    "sigaba keystroke"
                );
                out
            })
            .collect();
        Ok(LETTERS.decode_text(&out))
    }

    /// Returns the cipher registers the maze selects at the given control positions.
    pub(crate) fn registers(&self, control: &RotorState<ROTORS>) -> BTreeSet<usize> {
        SIGABA_CONTROL_INPUTS
            .iter()
            .filter_map(|&letter| LETTERS.index_of(letter))
            .map(|letter| {
                let maze = self.control.forward(letter, control);
                let digit = self.index.forward(digit_class(maze), &self.index_positions);
                digit / 2
            })
            .collect()
    }
}

impl CipherMachine for Sigaba {
    fn name(&self) -> &'static str {
        "SIGABA"
    }

    fn encode(&self, text: &str) -> Result<String> {
        Sigaba::encode(self, text)
    }

    fn decode(&self, text: &str) -> Result<String> {
        Sigaba::decode(self, text)
    }
}
