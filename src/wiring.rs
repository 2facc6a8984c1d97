//! Fixed catalogue of historical rotor, reflector and wheel tables.
//!
//! Every named part is a variant of a closed enum, so a missing table entry is
//! a parse error on the key rather than a failed lookup mid-message.

use std::fmt;
use std::str::FromStr;

use crate::error::{Result, RotorCryptError};
use crate::rotor::Rotor;
use crate::utils::alphabet::{Alphabet, DIGITS, LETTERS};

const ROMAN: [&str; 10] = ["I", "II", "III", "IV", "V", "VI", "VII", "VIII", "IX", "X"];

/// Parses a Roman numeral rotor name into a zero-based catalogue slot.
fn roman_slot(name: &str, slots: usize) -> Option<usize> {
    ROMAN.iter().take(slots).position(|&numeral| numeral == name)
}

// ──────── Enigma ────────

/// The five rotors issued with the Enigma I.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[allow(clippy::upper_case_acronyms)]
pub enum EnigmaRotor {
    I,
    II,
    III,
    IV,
    V,
}

impl EnigmaRotor {
    /// Every rotor in catalogue order.
    pub const ALL: [EnigmaRotor; 5] = [
        EnigmaRotor::I,
        EnigmaRotor::II,
        EnigmaRotor::III,
        EnigmaRotor::IV,
        EnigmaRotor::V,
    ];

    /// Returns the wiring, contact `A` first.
    pub fn wiring(self) -> &'static str {
        match self {
            EnigmaRotor::I => "EKMFLGDQVZNTOWYHXUSPAIBRCJ",
            EnigmaRotor::II => "AJDKSIRUXBLHWTMCQGZNPYFVOE",
            EnigmaRotor::III => "BDFHJLCPRTXVZNYEAWGIKQMOUS",
            EnigmaRotor::IV => "ESOVPZJAYQUIRHXLNFTGKDCMWB",
            EnigmaRotor::V => "VZBRGITYUPSDNHLXAWMJQOFECK",
        }
    }

    /// Returns the notch letter: reaching it carries into the next rotor.
    pub fn notch(self) -> char {
        match self {
            EnigmaRotor::I => 'Q',
            EnigmaRotor::II => 'E',
            EnigmaRotor::III => 'V',
            EnigmaRotor::IV => 'J',
            EnigmaRotor::V => 'Z',
        }
    }

    /// Builds the rotor.
    pub fn rotor(self) -> Result<Rotor> {
        Rotor::new(LETTERS, self.wiring(), Some(self.notch()))
    }
}

impl FromStr for EnigmaRotor {
    type Err = RotorCryptError;

    fn from_str(name: &str) -> Result<Self> {
        roman_slot(name, Self::ALL.len())
            .map(|slot| Self::ALL[slot])
            .ok_or_else(|| RotorCryptError::UnknownRotor {
                machine: "Enigma",
                name: name.to_string(),
            })
    }
}

impl fmt::Display for EnigmaRotor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(ROMAN[*self as usize])
    }
}

/// Enigma reflectors (Umkehrwalzen).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ReflectorKind {
    A,
    B,
    C,
}

impl ReflectorKind {
    /// Returns the reflector wiring, contact `A` first.
    pub fn wiring(self) -> &'static str {
        match self {
            ReflectorKind::A => "EJMZALYXVBWFCRQUONTSPIKHGD",
            ReflectorKind::B => "YRUHQSLDPXNGOKMIEBFZCWVJAT",
            ReflectorKind::C => "FVPJIAOYEDRZXWGCTKUQSBNMHL",
        }
    }
}

impl FromStr for ReflectorKind {
    type Err = RotorCryptError;

    fn from_str(name: &str) -> Result<Self> {
        match name {
            "A" => Ok(ReflectorKind::A),
            "B" => Ok(ReflectorKind::B),
            "C" => Ok(ReflectorKind::C),
            other => Err(RotorCryptError::UnknownReflector(other.to_string())),
        }
    }
}

// ──────── M-209 ────────

/// Letters printed on each of the six M-209 pin wheels.
pub const M209_WHEELS: [Alphabet; 6] = [
    Alphabet::new(b"ABCDEFGHIJKLMNOPQRSTUVWXYZ"),
    Alphabet::new(b"ABCDEFGHIJKLMNOPQRSTUVXYZ"),
    Alphabet::new(b"ABCDEFGHIJKLMNOPQRSTUVX"),
    Alphabet::new(b"ABCDEFGHIJKLMNOPQRSTU"),
    Alphabet::new(b"ABCDEFGHIJKLMNOPQRS"),
    Alphabet::new(b"ABCDEFGHIJKLMNOPQ"),
];

/// Distance from the letter in the key window to the pin that is read.
pub const M209_ACTIVE_PIN_OFFSETS: [usize; 6] = [15, 14, 13, 12, 11, 10];

/// Number of bars in the M-209 lug cage.
pub const M209_LUG_BARS: usize = 27;

// ──────── SIGABA ────────

/// The ten large SIGABA rotors, usable in the cipher and control banks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[allow(clippy::upper_case_acronyms)]
pub enum SigabaRotor {
    I,
    II,
    III,
    IV,
    V,
    VI,
    VII,
    VIII,
    IX,
    X,
}

impl SigabaRotor {
    /// Every rotor in catalogue order.
    pub const ALL: [SigabaRotor; 10] = [
        SigabaRotor::I,
        SigabaRotor::II,
        SigabaRotor::III,
        SigabaRotor::IV,
        SigabaRotor::V,
        SigabaRotor::VI,
        SigabaRotor::VII,
        SigabaRotor::VIII,
        SigabaRotor::IX,
        SigabaRotor::X,
    ];

    /// Returns the wiring, contact `A` first.
    pub fn wiring(self) -> &'static str {
        match self {
            SigabaRotor::I => "YCHLQSUGBDIXNZKERPVJTAWFOM",
            SigabaRotor::II => "INPXBWETGUYSAOCHVLDMQKZJFR",
            SigabaRotor::III => "WNDRIOZPTAXHFJYQBMSVEKUCGL",
            SigabaRotor::IV => "TZGHOBKRVUXLQDMPNFWCJYEIAS",
            SigabaRotor::V => "YWTAHRQJVLCEXUNGBIPZMSDFOK",
            SigabaRotor::VI => "QSLRBTEKOGAICFWYVMHJNXZUDP",
            SigabaRotor::VII => "CHJDQIGNBSAKVTUOXFWLEPRMZY",
            SigabaRotor::VIII => "CDFAJXTIMNBEQHSUGRYLWZKVPO",
            SigabaRotor::IX => "XHFESZDNRBCGKQIJLTVMUOYAPW",
            SigabaRotor::X => "EZJQXMOGYTCSFRIUPVNADLHWBK",
        }
    }

    /// Builds the rotor. SIGABA rotors have no notches.
    pub fn rotor(self) -> Result<Rotor> {
        Rotor::new(LETTERS, self.wiring(), None)
    }
}

impl FromStr for SigabaRotor {
    type Err = RotorCryptError;

    fn from_str(name: &str) -> Result<Self> {
        roman_slot(name, Self::ALL.len())
            .map(|slot| Self::ALL[slot])
            .ok_or_else(|| RotorCryptError::UnknownRotor {
                machine: "SIGABA",
                name: name.to_string(),
            })
    }
}

/// The five small SIGABA index rotors, wired over the digits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[allow(clippy::upper_case_acronyms)]
pub enum IndexRotor {
    I,
    II,
    III,
    IV,
    V,
}

impl IndexRotor {
    /// Every rotor in catalogue order.
    pub const ALL: [IndexRotor; 5] = [
        IndexRotor::I,
        IndexRotor::II,
        IndexRotor::III,
        IndexRotor::IV,
        IndexRotor::V,
    ];

    /// Returns the wiring, contact `0` first.
    pub fn wiring(self) -> &'static str {
        match self {
            IndexRotor::I => "7591482630",
            IndexRotor::II => "3810592764",
            IndexRotor::III => "4086153297",
            IndexRotor::IV => "3980526174",
            IndexRotor::V => "6497135280",
        }
    }

    /// Builds the rotor.
    pub fn rotor(self) -> Result<Rotor> {
        Rotor::new(DIGITS, self.wiring(), None)
    }
}

impl FromStr for IndexRotor {
    type Err = RotorCryptError;

    fn from_str(name: &str) -> Result<Self> {
        roman_slot(name, Self::ALL.len())
            .map(|slot| Self::ALL[slot])
            .ok_or_else(|| RotorCryptError::UnknownRotor {
                machine: "SIGABA index",
                name: name.to_string(),
            })
    }
}

/// Letters fed into the control bank on every keystroke.
pub const SIGABA_CONTROL_INPUTS: [char; 4] = ['F', 'G', 'H', 'I'];

/// Digit class of each control-bank output letter, `A` first.
///
/// Many letters share a class; no letter maps to `0`.
pub const SIGABA_DIGIT_CLASS: &[u8; 26] = b"91233444555666677777888888";

/// Returns the index-bank input digit for a control-bank output letter.
pub fn digit_class(letter: usize) -> usize {
    (SIGABA_DIGIT_CLASS[letter % SIGABA_DIGIT_CLASS.len()] - b'0') as usize
}
