//! Error types for the rotorcrypt library.

use thiserror::Error;

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, RotorCryptError>;

/// Errors produced by the rotorcrypt library.
///
/// Every variant is a configuration error. Machines validate their keys and the
/// message alphabet before the first symbol is processed, so an error never comes
/// with partial output.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RotorCryptError {
    /// A key does not have the number of entries the machine needs.
    #[error("{key} key must have {expected} entries, got {actual}")]
    KeyLength {
        /// Name of the offending key.
        key: &'static str,
        /// Number of entries the machine needs.
        expected: usize,
        /// Number of entries supplied.
        actual: usize,
    },
    /// A rotor name is not part of the machine's catalogue.
    #[error("unknown {machine} rotor '{name}'")]
    UnknownRotor {
        /// Machine whose catalogue was searched.
        machine: &'static str,
        /// Name as supplied by the caller.
        name: String,
    },
    /// A reflector name is not part of the Enigma catalogue.
    #[error("unknown reflector '{0}'")]
    UnknownReflector(String),
    /// A key contains a symbol outside the alphabet it indexes.
    #[error("'{symbol}' is not a valid symbol for the {key} key")]
    InvalidKeySymbol {
        /// Name of the offending key.
        key: &'static str,
        /// The rejected symbol.
        symbol: char,
    },
    /// A plugboard letter is used by more than one pair.
    #[error("plugboard letter '{0}' appears in more than one pair")]
    PlugboardConflict(char),
    /// An M-209 wheel key letter is not printed on its wheel.
    #[error("wheel key letter '{symbol}' is not on wheel {wheel}")]
    WheelKeyLetter {
        /// One-based wheel number.
        wheel: usize,
        /// The rejected letter.
        symbol: char,
    },
    /// An M-209 pin row contains something other than `+` or `-`.
    #[error("pin '{symbol}' on wheel {wheel} must be '+' or '-'")]
    InvalidPin {
        /// One-based wheel number.
        wheel: usize,
        /// The rejected character.
        symbol: char,
    },
    /// An M-209 pin row has no pins. Holds the one-based wheel number.
    #[error("pin row for wheel {0} is empty")]
    EmptyPinRow(usize),
    /// An M-209 lug bar names a register that does not exist.
    #[error("lug bar {bar} names register {register}, registers are 0..=6")]
    LugRegister {
        /// One-based bar number.
        bar: usize,
        /// The rejected register.
        register: u8,
    },
    /// More lug bars than the M-209 cage holds.
    #[error("at most 27 lug bars are allowed, got {0}")]
    TooManyLugBars(usize),
    /// A rotor or reflector wiring is not a valid permutation.
    #[error("wiring is not a valid permutation of its alphabet")]
    InvalidWiring,
    /// The message contains a symbol the machine cannot encipher.
    #[error("symbol '{symbol}' at offset {offset} is outside the machine alphabet")]
    UnsupportedSymbol {
        /// The rejected symbol.
        symbol: char,
        /// Character offset within the message.
        offset: usize,
    },
    /// A settings document could not be parsed.
    #[error("invalid settings document: {0}")]
    Settings(String),
}

impl From<serde_json::Error> for RotorCryptError {
    fn from(err: serde_json::Error) -> Self {
        RotorCryptError::Settings(err.to_string())
    }
}
