//! The interface shared by every cipher machine.

use std::fmt;

use crate::error::Result;

/// Which way a message flows through a machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Plaintext to ciphertext.
    Encode,
    /// Ciphertext to plaintext.
    Decode,
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Direction::Encode => f.write_str("encode"),
            Direction::Decode => f.write_str("decode"),
        }
    }
}

/// A configured rotor cipher machine.
///
/// A machine holds only validated key material. Every call to
/// [`encode`](Self::encode) or [`decode`](Self::decode) starts from the keyed
/// rotor positions and owns its own state, so calls are independent and a
/// machine can be shared across threads.
///
/// # Examples
///
/// ```
/// use rotorcrypt::{CipherMachine, M209Settings, MachineSettings};
///
/// let machine: Box<dyn CipherMachine> = MachineSettings::M209(M209Settings::default())
///     .build()
///     .unwrap();
/// let ciphertext = machine.encode("HELLOWORLD").unwrap();
/// assert_eq!(machine.decode(&ciphertext).unwrap(), "HELLOWORLD");
/// ```
pub trait CipherMachine: Send + Sync {
    /// Short human-readable machine name.
    fn name(&self) -> &'static str;

    /// Enciphers `text`, which must be uppercase `A-Z`.
    ///
    /// # Errors
    /// Returns [`RotorCryptError::UnsupportedSymbol`](crate::error::RotorCryptError::UnsupportedSymbol)
    /// for the first character outside `A-Z`.
    fn encode(&self, text: &str) -> Result<String>;

    /// Deciphers `text`, which must be uppercase `A-Z`.
    ///
    /// # Errors
    /// Same as [`encode`](Self::encode).
    fn decode(&self, text: &str) -> Result<String>;

    /// Runs `text` in the given direction.
    fn apply(&self, direction: Direction, text: &str) -> Result<String> {
        match direction {
            Direction::Encode => self.encode(text),
            Direction::Decode => self.decode(text),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Caesar;

    impl CipherMachine for Caesar {
        fn name(&self) -> &'static str {
            "Caesar"
        }

        fn encode(&self, text: &str) -> Result<String> {
            Ok(text
                .bytes()
                .map(|b| (b'A' + (b - b'A' + 3) % 26) as char)
                .collect())
        }

        fn decode(&self, text: &str) -> Result<String> {
            Ok(text
                .bytes()
                .map(|b| (b'A' + (b - b'A' + 23) % 26) as char)
                .collect())
        }
    }

    #[test]
    fn test_apply_dispatches_on_direction() {
        let machine = Caesar;
        assert_eq!(machine.apply(Direction::Encode, "ABZ").unwrap(), "DEC");
        assert_eq!(machine.apply(Direction::Decode, "DEC").unwrap(), "ABZ");
    }

    #[test]
    fn test_direction_display() {
        assert_eq!(Direction::Encode.to_string(), "encode");
        assert_eq!(Direction::Decode.to_string(), "decode");
    }
}
