//! Enigma I: three stepping rotors, a fixed reflector and a plugboard.
//!
//! Signal path for one keystroke:
//!
//! ```text
//! plugboard -> step -> rotor 0 -> rotor 1 -> rotor 2 -> reflector
//!                                                          |
//! plugboard <------ rotor 0 <- rotor 1 <- rotor 2 <--------+
//! ```
//!
//! The bank is held fastest rotor first, so rotor 0 is the rightmost rotor of
//! the key list. The machine is self-reciprocal: decoding is encoding.

use tracing::{debug, trace};

use crate::config::EnigmaSettings;
use crate::error::{Result, RotorCryptError};
use crate::machine::CipherMachine;
use crate::plugboard::Plugboard;
use crate::reflector::Reflector;
use crate::rotor::Rotor;
use crate::rotor_bank::RotorBank;
use crate::stepping::{EnigmaStepping, RotorState, SteppingRule};
use crate::utils::alphabet::LETTERS;
use crate::utils::modular::floor_mod;
use crate::wiring::{EnigmaRotor, ReflectorKind};

/// Number of rotors in the bank.
const ROTORS: usize = 3;

/// A keyed Enigma I.
#[derive(Debug, Clone)]
pub struct Enigma {
    bank: RotorBank<ROTORS>,
    reflector: Reflector,
    plugboard: Plugboard,
    rings: [i32; ROTORS],
    start: RotorState<ROTORS>,
    stepping: EnigmaStepping,
}

impl Enigma {
    /// Validates the key list and builds the machine.
    ///
    /// # Errors
    /// - [`RotorCryptError::KeyLength`] if a key has the wrong number of entries.
    /// - [`RotorCryptError::UnknownRotor`] / [`RotorCryptError::UnknownReflector`]
    ///   for names outside the catalogue.
    /// - [`RotorCryptError::InvalidKeySymbol`] for positions or rings outside `A-Z`.
    /// - [`RotorCryptError::PlugboardConflict`] if a letter is cabled twice.
    ///
    /// # Examples
    ///
    /// ```
    /// use rotorcrypt::{Enigma, EnigmaSettings};
    ///
    /// let enigma = Enigma::new(&EnigmaSettings::default()).unwrap();
    /// let ciphertext = enigma.encode("HELLOWORLD").unwrap();
    /// assert_eq!(enigma.decode(&ciphertext).unwrap(), "HELLOWORLD");
    /// ```
    pub fn new(settings: &EnigmaSettings) -> Result<Self> {
        if settings.rotors.len() != ROTORS {
            return Err(RotorCryptError::KeyLength {
                key: "rotor",
                expected: ROTORS,
                actual: settings.rotors.len(),
            });
        }
        let kinds = settings
            .rotors
            .iter()
            .map(|name| name.parse::<EnigmaRotor>())
            .collect::<Result<Vec<_>>>()?;
        let reflector_kind = settings.reflector.parse::<ReflectorKind>()?;
        let positions = LETTERS.parse_key("position", &settings.positions, ROTORS)?;
        let rings = LETTERS.parse_key("ring", &settings.rings, ROTORS)?;
        if settings.plugs.len() != 2 {
            return Err(RotorCryptError::KeyLength {
                key: "plug string",
                expected: 2,
                actual: settings.plugs.len(),
            });
        }
        let plugboard = Plugboard::from_pairs(&settings.plugs[0], &settings.plugs[1])?;

        // Key lists run left to right; the bank runs fastest (rightmost) first.
        let rotors: [Rotor; ROTORS] = [
            kinds[2].rotor()?,
            kinds[1].rotor()?,
            kinds[0].rotor()?,
        ];
        let bank = RotorBank::new(rotors);
        let rings: [i32; ROTORS] = std::array::from_fn(|i| rings[ROTORS - 1 - i] as i32);
        let start = RotorState::new(std::array::from_fn(|i| {
            floor_mod(positions[ROTORS - 1 - i] as i32 - rings[i], LETTERS.len() as i32)
        }));
        let stepping = EnigmaStepping::new(bank.notches());

        debug!(
            rotors = ?settings.rotors,
            reflector = %settings.reflector,
            plugs = plugboard.pairs().len(),
            "enigma configured"
        );

        Ok(Enigma {
            bank,
            reflector: Reflector::from_kind(reflector_kind)?,
            plugboard,
            rings,
            start,
            stepping,
        })
    }

    /// Enciphers `text`.
    pub fn encode(&self, text: &str) -> Result<String> {
        let symbols = LETTERS.encode_text(text)?;
        Ok(LETTERS.decode_text(&self.run(&symbols)))
    }

    /// Deciphers `text`. Identical to [`encode`](Self::encode).
    pub fn decode(&self, text: &str) -> Result<String> {
        self.encode(text)
    }

    /// Returns the letters in the rotor windows, left to right, after
    /// `keystrokes` keys have been pressed.
    ///
    /// ```
    /// use rotorcrypt::{Enigma, EnigmaSettings};
    ///
    /// let settings = EnigmaSettings {
    ///     positions: "AAA".to_string(),
    ///     rings: "AAA".to_string(),
    ///     ..EnigmaSettings::default()
    /// };
    /// let enigma = Enigma::new(&settings).unwrap();
    /// assert_eq!(enigma.positions_after(0), "AAA");
    /// assert_eq!(enigma.positions_after(3), "AAD");
    /// ```
    pub fn positions_after(&self, keystrokes: usize) -> String {
        let mut state = self.start;
        let mut stepping = self.stepping;
        for _ in 0..keystrokes {
            stepping.step(&mut state);
        }
        (0..ROTORS)
            .rev()
            .map(|i| LETTERS.symbol(state.position(i) + self.rings[i]))
            .collect()
    }

    fn run(&self, symbols: &[usize]) -> Vec<usize> {
        let mut state = self.start;
        let mut stepping = self.stepping;
        symbols
            .iter()
            .map(|&symbol| {
                let signal = self.plugboard.swap(symbol);
                stepping.step(&mut state);
                let signal = self.bank.forward(signal, &state);
                let signal = self.reflector.reflect(signal);
                let signal = self.bank.backward(signal, &state);
                let out = self.plugboard.swap(signal);
                trace!(positions = ?state.positions(), symbol, out, "enigma keystroke");
                out
            })
            .collect()
    }
}

impl CipherMachine for Enigma {
    fn name(&self) -> &'static str {
        "Enigma"
    }

    fn encode(&self, text: &str) -> Result<String> {
        Enigma::encode(self, text)
    }

    fn decode(&self, text: &str) -> Result<String> {
        Enigma::decode(self, text)
    }
}
