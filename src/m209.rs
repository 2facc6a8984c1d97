//! M-209 lug and pin keystream machine.
//!
//! Six pin wheels of coprime lengths turn one step per letter. Each wheel reads
//! its pin row modulo the row's own length, so a key sheet may carry rows
//! shorter or longer than the wheel. A cage of up to
//! 27 bars carries lugs that sit opposite the wheels; every bar with a lug
//! facing an active pin is kicked out and counts one towards the keystream
//! value `K`. The letter is then enciphered as a reversed Beaufort shift:
//!
//! ```text
//! y = (25 + K - x) mod 26
//! ```
//!
//! The same formula deciphers, so [`M209::process`] serves both directions.

use tracing::{debug, trace};

use crate::config::M209Settings;
use crate::error::{Result, RotorCryptError};
use crate::machine::CipherMachine;
use crate::stepping::{RotorState, SteppingRule, UniformStepping};
use crate::utils::alphabet::LETTERS;
use crate::utils::modular::floor_mod;
use crate::wiring::{M209_ACTIVE_PIN_OFFSETS, M209_LUG_BARS, M209_WHEELS};

/// Number of pin wheels.
const WHEELS: usize = 6;

/// Highest register a lug can name.
const MAX_REGISTER: u8 = WHEELS as u8;

/// One bar of the lug cage.
///
/// Each bar has two lug slots. A slot holding `0` is empty; `1..=6` places a
/// lug opposite that wheel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LugBar {
    registers: [u8; 2],
}

impl LugBar {
    /// Creates a bar. `bar` is the zero-based bar number, used in errors.
    ///
    /// # Errors
    /// Returns [`RotorCryptError::LugRegister`] if a register is above 6.
    pub fn new(registers: [u8; 2], bar: usize) -> Result<Self> {
        if let Some(&register) = registers.iter().find(|&&r| r > MAX_REGISTER) {
            return Err(RotorCryptError::LugRegister {
                bar: bar + 1,
                register,
            });
        }
        Ok(LugBar { registers })
    }

    /// Returns the raw register pair.
    pub fn registers(&self) -> [u8; 2] {
        self.registers
    }

    /// Returns the zero-based wheels this bar has lugs against.
    pub fn wheels(&self) -> impl Iterator<Item = usize> + '_ {
        self.registers
            .iter()
            .filter(|&&r| r != 0)
            .map(|&r| (r - 1) as usize)
    }
}

/// A keyed M-209.
#[derive(Debug, Clone)]
pub struct M209 {
    pins: [Vec<bool>; WHEELS],
    lugs: Vec<LugBar>,
    start: RotorState<WHEELS>,
    stepping: UniformStepping<WHEELS>,
}

impl M209 {
    /// Validates the key list and builds the machine.
    ///
    /// # Errors
    /// - [`RotorCryptError::KeyLength`] if the wheel key is not six letters or
    ///   the pins are neither empty nor six rows.
    /// - [`RotorCryptError::WheelKeyLetter`] if a key letter is not on its wheel.
    /// - [`RotorCryptError::EmptyPinRow`] / [`RotorCryptError::InvalidPin`] for
    ///   malformed pin rows.
    /// - [`RotorCryptError::TooManyLugBars`] / [`RotorCryptError::LugRegister`]
    ///   for a malformed lug cage.
    pub fn new(settings: &M209Settings) -> Result<Self> {
        let key: Vec<char> = settings.wheel_key.chars().collect();
        if key.len() != WHEELS {
            return Err(RotorCryptError::KeyLength {
                key: "wheel",
                expected: WHEELS,
                actual: key.len(),
            });
        }
        let mut indices = [0usize; WHEELS];
        for (i, (&letter, wheel)) in key.iter().zip(M209_WHEELS.iter()).enumerate() {
            indices[i] = wheel
                .index_of(letter)
                .ok_or(RotorCryptError::WheelKeyLetter {
                    wheel: i + 1,
                    symbol: letter,
                })?;
        }

        let pins = Self::parse_pins(&settings.pins)?;
        // Counters run modulo the pin row, not the wheel.
        let active: [i32; WHEELS] = std::array::from_fn(|i| {
            ((M209_ACTIVE_PIN_OFFSETS[i] + indices[i]) % pins[i].len()) as i32
        });

        if settings.lugs.len() > M209_LUG_BARS {
            return Err(RotorCryptError::TooManyLugBars(settings.lugs.len()));
        }
        let lugs = settings
            .lugs
            .iter()
            .enumerate()
            .map(|(bar, &registers)| LugBar::new(registers, bar))
            .collect::<Result<Vec<_>>>()?;

        debug!(
            wheel_key = %settings.wheel_key,
            pinned = !settings.pins.is_empty(),
            bars = lugs.len(),
            "m209 configured"
        );

        let pin_lens: [usize; WHEELS] = std::array::from_fn(|i| pins[i].len());
        Ok(M209 {
            pins,
            lugs,
            start: RotorState::new(active),
            stepping: UniformStepping::new(pin_lens),
        })
    }

    fn parse_pins(rows: &[String]) -> Result<[Vec<bool>; WHEELS]> {
        if rows.is_empty() {
            return Ok(std::array::from_fn(|i| vec![false; M209_WHEELS[i].len()]));
        }
        if rows.len() != WHEELS {
            return Err(RotorCryptError::KeyLength {
                key: "pin",
                expected: WHEELS,
                actual: rows.len(),
            });
        }

        let mut pins: [Vec<bool>; WHEELS] = Default::default();
        for (i, row) in rows.iter().enumerate() {
            if row.is_empty() {
                return Err(RotorCryptError::EmptyPinRow(i + 1));
            }
            pins[i] = row
                .chars()
                .map(|pin| match pin {
                    '+' => Ok(true),
                    '-' => Ok(false),
                    symbol => Err(RotorCryptError::InvalidPin {
                        wheel: i + 1,
                        symbol,
                    }),
                })
                .collect::<Result<Vec<_>>>()?;
        }
        Ok(pins)
    }

    /// Returns the keystream values `K` for the first `len` letters.
    ///
    /// The keystream depends only on the key, never on the message.
    pub fn keystream(&self, len: usize) -> Vec<u32> {
        let mut state = self.start;
        let mut stepping = self.stepping;
        (0..len)
            .map(|_| {
                let k = self.kick(&state);
                trace!(positions = ?state.positions(), k, "m209 keystream");
                stepping.step(&mut state);
                k
            })
            .collect()
    }

    /// Counts the bars kicked out at the given wheel positions.
    fn kick(&self, state: &RotorState<WHEELS>) -> u32 {
        self.lugs
            .iter()
            .filter(|bar| {
                bar.wheels().any(|wheel| {
                    let row = &self.pins[wheel];
                    row[state.position(wheel) as usize % row.len()]
                })
            })
            .count() as u32
    }

    /// Enciphers or deciphers `text`.
    ///
    /// # Examples
    ///
    /// ```
    /// use rotorcrypt::{M209, M209Settings};
    ///
    /// let m209 = M209::new(&M209Settings::default()).unwrap();
    /// assert_eq!(m209.process("HELLOWORLD").unwrap(), "SVOOLDLIOW");
    /// assert_eq!(m209.process("SVOOLDLIOW").unwrap(), "HELLOWORLD");
    /// ```
    pub fn process(&self, text: &str) -> Result<String> {
        let symbols = LETTERS.encode_text(text)?;
        let modulus = LETTERS.len() as i32;
        let out: Vec<usize> = self
            .keystream(symbols.len())
            .into_iter()
            .zip(symbols)
            .map(|(k, x)| floor_mod(modulus - 1 + k as i32 - x as i32, modulus) as usize)
            .collect();
        Ok(LETTERS.decode_text(&out))
    }

    /// Alias of [`process`](Self::process).
    pub fn encode(&self, text: &str) -> Result<String> {
        self.process(text)
    }

    /// Alias of [`process`](Self::process).
    pub fn decode(&self, text: &str) -> Result<String> {
        self.process(text)
    }
}

impl CipherMachine for M209 {
    fn name(&self) -> &'static str {
        "M-209"
    }

    fn encode(&self, text: &str) -> Result<String> {
        self.process(text)
    }

    fn decode(&self, text: &str) -> Result<String> {
        self.process(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PINS: [&str; 6] = [
        "++-+--+++-+-+--+-++-+--+-+",
        "-+-++-+--+++-+-+--+-++-+-",
        "++--+-+-+++--+-+-++--+-",
        "-++-+--+-++-+-+--+-+-",
        "+-+-++-+--+-+-+++-+",
        "++-+-+--+-+-+-+--",
    ];

    fn lugs() -> Vec<[u8; 2]> {
        let mut lugs = vec![[3, 6], [0, 6], [1, 6], [1, 5], [4, 5]];
        lugs.extend([[0, 4]; 4]);
        lugs.extend([[2, 0]; 10]);
        lugs.extend([[2, 5]; 2]);
        lugs.extend([[0, 5]; 6]);
        lugs
    }

    fn keyed(wheel_key: &str) -> M209 {
        M209::new(&M209Settings {
            wheel_key: wheel_key.to_string(),
            pins: PINS.iter().map(|row| row.to_string()).collect(),
            lugs: lugs(),
        })
        .unwrap()
    }

    #[test]
    fn test_unpinned_machine_is_atbash() {
        let m209 = M209::new(&M209Settings::default()).unwrap();
        assert_eq!(m209.process("HELLOWORLD").unwrap(), "SVOOLDLIOW");
        assert_eq!(m209.keystream(5), vec![0; 5]);
    }

    #[test]
    fn test_keyed_keystream() {
        let m209 = keyed("AAAAAA");
        assert_eq!(lugs().len(), 27);
        assert_eq!(
            m209.keystream(12),
            vec![9, 20, 9, 11, 23, 16, 12, 27, 13, 12, 17, 8]
        );
    }

    #[test]
    fn test_keystream_ignores_message_content() {
        let m209 = keyed("AAAAAA");
        let a = m209.process(&"A".repeat(12)).unwrap();
        let z = m209.process(&"Z".repeat(12)).unwrap();
        let ks = m209.keystream(12);
        for ((ca, cz), k) in a.bytes().zip(z.bytes()).zip(ks) {
            assert_eq!((ca - b'A') as u32, (25 + k) % 26);
            assert_eq!((cz - b'A') as u32, k % 26);
        }
    }

    #[test]
    fn test_keyed_hello_world() {
        let m209 = keyed("ABCDEF");
        assert_eq!(m209.process("HELLOWORLD").unwrap(), "OFXLZTGQOH");
        assert_eq!(m209.process("OFXLZTGQOH").unwrap(), "HELLOWORLD");
    }

    #[test]
    fn test_start_positions_use_pin_offsets() {
        let m209 = keyed("AAAAAA");
        assert_eq!(m209.start.positions(), [15, 14, 13, 12, 11, 10]);
        let m209 = keyed("ZZXUSQ");
        // Last letter of every wheel: (offset + len - 1) % len.
        assert_eq!(m209.start.positions(), [14, 13, 12, 11, 10, 9]);
    }

    #[test]
    fn test_lug_bar_wheels() {
        let bar = LugBar::new([0, 6], 0).unwrap();
        assert_eq!(bar.wheels().collect::<Vec<_>>(), vec![5]);
        let bar = LugBar::new([0, 0], 0).unwrap();
        assert_eq!(bar.wheels().count(), 0);
        assert_eq!(bar.registers(), [0, 0]);
    }

    #[test]
    fn test_rejects_wheel_key() {
        let short = M209Settings {
            wheel_key: "ABCDE".to_string(),
            ..M209Settings::default()
        };
        assert_eq!(
            M209::new(&short).err(),
            Some(RotorCryptError::KeyLength {
                key: "wheel",
                expected: 6,
                actual: 5
            })
        );

        // W is not printed on wheel 2.
        let off_wheel = M209Settings {
            wheel_key: "AWAAAA".to_string(),
            ..M209Settings::default()
        };
        assert_eq!(
            M209::new(&off_wheel).err(),
            Some(RotorCryptError::WheelKeyLetter {
                wheel: 2,
                symbol: 'W'
            })
        );
    }

    #[test]
    fn test_rejects_pins() {
        let five_rows = M209Settings {
            pins: PINS[..5].iter().map(|row| row.to_string()).collect(),
            ..M209Settings::default()
        };
        assert!(matches!(
            M209::new(&five_rows),
            Err(RotorCryptError::KeyLength { key: "pin", .. })
        ));

        let mut rows: Vec<String> = PINS.iter().map(|row| row.to_string()).collect();
        rows[5].clear();
        let empty_row = M209Settings {
            pins: rows,
            ..M209Settings::default()
        };
        assert_eq!(
            M209::new(&empty_row).err(),
            Some(RotorCryptError::EmptyPinRow(6))
        );

        let mut rows: Vec<String> = PINS.iter().map(|row| row.to_string()).collect();
        rows[0] = rows[0].replacen('-', "x", 1);
        let bad_pin = M209Settings {
            pins: rows,
            ..M209Settings::default()
        };
        assert_eq!(
            M209::new(&bad_pin).err(),
            Some(RotorCryptError::InvalidPin {
                wheel: 1,
                symbol: 'x'
            })
        );
    }

    #[test]
    fn test_rejects_lugs() {
        let too_many = M209Settings {
            lugs: vec![[1, 2]; 28],
            ..M209Settings::default()
        };
        assert_eq!(
            M209::new(&too_many).err(),
            Some(RotorCryptError::TooManyLugBars(28))
        );

        let bad_register = M209Settings {
            lugs: vec![[1, 2], [0, 7]],
            ..M209Settings::default()
        };
        assert_eq!(
            M209::new(&bad_register).err(),
            Some(RotorCryptError::LugRegister {
                bar: 2,
                register: 7
            })
        );
    }

    #[test]
    fn test_short_pin_rows_wrap_on_their_own_length() {
        let all_active = M209::new(&M209Settings {
            wheel_key: "ABCDEF".to_string(),
            pins: vec!["+".to_string(); 6],
            lugs: vec![[1, 0]; 27],
        })
        .unwrap();
        assert_eq!(all_active.keystream(30), vec![27; 30]);

        // Wheel 1 starts at (15 + 0) % 2, wheel 6 at (10 + 5) % 3.
        let mixed = M209::new(&M209Settings {
            wheel_key: "ABCDEF".to_string(),
            pins: ["+-", "-", "-", "-", "-", "+--"]
                .iter()
                .map(|row| row.to_string())
                .collect(),
            lugs: vec![[1, 0], [6, 0]],
        })
        .unwrap();
        assert_eq!(mixed.start.positions(), [1, 0, 0, 0, 0, 0]);
        assert_eq!(mixed.keystream(6), vec![1, 1, 0, 2, 0, 1]);
    }

    #[test]
    fn test_repeated_pin_rows_match_single_rows() {
        let doubled = M209::new(&M209Settings {
            wheel_key: "ABCDEF".to_string(),
            pins: PINS.iter().map(|row| row.repeat(2)).collect(),
            lugs: lugs(),
        })
        .unwrap();
        let single = keyed("ABCDEF");
        assert_eq!(doubled.keystream(120), single.keystream(120));
    }

    #[test]
    fn test_lugs_without_pins_never_kick() {
        let m209 = M209::new(&M209Settings {
            lugs: lugs(),
            ..M209Settings::default()
        })
        .unwrap();
        assert!(m209.keystream(30).iter().all(|&k| k == 0));
    }
}
