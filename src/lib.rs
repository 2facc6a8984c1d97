//! Rotor cipher machine simulators.
//!
//! Bit-exact simulations of three electromechanical cipher machines that
//! share one rotor engine:
//!
//! - **Enigma I**: three stepping rotors with the middle-rotor double step,
//!   a reflector and a plugboard.
//! - **M-209**: six pin wheels and a 27-bar lug cage producing a keystream
//!   for a reversed Beaufort shift.
//! - **SIGABA**: five cipher rotors stepped by a control and index rotor maze.
//!
//! Every machine is a pure text transform over uppercase `A-Z`. Keys are
//! validated once when the machine is built; each message then runs on a
//! fresh copy of the rotor state.
//!
//! # Architecture
//!
//! ```text
//! Alphabet + floor_mod   (symbol indices, wraparound)
//!     ↓
//! Rotor                  (bijective wiring, notch, RotorPass)
//!     ↓ grouped
//! RotorBank<N>           (forward / backward traversal)
//!     ↕ positions in RotorState<N>, advanced by a SteppingRule
//! Enigma | M209 | Sigaba (orchestrators, CipherMachine)
//!     ↑
//! MachineSettings        (serde key lists)
//! ```
//!
//! # Examples
//!
//! The M-209 with no pins set is a plain Atbash:
//!
//! ```
//! use rotorcrypt::{M209, M209Settings};
//!
//! let m209 = M209::new(&M209Settings::default()).unwrap();
//! assert_eq!(m209.process("HELLOWORLD").unwrap(), "SVOOLDLIOW");
//! ```
//!
//! Enigma is its own inverse:
//!
//! ```
//! use rotorcrypt::{Enigma, EnigmaSettings};
//!
//! let enigma = Enigma::new(&EnigmaSettings::default()).unwrap();
//! let ciphertext = enigma.encode("ATTACKATDAWN").unwrap();
//! assert_eq!(enigma.encode(&ciphertext).unwrap(), "ATTACKATDAWN");
//! ```
//!
//! Any machine can be built from a JSON key sheet:
//!
//! ```
//! use rotorcrypt::MachineSettings;
//!
//! let sigaba = MachineSettings::from_json(r#"{ "machine": "sigaba", "indicator": "ROTOR" }"#)
//!     .unwrap()
//!     .build()
//!     .unwrap();
//! let ciphertext = sigaba.encode("HELLOWORLD").unwrap();
//! assert_eq!(sigaba.decode(&ciphertext).unwrap(), "HELLOWORLD");
//! ```

#![deny(clippy::all)]

pub mod config;
pub mod enigma;
pub mod error;
pub mod m209;
pub mod machine;
pub mod plugboard;
pub(crate) mod reflector;
pub mod rotor;
pub(crate) mod rotor_bank;
pub mod sigaba;
pub(crate) mod stepping;
pub mod utils;
pub(crate) mod wiring;

pub use config::{EnigmaSettings, M209Settings, MachineSettings, SigabaSettings};
pub use enigma::Enigma;
pub use error::{Result, RotorCryptError};
pub use m209::M209;
pub use machine::{CipherMachine, Direction};
pub use sigaba::Sigaba;
