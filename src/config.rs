//! Key settings for every machine, loadable from JSON.
//!
//! Settings are plain data. Nothing is validated during deserialization: the
//! machine constructors check every field and report the first problem as a
//! [`RotorCryptError`](crate::error::RotorCryptError).
//!
//! ```
//! use rotorcrypt::MachineSettings;
//!
//! let settings = MachineSettings::from_json(
//!     r#"{ "machine": "m209", "wheel_key": "ABCDEF" }"#,
//! ).unwrap();
//! let machine = settings.build().unwrap();
//! assert_eq!(machine.encode("HELLOWORLD").unwrap(), "SVOOLDLIOW");
//! ```

use serde::{Deserialize, Serialize};

use crate::enigma::Enigma;
use crate::error::Result;
use crate::m209::M209;
use crate::machine::CipherMachine;
use crate::sigaba::Sigaba;

fn strings<const N: usize>(values: [&str; N]) -> Vec<String> {
    values.iter().map(|v| v.to_string()).collect()
}

/// Enigma key list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct EnigmaSettings {
    /// Three rotor names (`I`-`V`), left to right.
    pub rotors: Vec<String>,

    /// Reflector name (`A`, `B` or `C`).
    pub reflector: String,

    /// Start letter of each rotor, left to right.
    pub positions: String,

    /// Two equal-length strings of cable ends: letter `i` of the first is
    /// cabled to letter `i` of the second. Two empty strings mean no cables.
    pub plugs: Vec<String>,

    /// Ring setting (Ringstellung) of each rotor, left to right.
    pub rings: String,
}

impl Default for EnigmaSettings {
    fn default() -> Self {
        EnigmaSettings {
            rotors: strings(["I", "II", "III"]),
            reflector: "A".to_string(),
            positions: "ABC".to_string(),
            plugs: strings(["ABCEDFGHIJ", "KLMNOPQRST"]),
            rings: "ABC".to_string(),
        }
    }
}

/// M-209 key list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct M209Settings {
    /// Letter showing in the window of each of the six wheels.
    pub wheel_key: String,

    /// Either empty (every pin inactive) or six non-empty rows of `+` (active)
    /// and `-`. A row is read modulo its own length.
    pub pins: Vec<String>,

    /// Up to 27 lug bars, each naming two registers `0..=6`. `0` means the
    /// lug is not set; `1..=6` select a wheel.
    pub lugs: Vec<[u8; 2]>,
}

impl Default for M209Settings {
    fn default() -> Self {
        M209Settings {
            wheel_key: "ABCDEF".to_string(),
            pins: Vec::new(),
            lugs: Vec::new(),
        }
    }
}

/// SIGABA key list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SigabaSettings {
    /// Five cipher rotor names (`I`-`X`).
    pub cipher_rotors: Vec<String>,

    /// Five control rotor names (`I`-`X`). May reuse cipher rotor names.
    pub control_rotors: Vec<String>,

    /// Five index rotor names (`I`-`V`).
    pub index_rotors: Vec<String>,

    /// Five letters: start positions of the cipher rotors.
    pub indicator: String,

    /// Five letters: start positions of the control rotors.
    pub control_positions: String,

    /// Five digits: fixed positions of the index rotors.
    pub index_positions: String,
}

impl Default for SigabaSettings {
    fn default() -> Self {
        SigabaSettings {
            cipher_rotors: strings(["V", "IX", "II", "IV", "III"]),
            control_rotors: strings(["IX", "VI", "I", "VII", "VIII"]),
            index_rotors: strings(["II", "I", "V", "IV", "III"]),
            indicator: "TABLE".to_string(),
            control_positions: "GRAPH".to_string(),
            index_positions: "02367".to_string(),
        }
    }
}

/// Settings for any machine, tagged by a `"machine"` field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "machine", rename_all = "lowercase")]
pub enum MachineSettings {
    Enigma(EnigmaSettings),
    M209(M209Settings),
    Sigaba(SigabaSettings),
}

impl MachineSettings {
    /// Parses a settings document.
    ///
    /// # Errors
    /// Returns [`RotorCryptError::Settings`](crate::error::RotorCryptError::Settings)
    /// if the document is not valid JSON or has unknown fields.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Serializes the settings to pretty-printed JSON.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Validates the settings and builds the machine.
    pub fn build(&self) -> Result<Box<dyn CipherMachine>> {
        Ok(match self {
            MachineSettings::Enigma(settings) => Box::new(Enigma::new(settings)?),
            MachineSettings::M209(settings) => Box::new(M209::new(settings)?),
            MachineSettings::Sigaba(settings) => Box::new(Sigaba::new(settings)?),
        })
    }
}
