//! Text-safe rendering of opaque ciphertext and signature bytes.
//!
//! Three schemes are supported:
//!
//! | Scheme   | Encode                        | Decode                          |
//! |----------|-------------------------------|---------------------------------|
//! | `none`   | identity                      | identity                        |
//! | `hex`    | lowercase, two digits a byte  | hex digits only, any case       |
//! | `base64` | standard alphabet, padded     | standard alphabet, padded       |

use core::fmt::{self, Display};
use core::str::FromStr;

use base64::prelude::*;

use crate::core::error::{CipherError, CipherResult};

/// Encoding applied to ciphertext and signatures at the API boundary.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Encoding {
    /// Raw bytes, passed through unchanged.
    None,
    /// Lowercase hexadecimal.
    Hex,
    /// Standard base64 with padding.
    #[default]
    Base64,
}

impl Encoding {
    /// Resolves an optional encoding name.
    ///
    /// An absent name means raw pass-through; anything else is parsed with
    /// [`FromStr`].
    ///
    /// # Errors
    ///
    /// Returns `CipherError::UnsupportedEncoding` for unknown names.
    pub fn from_name(name: Option<&str>) -> CipherResult<Self> {
        name.map_or(Ok(Self::None), str::parse)
    }

    /// Returns the canonical lowercase name of the scheme.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Hex => "hex",
            Self::Base64 => "base64",
        }
    }

    /// Encodes raw bytes into their textual form.
    #[must_use]
    pub fn encode(&self, bytes: &[u8]) -> Vec<u8> {
        match self {
            Self::None => bytes.to_vec(),
            Self::Hex => hex::encode(bytes).into_bytes(),
            Self::Base64 => BASE64_STANDARD.encode(bytes).into_bytes(),
        }
    }

    /// Decodes text back into raw bytes.
    ///
    /// # Errors
    ///
    /// Returns `CipherError::MalformedEncodedInput` if hex text contains
    /// non-hex characters or an odd number of digits, or if base64 text is
    /// not validly padded.
    pub fn decode(&self, text: &[u8]) -> CipherResult<Vec<u8>> {
        match self {
            Self::None => Ok(text.to_vec()),
            Self::Hex => {
                if !text.iter().all(u8::is_ascii_hexdigit) {
                    return Err(CipherError::MalformedEncodedInput);
                }
                hex::decode(text).map_err(|_| CipherError::MalformedEncodedInput)
            }
            Self::Base64 => BASE64_STANDARD
                .decode(text)
                .map_err(|_| CipherError::MalformedEncodedInput),
        }
    }
}

impl FromStr for Encoding {
    type Err = CipherError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "none" | "raw" => Ok(Self::None),
            "hex" => Ok(Self::Hex),
            "base64" => Ok(Self::Base64),
            _ => Err(CipherError::UnsupportedEncoding(s.to_string())),
        }
    }
}

impl Display for Encoding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
