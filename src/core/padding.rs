//! Block padding applied around the block-cipher boundary.
//!
//! Only PKCS#7 over a 16-byte block is supported. Padding is always added,
//! so an already aligned input gains a whole block.

use core::fmt::{self, Display};
use core::str::FromStr;

use subtle::{Choice, ConstantTimeEq, ConstantTimeLess};

use crate::core::error::{CipherError, CipherResult};

/// Block size in bytes.
pub const BLOCK_SIZE: usize = 16;

/// Block padding scheme.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BlockPadding {
    /// PKCS#7: `n` bytes of value `n`, `1 <= n <= BLOCK_SIZE`.
    #[default]
    Pkcs7,
}

impl BlockPadding {
    /// Returns the canonical lowercase name of the scheme.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Pkcs7 => "pkcs7",
        }
    }

    /// Pads `data` up to the next block boundary.
    #[must_use]
    pub fn pad(&self, data: &[u8]) -> Vec<u8> {
        match self {
            Self::Pkcs7 => pkcs7_pad(data),
        }
    }

    /// Strips padding previously added by [`BlockPadding::pad`].
    ///
    /// # Errors
    ///
    /// Returns `CipherError::PaddingValidationFailed` if the trailing run is
    /// inconsistent.
    pub fn unpad(&self, data: &[u8]) -> CipherResult<Vec<u8>> {
        match self {
            Self::Pkcs7 => pkcs7_unpad(data),
        }
    }
}

impl FromStr for BlockPadding {
    type Err = CipherError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "pkcs7" => Ok(Self::Pkcs7),
            _ => Err(CipherError::UnsupportedPadding(s.to_string())),
        }
    }
}

impl TryFrom<&str> for BlockPadding {
    type Error = CipherError;

    fn try_from(name: &str) -> Result<Self, Self::Error> {
        name.parse()
    }
}

impl Display for BlockPadding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

fn pkcs7_pad(data: &[u8]) -> Vec<u8> {
    let n = BLOCK_SIZE - data.len() % BLOCK_SIZE;
    let mut padded = Vec::with_capacity(data.len() + n);
    padded.extend_from_slice(data);
    #[allow(clippy::cast_possible_truncation)]
    padded.resize(data.len() + n, n as u8);
    padded
}

/// Accepts iff the last `n` bytes all equal `n`, where `n` is the final
/// byte, `n != 0` and `n <= data.len()`. The scan always covers the same
/// trailing window so its timing does not depend on `n`.
fn pkcs7_unpad(data: &[u8]) -> CipherResult<Vec<u8>> {
    let Some(&n) = data.last() else {
        return Err(CipherError::PaddingValidationFailed);
    };

    let mut valid = !n.ct_eq(&0);
    valid &= !(data.len() as u64).ct_lt(&u64::from(n));

    for (i, &byte) in data.iter().rev().take(usize::from(u8::MAX)).enumerate() {
        #[allow(clippy::cast_possible_truncation)]
        let in_run: Choice = (i as u8).ct_lt(&n);
        valid &= !in_run | byte.ct_eq(&n);
    }

    if bool::from(valid) {
        Ok(data[..data.len() - usize::from(n)].to_vec())
    } else {
        Err(CipherError::PaddingValidationFailed)
    }
}
