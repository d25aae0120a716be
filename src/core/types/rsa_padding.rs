//! RSA padding modes, split by operation direction.
//!
//! Public-key encryption (and its private-key decryption) accepts four
//! modes; private-key encryption (and its public-key decryption) accepts
//! only two. Each direction has its own enum so an illegal pairing cannot
//! be expressed once converted. [`RsaPadding`] is the untyped union used
//! when the mode comes from a name or a numeric constant.

use core::fmt::{self, Display};
use core::str::FromStr;

use crate::core::error::CipherError;

/// Numeric constant for PKCS#1 v1.5 padding.
pub const PKCS1_PADDING: i32 = 1;
/// Numeric constant for SSLv23 padding.
pub const SSLV23_PADDING: i32 = 2;
/// Numeric constant for raw RSA without padding.
pub const NO_PADDING: i32 = 3;
/// Numeric constant for OAEP padding.
pub const PKCS1_OAEP_PADDING: i32 = 4;

/// Any RSA padding mode, not yet checked against a direction.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RsaPadding {
    /// PKCS#1 v1.5.
    #[default]
    Pkcs1,
    /// PKCS#1 v1.5 type 2 carrying the SSLv3 rollback marker.
    Sslv23,
    /// OAEP with SHA-1 and MGF1-SHA-1.
    Oaep,
    /// Raw RSA; input must be exactly modulus-sized.
    None,
}

impl RsaPadding {
    /// Returns the canonical lowercase name of the mode.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Pkcs1 => "pkcs1",
            Self::Sslv23 => "sslv23",
            Self::Oaep => "oaep",
            Self::None => "none",
        }
    }

    /// Returns the numeric constant for the mode.
    #[must_use]
    pub const fn code(&self) -> i32 {
        match self {
            Self::Pkcs1 => PKCS1_PADDING,
            Self::Sslv23 => SSLV23_PADDING,
            Self::Oaep => PKCS1_OAEP_PADDING,
            Self::None => NO_PADDING,
        }
    }
}

impl TryFrom<i32> for RsaPadding {
    type Error = CipherError;

    fn try_from(code: i32) -> Result<Self, Self::Error> {
        match code {
            PKCS1_PADDING => Ok(Self::Pkcs1),
            SSLV23_PADDING => Ok(Self::Sslv23),
            NO_PADDING => Ok(Self::None),
            PKCS1_OAEP_PADDING => Ok(Self::Oaep),
            other => Err(CipherError::UnsupportedPadding(other.to_string())),
        }
    }
}

impl FromStr for RsaPadding {
    type Err = CipherError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "pkcs1" => Ok(Self::Pkcs1),
            "sslv23" => Ok(Self::Sslv23),
            "oaep" | "pkcs1_oaep" => Ok(Self::Oaep),
            "none" | "no_padding" => Ok(Self::None),
            _ => Err(CipherError::UnsupportedPadding(s.to_string())),
        }
    }
}

impl TryFrom<&str> for RsaPadding {
    type Error = CipherError;

    fn try_from(name: &str) -> Result<Self, Self::Error> {
        name.parse()
    }
}

impl Display for RsaPadding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Padding legal for public-key encryption and private-key decryption.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EncryptionPadding {
    /// PKCS#1 v1.5 type 2.
    #[default]
    Pkcs1,
    /// PKCS#1 v1.5 type 2 with the SSLv3 rollback marker.
    Sslv23,
    /// OAEP with SHA-1 and MGF1-SHA-1.
    Oaep,
    /// Raw RSA.
    None,
}

impl From<EncryptionPadding> for RsaPadding {
    fn from(padding: EncryptionPadding) -> Self {
        match padding {
            EncryptionPadding::Pkcs1 => Self::Pkcs1,
            EncryptionPadding::Sslv23 => Self::Sslv23,
            EncryptionPadding::Oaep => Self::Oaep,
            EncryptionPadding::None => Self::None,
        }
    }
}

impl TryFrom<RsaPadding> for EncryptionPadding {
    type Error = CipherError;

    fn try_from(padding: RsaPadding) -> Result<Self, Self::Error> {
        Ok(match padding {
            RsaPadding::Pkcs1 => Self::Pkcs1,
            RsaPadding::Sslv23 => Self::Sslv23,
            RsaPadding::Oaep => Self::Oaep,
            RsaPadding::None => Self::None,
        })
    }
}

impl TryFrom<i32> for EncryptionPadding {
    type Error = CipherError;

    fn try_from(code: i32) -> Result<Self, Self::Error> {
        RsaPadding::try_from(code).and_then(Self::try_from)
    }
}

impl TryFrom<&str> for EncryptionPadding {
    type Error = CipherError;

    fn try_from(name: &str) -> Result<Self, Self::Error> {
        RsaPadding::try_from(name).and_then(Self::try_from)
    }
}

impl Display for EncryptionPadding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Display::fmt(&RsaPadding::from(*self), f)
    }
}

/// Padding legal for private-key encryption and public-key decryption.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SignaturePadding {
    /// PKCS#1 v1.5 type 1.
    #[default]
    Pkcs1,
    /// Raw RSA.
    None,
}

impl From<SignaturePadding> for RsaPadding {
    fn from(padding: SignaturePadding) -> Self {
        match padding {
            SignaturePadding::Pkcs1 => Self::Pkcs1,
            SignaturePadding::None => Self::None,
        }
    }
}

impl TryFrom<RsaPadding> for SignaturePadding {
    type Error = CipherError;

    fn try_from(padding: RsaPadding) -> Result<Self, Self::Error> {
        match padding {
            RsaPadding::Pkcs1 => Ok(Self::Pkcs1),
            RsaPadding::None => Ok(Self::None),
            other @ (RsaPadding::Sslv23 | RsaPadding::Oaep) => {
                Err(CipherError::UnsupportedPadding(other.to_string()))
            }
        }
    }
}

impl TryFrom<i32> for SignaturePadding {
    type Error = CipherError;

    fn try_from(code: i32) -> Result<Self, Self::Error> {
        RsaPadding::try_from(code).and_then(Self::try_from)
    }
}

impl TryFrom<&str> for SignaturePadding {
    type Error = CipherError;

    fn try_from(name: &str) -> Result<Self, Self::Error> {
        RsaPadding::try_from(name).and_then(Self::try_from)
    }
}

impl Display for SignaturePadding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Display::fmt(&RsaPadding::from(*self), f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codes_roundtrip() -> Result<(), CipherError> {
        for padding in [RsaPadding::Pkcs1, RsaPadding::Sslv23, RsaPadding::Oaep, RsaPadding::None] {
            assert_eq!(RsaPadding::try_from(padding.code())?, padding);
        }
        Ok(())
    }

    #[test]
    fn test_unknown_code() {
        let result = RsaPadding::try_from(5);
        assert!(matches!(result, Err(CipherError::UnsupportedPadding(code)) if code == "5"));
    }

    #[test]
    fn test_encryption_direction_accepts_all() -> Result<(), CipherError> {
        assert_eq!(EncryptionPadding::try_from(RsaPadding::Oaep)?, EncryptionPadding::Oaep);
        assert_eq!(EncryptionPadding::try_from(SSLV23_PADDING)?, EncryptionPadding::Sslv23);
        assert_eq!(EncryptionPadding::try_from(NO_PADDING)?, EncryptionPadding::None);
        Ok(())
    }

    #[test]
    fn test_signature_direction_rejects_oaep_and_sslv23() {
        let result = SignaturePadding::try_from(RsaPadding::Oaep);
        assert!(matches!(result, Err(CipherError::UnsupportedPadding(name)) if name == "oaep"));

        let result = SignaturePadding::try_from(SSLV23_PADDING);
        assert!(matches!(result, Err(CipherError::UnsupportedPadding(_))));
    }

    #[test]
    fn test_signature_direction_accepts_pkcs1_and_none() -> Result<(), CipherError> {
        assert_eq!(SignaturePadding::try_from(PKCS1_PADDING)?, SignaturePadding::Pkcs1);
        assert_eq!(SignaturePadding::try_from(RsaPadding::None)?, SignaturePadding::None);
        Ok(())
    }

    #[test]
    fn test_from_str() -> Result<(), CipherError> {
        assert_eq!("PKCS1".parse::<RsaPadding>()?, RsaPadding::Pkcs1);
        assert_eq!("oaep".parse::<RsaPadding>()?, RsaPadding::Oaep);
        assert_eq!("SSLv23".parse::<RsaPadding>()?, RsaPadding::Sslv23);
        assert_eq!("no_padding".parse::<RsaPadding>()?, RsaPadding::None);
        assert!("pss".parse::<RsaPadding>().is_err());
        Ok(())
    }

    #[test]
    fn test_try_from_name_checks_direction() -> Result<(), CipherError> {
        assert_eq!(EncryptionPadding::try_from("OAEP")?, EncryptionPadding::Oaep);
        assert_eq!(SignaturePadding::try_from("none")?, SignaturePadding::None);
        assert!(matches!(
            SignaturePadding::try_from("oaep"),
            Err(CipherError::UnsupportedPadding(_))
        ));
        assert!(matches!(
            EncryptionPadding::try_from("pss"),
            Err(CipherError::UnsupportedPadding(name)) if name == "pss"
        ));
        Ok(())
    }

    #[test]
    fn test_display() {
        assert_eq!(EncryptionPadding::Oaep.to_string(), "oaep");
        assert_eq!(SignaturePadding::default().to_string(), "pkcs1");
    }
}
