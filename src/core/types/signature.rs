//! Digest algorithms for PKCS#1 v1.5 signatures.

use core::fmt::{self, Display};
use core::str::FromStr;

use crate::core::error::CipherError;

/// Digest used when signing and verifying.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SignatureAlgorithm {
    /// `sha1WithRSAEncryption`.
    Sha1,
    /// `sha224WithRSAEncryption`.
    Sha224,
    /// `sha256WithRSAEncryption`.
    #[default]
    Sha256,
    /// `sha384WithRSAEncryption`.
    Sha384,
    /// `sha512WithRSAEncryption`.
    Sha512,
}

impl SignatureAlgorithm {
    /// Returns the digest name, e.g. `sha256`.
    #[must_use]
    pub const fn digest_name(&self) -> &'static str {
        match self {
            Self::Sha1 => "sha1",
            Self::Sha224 => "sha224",
            Self::Sha256 => "sha256",
            Self::Sha384 => "sha384",
            Self::Sha512 => "sha512",
        }
    }

    /// Returns the numeric algorithm constant.
    #[must_use]
    pub const fn code(&self) -> i32 {
        match self {
            Self::Sha1 => 1,
            Self::Sha224 => 6,
            Self::Sha256 => 7,
            Self::Sha384 => 8,
            Self::Sha512 => 9,
        }
    }
}

impl TryFrom<i32> for SignatureAlgorithm {
    type Error = CipherError;

    fn try_from(code: i32) -> Result<Self, Self::Error> {
        match code {
            1 => Ok(Self::Sha1),
            6 => Ok(Self::Sha224),
            7 => Ok(Self::Sha256),
            8 => Ok(Self::Sha384),
            9 => Ok(Self::Sha512),
            other => Err(CipherError::UnsupportedAlgorithm(other.to_string())),
        }
    }
}

impl FromStr for SignatureAlgorithm {
    type Err = CipherError;

    /// Accepts `sha256`, `SHA256`, `sha256WithRSAEncryption`,
    /// `SHA256withRSA` and `RSA-SHA256` spellings.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.to_ascii_lowercase();
        let digest = lower
            .strip_prefix("rsa-")
            .or_else(|| lower.strip_suffix("withrsaencryption"))
            .or_else(|| lower.strip_suffix("withrsa"))
            .unwrap_or(lower.as_str());

        match digest.replace('-', "").as_str() {
            "sha1" => Ok(Self::Sha1),
            "sha224" => Ok(Self::Sha224),
            "sha256" => Ok(Self::Sha256),
            "sha384" => Ok(Self::Sha384),
            "sha512" => Ok(Self::Sha512),
            _ => Err(CipherError::UnsupportedAlgorithm(s.to_string())),
        }
    }
}

impl TryFrom<&str> for SignatureAlgorithm {
    type Error = CipherError;

    fn try_from(name: &str) -> Result<Self, Self::Error> {
        name.parse()
    }
}

impl Display for SignatureAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}WithRSAEncryption", self.digest_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_sha256() {
        assert_eq!(SignatureAlgorithm::default(), SignatureAlgorithm::Sha256);
    }

    #[test]
    fn test_from_str_spellings() -> Result<(), CipherError> {
        for name in ["sha256", "SHA256", "sha256WithRSAEncryption", "SHA256withRSA", "RSA-SHA256", "sha-256"] {
            assert_eq!(name.parse::<SignatureAlgorithm>()?, SignatureAlgorithm::Sha256, "{name}");
        }
        assert_eq!("sha1".parse::<SignatureAlgorithm>()?, SignatureAlgorithm::Sha1);
        assert_eq!("SHA512".parse::<SignatureAlgorithm>()?, SignatureAlgorithm::Sha512);
        Ok(())
    }

    #[test]
    fn test_from_str_unknown() {
        let result = "md5".parse::<SignatureAlgorithm>();
        assert!(matches!(result, Err(CipherError::UnsupportedAlgorithm(name)) if name == "md5"));
    }

    #[test]
    fn test_codes() -> Result<(), CipherError> {
        for alg in [
            SignatureAlgorithm::Sha1,
            SignatureAlgorithm::Sha224,
            SignatureAlgorithm::Sha256,
            SignatureAlgorithm::Sha384,
            SignatureAlgorithm::Sha512,
        ] {
            assert_eq!(SignatureAlgorithm::try_from(alg.code())?, alg);
        }
        // MD5 is not offered.
        assert!(matches!(
            SignatureAlgorithm::try_from(2),
            Err(CipherError::UnsupportedAlgorithm(_))
        ));
        Ok(())
    }

    #[test]
    fn test_display() {
        assert_eq!(SignatureAlgorithm::Sha384.to_string(), "sha384WithRSAEncryption");
    }
}
