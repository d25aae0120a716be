//! Known-answer vector types.
//!
//! The JSON files next to this module were produced with OpenSSL's command
//! line tools against the PEM fixtures in `keys/`.

// Some fields exist only to describe the vector
#![allow(dead_code)]

use std::path::PathBuf;

use serde::de::DeserializeOwned;
use serde::Deserialize;

/// An AES vector suite (top-level JSON structure of `aes.json`).
#[derive(Debug, Deserialize)]
pub struct AesSuite {
    pub name: String,
    pub tests: Vec<AesTestVector>,
}

/// One AES-CBC encryption.
#[derive(Debug, Deserialize)]
pub struct AesTestVector {
    pub name: String,
    /// Hex-encoded key
    pub key: String,
    /// Hex-encoded IV (null when derived from the key)
    pub iv: Option<String>,
    /// Hex-encoded plaintext
    pub plaintext: String,
    /// Encoding name of `ciphertext`
    pub encoding: String,
    /// Provider-level padding: `pkcs7` or `none`
    #[serde(rename = "cbc-padding")]
    pub cbc_padding: String,
    /// Expected output in `encoding`
    pub ciphertext: String,
}

/// The RSA vector suite (top-level JSON structure of `rsa.json`).
///
/// Every vector uses the `alice` key pair.
#[derive(Debug, Deserialize)]
pub struct RsaSuite {
    pub name: String,
    pub signatures: Vec<SignatureTestVector>,
    #[serde(rename = "private-encrypt")]
    pub private_encrypt: Vec<RsaCipherTestVector>,
    #[serde(rename = "public-encrypt")]
    pub public_encrypt: Vec<RsaCipherTestVector>,
}

/// A PKCS#1 v1.5 signature.
#[derive(Debug, Deserialize)]
pub struct SignatureTestVector {
    pub name: String,
    /// Digest name
    pub algorithm: String,
    /// Hex-encoded message
    pub message: String,
    /// Base64-encoded signature
    pub signature: String,
}

/// A ciphertext produced outside this crate.
#[derive(Debug, Deserialize)]
pub struct RsaCipherTestVector {
    pub name: String,
    /// Padding name
    pub padding: String,
    /// Hex-encoded plaintext
    pub plaintext: String,
    /// Base64-encoded ciphertext
    pub ciphertext: String,
}

/// Directory holding the vector files.
pub fn vectors_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/vectors")
}

/// Path of a PEM fixture, as the string the cipher API expects.
pub fn key_path(name: &str) -> String {
    vectors_dir()
        .join("keys")
        .join(name)
        .to_str()
        .expect("fixture path is UTF-8")
        .to_owned()
}

/// Load and parse a vector file.
pub fn load_vectors<T: DeserializeOwned>(file: &str) -> T {
    let path = vectors_dir().join(file);
    let content = std::fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("Failed to read {}: {e}", path.display()));
    serde_json::from_str(&content)
        .unwrap_or_else(|e| panic!("Failed to parse {}: {e}", path.display()))
}

/// Decode a hex string into bytes.
pub fn hex_decode(s: &str) -> Vec<u8> {
    hex::decode(s).expect("vector hex is valid")
}
