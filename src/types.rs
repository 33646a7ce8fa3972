//! Core types, constants and the error enum for secure_encryption.

use std::fmt;
use std::path::PathBuf;

use secrecy::{ExposeSecret, SecretBox, SecretString};
use thiserror::Error;

/// Derived key length (AES-256).
pub const KEY_LEN: usize = 32;

/// Per-artifact KDF salt length.
pub const SALT_LEN: usize = 16;

/// AES-GCM nonce length (96 bits).
pub const NONCE_LEN: usize = 12;

/// AES-GCM authentication tag length, appended to every ciphertext.
pub const TAG_LEN: usize = 16;

/// Size of the positional header `salt ‖ nonce` preceding the ciphertext.
pub const HEADER_LEN: usize = SALT_LEN + NONCE_LEN;

/// PBKDF2-HMAC-SHA256 work factor. Part of the artifact format: artifacts carry
/// no version byte, so changing this makes older artifacts undecryptable.
pub const PBKDF2_ITERATIONS: u32 = 100_000;

/// A password supplied either as text or as raw bytes.
///
/// Text is encoded as UTF-8 without any Unicode normalization, so two
/// visually identical strings with different code points derive different keys.
/// Both variants are zeroized on drop.
pub enum Password {
    Text(SecretString),
    Raw(SecretBox<[u8]>),
}

impl Password {
    /// The byte string fed into key derivation.
    pub(crate) fn expose_bytes(&self) -> &[u8] {
        match self {
            Password::Text(s) => s.expose_secret().as_bytes(),
            Password::Raw(b) => b.expose_secret(),
        }
    }
}

impl fmt::Debug for Password {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Password::Text(_) => f.write_str("Password::Text([REDACTED])"),
            Password::Raw(_) => f.write_str("Password::Raw([REDACTED])"),
        }
    }
}

impl From<SecretString> for Password {
    fn from(s: SecretString) -> Self {
        Password::Text(s)
    }
}

impl From<String> for Password {
    fn from(s: String) -> Self {
        Password::Text(SecretString::new(s.into_boxed_str()))
    }
}

impl From<&str> for Password {
    fn from(s: &str) -> Self {
        Password::from(s.to_owned())
    }
}

impl From<Vec<u8>> for Password {
    fn from(v: Vec<u8>) -> Self {
        Password::Raw(SecretBox::new(v.into_boxed_slice()))
    }
}

impl From<&[u8]> for Password {
    fn from(b: &[u8]) -> Self {
        Password::from(b.to_vec())
    }
}

/// Library error type (no panics for expected failures).
///
/// The boolean / `Option` entry points collapse all of these into a single
/// failure signal; the `try_*` variants return them unchanged.
#[derive(Error, Debug)]
pub enum EncryptionError {
    #[error("input not found: {}", .0.display())]
    NotFound(PathBuf),
    #[error("malformed artifact: {len} bytes is shorter than the 28-byte header")]
    MalformedArtifact { len: usize },
    #[error("authentication failed (wrong password or corrupted data)")]
    AuthenticationFailed,
    #[error("I/O error")]
    Io(#[from] std::io::Error),
    #[error("cryptographic backend failure")]
    Crypto,
}
