//! On-disk / in-memory artifact layout.
//!
//! ```text
//! offset 0..16   : salt
//! offset 16..28  : nonce
//! offset 28..end : AES-256-GCM ciphertext with 16-byte tag
//! ```
//!
//! The layout is positional: no magic, no version byte, no length prefix.
//! Changing the tag length or adding a version field is a breaking change.

use crate::types::{EncryptionError, HEADER_LEN, NONCE_LEN, SALT_LEN, TAG_LEN};

/// A borrowed view of an encrypted artifact split into its three regions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Artifact<'a> {
    pub salt: [u8; SALT_LEN],
    pub nonce: [u8; NONCE_LEN],
    /// Ciphertext including the trailing authentication tag.
    pub ciphertext: &'a [u8],
}

impl Artifact<'_> {
    /// Plaintext length implied by the ciphertext, or `None` if the ciphertext
    /// is too short to even hold a tag (such an artifact can never authenticate).
    pub fn plaintext_len(&self) -> Option<usize> {
        self.ciphertext.len().checked_sub(TAG_LEN)
    }
}

/// Split an artifact into salt, nonce and ciphertext.
///
/// # Errors
///
/// Returns `EncryptionError::MalformedArtifact` if `data` is shorter than the
/// 28-byte header. A header-only artifact parses; it will fail authentication.
pub fn parse_artifact(data: &[u8]) -> Result<Artifact<'_>, EncryptionError> {
    if data.len() < HEADER_LEN {
        return Err(EncryptionError::MalformedArtifact { len: data.len() });
    }
    let (salt, rest) = data.split_at(SALT_LEN);
    let (nonce, ciphertext) = rest.split_at(NONCE_LEN);

    let mut artifact = Artifact {
        salt: [0u8; SALT_LEN],
        nonce: [0u8; NONCE_LEN],
        ciphertext,
    };
    artifact.salt.copy_from_slice(salt);
    artifact.nonce.copy_from_slice(nonce);
    Ok(artifact)
}

/// Concatenate `salt ‖ nonce ‖ ciphertext` into a single buffer.
pub fn encode_artifact(
    salt: &[u8; SALT_LEN],
    nonce: &[u8; NONCE_LEN],
    ciphertext: &[u8],
) -> Vec<u8> {
    let mut out = Vec::with_capacity(HEADER_LEN + ciphertext.len());
    out.extend_from_slice(salt);
    out.extend_from_slice(nonce);
    out.extend_from_slice(ciphertext);
    out
}
