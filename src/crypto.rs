//! Core encryption and decryption primitives.

use aes_gcm::Aes256Gcm;
use aes_gcm::Nonce;
use aes_gcm::aead::{Aead, KeyInit};
use getrandom::fill as getrandom;
use tracing::{debug, error};

use crate::format::{encode_artifact, parse_artifact};
use crate::kdf::derive_key;
use crate::types::{EncryptionError, KEY_LEN, NONCE_LEN, Password, SALT_LEN};

/// Generate a cryptographically secure random nonce.
pub fn generate_nonce() -> Result<[u8; NONCE_LEN], EncryptionError> {
    let mut nonce = [0u8; NONCE_LEN];
    getrandom(&mut nonce).map_err(|_| EncryptionError::Crypto)?;
    Ok(nonce)
}

/// Generate a cryptographically secure random salt.
pub fn generate_salt() -> Result<[u8; SALT_LEN], EncryptionError> {
    let mut salt = [0u8; SALT_LEN];
    getrandom(&mut salt).map_err(|_| EncryptionError::Crypto)?;
    Ok(salt)
}

/// Encrypt plaintext with AES-256-GCM and empty associated data.
///
/// # Arguments
///
/// * `key` - 32-byte encryption key
/// * `nonce` - 12-byte nonce, never reused with the same key
/// * `plaintext` - Data to encrypt (may be empty)
///
/// # Returns
///
/// Ciphertext of `plaintext.len() + TAG_LEN` bytes, tag appended.
pub fn aead_encrypt(
    key: &[u8; KEY_LEN],
    nonce: &[u8; NONCE_LEN],
    plaintext: &[u8],
) -> Result<Vec<u8>, EncryptionError> {
    let cipher = Aes256Gcm::new_from_slice(key).map_err(|_| EncryptionError::Crypto)?;
    cipher
        .encrypt(Nonce::from_slice(nonce), plaintext)
        .map_err(|_| EncryptionError::Crypto)
}

/// Decrypt and authenticate AES-256-GCM ciphertext.
///
/// The tag is verified before any plaintext is released.
///
/// # Errors
///
/// Returns `EncryptionError::AuthenticationFailed` on a wrong key, wrong nonce,
/// or any modification of the ciphertext or tag.
pub fn aead_decrypt(
    key: &[u8; KEY_LEN],
    nonce: &[u8; NONCE_LEN],
    ciphertext: &[u8],
) -> Result<Vec<u8>, EncryptionError> {
    let cipher = Aes256Gcm::new_from_slice(key).map_err(|_| EncryptionError::Crypto)?;
    cipher
        .decrypt(Nonce::from_slice(nonce), ciphertext)
        .map_err(|_| EncryptionError::AuthenticationFailed)
}

/// Encrypt a byte slice into a self-contained `salt ‖ nonce ‖ ciphertext` artifact.
///
/// A fresh salt and nonce are drawn for every call, so encrypting the same
/// plaintext twice yields different artifacts.
pub fn try_encrypt_data(plaintext: &[u8], password: &Password) -> Result<Vec<u8>, EncryptionError> {
    let salt = generate_salt()?;
    let nonce = generate_nonce()?;
    let key = derive_key(password, &salt);

    let ciphertext = aead_encrypt(&key, &nonce, plaintext)?;
    debug!(
        plaintext_len = plaintext.len(),
        ciphertext_len = ciphertext.len(),
        "encrypted buffer"
    );
    Ok(encode_artifact(&salt, &nonce, &ciphertext))
}

/// Decrypt an artifact produced by [`try_encrypt_data`] (or the file variant).
///
/// # Errors
///
/// - `EncryptionError::MalformedArtifact` if `artifact` is shorter than 28
///   bytes; no key derivation is attempted in that case.
/// - `EncryptionError::AuthenticationFailed` for a wrong password or
///   corrupted data. The two causes are indistinguishable.
pub fn try_decrypt_data(artifact: &[u8], password: &Password) -> Result<Vec<u8>, EncryptionError> {
    let parsed = parse_artifact(artifact)?;
    let key = derive_key(password, &parsed.salt);
    let plaintext = aead_decrypt(&key, &parsed.nonce, parsed.ciphertext)?;
    debug!(
        ciphertext_len = parsed.ciphertext.len(),
        plaintext_len = plaintext.len(),
        "decrypted buffer"
    );
    Ok(plaintext)
}

/// Encrypt data in memory; `None` on failure (logged, never propagated).
pub fn encrypt_data(plaintext: &[u8], password: &Password) -> Option<Vec<u8>> {
    try_encrypt_data(plaintext, password)
        .inspect_err(|e| error!("Data encryption failed: {e}"))
        .ok()
}

/// Decrypt data in memory; `None` on failure (logged, never propagated).
///
/// A too-short buffer, a wrong password and corrupted data all yield `None`.
pub fn decrypt_data(artifact: &[u8], password: &Password) -> Option<Vec<u8>> {
    try_decrypt_data(artifact, password)
        .inspect_err(|e| error!("Data decryption failed: {e}"))
        .ok()
}
