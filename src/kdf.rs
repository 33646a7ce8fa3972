//! Password-based key derivation.
//!
//! Keys are derived with PBKDF2-HMAC-SHA256 at a fixed work factor of
//! [`PBKDF2_ITERATIONS`]. The derivation is a pure function of
//! `(password, salt)` and touches no process-global state, so the same inputs
//! reproduce the same key across processes.
//!
//! # Security Guidelines
//!
//! - Derived keys are returned in [`Zeroizing`] and wiped when dropped.
//! - Salts must come from [`crate::crypto::generate_salt`], fresh per encryption.

use pbkdf2::pbkdf2_hmac;
use sha2::Sha256;
use zeroize::Zeroizing;

use crate::types::{KEY_LEN, PBKDF2_ITERATIONS, Password, SALT_LEN};

/// Derive a 32-byte key from a password and a 16-byte salt.
///
/// Text passwords are encoded as UTF-8; raw passwords are used as-is.
pub fn derive_key(password: &Password, salt: &[u8; SALT_LEN]) -> Zeroizing<[u8; KEY_LEN]> {
    let mut out = Zeroizing::new([0u8; KEY_LEN]);
    pbkdf2_hmac::<Sha256>(
        password.expose_bytes(),
        salt,
        PBKDF2_ITERATIONS,
        &mut out[..],
    );
    out
}
