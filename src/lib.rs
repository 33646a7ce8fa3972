#![forbid(unsafe_code)]
//! # secure_encryption — password-based authenticated encryption for files and buffers.
//!
//! `secure_encryption` turns arbitrary bytes into a self-contained artifact that can
//! only be decrypted with the password it was sealed with, and detects any tampering.
//!
//! ## Format
//! ```text
//! salt (16 bytes) ‖ nonce (12 bytes) ‖ AES-256-GCM ciphertext + tag (16 bytes)
//! ```
//! The key is derived with PBKDF2-HMAC-SHA256 (100,000 iterations). Salt and
//! nonce are drawn fresh from the OS CSPRNG for every encryption.
//!
//! ## Entry points
//! - [`encrypt_file`] / [`decrypt_file`] return `bool`
//! - [`encrypt_data`] / [`decrypt_data`] return `Option<Vec<u8>>`
//! - the `try_*` variants return [`EncryptionError`] for callers that need the cause
//!
//! ## Example: Encrypt and decrypt a byte array
//! ```no_run
//! use secure_encryption::{Password, decrypt_data, encrypt_data};
//!
//! let password = Password::from("mypassword");
//! let artifact = encrypt_data(b"Hello, world!", &password).unwrap();
//! let plaintext = decrypt_data(&artifact, &password).unwrap();
//! assert_eq!(plaintext, b"Hello, world!");
//! ```
//!
//! ## Example: Encrypt a file
//! ```no_run
//! use secure_encryption::{Password, encrypt_file};
//! use std::path::Path;
//!
//! let ok = encrypt_file(Path::new("notes.txt"), Path::new("notes.txt.enc"), &Password::from("pw"));
//! assert!(ok);
//! ```
//!
//! Safety notes
//! - The crate is not audited or reviewed! Protects data at rest. Does not defend against compromised hosts/side channels.
//! - All functions are stateless and may be called concurrently from any number of threads.

mod crypto;
mod file;
mod format;
mod kdf;
mod types;

// Re-export public API from modules
pub use crypto::{
    aead_decrypt, aead_encrypt, decrypt_data, encrypt_data, try_decrypt_data, try_encrypt_data,
};
pub use file::{
    decrypt_file, default_decrypt_output_path, default_encrypt_output_path, encrypt_file,
    try_decrypt_file, try_encrypt_file,
};
pub use format::{Artifact, parse_artifact};
pub use kdf::derive_key;
pub use types::*;
