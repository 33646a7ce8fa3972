//! File I/O operations for encryption and decryption.
//!
//! Files are processed whole, in memory. Output is always written through a
//! temporary file in the destination directory and renamed into place, so a
//! failed call never leaves a partial artifact or partial plaintext at the
//! output path, and a file already there keeps its previous contents.

use std::ffi::OsStr;
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;
use tracing::{error, info};
use zeroize::Zeroizing;

use crate::crypto::{try_decrypt_data, try_encrypt_data};
use crate::types::{EncryptionError, Password};

/// Encrypt `input` into `output` as `salt ‖ nonce ‖ ciphertext`.
///
/// An existing file at `output` is replaced. `input` is never modified.
///
/// # Errors
///
/// - `EncryptionError::NotFound` if `input` does not exist (nothing is written).
/// - `EncryptionError::Io` for read or write failures.
pub fn try_encrypt_file(
    input: &Path,
    output: &Path,
    password: &Password,
) -> Result<(), EncryptionError> {
    let plaintext = Zeroizing::new(read_input(input)?);
    let artifact = try_encrypt_data(&plaintext, password)?;
    write_all_atomic(output, &artifact)
}

/// Decrypt an artifact file at `input` into `output`.
///
/// # Errors
///
/// - `EncryptionError::NotFound` if `input` does not exist.
/// - `EncryptionError::MalformedArtifact` if `input` is shorter than 28 bytes.
/// - `EncryptionError::AuthenticationFailed` for a wrong password or a
///   corrupted file.
/// - `EncryptionError::Io` for read or write failures.
pub fn try_decrypt_file(
    input: &Path,
    output: &Path,
    password: &Password,
) -> Result<(), EncryptionError> {
    let artifact = read_input(input)?;
    let plaintext = Zeroizing::new(try_decrypt_data(&artifact, password)?);
    write_all_atomic(output, &plaintext)
}

/// Encrypt a file, reporting only success or failure.
///
/// Failures are logged with their cause and never propagated.
pub fn encrypt_file(input: &Path, output: &Path, password: &Password) -> bool {
    match try_encrypt_file(input, output, password) {
        Ok(()) => {
            info!("File encrypted: {} -> {}", input.display(), output.display());
            true
        }
        Err(e) => {
            error!("Encryption of {} failed: {e}", input.display());
            false
        }
    }
}

/// Decrypt a file, reporting only success or failure.
///
/// A wrong password and a corrupted file both return `false`.
pub fn decrypt_file(input: &Path, output: &Path, password: &Password) -> bool {
    match try_decrypt_file(input, output, password) {
        Ok(()) => {
            info!("File decrypted: {} -> {}", input.display(), output.display());
            true
        }
        Err(e) => {
            error!("Decryption of {} failed: {e}", input.display());
            false
        }
    }
}

fn read_input(path: &Path) -> Result<Vec<u8>, EncryptionError> {
    fs::read(path).map_err(|e| match e.kind() {
        io::ErrorKind::NotFound => EncryptionError::NotFound(path.to_path_buf()),
        _ => EncryptionError::Io(e),
    })
}

/// Atomically write data to a file using a temporary file.
///
/// The temporary file is created next to `path`, written, synced and renamed
/// over `path`. On any error the temporary file is dropped (and deleted) and
/// `path` is untouched. On Unix the temporary file, and thus the result, is
/// created with mode 0600.
///
/// # Errors
///
/// Returns `EncryptionError::Io` for I/O failures, including a missing parent
/// directory.
pub fn write_all_atomic(path: &Path, data: &[u8]) -> Result<(), EncryptionError> {
    let parent = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };
    let mut tmp = NamedTempFile::new_in(parent)?;
    tmp.write_all(data)?;
    tmp.flush()?;
    tmp.as_file_mut().sync_all()?;
    tmp.persist(path).map_err(|e| EncryptionError::Io(e.error))?;
    Ok(())
}

/// Default encryption output path: `.enc` is appended to the file name,
/// preserving any existing extension (`notes.txt` -> `notes.txt.enc`).
pub fn default_encrypt_output_path(input: &Path) -> PathBuf {
    let mut name = input
        .file_name()
        .unwrap_or_else(|| OsStr::new("out"))
        .to_os_string();
    name.push(".enc");
    input.with_file_name(name)
}

/// Default decryption output path:
/// - If the input file name ends with ".enc", that suffix is stripped
/// - Otherwise, ".dec" is appended
pub fn default_decrypt_output_path(in_path: &Path) -> PathBuf {
    let parent = in_path.parent().unwrap_or_else(|| Path::new(""));
    let file_name = in_path.file_name().unwrap_or_else(|| OsStr::new("out"));

    // Best-effort UTF-8 handling; fall back to appending ".dec" if not UTF-8.
    if let Some(name) = file_name.to_str() {
        if let Some(stripped) = name.strip_suffix(".enc") {
            if !stripped.is_empty() {
                return parent.join(stripped);
            }
        }
        return parent.join(format!("{name}.dec"));
    }

    let mut os = file_name.to_os_string();
    os.push(".dec");
    parent.join(os)
}
