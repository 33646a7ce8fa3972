#![forbid(unsafe_code)]
//! `secure-encryption` — command-line front end for the `secure_encryption` library.
//!
//! Logging goes to stderr and is controlled by `RUST_LOG` (default: `warn`).

use std::fs;
use std::io::Read;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use secrecy::SecretString;
use secure_encryption::{
    Password, TAG_LEN, default_decrypt_output_path, default_encrypt_output_path, parse_artifact,
    try_decrypt_file, try_encrypt_file,
};
use tracing::debug;
use tracing_subscriber::{EnvFilter, FmtSubscriber};
use zeroize::Zeroize;

#[derive(Parser, Debug)]
#[command(
    name = "secure-encryption",
    version,
    about = "Password-based authenticated encryption of files (PBKDF2-SHA256 + AES-256-GCM)"
)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Encrypt a file
    Enc(CryptArgs),
    /// Decrypt a file
    Dec(CryptArgs),
    /// Show the header of an encrypted file without decrypting it
    Inspect(InspectArgs),
}

#[derive(Args, Debug)]
struct CryptArgs {
    /// Input file
    #[arg(short = 'i', long = "in")]
    input: PathBuf,

    /// Output file. If omitted, ".enc" is appended on encryption; on decryption
    /// ".enc" is stripped or ".dec" is appended.
    #[arg(short = 'o', long = "out")]
    output: Option<PathBuf>,

    /// Read password from file instead of interactive prompt (trailing newline is trimmed)
    #[arg(short = 'p', long = "password-file")]
    password_file: Option<PathBuf>,

    /// Overwrite the output file if it already exists
    #[arg(short = 'f', long = "force")]
    force: bool,
}

#[derive(Args, Debug)]
struct InspectArgs {
    /// Encrypted file
    file: PathBuf,
}

fn main() -> Result<()> {
    init_logging();
    let cli = Cli::parse();
    match cli.cmd {
        Command::Enc(a) => cmd_enc(a),
        Command::Dec(a) => cmd_dec(a),
        Command::Inspect(a) => cmd_inspect(a),
    }
}

fn init_logging() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .finish();
    if tracing::subscriber::set_global_default(subscriber).is_err() {
        eprintln!("Unable to set global default subscriber");
    }
}

fn read_password(password_file: &Option<PathBuf>, prompt: &str) -> Result<Password> {
    if let Some(path) = password_file {
        let mut s = String::new();
        fs::File::open(path)
            .and_then(|mut f| f.read_to_string(&mut s))
            .with_context(|| format!("failed to read password file {}", path.display()))?;

        let secret = SecretString::new(
            s.trim_end_matches(&['\r', '\n'][..])
                .to_owned()
                .into_boxed_str(),
        );

        // Zero the original string that contained the password
        s.zeroize();
        Ok(Password::from(secret))
    } else {
        let pw = rpassword::prompt_password(prompt)?;
        Ok(Password::from(SecretString::new(pw.into_boxed_str())))
    }
}

/// Refuse to clobber an existing output unless `--force` was given.
fn check_overwrite(target: &Path, force: bool) -> Result<()> {
    if target.exists() && !force {
        anyhow::bail!("output exists; use --force to overwrite");
    }
    Ok(())
}

fn cmd_enc(a: CryptArgs) -> Result<()> {
    let out = a
        .output
        .clone()
        .unwrap_or_else(|| default_encrypt_output_path(&a.input));
    check_overwrite(&out, a.force)?;

    let pw = read_password(&a.password_file, "Password: ")?;
    debug!("encrypting {} -> {}", a.input.display(), out.display());
    try_encrypt_file(&a.input, &out, &pw).with_context(|| "encryption failed")?;

    eprintln!("Wrote {}", out.display());
    Ok(())
}

fn cmd_dec(a: CryptArgs) -> Result<()> {
    let out = a
        .output
        .clone()
        .unwrap_or_else(|| default_decrypt_output_path(&a.input));
    check_overwrite(&out, a.force)?;

    let pw = read_password(&a.password_file, "Password: ")?;
    debug!("decrypting {} -> {}", a.input.display(), out.display());
    try_decrypt_file(&a.input, &out, &pw).with_context(|| "decryption failed")?;

    eprintln!("Wrote {}", out.display());
    Ok(())
}

fn cmd_inspect(a: InspectArgs) -> Result<()> {
    let data =
        fs::read(&a.file).with_context(|| format!("failed to read {}", a.file.display()))?;
    let artifact = parse_artifact(&data).with_context(|| "not an encrypted artifact")?;

    println!("salt:            {}", hex::encode(artifact.salt));
    println!("nonce:           {}", hex::encode(artifact.nonce));
    println!("ciphertext len:  {}", artifact.ciphertext.len());
    match artifact.plaintext_len() {
        Some(n) => println!("plaintext len:   {n}"),
        None => println!("plaintext len:   invalid (ciphertext shorter than {TAG_LEN}-byte tag)"),
    }
    Ok(())
}
