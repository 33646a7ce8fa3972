use assert_cmd::prelude::*;
use assert_fs::prelude::*;
use predicates::prelude::*;
use std::process::Command;

use secure_encryption::{Password, encrypt_file};

fn make_pw(td: &assert_fs::TempDir) -> std::path::PathBuf {
    let pw = td.child("pw.txt");
    pw.write_str("pw\n").expect("write pw");
    pw.path().to_path_buf()
}

#[test]
fn cli_roundtrip_with_explicit_paths() -> Result<(), Box<dyn std::error::Error>> {
    let td = assert_fs::TempDir::new()?;
    let plain = td.child("a.txt");
    plain.write_str("hello\nworld\n")?;
    let ct = td.child("a.bin");
    let out = td.child("a.out");
    let pw = make_pw(&td);

    Command::cargo_bin("secure-encryption")?
        .args(["enc", "--in"])
        .arg(plain.path())
        .args(["--out"])
        .arg(ct.path())
        .args(["--password-file"])
        .arg(&pw)
        .assert()
        .success()
        .stderr(predicate::str::contains("Wrote"));

    Command::cargo_bin("secure-encryption")?
        .args(["dec", "-i"])
        .arg(ct.path())
        .args(["-o"])
        .arg(out.path())
        .args(["-p"])
        .arg(&pw)
        .assert()
        .success();

    out.assert("hello\nworld\n");
    td.close()?;
    Ok(())
}

/// The trailing newline in the password file is trimmed, so the library and
/// the CLI agree on the password "pw".
#[test]
fn cli_default_paths_interoperate_with_library() -> Result<(), Box<dyn std::error::Error>> {
    let td = assert_fs::TempDir::new()?;
    let plain = td.child("data.txt");
    plain.write_str("alpha\n")?;
    let pw = make_pw(&td);

    Command::cargo_bin("secure-encryption")?
        .args(["enc", "-i"])
        .arg(plain.path())
        .args(["-p"])
        .arg(&pw)
        .assert()
        .success();
    td.child("data.txt.enc").assert(predicate::path::exists());

    let back = td.child("back.txt");
    assert!(secure_encryption::decrypt_file(
        td.child("data.txt.enc").path(),
        back.path(),
        &Password::from("pw"),
    ));
    back.assert("alpha\n");

    td.close()?;
    Ok(())
}

#[test]
fn dec_refuses_and_then_overwrites_with_default_out() -> Result<(), Box<dyn std::error::Error>> {
    let td = assert_fs::TempDir::new()?;
    let plain = td.child("data.txt");
    plain.write_str("alpha\nbeta\ngamma\n")?;
    let pw = make_pw(&td);

    let ct = td.child("data.txt.enc");
    assert!(encrypt_file(plain.path(), ct.path(), &Password::from("pw")));

    plain.write_str("THIS WAS HERE BEFORE DEC\n")?;

    Command::cargo_bin("secure-encryption")?
        .args(["dec", "--in"])
        .arg(ct.path())
        .args(["--password-file"])
        .arg(&pw)
        .assert()
        .failure()
        .stderr(predicate::str::contains("use --force"));

    plain.assert("THIS WAS HERE BEFORE DEC\n");

    Command::cargo_bin("secure-encryption")?
        .args(["dec", "--in"])
        .arg(ct.path())
        .args(["--password-file"])
        .arg(&pw)
        .args(["--force"])
        .assert()
        .success();

    plain.assert("alpha\nbeta\ngamma\n");
    td.close()?;
    Ok(())
}

#[test]
fn dec_wrong_password_fails_without_output() -> Result<(), Box<dyn std::error::Error>> {
    let td = assert_fs::TempDir::new()?;
    let plain = td.child("s.txt");
    plain.write_str("secret")?;
    let ct = td.child("s.enc");
    assert!(encrypt_file(plain.path(), ct.path(), &Password::from("right")));

    let bad = td.child("bad.txt");
    bad.write_str("wrong")?;
    let out = td.child("s.out");

    Command::cargo_bin("secure-encryption")?
        .args(["dec", "-i"])
        .arg(ct.path())
        .args(["-o"])
        .arg(out.path())
        .args(["-p"])
        .arg(bad.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("decryption failed"))
        .stderr(predicate::str::contains("authentication failed"));

    out.assert(predicate::path::missing());
    td.close()?;
    Ok(())
}

#[test]
fn enc_missing_input_reports_not_found() -> Result<(), Box<dyn std::error::Error>> {
    let td = assert_fs::TempDir::new()?;
    let pw = make_pw(&td);

    Command::cargo_bin("secure-encryption")?
        .args(["enc", "-i"])
        .arg(td.child("nope.txt").path())
        .args(["-p"])
        .arg(&pw)
        .assert()
        .failure()
        .stderr(predicate::str::contains("input not found"));

    td.child("nope.txt.enc").assert(predicate::path::missing());
    td.close()?;
    Ok(())
}

#[test]
fn inspect_prints_header() -> Result<(), Box<dyn std::error::Error>> {
    let td = assert_fs::TempDir::new()?;
    let plain = td.child("h.txt");
    plain.write_str("Hello, World! This is a test file.")?;
    let ct = td.child("h.enc");
    assert!(encrypt_file(plain.path(), ct.path(), &Password::from("test_password")));

    Command::cargo_bin("secure-encryption")?
        .args(["inspect"])
        .arg(ct.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("ciphertext len:  50"))
        .stdout(predicate::str::contains("plaintext len:   34"));

    let short = td.child("short.enc");
    short.write_binary(&[0u8; 10])?;
    Command::cargo_bin("secure-encryption")?
        .args(["inspect"])
        .arg(short.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("malformed artifact"));

    td.close()?;
    Ok(())
}
