//! All operations are stateless and may run in parallel on separate threads.

use std::collections::HashSet;
use std::fs;
use std::sync::Arc;
use std::thread;

use secure_encryption::{HEADER_LEN, Password, decrypt_data, decrypt_file, encrypt_data, encrypt_file};
use tempfile::tempdir;

#[test]
fn parallel_data_ops_share_a_password() {
    let pw = Arc::new(Password::from("shared"));

    let handles: Vec<_> = (0..8u8)
        .map(|i| {
            let pw = Arc::clone(&pw);
            thread::spawn(move || {
                let msg = vec![i; 100 + i as usize];
                let ct = encrypt_data(&msg, &pw).unwrap();
                assert_eq!(decrypt_data(&ct, &pw).unwrap(), msg);
                ct[..HEADER_LEN].to_vec()
            })
        })
        .collect();

    let headers: HashSet<Vec<u8>> = handles.into_iter().map(|h| h.join().unwrap()).collect();
    assert_eq!(headers.len(), 8, "every call must draw its own salt and nonce");
}

#[test]
fn parallel_file_ops_on_distinct_paths() {
    let dir = tempdir().unwrap();
    let root = Arc::new(dir.path().to_path_buf());

    let handles: Vec<_> = (0..4)
        .map(|i| {
            let root = Arc::clone(&root);
            thread::spawn(move || {
                let input = root.join(format!("in{i}.txt"));
                let enc = root.join(format!("in{i}.enc"));
                let back = root.join(format!("back{i}.txt"));
                let msg = format!("file number {i}");
                fs::write(&input, &msg).unwrap();

                let pw = Password::from(format!("pw{i}"));
                assert!(encrypt_file(&input, &enc, &pw));
                assert!(decrypt_file(&enc, &back, &pw));
                assert_eq!(fs::read_to_string(&back).unwrap(), msg);
            })
        })
        .collect();

    for h in handles {
        h.join().unwrap();
    }
}
