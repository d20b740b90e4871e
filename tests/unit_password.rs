use restobook::utils::password::{hash_password, verify_password};

#[test]
fn test_hash_password_produces_non_plaintext_hash() {
    let password = "s3cure-password";
    let hash = hash_password(password).unwrap();

    assert_ne!(hash, password);
    assert!(hash.starts_with("$2"));
}

#[test]
fn test_verify_password_accepts_correct_password() {
    let password = "s3cure-password";
    let hash = hash_password(password).unwrap();

    assert!(verify_password(password, &hash).unwrap());
}

#[test]
fn test_verify_password_rejects_wrong_password() {
    let hash = hash_password("s3cure-password").unwrap();

    assert!(!verify_password("wrong-password", &hash).unwrap());
}

#[test]
fn test_same_password_hashes_differently() {
    let password = "s3cure-password";
    let hash1 = hash_password(password).unwrap();
    let hash2 = hash_password(password).unwrap();

    // Salted hashes never repeat, but both verify
    assert_ne!(hash1, hash2);
    assert!(verify_password(password, &hash1).unwrap());
    assert!(verify_password(password, &hash2).unwrap());
}

#[test]
fn test_verify_password_rejects_garbage_hash() {
    assert!(verify_password("whatever", "not-a-bcrypt-hash").is_err());
}
