use userdesk_backend_lib::auth::{Password, PasswordError};

#[test]
fn test_password_hashing_and_verification() {
    let password = Password::set("foobar$123").unwrap();

    assert!(password.hash().starts_with("$scrypt$"));
    assert!(!password.hash().contains("foobar$123"));
    assert_eq!(password.matches("foobar$123"), Ok(true));
    assert_eq!(password.matches("foobar$124"), Ok(false));
}

#[test]
fn test_same_plaintext_gets_distinct_salts() {
    let a = Password::set("foobar$123").unwrap();
    let b = Password::set("foobar$123").unwrap();
    assert_ne!(a.hash(), b.hash());
    assert_eq!(b.matches("foobar$123"), Ok(true));
}

#[test]
fn test_malformed_stored_hash() {
    let password = Password::from_hash("definitely-not-phc").unwrap();
    assert_eq!(
        password.matches("anything"),
        Err(PasswordError::MalformedHash)
    );
}

#[test]
fn test_debug_never_prints_hash() {
    let password = Password::set("foobar$123").unwrap();
    let printed = format!("{password:?}");
    assert!(!printed.contains(password.hash()));
}
