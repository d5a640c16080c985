#![allow(missing_docs)]
use simplecipher_core::alphabet::derive_mapping;
use simplecipher_core::pad_generator;
use simplecipher_core::{
    CipherRequest, Direction, ErrorCode, Method, MethodTable, Session, try_cipher,
    try_cipher_named,
};

#[test]
fn test_concrete_scenarios() {
    assert_eq!(try_cipher("ABC", "1", Method::Caesar, false).unwrap(), "BCD");

    let otp = try_cipher("AB", "BA", Method::OneTimePad, false).unwrap();
    assert_eq!(
        otp.chars().map(u32::from).collect::<Vec<_>>(),
        vec![131, 131]
    );

    let error = try_cipher("hi", "1", Method::OneTimePad, false).unwrap_err();
    assert!(error.contains(ErrorCode::KeyMessageLengthMismatch));

    let error = try_cipher("hi", "abc", Method::Caesar, false).unwrap_err();
    assert!(error.contains(ErrorCode::KeyNotNaturalNumber));

    let error = try_cipher("", "", Method::SimpleSubstitution, false).unwrap_err();
    assert!(error.contains(ErrorCode::MessageEmpty));
    assert!(error.contains(ErrorCode::KeyEmpty));
}

#[test]
fn test_substitution_follows_the_derivation_rule() {
    let mapping = derive_mapping("KEY");
    let expected: String = "HELLO"
        .chars()
        .map(|c| mapping[(c as u8 - b'A') as usize])
        .collect();
    let encrypted = try_cipher("HELLO", "KEY", Method::SimpleSubstitution, false).unwrap();
    assert_eq!(encrypted, expected);
    assert_eq!(encrypted, "FBJJN");
}

#[test]
fn test_substitution_key_with_spaces_and_repeats() {
    let a = try_cipher("Hello World", "se cret", Method::SimpleSubstitution, false).unwrap();
    let b = try_cipher("Hello World", "secret", Method::SimpleSubstitution, false).unwrap();
    let c = try_cipher("Hello World", "secrt", Method::SimpleSubstitution, false).unwrap();
    assert_eq!(a, b);
    assert_eq!(b, c);
    assert_eq!(a.chars().nth(5), Some(' '));
}

#[test]
fn test_caesar_accepts_very_long_digit_keys() {
    let key = "1".repeat(200);
    let encrypted = try_cipher("Hello", &key, Method::Caesar, false).unwrap();
    let decrypted = try_cipher(&encrypted, &key, Method::Caesar, true).unwrap();
    assert_eq!(decrypted, "Hello");
}

#[test]
fn test_caesar_accepts_digits_from_other_scripts() {
    let ascii = try_cipher("Hello", "12", Method::Caesar, false).unwrap();
    let arabic_indic = try_cipher("Hello", "\u{661}\u{662}", Method::Caesar, false).unwrap();
    let devanagari = try_cipher("Hello", "\u{967}\u{968}", Method::Caesar, false).unwrap();
    assert_eq!(arabic_indic, ascii);
    assert_eq!(devanagari, ascii);
    assert_eq!(
        try_cipher(&arabic_indic, "\u{661}\u{662}", Method::Caesar, true).unwrap(),
        "Hello"
    );

    let error = try_cipher("Hello", "\u{BD}", Method::Caesar, false).unwrap_err();
    assert_eq!(error.key, Some(ErrorCode::KeyNotNaturalNumber));
}

#[test]
fn test_named_dispatch_matches_typed_dispatch() {
    for method in Method::ALL {
        let key = if method == Method::Caesar { "7" } else { "kiwi" };
        let typed = try_cipher("kiwi", key, method, false).unwrap();
        let named = try_cipher_named("kiwi", key, method.id(), false).unwrap();
        assert_eq!(typed, named);
    }
    let error = try_cipher_named("kiwi", "kiwi", "playfair", false).unwrap_err();
    assert_eq!(error.other, Some(ErrorCode::UnknownMethod));
}

#[test]
fn test_session_workflow_with_a_custom_table() {
    let table = MethodTable::new([
        ("Cesar", Method::Caesar),
        ("Sustitucion", Method::SimpleSubstitution),
        ("Libreta", Method::OneTimePad),
    ]);
    let mut session = Session::new();

    // Default selection works without any lookup.
    let encrypted = session.try_cipher("Hola", "clave", false).unwrap();
    assert_eq!(session.try_cipher(&encrypted, "clave", true).unwrap(), "Hola");

    session.select_method(&table, "Libreta").unwrap();
    let key = pad_generator::generate_pad_key_for("Hola").unwrap();
    let encrypted = session.try_cipher("Hola", &key, false).unwrap();
    assert_eq!(session.try_cipher(&encrypted, &key, true).unwrap(), "Hola");

    assert_eq!(
        session.select_method(&table, "Vigenere"),
        Err(ErrorCode::UnknownMethodSelection)
    );
    assert_eq!(session.method(), Method::OneTimePad);
}

#[test]
fn test_request_json_round_trip() {
    let request = CipherRequest {
        message: "secret".to_string(),
        key: "3".to_string(),
        method: Method::Caesar,
        direction: Direction::Encrypt,
    };
    let json = serde_json::to_string(&request).unwrap();
    assert!(json.contains("\"method\":\"caesar\""));
    assert!(json.contains("\"direction\":\"encrypt\""));
    let parsed: CipherRequest = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed.execute().unwrap(), "vhfuhw");
}
