#![allow(missing_docs)]
use assert_cmd::Command;
use predicates::prelude::*;

fn cli() -> Command {
    Command::new(env!("CARGO_BIN_EXE_simplecipher-cli"))
}

fn stdout_of(command: &mut Command) -> String {
    let output = command.output().expect("Failed to run simplecipher-cli");
    assert!(output.status.success(), "command failed: {output:?}");
    let mut text = String::from_utf8(output.stdout).expect("stdout is not UTF-8");
    assert_eq!(text.pop(), Some('\n'));
    text
}

#[test]
fn test_caesar_encrypt() {
    cli()
        .arg("encrypt")
        .arg("--method")
        .arg("caesar")
        .arg("--key")
        .arg("1")
        .arg("ABC")
        .assert()
        .success()
        .stdout("BCD\n");
}

#[test]
fn test_substitution_round_trip_with_default_method() {
    let encrypted = stdout_of(cli().arg("encrypt").arg("--key").arg("KEY").arg("HELLO"));
    assert_eq!(encrypted, "FBJJN");

    let decrypted = stdout_of(cli().arg("decrypt").arg("--key").arg("KEY").arg(&encrypted));
    assert_eq!(decrypted, "HELLO");
}

#[test]
fn test_method_accepts_display_label() {
    cli()
        .arg("encrypt")
        .arg("--method")
        .arg("Caesar")
        .arg("--key")
        .arg("3")
        .arg("abc")
        .assert()
        .success()
        .stdout("def\n");
}

#[test]
fn test_message_from_stdin() {
    cli()
        .arg("decrypt")
        .arg("--method")
        .arg("caesar")
        .arg("--key")
        .arg("3")
        .write_stdin("Khoor\n")
        .assert()
        .success()
        .stdout("Hello\n");
}

#[test]
fn test_one_time_pad_with_generated_key() {
    let message = "Meet me at noon";
    let key = stdout_of(cli().arg("pad").arg("--for").arg(message));
    assert_eq!(key.chars().count(), message.chars().count());

    let encrypted = stdout_of(
        cli().arg("encrypt")
            .arg("--method")
            .arg("one-time-pad")
            .arg("--key")
            .arg(&key)
            .arg(message),
    );
    let decrypted = stdout_of(
        cli().arg("decrypt")
            .arg("--method")
            .arg("One-Time Pad")
            .arg("--key")
            .arg(&key)
            .arg(&encrypted),
    );
    assert_eq!(decrypted, message);
}

#[test]
fn test_caesar_rejects_non_numeric_key() {
    cli()
        .arg("encrypt")
        .arg("--method")
        .arg("caesar")
        .arg("--key")
        .arg("abc")
        .arg("hi")
        .assert()
        .code(1)
        .stdout("")
        .stderr(predicate::str::contains("the key must be a natural number"));
}

#[test]
fn test_one_time_pad_rejects_length_mismatch() {
    cli()
        .arg("encrypt")
        .arg("--method")
        .arg("one-time-pad")
        .arg("--key")
        .arg("1")
        .arg("hi")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("same length"));
}

#[test]
fn test_blank_message_and_key_are_both_reported() {
    cli()
        .arg("--json")
        .arg("encrypt")
        .arg("--key")
        .arg(" ")
        .arg("")
        .assert()
        .code(1)
        .stdout(predicate::str::contains("\"message-empty\""))
        .stdout(predicate::str::contains("\"key-empty\""))
        .stderr(predicate::str::contains("the message is empty"))
        .stderr(predicate::str::contains("the key is empty"));
}

#[test]
fn test_unknown_method_exits_with_usage_code() {
    cli()
        .arg("encrypt")
        .arg("--method")
        .arg("enigma")
        .arg("--key")
        .arg("k")
        .arg("hi")
        .assert()
        .code(2)
        .stderr(predicate::str::contains("unknown cipher method selection"));
}

#[test]
fn test_json_output() {
    cli()
        .arg("--json")
        .arg("encrypt")
        .arg("--method")
        .arg("caesar")
        .arg("--key")
        .arg("1")
        .arg("ABC")
        .assert()
        .success()
        .stdout(predicate::str::contains("\"output\": \"BCD\""))
        .stdout(predicate::str::contains("\"method\": \"caesar\""))
        .stdout(predicate::str::contains("\"direction\": \"encrypt\""));
}

#[test]
fn test_mapping_and_methods_commands() {
    cli()
        .arg("mapping")
        .arg("--key")
        .arg("KEY")
        .assert()
        .success()
        .stdout("KEYABCDFGHIJLMNOPQRSTUVWXZabcdefghijklmnopqrstuvwxyz\n");

    cli()
        .arg("methods")
        .assert()
        .success()
        .stdout(predicate::str::contains("caesar"))
        .stdout(predicate::str::contains("Simple Substitution"))
        .stdout(predicate::str::contains("one-time-pad"));
}

#[test]
fn test_pad_by_length() {
    let key = stdout_of(cli().arg("pad").arg("--length").arg("12"));
    assert_eq!(key.len(), 12);
    assert!(key.chars().all(|c| c.is_ascii_alphabetic()));
}

#[test]
fn test_pad_refuses_oversized_lengths() {
    for length in ["100000", "18446744073709551615"] {
        cli()
            .arg("pad")
            .arg("--length")
            .arg(length)
            .assert()
            .code(2)
            .stdout("")
            .stderr(predicate::str::contains("must not exceed 4096"))
            .stderr(predicate::str::contains("panicked").not());
    }

    cli()
        .arg("pad")
        .arg("--for")
        .arg("x".repeat(4097))
        .assert()
        .code(2)
        .stderr(predicate::str::contains("must not exceed 4096"));
}
