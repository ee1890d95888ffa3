use assert_cmd::Command;
use predicates::prelude::*;

#[test]
fn reads_one_line_and_round_trips() {
    Command::cargo_bin("rsa_crypto")
        .unwrap()
        .write_stdin("Hello, RSA!\nligne ignorée\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Clé publique (e, n) : "))
        .stdout(predicate::str::contains("Clé privée (d, n) : "))
        .stdout(predicate::str::contains("Texte d'origine : Hello, RSA!\n"))
        .stdout(predicate::str::contains("Texte déchiffré : Hello, RSA!\n"));
}

#[test]
fn message_flag_and_json_report() {
    let output = Command::cargo_bin("rsa_crypto")
        .unwrap()
        .args(["--json", "--message", "Bonjour", "--bits", "64"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let report: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(report["plaintext"], "Bonjour");
    assert_eq!(report["decrypted"], "Bonjour");
    assert_eq!(report["public_key"]["n"], report["private_key"]["n"]);
    let units = report["ciphertext"].as_str().unwrap().split(' ').count();
    assert_eq!(units, "Bonjour".len());
}

#[test]
fn fixed_textbook_primes_and_exponent() {
    Command::cargo_bin("rsa_crypto")
        .unwrap()
        .args(["--p-min", "61", "--p-max", "61", "--q-min", "53", "--q-max", "53", "--exponent", "17"])
        .args(["--message", "A"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Clé publique (e, n) : 17, 3233"))
        .stdout(predicate::str::contains("Clé privée (d, n) : 2753, 3233"))
        .stdout(predicate::str::contains("Texte chiffré : 2790\n"));
}

#[test]
fn empty_prime_range_fails_cleanly() {
    Command::cargo_bin("rsa_crypto")
        .unwrap()
        .args(["--p-min", "4", "--p-max", "4", "--message", "x"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("[ERREUR]"))
        .stderr(predicate::str::contains("Aucun nombre premier dans [4, 4]"));
}

#[test]
fn symbol_too_large_for_demo_modulus() {
    // Module de démonstration < 100·150 : '🦀' (U+1F980) ne tient pas
    Command::cargo_bin("rsa_crypto")
        .unwrap()
        .args(["--message", "crabe 🦀"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("position 6"));
}

#[test]
fn exponent_never_coprime_fails_after_retries() {
    // p = 7, q = 13 : φ = 72, 3 n'est jamais inversible
    Command::cargo_bin("rsa_crypto")
        .unwrap()
        .args(["--exponent", "3", "--p-min", "7", "--p-max", "7", "--q-min", "13", "--q-max", "13", "--message", "x"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("[ERREUR]"))
        .stderr(predicate::str::contains("inverse modulaire"));
}

#[test]
fn bits_conflicts_with_explicit_ranges() {
    Command::cargo_bin("rsa_crypto")
        .unwrap()
        .args(["--bits", "64", "--p-min", "11", "--message", "x"])
        .assert()
        .failure();
}
