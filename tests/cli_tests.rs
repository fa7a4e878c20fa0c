//! Integration tests for CLI

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

fn axolgo() -> Command {
    Command::new(assert_cmd::cargo::cargo_bin!("axolgo"))
}

/// Temp directory holding a minimal base configuration; every command
/// resolves configuration before running, so config-dependent tests point
/// AXOLGO_CONFIG_PATH here.
fn config_dir() -> TempDir {
    let dir = TempDir::new().expect("temp config dir");
    fs::write(dir.path().join("axolgo.yaml"), "logging:\n  verbosity: 0\n")
        .expect("write base config");
    dir
}

#[test]
fn test_cli_version() {
    let mut cmd = axolgo();
    cmd.arg("--version");
    cmd.assert().success().stdout(predicate::str::contains("axolgo"));
}

#[test]
fn test_cli_help_lists_command_groups() {
    let mut cmd = axolgo();
    cmd.arg("--help");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("aws"))
        .stdout(predicate::str::contains("gcp"))
        .stdout(predicate::str::contains("cryptography"));
}

#[test]
fn test_aws_help_lists_services() {
    let mut cmd = axolgo();
    cmd.args(["aws", "--help"]);
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("ec2"))
        .stdout(predicate::str::contains("rds"));
}

#[test]
fn test_leaf_commands_keep_their_original_names() {
    let mut cmd = axolgo();
    cmd.args(["aws", "ec2", "--help"]);
    cmd.assert().success().stdout(predicate::str::contains("describeInstances"));

    let mut cmd = axolgo();
    cmd.args(["aws", "rds", "--help"]);
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("modifyDBParameterGroup"))
        .stdout(predicate::str::contains("modifyDBClusterParameterGroup"));

    let mut cmd = axolgo();
    cmd.args(["gcp", "compute", "--help"]);
    cmd.assert().success().stdout(predicate::str::contains("listInstances"));

    let mut cmd = axolgo();
    cmd.args(["cryptography", "--help"]);
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("encrypt"))
        .stdout(predicate::str::contains("decrypt"))
        .stdout(predicate::str::contains("encryptFile"))
        .stdout(predicate::str::contains("decryptFile"))
        .stdout(predicate::str::contains("genPassphrase"));
}

#[test]
fn test_describe_instances_documents_filter_flags() {
    let mut cmd = axolgo();
    cmd.args(["aws", "ec2", "describeInstances", "--help"]);
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("--instance-id"))
        .stdout(predicate::str::contains("--private-ip-address"))
        .stdout(predicate::str::contains("--max-results"));
}

#[test]
fn test_gen_passphrase_requires_save_file() {
    let dir = config_dir();
    let mut cmd = axolgo();
    cmd.env("AXOLGO_CONFIG_PATH", dir.path());
    cmd.args(["cryptography", "genPassphrase"]);
    cmd.assert().failure().code(2).stderr(predicate::str::contains("--save-file"));
}

#[test]
fn test_modify_db_parameter_group_requires_name_and_file() {
    let dir = config_dir();
    let mut cmd = axolgo();
    cmd.env("AXOLGO_CONFIG_PATH", dir.path());
    cmd.args(["aws", "rds", "modifyDBParameterGroup"]);
    cmd.assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("--name"))
        .stderr(predicate::str::contains("--parameter-file"));
}

#[test]
fn test_gen_passphrase_writes_a_passphrase_file() {
    let dir = config_dir();
    let out = dir.path().join("out.key");

    let mut cmd = axolgo();
    cmd.env("AXOLGO_CONFIG_PATH", dir.path());
    cmd.args(["cryptography", "genPassphrase", "-s"]).arg(&out);
    cmd.assert().success();

    let passphrase = fs::read_to_string(&out).expect("passphrase file");
    assert_eq!(passphrase.len(), 50);
    assert!(passphrase.bytes().all(|b| b.is_ascii_graphic()));
}

#[test]
fn test_encrypt_decrypt_round_trip_through_the_binary() {
    let dir = config_dir();
    let key_file = dir.path().join("secret.key");
    fs::write(&key_file, "correct horse battery staple").expect("write key file");

    let mut encrypt = axolgo();
    encrypt.env("AXOLGO_CONFIG_PATH", dir.path());
    encrypt.args(["cryptography", "encrypt", "-m", "Hello World", "-k"]).arg(&key_file);
    let assert = encrypt.assert().success();
    let ciphertext = String::from_utf8(assert.get_output().stdout.clone()).expect("utf8 stdout");
    let ciphertext = ciphertext.trim();
    assert!(!ciphertext.is_empty());
    assert!(ciphertext.chars().all(|c| c.is_ascii_hexdigit()));

    let mut decrypt = axolgo();
    decrypt.env("AXOLGO_CONFIG_PATH", dir.path());
    decrypt.args(["cryptography", "decrypt", "-m", ciphertext, "-k"]).arg(&key_file);
    decrypt.assert().success().stdout(predicate::str::contains("Hello World"));
}

#[test]
fn test_decrypt_with_wrong_key_fails_cleanly() {
    let dir = config_dir();
    let key_file = dir.path().join("secret.key");
    let wrong_key_file = dir.path().join("wrong.key");
    fs::write(&key_file, "right passphrase").expect("write key file");
    fs::write(&wrong_key_file, "wrong passphrase").expect("write wrong key file");

    let mut encrypt = axolgo();
    encrypt.env("AXOLGO_CONFIG_PATH", dir.path());
    encrypt.args(["cryptography", "encrypt", "-m", "Hello World", "-k"]).arg(&key_file);
    let assert = encrypt.assert().success();
    let ciphertext = String::from_utf8(assert.get_output().stdout.clone()).expect("utf8 stdout");

    let mut decrypt = axolgo();
    decrypt.env("AXOLGO_CONFIG_PATH", dir.path());
    decrypt.args(["cryptography", "decrypt", "-m", ciphertext.trim(), "-k"]).arg(&wrong_key_file);
    decrypt.assert().failure().code(1).stderr(predicate::str::contains("decryption failed"));
}

#[test]
fn test_encrypt_file_decrypt_file_round_trip() {
    let dir = config_dir();
    let key_file = dir.path().join("secret.key");
    let input = dir.path().join("note.txt");
    fs::write(&key_file, "file passphrase").expect("write key file");
    fs::write(&input, "file payload").expect("write input");

    let mut encrypt = axolgo();
    encrypt.env("AXOLGO_CONFIG_PATH", dir.path());
    encrypt.args(["cryptography", "encryptFile", "-k"]).arg(&key_file).arg("-f").arg(&input);
    encrypt.assert().success();

    let encrypted = dir.path().join("note-encrypted.txt");
    assert!(encrypted.is_file());
    assert_ne!(fs::read(&encrypted).expect("encrypted bytes"), b"file payload");

    let restored = dir.path().join("restored.txt");
    let mut decrypt = axolgo();
    decrypt.env("AXOLGO_CONFIG_PATH", dir.path());
    decrypt
        .args(["cryptography", "decryptFile", "-k"])
        .arg(&key_file)
        .arg("-f")
        .arg(&encrypted)
        .arg("-o")
        .arg(&restored);
    decrypt.assert().success();

    assert_eq!(fs::read_to_string(&restored).expect("restored"), "file payload");
}

#[test]
fn test_missing_base_config_exits_with_code_2() {
    let empty = TempDir::new().expect("empty config dir");
    let out = empty.path().join("out.key");

    let mut cmd = axolgo();
    cmd.env("AXOLGO_CONFIG_PATH", empty.path());
    cmd.args(["cryptography", "genPassphrase", "-s"]).arg(&out);
    cmd.assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("configuration file not found"));
    assert!(!out.exists());
}

#[test]
fn test_undecodable_config_exits_with_code_2() {
    let dir = TempDir::new().expect("config dir");
    fs::write(dir.path().join("axolgo.yaml"), "logging:\n  verbosity: chatty\n")
        .expect("write base config");

    let mut cmd = axolgo();
    cmd.env("AXOLGO_CONFIG_PATH", dir.path());
    cmd.args(["cryptography", "genPassphrase", "-s"]).arg(dir.path().join("out.key"));
    cmd.assert().failure().code(2).stderr(predicate::str::contains("invalid configuration"));
}
