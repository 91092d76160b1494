use std::path::{Path, PathBuf};
use std::process::{Command, Output};

fn bin() -> PathBuf {
    PathBuf::from(env!("CARGO_BIN_EXE_transpo"))
}

/// Run the binary with an isolated config home.
fn transpo(config_home: &Path, args: &[&str]) -> Output {
    Command::new(bin())
        .args(args)
        .env("XDG_CONFIG_HOME", config_home)
        .env_remove("TRANSPO_CONFIG")
        .env_remove("TRANSPO_LOG")
        .env("NO_COLOR", "1")
        .output()
        .expect("binary should run")
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).to_string()
}

fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).to_string()
}

#[test]
fn test_encrypt_both_ciphers_plain() {
    let home = tempfile::tempdir().expect("tempdir");
    let output = transpo(
        home.path(),
        &["encrypt", "meet me at the park", "--rails", "2", "--key", "zebra"],
    );

    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert_eq!(
        stdout(&output),
        "rail_fence=MEMATEAKETETHPR\nrow_transposition=MHKETAEAPTTRMEE\n"
    );
}

#[test]
fn test_encrypt_json_output() {
    let home = tempfile::tempdir().expect("tempdir");
    let output = transpo(
        home.path(),
        &["encrypt", "WEAREDISCOVEREDFLEEATONCE", "--rails", "3", "--json"],
    );

    assert!(output.status.success());
    let value: serde_json::Value = serde_json::from_str(&stdout(&output)).expect("valid json");
    assert_eq!(value["status"], "ok");
    assert_eq!(value["results"][0]["cipher"], "rail_fence");
    assert_eq!(value["results"][0]["key"], 3);
    assert_eq!(
        value["results"][0]["encrypted"],
        "WECRLTEERDSOEEFEAOCAIVDEN"
    );
}

#[test]
fn test_encrypt_format_table_when_piped() {
    let home = tempfile::tempdir().expect("tempdir");
    let output = transpo(
        home.path(),
        &["--ascii", "encrypt", "meet me at the park", "--key", "zebra", "--format", "table"],
    );

    assert!(output.status.success());
    let out = stdout(&output);
    assert!(out.starts_with("Transpo"));
    assert!(out.contains("| Row Transposition"));
    assert!(out.contains("MHKETAEAPTTRMEE"));
}

#[test]
fn test_encrypt_format_json_matches_flag() {
    let home = tempfile::tempdir().expect("tempdir");
    let output = transpo(home.path(), &["encrypt", "hello", "--rails", "2", "--format", "json"]);

    assert!(output.status.success());
    let value: serde_json::Value = serde_json::from_str(&stdout(&output)).expect("valid json");
    assert_eq!(value["results"][0]["encrypted"], "HLOEL");
}

#[test]
fn test_encrypt_unknown_format_is_usage_error() {
    let home = tempfile::tempdir().expect("tempdir");
    let output = transpo(home.path(), &["encrypt", "hello", "--rails", "2", "--format", "xml"]);

    assert_eq!(output.status.code(), Some(2));
}

#[test]
fn test_encrypt_quiet_prints_ciphertext_only() {
    let home = tempfile::tempdir().expect("tempdir");
    let output = transpo(home.path(), &["--quiet", "encrypt", "HI", "--key", "KEY"]);

    assert!(output.status.success());
    assert_eq!(stdout(&output), "IHX\n");
}

#[test]
fn test_encrypt_invalid_key_still_runs_other_cipher() {
    let home = tempfile::tempdir().expect("tempdir");
    let output = transpo(
        home.path(),
        &["encrypt", "hello", "--rails", "2", "--key", "k3y"],
    );

    assert!(output.status.success());
    assert_eq!(stdout(&output), "rail_fence=HLOEL\n");
    assert!(stderr(&output).contains("warning=Row Transposition key must contain only letters."));
}

#[test]
fn test_encrypt_without_keys_is_rejected() {
    let home = tempfile::tempdir().expect("tempdir");
    let output = transpo(home.path(), &["encrypt", "hello"]);

    assert_eq!(output.status.code(), Some(4));
    assert!(stdout(&output).is_empty());
    assert!(stderr(&output)
        .contains("error=Please provide at least one valid key for encryption."));
}

#[test]
fn test_encrypt_rails_exceeding_message_rejected() {
    let home = tempfile::tempdir().expect("tempdir");
    let output = transpo(home.path(), &["encrypt", "he llo", "--rails", "6"]);

    assert_eq!(output.status.code(), Some(4));
    let err = stderr(&output);
    assert!(err.contains("error=Rail Fence key cannot be greater than message length."));
    assert!(err.contains("hint="));
}

#[test]
fn test_encrypt_blank_message_rejected_as_json() {
    let home = tempfile::tempdir().expect("tempdir");
    let output = transpo(home.path(), &["encrypt", "   ", "--rails", "2", "--json"]);

    assert_eq!(output.status.code(), Some(4));
    let value: serde_json::Value = serde_json::from_str(&stdout(&output)).expect("valid json");
    assert_eq!(value["status"], "rejected");
    assert_eq!(value["errors"][0]["code"], "empty_message");
}

#[test]
fn test_config_init_and_show() {
    let home = tempfile::tempdir().expect("tempdir");

    let init = transpo(home.path(), &["config", "init"]);
    assert!(init.status.success(), "stderr: {}", stderr(&init));
    assert!(stdout(&init).starts_with("Wrote default config to "));
    let config_path = home.path().join("transpo").join("config.toml");
    assert!(config_path.exists());

    let again = transpo(home.path(), &["config", "init"]);
    assert!(!again.status.success());
    assert!(stderr(&again).contains("hint=Pass --force to overwrite it."));

    std::fs::write(&config_path, "[server]\nport = 8088\n").expect("write config");
    let show = transpo(home.path(), &["config", "show"]);
    assert!(show.status.success());
    let shown = stdout(&show);
    assert!(shown.contains("port=8088"));
    assert!(shown.contains("bind=127.0.0.1"));
    assert!(shown.contains("log_level=info"));

    let forced = transpo(home.path(), &["config", "init", "--force"]);
    assert!(forced.status.success());
    let reset = std::fs::read_to_string(&config_path).expect("read config");
    assert!(reset.contains("port = 5000"));
}

#[test]
fn test_config_show_without_file_uses_defaults() {
    let home = tempfile::tempdir().expect("tempdir");
    let output = transpo(home.path(), &["config", "show"]);

    assert!(output.status.success());
    let shown = stdout(&output);
    assert!(shown.contains("not found, using defaults"));
    assert!(shown.contains("port=5000"));
}

#[test]
fn test_malformed_config_exit_code() {
    let home = tempfile::tempdir().expect("tempdir");
    let config_path = home.path().join("broken.toml");
    std::fs::write(&config_path, "[server\nport =").expect("write config");

    let output = transpo(
        home.path(),
        &["--config", config_path.to_str().unwrap(), "config", "show"],
    );
    assert_eq!(output.status.code(), Some(3));
    assert!(stderr(&output).contains("Failed to parse config"));
}

#[test]
fn test_completions_generate() {
    let home = tempfile::tempdir().expect("tempdir");
    let output = transpo(home.path(), &["completions", "bash"]);

    assert!(output.status.success());
    assert!(stdout(&output).contains("transpo"));
}
