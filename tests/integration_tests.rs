use std::path::Path;

use assert_cmd::Command;
use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use tempfile::TempDir;

/// Command isolated to a temporary store and log file.
fn cmd(dir: &Path) -> Command {
    let mut cmd = cargo_bin_cmd!("serptune");
    cmd.arg("--store")
        .arg(dir.join("store.json"))
        .arg("--log-file")
        .arg(dir.join("serptune.log"));
    cmd
}

fn saved_id(dir: &TempDir, name: &str, extra: &[&str]) -> String {
    let output = cmd(dir.path())
        .args(["--format", "json", "preset", "save", name])
        .args(extra)
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let report: serde_json::Value = serde_json::from_slice(&output).unwrap();
    report["preset"]["id"].as_str().unwrap().to_string()
}

#[test]
fn test_cli_show_text() {
    let dir = tempfile::tempdir().unwrap();
    cmd(dir.path())
        .args([
            "show",
            "https://www.google.com/search?q=rust&hl=ko&lr=-(lang_en|lang_fr)",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Korean (ko)"))
        .stdout(predicate::str::contains(
            "not English (lang_en) or French (lang_fr)",
        ))
        .stdout(predicate::str::contains("Advanced mode: yes"));
}

#[test]
fn test_cli_show_yaml() {
    let dir = tempfile::tempdir().unwrap();
    cmd(dir.path())
        .args([
            "--format",
            "yaml",
            "show",
            "https://www.google.com/search?q=rust&cr=countryUS%7CcountryCA",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("advanced: true"))
        .stdout(predicate::str::contains("- countryCA"));
}

#[test]
fn test_cli_non_google_page_is_informational() {
    let dir = tempfile::tempdir().unwrap();
    for command in ["show", "cycle", "reset"] {
        cmd(dir.path())
            .args([command, "https://example.com/search?q=rust"])
            .assert()
            .success()
            .stdout(predicate::str::is_empty())
            .stderr(predicate::str::contains("Not a Google search page"));
    }
}

#[test]
fn test_cli_invalid_url_fails() {
    let dir = tempfile::tempdir().unwrap();
    cmd(dir.path())
        .args(["show", "not a url"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid page address"));
}

#[test]
fn test_cli_set_keeps_unspecified_and_removes_empty() {
    let dir = tempfile::tempdir().unwrap();
    cmd(dir.path())
        .args([
            "set",
            "https://www.google.com/search?q=rust&hl=ko&gl=kr",
            "--gl",
            "",
            "--lr",
            "-lang_ja",
        ])
        .assert()
        .success()
        .stdout("https://www.google.com/search?q=rust&hl=ko&lr=-lang_ja\n");
}

#[test]
fn test_cli_reset() {
    let dir = tempfile::tempdir().unwrap();
    cmd(dir.path())
        .args(["reset", "https://www.google.com/search?hl=en&q=rust&cr=countryUS"])
        .assert()
        .success()
        .stdout("https://www.google.com/search?q=rust\n");
}

#[test]
fn test_cli_parse_and_encode() {
    let dir = tempfile::tempdir().unwrap();
    cmd(dir.path())
        .args(["parse", "-(lang_en|lang_fr)"])
        .assert()
        .success()
        .stdout(predicate::str::contains("values: lang_en, lang_fr"))
        .stdout(predicate::str::contains("exclude: yes"));

    cmd(dir.path())
        .args(["encode", "--exclude", "countryUS", "countryCA"])
        .assert()
        .success()
        .stdout("-(countryUS|countryCA)\n");
}

#[test]
fn test_cli_preset_save_rejects_blank_name() {
    let dir = tempfile::tempdir().unwrap();
    cmd(dir.path())
        .args(["preset", "save", "  ", "--hl", "en"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Preset name cannot be empty"));

    cmd(dir.path())
        .args(["preset", "list"])
        .assert()
        .success()
        .stdout("No presets saved\n");
}

#[test]
fn test_cli_cycle_through_presets() {
    let dir = tempfile::tempdir().unwrap();
    saved_id(&dir, "English", &["--hl", "en"]);
    saved_id(
        &dir,
        "French",
        &["--from-url", "https://www.google.com/search?q=x&hl=fr"],
    );

    let base = "https://www.google.com/search?q=rust";
    cmd(dir.path())
        .args(["cycle", base])
        .assert()
        .success()
        .stdout(format!("{base}&hl=en\n"))
        .stderr(predicate::str::contains("Preset: English"));

    cmd(dir.path())
        .args(["cycle", &format!("{base}&hl=en")])
        .assert()
        .success()
        .stdout(format!("{base}&hl=fr\n"));

    cmd(dir.path())
        .args(["cycle", &format!("{base}&hl=fr")])
        .assert()
        .success()
        .stdout(format!("{base}\n"))
        .stderr(predicate::str::contains("Preset: Default"));
}

#[test]
fn test_cli_preset_apply_and_delete() {
    let dir = tempfile::tempdir().unwrap();
    let id = saved_id(&dir, "Korea", &["--hl", "ko", "--gl", "kr"]);

    cmd(dir.path())
        .args(["preset", "apply", &id, "https://www.google.com/search?q=kimchi"])
        .assert()
        .success()
        .stdout("https://www.google.com/search?q=kimchi&hl=ko&gl=kr\n");

    cmd(dir.path())
        .args(["preset", "apply", "missing", "https://www.google.com/search?q=a"])
        .assert()
        .success()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("No preset with id missing"));

    cmd(dir.path())
        .args(["preset", "delete", &id])
        .assert()
        .success()
        .stderr(predicate::str::contains("Deleted preset"));

    cmd(dir.path())
        .args(["preset", "delete", &id])
        .assert()
        .success()
        .stderr(predicate::str::contains("No preset with id"));
}

#[test]
fn test_cli_favorite_toggle_and_catalog() {
    let dir = tempfile::tempdir().unwrap();
    cmd(dir.path())
        .args(["favorite", "toggle", "gl", "de"])
        .assert()
        .success()
        .stdout("Starred de on gl\n");

    cmd(dir.path())
        .args(["favorite", "list", "gl"])
        .assert()
        .success()
        .stdout("gl: us, kr, jp, de\n");

    cmd(dir.path())
        .args(["catalog", "gl"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("* us"))
        .stdout(predicate::str::contains("* de          Germany"));

    cmd(dir.path())
        .args(["favorite", "toggle", "gl", "de"])
        .assert()
        .success()
        .stdout("Unstarred de on gl\n");
}

#[test]
fn test_cli_message_protocol() {
    let dir = tempfile::tempdir().unwrap();
    let output = cmd(dir.path())
        .args(["message", "https://www.google.com/search?q=rust&lr=lang_ko"])
        .write_stdin(r#"{"action":"updateParams","hl":"en","gl":"us","lr":"","cr":""}"#)
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let reply: serde_json::Value = serde_json::from_slice(&output).unwrap();
    assert_eq!(reply["response"]["success"], true);
    assert_eq!(
        reply["url"],
        "https://www.google.com/search?q=rust&hl=en&gl=us"
    );

    cmd(dir.path())
        .args(["message", "https://www.google.com/search?q=rust"])
        .write_stdin(r#"{"action":"explode"}"#)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid page message"));
}

#[test]
fn test_cli_completions() {
    cargo_bin_cmd!("serptune")
        .args(["--completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("serptune"));
}

#[test]
fn test_cli_runs_when_log_file_cannot_be_created() {
    let dir = tempfile::tempdir().unwrap();
    let blocker = dir.path().join("not-a-dir");
    std::fs::write(&blocker, "").unwrap();

    cargo_bin_cmd!("serptune")
        .arg("--store")
        .arg(dir.path().join("store.json"))
        .arg("--log-file")
        .arg(blocker.join("serptune.log"))
        .args(["parse", "en"])
        .assert()
        .success()
        .stdout(predicate::str::contains("values: en"))
        .stderr(predicate::str::contains("file logging disabled"));
}

#[test]
fn test_cli_preset_save_requires_values() {
    let dir = tempfile::tempdir().unwrap();
    cmd(dir.path())
        .args(["preset", "save", "Empty"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Nothing to save"));

    cmd(dir.path())
        .args(["preset", "list"])
        .assert()
        .success()
        .stdout("No presets saved\n");
}
