//! CLI integration tests for the draftpick binary.

use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::json;
use std::fs;
use tempfile::TempDir;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn draftpick() -> Command {
    let mut cmd = Command::cargo_bin("draftpick").unwrap();
    // Keep the developer's environment out of config loading.
    for var in [
        "DRAFTPICK_PORT",
        "DRAFTPICK_HOST",
        "DRAFTPICK_LOG_LEVEL",
        "DRAFTPICK_LOG_FORMAT",
        "DRAFTPICK_PROVIDER",
        "DRAFTPICK_MAX_ROUNDS",
    ] {
        cmd.env_remove(var);
    }
    cmd
}

#[test]
fn test_cli_version() {
    draftpick()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("draftpick"));
}

#[test]
fn test_cli_help_lists_commands() {
    draftpick()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("serve"))
        .stdout(predicate::str::contains("recommend"))
        .stdout(predicate::str::contains("build"))
        .stdout(predicate::str::contains("config"))
        .stdout(predicate::str::contains("completions"));
}

#[test]
fn test_cli_recommend_help_shows_flags() {
    draftpick()
        .args(["recommend", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("--role"))
        .stdout(predicate::str::contains("--ally"))
        .stdout(predicate::str::contains("--enemy"))
        .stdout(predicate::str::contains("--provider"));
}

#[test]
fn test_cli_config_init_creates_file() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("draftpick.toml");

    draftpick()
        .args(["config", "init", "-o"])
        .arg(&config_path)
        .assert()
        .success()
        .stdout(predicate::str::contains("Configuration file created"));

    let content = fs::read_to_string(&config_path).unwrap();
    assert!(content.contains("[server]"));
    assert!(content.contains("[llm.gemini]"));
    assert!(content.contains("[recommend]"));
}

#[test]
fn test_cli_config_init_refuses_overwrite() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("draftpick.toml");
    fs::write(&config_path, "existing").unwrap();

    draftpick()
        .args(["config", "init", "-o"])
        .arg(&config_path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("--force"));

    assert_eq!(fs::read_to_string(&config_path).unwrap(), "existing");

    draftpick()
        .args(["config", "init", "--force", "-o"])
        .arg(&config_path)
        .assert()
        .success();
    assert!(fs::read_to_string(&config_path)
        .unwrap()
        .contains("[catalog]"));
}

#[test]
fn test_cli_completions_bash() {
    draftpick()
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("draftpick"));
}

#[test]
fn test_cli_recommend_rejects_unknown_provider() {
    draftpick()
        .args(["recommend", "--role", "Mid", "--provider", "claude"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("claude"));
}

#[test]
fn test_cli_build_unknown_champion() {
    let temp_dir = TempDir::new().unwrap();

    draftpick()
        .current_dir(temp_dir.path())
        .args(["build", "--champion", "Not A Champion", "--role", "Mid"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Champion ID not found"));
}

#[test]
fn test_cli_build_invalid_role() {
    let temp_dir = TempDir::new().unwrap();

    draftpick()
        .current_dir(temp_dir.path())
        .args(["build", "--champion", "Ahri", "--role", "Bottom"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid target role: Bottom"));
}

#[test]
fn test_cli_invalid_config_file() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("draftpick.toml");
    fs::write(&config_path, "[recommend]\nmax_rounds = 0\n").unwrap();

    draftpick()
        .args(["build", "--champion", "Ahri", "--role", "Mid", "-c"])
        .arg(&config_path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("max_rounds"));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_cli_recommend_json_against_mocks() {
    let upstream = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/versions.json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!(["14.24.1"])))
        .mount(&upstream)
        .await;
    Mock::given(method("GET"))
        .and(path("/cdn/14.24.1/data/en_US/champion.json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "version": "14.24.1",
            "data": {
                "Ahri": { "id": "Ahri", "key": "103", "name": "Ahri", "tags": ["Mage"] },
                "LeeSin": { "id": "LeeSin", "key": "64", "name": "Lee Sin", "tags": ["Fighter"] },
                "Zed": { "id": "Zed", "key": "238", "name": "Zed", "tags": ["Assassin"] }
            }
        })))
        .mount(&upstream)
        .await;
    Mock::given(method("GET"))
        .and(path("/champion/build"))
        .and(query_param("champion_id", "103"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "build_by_lane": {
                "Middle": {
                    "ban_rate": 0.04,
                    "build_lst": [{
                        "win_rate": 0.53,
                        "pick_rate": 0.1,
                        "item": { "build": [6655, 3020] },
                        "rune": { "main_build": [8112], "sub_build": [8226], "stat_build": [0, 0, 1] },
                        "spell": { "build": [4, 14] },
                        "skill": { "detail": [1, 3, 2, 1, 1, 4] }
                    }]
                }
            }
        })))
        .mount(&upstream)
        .await;
    Mock::given(method("POST"))
        .and(path("/v1/chat/completions"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "choices": [{ "message": { "role": "assistant", "content": "Champion 1: Ahri - charm picks" } }]
        })))
        .mount(&upstream)
        .await;

    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("draftpick.toml");
    let uri = upstream.uri();
    fs::write(
        &config_path,
        format!(
            r#"
[llm.openai]
base_url = "{uri}"
api_key_env = "DRAFTPICK_TEST_OPENAI_KEY"

[stats]
base_url = "{uri}"

[catalog]
base_url = "{uri}"

[recommend]
max_rounds = 2
"#
        ),
    )
    .unwrap();

    let output = draftpick()
        .env("DRAFTPICK_TEST_OPENAI_KEY", "sk-test")
        .args([
            "recommend",
            "--role",
            "Mid",
            "--ally",
            "Lee Sin:Jungle",
            "--enemy",
            "Zed",
            "--provider",
            "openai",
            "--json",
            "-c",
        ])
        .arg(&config_path)
        .output()
        .unwrap();

    assert!(
        output.status.success(),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["recommendations"][0]["name"], "Ahri");
    assert_eq!(json["explanations"][0], "charm picks");
    assert_eq!(json["builds"][0]["items"][0]["id"], "6655");
}
