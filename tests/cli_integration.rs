//! Integration tests for the eridu binary
//!
//! These tests drive the compiled CLI end to end:
//! - Loading catalogs from disk
//! - Generating and ranking teams
//! - Empty results and input errors
//! - Drive-disk summaries and config lookup

use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};

use serde_json::Value;
use tempfile::TempDir;

/// Helper to run eridu inside an isolated ERIDU_DIR with an explicit config
fn run_eridu(env_dir: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_eridu"))
        .env("ERIDU_DIR", env_dir)
        .env_remove("ERIDU_CONFIG")
        .env_remove("RUST_LOG")
        .arg("--config")
        .arg(env_dir.join("eridu.yaml"))
        .args(args)
        .output()
        .expect("Failed to execute eridu")
}

fn stdout_json(output: &Output) -> Value {
    assert!(
        output.status.success(),
        "eridu failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    serde_json::from_slice(&output.stdout).expect("stdout is not JSON")
}

fn agent_json(name: &str, attribute: &str, specialty: &str, faction: &str, tier: i32) -> String {
    format!(
        r#"{{"Agent": "{name}", "Attribute": "{attribute}", "Specialty": "{specialty}", "Faction": "{faction}",
            "Tier": {tier}, "fourPieceDriveDisk": "{name} Four", "twoPieceDriveDisk": "Shared Two"}}"#
    )
}

/// Helper to setup an environment with a config file and a catalog file
fn setup_test_env(config: &str, agents: &[String]) -> (TempDir, PathBuf) {
    let temp = TempDir::new().unwrap();
    let catalog = temp.path().join("characters.json");
    fs::write(&catalog, format!("[{}]", agents.join(",\n"))).unwrap();
    fs::write(
        temp.path().join("eridu.yaml"),
        format!("catalog: {}\n{}", catalog.display(), config),
    )
    .unwrap();
    (temp, catalog)
}

fn four_distinct_agents() -> Vec<String> {
    vec![
        agent_json("Alpha", "Fire", "Attack", "F1", 1),
        agent_json("Bravo", "Ice", "Stun", "F2", 1),
        agent_json("Charlie", "Ether", "Support", "F3", 1),
        agent_json("Delta", "Electric", "Defense", "F4", 1),
    ]
}

fn team_names(team: &Value) -> Vec<String> {
    team["members"]
        .as_array()
        .unwrap()
        .iter()
        .map(|m| m["Agent"].as_str().unwrap().to_string())
        .collect()
}

#[test]
fn test_generate_ranks_all_combinations() {
    let (temp, _) = setup_test_env("", &four_distinct_agents());

    let output = run_eridu(temp.path(), &["generate", "-o", "json"]);
    let json = stdout_json(&output);

    assert_eq!(json["total"], 4);
    let teams = json["teams"].as_array().unwrap();
    assert_eq!(teams.len(), 4);
    for (i, team) in teams.iter().enumerate() {
        assert_eq!(team["rank"], i + 1);
        assert_eq!(team["score"], 6);
        assert_eq!(team["breakdown"]["base"], 6);
    }
    assert_eq!(team_names(&teams[0]), vec!["Alpha", "Bravo", "Charlie"]);
    assert_eq!(team_names(&teams[3]), vec!["Bravo", "Charlie", "Delta"]);
}

#[test]
fn test_generate_uniform_team_score() {
    let agents = vec![
        agent_json("Miyabi", "Ice", "Anomaly", "Section 6", 1),
        agent_json("Soukaku", "Ice", "Support", "Section 6", 2),
        agent_json("Extra", "Ice", "Attack", "Section 6", 3),
    ];
    let (temp, _) = setup_test_env("", &agents);

    let output = run_eridu(temp.path(), &["generate", "-a", "Autofill", "-s", "Autofill", "-o", "json"]);
    let json = stdout_json(&output);

    assert_eq!(json["total"], 1);
    assert_eq!(json["teams"][0]["score"], 13);
}

#[test]
fn test_generate_too_few_after_filter() {
    let agents = vec![
        agent_json("Koleda", "Fire", "Stun", "Belobog", 1),
        agent_json("Ben", "Fire", "Defense", "Belobog", 3),
        agent_json("Ellen", "Ice", "Attack", "Victoria", 1),
        agent_json("Lycaon", "Ice", "Stun", "Victoria", 1),
    ];
    let (temp, _) = setup_test_env("", &agents);

    let output = run_eridu(temp.path(), &["generate", "-a", "Fire", "-s", "Autofill", "-o", "json"]);
    let json = stdout_json(&output);
    assert_eq!(json["total"], 0);

    let output = run_eridu(temp.path(), &["generate", "-a", "Fire", "-o", "text"]);
    assert!(output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("No teams found with the selected criteria"));
}

#[test]
fn test_generate_relaxed_mode_ignores_partial_selection() {
    let (temp, _) = setup_test_env("", &four_distinct_agents());

    let strict = stdout_json(&run_eridu(temp.path(), &["generate", "-a", "Fire,Ice,Ether", "-o", "json"]));
    assert_eq!(strict["total"], 1);

    let relaxed = stdout_json(&run_eridu(temp.path(), &["generate", "-a", "Fire", "--relaxed", "-o", "json"]));
    assert_eq!(relaxed["total"], 4);
}

#[test]
fn test_generate_limit_and_summary() {
    let (temp, _) = setup_test_env("generator:\n  limit: 2\n", &four_distinct_agents());

    let json = stdout_json(&run_eridu(temp.path(), &["generate", "-o", "json"]));
    assert_eq!(json["total"], 4);
    assert_eq!(json["teams"].as_array().unwrap().len(), 2);

    let output = run_eridu(temp.path(), &["generate", "--limit", "0", "-o", "text"]);
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Rank 4"));
    assert!(stdout.contains("Successfully generated 4 teams"));
}

#[test]
fn test_generate_from_collection() {
    let (temp, _) = setup_test_env("collection: [Alpha, Charlie, Delta]\n", &four_distinct_agents());

    let json = stdout_json(&run_eridu(temp.path(), &["generate", "--collection", "-o", "json"]));
    assert_eq!(json["total"], 1);
    assert_eq!(team_names(&json["teams"][0]), vec!["Alpha", "Charlie", "Delta"]);
}

#[test]
fn test_too_many_attributes_rejected() {
    let (temp, _) = setup_test_env("", &four_distinct_agents());

    let output = run_eridu(temp.path(), &["generate", "-a", "Fire,Ice,Ether,Physical"]);
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("up to 3 attributes"));
}

#[test]
fn test_duplicate_catalog_entry_rejected() {
    let agents = vec![
        agent_json("Anby", "Electric", "Stun", "Cunning Hares", 2),
        agent_json("Anby", "Electric", "Stun", "Cunning Hares", 2),
        agent_json("Nicole", "Ether", "Support", "Cunning Hares", 2),
    ];
    let (temp, _) = setup_test_env("", &agents);

    let output = run_eridu(temp.path(), &["generate", "-o", "json"]);
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Duplicate agent 'Anby'"));
}

#[test]
fn test_agents_show_builtin() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("eridu.yaml"), "log_level: info\n").unwrap();

    let json = stdout_json(&run_eridu(temp.path(), &["agents", "show", "ellen", "-o", "json"]));
    assert_eq!(json["Agent"], "Ellen");
    assert_eq!(json["Attribute"], "Ice");

    let output = run_eridu(temp.path(), &["agents", "show", "Nobody"]);
    assert!(!output.status.success());

    assert!(temp.path().join("logs").join("eridu.log").exists());
}

#[test]
fn test_agents_list_search() {
    let (temp, _) = setup_test_env("", &four_distinct_agents());

    let json = stdout_json(&run_eridu(temp.path(), &["agents", "list", "ice", "-o", "json"]));
    let agents = json.as_array().unwrap();
    assert_eq!(agents.len(), 1);
    assert_eq!(agents[0]["Agent"], "Bravo");
}

#[test]
fn test_disks_for_explicit_team() {
    let (temp, _) = setup_test_env("", &four_distinct_agents());

    let json = stdout_json(&run_eridu(
        temp.path(),
        &["disks", "--team", "Alpha, Bravo, Charlie", "-o", "json"],
    ));

    assert_eq!(json["teams"][0], serde_json::json!(["Alpha", "Bravo", "Charlie"]));
    assert_eq!(json["pieces"]["Shared Two"], 6);
    assert_eq!(json["pieces"]["Alpha Four"], 4);

    let output = run_eridu(temp.path(), &["disks", "--team", "Alpha,Alpha,Bravo"]);
    assert!(!output.status.success());
}

#[test]
fn test_disks_for_top_generated_teams() {
    let (temp, _) = setup_test_env("", &four_distinct_agents());

    let json = stdout_json(&run_eridu(temp.path(), &["disks", "--top", "2", "-o", "json"]));

    let teams = json["teams"].as_array().unwrap();
    assert_eq!(teams.len(), 2);
    assert_eq!(teams[0], serde_json::json!(["Alpha", "Bravo", "Charlie"]));
    assert_eq!(teams[1], serde_json::json!(["Alpha", "Bravo", "Delta"]));

    // two teams of three, each member needing a four-piece and a two-piece set
    let pieces = json["pieces"].as_object().unwrap();
    let total: u64 = pieces.values().map(|v| v.as_u64().unwrap()).sum();
    assert_eq!(total, 2 * 18);
    assert_eq!(pieces["Shared Two"], 12);
    assert_eq!(pieces["Alpha Four"], 8);
    assert_eq!(pieces["Delta Four"], 4);
}

#[test]
fn test_disks_top_zero_rejected() {
    let (temp, _) = setup_test_env("", &four_distinct_agents());

    let output = run_eridu(temp.path(), &["disks", "--top", "0", "-o", "text"]);
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("--top must be at least 1"));
    assert!(!stderr.contains("No teams found"));
}

#[test]
fn test_config_get() {
    let (temp, catalog) = setup_test_env("generator:\n  limit: 7\n", &four_distinct_agents());

    let output = run_eridu(temp.path(), &["config", "get", "generator.limit"]);
    assert_eq!(String::from_utf8_lossy(&output.stdout).trim(), "7");

    let output = run_eridu(temp.path(), &["config", "get", "catalog"]);
    assert_eq!(String::from_utf8_lossy(&output.stdout).trim(), catalog.display().to_string());

    let output = run_eridu(temp.path(), &["config", "get", "no.such.key"]);
    assert!(!output.status.success());
}
