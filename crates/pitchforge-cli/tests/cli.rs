use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::Value;
use tempfile::TempDir;

fn pitchforge(root: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("pitchforge").unwrap();
    cmd.arg("--root").arg(root.path());
    cmd
}

fn json_output(root: &TempDir, args: &[&str]) -> Value {
    let output = pitchforge(root)
        .args(args)
        .arg("--json")
        .output()
        .unwrap();
    assert!(
        output.status.success(),
        "command {args:?} failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    serde_json::from_slice(&output.stdout).unwrap()
}

fn create_retail_brief(root: &TempDir) -> String {
    let brief = json_output(
        root,
        &[
            "brief",
            "create",
            "--title",
            "Online store revamp",
            "--industry",
            "Retail",
            "--budget",
            "$50,000 - $100,000",
            "--objectives",
            "improve online sales performance",
            "--timeline",
            "2-3 months",
            "--submitted-by",
            "customer@example.com",
        ],
    );
    brief["id"].as_str().unwrap().to_string()
}

#[test]
fn init_seeds_catalog() {
    let root = TempDir::new().unwrap();
    pitchforge(&root)
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("Initialized PitchForge"))
        .stdout(predicate::str::contains("case studies"));
    assert!(root.path().join(".pitchforge/case-studies").is_dir());
}

#[test]
fn commands_require_init() {
    let root = TempDir::new().unwrap();
    pitchforge(&root)
        .args(["brief", "list"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("not initialized"));
}

#[test]
fn brief_create_and_list() {
    let root = TempDir::new().unwrap();
    pitchforge(&root).arg("init").assert().success();

    let id = create_retail_brief(&root);
    assert!(!id.is_empty());

    pitchforge(&root)
        .args(["brief", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Online store revamp"))
        .stdout(predicate::str::contains("Retail"));

    // Submitter filter
    let mine = json_output(
        &root,
        &["brief", "list", "--submitter", "customer@example.com"],
    );
    assert_eq!(mine.as_array().unwrap().len(), 1);
    let none = json_output(&root, &["brief", "list", "--submitter", "nobody"]);
    assert!(none.as_array().unwrap().is_empty());
}

#[test]
fn match_ranks_retail_case_study_first() {
    let root = TempDir::new().unwrap();
    pitchforge(&root).arg("init").assert().success();
    let id = create_retail_brief(&root);

    let ranked = json_output(&root, &["case-study", "match", &id]);
    let ranked = ranked.as_array().unwrap();
    assert!(!ranked.is_empty());

    // The Retail seed entry matches industry (40) plus one of three tags
    // (10) plus the fixed budget/timeline points (30).
    assert_eq!(ranked[0]["score"], 80);
    assert_eq!(ranked[0]["industry"], "Retail");
    // Descending order throughout.
    let scores: Vec<u64> = ranked.iter().map(|r| r["score"].as_u64().unwrap()).collect();
    let mut sorted = scores.clone();
    sorted.sort_by(|a, b| b.cmp(a));
    assert_eq!(scores, sorted);
}

#[test]
fn industries_and_tags_are_fixed_lists() {
    let root = TempDir::new().unwrap();
    let industries = json_output(&root, &["case-study", "industries"]);
    assert_eq!(industries.as_array().unwrap().len(), 11);
    assert_eq!(industries[0], "Technology");

    let tags = json_output(&root, &["case-study", "tags"]);
    assert_eq!(tags.as_array().unwrap().len(), 15);
    assert_eq!(tags[0], "e-commerce");
}

#[test]
fn pitch_happy_path_to_finalized() {
    let root = TempDir::new().unwrap();
    pitchforge(&root).arg("init").assert().success();
    let brief_id = create_retail_brief(&root);

    let pitch = json_output(
        &root,
        &[
            "pitch", "create", "--brief", &brief_id, "--author", "member@example.com",
        ],
    );
    let pitch_id = pitch["id"].as_str().unwrap().to_string();
    assert_eq!(pitch["status"], "draft");
    assert_eq!(pitch["version"], 1);
    assert_eq!(pitch["case_study_ids"].as_array().unwrap().len(), 3);
    let content = pitch["content"].as_str().unwrap();
    assert!(content.contains("## Relevant Case Studies"));
    assert!(content.contains("# Solution Pitch: Online store revamp"));

    for (cmd, expected) in [
        ("submit", "submitted"),
        ("approve", "approved"),
        ("finalize", "finalized"),
    ] {
        let out = json_output(&root, &["pitch", cmd, &pitch_id]);
        assert_eq!(out["status"], expected);
    }

    // Finalized is terminal.
    pitchforge(&root)
        .args(["pitch", "submit", &pitch_id])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid transition"));
}

#[test]
fn rejected_pitch_loops_back_with_feedback() {
    let root = TempDir::new().unwrap();
    pitchforge(&root).arg("init").assert().success();
    let brief_id = create_retail_brief(&root);

    let pitch = json_output(
        &root,
        &[
            "pitch", "create", "--brief", &brief_id, "--author", "member@example.com",
        ],
    );
    let pitch_id = pitch["id"].as_str().unwrap().to_string();

    json_output(&root, &["pitch", "submit", &pitch_id]);
    json_output(
        &root,
        &[
            "pitch",
            "reject",
            &pitch_id,
            "--feedback",
            "Please include a maintenance plan.",
        ],
    );

    let shown = json_output(&root, &["pitch", "show", &pitch_id]);
    assert_eq!(shown["status"], "rejected");
    assert_eq!(shown["feedback"], "Please include a maintenance plan.");

    let revised = json_output(&root, &["pitch", "revise", &pitch_id]);
    assert_eq!(revised["status"], "draft");
    assert_eq!(revised["version"], 2);

    // Draft cannot be approved directly.
    pitchforge(&root)
        .args(["pitch", "approve", &pitch_id])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid transition"));
}

#[test]
fn login_checks_mock_credentials() {
    let root = TempDir::new().unwrap();
    pitchforge(&root)
        .args(["login", "--email", "manager@example.com", "--password", "password"])
        .assert()
        .success()
        .stdout(predicate::str::contains("team_manager"));

    pitchforge(&root)
        .args(["login", "--email", "manager@example.com", "--password", "nope"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid credentials"));

    let members = json_output(&root, &["users", "--role", "team_member"]);
    assert_eq!(members.as_array().unwrap().len(), 1);
    assert_eq!(members[0]["email"], "member@example.com");
}

#[test]
fn pitch_ids_resolve_by_prefix() {
    let root = TempDir::new().unwrap();
    pitchforge(&root).arg("init").assert().success();
    let brief_id = create_retail_brief(&root);

    let pitch = json_output(
        &root,
        &[
            "pitch", "create", "--brief", &brief_id[..8], "--author", "member@example.com",
        ],
    );
    let pitch_id = pitch["id"].as_str().unwrap();
    assert_eq!(pitch["brief_id"].as_str().unwrap(), brief_id);

    let out = json_output(&root, &["pitch", "submit", &pitch_id[..8]]);
    assert_eq!(out["status"], "submitted");
}
