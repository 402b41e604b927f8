use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn trunkline(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("trunkline").unwrap();
    cmd.current_dir(dir.path());
    cmd
}

fn init_route(dir: &TempDir) {
    trunkline(dir)
        .args([
            "init",
            "route.json",
            "--phone-number",
            "077XXXXXXX",
            "--context",
            "from-internal",
        ])
        .assert()
        .success();
}

fn route_json(dir: &TempDir) -> serde_json::Value {
    let data = std::fs::read_to_string(dir.path().join("route.json")).unwrap();
    serde_json::from_str(&data).unwrap()
}

// ---------------------------------------------------------------------------
// trunkline init
// ---------------------------------------------------------------------------

#[test]
fn init_creates_document() {
    let dir = TempDir::new().unwrap();
    init_route(&dir);

    let doc = route_json(&dir);
    assert_eq!(doc["phoneNumber"], "077XXXXXXX");
    assert_eq!(doc["context"], "from-internal");
    assert_eq!(doc["applications"], serde_json::json!([]));
}

#[test]
fn init_refuses_to_overwrite() {
    let dir = TempDir::new().unwrap();
    init_route(&dir);

    trunkline(&dir)
        .args([
            "init",
            "route.json",
            "--phone-number",
            "x",
            "--context",
            "y",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("already exists"));
}

// ---------------------------------------------------------------------------
// trunkline add / show
// ---------------------------------------------------------------------------

#[test]
fn add_dial_and_show() {
    let dir = TempDir::new().unwrap();
    init_route(&dir);

    trunkline(&dir)
        .args(["add", "route.json", "dial"])
        .assert()
        .success();
    trunkline(&dir)
        .args(["set", "route.json", "--at", "1", "--trunk", "trunk1"])
        .assert()
        .success();

    trunkline(&dir)
        .args(["show", "route.json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("OutboundDial"))
        .stdout(predicate::str::contains("PJSIP/${EXTEN}@trunk1"));
}

#[test]
fn add_rejects_unknown_type() {
    let dir = TempDir::new().unwrap();
    init_route(&dir);

    trunkline(&dir)
        .args(["add", "route.json", "voicemail"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown application type"));
}

#[test]
fn templates_lists_both_actions() {
    let dir = TempDir::new().unwrap();
    trunkline(&dir)
        .arg("templates")
        .assert()
        .success()
        .stdout(predicate::str::contains("Outbound dial"))
        .stdout(predicate::str::contains("Custom application"));
}

// ---------------------------------------------------------------------------
// Caller-ID override derivation
// ---------------------------------------------------------------------------

#[test]
fn caller_id_inserts_derived_override() {
    let dir = TempDir::new().unwrap();
    init_route(&dir);

    trunkline(&dir)
        .args(["add", "route.json", "dial"])
        .assert()
        .success();
    trunkline(&dir)
        .args([
            "set",
            "route.json",
            "--at",
            "1",
            "--trunk",
            "trunk1",
            "--caller-id",
            "0772000111",
        ])
        .assert()
        .success();

    trunkline(&dir)
        .args(["show", "route.json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("derived"))
        .stdout(predicate::str::contains(
            "Set CALLERID(all)=\"0772000111 <0772000111>\"",
        ));

    let doc = route_json(&dir);
    let applications = doc["applications"].as_array().unwrap();
    assert_eq!(applications.len(), 2);
    assert_eq!(applications[0]["type"], "Custom");
    assert_eq!(applications[0]["priority"], 1);
    assert_eq!(applications[1]["type"], "OutboundDial");
    assert_eq!(applications[1]["priority"], 2);
}

#[test]
fn clearing_caller_id_removes_override() {
    let dir = TempDir::new().unwrap();
    init_route(&dir);

    trunkline(&dir)
        .args(["add", "route.json", "dial"])
        .assert()
        .success();
    trunkline(&dir)
        .args(["set", "route.json", "--at", "1", "--caller-id", "0772000111"])
        .assert()
        .success();
    // The dial instruction is now at position 2, after its override.
    trunkline(&dir)
        .args(["set", "route.json", "--at", "2", "--caller-id", ""])
        .assert()
        .success();

    let doc = route_json(&dir);
    let applications = doc["applications"].as_array().unwrap();
    assert_eq!(applications.len(), 1);
    assert_eq!(applications[0]["type"], "OutboundDial");
    assert_eq!(applications[0]["priority"], 1);
}

#[test]
fn editing_caller_id_updates_override_in_place() {
    let dir = TempDir::new().unwrap();
    init_route(&dir);

    trunkline(&dir)
        .args(["add", "route.json", "dial"])
        .assert()
        .success();
    trunkline(&dir)
        .args(["set", "route.json", "--at", "1", "--caller-id", "0772000111"])
        .assert()
        .success();
    trunkline(&dir)
        .args(["set", "route.json", "--at", "2", "--caller-id", "0772999999"])
        .assert()
        .success();

    let doc = route_json(&dir);
    let applications = doc["applications"].as_array().unwrap();
    assert_eq!(applications.len(), 2, "no duplicate override");
    assert_eq!(
        applications[0]["settings"]["arguments"],
        "CALLERID(all)=\"0772999999 <0772999999>\""
    );
}

// ---------------------------------------------------------------------------
// trunkline move / remove
// ---------------------------------------------------------------------------

#[test]
fn move_swaps_instruction_order() {
    let dir = TempDir::new().unwrap();
    init_route(&dir);

    trunkline(&dir)
        .args(["add", "route.json", "dial"])
        .assert()
        .success();
    trunkline(&dir)
        .args(["add", "route.json", "custom"])
        .assert()
        .success();
    trunkline(&dir)
        .args(["move", "route.json", "1", "2"])
        .assert()
        .success();

    let doc = route_json(&dir);
    let applications = doc["applications"].as_array().unwrap();
    assert_eq!(applications[0]["type"], "Custom");
    assert_eq!(applications[0]["priority"], 1);
    assert_eq!(applications[1]["type"], "OutboundDial");
    assert_eq!(applications[1]["priority"], 2);
}

#[test]
fn remove_trigger_removes_override_too() {
    let dir = TempDir::new().unwrap();
    init_route(&dir);

    trunkline(&dir)
        .args(["add", "route.json", "dial"])
        .assert()
        .success();
    trunkline(&dir)
        .args(["set", "route.json", "--at", "1", "--caller-id", "0772000111"])
        .assert()
        .success();
    trunkline(&dir)
        .args(["remove", "route.json", "--at", "2"])
        .assert()
        .success();

    let doc = route_json(&dir);
    assert_eq!(doc["applications"], serde_json::json!([]));
}

#[test]
fn out_of_range_position_fails() {
    let dir = TempDir::new().unwrap();
    init_route(&dir);

    trunkline(&dir)
        .args(["remove", "route.json", "--at", "1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("out of range"));
}

// ---------------------------------------------------------------------------
// trunkline payload / preview
// ---------------------------------------------------------------------------

#[test]
fn payload_contains_voice_extensions() {
    let dir = TempDir::new().unwrap();
    init_route(&dir);

    trunkline(&dir)
        .args(["add", "route.json", "dial"])
        .assert()
        .success();
    trunkline(&dir)
        .args([
            "set",
            "route.json",
            "--at",
            "1",
            "--trunk",
            "trunk1",
            "--caller-id",
            "0772000111",
        ])
        .assert()
        .success();

    let output = trunkline(&dir)
        .args(["payload", "route.json"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let payload: serde_json::Value = serde_json::from_slice(&output).unwrap();

    assert_eq!(payload["phoneNumber"], "077XXXXXXX");
    let extensions = payload["voiceExtensions"].as_array().unwrap();
    assert_eq!(extensions.len(), 2);
    assert_eq!(extensions[0]["app"], "Set");
    assert_eq!(
        extensions[0]["appdata"],
        "CALLERID(all)=\"0772000111 <0772000111>\""
    );
    assert_eq!(extensions[1]["app"], "Dial");
    assert_eq!(extensions[1]["appdata"], "PJSIP/${EXTEN}@trunk1");
}

#[test]
fn preview_prints_dialplan_lines() {
    let dir = TempDir::new().unwrap();
    init_route(&dir);

    trunkline(&dir)
        .args(["add", "route.json", "dial"])
        .assert()
        .success();
    trunkline(&dir)
        .args([
            "set", "route.json", "--at", "1", "--trunk", "trunk1", "--prefix", "9",
        ])
        .assert()
        .success();

    trunkline(&dir)
        .args(["preview", "route.json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Dial"))
        .stdout(predicate::str::contains("PJSIP/9${EXTEN}@trunk1"));
}

// ---------------------------------------------------------------------------
// Reference data
// ---------------------------------------------------------------------------

#[test]
fn show_decorates_trunk_names_from_reference_data() {
    let dir = TempDir::new().unwrap();
    init_route(&dir);

    std::fs::write(
        dir.path().join("ref.json"),
        serde_json::json!({
            "trunks": [{ "id": "trunk1", "name": "Carrier A" }],
            "dids": [{ "did": "0772000111", "label": "Support" }]
        })
        .to_string(),
    )
    .unwrap();

    trunkline(&dir)
        .args(["add", "route.json", "dial"])
        .assert()
        .success();
    trunkline(&dir)
        .args(["set", "route.json", "--at", "1", "--trunk", "trunk1"])
        .assert()
        .success();

    trunkline(&dir)
        .args(["show", "route.json", "--ref", "ref.json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Carrier A (trunk1)"));
}

#[test]
fn unknown_caller_id_warns_but_succeeds() {
    let dir = TempDir::new().unwrap();
    init_route(&dir);

    std::fs::write(
        dir.path().join("ref.json"),
        serde_json::json!({
            "dids": [{ "did": "0772000111", "label": "Support" }]
        })
        .to_string(),
    )
    .unwrap();

    trunkline(&dir)
        .args(["add", "route.json", "dial"])
        .assert()
        .success();
    trunkline(&dir)
        .args([
            "set",
            "route.json",
            "--at",
            "1",
            "--caller-id",
            "0000000000",
            "--ref",
            "ref.json",
        ])
        .assert()
        .success()
        .stderr(predicate::str::contains("not a known DID"));
}
