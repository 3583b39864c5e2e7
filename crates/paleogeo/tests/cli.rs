use std::io::Write;
use std::path::PathBuf;

use assert_cmd::Command;
use assert_fs::TempDir;
use assert_fs::prelude::*;
use flate2::Compression;
use flate2::write::GzEncoder;
use serde_json::Value;

fn data(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests/data")
        .join(name)
}

fn paleogeo() -> Command {
    let mut cmd = Command::cargo_bin("paleogeo").unwrap();
    cmd.arg("--no-color");
    cmd
}

/// Run to success and parse stdout as JSON
fn run_json(cmd: &mut Command) -> Value {
    let output = cmd.output().unwrap();
    assert!(
        output.status.success(),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    serde_json::from_slice(&output.stdout).unwrap()
}

fn assert_close(actual: &Value, expected: f64) {
    let actual = actual.as_f64().unwrap();
    assert!(
        (actual - expected).abs() < 1e-9,
        "expected {expected}, got {actual}"
    );
}

#[test]
fn plates_lists_every_member() {
    let json = run_json(paleogeo().arg("plates").arg(data("laurentia.gpml")).args(["-f", "json"]));

    let features = json["features"].as_array().unwrap();
    assert_eq!(features.len(), 3);
    assert_eq!(features[1]["plate_id"], 202);
    assert_eq!(features[2]["shape"], "Suture");
    assert_eq!(json["plates"]["101"], 2);
    assert_eq!(json["plates"]["202"], 1);
}

#[test]
fn plates_text_table() {
    let output = paleogeo()
        .arg("plates")
        .arg(data("laurentia.gpml"))
        .output()
        .unwrap();
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Craton"));
    assert!(stdout.contains("202"));
    assert!(stdout.contains("3 feature(s) on 2 plate(s)"));
}

#[test]
fn rotate_about_north_pole() {
    let json = run_json(
        paleogeo()
            .arg("rotate")
            .arg(data("laurentia.gpml"))
            .args(["-p", "101", "--euler", "90,0,90", "-f", "json"]),
    );

    let features = json["features"].as_array().unwrap();
    assert_eq!(features.len(), 2);
    assert_eq!(features[0]["index"], 0);
    assert_eq!(features[0]["container"], "outlineOf");
    assert_eq!(features[1]["index"], 2);
    assert_eq!(features[1]["container"], "centerLineOf");

    // rings are [lon, lat] pairs
    let ring = features[0]["rings"][0].as_array().unwrap();
    let expected = [[110.0, 10.0], [115.0, 15.0], [120.0, 12.0]];
    assert_eq!(ring.len(), expected.len());
    for (vertex, [lon, lat]) in ring.iter().zip(expected) {
        assert_close(&vertex[0], lon);
        assert_close(&vertex[1], lat);
    }

    let line = features[1]["rings"][0].as_array().unwrap();
    assert_close(&line[0][0], -10.0);
    assert_close(&line[1][0], -5.0);

    assert_eq!(json["reverse"], false);
    assert_eq!(json["style"]["edgecolor"], "k");
    assert_eq!(json["style"]["facecolor"], "none");
}

#[test]
fn rotate_reverse_and_style() {
    let json = run_json(paleogeo().arg("rotate").arg(data("laurentia.gpml")).args([
        "-p",
        "202",
        "--reverse",
        "--facecolor",
        "tab:orange",
        "--alpha",
        "0.5",
        "-f",
        "json",
    ]));

    let ring = json["features"][0]["rings"][0].as_array().unwrap();
    assert_close(&ring[0][0], 145.0);
    assert_close(&ring[0][1], -40.0);
    assert_close(&ring[2][0], 140.0);

    assert_eq!(json["reverse"], true);
    assert_eq!(json["style"]["facecolor"], "tab:orange");
    assert_close(&json["style"]["alpha"], 0.5);
}

#[test]
fn rotation_file_runs_before_euler_stages() {
    let json = run_json(
        paleogeo()
            .arg("rotate")
            .arg(data("laurentia.gpml"))
            .arg("--rotations")
            .arg(data("rotations.toml"))
            .args(["-p", "101", "--euler", "90,0,45", "-f", "json"]),
    );

    assert_eq!(json["rotation"].as_array().unwrap().len(), 2);
    let ring = json["features"][0]["rings"][0].as_array().unwrap();
    assert_close(&ring[0][0], 110.0);
}

#[test]
fn rotate_reads_compressed_collections() {
    let dir = TempDir::new().unwrap();
    let compressed = dir.child("laurentia.gpmlz");

    let xml = std::fs::read(data("laurentia.gpml")).unwrap();
    let mut encoder = GzEncoder::new(Vec::new(), Compression::default());
    encoder.write_all(&xml).unwrap();
    compressed.write_binary(&encoder.finish().unwrap()).unwrap();

    let json = run_json(
        paleogeo()
            .arg("rotate")
            .arg(compressed.path())
            .args(["-p", "202", "-f", "json"]),
    );
    assert_eq!(json["features"][0]["plate_id"], 202);
}

#[test]
fn rotate_unknown_plate_is_empty() {
    let output = paleogeo()
        .env("RUST_LOG", "warn")
        .arg("rotate")
        .arg(data("laurentia.gpml"))
        .args(["-p", "555", "-f", "json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["features"].as_array().unwrap().len(), 0);
    assert!(String::from_utf8_lossy(&output.stderr).contains("No features found"));
}

#[test]
fn rotate_missing_file_fails() {
    let output = paleogeo()
        .args(["rotate", "does-not-exist.gpml", "-p", "101"])
        .output()
        .unwrap();
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("Failed to read file"));
}

#[test]
fn rotate_rejects_malformed_euler() {
    paleogeo()
        .arg("rotate")
        .arg(data("laurentia.gpml"))
        .args(["-p", "101", "--euler", "91,0,10"])
        .assert()
        .failure();
}

#[test]
fn pole_carries_a95() {
    let json = run_json(paleogeo().args([
        "pole", "--lon", "120", "--lat", "-60", "--a95", "4.2", "--euler", "90,0,90", "-f",
        "json",
    ]));

    assert_close(&json["pole"]["lon"], -150.0);
    assert_close(&json["pole"]["lat"], -60.0);
    assert_close(&json["pole"]["a95"], 4.2);
    assert_eq!(json["style"]["marker"], "o");
    assert_eq!(json["style"]["color"], "r");
    assert_close(&json["style"]["markersize"], 20.0);
    assert_close(&json["style"]["alpha"], 0.6);
}

#[test]
fn pole_without_stages_is_unchanged() {
    let json = run_json(paleogeo().args([
        "pole", "--lon", "33.5", "--lat", "71", "--a95", "8", "-f", "json",
    ]));
    assert_eq!(json["pole"]["lon"], 33.5);
    assert_eq!(json["pole"]["lat"], 71.0);
}

#[test]
fn kent_rotates_directions() {
    let json = run_json(
        paleogeo()
            .arg("kent")
            .arg(data("kent.json"))
            .args(["--euler", "90,0,20", "--lower", "-f", "json"]),
    );

    let mean = &json["mean"];
    assert_close(&mean["dec"], 10.0);
    assert_close(&mean["inc"], 45.0);
    assert_close(&mean["Zdec"], 100.0);
    assert_close(&mean["Edec"], 190.0);
    assert_eq!(mean["Zeta"], 6.5);
    assert_eq!(mean["Eta"], 3.25);

    assert_eq!(json["style"]["lower"], true);
    assert_eq!(json["style"]["edgecolor"], "k");
    assert_eq!(json["style"]["marker"], "o");
}

#[test]
fn kent_rejects_incomplete_record() {
    let dir = TempDir::new().unwrap();
    let record = dir.child("kent.json");
    record.write_str(r#"{"dec": 10.0, "inc": 20.0}"#).unwrap();

    paleogeo()
        .arg("kent")
        .arg(record.path())
        .assert()
        .failure();
}
