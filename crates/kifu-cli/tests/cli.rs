//! CLI integration tests for kifu

use assert_cmd::prelude::*;
use predicates::str::contains;
use std::fs;
use std::path::Path;
use std::process::Command;
use tempfile::tempdir;

const DEMO: &str = r#"
moves = ["2433", "3221", "022"]

[start]
preset = "empty"

[[start.pieces]]
square = "24"
side = "black"
kind = "G"

[[start.pieces]]
square = "32"
side = "white"
kind = "K"

[start.hands.black]
G = 1
"#;

fn golden(name: &str) -> String {
    let path = Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("../kifu-core/tests/testdata")
        .join(format!("{name}.golden.kif"));
    fs::read_to_string(&path).unwrap()
}

fn kifu(dir: &Path) -> Command {
    let mut cmd = Command::cargo_bin("kifu").unwrap();
    // ./kifu.toml を拾わないように一時ディレクトリで動かす
    cmd.current_dir(dir).env_remove("RUST_LOG");
    cmd
}

#[test]
fn render_to_file_matches_golden() {
    let td = tempdir().unwrap();
    let problem = td.path().join("demo.toml");
    fs::write(&problem, DEMO).unwrap();
    let out = td.path().join("demo.kif");

    kifu(td.path())
        .arg("render")
        .arg(&problem)
        .arg("--ended-at")
        .arg("2000/01/01 00:00:00")
        .arg("--out")
        .arg(&out)
        .assert()
        .success();

    assert_eq!(fs::read_to_string(&out).unwrap(), golden("tsume_demo"));
}

#[test]
fn render_to_stdout_with_header_override() {
    let td = tempdir().unwrap();
    let problem = td.path().join("demo.toml");
    fs::write(&problem, DEMO).unwrap();

    let output = kifu(td.path())
        .args(["render", "demo.toml", "--header", "# custom"])
        .args(["--ended-at", "2000/01/01 00:00:00"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    let expected = golden("tsume_demo").replacen(
        "# ----  ANKIF向け / 自作詰将棋メーカー by TUI  ----",
        "# custom",
        1,
    );
    assert_eq!(stdout, expected);
}

#[test]
fn config_file_sets_seconds_per_move() {
    let td = tempdir().unwrap();
    fs::write(td.path().join("demo.toml"), DEMO).unwrap();
    fs::write(td.path().join("kifu.toml"), "[kif]\nseconds_per_move = 2\n").unwrap();

    kifu(td.path())
        .args(["render", "demo.toml", "--ended-at", "2000/01/01 00:00:00"])
        .assert()
        .success()
        .stdout(contains("   3 ２二金打 (0:02/00:00:06)\n"));
}

#[test]
fn config_with_unknown_key_fails() {
    let td = tempdir().unwrap();
    fs::write(td.path().join("demo.toml"), DEMO).unwrap();
    fs::write(td.path().join("bad.toml"), "[kif]\nheader = \"x\"\n").unwrap();

    kifu(td.path())
        .args(["--config", "bad.toml", "check", "demo.toml"])
        .assert()
        .failure()
        .stderr(contains("invalid config"));
}

#[test]
fn check_lists_moves() {
    let td = tempdir().unwrap();
    fs::write(td.path().join("demo.toml"), DEMO).unwrap();

    kifu(td.path())
        .args(["check", "demo.toml"])
        .assert()
        .success()
        .stdout(contains("  1 先手 G24-33\n"))
        .stdout(contains("  2 後手 K32-21\n"))
        .stdout(contains("  3 先手 G*22\n"))
        .stdout(contains("ok: 3 moves"));
}

#[test]
fn check_reports_illegal_move_index() {
    let td = tempdir().unwrap();
    let problem = td.path().join("nifu.toml");
    fs::write(
        &problem,
        r#"
moves = ["055"]

[[start.pieces]]
square = "57"
side = "black"
kind = "P"

[start.hands.black]
P = 1
"#,
    )
    .unwrap();

    kifu(td.path())
        .args(["check", "nifu.toml"])
        .assert()
        .failure()
        .stderr(contains("move 1 (\"055\") rejected"))
        .stderr(contains("nothing can be dropped on 55"));
}

#[test]
fn check_reports_rule_message() {
    let td = tempdir().unwrap();
    fs::write(
        td.path().join("dead_end.toml"),
        r#"
moves = ["011"]

[start.hands.black]
N = 1
"#,
    )
    .unwrap();

    kifu(td.path())
        .args(["check", "dead_end.toml"])
        .assert()
        .failure()
        .stderr(contains("move 1"))
        .stderr(contains("cannot drop N on 11"));
}

#[test]
fn state_prints_json() {
    let td = tempdir().unwrap();
    fs::write(td.path().join("demo.toml"), DEMO).unwrap();

    let output = kifu(td.path()).args(["state", "demo.toml"]).output().unwrap();
    assert!(output.status.success());

    let state: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(state["side_to_move"], "white");
    assert_eq!(state["moves"].as_array().unwrap().len(), 3);
    assert_eq!(state["hands"]["black"], serde_json::json!({}));
}

#[test]
fn bad_ended_at_is_rejected() {
    let td = tempdir().unwrap();
    fs::write(td.path().join("demo.toml"), DEMO).unwrap();

    kifu(td.path())
        .args(["render", "demo.toml", "--ended-at", "2000-01-01"])
        .assert()
        .failure();
}
