//! End-to-end tests for the `mazerun` binary.

use std::fs;
use std::path::PathBuf;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

const MAZE: &str = "\
#######
#.....#
#.###.#
#S###E#
#.###.#
#.....#
#######
";

/// A temporary directory holding one maze file.
struct TestEnv {
    _temp_dir: TempDir,
    maze_path: PathBuf,
}

impl TestEnv {
    fn new(contents: &str) -> Self {
        let temp_dir = TempDir::new().expect("create temp dir");
        let maze_path = temp_dir.path().join("maze.txt");
        fs::write(&maze_path, contents).expect("write maze");
        Self {
            _temp_dir: temp_dir,
            maze_path,
        }
    }

    fn cmd(&self) -> Command {
        let mut cmd = Command::cargo_bin("mazerun").expect("binary exists");
        cmd.arg(&self.maze_path);
        cmd
    }
}

#[test]
fn prints_score_and_tiles() {
    let env = TestEnv::new(MAZE);
    env.cmd()
        .assert()
        .success()
        .stdout("lowest score: 3008\ntiles on any best path: 16\n");
}

#[test]
fn facing_flag_changes_the_answer() {
    let env = TestEnv::new(MAZE);
    env.cmd()
        .args(["--facing", "north"])
        .assert()
        .success()
        .stdout(predicate::str::contains("lowest score: 2008"))
        .stdout(predicate::str::contains("tiles on any best path: 9"));
}

#[test]
fn strategies_agree() {
    let env = TestEnv::new(MAZE);
    for strategy in ["dijkstra", "exhaustive"] {
        env.cmd()
            .args(["--strategy", strategy])
            .assert()
            .success()
            .stdout(predicate::str::contains("lowest score: 3008"));
    }
}

#[test]
fn show_draws_the_overlay() {
    let env = TestEnv::new(MAZE);
    env.cmd()
        .arg("--show")
        .assert()
        .success()
        .stdout(predicate::str::contains("#OOOOO#\n#O###O#\n#O###O#"));
}

#[test]
fn json_output() {
    let env = TestEnv::new(MAZE);
    let output = env
        .cmd()
        .args(["--format", "json", "--strategy", "exhaustive"])
        .output()
        .expect("run mazerun");
    assert!(output.status.success());
    let value: serde_json::Value = serde_json::from_slice(&output.stdout).expect("valid json");
    assert_eq!(value["lowest"], 3008);
    assert_eq!(value["tiles"], 16);
    assert_eq!(value["strategy"], "exhaustive");
    assert_eq!(value["facing"], "east");
}

#[test]
fn unreachable_goal_is_not_an_error() {
    let env = TestEnv::new("#####\n#S#E#\n#####\n");
    env.cmd()
        .assert()
        .success()
        .stdout("no path from start to goal\n");
}

#[test]
fn two_starts_fail() {
    let env = TestEnv::new("#S.E.S#\n");
    env.cmd()
        .assert()
        .failure()
        .stderr(predicate::str::contains("search failed"))
        .stderr(predicate::str::contains("2 start cells"));
}

#[test]
fn malformed_maze_fails() {
    let env = TestEnv::new("#S.E#\n#..#\n");
    env.cmd()
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to parse maze"))
        .stderr(predicate::str::contains("line 2"));
}

#[test]
fn missing_file_fails() {
    let temp_dir = TempDir::new().expect("create temp dir");
    Command::cargo_bin("mazerun")
        .expect("binary exists")
        .arg(temp_dir.path().join("absent.txt"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to read maze"));
}
