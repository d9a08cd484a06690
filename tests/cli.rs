use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn waymeasure_cmd() -> Command {
    Command::cargo_bin("waymeasure").expect("binary exists")
}

#[test]
fn waymeasure_help_prints_usage() {
    waymeasure_cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Grid measurement and line tracing overlay for Wayland compositors",
        ));
}

#[test]
fn malformed_canvas_size_is_rejected() {
    waymeasure_cmd()
        .env_remove("WAYLAND_DISPLAY")
        .args(["--size", "huge"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid canvas size"));
}

#[test]
fn non_positive_spacing_is_rejected() {
    waymeasure_cmd()
        .env_remove("WAYLAND_DISPLAY")
        .args(["--spacing", "0"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("grid spacing must be positive"));
}

#[test]
fn running_requires_wayland_env() {
    // Isolated config home so a user config can't alter startup
    let temp = TempDir::new().unwrap();

    waymeasure_cmd()
        .env_remove("WAYLAND_DISPLAY")
        .env("XDG_CONFIG_HOME", temp.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("Wayland environment required"));
}

#[test]
fn valid_overrides_still_need_a_wayland_session() {
    waymeasure_cmd()
        .env_remove("WAYLAND_DISPLAY")
        .args(["--size", "800x600", "--spacing", "25"])
        .assert()
        .failure()
        .stderr(
            predicate::str::contains("Wayland environment required")
                .and(predicate::str::contains("invalid canvas size").not()),
        );
}
