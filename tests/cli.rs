// ABOUTME: Integration tests for the imgrm CLI.
// ABOUTME: Validates --help output, argument checks and error reporting without an engine.

use assert_cmd::Command;
use predicates::prelude::*;

fn imgrm_cmd() -> Command {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("imgrm"));
    // Keep the user's environment out of the tests.
    cmd.env_remove("DOCKER_HOST")
        .env_remove("CONTAINER_HOST")
        .env_remove("IMGRM_CONFIG")
        .env("XDG_CONFIG_HOME", "/nonexistent-imgrm-config");
    cmd
}

#[test]
fn help_shows_commands() {
    imgrm_cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("rm"));
}

#[test]
fn rm_help_lists_flags_and_aliases() {
    imgrm_cmd()
        .args(["rm", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("--force"))
        .stdout(predicate::str::contains("--no-prune"))
        .stdout(predicate::str::contains("rmi"));
}

#[test]
fn rm_requires_an_image() {
    imgrm_cmd()
        .arg("rm")
        .assert()
        .failure()
        .stderr(predicate::str::contains("IMAGE"));
}

#[test]
fn rmi_alias_is_accepted() {
    imgrm_cmd()
        .args(["rmi", "--help"])
        .assert()
        .success();
}

#[test]
fn blank_image_name_is_rejected() {
    imgrm_cmd()
        .args(["rm", " "])
        .assert()
        .failure()
        .stderr(predicate::str::contains("image name cannot be empty"));
}

#[test]
fn quiet_and_json_conflict() {
    imgrm_cmd()
        .args(["--quiet", "--json", "rm", "nginx"])
        .assert()
        .failure();
}

#[test]
fn unreachable_socket_fails_with_connection_error() {
    let temp_dir = tempfile::tempdir().unwrap();
    let socket = temp_dir.path().join("missing.sock");

    imgrm_cmd()
        .args(["--socket", socket.to_str().unwrap(), "rm", "nginx"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error: runtime connection failed"));
}

#[test]
fn tcp_docker_host_is_rejected() {
    imgrm_cmd()
        .env("DOCKER_HOST", "tcp://127.0.0.1:2375")
        .args(["rm", "nginx"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unsupported engine host"));
}

#[test]
fn missing_explicit_config_is_reported() {
    imgrm_cmd()
        .args(["--config", "/nonexistent/imgrm.yml", "rm", "nginx"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("configuration file not found"));
}
