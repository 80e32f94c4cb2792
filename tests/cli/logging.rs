use crate::cli::support::{network, waypath};
use predicates::prelude::*;

// ============================================================================
// Logging tests
// ============================================================================

#[test]
fn test_log_level_debug_shows_debug_messages() {
    let dir = network();

    waypath()
        .current_dir(dir.path())
        .args(["--log-level", "debug", "route", "LIM", "MIA"])
        .assert()
        .success()
        .stderr(predicate::str::contains("parse_args"))
        .stderr(predicate::str::contains("network_loaded"));
}

#[test]
fn test_default_level_hides_debug_messages() {
    let dir = network();

    waypath()
        .current_dir(dir.path())
        .args(["route", "LIM", "MIA"])
        .assert()
        .success()
        .stderr(predicate::str::is_empty());
}

#[test]
fn test_verbose_shows_debug_messages() {
    let dir = network();

    waypath()
        .current_dir(dir.path())
        .args(["--verbose", "route", "LIM", "MIA"])
        .assert()
        .success()
        .stderr(predicate::str::contains("route_query"));
}

#[test]
fn test_log_json_emits_json_lines() {
    let dir = network();

    let output = waypath()
        .current_dir(dir.path())
        .args(["--log-level", "debug", "--log-json", "route", "LIM", "MIA"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let stderr = String::from_utf8_lossy(&output.stderr);
    let first = stderr.lines().next().unwrap();
    let json: serde_json::Value = serde_json::from_str(first).unwrap();
    assert!(json.get("level").is_some());
}

#[test]
fn test_env_filter_overrides_level() {
    let dir = network();

    waypath()
        .current_dir(dir.path())
        .env("WAYPATH_LOG", "waypath_core=debug")
        .args(["route", "LIM", "MIA"])
        .assert()
        .success()
        .stderr(predicate::str::contains("network_loaded"))
        .stderr(predicate::str::contains("parse_args").not());
}

#[test]
fn test_skipped_rows_are_logged() {
    let dir = crate::cli::support::network_with(
        crate::cli::support::DESTINOS,
        "Origen,Destino,Precio\nLIM,BOG,abc\nLIM,MIA,200\n",
    );

    waypath()
        .current_dir(dir.path())
        .args(["route", "LIM", "MIA"])
        .assert()
        .success()
        .stderr(predicate::str::contains("non-numeric weight 'abc'"));
}
