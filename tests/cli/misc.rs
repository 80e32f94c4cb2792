use crate::cli::support::waypath;
use predicates::prelude::*;

// ============================================================================
// Help, version and bare invocation
// ============================================================================

#[test]
fn test_help_flag() {
    waypath()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage: waypath"))
        .stdout(predicate::str::contains("route"))
        .stdout(predicate::str::contains("neighbors"))
        .stdout(predicate::str::contains("graph"));
}

#[test]
fn test_version_flag() {
    waypath()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("waypath "));
}

#[test]
fn test_no_subcommand_prints_version() {
    waypath()
        .assert()
        .success()
        .stdout(predicate::str::starts_with(format!(
            "waypath {}\n",
            env!("CARGO_PKG_VERSION")
        )));
}

#[test]
fn test_unknown_format_is_usage_error() {
    waypath().args(["--format", "xml", "graph"]).assert().code(2);
}

#[test]
fn test_unknown_subcommand_is_usage_error() {
    waypath().arg("teleport").assert().code(2);
}
