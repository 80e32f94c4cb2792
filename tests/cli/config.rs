use crate::cli::support::{network, waypath, write, DESTINOS, TARIFAS};
use predicates::prelude::*;
use tempfile::tempdir;

// ============================================================================
// Configuration tests
// ============================================================================

#[test]
fn test_local_config_sets_default_criterion() {
    let dir = network();
    write(
        dir.path(),
        "waypath.toml",
        "[query]\ndefault_criterion = \"hops\"\n",
    );

    waypath()
        .current_dir(dir.path())
        .args(["route", "LIM", "MIA"])
        .assert()
        .success()
        .stdout("Fewest-stops route: LIM -> MIA (hops: 1)\n");
}

#[test]
fn test_criterion_flag_overrides_config() {
    let dir = network();
    write(
        dir.path(),
        "waypath.toml",
        "[query]\ndefault_criterion = \"hops\"\n",
    );

    waypath()
        .current_dir(dir.path())
        .args(["route", "LIM", "MIA", "--criterion", "cost"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("Cheapest route:"));
}

#[test]
fn test_config_data_paths_resolve_against_config_dir() {
    let dir = tempdir().unwrap();
    write(dir.path(), "net/nodes.csv", DESTINOS);
    write(dir.path(), "net/edges.csv", TARIFAS);
    write(
        dir.path(),
        "net/waypath.toml",
        "[data]\nnodes = \"nodes.csv\"\nedges = \"edges.csv\"\n",
    );

    waypath()
        .current_dir(dir.path())
        .args(["--config", "net/waypath.toml", "route", "LIM", "MIA"])
        .assert()
        .success()
        .stdout("Cheapest route: LIM -> BOG -> MIA (cost: 150.00)\n");
}

#[test]
fn test_config_from_environment() {
    let dir = tempdir().unwrap();
    write(dir.path(), "net/nodes.csv", DESTINOS);
    write(dir.path(), "net/edges.csv", TARIFAS);
    write(
        dir.path(),
        "net/waypath.toml",
        "[data]\nnodes = \"nodes.csv\"\nedges = \"edges.csv\"\n",
    );

    waypath()
        .current_dir(dir.path())
        .env("WAYPATH_CONFIG", dir.path().join("net/waypath.toml"))
        .args(["neighbors", "CUN"])
        .assert()
        .success()
        .stdout("CUN has no connections.\n");
}

#[test]
fn test_data_flags_override_config() {
    let dir = tempdir().unwrap();
    write(dir.path(), "a.csv", DESTINOS);
    write(dir.path(), "b.csv", "Origen,Destino,Precio\nLIM,MIA,7\n");

    waypath()
        .current_dir(dir.path())
        .args(["--nodes", "a.csv", "--edges", "b.csv", "route", "LIM", "MIA"])
        .assert()
        .success()
        .stdout("Cheapest route: LIM -> MIA (cost: 7.00)\n");
}

#[test]
fn test_strict_from_config() {
    let dir = network();
    write(
        dir.path(),
        "tarifas.csv",
        "Origen,Destino,Precio\nLIM,MIA,-1\n",
    );
    write(dir.path(), "waypath.toml", "[load]\nstrict = true\n");

    waypath()
        .current_dir(dir.path())
        .args(["route", "LIM", "MIA"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("non-negative"));
}

#[test]
fn test_missing_explicit_config_fails() {
    let dir = network();

    waypath()
        .current_dir(dir.path())
        .args(["--config", "nope.toml", "graph"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("failed to read config"));
}

#[test]
fn test_invalid_config_criterion_fails() {
    let dir = network();
    write(
        dir.path(),
        "waypath.toml",
        "[query]\ndefault_criterion = \"fastest\"\n",
    );

    waypath()
        .current_dir(dir.path())
        .args(["route", "LIM", "MIA"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("TOML error"));
}

#[test]
fn test_config_flag_wins_over_environment() {
    let dir = network();
    write(dir.path(), "hops.toml", "[query]\ndefault_criterion = \"hops\"\n");
    write(dir.path(), "cost.toml", "[query]\ndefault_criterion = \"cost\"\n");

    waypath()
        .current_dir(dir.path())
        .env("WAYPATH_CONFIG", dir.path().join("cost.toml"))
        .args(["--config", "hops.toml", "route", "LIM", "MIA"])
        .assert()
        .success()
        .stdout("Fewest-stops route: LIM -> MIA (hops: 1)\n");
}
