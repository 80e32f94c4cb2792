use crate::cli::support::{network, waypath};
use predicates::prelude::*;

// ============================================================================
// Neighbors command tests
// ============================================================================

#[test]
fn test_neighbors_human() {
    let dir = network();

    waypath()
        .current_dir(dir.path())
        .args(["neighbors", "bog"])
        .assert()
        .success()
        .stdout(
            "BOG -> LIM (cost: 100.00)\n\
             BOG -> MEX (cost: 30.00)\n\
             BOG -> MIA (cost: 50.00)\n",
        );
}

#[test]
fn test_neighbors_isolated_node() {
    let dir = network();

    waypath()
        .current_dir(dir.path())
        .args(["neighbors", "CUN"])
        .assert()
        .success()
        .stdout("CUN has no connections.\n");
}

#[test]
fn test_neighbors_unknown_node() {
    let dir = network();

    waypath()
        .current_dir(dir.path())
        .args(["neighbors", "XXX"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("unknown node: XXX"));
}

#[test]
fn test_neighbors_json() {
    let dir = network();

    let output = waypath()
        .current_dir(dir.path())
        .args(["--format", "json", "neighbors", "MIA"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["node"], "MIA");
    assert_eq!(json["restricted"], false);
    let neighbors = json["neighbors"].as_array().unwrap();
    assert_eq!(neighbors.len(), 3);
    assert_eq!(neighbors[1]["to"], "LIM");
    assert_eq!(neighbors[2]["to"], "MEX");
    assert_eq!(neighbors[2]["restricted"], true);
    assert_eq!(neighbors[2]["weight"], 5.0);
}

#[test]
fn test_neighbors_records() {
    let dir = network();

    waypath()
        .current_dir(dir.path())
        .args(["--format", "records", "neighbors", "MEX"])
        .assert()
        .success()
        .stdout(
            "H waypath=1 records=1 mode=neighbors node=MEX restricted=true count=2\n\
             E MEX BOG weight=30\n\
             E MEX MIA weight=5\n",
        );
}
