use crate::cli::support::{network, waypath};
use predicates::prelude::*;

// ============================================================================
// Graph export tests
// ============================================================================

#[test]
fn test_graph_human() {
    let dir = network();

    waypath()
        .current_dir(dir.path())
        .arg("graph")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("Nodes: 5 (4 eligible)\n"))
        .stdout(predicate::str::contains("  MEX [restricted, ineligible]\n"))
        .stdout(predicate::str::contains("Edges: 5\n"))
        .stdout(predicate::str::contains("  BOG - LIM (100.00)\n"));
}

#[test]
fn test_graph_clearance_marks_all_eligible() {
    let dir = network();

    waypath()
        .current_dir(dir.path())
        .args(["graph", "--clearance"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("Nodes: 5 (5 eligible)\n"))
        .stdout(predicate::str::contains("  MEX [restricted]\n"));
}

#[test]
fn test_graph_json_lists_each_edge_once() {
    let dir = network();

    let output = waypath()
        .current_dir(dir.path())
        .args(["--format", "json", "graph"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["clearance"], false);
    assert_eq!(json["nodes"].as_array().unwrap().len(), 5);

    let edges = json["edges"].as_array().unwrap();
    assert_eq!(edges.len(), 5);
    assert_eq!(edges[0]["from"], "BOG");
    assert_eq!(edges[0]["to"], "LIM");
    assert_eq!(edges[0]["weight"], 100.0);

    let cun = &json["nodes"][1];
    assert_eq!(cun["id"], "CUN");
    assert_eq!(cun["eligible"], true);
}

#[test]
fn test_graph_records() {
    let dir = network();

    waypath()
        .current_dir(dir.path())
        .args(["--format", "records", "graph"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with(
            "H waypath=1 records=1 mode=graph clearance=false nodes=5 edges=5\n",
        ))
        .stdout(predicate::str::contains(
            "N MEX restricted=true eligible=false\n",
        ))
        .stdout(predicate::str::contains("E MEX MIA weight=5\n"));
}
