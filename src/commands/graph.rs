//! `waypath graph` command - export the whole network for a renderer
//!
//! Every node is listed with its restriction flag and whether the traveler
//! (with or without `--clearance`) may use it; every undirected edge is
//! listed once.

use serde::Serialize;
use waypath_core::error::Result;
use waypath_core::format::{format_metric, OutputFormat};
use waypath_core::graph::{eligible_set, EligibleSet};
use waypath_core::{GraphStore, NodeId};

use crate::commands::dispatch::CommandContext;

#[derive(Debug, Serialize, PartialEq)]
struct NodeView<'a> {
    id: &'a NodeId,
    restricted: bool,
    eligible: bool,
}

#[derive(Debug, Serialize, PartialEq)]
struct EdgeView<'a> {
    from: &'a NodeId,
    to: &'a NodeId,
    weight: f64,
}

#[derive(Debug, Serialize)]
struct GraphView<'a> {
    clearance: bool,
    nodes: Vec<NodeView<'a>>,
    edges: Vec<EdgeView<'a>>,
}

fn build_view<'a>(store: &'a GraphStore, eligible: &EligibleSet) -> GraphView<'a> {
    let nodes = store
        .nodes()
        .map(|id| NodeView {
            id,
            restricted: store.restricted(id.as_str()),
            eligible: eligible.contains(id.as_str()),
        })
        .collect();

    let edges = store
        .edges()
        .into_iter()
        .map(|(from, to, weight)| EdgeView {
            from,
            to,
            weight: weight.value(),
        })
        .collect();

    GraphView {
        clearance: eligible.has_clearance(),
        nodes,
        edges,
    }
}

/// Execute the graph command
pub fn execute(ctx: &CommandContext, clearance: bool) -> Result<()> {
    let config = ctx.config()?;
    let (store, _report) = ctx.network(&config)?;
    let eligible = eligible_set(&store, clearance);
    let view = build_view(&store, &eligible);

    match ctx.cli.format {
        OutputFormat::Human => {
            for line in human_lines(&view, eligible.len()) {
                println!("{}", line);
            }
        }
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&view)?),
        OutputFormat::Records => {
            for line in records_lines(&view) {
                println!("{}", line);
            }
        }
    }

    Ok(())
}

fn human_lines(view: &GraphView<'_>, eligible_count: usize) -> Vec<String> {
    let mut lines = vec![format!(
        "Nodes: {} ({} eligible)",
        view.nodes.len(),
        eligible_count
    )];
    for node in &view.nodes {
        let marker = match (node.restricted, node.eligible) {
            (false, _) => "",
            (true, true) => " [restricted]",
            (true, false) => " [restricted, ineligible]",
        };
        lines.push(format!("  {}{}", node.id, marker));
    }

    lines.push(format!("Edges: {}", view.edges.len()));
    for edge in &view.edges {
        lines.push(format!("  {} - {} ({:.2})", edge.from, edge.to, edge.weight));
    }
    lines
}

fn records_lines(view: &GraphView<'_>) -> Vec<String> {
    let mut lines = vec![format!(
        "H waypath=1 records=1 mode=graph clearance={} nodes={} edges={}",
        view.clearance,
        view.nodes.len(),
        view.edges.len()
    )];
    for node in &view.nodes {
        lines.push(format!(
            "N {} restricted={} eligible={}",
            node.id, node.restricted, node.eligible
        ));
    }
    for edge in &view.edges {
        lines.push(format!(
            "E {} {} weight={}",
            edge.from,
            edge.to,
            format_metric(edge.weight)
        ));
    }
    lines
}
