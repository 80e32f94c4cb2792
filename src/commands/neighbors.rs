//! `waypath neighbors` command - list the direct connections of a node

use serde_json::json;
use waypath_core::error::Result;
use waypath_core::format::{format_metric, OutputFormat};
use waypath_core::graph::Edge;
use waypath_core::{BoundaryError, GraphStore, NodeId};

use crate::cli::parse::normalize_node;
use crate::commands::dispatch::CommandContext;

/// Execute the neighbors command
pub fn execute(ctx: &CommandContext, node: &str) -> Result<()> {
    let node = normalize_node(node);
    if node.is_empty() {
        waypath_core::bail_usage!("node must not be empty");
    }

    let config = ctx.config()?;
    let (store, _report) = ctx.network(&config)?;

    if !store.contains(&node) {
        return Err(BoundaryError::UnknownNode {
            node: NodeId::from(node),
        }
        .into());
    }

    let edges = sorted_edges(&store, &node);

    match ctx.cli.format {
        OutputFormat::Human => {
            if edges.is_empty() {
                println!("{} has no connections.", node);
            }
            for edge in &edges {
                println!("{} -> {} (cost: {:.2})", node, edge.to, edge.weight.value());
            }
        }
        OutputFormat::Json => {
            let neighbors: Vec<_> = edges
                .iter()
                .map(|edge| {
                    json!({
                        "to": edge.to,
                        "weight": edge.weight.value(),
                        "restricted": store.restricted(edge.to.as_str()),
                    })
                })
                .collect();
            let output = json!({
                "node": node,
                "restricted": store.restricted(&node),
                "neighbors": neighbors,
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Records => {
            println!(
                "H waypath=1 records=1 mode=neighbors node={} restricted={} count={}",
                node,
                store.restricted(&node),
                edges.len()
            );
            for edge in &edges {
                println!(
                    "E {} {} weight={}",
                    node,
                    edge.to,
                    format_metric(edge.weight.value())
                );
            }
        }
    }

    Ok(())
}

/// Adjacency of `node` ordered by neighbor, then weight
fn sorted_edges<'a>(store: &'a GraphStore, node: &str) -> Vec<&'a Edge> {
    let mut edges: Vec<&Edge> = store.neighbors(node).iter().collect();
    edges.sort_by(|a, b| {
        a.to.cmp(&b.to)
            .then_with(|| a.weight.value().total_cmp(&b.weight.value()))
    });
    edges
}
