//! Adjacency-list store for the undirected connectivity graph

use std::collections::{BTreeSet, HashMap};

use crate::error::{Result, WaypathError};
use crate::graph::types::{Cost, Edge, NodeId};

/// An undirected weighted graph with a per-node restriction flag.
///
/// Built once from the input tables and borrowed read-only by every search.
#[derive(Debug, Clone, Default)]
pub struct GraphStore {
    nodes: BTreeSet<NodeId>,
    adjacency: HashMap<NodeId, Vec<Edge>>,
    restricted: HashMap<NodeId, bool>,
    edge_count: usize,
}

impl GraphStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a node without edges or restriction flag
    pub fn add_node(&mut self, node: impl Into<NodeId>) {
        self.nodes.insert(node.into());
    }

    /// Insert an undirected edge. Parallel edges are kept as-is.
    pub fn add_edge(
        &mut self,
        a: impl Into<NodeId>,
        b: impl Into<NodeId>,
        weight: impl Into<Cost>,
    ) -> Result<()> {
        let a = a.into();
        let b = b.into();
        let weight = weight.into();

        if !weight.is_valid_weight() {
            return Err(WaypathError::InvalidWeight {
                from: a,
                to: b,
                weight: weight.value(),
            });
        }

        self.adjacency.entry(a.clone()).or_default().push(Edge {
            to: b.clone(),
            weight,
        });
        self.adjacency.entry(b.clone()).or_default().push(Edge {
            to: a.clone(),
            weight,
        });
        self.nodes.insert(a);
        self.nodes.insert(b);
        self.edge_count += 1;

        Ok(())
    }

    /// Record the restriction flag for a node, overwriting any prior value
    pub fn set_restricted(&mut self, node: impl Into<NodeId>, flag: bool) {
        let node = node.into();
        self.nodes.insert(node.clone());
        self.restricted.insert(node, flag);
    }

    /// Whether the node requires clearance; `false` when never recorded
    pub fn restricted(&self, node: &str) -> bool {
        self.restricted.get(node).copied().unwrap_or(false)
    }

    /// Edges leaving `node`, in insertion order. Empty for unknown or isolated nodes.
    pub fn neighbors(&self, node: &str) -> &[Edge] {
        self.adjacency
            .get(node)
            .map(|edges| edges.as_slice())
            .unwrap_or(&[])
    }

    pub fn contains(&self, node: &str) -> bool {
        self.nodes.contains(node)
    }

    /// All known nodes in sorted order
    pub fn nodes(&self) -> impl Iterator<Item = &NodeId> {
        self.nodes.iter()
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Number of undirected edges inserted, parallel edges included
    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    /// Each undirected edge once, as `(a, b, weight)` with `a <= b`, sorted.
    pub fn edges(&self) -> Vec<(&NodeId, &NodeId, Cost)> {
        let mut edges = Vec::with_capacity(self.edge_count);
        for (from, list) in &self.adjacency {
            for edge in list {
                if from < &edge.to {
                    edges.push((from, &edge.to, edge.weight));
                }
            }
        }

        // Self-loops appear twice in their own list; keep one per insertion.
        for (from, list) in &self.adjacency {
            let loops = list.iter().filter(|e| &e.to == from);
            for edge in loops.step_by(2) {
                edges.push((from, &edge.to, edge.weight));
            }
        }

        edges.sort_by(|a, b| {
            a.0.cmp(b.0)
                .then_with(|| a.1.cmp(b.1))
                .then_with(|| a.2.value().total_cmp(&b.2.value()))
        });
        edges
    }
}
