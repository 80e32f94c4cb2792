//! Traveler eligibility filter
//!
//! A node is usable by a traveler when the traveler holds clearance or the
//! node carries no restriction. The set is rebuilt for every query.

use std::collections::HashSet;

use crate::graph::store::GraphStore;
use crate::graph::types::NodeId;

/// Nodes a traveler may use as origin, destination, or stopover
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EligibleSet {
    has_clearance: bool,
    nodes: HashSet<NodeId>,
}

impl EligibleSet {
    pub fn contains(&self, node: &str) -> bool {
        self.nodes.contains(node)
    }

    pub fn has_clearance(&self) -> bool {
        self.has_clearance
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn is_subset(&self, other: &EligibleSet) -> bool {
        self.nodes.is_subset(&other.nodes)
    }
}

/// Compute the eligible node set for a traveler
pub fn eligible_set(store: &GraphStore, has_clearance: bool) -> EligibleSet {
    let nodes = store
        .nodes()
        .filter(|node| has_clearance || !store.restricted(node.as_str()))
        .cloned()
        .collect();

    EligibleSet {
        has_clearance,
        nodes,
    }
}
