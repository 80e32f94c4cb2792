use crate::graph::algos::shared::reconstruct_path;
use crate::graph::eligibility::EligibleSet;
use crate::graph::store::GraphStore;
use crate::graph::types::{Cost, Criterion, NodeId, Route, RouteResult};
use std::cmp::Reverse;
use std::collections::{BinaryHeap, HashMap, HashSet};

/// Wrapper for BinaryHeap to use as min-heap (ordered by accumulated cost)
#[derive(Debug, Clone)]
pub struct HeapEntry {
    pub node_id: NodeId,
    pub accumulated_cost: Cost,
}

impl PartialEq for HeapEntry {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == std::cmp::Ordering::Equal
    }
}

impl Eq for HeapEntry {}

impl PartialOrd for HeapEntry {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for HeapEntry {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.accumulated_cost
            .value()
            .total_cmp(&other.accumulated_cost.value())
    }
}

/// Find the minimum-cost route between two nodes, using only eligible stopovers.
///
/// Endpoints are not checked against `eligible`; the query facade does that.
#[tracing::instrument(skip(store, eligible), fields(origin = %origin, destination = %destination, clearance = eligible.has_clearance()))]
pub fn find_cheapest(
    store: &GraphStore,
    eligible: &EligibleSet,
    origin: &str,
    destination: &str,
) -> RouteResult {
    if origin == destination {
        return RouteResult::Found(Route {
            criterion: Criterion::Cost,
            path: vec![NodeId::from(origin)],
            metric: 0.0,
        });
    }

    let mut settled: HashSet<NodeId> = HashSet::new();
    let mut best_costs: HashMap<NodeId, Cost> = HashMap::new();
    let mut predecessors: HashMap<NodeId, NodeId> = HashMap::new();
    let mut heap: BinaryHeap<Reverse<HeapEntry>> = BinaryHeap::new();

    best_costs.insert(NodeId::from(origin), Cost::ZERO);
    heap.push(Reverse(HeapEntry {
        node_id: NodeId::from(origin),
        accumulated_cost: Cost::ZERO,
    }));

    while let Some(Reverse(HeapEntry {
        node_id: current_id,
        accumulated_cost,
    })) = heap.pop()
    {
        // Stale entry: a cheaper path already finalized this node
        if !settled.insert(current_id.clone()) {
            continue;
        }

        if current_id.as_str() == destination {
            tracing::debug!(
                settled = settled.len(),
                cost = accumulated_cost.value(),
                "destination_settled"
            );
            return match reconstruct_path(origin, destination, &predecessors) {
                Some(path) => RouteResult::Found(Route {
                    criterion: Criterion::Cost,
                    path,
                    metric: accumulated_cost.value(),
                }),
                None => RouteResult::NotFound,
            };
        }

        for edge in store.neighbors(current_id.as_str()) {
            if !eligible.contains(edge.to.as_str()) || settled.contains(&edge.to) {
                continue;
            }

            let new_cost = accumulated_cost + edge.weight;
            let improves = best_costs
                .get(&edge.to)
                .is_none_or(|existing| new_cost.value() < existing.value());

            if improves {
                best_costs.insert(edge.to.clone(), new_cost);
                predecessors.insert(edge.to.clone(), current_id.clone());
                heap.push(Reverse(HeapEntry {
                    node_id: edge.to.clone(),
                    accumulated_cost: new_cost,
                }));
            }
        }
    }

    tracing::debug!(settled = settled.len(), "frontier_exhausted");
    RouteResult::NotFound
}
