use crate::graph::algos::shared::reconstruct_path;
use crate::graph::eligibility::EligibleSet;
use crate::graph::store::GraphStore;
use crate::graph::types::{Criterion, NodeId, Route, RouteResult};
use std::collections::{HashMap, HashSet, VecDeque};

/// State tracked during BFS traversal
struct BfsState {
    visited: HashSet<NodeId>,
    queue: VecDeque<NodeId>,
    predecessors: HashMap<NodeId, NodeId>,
}

impl BfsState {
    fn new(origin: &str) -> Self {
        let mut state = Self {
            visited: HashSet::new(),
            queue: VecDeque::new(),
            predecessors: HashMap::new(),
        };
        state.visited.insert(NodeId::from(origin));
        state.queue.push_back(NodeId::from(origin));
        state
    }

    /// Mark `node` discovered from `pred`. Returns false if it was already seen.
    fn discover(&mut self, node: &NodeId, pred: &NodeId) -> bool {
        if !self.visited.insert(node.clone()) {
            return false;
        }
        self.predecessors.insert(node.clone(), pred.clone());
        self.queue.push_back(node.clone());
        true
    }
}

/// Find the route with the fewest edges between two nodes, using only
/// eligible stopovers. Ties go to the first-discovered path.
#[tracing::instrument(skip(store, eligible), fields(origin = %origin, destination = %destination, clearance = eligible.has_clearance()))]
pub fn find_fewest_hops(
    store: &GraphStore,
    eligible: &EligibleSet,
    origin: &str,
    destination: &str,
) -> RouteResult {
    if origin == destination {
        return RouteResult::Found(Route {
            criterion: Criterion::Hops,
            path: vec![NodeId::from(origin)],
            metric: 0.0,
        });
    }

    let mut state = BfsState::new(origin);

    while let Some(current_id) = state.queue.pop_front() {
        for edge in store.neighbors(current_id.as_str()) {
            if !eligible.contains(edge.to.as_str()) {
                continue;
            }
            if !state.discover(&edge.to, &current_id) {
                continue;
            }

            if edge.to.as_str() == destination {
                tracing::debug!(visited = state.visited.len(), "destination_discovered");
                return match reconstruct_path(origin, destination, &state.predecessors) {
                    Some(path) => {
                        let hops = path.len() - 1;
                        RouteResult::Found(Route {
                            criterion: Criterion::Hops,
                            path,
                            metric: hops as f64,
                        })
                    }
                    None => RouteResult::NotFound,
                };
            }
        }
    }

    tracing::debug!(visited = state.visited.len(), "frontier_exhausted");
    RouteResult::NotFound
}
