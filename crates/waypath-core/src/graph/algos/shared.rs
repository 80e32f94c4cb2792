use crate::graph::types::NodeId;
use std::collections::HashMap;

/// Walk predecessor links from `to` back to `from` and return the path in
/// travel order. Returns `None` if the chain is broken before reaching `from`.
pub fn reconstruct_path(
    from: &str,
    to: &str,
    predecessors: &HashMap<NodeId, NodeId>,
) -> Option<Vec<NodeId>> {
    let mut path = vec![NodeId::from(to)];
    let mut current = to;

    while current != from {
        let pred = predecessors.get(current)?;
        path.push(pred.clone());
        current = pred.as_str();
    }

    path.reverse();
    Some(path)
}
