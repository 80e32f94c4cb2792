//! Route query facade
//!
//! Validates both endpoints against the store and the traveler's eligibility,
//! then dispatches to the search matching the requested criterion.

use crate::error::BoundaryError;
use crate::graph::{eligible_set, find_cheapest, find_fewest_hops};
use crate::graph::{Criterion, GraphStore, NodeId, RouteResult};

/// Run a route query.
///
/// Unknown endpoints are reported before ineligible ones, and the origin is
/// checked before the destination. A query between two valid endpoints that
/// are not connected returns `Ok(RouteResult::NotFound)`.
pub fn query(
    store: &GraphStore,
    origin: &str,
    destination: &str,
    has_clearance: bool,
    criterion: Criterion,
) -> Result<RouteResult, BoundaryError> {
    for node in [origin, destination] {
        if !store.contains(node) {
            tracing::debug!(node = %node, "unknown_endpoint");
            return Err(BoundaryError::UnknownNode {
                node: NodeId::from(node),
            });
        }
    }

    let eligible = eligible_set(store, has_clearance);

    for node in [origin, destination] {
        if !eligible.contains(node) {
            tracing::debug!(node = %node, has_clearance, "ineligible_endpoint");
            return Err(BoundaryError::Ineligible {
                node: NodeId::from(node),
            });
        }
    }

    let result = match criterion {
        Criterion::Cost => find_cheapest(store, &eligible, origin, destination),
        Criterion::Hops => find_fewest_hops(store, &eligible, origin, destination),
    };

    tracing::debug!(
        origin = %origin,
        destination = %destination,
        %criterion,
        has_clearance,
        found = result.is_found(),
        metric = ?result.metric(),
        "route_query"
    );

    Ok(result)
}
