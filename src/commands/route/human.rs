use waypath_core::{Criterion, RouteResult};

use super::RouteOutput;

/// Render a route result as a single readable line
pub fn format_route(output: &RouteOutput<'_>) -> String {
    let RouteResult::Found(route) = output.result else {
        return "No route available.".to_string();
    };

    let path = route
        .path
        .iter()
        .map(|node| node.as_str())
        .collect::<Vec<_>>()
        .join(" -> ");

    match output.criterion {
        Criterion::Cost => format!("Cheapest route: {} (cost: {:.2})", path, route.metric),
        Criterion::Hops => format!("Fewest-stops route: {} (hops: {})", path, route.hops()),
    }
}
