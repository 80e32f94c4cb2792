use waypath_core::format::format_metric;
use waypath_core::GraphStore;

use super::RouteOutput;

/// Header line followed by one `N` line per path node and one `E` line per hop
pub fn route_lines(output: &RouteOutput<'_>, store: &GraphStore) -> Vec<String> {
    let metric = output
        .result
        .metric()
        .map(format_metric)
        .unwrap_or_else(|| "-".to_string());

    let mut lines = vec![format!(
        "H waypath=1 records=1 mode=route from={} to={} criterion={} clearance={} found={} metric={}",
        output.from,
        output.to,
        output.criterion,
        output.clearance,
        output.result.is_found(),
        metric
    )];

    if let Some(route) = output.result.route() {
        for node in &route.path {
            lines.push(format!(
                "N {} restricted={}",
                node,
                store.restricted(node.as_str())
            ));
        }
        for pair in route.path.windows(2) {
            lines.push(format!("E {} {}", pair[0], pair[1]));
        }
    }

    lines
}
