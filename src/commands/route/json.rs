use serde::Serialize;
use waypath_core::error::Result;
use waypath_core::{Criterion, NodeId};

use super::RouteOutput;

#[derive(Serialize)]
struct RouteJson<'a> {
    from: &'a str,
    to: &'a str,
    criterion: Criterion,
    clearance: bool,
    found: bool,
    path: &'a [NodeId],
    metric: Option<f64>,
}

/// Render a route result as pretty-printed JSON
pub fn format_route(output: &RouteOutput<'_>) -> Result<String> {
    let json = RouteJson {
        from: output.from,
        to: output.to,
        criterion: output.criterion,
        clearance: output.clearance,
        found: output.result.is_found(),
        path: output
            .result
            .route()
            .map(|route| route.path.as_slice())
            .unwrap_or_default(),
        metric: output.result.metric(),
    };
    Ok(serde_json::to_string_pretty(&json)?)
}
