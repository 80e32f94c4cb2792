//! `waypath route` command - find a route between two nodes
//!
//! - `waypath route LIM MEX` - cheapest route for a traveler without clearance
//! - `waypath route LIM MEX --clearance --criterion hops` - fewest stops,
//!   restricted nodes allowed

mod human;
mod json;
mod records;

use waypath_core::error::Result;
use waypath_core::format::OutputFormat;
use waypath_core::{query, Criterion, GraphStore, RouteResult};

use crate::cli::parse::normalize_node;
use crate::commands::dispatch::macros::trace_command;
use crate::commands::dispatch::CommandContext;

/// Arguments of a route query as given on the command line
pub struct RouteArgs<'a> {
    pub origin: &'a str,
    pub destination: &'a str,
    pub clearance: bool,
    pub criterion: Option<Criterion>,
}

/// An answered query, ready to render
pub struct RouteOutput<'a> {
    pub from: &'a str,
    pub to: &'a str,
    pub criterion: Criterion,
    pub clearance: bool,
    pub result: &'a RouteResult,
}

/// Execute the route command
pub fn execute(ctx: &CommandContext, args: RouteArgs<'_>) -> Result<()> {
    let origin = normalize_node(args.origin);
    let destination = normalize_node(args.destination);
    if origin.is_empty() || destination.is_empty() {
        waypath_core::bail_usage!("origin and destination must not be empty");
    }

    let config = ctx.config()?;
    let criterion = args.criterion.unwrap_or(config.query.default_criterion);
    let (store, _report) = ctx.network(&config)?;

    let result = query(&store, &origin, &destination, args.clearance, criterion)?;
    trace_command!(ctx.cli, ctx.start, "route_query");

    let output = RouteOutput {
        from: &origin,
        to: &destination,
        criterion,
        clearance: args.clearance,
        result: &result,
    };

    render(ctx.cli.format, &output, &store)
}

fn render(format: OutputFormat, output: &RouteOutput<'_>, store: &GraphStore) -> Result<()> {
    match format {
        OutputFormat::Human => println!("{}", human::format_route(output)),
        OutputFormat::Json => println!("{}", json::format_route(output)?),
        OutputFormat::Records => {
            for line in records::route_lines(output, store) {
                println!("{}", line);
            }
        }
    }
    Ok(())
}
