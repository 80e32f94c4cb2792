//! Command trait and context for dispatching commands

use std::path::PathBuf;
use std::time::Instant;

use crate::cli::Cli;
use waypath_core::config::NetworkConfig;
use waypath_core::error::{Result, WaypathError};
use waypath_core::load::{load_network, LoadReport};
use waypath_core::GraphStore;

use super::macros::trace_command;

/// Shared context for command execution
pub struct CommandContext<'a> {
    pub cli: &'a Cli,
    pub cwd: PathBuf,
    pub start: Instant,
}

impl<'a> CommandContext<'a> {
    pub fn new(cli: &'a Cli, start: Instant) -> Result<Self> {
        let cwd = std::env::current_dir()
            .map_err(|e| WaypathError::io_operation("resolve", "working directory", e))?;
        Ok(Self { cli, cwd, start })
    }

    /// Discover the config file and apply command-line overrides
    pub fn config(&self) -> Result<NetworkConfig> {
        let mut config = NetworkConfig::discover(self.cli.config.as_deref(), &self.cwd)?;

        if let Some(nodes) = &self.cli.nodes {
            config.data.nodes = self.cwd.join(nodes);
        }
        if let Some(edges) = &self.cli.edges {
            config.data.edges = self.cwd.join(edges);
        }
        if self.cli.strict {
            config.load.strict = true;
        }

        trace_command!(self.cli, self.start, "resolve_config");
        Ok(config)
    }

    /// Load the network described by `config`
    pub fn network(&self, config: &NetworkConfig) -> Result<(GraphStore, LoadReport)> {
        let nodes = self.cwd.join(&config.data.nodes);
        let edges = self.cwd.join(&config.data.edges);
        let loaded = load_network(&nodes, &edges, &config.load_options())?;

        let report = &loaded.1;
        if !report.skipped.is_empty() && !self.cli.quiet {
            tracing::warn!(skipped = report.skipped.len(), "malformed rows were skipped");
        }

        trace_command!(self.cli, self.start, "load_network");
        Ok(loaded)
    }
}

/// Trait for commands that can be executed
pub trait Command {
    fn execute(&self, ctx: &CommandContext) -> Result<()>;
}

/// No-op command (when no subcommand is provided)
pub struct NoCommand;

impl Command for NoCommand {
    fn execute(&self, _ctx: &CommandContext) -> Result<()> {
        println!("waypath {}", env!("CARGO_PKG_VERSION"));
        println!();
        println!("Cheapest and fewest-stops routes over a restricted network.");
        println!();
        println!("Run `waypath --help` for usage information.");
        Ok(())
    }
}
