//! # netaddr
//!
//! Address parsing, name resolution and subnet matching from the command line

mod bootstrap;
mod commands;

use clap::{Parser, Subcommand};
use netaddr_domain::config::ResolverTier;
use netaddr_domain::{CliOverrides, FamilyHint};
use tracing::info;

#[derive(Parser)]
#[command(name = "netaddr")]
#[command(version)]
#[command(about = "Socket address parsing, resolution and subnet matching")]
struct Cli {
    /// Path to a TOML configuration file
    #[arg(short = 'c', long, global = true)]
    config: Option<String>,

    /// Resolver tier: auto, modern or legacy
    #[arg(short = 't', long, global = true)]
    tier: Option<ResolverTier>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, global = true)]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Split a `host[:port]` token into its parts
    Parse { token: String },

    /// Resolve a hostname; without one, print the wildcard address
    Resolve {
        host: Option<String>,

        /// Address family: unspec, inet or inet6
        #[arg(short = 'f', long, default_value = "unspec")]
        family: FamilyHint,

        /// Port for every record (default: resolver.default_port)
        #[arg(short = 'p', long)]
        port: Option<u16>,

        /// Service name whose port replaces --port
        #[arg(short = 's', long)]
        service: Option<String>,

        /// Accept numeric addresses only
        #[arg(short = 'n', long)]
        numeric: bool,
    },

    /// Look up the hostname of an address
    Reverse {
        ip: String,

        /// Fall back to the numeric form when the address has no name
        #[arg(long)]
        allow_numeric: bool,
    },

    /// Print the port registered for a service name
    Service { name: String },

    /// Parse and print a subnet
    Subnet { ip: String, mask: Option<String> },

    /// Test whether an address lies in a subnet
    Match {
        subnet: String,
        ip: String,

        #[arg(short = 'm', long)]
        mask: Option<String>,
    },

    /// Classify an address against the configured access list
    Access { ip: String },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let overrides = CliOverrides {
        tier: cli.tier,
        log_level: cli.log_level,
    };
    let config = bootstrap::load_config(cli.config.as_deref(), overrides)?;
    bootstrap::init_logging(&config);

    info!(
        config_file = cli.config.as_deref().unwrap_or("default"),
        tier = %config.resolver.tier,
        default_port = config.resolver.default_port,
        access_entries = config.access.len(),
        "Configuration loaded"
    );

    let resolver = bootstrap::build_resolver(&config);
    commands::run(cli.command, &config, resolver).await
}
