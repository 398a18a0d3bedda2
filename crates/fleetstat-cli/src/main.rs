use std::path::PathBuf;

use clap::{Parser, Subcommand};

mod commands;
mod config;

#[derive(Parser)]
#[command(
    name = "fleetstat",
    about = "Placement snapshot statistics for a host fleet",
    version,
    propagate_version = true,
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Config file overriding the default file locations
    /// (default: fleetstat.toml in the working directory, if present)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate the statistics report from a placement snapshot
    Report {
        /// Host dataset (default: HostState.txt)
        #[arg(long)]
        hosts: Option<PathBuf>,
        /// Instance dataset (default: InstanceState.txt)
        #[arg(long)]
        instances: Option<PathBuf>,
        /// Where to write the report (default: Statistics.txt)
        #[arg(short, long)]
        output: Option<PathBuf>,
        /// Also print the full computed statistics as JSON on stdout
        #[arg(long)]
        json: bool,
    },
    /// Validate the snapshot files without writing a report
    Check {
        /// Host dataset (default: HostState.txt)
        #[arg(long)]
        hosts: Option<PathBuf>,
        /// Instance dataset (default: InstanceState.txt)
        #[arg(long)]
        instances: Option<PathBuf>,
    },
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("fleetstat_data=info".parse()?)
                .add_directive("fleetstat_report=info".parse()?),
        )
        .init();

    let cli = Cli::parse();
    let config = config::FleetstatConfig::load(cli.config.as_deref())?;

    match cli.command {
        Commands::Report {
            hosts,
            instances,
            output,
            json,
        } => {
            let paths = config.resolve(hosts, instances, output);
            commands::report::run(&paths, json)
        }
        Commands::Check { hosts, instances } => {
            let paths = config.resolve(hosts, instances, None);
            commands::check::run(&paths)
        }
    }
}
