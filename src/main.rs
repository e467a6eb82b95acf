// Command-line front end for the Filter Profile Service client.

use std::path::PathBuf;
use std::time::Duration;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use svo_fps::{FilterSetSelection, FpsClient, FpsConfig};

#[derive(Debug, Parser)]
#[command(name = "svo-fps", version, about = "Browse and download SVO filter profiles")]
struct Cli {
    /// Service root URL (defaults to the public service)
    #[arg(long, global = true)]
    base_url: Option<String>,

    /// Per-request timeout in seconds
    #[arg(long, global = true)]
    timeout_secs: Option<u64>,

    /// Print results as JSON instead of one name per line
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// List all facilities
    Facilities,
    /// List the filter sets of a facility
    FilterSets {
        facility: String,
    },
    /// List the filters of a facility
    Filters {
        facility: String,
        /// Restrict to these filter sets (comma separated)
        #[arg(long, value_delimiter = ',')]
        sets: Option<Vec<String>>,
        /// Echo each discovery as <set>/<filter>
        #[arg(short, long)]
        verbose: bool,
    },
    /// Download filter transmission curves
    Download {
        facility: String,
        /// Restrict to these filter sets (comma separated)
        #[arg(long, value_delimiter = ',')]
        sets: Option<Vec<String>>,
        /// Directory to write <facility>/<filter>.dat files into
        #[arg(long, default_value = ".")]
        output_dir: PathBuf,
    },
}

fn selection_from(sets: Option<Vec<String>>) -> FilterSetSelection {
    match sets {
        Some(names) if !names.is_empty() => FilterSetSelection::Named(names),
        _ => FilterSetSelection::All,
    }
}

fn print_names(names: &[String], json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(names)?);
    } else {
        for name in names {
            println!("{name}");
        }
    }
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    let mut builder = FpsConfig::builder();
    if let Some(base_url) = &cli.base_url {
        builder = builder.base_url(base_url);
    }
    if let Some(secs) = cli.timeout_secs {
        builder = builder.request_timeout(Duration::from_secs(secs));
    }
    if let Command::Download { output_dir, .. } = &cli.command {
        builder = builder.output_dir(output_dir);
    }
    let client = FpsClient::new(builder.build()?)?;

    match cli.command {
        Command::Facilities => {
            let names = client.facilities().await?;
            print_names(&names, cli.json)?;
        }
        Command::FilterSets { facility } => {
            let names = client.filter_sets(&facility).await?;
            print_names(&names, cli.json)?;
        }
        Command::Filters {
            facility,
            sets,
            verbose,
        } => {
            let names = client
                .filters(&facility, &selection_from(sets), verbose)
                .await?;
            if !verbose {
                print_names(&names, cli.json)?;
            }
        }
        Command::Download { facility, sets, .. } => {
            let paths = client
                .download_filters(&facility, &selection_from(sets))
                .await?;
            if cli.json {
                let rendered: Vec<String> =
                    paths.iter().map(|p| p.display().to_string()).collect();
                println!("{}", serde_json::to_string_pretty(&rendered)?);
            } else {
                for path in &paths {
                    println!("{}", path.display());
                }
            }
        }
    }

    Ok(())
}
