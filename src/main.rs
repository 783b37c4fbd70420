//! cswpub - CSW catalog publishing client
//!
//! CLI binary for publishing metadata records to CSW 2.0.2 catalogs.

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

mod cli;

#[derive(Parser)]
#[command(name = "cswpub")]
#[command(about = "Publish metadata to CSW 2.0.2 catalogs")]
#[command(version)]
struct Cli {
    /// Catalog service endpoint URL (overrides the config file)
    #[arg(short, long, global = true)]
    url: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Publish a resource to the catalog
    Publish {
        /// Publish type; "Layer" inserts the record directly, any other
        /// value harvests by reference. Inferred from --xml/--source when
        /// omitted.
        #[arg(short = 't', long)]
        publish_type: Option<String>,

        /// Resource type URI for harvest requests
        #[arg(long)]
        resource_type: Option<String>,

        /// URI of the resource to harvest
        #[arg(long, group = "payload")]
        source: Option<String>,

        /// Metadata record XML file to insert ("-" for stdin)
        #[arg(long, group = "payload")]
        xml: Option<PathBuf>,

        /// Request timeout in seconds
        #[arg(long)]
        timeout: Option<u64>,

        /// Print the request body without sending it
        #[arg(long)]
        dry_run: bool,

        /// Send the request without reporting the catalog outcome
        #[arg(short, long, conflicts_with = "verbose")]
        quiet: bool,

        /// Print the request body before sending
        #[arg(short, long)]
        verbose: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        None => {
            // Default: interactive mode
            cli::run_interactive(cli.url.as_deref()).await?;
        }
        Some(Commands::Publish {
            publish_type,
            resource_type,
            source,
            xml,
            timeout,
            dry_run,
            quiet,
            verbose,
        }) => {
            cli::run_publish(cli::PublishOptions {
                publish_type: publish_type.as_deref(),
                resource_type: resource_type.as_deref(),
                source: source.as_deref(),
                endpoint: cli.url.as_deref(),
                record_file: xml.as_deref(),
                timeout_secs: timeout,
                dry_run,
                quiet,
                verbose,
                interactive: false,
            })
            .await?;
        }
    }

    Ok(())
}
