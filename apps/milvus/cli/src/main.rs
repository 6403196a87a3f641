//! Milvus CLI
//!
//! Inspects and maintains collections on a Milvus 0.10 server. Connection
//! settings come from the `MILVUS_*` environment variables; `--address`
//! overrides the server address.

use clap::{Parser, Subcommand};
use core_config::tracing::{init_tracing, install_color_eyre};
use core_config::{Environment, FromEnv};
use domain_milvus::{MilvusClient, MilvusConfig};
use eyre::Result;
use tracing::info;

mod commands;

#[derive(Parser)]
#[command(name = "milvus-cli")]
#[command(about = "Inspect and maintain a Milvus server")]
struct Cli {
    /// Server address (host:port), overrides MILVUS_ADDRESS
    #[arg(short, long, global = true)]
    address: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Check the server answers and print its version
    Ping,

    /// List collections
    Collections,

    /// Show a collection's schema
    Describe { collection: String },

    /// Count the rows of a collection
    Count { collection: String },

    /// Print segment and row statistics of a collection
    Info { collection: String },

    /// List the partitions of a collection
    Partitions { collection: String },

    /// Show the index built on a collection
    Index { collection: String },

    /// Flush pending inserts of the given collections to disk
    Flush {
        #[arg(required = true)]
        collections: Vec<String>,
    },

    /// Drop a collection and all of its data
    Drop {
        collection: String,

        /// Required to actually drop
        #[arg(long)]
        yes: bool,
    },

    /// Run a raw server command (version, status, mode, ...)
    Cmd { command: String },
}

#[tokio::main]
async fn main() -> Result<()> {
    install_color_eyre();

    let environment = Environment::from_env();
    init_tracing(&environment);

    let cli = Cli::parse();

    let mut config = MilvusConfig::from_env()?;
    if let Some(address) = cli.address {
        config.address = address;
    }
    if config.client_name.is_none() {
        config.client_name = Some("milvus-cli".to_string());
    }

    info!(address = %config.address, "Using Milvus server");
    let client = MilvusClient::from_config(&config)?;

    commands::run(&client, cli.command).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_address_is_global() {
        let cli = Cli::try_parse_from(["milvus-cli", "count", "docs", "--address", "db:19530"]).unwrap();
        assert_eq!(cli.address.as_deref(), Some("db:19530"));
        assert!(matches!(cli.command, Commands::Count { collection } if collection == "docs"));
    }

    #[test]
    fn test_flush_needs_a_collection() {
        assert!(Cli::try_parse_from(["milvus-cli", "flush"]).is_err());

        let cli = Cli::try_parse_from(["milvus-cli", "flush", "a", "b"]).unwrap();
        assert!(matches!(cli.command, Commands::Flush { collections } if collections == ["a", "b"]));
    }

    #[test]
    fn test_drop_defaults_to_unconfirmed() {
        let cli = Cli::try_parse_from(["milvus-cli", "drop", "docs"]).unwrap();
        assert!(matches!(cli.command, Commands::Drop { yes: false, .. }));
    }
}
