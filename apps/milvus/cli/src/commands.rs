use domain_milvus::{MilvusClient, ensure_success};
use eyre::{Result, bail};
use protos::milvus::{FlushParam, IndexType, MetricType};
use tracing::info;

use crate::Commands;

pub(crate) async fn run(client: &MilvusClient, command: Commands) -> Result<()> {
    match command {
        Commands::Ping => {
            let reply = ensure_success(client.server_version().await?)?;
            println!("Milvus {}", reply.string_reply);
        }

        Commands::Collections => {
            let reply = ensure_success(client.show_collections().await?)?;
            for name in reply.collection_names {
                println!("{name}");
            }
        }

        Commands::Describe { collection } => {
            let schema = ensure_success(client.describe_collection(collection.as_str()).await?)?;
            let metric = MetricType::try_from(schema.metric_type)
                .map(|m| m.to_string())
                .unwrap_or_else(|raw| format!("unknown ({raw})"));
            println!("name:            {}", schema.collection_name);
            println!("dimension:       {}", schema.dimension);
            println!("index file size: {} MB", schema.index_file_size);
            println!("metric:          {metric}");
            for param in &schema.extra_params {
                println!("{}: {}", param.key, param.value);
            }
        }

        Commands::Count { collection } => {
            let reply = ensure_success(client.count_collection(collection.as_str()).await?)?;
            println!("{}", reply.collection_row_count);
        }

        Commands::Info { collection } => {
            let reply = ensure_success(client.show_collection_info(collection.as_str()).await?)?;
            let info: serde_json::Value = serde_json::from_str(&reply.json_info)?;
            println!("{}", serde_json::to_string_pretty(&info)?);
        }

        Commands::Partitions { collection } => {
            let reply = ensure_success(client.show_partitions(collection.as_str()).await?)?;
            for tag in reply.partition_tag_array {
                println!("{tag}");
            }
        }

        Commands::Index { collection } => {
            let index = ensure_success(client.describe_index(collection.as_str()).await?)?;
            let kind = IndexType::try_from(index.index_type)
                .map(|t| t.to_string())
                .unwrap_or_else(|raw| format!("unknown ({raw})"));
            println!("type: {kind}");
            for param in &index.extra_params {
                println!("{}: {}", param.key, param.value);
            }
        }

        Commands::Flush { collections } => {
            ensure_success(client.flush(FlushParam::from_iter(collections)).await?)?;
            info!("Flushed");
        }

        Commands::Drop { collection, yes } => {
            if !yes {
                bail!("refusing to drop {collection} without --yes");
            }
            ensure_success(client.drop_collection(collection.as_str()).await?)?;
            info!(%collection, "Dropped collection");
        }

        Commands::Cmd { command } => {
            let reply = ensure_success(client.cmd(command).await?)?;
            println!("{}", reply.string_reply);
        }
    }

    Ok(())
}
