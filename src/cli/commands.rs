//! CLI command implementations

use std::fs;
use std::sync::Arc;

use rand::thread_rng;

use crate::http_server::{HttpServer, HttpServerConfig};
use crate::store::{seed, MemoryStore};

use super::args::{Cli, Command};
use super::errors::{CliError, CliResult};

/// Parse arguments and dispatch to the selected command
pub async fn run() -> CliResult<()> {
    let cli = Cli::parse_args();

    match cli.command {
        Command::Serve {
            host,
            port,
            data,
            seed,
        } => serve(host, port, data, seed).await,
        Command::Seed { count, out } => write_seed_file(count, &out),
    }
}

/// Boot the store and enter the serving loop
async fn serve(
    host: String,
    port: u16,
    data: Option<std::path::PathBuf>,
    seed_count: Option<usize>,
) -> CliResult<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,tower_http=debug".into()),
        )
        .init();

    let store = match (data, seed_count) {
        (Some(path), _) => {
            let store = MemoryStore::from_seed_file(&path)?;
            tracing::info!("loaded {} records from {}", store.len()?, path.display());
            store
        }
        (None, Some(count)) => {
            let store = MemoryStore::with_records(seed::generate(count, &mut thread_rng()));
            tracing::info!("seeded store with {} random records", count);
            store
        }
        (None, None) => MemoryStore::new(),
    };

    let config = HttpServerConfig::with_addr(host, port);
    let server = HttpServer::with_config(config, Arc::new(store));
    server.start().await?;

    Ok(())
}

/// Generate random records and write them as a JSON seed file
fn write_seed_file(count: usize, out: &std::path::Path) -> CliResult<()> {
    let rows = seed::generate(count, &mut thread_rng());

    let json = serde_json::to_string_pretty(&rows)
        .map_err(|e| CliError::SeedWrite(e.to_string()))?;
    fs::write(out, json).map_err(|e| CliError::SeedWrite(e.to_string()))?;

    println!("Wrote {} records to {}", count, out.display());
    Ok(())
}
