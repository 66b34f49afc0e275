//! CLI argument definitions using clap
//!
//! Commands:
//! - emissions-api serve [--host <host>] [--port <port>] [--data <path> | --seed <n>]
//! - emissions-api seed [--count <n>] [--out <path>]

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Read-only HTTP service listing emission records
#[derive(Parser, Debug)]
#[command(name = "emissions-api")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Start the HTTP server
    Serve {
        /// Host to bind to
        #[arg(long, default_value = "0.0.0.0")]
        host: String,

        /// Port to bind to
        #[arg(long, default_value_t = 8000)]
        port: u16,

        /// JSON seed file to load records from
        #[arg(long, conflicts_with = "seed")]
        data: Option<PathBuf>,

        /// Populate the store with this many random records
        #[arg(long)]
        seed: Option<usize>,
    },

    /// Generate a JSON seed file of random records
    Seed {
        /// Number of records to generate
        #[arg(long, default_value_t = 100)]
        count: usize,

        /// Output path
        #[arg(long, default_value = "./emissions.json")]
        out: PathBuf,
    },
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_serve_defaults() {
        let cli = Cli::parse_from(["emissions-api", "serve"]);
        match cli.command {
            Command::Serve {
                host,
                port,
                data,
                seed,
            } => {
                assert_eq!(host, "0.0.0.0");
                assert_eq!(port, 8000);
                assert!(data.is_none());
                assert!(seed.is_none());
            }
            _ => panic!("expected serve"),
        }
    }

    #[test]
    fn test_parse_seed_command() {
        let cli = Cli::parse_from(["emissions-api", "seed", "--count", "10", "--out", "x.json"]);
        match cli.command {
            Command::Seed { count, out } => {
                assert_eq!(count, 10);
                assert_eq!(out, PathBuf::from("x.json"));
            }
            _ => panic!("expected seed"),
        }
    }

    #[test]
    fn test_data_and_seed_conflict() {
        let result = Cli::try_parse_from([
            "emissions-api",
            "serve",
            "--data",
            "x.json",
            "--seed",
            "5",
        ]);
        assert!(result.is_err());
    }
}
