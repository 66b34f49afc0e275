//! CLI module
//!
//! Commands:
//! - serve: start the HTTP listing server
//! - seed: write a JSON seed file of random records

mod args;
mod commands;
mod errors;

pub use args::{Cli, Command};
pub use commands::run;
pub use errors::{CliError, CliResult};
