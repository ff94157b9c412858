//! Command-line and environment configuration.

use clap::Parser;
use doc_store::{StoreConfig, DEFAULT_BUFFER_SIZE};
use std::path::PathBuf;

#[derive(Debug, Clone, Parser)]
#[command(name = "inventory-tracker")]
#[command(about = "Track named inventory items and their quantities")]
#[command(version)]
pub struct Config {
    /// JSON snapshot file holding the inventory; without it nothing is kept on exit
    #[arg(long, env = "INVENTORY_DATA", value_name = "FILE")]
    pub data: Option<PathBuf>,

    /// Capacity of the channel between clients and the store
    #[arg(long, default_value_t = DEFAULT_BUFFER_SIZE, value_parser = parse_buffer_size)]
    pub buffer_size: usize,

    /// Log filter used when RUST_LOG is not set
    #[arg(long, default_value = "warn", value_name = "FILTER")]
    pub log_filter: String,

    /// Run this single console command and exit, e.g. `add apples 3`
    #[arg(trailing_var_arg = true, allow_hyphen_values = true, value_name = "COMMAND")]
    pub command: Vec<String>,
}

impl Config {
    pub fn store_config(&self) -> StoreConfig {
        StoreConfig {
            buffer_size: self.buffer_size,
            snapshot: self.data.clone(),
        }
    }

    /// The one-shot command line, if any words were given.
    pub fn one_shot(&self) -> Option<String> {
        if self.command.is_empty() {
            None
        } else {
            Some(self.command.join(" "))
        }
    }
}

fn parse_buffer_size(raw: &str) -> Result<usize, String> {
    match raw.parse::<usize>() {
        Ok(0) => Err("buffer size must be at least 1".to_string()),
        Ok(size) => Ok(size),
        Err(e) => Err(e.to_string()),
    }
}
