//! # Tracing
//!
//! [`setup_tracing`] installs a compact `tracing_subscriber` formatter on stderr, so log
//! lines never mix with the table printed on stdout.
//!
//! `RUST_LOG` wins when set; otherwise the filter passed in (from `--log-filter`) is used.
//!
//! ```bash
//! # Writes and deletes
//! RUST_LOG=info inventory-tracker
//!
//! # Every request, with document payloads
//! RUST_LOG=debug inventory-tracker list
//!
//! # Only the store
//! RUST_LOG=doc_store=debug inventory-tracker
//! ```
//!
//! With `RUST_LOG=info`, adding to an existing item looks like:
//!
//! ```text
//! INFO Stored collection="inventory" key=apples created=false size=3
//! INFO add_stock{name=ItemName("apples") delta=2}: Stock increased name=apples quantity=5
//! ```
use tracing_subscriber::EnvFilter;

pub fn setup_tracing(default_filter: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .compact()
        .init();
}
