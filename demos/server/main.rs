//! Networked demo: serve the query engine over HTTP
//!
//! ```text
//! cargo run --example server -- salesboard.yaml
//! curl 'http://127.0.0.1:4000/transactions?regions=North&sort=totalAmount:desc&limit=5'
//! ```

use salesboard::prelude::*;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info,tower_http=debug")),
        )
        .init();

    let config = match std::env::args().nth(1) {
        Some(path) => ServerConfig::from_yaml_file(path)?,
        None => ServerConfig {
            seed_records: 250,
            ..Default::default()
        },
    };

    ServerBuilder::new().with_config(config).serve().await
}
