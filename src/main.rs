use anyhow::Context;
use clap::Parser;
use std::sync::Arc;

use descgen::cli::Cli;
use descgen::generation::{DescriptionBackend, HttpDescriptionBackend};
use descgen::http::build_client;
use descgen::logging::{default_log_path, init_tracing};
use descgen::ui;
use descgen::upload::{HttpImageStore, ImageStore};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = cli.load_config()?;

    let log_path = cli.log_file.clone().unwrap_or_else(default_log_path);
    if let Err(e) = init_tracing(&log_path) {
        eprintln!("Warning: logging disabled ({}): {}", log_path.display(), e);
    }

    tracing::info!(
        endpoint = %config.generation.endpoint,
        upload_url = %config.storage.upload_url,
        model = config.defaults.model.id(),
        length = config.defaults.length.as_str(),
        "Starting descgen"
    );

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .context("Failed to start async runtime")?;

    let client = build_client(&config.defaults).context("Failed to build HTTP client")?;
    let store: Arc<dyn ImageStore> = Arc::new(HttpImageStore::new(
        client.clone(),
        config.storage.upload_url.clone(),
    ));
    let backend: Arc<dyn DescriptionBackend> = Arc::new(HttpDescriptionBackend::new(
        client,
        config.generation.endpoint.clone(),
    ));

    ui::runtime::run(&config, runtime.handle().clone(), store, backend)
        .context("Terminal UI failed")?;

    runtime.shutdown_timeout(std::time::Duration::from_secs(1));
    Ok(())
}
