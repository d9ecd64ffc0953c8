use anyhow::Context;
use basalt_fifo::Fifo;
use cinder_config::CinderConfig;
use tracing::{debug, info, warn};
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    let config = match std::env::args().nth(1) {
        Some(path) => CinderConfig::load(path.clone())
            .with_context(|| format!("failed to load config from '{path}'"))?,
        None => CinderConfig::default(),
    };

    // RUST_LOG wins over the configured level when set.
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_level));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    info!(capacity = config.capacity, samples = config.samples.len(), "starting cinder");

    let mut fifo = Fifo::new(config.capacity).context("failed to create fifo")?;

    for &value in &config.samples {
        match fifo.push(value) {
            Ok(()) => debug!(value, len = fifo.len(), "pushed"),
            Err(err) => warn!(value, %err, "dropping sample"),
        }
    }

    info!(len = fifo.len(), "draining");
    while let Ok(value) = fifo.pop() {
        info!(value, "popped");
    }

    info!("done");
    Ok(())
}
