use anyhow::Context;
use tracing::Level;
use tracing_subscriber::fmt::writer::BoxMakeWriter;

use crate::config::{LogConfig, LogTarget};

/// Installs the global fmt subscriber, writing to the configured target.
pub fn init(cfg: &LogConfig) -> anyhow::Result<()> {
    let level: Level = cfg
        .level
        .parse()
        .with_context(|| format!("Invalid log level {:?}", cfg.level))?;

    let writer = match cfg.target {
        LogTarget::Stderr => BoxMakeWriter::new(std::io::stderr),
        LogTarget::Stdout => BoxMakeWriter::new(std::io::stdout),
    };

    tracing_subscriber::fmt()
        .with_target(false)
        .with_level(true)
        .with_max_level(level)
        .with_writer(writer)
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to install log subscriber: {}", e))
}
