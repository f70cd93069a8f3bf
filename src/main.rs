use std::io;

use anyhow::Context;
use clap::Parser;
use lumber::{relay, Cli, HookMode, Logger, MSG_HOOK};

const PROGRAM: &str = env!("CARGO_PKG_NAME");

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_env("RUST_LOG")
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .init();

    let config = cli.resolve(PROGRAM).context("invalid logger configuration")?;
    let logger = Logger::init(&config)
        .with_context(|| format!("cannot start logger on '{}'", config.logfile.display()))?;

    for word in &cli.redact {
        logger.register_hook(MSG_HOOK, HookMode::Pass, relay::redact(word.clone()));
    }

    let stats = relay::relay(&logger, io::stdin().lock())?;
    tracing::info!(relayed = stats.relayed, skipped = stats.skipped, "stdin closed");

    logger.shutdown();
    Ok(())
}
