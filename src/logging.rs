use std::fs::File;
use std::path::Path;
use std::sync::Mutex;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

const DEFAULT_FILTER: &str = "connect_four=info";

fn env_filter(verbose: bool) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        if verbose {
            EnvFilter::new("connect_four=debug")
        } else {
            EnvFilter::new(DEFAULT_FILTER)
        }
    })
}

/// Send log output to `path`. The terminal belongs to the UI, so events are
/// never written to stdout or stderr.
pub fn init_file_logger(path: &Path, verbose: bool) -> std::io::Result<()> {
    let file = File::create(path)?;

    tracing_subscriber::registry()
        .with(env_filter(verbose))
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(Mutex::new(file))
                .with_ansi(false)
                .with_target(false)
                .with_thread_ids(false)
                .compact(),
        )
        .init();

    Ok(())
}
