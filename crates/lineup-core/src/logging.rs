use tracing_subscriber::prelude::*;
use tracing_subscriber::{EnvFilter, fmt};

/// Install the global JSON subscriber on stderr.
///
/// `quiet` (the CLI default) filters every event out so stderr stays clean
/// for user-facing messages. Otherwise `RUST_LOG` is honoured, falling back
/// to `info`. Calling this more than once is a no-op.
pub fn init_logging(quiet: bool) {
    let filter = if quiet {
        EnvFilter::new("off")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    };

    let layer = fmt::layer()
        .json()
        .with_writer(std::io::stderr)
        .with_target(false);

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(layer)
        .try_init();
}
