use tracing::Level;
use tracing_subscriber::EnvFilter;

/// Level used when `RUST_LOG` is not set.
pub fn default_level(quiet: bool, verbose: bool) -> Level {
    if quiet {
        Level::WARN
    } else if verbose {
        Level::DEBUG
    } else {
        Level::INFO
    }
}

/// Install the operator console logger on stderr. `RUST_LOG` takes precedence
/// over the quiet/verbose flags. Calling this twice is harmless.
pub fn init(quiet: bool, verbose: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::default().add_directive(default_level(quiet, verbose).into()));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}
