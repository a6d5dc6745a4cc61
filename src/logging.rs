use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Default filter when `RUST_LOG` is not set.
pub const DEFAULT_LOG_DIRECTIVES: &str = "sleeper_watch=info,tower_http=info";

/// Build the log filter. `RUST_LOG` wins; `verbose` raises this crate to debug.
pub fn build_filter(verbose: bool) -> EnvFilter {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_DIRECTIVES));

    if verbose {
        match "sleeper_watch=debug".parse() {
            Ok(directive) => filter.add_directive(directive),
            Err(_) => filter,
        }
    } else {
        filter
    }
}

/// Install the global subscriber, logging to stderr.
///
/// Safe to call more than once; later calls are ignored.
pub fn setup_logging(verbose: bool) {
    let _ = tracing_subscriber::registry()
        .with(
            fmt::Layer::new()
                .with_writer(std::io::stderr)
                .with_filter(build_filter(verbose)),
        )
        .try_init();
}
