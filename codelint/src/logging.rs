use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Installs the global subscriber. Logs go to stderr, so they never mix with the status output.
///
/// `RUST_LOG` takes precedence over the default level.
pub fn init_logging(verbose: bool) {
	let default_level = if verbose { "debug" } else { "warn" };

	let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

	// A subscriber may already be installed, for example by an embedding application
	let _ = tracing_subscriber::registry()
		.with(filter)
		.with(
			fmt::layer()
				.with_writer(std::io::stderr)
				.with_target(false),
		)
		.try_init();
}
