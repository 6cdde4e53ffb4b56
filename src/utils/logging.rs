//! Logging utilities for the application
//!
//! Logs are written with `tracing_subscriber` to stderr, so the result line of
//! each command (deployed address, transaction hash) is the only thing printed
//! on stdout. The level comes from `RUST_LOG` and defaults to `info`.
use tracing_subscriber::{filter::EnvFilter, fmt, prelude::*};

/// Default filter when `RUST_LOG` is unset or invalid
const DEFAULT_LOG_FILTER: &str = "info";

/// Setup logging to stderr
pub fn setup_logging() -> Result<(), Box<dyn std::error::Error + Send + Sync + 'static>> {
	setup_logging_with_writer(std::io::stderr)?;
	Ok(())
}

/// Setup logging with a custom writer
pub fn setup_logging_with_writer<W>(
	writer: W,
) -> Result<(), Box<dyn std::error::Error + Send + Sync + 'static>>
where
	W: for<'writer> tracing_subscriber::fmt::MakeWriter<'writer> + Send + Sync + 'static,
{
	let filter = EnvFilter::try_from_default_env()
		.unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

	log_subscriber(writer, filter).try_init()?;
	Ok(())
}

/// Compact subscriber without targets or thread names
fn log_subscriber<W>(writer: W, filter: EnvFilter) -> impl tracing::Subscriber + Send + Sync
where
	W: for<'writer> tracing_subscriber::fmt::MakeWriter<'writer> + Send + Sync + 'static,
{
	tracing_subscriber::registry().with(filter).with(
		fmt::layer()
			.with_writer(writer)
			.event_format(
				fmt::format()
					.with_level(true)
					.with_target(false)
					.with_thread_ids(false)
					.with_thread_names(false)
					.with_ansi(true)
					.compact(),
			)
			.fmt_fields(fmt::format::PrettyFields::new()),
	)
}
