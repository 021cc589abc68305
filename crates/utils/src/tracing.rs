// Copyright 2025 Irreducible Inc.

/// Set to a truthy value to log span close events with their timings.
pub const TRACE_SPANS_ENV: &str = "HASHBLOCK_TRACE_SPANS";

/// Installs the global subscriber. Safe to call more than once.
///
/// The filter comes from `RUST_LOG` and defaults to `warn`.
pub fn init_tracing() {
	use tracing_subscriber::{
		fmt::format::FmtSpan, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter,
	};

	use crate::env::boolean_env_flag_set;

	let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
	let span_events = if boolean_env_flag_set(TRACE_SPANS_ENV) {
		FmtSpan::CLOSE
	} else {
		FmtSpan::NONE
	};

	let _ = tracing_subscriber::registry()
		.with(filter)
		.with(tracing_subscriber::fmt::layer().with_span_events(span_events))
		.try_init();
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_init_is_idempotent() {
		init_tracing();
		init_tracing();
		tracing::warn!("subscriber installed");
	}
}
