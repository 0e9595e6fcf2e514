//! Tracing initialization.

use std::io;
use std::sync::Once;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Environment variable holding the log filter directives
pub const LOG_ENV: &str = "LDS_GEN_LOG";

static INIT: Once = Once::new();

/// Initialize logging to stderr.
///
/// Reads `LDS_GEN_LOG` for filter directives, e.g. `LDS_GEN_LOG=lds_gen=debug`.
/// Falls back to `lds_gen=warn`, or `lds_gen=debug` when `verbose` is set.
/// Stdout is left untouched so it carries nothing but the generated script.
///
/// Only the first call has any effect.
pub fn init_tracing(verbose: bool) {
    INIT.call_once(|| {
        let fallback = if verbose { "lds_gen=debug" } else { "lds_gen=warn" };
        let filter =
            EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(fallback));

        tracing_subscriber::registry()
            .with(
                fmt::layer()
                    .with_writer(io::stderr)
                    .with_target(true)
                    .without_time(),
            )
            .with(filter)
            .init();
    });
}
