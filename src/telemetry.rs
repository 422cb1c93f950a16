use std::sync::Once;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

static INIT: Once = Once::new();

/// Default filter when `CATALOG_LOG` is unset.
pub const DEFAULT_FILTER: &str = "watch_catalog=info";

/// Installs the global `tracing` subscriber.
///
/// `filter` uses `EnvFilter` syntax, e.g. `watch_catalog=debug,reqwest=warn`.
/// An unparsable filter falls back to [`DEFAULT_FILTER`]. Only the first
/// call has an effect.
pub fn init_tracing(filter: &str) {
    INIT.call_once(|| {
        let filter =
            EnvFilter::try_new(filter).unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

        tracing_subscriber::registry()
            .with(fmt::layer().with_target(true))
            .with(filter)
            .init();
    });
}
