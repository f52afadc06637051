pub mod persistence;

use std::sync::Once;

use tracing_subscriber::{
    filter::{Directive, LevelFilter},
    fmt, EnvFilter,
};

use crate::config::model::DEFAULT_LOG_FILTER;

static TRACING_INIT: Once = Once::new();

/// Initializes the global tracing subscriber.
///
/// `RUST_LOG` is honoured; `default_directive` is added on top and falls back to
/// `budget_engine=info` when it does not parse. Later calls are no-ops.
pub fn init_tracing(default_directive: &str) {
    TRACING_INIT.call_once(|| {
        let filter =
            EnvFilter::from_default_env().add_directive(parse_directive(default_directive));
        // another subscriber may already be installed by the host application
        let _ = fmt().with_env_filter(filter).try_init();
    });
}

fn parse_directive(raw: &str) -> Directive {
    raw.parse()
        .or_else(|_| DEFAULT_LOG_FILTER.parse())
        .unwrap_or_else(|_| LevelFilter::INFO.into())
}
