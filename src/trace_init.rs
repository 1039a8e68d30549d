//! JSON trace log for suggestion diagnostics.
//!
//! Compiled in with the `trace` feature. Without it `init_tracing` does
//! nothing and no subscriber is installed, so the spans in `suggest_core`
//! stay inert.

use std::path::Path;

/// Log file created inside the directory passed to `init_tracing`.
pub const TRACE_FILE_NAME: &str = "suggest-trace.jsonl";

/// Environment variable holding an `EnvFilter` directive.
pub const TRACE_FILTER_ENV: &str = "SUGGEST_TRACE";

/// Keeps the background log writer alive. Pending lines are flushed when it
/// is dropped, so hold it for as long as tracing is wanted.
#[must_use = "dropping the guard stops the trace writer"]
pub struct TraceGuard {
    #[cfg(feature = "trace")]
    _worker: Option<tracing_appender::non_blocking::WorkerGuard>,
}

/// Install the JSON file subscriber. Only the first call per process installs
/// anything; later calls return an inert guard.
#[cfg(feature = "trace")]
pub fn init_tracing(log_dir: &Path) -> TraceGuard {
    use std::sync::atomic::{AtomicBool, Ordering};

    use tracing_subscriber::fmt::format::FmtSpan;
    use tracing_subscriber::EnvFilter;

    static INSTALLED: AtomicBool = AtomicBool::new(false);

    if INSTALLED.swap(true, Ordering::SeqCst) {
        return TraceGuard { _worker: None };
    }
    let appender = tracing_appender::rolling::never(log_dir, TRACE_FILE_NAME);
    let (writer, worker) = tracing_appender::non_blocking(appender);
    let filter = EnvFilter::try_from_env(TRACE_FILTER_ENV)
        .unwrap_or_else(|_| EnvFilter::new("suggest_engine=debug,suggest_core=debug"));

    // A host may already have a global subscriber; leave it in place.
    if tracing_subscriber::fmt()
        .json()
        .with_writer(writer)
        .with_target(true)
        .with_span_events(FmtSpan::CLOSE)
        .with_env_filter(filter)
        .try_init()
        .is_err()
    {
        return TraceGuard { _worker: None };
    }
    TraceGuard {
        _worker: Some(worker),
    }
}

#[cfg(not(feature = "trace"))]
pub fn init_tracing(_log_dir: &Path) -> TraceGuard {
    TraceGuard {}
}
