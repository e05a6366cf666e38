//! Logging integration using tracing.
//!
//! This module sets up a tracing-based logging system that integrates with
//! the standard Rust `tracing` ecosystem. It also captures `log` crate
//! calls and forwards them to tracing.
//!
//! # Example
//!
//! ```ignore
//! use antomsg::logger::init_logging;
//! use tracing::{info, debug};
//!
//! // Initialize logging (call once at startup)
//! init_logging();
//!
//! info!("registry populated");
//! debug!("decoding message");
//!
//! // Or use log crate (also works)
//! log::info!("This also works!");
//! ```

use std::sync::OnceLock;

use tracing_subscriber::{
    EnvFilter,
    fmt::{self, format::FmtSpan},
    layer::SubscriberExt,
    util::SubscriberInitExt,
};

static LOGGER_INITIALIZED: OnceLock<()> = OnceLock::new();

/// Initialize logging with tracing integration.
///
/// This sets up:
/// 1. A tracing subscriber that writes to stderr
/// 2. A bridge that forwards `log` crate calls to tracing
///
/// The filter honors `RUST_LOG` and defaults to `info`. Calling this more
/// than once is harmless; subsequent calls are ignored.
pub fn init_logging() {
    LOGGER_INITIALIZED.get_or_init(|| {
        // Set up log -> tracing bridge
        tracing_log::LogTracer::init().ok();

        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

        let fmt_layer = fmt::layer()
            .with_target(true)
            .with_thread_ids(false)
            .with_thread_names(false)
            .with_file(true)
            .with_line_number(true)
            .with_span_events(FmtSpan::NONE)
            .with_writer(std::io::stderr);

        tracing_subscriber::registry()
            .with(filter)
            .with(fmt_layer)
            .try_init()
            .ok();
    });
}

/// Re-export tracing macros for convenience.
pub use tracing::{debug, error, info, trace, warn};
