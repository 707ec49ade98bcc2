//! Library-scoped log formatting.
//!
//! Provider calls are the only part of the backend that talks to the
//! network, so their events get a richer rendering than the rest of the
//! app: RFC3339 UTC timestamps, source location, and span close events
//! carrying request durations. [`layer`] matches only events emitted by
//! this crate; the binary composes it next to its own plain layer and
//! filters that one to everything else.

use std::io::{self, IsTerminal};
use std::str::FromStr;

use tracing::Level;
use tracing_subscriber::filter::Directive;
use tracing_subscriber::fmt::format::Writer;
use tracing_subscriber::fmt::time::FormatTime;
use tracing_subscriber::registry::LookupSpan;
use tracing_subscriber::{EnvFilter, Layer, filter, fmt};

/// Target prefix of every event emitted by this crate.
pub const TARGET_PREFIX: &str = "llm_assist";

/// Compact RFC3339 UTC timer: `2026-08-23T10:20:30Z`.
#[derive(Clone, Debug, Default)]
struct ChronoRfc3339Utc;

impl FormatTime for ChronoRfc3339Utc {
    fn format_time(&self, w: &mut Writer<'_>) -> std::fmt::Result {
        let now = chrono::Utc::now();
        w.write_str(&now.to_rfc3339_opts(chrono::SecondsFormat::Secs, true))
    }
}

/// Formatting layer for this crate's events only.
///
/// Events from other targets pass through untouched, so the binary keeps
/// full control over how the rest of the app logs.
pub fn layer<S>() -> impl Layer<S> + Send + Sync
where
    S: tracing::Subscriber + for<'a> LookupSpan<'a>,
{
    let lib_only = filter::filter_fn(|meta| meta.target().starts_with(TARGET_PREFIX));

    fmt::layer()
        .compact()
        .with_timer(ChronoRfc3339Utc)
        .with_file(true)
        .with_line_number(true)
        .with_ansi(io::stdout().is_terminal())
        .with_span_events(fmt::format::FmtSpan::CLOSE)
        .with_filter(lib_only)
}

/// Level directive scoped to this crate, like `llm_assist=debug`.
pub fn level_directive(level: Level) -> Directive {
    let s = format!("{TARGET_PREFIX}={}", level.as_str().to_lowercase());
    Directive::from_str(&s).expect("valid level directive")
}

/// `EnvFilter` from `RUST_LOG` (or the given default) with this crate
/// raised to `level`. The usual call site passes `("info", DEBUG)`.
pub fn env_filter_with_level(default: &str, level: Level) -> EnvFilter {
    let base = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    base.add_directive(level_directive(level))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn timer_writes_compact_utc() {
        let mut out = String::new();
        ChronoRfc3339Utc
            .format_time(&mut Writer::new(&mut out))
            .unwrap();
        assert!(out.ends_with('Z'), "{out}");
        assert!(!out.contains('.'), "no fractional seconds: {out}");
    }

    #[test]
    fn directive_targets_this_crate() {
        assert_eq!(level_directive(Level::DEBUG).to_string(), "llm_assist=debug");
    }
}
