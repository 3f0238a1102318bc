//! Diagnostics for the contact workflow.
//!
//! Field validations log at debug, the submission lifecycle at info and
//! failed attempts at warn or error. Every event raised while an attempt is
//! in flight is recorded inside a `submission` span carrying the attempt's
//! id, so one attempt can be followed from the loading label to the banner.

use tracing_subscriber::EnvFilter;
use uuid::Uuid;

use crate::settings::Settings;

/// Fallback directive when `log_level` does not parse.
const DEFAULT_DIRECTIVE: &str = "info";

/// Builds the event filter from `log_level` (e.g. "debug" or
/// "vortex_forms=trace,info"), falling back to [`DEFAULT_DIRECTIVE`].
pub fn log_filter(log_level: &str) -> EnvFilter {
    EnvFilter::try_new(log_level).unwrap_or_else(|_| EnvFilter::new(DEFAULT_DIRECTIVE))
}

/// Installs the global subscriber for the CLI and embedding applications.
///
/// Diagnostics go to stderr so command output on stdout stays clean. With
/// `debug` on they are pretty-printed for a terminal; otherwise each event
/// is one JSON object for log collectors. A subscriber that is already
/// installed is kept.
pub fn setup_logging(settings: &Settings) {
    let builder = tracing_subscriber::fmt()
        .with_env_filter(log_filter(&settings.log_level))
        .with_writer(std::io::stderr);

    let installed = if settings.debug {
        builder.pretty().try_init()
    } else {
        builder.json().try_init()
    };
    if installed.is_err() {
        tracing::debug!("global subscriber already installed");
    }
}

/// Opens the span one submission attempt runs in.
///
/// # Examples
///
/// ```
/// use vortex_core::logging::submission_span;
///
/// let id = uuid::Uuid::new_v4();
/// let _entered = submission_span(&id).entered();
/// tracing::info!("submitting contact form");
/// ```
pub fn submission_span(id: &Uuid) -> tracing::Span {
    tracing::info_span!("submission", id = %id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_filter_accepts_directives() {
        assert_eq!(log_filter("vortex_forms=trace").to_string(), "vortex_forms=trace");
    }

    #[test]
    fn test_log_filter_falls_back() {
        assert_eq!(log_filter("=[").to_string(), DEFAULT_DIRECTIVE);
    }

    #[test]
    fn test_setup_logging_twice_is_harmless() {
        let settings = Settings::default();
        setup_logging(&settings);
        setup_logging(&settings);
    }
}
