//! The `check` command.
//!
//! Inspects the loaded settings for values that would make the form behave
//! badly or unexpectedly.

use async_trait::async_trait;
use vortex_core::{Settings, VortexError};

use crate::command::VortexCommand;

/// Runs configuration checks.
pub struct CheckCommand;

/// The result of a single configuration check.
#[derive(Debug, Clone)]
pub struct CheckMessage {
    /// The severity level of this check result.
    pub level: CheckLevel,
    /// A human-readable description of the issue.
    pub msg: String,
    /// An optional hint for how to resolve the issue.
    pub hint: Option<String>,
    /// A unique identifier for this check (e.g. "transport.W001").
    pub id: String,
}

/// Severity levels for check results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum CheckLevel {
    Info,
    Warning,
    Error,
}

impl std::fmt::Display for CheckLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Info => write!(f, "INFO"),
            Self::Warning => write!(f, "WARNING"),
            Self::Error => write!(f, "ERROR"),
        }
    }
}

fn message(level: CheckLevel, id: &str, msg: &str, hint: &str) -> CheckMessage {
    CheckMessage {
        level,
        msg: msg.to_string(),
        hint: Some(hint.to_string()),
        id: id.to_string(),
    }
}

/// Runs every configuration check against the given settings.
pub fn run_checks(settings: &Settings) -> Vec<CheckMessage> {
    let mut messages = Vec::new();

    if settings.form.debounce_ms == 0 {
        messages.push(message(
            CheckLevel::Warning,
            "form.W001",
            "Debounce quiet period is 0ms",
            "Every keystroke will validate immediately; the usual value is 300",
        ));
    }

    if settings.form.message_max_length == 0 {
        messages.push(message(
            CheckLevel::Error,
            "form.E001",
            "Message maximum length is 0",
            "Set form.message_max_length to a positive character count",
        ));
    }

    if settings.form.loading_label.trim().is_empty() {
        messages.push(message(
            CheckLevel::Warning,
            "form.W002",
            "Loading label is empty",
            "The submit control would show no text while sending",
        ));
    }

    let rate = settings.transport.failure_rate;
    if rate.is_nan() || !(0.0..=1.0).contains(&rate) {
        messages.push(message(
            CheckLevel::Error,
            "transport.E001",
            &format!("Failure rate {rate} is outside [0, 1]"),
            "Set transport.failure_rate to a probability between 0 and 1",
        ));
    } else if rate > 0.0 {
        messages.push(message(
            CheckLevel::Warning,
            "transport.W001",
            &format!("Failure injection is enabled ({:.0}% of submissions fail)", rate * 100.0),
            "Only enable failure injection for resilience testing",
        ));
    }

    let banners = [
        ("correct_errors", &settings.messages.correct_errors),
        ("success", &settings.messages.success),
        ("failure", &settings.messages.failure),
    ];
    for (name, text) in banners {
        if text.trim().is_empty() {
            messages.push(message(
                CheckLevel::Error,
                "messages.E001",
                &format!("Banner text messages.{name} is empty"),
                "Visitors would get no feedback for this outcome",
            ));
        }
    }

    messages
}

#[async_trait]
impl VortexCommand for CheckCommand {
    fn name(&self) -> &'static str {
        "check"
    }

    fn help(&self) -> &'static str {
        "Check the loaded settings for problems"
    }

    async fn handle(
        &self,
        _matches: &clap::ArgMatches,
        settings: &Settings,
    ) -> Result<(), VortexError> {
        let messages = run_checks(settings);

        if messages.is_empty() {
            tracing::info!("Configuration check identified no issues");
            println!("Configuration check identified no issues.");
            return Ok(());
        }

        let errors = messages.iter().filter(|m| m.level >= CheckLevel::Error).count();
        let warnings = messages.iter().filter(|m| m.level == CheckLevel::Warning).count();

        for msg in &messages {
            let hint_text = msg
                .hint
                .as_ref()
                .map_or(String::new(), |h| format!("\n\tHINT: {h}"));
            println!("{} ({}): {}{}", msg.level, msg.id, msg.msg, hint_text);
        }

        tracing::info!(
            "Configuration check identified {} issue(s) ({} error(s), {} warning(s))",
            messages.len(),
            errors,
            warnings
        );

        if errors > 0 {
            return Err(VortexError::ConfigurationError(format!(
                "Configuration check found {errors} error(s)"
            )));
        }

        Ok(())
    }
}
