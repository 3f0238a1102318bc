//! The `submit` command.
//!
//! Replays a payload through a [`FormController`] as if a visitor had filled
//! in the page, then submits it through the simulated transport. Field errors
//! and banners are rendered by a [`ConsoleView`].

use std::path::PathBuf;
use std::sync::Arc;

use async_trait::async_trait;
use vortex_core::{Settings, VortexError};
use vortex_forms::{ContactForm, FieldId, FormController, SimulatedTransport, SubmitReceipt};

use crate::command::VortexCommand;
use crate::console::ConsoleView;
use crate::payload;

/// Submits a contact payload through the simulated transport.
pub struct SubmitCommand;

/// Applies the command-line transport overrides to a copy of `settings`.
fn effective_settings(matches: &clap::ArgMatches, settings: &Settings) -> Settings {
    let mut settings = settings.clone();
    if let Some(rate) = matches.get_one::<f64>("failure-rate") {
        settings.transport.failure_rate = *rate;
    }
    if let Some(ms) = matches.get_one::<u64>("latency-ms") {
        settings.transport.latency_ms = *ms;
    }
    settings
}

/// Fills the form field by field and submits it.
pub async fn replay(
    form: &ContactForm,
    view: Arc<ConsoleView>,
    settings: &Settings,
) -> Result<SubmitReceipt, VortexError> {
    let transport = SimulatedTransport::from_settings(&settings.transport);
    let controller = FormController::new(view, Arc::new(transport), settings);

    for field in FieldId::ALL {
        controller.change(field, form.value(field));
    }
    controller.submit().await.into_result()
}

#[async_trait]
impl VortexCommand for SubmitCommand {
    fn name(&self) -> &'static str {
        "submit"
    }

    fn help(&self) -> &'static str {
        "Submit a contact payload through the simulated transport"
    }

    fn add_arguments(&self, cmd: clap::Command) -> clap::Command {
        cmd.arg(
            clap::Arg::new("payload")
                .required(true)
                .value_parser(clap::value_parser!(PathBuf))
                .help("Payload file (JSON or TOML)"),
        )
        .arg(
            clap::Arg::new("failure-rate")
                .long("failure-rate")
                .value_parser(clap::value_parser!(f64))
                .help("Probability that the simulated attempt fails"),
        )
        .arg(
            clap::Arg::new("latency-ms")
                .long("latency-ms")
                .value_parser(clap::value_parser!(u64))
                .help("Simulated transport latency in milliseconds"),
        )
    }

    async fn handle(
        &self,
        matches: &clap::ArgMatches,
        settings: &Settings,
    ) -> Result<(), VortexError> {
        let path = matches
            .get_one::<PathBuf>("payload")
            .ok_or_else(|| VortexError::ConfigurationError("payload is required".to_string()))?;
        let form = payload::load(path)?;
        let settings = effective_settings(matches, settings);

        tracing::info!(
            payload = %path.display(),
            latency_ms = settings.transport.latency_ms,
            failure_rate = settings.transport.failure_rate,
            "replaying contact payload"
        );
        let receipt = replay(&form, Arc::new(ConsoleView::new()), &settings).await?;
        println!("receipt {} at {}", receipt.id, receipt.received_at.to_rfc3339());
        Ok(())
    }
}
