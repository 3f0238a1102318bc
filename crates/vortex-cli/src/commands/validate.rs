//! The `validate` command.
//!
//! Runs the whole-form validation pass over a payload file and reports every
//! failing field, the way the page marks them on submit.

use std::collections::BTreeMap;
use std::path::PathBuf;

use async_trait::async_trait;
use vortex_core::{Settings, VortexError};
use vortex_forms::{validate_form, FormErrors};

use crate::command::VortexCommand;
use crate::payload;

/// Validates a contact payload without submitting it.
pub struct ValidateCommand;

/// Renders errors keyed by the page's error-region ids (`emailError`, ...).
pub fn errors_to_json(errors: &FormErrors) -> serde_json::Value {
    let map: BTreeMap<String, &str> = errors
        .iter()
        .map(|(field, err)| (field.error_key(), err.message.as_str()))
        .collect();
    serde_json::json!(map)
}

#[async_trait]
impl VortexCommand for ValidateCommand {
    fn name(&self) -> &'static str {
        "validate"
    }

    fn help(&self) -> &'static str {
        "Validate a contact payload (JSON or TOML)"
    }

    fn add_arguments(&self, cmd: clap::Command) -> clap::Command {
        cmd.arg(
            clap::Arg::new("payload")
                .required(true)
                .value_parser(clap::value_parser!(PathBuf))
                .help("Payload file"),
        )
        .arg(
            clap::Arg::new("json")
                .long("json")
                .action(clap::ArgAction::SetTrue)
                .help("Print errors as a JSON object"),
        )
    }

    async fn handle(
        &self,
        matches: &clap::ArgMatches,
        _settings: &Settings,
    ) -> Result<(), VortexError> {
        let path = matches
            .get_one::<PathBuf>("payload")
            .ok_or_else(|| VortexError::ConfigurationError("payload is required".to_string()))?;
        let form = payload::load(path)?;
        let errors = validate_form(&form);
        tracing::debug!(payload = %path.display(), invalid = errors.len(), "validated payload");

        if matches.get_flag("json") {
            let rendered = serde_json::to_string_pretty(&errors_to_json(&errors))
                .map_err(|e| VortexError::SerializationError(e.to_string()))?;
            println!("{rendered}");
        } else if errors.is_empty() {
            println!("{}: all fields valid", path.display());
        } else {
            for (field, err) in errors.iter() {
                println!("  ✗ {}: {}", field.label(), err.message);
            }
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(VortexError::InvalidForm(errors.len()))
        }
    }
}
