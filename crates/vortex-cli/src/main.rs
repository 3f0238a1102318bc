//! The `vortex` binary.

use vortex_cli::command::{resolve_settings, CommandRegistry};
use vortex_cli::commands::register_builtin_commands;
use vortex_core::logging::setup_logging;

#[tokio::main]
async fn main() {
    let mut registry = CommandRegistry::new();
    register_builtin_commands(&mut registry);
    let matches = registry.build_cli().get_matches();

    let settings = match resolve_settings(&matches) {
        Ok(settings) => settings,
        Err(err) => {
            eprintln!("error: {err}");
            std::process::exit(err.exit_code());
        }
    };
    setup_logging(&settings);

    if let Err(err) = registry.execute(&matches, &settings).await {
        tracing::error!(error = %err, "command failed");
        eprintln!("error: {err}");
        std::process::exit(err.exit_code());
    }
}
