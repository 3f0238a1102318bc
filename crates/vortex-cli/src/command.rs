//! Subcommand dispatch for the `vortex` binary.
//!
//! Each subcommand implements [`VortexCommand`]; `main` registers the
//! built-ins in a [`CommandRegistry`], parses argv against the generated
//! clap tree and hands the chosen subcommand the resolved [`Settings`].

use std::collections::HashMap;
use std::path::PathBuf;

use async_trait::async_trait;
use vortex_core::{settings_loader, Settings, VortexError};

/// Name of the global option pointing at a settings file.
pub const SETTINGS_ARG: &str = "settings";

/// One `vortex` subcommand.
#[async_trait]
pub trait VortexCommand: Send + Sync {
    fn name(&self) -> &str;

    /// One-line summary shown by `vortex --help`.
    fn help(&self) -> &str;

    fn add_arguments(&self, cmd: clap::Command) -> clap::Command {
        cmd
    }

    /// Runs against the subcommand's own matches. Errors map to the
    /// process exit code through [`VortexError::exit_code`].
    async fn handle(
        &self,
        matches: &clap::ArgMatches,
        settings: &Settings,
    ) -> Result<(), VortexError>;
}

/// Subcommands keyed by name.
pub struct CommandRegistry {
    commands: HashMap<String, Box<dyn VortexCommand>>,
}

impl Default for CommandRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl CommandRegistry {
    pub fn new() -> Self {
        Self {
            commands: HashMap::new(),
        }
    }

    /// A later command with the same name wins.
    pub fn register(&mut self, command: Box<dyn VortexCommand>) {
        let name = command.name().to_string();
        self.commands.insert(name, command);
    }

    pub fn get(&self, name: &str) -> Option<&dyn VortexCommand> {
        self.commands.get(name).map(AsRef::as_ref)
    }

    /// Names in help order.
    pub fn list_commands(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.commands.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// The `vortex` clap tree: one subcommand per entry plus the global
    /// `--settings` option.
    pub fn build_cli(&self) -> clap::Command {
        let mut app = clap::Command::new("vortex")
            .about("Contact form validation and submission utility")
            .subcommand_required(true)
            .arg(
                clap::Arg::new(SETTINGS_ARG)
                    .long(SETTINGS_ARG)
                    .global(true)
                    .value_parser(clap::value_parser!(PathBuf))
                    .help("Settings file (TOML, or JSON by extension)"),
            );

        for name in self.list_commands() {
            let cmd = &self.commands[name];
            let subcmd = clap::Command::new(name.to_owned()).about(cmd.help().to_owned());
            app = app.subcommand(cmd.add_arguments(subcmd));
        }

        app
    }

    /// Runs the subcommand selected in `matches`.
    pub async fn execute(
        &self,
        matches: &clap::ArgMatches,
        settings: &Settings,
    ) -> Result<(), VortexError> {
        let (name, sub_matches) = matches.subcommand().ok_or_else(|| {
            VortexError::ConfigurationError("No subcommand specified".to_string())
        })?;

        let cmd = self
            .get(name)
            .ok_or_else(|| VortexError::ConfigurationError(format!("Unknown command: {name}")))?;

        tracing::debug!(command = name, "executing command");
        cmd.handle(sub_matches, settings).await
    }
}

/// Loads the settings selected on the command line.
///
/// With `--settings` the file is loaded and environment overrides are applied
/// on top; otherwise defaults plus environment overrides are used.
pub fn resolve_settings(matches: &clap::ArgMatches) -> Result<Settings, VortexError> {
    match matches.get_one::<PathBuf>(SETTINGS_ARG) {
        Some(path) => settings_loader::from_file_with_env(path),
        None => Ok(settings_loader::from_env()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct TestCommand {
        cmd_name: String,
    }

    impl TestCommand {
        fn new(name: &str) -> Self {
            Self {
                cmd_name: name.to_string(),
            }
        }
    }

    #[async_trait]
    impl VortexCommand for TestCommand {
        fn name(&self) -> &str {
            &self.cmd_name
        }

        fn help(&self) -> &'static str {
            "A test command"
        }

        fn add_arguments(&self, cmd: clap::Command) -> clap::Command {
            cmd.arg(
                clap::Arg::new("verbose")
                    .long("verbose")
                    .action(clap::ArgAction::SetTrue),
            )
        }

        async fn handle(
            &self,
            _matches: &clap::ArgMatches,
            _settings: &Settings,
        ) -> Result<(), VortexError> {
            Ok(())
        }
    }

    struct FailingCommand;

    #[async_trait]
    impl VortexCommand for FailingCommand {
        fn name(&self) -> &'static str {
            "fail"
        }

        fn help(&self) -> &'static str {
            "A command that always fails"
        }

        async fn handle(
            &self,
            _matches: &clap::ArgMatches,
            _settings: &Settings,
        ) -> Result<(), VortexError> {
            Err(VortexError::SubmissionFailed("deliberate failure".to_string()))
        }
    }

    #[test]
    fn test_register_and_get() {
        let mut registry = CommandRegistry::new();
        assert!(registry.is_empty());
        registry.register(Box::new(TestCommand::new("test")));
        assert_eq!(registry.len(), 1);

        let cmd = registry.get("test").unwrap();
        assert_eq!(cmd.name(), "test");
        assert_eq!(cmd.help(), "A test command");
        assert!(registry.get("nonexistent").is_none());
    }

    #[test]
    fn test_list_commands_sorted() {
        let mut registry = CommandRegistry::new();
        registry.register(Box::new(TestCommand::new("validate")));
        registry.register(Box::new(TestCommand::new("check")));
        registry.register(Box::new(TestCommand::new("submit")));
        assert_eq!(registry.list_commands(), vec!["check", "submit", "validate"]);
    }

    #[test]
    fn test_register_replaces_existing() {
        let mut registry = CommandRegistry::new();
        registry.register(Box::new(TestCommand::new("test")));
        registry.register(Box::new(TestCommand::new("test")));
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_build_cli_with_global_settings() {
        let mut registry = CommandRegistry::new();
        registry.register(Box::new(TestCommand::new("test")));

        let matches = registry
            .build_cli()
            .try_get_matches_from(["vortex", "test", "--verbose", "--settings", "site.toml"])
            .unwrap();
        assert_eq!(
            matches.get_one::<PathBuf>(SETTINGS_ARG),
            Some(&PathBuf::from("site.toml"))
        );
        let (name, sub_matches) = matches.subcommand().unwrap();
        assert_eq!(name, "test");
        assert!(sub_matches.get_flag("verbose"));
    }

    #[test]
    fn test_build_cli_subcommands_in_name_order() {
        let mut registry = CommandRegistry::new();
        registry.register(Box::new(TestCommand::new("validate")));
        registry.register(Box::new(TestCommand::new("check")));

        let app = registry.build_cli();
        let subcommands: Vec<(String, String)> = app
            .get_subcommands()
            .map(|sub| {
                let about = sub.get_about().map(ToString::to_string).unwrap_or_default();
                (sub.get_name().to_string(), about)
            })
            .collect();
        assert_eq!(
            subcommands,
            vec![
                ("check".to_string(), "A test command".to_string()),
                ("validate".to_string(), "A test command".to_string()),
            ]
        );
    }

    #[test]
    fn test_subcommand_required() {
        let registry = CommandRegistry::new();
        assert!(registry.build_cli().try_get_matches_from(["vortex"]).is_err());
    }

    #[test]
    fn test_resolve_settings_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("site.toml");
        std::fs::write(&path, "[form]\nloading_label = \"Posting...\"\n").unwrap();

        let mut registry = CommandRegistry::new();
        registry.register(Box::new(TestCommand::new("test")));
        let matches = registry
            .build_cli()
            .try_get_matches_from(["vortex", "--settings", path.to_str().unwrap(), "test"])
            .unwrap();

        let settings = resolve_settings(&matches).unwrap();
        assert_eq!(settings.form.loading_label, "Posting...");
    }

    #[test]
    fn test_resolve_settings_missing_file() {
        let mut registry = CommandRegistry::new();
        registry.register(Box::new(TestCommand::new("test")));
        let matches = registry
            .build_cli()
            .try_get_matches_from(["vortex", "--settings", "/nonexistent/site.toml", "test"])
            .unwrap();

        let err = resolve_settings(&matches).unwrap_err();
        assert_eq!(err.exit_code(), 78);
    }

    #[tokio::test]
    async fn test_execute() {
        let mut registry = CommandRegistry::new();
        registry.register(Box::new(TestCommand::new("test")));
        registry.register(Box::new(FailingCommand));
        let settings = Settings::default();

        let matches = registry.build_cli().try_get_matches_from(["vortex", "test"]).unwrap();
        assert!(registry.execute(&matches, &settings).await.is_ok());

        let matches = registry.build_cli().try_get_matches_from(["vortex", "fail"]).unwrap();
        let err = registry.execute(&matches, &settings).await.unwrap_err();
        assert_eq!(err.exit_code(), 3);
    }
}
