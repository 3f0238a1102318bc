//! # vortex-cli
//!
//! Command-line front end for the vortex contact form.
//!
//! - **Commands** - A registry of CLI commands plus the built-in `check`,
//!   `validate` and `submit` commands
//! - **Console view** - Renders the form's feedback to the terminal
//! - **Payloads** - Contact form payloads in JSON or TOML
//!
//! ## Quick Start
//!
//! ```rust
//! use vortex_cli::command::CommandRegistry;
//! use vortex_cli::commands::register_builtin_commands;
//!
//! let mut registry = CommandRegistry::new();
//! register_builtin_commands(&mut registry);
//!
//! let names = registry.list_commands();
//! assert!(names.contains(&"check"));
//! assert!(names.contains(&"submit"));
//! ```

// These clippy lints are intentionally allowed:
// - missing_const_for_fn: some functions may gain runtime logic later
// - unused_async: command handlers maintain consistent async signatures
#![allow(clippy::missing_const_for_fn)]
#![allow(clippy::unused_async)]

pub mod command;
pub mod commands;
pub mod console;
pub mod payload;

pub use command::{resolve_settings, CommandRegistry, VortexCommand};
pub use console::ConsoleView;
