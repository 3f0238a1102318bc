//! Built-in commands.
//!
//! Each command implements the [`VortexCommand`](crate::command::VortexCommand)
//! trait.

pub mod check;
pub mod submit;
pub mod validate;

pub use check::CheckCommand;
pub use submit::SubmitCommand;
pub use validate::ValidateCommand;

use crate::command::CommandRegistry;

/// Registers all built-in commands into the given registry.
pub fn register_builtin_commands(registry: &mut CommandRegistry) {
    registry.register(Box::new(CheckCommand));
    registry.register(Box::new(ValidateCommand));
    registry.register(Box::new(SubmitCommand));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_commands_registered() {
        let mut registry = CommandRegistry::new();
        register_builtin_commands(&mut registry);
        assert_eq!(registry.list_commands(), vec!["check", "submit", "validate"]);
    }
}
