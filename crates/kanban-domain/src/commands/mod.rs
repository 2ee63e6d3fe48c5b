use crate::EntityStore;

pub mod column_commands;
pub mod task_commands;

pub use column_commands::*;
pub use task_commands::*;

/// Trait for board intents that mutate the entity store
/// Commands are deterministic: fresh ids are allocated before a command is built
pub trait Command: Send + Sync {
    /// Execute this command, returning whether the board changed
    fn execute(&self, context: &mut CommandContext) -> bool;

    /// Human-readable description of what this command does
    fn description(&self) -> String;
}

/// Context passed to commands for mutation
pub struct CommandContext<'a> {
    pub store: &'a mut EntityStore,
}
