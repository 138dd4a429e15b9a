// Include commands module directly from commands.rs
#[path = "commands.rs"]
pub mod commands;

// Re-export the command builder for convenience
pub use commands::command_argument_builder;
