//! User interface and interaction
//!
//! This module contains all components related to user interaction,
//! including CLI parsing, the interactive menu, live output, progress
//! reporting and shell completion generation.

pub mod cli;
pub mod color;
pub mod completion;
pub mod menu;
pub mod output;
pub mod progress;
pub mod prompt;
pub mod session;
pub mod table;

// Re-export commonly used items
pub use cli::{Cli, Commands, cli_to_config};
pub use completion::print_completions;
pub use menu::{Menu, MenuActions, MenuState};
pub use progress::ProgressReporter;
pub use prompt::{LinePrompt, Prompt, TerminalPrompt, stdin_prompt};
pub use session::{InteractiveSession, OutputSettings};
