use clap::ValueEnum;

pub mod commands;
pub mod style;
pub mod utils;

// Re-export gpml for external use
pub use gpml;

#[derive(ValueEnum, Debug, Clone, Copy)]
pub enum OutputFormat {
    Text,
    Json,
}
