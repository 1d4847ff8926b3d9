//! SOLPOWER library exports for testing

use clap::ValueEnum;

pub mod advice;
pub mod core;
pub mod tui;

#[cfg(test)]
pub mod test_support;

#[derive(Clone, Debug, Default, ValueEnum)]
pub enum Provider {
    #[default]
    Gemini,
    OpenRouter,
}

impl Provider {
    /// Name used in config files and env vars.
    pub fn config_name(&self) -> &'static str {
        match self {
            Provider::Gemini => "gemini",
            Provider::OpenRouter => "openrouter",
        }
    }
}
