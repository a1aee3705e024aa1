use dialoguer::{theme::ColorfulTheme, Input, Select};

use crate::cli::CliError;

/// Prompt the user for free-form text input; empty input is allowed.
pub fn prompt_text(theme: &ColorfulTheme, prompt: &str) -> Result<String, CliError> {
    Input::<String>::with_theme(theme)
        .with_prompt(prompt)
        .allow_empty(true)
        .interact_text()
        .map_err(CliError::from)
}

/// Present a fixed list of options and return the chosen index.
pub fn select(theme: &ColorfulTheme, prompt: &str, items: &[&str]) -> Result<usize, CliError> {
    Select::with_theme(theme)
        .with_prompt(prompt)
        .items(items)
        .default(0)
        .interact()
        .map_err(CliError::from)
}
