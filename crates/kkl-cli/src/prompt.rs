//! Terminal prompts backed by `dialoguer`.

use console::Term;
use dialoguer::{Confirm, Input, Select, theme::ColorfulTheme};

use kkl_core::{
    application::{ApplicationError, ports::Prompter},
    error::{ScaffoldError, ScaffoldResult},
};

fn map_dialoguer_err(e: dialoguer::Error) -> ScaffoldError {
    ApplicationError::PromptFailed {
        reason: e.to_string(),
    }
    .into()
}

/// Asks questions on stderr so stdout stays clean for output.
pub struct DialoguerPrompter {
    term: Term,
    theme: ColorfulTheme,
}

impl DialoguerPrompter {
    pub fn new() -> Self {
        Self {
            term: Term::stderr(),
            theme: ColorfulTheme::default(),
        }
    }
}

impl Default for DialoguerPrompter {
    fn default() -> Self {
        Self::new()
    }
}

impl Prompter for DialoguerPrompter {
    fn confirm(&self, question: &str, default: bool) -> ScaffoldResult<bool> {
        Confirm::with_theme(&self.theme)
            .with_prompt(question)
            .default(default)
            .interact_on(&self.term)
            .map_err(map_dialoguer_err)
    }

    fn input(&self, question: &str, default: &str) -> ScaffoldResult<String> {
        let input = Input::<String>::with_theme(&self.theme).with_prompt(question);

        // An empty default would render as `()`; accept blank input instead.
        if default.is_empty() {
            input
                .allow_empty(true)
                .interact_text_on(&self.term)
                .map_err(map_dialoguer_err)
        } else {
            input
                .default(default.to_owned())
                .interact_text_on(&self.term)
                .map_err(map_dialoguer_err)
        }
    }

    fn select(&self, question: &str, options: &[String], default: usize) -> ScaffoldResult<usize> {
        Select::with_theme(&self.theme)
            .with_prompt(question)
            .items(options)
            .default(default)
            .interact_on(&self.term)
            .map_err(map_dialoguer_err)
    }
}
