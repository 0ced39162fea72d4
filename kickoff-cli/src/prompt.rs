//! Interactive input collection.

use anyhow::Result;
use dialoguer::theme::ColorfulTheme;
use dialoguer::{Confirm, Input};

/// Validation hook for free-text answers; `Err` carries the message shown
/// before asking again.
pub type Validator<'a> = &'a dyn Fn(&str) -> Result<(), String>;

/// Collects answers from the operator.
pub trait Prompter {
    /// Ask for free text until `validate` accepts it. An empty answer takes
    /// `default` when one is given.
    fn input(&mut self, prompt: &str, default: Option<&str>, validate: Validator<'_>)
        -> Result<String>;

    fn confirm(&mut self, prompt: &str, default: bool) -> Result<bool>;
}

/// [`Prompter`] backed by the controlling terminal.
#[derive(Default)]
pub struct TerminalPrompter {
    theme: ColorfulTheme,
}

impl Prompter for TerminalPrompter {
    fn input(
        &mut self,
        prompt: &str,
        default: Option<&str>,
        validate: Validator<'_>,
    ) -> Result<String> {
        let mut input = Input::<String>::with_theme(&self.theme).with_prompt(prompt);
        if let Some(default) = default {
            input = input.default(default.to_string());
        }
        let answer = input
            .validate_with(|value: &String| validate(value.as_str()))
            .interact_text()?;
        Ok(answer)
    }

    fn confirm(&mut self, prompt: &str, default: bool) -> Result<bool> {
        let answer = Confirm::with_theme(&self.theme)
            .with_prompt(prompt)
            .default(default)
            .interact()?;
        Ok(answer)
    }
}
