use dialoguer::{theme::ColorfulTheme, Input, Select};
use drgsync_core::{CoreError, Prompter, Validator};

/// Terminal prompts backed by dialoguer.
#[derive(Default)]
pub struct DialoguerPrompter {
    theme: ColorfulTheme,
}

impl DialoguerPrompter {
    pub fn new() -> Self {
        Self {
            theme: ColorfulTheme::default(),
        }
    }
}

impl Prompter for DialoguerPrompter {
    fn select(&mut self, label: &str, options: &[&str]) -> Result<Option<usize>, CoreError> {
        Select::with_theme(&self.theme)
            .with_prompt(label)
            .items(options)
            .default(0)
            .interact_opt()
            .map_err(|e| CoreError::Prompt(e.to_string()))
    }

    fn prompt_text(&mut self, label: &str, validate: Validator<'_>) -> Result<String, CoreError> {
        Input::<String>::with_theme(&self.theme)
            .with_prompt(label)
            .validate_with(|s: &String| validate(s).map_err(|e| e.to_string()))
            .interact_text()
            .map_err(|e| CoreError::Prompt(e.to_string()))
    }
}
