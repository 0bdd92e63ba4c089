use crate::CoreError;

/// Accepts or rejects a line of user input; the error is shown to the user.
pub type Validator<'a> = &'a dyn Fn(&str) -> Result<(), CoreError>;

/// Interactive input used by the session.
pub trait Prompter {
    /// Single choice from `options`. `Ok(None)` means the user dismissed the
    /// menu without choosing.
    fn select(&mut self, label: &str, options: &[&str]) -> Result<Option<usize>, CoreError>;

    /// Free text, re-asked until `validate` accepts it. Fails with
    /// [`CoreError::Prompt`] if the user aborts.
    fn prompt_text(&mut self, label: &str, validate: Validator<'_>) -> Result<String, CoreError>;
}
