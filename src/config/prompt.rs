//! Interactive answers for fields not given on the command line.
use std::io::IsTerminal as _;

use dialoguer::Input;
use dialoguer::theme::ColorfulTheme;

use super::Field;
use crate::error::ConfigError;

/// Source of interactive answers.
///
/// `ask` returns `Ok(None)` when no answer is available (non-interactive
/// session), in which case the caller uses `default` silently.  An empty
/// answer also means "use the default".
#[cfg_attr(test, mockall::automock)]
pub trait Prompter: Send + Sync {
    /// Ask for `field`, showing `default` as the suggested value.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Prompt`] if the terminal cannot be read.
    fn ask(&self, field: Field, default: &str) -> Result<Option<String>, ConfigError>;
}

/// Prompts on the controlling terminal using `dialoguer`.
#[derive(Debug, Default, Clone, Copy)]
pub struct TerminalPrompter;

impl Prompter for TerminalPrompter {
    fn ask(&self, field: Field, default: &str) -> Result<Option<String>, ConfigError> {
        let theme = ColorfulTheme::default();
        let mut input = Input::<String>::with_theme(&theme)
            .with_prompt(field.label())
            .allow_empty(true);
        if !default.is_empty() {
            input = input.default(default.to_string());
        }
        let answer = input.interact_text().map_err(|e| ConfigError::Prompt {
            field: field.key(),
            message: e.to_string(),
        })?;
        Ok(Some(answer))
    }
}

/// Never prompts; every field falls back to its default.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoPrompt;

impl Prompter for NoPrompt {
    fn ask(&self, _field: Field, _default: &str) -> Result<Option<String>, ConfigError> {
        Ok(None)
    }
}

/// Whether both stdin and stdout are attached to a terminal.
#[must_use]
pub fn is_interactive() -> bool {
    std::io::stdin().is_terminal() && std::io::stdout().is_terminal()
}

/// Pick the prompter for this session.
///
/// Returns a [`TerminalPrompter`] only when prompting is allowed and a
/// terminal is attached; otherwise [`NoPrompt`].
#[must_use]
pub fn for_session(allow_prompts: bool) -> Box<dyn Prompter> {
    if allow_prompts && is_interactive() {
        Box::new(TerminalPrompter)
    } else {
        Box::new(NoPrompt)
    }
}
