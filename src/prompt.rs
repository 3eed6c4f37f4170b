use dialoguer::{Input, theme::ColorfulTheme};

/// Abstraction over a string input prompt.
///
/// Implementors define how string input is collected from the user,
/// including any styling or interactivity. This trait enables testability
/// by decoupling user input from the logic that consumes it.
pub trait StringPrompter {
    /// Prompt the user for a string input.
    ///
    /// # Parameters
    /// - `prompt`: The message shown to the user.
    /// - `default`: Default value if the user presses Enter without input.
    ///
    /// # Returns
    /// `Ok(String)` if input is successfully collected, or an `Err(String)` describing the failure.
    fn prompt(&mut self, prompt: &str, default: &str) -> Result<String, String>;
}

/// Default implementation of `StringPrompter` using `dialoguer::Input`.
///
/// Uses the `ColorfulTheme` for user-friendly styling.
pub struct DialoguerStringPrompter;

impl StringPrompter for DialoguerStringPrompter {
    fn prompt(&mut self, prompt: &str, default: &str) -> Result<String, String> {
        let theme = ColorfulTheme::default();
        let input = Input::<String>::with_theme(&theme)
            .with_prompt(prompt)
            .default(default.to_string());
        match input.interact_text() {
            Ok(v) => Ok(v),
            Err(e) => Err(e.to_string()),
        }
    }
}

/// Ask the user whether to proceed with the history rewrite.
///
/// Poses the yes/no question with a default of `no`, so pressing Enter
/// without typing cancels. The raw answer is returned for the caller to
/// interpret; only a typed `yes` (in any case) should be taken as consent.
///
/// # Parameters
/// - `prompter`: A mutable reference to a `StringPrompter` implementation.
///
/// # Returns
/// - `Ok(String)` containing the user's answer (or the `no` default).
/// - `Err(String)` if input failed.
pub fn ask_proceed<P: StringPrompter>(prompter: &mut P) -> Result<String, String> {
    let prompt = "Do you want to proceed? (yes/no)";
    prompter.prompt(prompt, "no")
}

#[cfg(test)]
mod tests {
    use super::*;

    struct MockStringPrompter {
        pub response: Result<String, String>,
        pub expected_prompt: String,
        pub expected_default: String,
    }

    impl StringPrompter for MockStringPrompter {
        fn prompt(&mut self, prompt: &str, default: &str) -> Result<String, String> {
            assert_eq!(prompt, self.expected_prompt);
            assert_eq!(default, self.expected_default);
            self.response.clone()
        }
    }

    #[test]
    fn test_ask_proceed_returns_user_input() {
        let mut prompter = MockStringPrompter {
            response: Ok("yes".to_string()),
            expected_prompt: "Do you want to proceed? (yes/no)".to_string(),
            expected_default: "no".to_string(),
        };
        let result = ask_proceed(&mut prompter);
        assert_eq!(result.unwrap(), "yes");
    }

    #[test]
    fn test_ask_proceed_defaults_to_no() {
        let mut prompter = MockStringPrompter {
            response: Ok("no".to_string()),
            expected_prompt: "Do you want to proceed? (yes/no)".to_string(),
            expected_default: "no".to_string(),
        };
        let result = ask_proceed(&mut prompter);
        assert_eq!(result.unwrap(), "no");
    }

    #[test]
    fn test_ask_proceed_returns_error() {
        let mut prompter = MockStringPrompter {
            response: Err("input failed".to_string()),
            expected_prompt: "Do you want to proceed? (yes/no)".to_string(),
            expected_default: "no".to_string(),
        };
        let result = ask_proceed(&mut prompter);
        assert!(result.is_err());
    }
}
