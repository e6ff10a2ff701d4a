//! Interactive prompts for values not supplied on the command line.

use anyhow::Result;
use dialoguer::{theme::ColorfulTheme, Input};

/// Use the provided value, or prompt for one when absent.
///
/// Prompted input is re-asked until non-empty; a provided value is only
/// trimmed here and validated by the filter constructor.
pub fn resolve(provided: Option<String>, prompt: &str) -> Result<String> {
    match provided {
        Some(value) => Ok(value.trim().to_string()),
        None => ask(prompt),
    }
}

fn ask(prompt: &str) -> Result<String> {
    let value: String = Input::with_theme(&ColorfulTheme::default())
        .with_prompt(prompt)
        .validate_with(|input: &String| {
            if input.trim().is_empty() {
                Err("value must not be empty")
            } else {
                Ok(())
            }
        })
        .interact_text()?;

    Ok(value.trim().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn provided_value_is_trimmed() {
        let value = resolve(Some("  GB \n".to_string()), "unused").unwrap();
        assert_eq!(value, "GB");
    }
}
