//! Interactive prompts for credentials, region, and the query text.
//!
//! All terminal interaction lives here so the interpreter and fetch layers
//! stay non-blocking and prompt-free.

use anyhow::Result;
use dialoguer::{Input, Password};

use cl_interpreter::Provider;

/// Prompt for a provider API key without echoing it. Re-prompts until the
/// input is non-empty.
pub fn api_key(provider: Provider) -> Result<String> {
    loop {
        let key = Password::new()
            .with_prompt(format!("Enter your {} API key", provider.display_name()))
            .interact()?;
        let key = key.trim().to_string();
        if !key.is_empty() {
            return Ok(key);
        }
        println!("API key cannot be empty.");
    }
}

/// Prompt for the default AWS region.
pub fn region() -> Result<String> {
    let region: String = Input::new()
        .with_prompt("Enter your default AWS region")
        .validate_with(|input: &String| {
            if input.trim().is_empty() {
                Err("default region required")
            } else {
                Ok(())
            }
        })
        .interact_text()?;
    Ok(region.trim().to_string())
}

/// Prompt for the cost question when none was given on the command line.
pub fn query_text() -> Result<String> {
    let text: String = Input::new()
        .with_prompt("What do you want to know about your costs?")
        .validate_with(|input: &String| {
            if input.trim().is_empty() {
                Err("query cannot be empty")
            } else {
                Ok(())
            }
        })
        .interact_text()?;
    Ok(text.trim().to_string())
}
