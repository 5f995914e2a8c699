//! Command-line surface.

use clap::Parser;

use cl_interpreter::Provider;

/// Ask questions about your AWS bill in plain English.
#[derive(Debug, Parser)]
#[command(name = "costlens", version, about)]
pub struct Cli {
    /// The cost question, e.g. "what did I spend on EC2 last month?".
    /// Prompted for interactively when omitted.
    #[arg(trailing_var_arg = true)]
    pub query: Vec<String>,

    /// Re-prompt for the selected provider's API key and save it.
    #[arg(long)]
    pub edit_api_key: bool,

    /// LLM provider used to interpret the question (perplexity or gemini).
    /// Defaults to the last-used provider from the config file.
    #[arg(long = "llm", value_name = "PROVIDER")]
    pub llm: Option<Provider>,

    /// AWS region override for the Cost Explorer call.
    #[arg(long, value_name = "REGION")]
    pub region: Option<String>,
}

impl Cli {
    /// The query words joined back into one question, if any were given.
    pub fn query_text(&self) -> Option<String> {
        if self.query.is_empty() {
            None
        } else {
            Some(self.query.join(" "))
        }
    }
}
