//! Invocation pipeline: credential → interpret → validate → fetch → render.
//!
//! Strictly sequential; every step propagates its error, so the cost fetch
//! is unreachable without a fully validated query.

use anyhow::Result;

use cl_cost_explorer::CostClient;
use cl_interpreter::Interpreter;

use crate::cli::Cli;
use crate::config::CliConfig;
use crate::prompt;

pub async fn run(cli: Cli) -> Result<()> {
    let config_path = CliConfig::default_path()?;
    let mut config = CliConfig::load(&config_path)?;

    let provider = config.resolve_provider(cli.llm);

    if cli.edit_api_key {
        let key = prompt::api_key(provider)?;
        config.set_api_key(provider, key);
        config.save(&config_path)?;
        println!("{} API key updated.", provider.display_name());
        return Ok(());
    }

    let query_text = match cli.query_text() {
        Some(text) => text,
        None => prompt::query_text()?,
    };

    // Credential is read once per invocation and handed to the backend for
    // the duration of this call only.
    let api_key = match config.api_key_for(provider) {
        Some(key) => key.to_string(),
        None => {
            let key = prompt::api_key(provider)?;
            config.set_api_key(provider, key.clone());
            config.save(&config_path)?;
            println!("{} API key saved.", provider.display_name());
            key
        }
    };

    println!("Interpreting with {}: \"{query_text}\"", provider.display_name());

    let interpreter = Interpreter::new(provider, api_key);
    let structured = interpreter.interpret(&query_text).await?;

    let region = match cli.region.clone().or_else(|| config.aws_region.clone()) {
        Some(region) => region,
        None => {
            let region = prompt::region()?;
            config.aws_region = Some(region.clone());
            config.save(&config_path)?;
            region
        }
    };

    config.last_provider = Some(provider.as_str().to_string());
    config.save(&config_path)?;

    let client = CostClient::new(Some(region)).await;
    let report = client.fetch(&structured).await?;

    print!("{}", report.render(&structured.service));
    Ok(())
}
